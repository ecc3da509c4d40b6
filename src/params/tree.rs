//! Boundary traits toward the host's parameter-tree subsystem.

use std::sync::Arc;

/// Change-notification callback; receives the new normalized value.
pub type ParamObserver = Box<dyn Fn(f64) + Send + Sync>;

/// Token returned by [`ParamHandle::observe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

impl ObserverId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// A mutable handle to one host-owned parameter.
///
/// Values are normalized to 0.0..=1.0; implementations clamp on write.
/// `set_normalized` notifies every registered observer, including for writes
/// the observer itself triggered.
pub trait ParamHandle: Send + Sync {
    /// Stable parameter key.
    fn key(&self) -> &str;

    /// Current normalized value.
    fn normalized(&self) -> f64;

    /// Set the normalized value and notify observers.
    fn set_normalized(&self, value: f64);

    /// Register a change observer.
    fn observe(&self, observer: ParamObserver) -> ObserverId;

    /// Remove a previously registered observer.
    fn unobserve(&self, id: ObserverId);
}

/// Lookup-by-key into the host's parameter tree.
pub trait ParamTree: Send + Sync {
    fn param(&self, key: &str) -> Option<Arc<dyn ParamHandle>>;
}
