//! In-memory parameter store
//!
//! Host-agnostic [`ParamTree`] implementation used for standalone runs and
//! tests. Values live in an atomic bit-cast cell so reads stay lock-free for
//! any thread; the observer list is only touched on subscribe/notify.

use super::tree::{ObserverId, ParamHandle, ParamObserver, ParamTree};
use super::{default_value, PARAMS};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One atomic-backed parameter.
pub struct MemoryParam {
    key: String,
    value: AtomicU64,
    observers: RwLock<Vec<(ObserverId, ParamObserver)>>,
    next_observer: AtomicU64,
}

impl MemoryParam {
    pub fn new(key: impl Into<String>, initial: f64) -> Arc<Self> {
        Arc::new(Self {
            key: key.into(),
            value: AtomicU64::new(initial.clamp(0.0, 1.0).to_bits()),
            observers: RwLock::new(Vec::new()),
            next_observer: AtomicU64::new(0),
        })
    }
}

impl ParamHandle for MemoryParam {
    fn key(&self) -> &str {
        &self.key
    }

    fn normalized(&self) -> f64 {
        f64::from_bits(self.value.load(Ordering::Acquire))
    }

    fn set_normalized(&self, value: f64) {
        let value = value.clamp(0.0, 1.0);
        self.value.store(value.to_bits(), Ordering::Release);
        for (_, observer) in self.observers.read().iter() {
            observer(value);
        }
    }

    fn observe(&self, observer: ParamObserver) -> ObserverId {
        let id = ObserverId::from_raw(self.next_observer.fetch_add(1, Ordering::Relaxed));
        self.observers.write().push((id, observer));
        id
    }

    fn unobserve(&self, id: ObserverId) {
        self.observers.write().retain(|(oid, _)| *oid != id);
    }
}

/// Key-addressed collection of [`MemoryParam`]s.
pub struct MemoryParamTree {
    params: RwLock<HashMap<String, Arc<MemoryParam>>>,
}

impl MemoryParamTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self {
            params: RwLock::new(HashMap::new()),
        }
    }

    /// A tree seeded with every registry parameter at its default value.
    pub fn with_registry() -> Self {
        let tree = Self::new();
        for spec in PARAMS.iter() {
            tree.insert(MemoryParam::new(spec.key, default_value(spec.kind)));
        }
        tree
    }

    /// Insert or replace a parameter.
    pub fn insert(&self, param: Arc<MemoryParam>) {
        self.params.write().insert(param.key().to_owned(), param);
    }
}

impl Default for MemoryParamTree {
    fn default() -> Self {
        Self::with_registry()
    }
}

impl ParamTree for MemoryParamTree {
    fn param(&self, key: &str) -> Option<Arc<dyn ParamHandle>> {
        self.params
            .read()
            .get(key)
            .cloned()
            .map(|p| p as Arc<dyn ParamHandle>)
    }
}
