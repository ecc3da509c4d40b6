//! Host-facing side of one bridged parameter.

use super::relay::ParamRelay;
use super::tree::{ObserverId, ParamHandle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Binds exactly one host parameter to exactly one relay.
///
/// Host-originated changes (automation, preset load) flow to the relay and
/// on to the browser. Browser edits arriving through the relay are applied
/// to the parameter exactly once; the resulting change notification is
/// suppressed so the edit is never echoed back to the browser.
pub struct ParamAttachment {
    param: Arc<dyn ParamHandle>,
    relay: Arc<ParamRelay>,
    observer: ObserverId,
}

impl ParamAttachment {
    /// Attach `param` to `relay` and push the current host value to the view.
    ///
    /// # Panics
    ///
    /// Panics if the relay has not been registered with a built view yet.
    /// Attaching first would lose the initial-value sync, so the ordering is
    /// a construction-time invariant rather than a runtime error.
    pub fn new(param: Arc<dyn ParamHandle>, relay: Arc<ParamRelay>) -> Self {
        assert!(
            relay.is_connected(),
            "relay `{}` must be registered with a web view before attaching",
            relay.key()
        );

        let applying = Arc::new(AtomicBool::new(false));

        // Host -> browser. Skipped while the attachment itself is writing.
        let observer = {
            let relay = relay.clone();
            let applying = applying.clone();
            param.observe(Box::new(move |value| {
                if applying.load(Ordering::Acquire) {
                    return;
                }
                relay.push_to_view(value);
            }))
        };

        // Browser -> host, applied exactly once under the echo guard.
        {
            let param = param.clone();
            relay.set_edit_sink(Box::new(move |value| {
                applying.store(true, Ordering::Release);
                param.set_normalized(value);
                applying.store(false, Ordering::Release);
            }));
        }

        // Initial sync: the browser starts from the authoritative value.
        relay.push_to_view(param.normalized());

        Self {
            param,
            relay,
            observer,
        }
    }

    pub fn key(&self) -> &str {
        self.relay.key()
    }
}

impl Drop for ParamAttachment {
    fn drop(&mut self) {
        self.param.unobserve(self.observer);
        self.relay.clear_edit_sink();
    }
}
