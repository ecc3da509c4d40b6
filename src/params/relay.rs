//! Browser-facing side of one bridged parameter.

use super::ParamKind;
use crate::api::dto::{to_payload, ParamStateDto};
use crate::api::events;
use crate::view::EventSink;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

type EditSink = Box<dyn Fn(f64) + Send + Sync>;

/// Relay for one parameter key.
///
/// Created before the browser view and wired to it at view build time; the
/// attachment plugs in the host-facing edit sink afterwards. The relay caches
/// the last value crossing it in either direction, which is what the browser
/// side reads back.
pub struct ParamRelay {
    key: &'static str,
    kind: ParamKind,
    value: AtomicU64,
    sink: RwLock<Option<EventSink>>,
    edit_sink: RwLock<Option<EditSink>>,
}

impl ParamRelay {
    pub fn new(key: &'static str, kind: ParamKind) -> Self {
        Self {
            key,
            kind,
            value: AtomicU64::new(0.0f64.to_bits()),
            sink: RwLock::new(None),
            edit_sink: RwLock::new(None),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Last value seen on the browser side of the bridge.
    pub fn current_value(&self) -> f64 {
        f64::from_bits(self.value.load(Ordering::Acquire))
    }

    /// Whether the relay has been wired into a built view.
    pub fn is_connected(&self) -> bool {
        self.sink.read().is_some()
    }

    /// Wire the relay to a built view's event sink.
    pub(crate) fn connect(&self, sink: EventSink) {
        *self.sink.write() = Some(sink);
    }

    /// Install the host-facing edit sink (one attachment per relay).
    pub(crate) fn set_edit_sink(&self, sink: EditSink) {
        *self.edit_sink.write() = Some(sink);
    }

    pub(crate) fn clear_edit_sink(&self) {
        *self.edit_sink.write() = None;
    }

    /// Host -> browser: cache the value and push a `paramState` event.
    ///
    /// Returns whether the event reached a visible view; the cached value is
    /// updated either way so the browser picks it up on its next read.
    pub(crate) fn push_to_view(&self, value: f64) -> bool {
        let value = self.normalize(value);
        self.value.store(value.to_bits(), Ordering::Release);

        let sink = self.sink.read();
        match sink.as_ref() {
            Some(sink) => {
                let dto = ParamStateDto {
                    key: self.key.to_owned(),
                    value,
                };
                sink.emit_if_visible(events::PARAM_STATE, &to_payload(&dto))
            }
            None => false,
        }
    }

    /// Browser -> host: cache the value and forward it to the attachment.
    pub(crate) fn handle_remote_edit(&self, value: f64) {
        let value = self.normalize(value);
        self.value.store(value.to_bits(), Ordering::Release);

        let edit_sink = self.edit_sink.read();
        match edit_sink.as_ref() {
            Some(sink) => sink(value),
            None => log::debug!("edit for `{}` dropped: no attachment", self.key),
        }
    }

    fn normalize(&self, value: f64) -> f64 {
        let value = value.clamp(0.0, 1.0);
        match self.kind {
            ParamKind::Continuous => value,
            ParamKind::Toggle => {
                if value >= 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}
