//! Visualizer feed
//!
//! Samples the engine's metering snapshot and pushes one `visualizerData`
//! event per tick while the view is visible. Ticks are driven by the UI
//! thread's scheduling loop (see [`Editor::on_frame`](crate::Editor::on_frame));
//! there is no internal timer thread and no backlog while hidden.

use crate::api::dto::{to_payload, VisualizerDataDto};
use crate::api::events;
use crate::engine::EngineTelemetry;
use crate::view::WebView;
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Target tick rate of the feed.
pub const FRAME_RATE_HZ: u32 = 60;

/// Interval between ticks at [`FRAME_RATE_HZ`].
pub const fn frame_interval() -> Duration {
    Duration::from_micros(1_000_000 / FRAME_RATE_HZ as u64)
}

/// One-directional metering pipe: engine -> browser.
pub struct VisualizerFeed {
    engine: Arc<dyn EngineTelemetry>,
    view: Weak<WebView>,
}

impl VisualizerFeed {
    pub fn new(engine: Arc<dyn EngineTelemetry>, view: &Arc<WebView>) -> Self {
        Self {
            engine,
            view: Arc::downgrade(view),
        }
    }

    /// Sample one frame and emit it.
    ///
    /// No-op (returning `false`) when the view is gone or hidden; the
    /// sampling read never blocks on the audio thread and tolerates a
    /// stale-by-one-frame snapshot.
    pub fn tick(&self) -> bool {
        let Some(view) = self.view.upgrade() else {
            return false;
        };
        if !view.is_visible() {
            return false;
        }

        let dto = VisualizerDataDto::from(self.engine.meter_frame());
        view.emit_if_visible(events::VISUALIZER_DATA, &to_payload(&dto))
    }
}
