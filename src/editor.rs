//! Editor assembly
//!
//! Wires the whole bridge in the order the pieces require: relays from the
//! registry, then the view (relays registered, listeners installed), then
//! attachments, then the visualizer feed.

use crate::activation::{ActivationBridge, ActivationProvider};
use crate::api::events;
use crate::config::EditorConfig;
use crate::dispatch::UiDispatcher;
use crate::engine::EngineTelemetry;
use crate::params::{ParamAttachment, ParamRelay, ParamTree, PARAMS};
use crate::view::{ViewBackend, WebView};
use crate::visualizer::VisualizerFeed;
use std::sync::Arc;

/// Shared handles to the processor-owned services the editor bridges.
///
/// All of these outlive the editor; the editor never owns them.
pub struct EditorContext {
    pub params: Arc<dyn ParamTree>,
    pub engine: Arc<dyn EngineTelemetry>,
    pub activation: Arc<dyn ActivationProvider>,
}

/// The plugin editor: one instance per open GUI.
pub struct Editor {
    // Field order is the teardown order: attachments and relays must drop
    // before the view they feed.
    attachments: Vec<ParamAttachment>,
    relays: Vec<Arc<ParamRelay>>,
    feed: VisualizerFeed,
    dispatcher: UiDispatcher,
    activation: Arc<ActivationBridge>,
    view: Arc<WebView>,
    config: EditorConfig,
}

impl Editor {
    /// Build the editor against a live backend view.
    ///
    /// Construction order is the invariant the original layout encodes:
    /// every relay is registered with the view configuration before the view
    /// is built, and attachments are only created afterwards so the
    /// initial-value sync lands in a live view.
    pub fn new(ctx: EditorContext, backend: Arc<dyn ViewBackend>, config: EditorConfig) -> Self {
        let relays: Vec<Arc<ParamRelay>> = PARAMS
            .iter()
            .map(|spec| Arc::new(ParamRelay::new(spec.key, spec.kind)))
            .collect();

        let dispatcher = UiDispatcher::new();
        let activation = Arc::new(ActivationBridge::new(
            ctx.activation.clone(),
            dispatcher.handle(),
        ));

        let mut builder = WebView::builder().with_resource_root(config.resource_dir());
        for relay in &relays {
            builder = builder.with_relay(relay.clone());
        }

        let bridge = activation.clone();
        builder = builder.with_event_listener(events::GET_ACTIVATION_STATUS, move |view, _| {
            bridge.send_state(view);
        });
        let bridge = activation.clone();
        builder = builder.with_event_listener(events::ACTIVATE_LICENSE, move |view, payload| {
            let code = payload
                .get("code")
                .and_then(|v| v.as_str())
                .unwrap_or_default();
            bridge.request_activate(view, code);
        });
        let bridge = activation.clone();
        builder = builder.with_event_listener(events::DEACTIVATE_LICENSE, move |view, _| {
            bridge.request_deactivate(view);
        });

        let view = builder.build(backend);

        let attachments: Vec<ParamAttachment> = relays
            .iter()
            .filter_map(|relay| match ctx.params.param(relay.key()) {
                Some(param) => Some(ParamAttachment::new(param, relay.clone())),
                None => {
                    log::warn!(
                        "parameter `{}` missing from tree; relay left unattached",
                        relay.key()
                    );
                    None
                }
            })
            .collect();

        let feed = VisualizerFeed::new(ctx.engine.clone(), &view);

        Self {
            attachments,
            relays,
            feed,
            dispatcher,
            activation,
            view,
            config,
        }
    }

    /// One UI-loop iteration: run queued UI tasks, then tick the visualizer.
    ///
    /// The host calls this from its UI-thread scheduling loop at
    /// [`FRAME_RATE_HZ`](crate::visualizer::FRAME_RATE_HZ).
    pub fn on_frame(&self) {
        self.dispatcher.pump();
        self.feed.tick();
    }

    /// Run queued UI tasks without ticking the feed; returns how many ran.
    pub fn pump_ui(&self) -> usize {
        self.dispatcher.pump()
    }

    pub fn view(&self) -> &Arc<WebView> {
        &self.view
    }

    /// Relay for `key`, if it is in the registry.
    pub fn relay(&self, key: &str) -> Option<&Arc<ParamRelay>> {
        self.relays.iter().find(|relay| relay.key() == key)
    }

    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    pub fn activation(&self) -> &Arc<ActivationBridge> {
        &self.activation
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}
