//! Oxide editor bridge
//!
//! GUI-side glue for the Oxide degradation plugin: bidirectional parameter
//! sync between the host's parameter tree and the web-rendered control
//! surface, a 60 Hz visualizer feed, the web-asset resource provider and the
//! license-activation bridge. The DSP engine, parameter tree, browser engine
//! and license client stay behind boundary traits.

pub mod activation;
pub mod api;
pub mod config;
pub mod dispatch;
mod editor;
pub mod engine;
pub mod params;
pub mod view;
pub mod visualizer;

pub use activation::{ActivationInfo, ActivationProvider, ActivationStatus, NoopActivation};
pub use config::EditorConfig;
pub use dispatch::{UiDispatcher, UiHandle};
pub use editor::{Editor, EditorContext};
pub use engine::{EngineTelemetry, MeterFrame, TelemetryCell};
pub use params::{ParamAttachment, ParamKind, ParamRelay, ParamSpec, PARAMS};
pub use view::{Resource, ResourceProvider, ViewBackend, WebView, WebViewBuilder};
pub use visualizer::{frame_interval, VisualizerFeed, FRAME_RATE_HZ};
