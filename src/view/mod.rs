//! Browser view boundary - backend trait, editor-side facade, resources

mod resources;
mod webview;

pub use resources::{mime_for, Resource, ResourceProvider, RESOURCE_ROOT};
pub use webview::{EventHandler, EventSink, ViewBackend, WebView, WebViewBuilder};
