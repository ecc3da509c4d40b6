//! Editor-side facade over the embedded browser view.
//!
//! The rendering engine itself lives behind [`ViewBackend`]; this module owns
//! everything the editor layers on top: relay registration, named event
//! listeners, guarded emission and incoming-event routing.

use super::resources::{Resource, ResourceProvider};
use crate::api::dto::ParamEditDto;
use crate::api::events;
use crate::params::ParamRelay;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Weak};

/// Boundary trait toward the browser-rendering engine.
pub trait ViewBackend: Send + Sync {
    /// Whether the page is currently visible on screen.
    fn is_visible(&self) -> bool;

    /// Deliver a named event with a JSON payload to the page.
    ///
    /// Only called while the page is visible; emission guards live on the
    /// editor side.
    fn post_event(&self, name: &str, payload: &Value);
}

/// Cloneable emitting handle held by relays and feeds.
///
/// Holds the backend weakly: once the view is torn down every emission
/// becomes a silent no-op.
#[derive(Clone)]
pub struct EventSink {
    backend: Weak<dyn ViewBackend>,
}

impl EventSink {
    fn new(backend: &Arc<dyn ViewBackend>) -> Self {
        Self {
            backend: Arc::downgrade(backend),
        }
    }

    /// Emit iff the view is alive and visible; returns whether it was.
    pub fn emit_if_visible(&self, name: &str, payload: &Value) -> bool {
        let Some(backend) = self.backend.upgrade() else {
            return false;
        };
        if !backend.is_visible() {
            return false;
        }
        backend.post_event(name, payload);
        true
    }
}

/// Handler for one named incoming event.
pub type EventHandler = Box<dyn Fn(&WebView, &Value) + Send + Sync>;

/// The browser view as the editor sees it.
pub struct WebView {
    self_ref: Weak<WebView>,
    backend: Arc<dyn ViewBackend>,
    relays: HashMap<&'static str, Arc<ParamRelay>>,
    listeners: HashMap<&'static str, EventHandler>,
    resources: ResourceProvider,
}

impl WebView {
    pub fn builder() -> WebViewBuilder {
        WebViewBuilder::new()
    }

    pub fn is_visible(&self) -> bool {
        self.backend.is_visible()
    }

    /// Emit iff the view is visible; returns whether it was.
    pub fn emit_if_visible(&self, name: &str, payload: &Value) -> bool {
        if !self.backend.is_visible() {
            return false;
        }
        self.backend.post_event(name, payload);
        true
    }

    /// A weak handle for deferred work that must not keep the view alive.
    pub fn downgrade(&self) -> Weak<WebView> {
        self.self_ref.clone()
    }

    /// An emitting handle that does not keep the view alive.
    pub fn event_sink(&self) -> EventSink {
        EventSink::new(&self.backend)
    }

    /// Serve one resource request from the browser.
    pub fn resource(&self, url_path: &str) -> Option<Resource> {
        self.resources.fetch(url_path)
    }

    pub fn resources(&self) -> &ResourceProvider {
        &self.resources
    }

    /// Relay registered for `key`, if any.
    pub fn relay(&self, key: &str) -> Option<&Arc<ParamRelay>> {
        self.relays.get(key)
    }

    /// Route one incoming event from the browser.
    ///
    /// Parameter edits go to the matching relay; everything else goes to the
    /// registered listener. Unknown events are logged and dropped.
    pub fn receive_event(&self, name: &str, payload: &Value) {
        if name == events::PARAM_EDIT {
            self.route_param_edit(payload);
            return;
        }

        match self.listeners.get(name) {
            Some(handler) => handler(self, payload),
            None => log::debug!("unhandled web event `{}`", name),
        }
    }

    fn route_param_edit(&self, payload: &Value) {
        let edit: ParamEditDto = match serde_json::from_value(payload.clone()) {
            Ok(edit) => edit,
            Err(e) => {
                log::warn!("malformed paramEdit payload: {}", e);
                return;
            }
        };
        match self.relays.get(edit.key.as_str()) {
            Some(relay) => relay.handle_remote_edit(edit.value),
            None => log::warn!("paramEdit for unknown key `{}`", edit.key),
        }
    }
}

/// Configuration collected before the backend view exists.
///
/// Relays must be registered here, before `build`; attachments may only be
/// created against the built view.
pub struct WebViewBuilder {
    relays: Vec<Arc<ParamRelay>>,
    listeners: Vec<(&'static str, EventHandler)>,
    resource_root: Option<PathBuf>,
}

impl WebViewBuilder {
    pub fn new() -> Self {
        Self {
            relays: Vec::new(),
            listeners: Vec::new(),
            resource_root: None,
        }
    }

    /// Directory the resource provider serves from.
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = Some(root.into());
        self
    }

    /// Register a parameter relay with the view configuration.
    pub fn with_relay(mut self, relay: Arc<ParamRelay>) -> Self {
        self.relays.push(relay);
        self
    }

    /// Register a named event listener.
    pub fn with_event_listener<F>(mut self, name: &'static str, handler: F) -> Self
    where
        F: Fn(&WebView, &Value) + Send + Sync + 'static,
    {
        self.listeners.push((name, Box::new(handler)));
        self
    }

    /// Build the view and wire every registered relay to it.
    ///
    /// # Panics
    ///
    /// Panics if two relays share a parameter key; one relay per key per
    /// editor instance is an invariant.
    pub fn build(self, backend: Arc<dyn ViewBackend>) -> Arc<WebView> {
        let mut relays: HashMap<&'static str, Arc<ParamRelay>> = HashMap::new();
        for relay in self.relays {
            let previous = relays.insert(relay.key(), relay);
            if let Some(previous) = previous {
                panic!("duplicate relay for parameter `{}`", previous.key());
            }
        }

        let mut listeners: HashMap<&'static str, EventHandler> = HashMap::new();
        for (name, handler) in self.listeners {
            listeners.insert(name, handler);
        }

        let root = self
            .resource_root
            .unwrap_or_else(|| PathBuf::from("WebUI"));

        let sink = EventSink::new(&backend);
        let view = Arc::new_cyclic(|weak| WebView {
            self_ref: weak.clone(),
            backend,
            relays,
            listeners,
            resources: ResourceProvider::new(root),
        });

        for relay in view.relays.values() {
            relay.connect(sink.clone());
        }

        view
    }
}

impl Default for WebViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}
