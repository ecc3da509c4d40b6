//! License activation bridge
//!
//! The network client is an external collaborator behind
//! [`ActivationProvider`]; this module owns the web-event handlers and the
//! mandatory redispatch of async completions onto the UI-owning thread. A
//! host without licensing wires in [`NoopActivation`] and every operation
//! becomes a no-op.

use crate::api::dto::{
    to_payload, ActivationResultDto, ActivationStateDto, DeactivationResultDto,
};
use crate::api::events;
use crate::dispatch::UiHandle;
use crate::view::WebView;
use std::sync::Arc;

/// Terminal outcome of an activation or deactivation request.
///
/// The string forms are the wire contract of the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationStatus {
    Valid,
    Invalid,
    Expired,
    LimitReached,
    NetworkError,
    Deactivated,
}

impl ActivationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationStatus::Valid => "Valid",
            ActivationStatus::Invalid => "Invalid",
            ActivationStatus::Expired => "Expired",
            ActivationStatus::LimitReached => "LimitReached",
            ActivationStatus::NetworkError => "NetworkError",
            ActivationStatus::Deactivated => "Deactivated",
        }
    }
}

impl std::fmt::Display for ActivationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current activation record; copied into outgoing events, never mutated
/// by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationInfo {
    pub activation_code: String,
    pub machine_id: String,
    pub activated_at: String,
    pub current_activations: u32,
    pub max_activations: u32,
    pub is_valid: bool,
}

/// Completion callback of an activate request. May fire on any thread.
pub type ActivateCallback = Box<dyn FnOnce(ActivationStatus, Option<ActivationInfo>) + Send>;

/// Completion callback of a deactivate request. May fire on any thread.
pub type DeactivateCallback = Box<dyn FnOnce(ActivationStatus) + Send>;

/// Capability interface toward the license-activation subsystem.
pub trait ActivationProvider: Send + Sync {
    /// Whether licensing is configured for this build at all.
    fn is_configured(&self) -> bool;

    /// Whether a license is currently activated.
    fn is_activated(&self) -> bool;

    /// The current activation record, if activated.
    fn activation_info(&self) -> Option<ActivationInfo>;

    /// Start an asynchronous activation. The callback must fire exactly once
    /// per request with the terminal outcome.
    fn activate(&self, code: &str, on_result: ActivateCallback);

    /// Start an asynchronous deactivation. Same completion contract.
    fn deactivate(&self, on_result: DeactivateCallback);
}

/// Provider for builds without licensing: never configured, never
/// activated, and both async operations drop their callbacks.
pub struct NoopActivation;

impl ActivationProvider for NoopActivation {
    fn is_configured(&self) -> bool {
        false
    }

    fn is_activated(&self) -> bool {
        false
    }

    fn activation_info(&self) -> Option<ActivationInfo> {
        None
    }

    fn activate(&self, _code: &str, _on_result: ActivateCallback) {}

    fn deactivate(&self, _on_result: DeactivateCallback) {}
}

/// Web-event handlers for the activation surface.
pub struct ActivationBridge {
    provider: Arc<dyn ActivationProvider>,
    ui: UiHandle,
}

impl ActivationBridge {
    pub fn new(provider: Arc<dyn ActivationProvider>, ui: UiHandle) -> Self {
        Self { provider, ui }
    }

    /// Synchronous status query: emit the current `activationState` without
    /// starting any transition.
    pub fn send_state(&self, view: &WebView) {
        let is_activated = self.provider.is_activated();
        let dto = ActivationStateDto {
            is_configured: self.provider.is_configured(),
            is_activated,
            info: if is_activated {
                self.provider.activation_info().map(Into::into)
            } else {
                None
            },
        };
        view.emit_if_visible(events::ACTIVATION_STATE, &to_payload(&dto));
    }

    /// Start an activation and emit exactly one `activationResult` when it
    /// completes, from the UI thread.
    ///
    /// A second request while one is pending is a caller error; requests are
    /// neither cancelled nor coalesced, and each still completes once.
    pub fn request_activate(&self, view: &WebView, code: &str) {
        let ui = self.ui.clone();
        let view = view.downgrade();

        self.provider.activate(
            code,
            Box::new(move |status, info| {
                // Completion may be on a worker thread; the view is only
                // safe to drive from the UI thread.
                ui.post(move || {
                    let info = if status == ActivationStatus::Valid {
                        info
                    } else {
                        None
                    };
                    let dto = ActivationResultDto {
                        status: status.as_str().to_owned(),
                        info: info.map(Into::into),
                    };
                    if let Some(view) = view.upgrade() {
                        view.emit_if_visible(events::ACTIVATION_RESULT, &to_payload(&dto));
                    }
                });
            }),
        );
    }

    /// Start a deactivation and emit exactly one `deactivationResult` when
    /// it completes, from the UI thread.
    pub fn request_deactivate(&self, view: &WebView) {
        let ui = self.ui.clone();
        let view = view.downgrade();

        self.provider.deactivate(Box::new(move |status| {
            ui.post(move || {
                let dto = DeactivationResultDto {
                    status: status.as_str().to_owned(),
                };
                if let Some(view) = view.upgrade() {
                    view.emit_if_visible(events::DEACTIVATION_RESULT, &to_payload(&dto));
                }
            });
        }));
    }
}
