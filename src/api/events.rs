//! Event names shared with the web front-end.
//!
//! The outgoing names and their payload field names are the wire contract;
//! renaming any of them breaks the deployed front-end bundle.

// =============================================================================
// Outgoing (editor -> browser)
// =============================================================================

/// Per-frame metering payload for the visualizer canvas.
pub const VISUALIZER_DATA: &str = "visualizerData";

/// Current activation state, emitted in response to a status query.
pub const ACTIVATION_STATE: &str = "activationState";

/// Terminal outcome of an activate request.
pub const ACTIVATION_RESULT: &str = "activationResult";

/// Terminal outcome of a deactivate request.
pub const DEACTIVATION_RESULT: &str = "deactivationResult";

/// Host-side parameter value pushed to the browser controls.
pub const PARAM_STATE: &str = "paramState";

// =============================================================================
// Incoming (browser -> editor)
// =============================================================================

/// User edit of a parameter control in the browser.
pub const PARAM_EDIT: &str = "paramEdit";

/// Synchronous activation status query; never starts a transition.
pub const GET_ACTIVATION_STATUS: &str = "getActivationStatus";

/// Request to activate a license code.
pub const ACTIVATE_LICENSE: &str = "activateLicense";

/// Request to deactivate the current license.
pub const DEACTIVATE_LICENSE: &str = "deactivateLicense";
