//! Event payloads exchanged with the web front-end.
//!
//! Field names serialize in camelCase; they are part of the wire contract.

use crate::activation::ActivationInfo;
use crate::engine::MeterFrame;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Visualizer
// =============================================================================

/// Payload of the `visualizerData` event, one per visible frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizerDataDto {
    pub rms: f32,
    pub peak: f32,
    pub wobble_phase: f32,
    pub crackle_activity: f32,
    pub mode: u32,
    pub bypassed: bool,
    pub degradation: f32,
}

impl From<MeterFrame> for VisualizerDataDto {
    fn from(frame: MeterFrame) -> Self {
        Self {
            rms: frame.rms,
            peak: frame.peak,
            wobble_phase: frame.wobble_phase,
            crackle_activity: frame.crackle_activity,
            mode: frame.mode,
            bypassed: frame.bypassed,
            degradation: frame.degradation,
        }
    }
}

// =============================================================================
// Activation
// =============================================================================

/// Activation record attached to successful results and activated states.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationInfoDto {
    pub activation_code: String,
    pub machine_id: String,
    pub activated_at: String,
    pub current_activations: u32,
    pub max_activations: u32,
    pub is_valid: bool,
}

impl From<ActivationInfo> for ActivationInfoDto {
    fn from(info: ActivationInfo) -> Self {
        Self {
            activation_code: info.activation_code,
            machine_id: info.machine_id,
            activated_at: info.activated_at,
            current_activations: info.current_activations,
            max_activations: info.max_activations,
            is_valid: info.is_valid,
        }
    }
}

/// Payload of the `activationState` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationStateDto {
    pub is_configured: bool,
    pub is_activated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ActivationInfoDto>,
}

/// Payload of the `activationResult` event. `info` is present iff the
/// status denotes a successful activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResultDto {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<ActivationInfoDto>,
}

/// Payload of the `deactivationResult` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeactivationResultDto {
    pub status: String,
}

// =============================================================================
// Parameter sync
// =============================================================================

/// Payload of the `paramState` event (host -> browser).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamStateDto {
    pub key: String,
    pub value: f64,
}

/// Payload of the `paramEdit` event (browser -> host).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamEditDto {
    pub key: String,
    pub value: f64,
}

// =============================================================================
// Serialization helper
// =============================================================================

/// Serialize a payload DTO to a JSON value.
///
/// Serialization of these shapes cannot fail for well-formed data; if it ever
/// does the event degrades to a null payload rather than panicking the host.
pub fn to_payload<T: Serialize>(dto: &T) -> Value {
    match serde_json::to_value(dto) {
        Ok(value) => value,
        Err(e) => {
            log::error!("payload serialization failed: {}", e);
            Value::Null
        }
    }
}
