//! DSP engine boundary - metering snapshots read by the UI thread
//!
//! The audio thread publishes one [`MeterFrame`] per processing block into a
//! [`TelemetryCell`]; the UI thread reads it wait-free at up to 60 Hz. A read
//! may be stale by one frame, never torn and never blocking.

use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// One metering snapshot, taken per visualizer tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterFrame {
    /// Post-chain RMS level (linear, 0.0..=1.0).
    pub rms: f32,
    /// Post-chain peak level (linear).
    pub peak: f32,
    /// Wobble LFO phase (0.0..1.0 of a cycle).
    pub wobble_phase: f32,
    /// Crackle generator activity (0.0..=1.0).
    pub crackle_activity: f32,
    /// Current degradation mode (program index).
    pub mode: u32,
    /// Bypass switch state.
    pub bypassed: bool,
    /// Overall degradation amount (0.0..=1.0).
    pub degradation: f32,
}

impl Default for MeterFrame {
    fn default() -> Self {
        Self {
            rms: 0.0,
            peak: 0.0,
            wobble_phase: 0.0,
            crackle_activity: 0.0,
            mode: 0,
            bypassed: false,
            degradation: 0.0,
        }
    }
}

/// Read-only metering accessors exposed by the DSP engine.
///
/// All methods must be safe to call from the UI thread at up to 60 Hz and
/// must never block on audio-thread activity.
pub trait EngineTelemetry: Send + Sync {
    /// Current RMS level.
    fn current_rms(&self) -> f32;
    /// Current peak level.
    fn current_peak(&self) -> f32;
    /// Wobble LFO phase.
    fn wobble_phase(&self) -> f32;
    /// Crackle generator activity.
    fn crackle_activity(&self) -> f32;
    /// Current degradation mode index.
    fn current_mode(&self) -> u32;
    /// Whether the effect is bypassed.
    fn is_bypassed(&self) -> bool;
    /// Overall degradation amount.
    fn degradation_amount(&self) -> f32;

    /// Aggregate all seven values into one frame.
    ///
    /// The default assembles the frame from the individual accessors and may
    /// mix values from adjacent processing blocks; implementations holding a
    /// whole-frame snapshot should override it with a single coherent read.
    fn meter_frame(&self) -> MeterFrame {
        MeterFrame {
            rms: self.current_rms(),
            peak: self.current_peak(),
            wobble_phase: self.wobble_phase(),
            crackle_activity: self.crackle_activity(),
            mode: self.current_mode(),
            bypassed: self.is_bypassed(),
            degradation: self.degradation_amount(),
        }
    }
}

/// Lock-free hand-off cell between the audio thread and the UI thread.
///
/// Writers call [`publish`](Self::publish) from the audio callback; readers
/// load the latest frame without taking any lock. The sequence counter
/// increments once per published frame.
pub struct TelemetryCell {
    frame: ArcSwap<MeterFrame>,
    sequence: AtomicU64,
}

impl TelemetryCell {
    /// Create a cell holding a silent default frame.
    pub fn new() -> Self {
        Self {
            frame: ArcSwap::from_pointee(MeterFrame::default()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Publish a new frame (audio thread).
    pub fn publish(&self, frame: MeterFrame) {
        self.frame.store(Arc::new(frame));
        self.sequence.fetch_add(1, Ordering::Release);
    }

    /// Latest published frame (wait-free).
    pub fn frame(&self) -> MeterFrame {
        **self.frame.load()
    }

    /// Number of frames published so far.
    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::Acquire)
    }
}

impl Default for TelemetryCell {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineTelemetry for TelemetryCell {
    fn current_rms(&self) -> f32 {
        self.frame().rms
    }

    fn current_peak(&self) -> f32 {
        self.frame().peak
    }

    fn wobble_phase(&self) -> f32 {
        self.frame().wobble_phase
    }

    fn crackle_activity(&self) -> f32 {
        self.frame().crackle_activity
    }

    fn current_mode(&self) -> u32 {
        self.frame().mode
    }

    fn is_bypassed(&self) -> bool {
        self.frame().bypassed
    }

    fn degradation_amount(&self) -> f32 {
        self.frame().degradation
    }

    // Single load so the seven fields always come from the same block.
    fn meter_frame(&self) -> MeterFrame {
        self.frame()
    }
}
