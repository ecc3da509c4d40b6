//! Parameter bridge - registry, relays and attachments
//!
//! Every automatable parameter is declared once in [`PARAMS`]; the editor
//! iterates that table to build one relay + one attachment per key. Relays
//! face the browser, attachments face the host parameter tree, and the pair
//! keeps both sides in sync without echoing edits back to their origin.

mod attachment;
pub mod memory;
mod relay;
mod tree;

pub use attachment::ParamAttachment;
pub use relay::ParamRelay;
pub use tree::{ObserverId, ParamHandle, ParamObserver, ParamTree};

/// Value domain of a bridged parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Continuous normalized range (0.0..=1.0).
    Continuous,
    /// Two-state switch; values snap to 0.0 / 1.0.
    Toggle,
}

/// One row of the parameter registry.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Stable key, shared with the parameter tree and the front-end.
    pub key: &'static str,
    /// Value domain.
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn continuous(key: &'static str) -> Self {
        Self {
            key,
            kind: ParamKind::Continuous,
        }
    }

    pub const fn toggle(key: &'static str) -> Self {
        Self {
            key,
            kind: ParamKind::Toggle,
        }
    }
}

/// Parameter keys shared with the parameter tree and the front-end.
pub mod keys {
    pub const BITCRUSH: &str = "bitcrush";
    pub const DOWNSAMPLE: &str = "downsample";
    pub const NOISE: &str = "noise";
    pub const CRACKLE: &str = "crackle";
    pub const WOBBLE: &str = "wobble";
    pub const DROPOUT: &str = "dropout";
    pub const SATURATION: &str = "saturation";
    pub const AGE: &str = "age";
    pub const FILTER_CUTOFF: &str = "filterCutoff";
    pub const FILTER_RES: &str = "filterRes";
    pub const FILTER_DRIVE: &str = "filterDrive";
    pub const MODE: &str = "mode";
    pub const MIX: &str = "mix";
    pub const OUTPUT: &str = "output";
    pub const BYPASS: &str = "bypass";
}

/// The full registry: 14 continuous parameters plus the bypass toggle.
pub const PARAMS: [ParamSpec; 15] = [
    ParamSpec::continuous(keys::BITCRUSH),
    ParamSpec::continuous(keys::DOWNSAMPLE),
    ParamSpec::continuous(keys::NOISE),
    ParamSpec::continuous(keys::CRACKLE),
    ParamSpec::continuous(keys::WOBBLE),
    ParamSpec::continuous(keys::DROPOUT),
    ParamSpec::continuous(keys::SATURATION),
    ParamSpec::continuous(keys::AGE),
    ParamSpec::continuous(keys::FILTER_CUTOFF),
    ParamSpec::continuous(keys::FILTER_RES),
    ParamSpec::continuous(keys::FILTER_DRIVE),
    ParamSpec::continuous(keys::MODE),
    ParamSpec::continuous(keys::MIX),
    ParamSpec::continuous(keys::OUTPUT),
    ParamSpec::toggle(keys::BYPASS),
];

/// Default normalized value for a freshly created parameter of `kind`.
pub const fn default_value(kind: ParamKind) -> f64 {
    match kind {
        ParamKind::Continuous => 0.5,
        ParamKind::Toggle => 0.0,
    }
}
