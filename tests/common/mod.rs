#![allow(dead_code)]
//! Shared fakes for the editor bridge integration tests.

use oxide_editor::activation::{
    ActivateCallback, ActivationInfo, ActivationProvider, ActivationStatus, DeactivateCallback,
};
use oxide_editor::params::memory::MemoryParamTree;
use oxide_editor::view::ViewBackend;
use oxide_editor::{Editor, EditorConfig, EditorContext, TelemetryCell};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// View backend that records every delivered event.
pub struct RecordingBackend {
    visible: AtomicBool,
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingBackend {
    pub fn new(visible: bool) -> Arc<Self> {
        Arc::new(Self {
            visible: AtomicBool::new(visible),
            events: Mutex::new(Vec::new()),
        })
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }

    /// All recorded (name, payload) pairs.
    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().clone()
    }

    /// Payloads of every recorded event with `name`.
    pub fn events_named(&self, name: &str) -> Vec<Value> {
        self.events
            .lock()
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl ViewBackend for RecordingBackend {
    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    fn post_event(&self, name: &str, payload: &Value) {
        self.events.lock().push((name.to_owned(), payload.clone()));
    }
}

/// Activation provider scripted around one valid code.
///
/// Completions fire synchronously on the calling thread, or on a spawned
/// worker thread when `threaded` is set.
pub struct ScriptedActivation {
    valid_code: String,
    threaded: bool,
    activated: AtomicBool,
}

impl ScriptedActivation {
    pub fn new(valid_code: &str) -> Arc<Self> {
        Arc::new(Self {
            valid_code: valid_code.to_owned(),
            threaded: false,
            activated: AtomicBool::new(false),
        })
    }

    pub fn threaded(valid_code: &str) -> Arc<Self> {
        Arc::new(Self {
            valid_code: valid_code.to_owned(),
            threaded: true,
            activated: AtomicBool::new(false),
        })
    }

    fn info(&self) -> ActivationInfo {
        ActivationInfo {
            activation_code: self.valid_code.clone(),
            machine_id: "machine-01".to_owned(),
            activated_at: "2026-01-01T00:00:00Z".to_owned(),
            current_activations: 1,
            max_activations: 3,
            is_valid: true,
        }
    }
}

impl ActivationProvider for ScriptedActivation {
    fn is_configured(&self) -> bool {
        true
    }

    fn is_activated(&self) -> bool {
        self.activated.load(Ordering::SeqCst)
    }

    fn activation_info(&self) -> Option<ActivationInfo> {
        if self.is_activated() {
            Some(self.info())
        } else {
            None
        }
    }

    fn activate(&self, code: &str, on_result: ActivateCallback) {
        let outcome = if code == self.valid_code {
            self.activated.store(true, Ordering::SeqCst);
            (ActivationStatus::Valid, Some(self.info()))
        } else {
            (ActivationStatus::Invalid, None)
        };

        if self.threaded {
            std::thread::spawn(move || on_result(outcome.0, outcome.1));
        } else {
            on_result(outcome.0, outcome.1);
        }
    }

    fn deactivate(&self, on_result: DeactivateCallback) {
        self.activated.store(false, Ordering::SeqCst);
        if self.threaded {
            std::thread::spawn(move || on_result(ActivationStatus::Deactivated));
        } else {
            on_result(ActivationStatus::Deactivated);
        }
    }
}

/// Build an editor over fresh fakes: registry-seeded params, a telemetry
/// cell and a recording backend.
pub fn make_editor(
    visible: bool,
    activation: Arc<dyn ActivationProvider>,
) -> (
    Editor,
    Arc<RecordingBackend>,
    Arc<MemoryParamTree>,
    Arc<TelemetryCell>,
) {
    let backend = RecordingBackend::new(visible);
    let params = Arc::new(MemoryParamTree::with_registry());
    let engine = Arc::new(TelemetryCell::new());

    let ctx = EditorContext {
        params: params.clone(),
        engine: engine.clone(),
        activation,
    };
    let editor = Editor::new(
        ctx,
        backend.clone() as Arc<dyn ViewBackend>,
        EditorConfig::default(),
    );

    (editor, backend, params, engine)
}

/// Pump the editor's UI queue until `predicate` holds or `timeout` elapses.
pub fn pump_until(editor: &Editor, timeout: Duration, mut predicate: impl FnMut() -> bool) {
    let start = Instant::now();
    while Instant::now().duration_since(start) < timeout {
        editor.pump_ui();
        if predicate() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("timed out waiting for UI-thread completion");
}
