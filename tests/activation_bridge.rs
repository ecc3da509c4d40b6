mod common;

use common::ScriptedActivation;
use oxide_editor::activation::NoopActivation;
use oxide_editor::api::events;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn status_query_emits_state_without_a_transition() {
    let (editor, backend, _, _) = common::make_editor(true, ScriptedActivation::new("OX-1"));
    backend.clear();

    editor
        .view()
        .receive_event(events::GET_ACTIVATION_STATUS, &json!({}));

    let states = backend.events_named(events::ACTIVATION_STATE);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["isConfigured"], true);
    assert_eq!(states[0]["isActivated"], false);
    assert!(states[0].get("info").is_none());
    assert!(backend.events_named(events::ACTIVATION_RESULT).is_empty());
}

#[test]
fn invalid_code_yields_one_result_with_no_info() {
    let (editor, backend, _, _) = common::make_editor(true, ScriptedActivation::new("OX-1"));
    backend.clear();

    editor
        .view()
        .receive_event(events::ACTIVATE_LICENSE, &json!({"code": "BAD-CODE"}));

    // The completion is queued for the UI thread, not emitted inline.
    assert!(backend.events_named(events::ACTIVATION_RESULT).is_empty());
    editor.pump_ui();

    let results = backend.events_named(events::ACTIVATION_RESULT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["status"], "Invalid");
    assert!(results[0].get("info").is_none());
}

#[test]
fn valid_code_yields_one_result_carrying_info() {
    let (editor, backend, _, _) = common::make_editor(true, ScriptedActivation::new("OX-1"));
    backend.clear();

    editor
        .view()
        .receive_event(events::ACTIVATE_LICENSE, &json!({"code": "OX-1"}));
    editor.pump_ui();

    let results = backend.events_named(events::ACTIVATION_RESULT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["status"], "Valid");
    let info = &results[0]["info"];
    assert_eq!(info["activationCode"], "OX-1");
    assert_eq!(info["machineId"], "machine-01");
    assert_eq!(info["activatedAt"], "2026-01-01T00:00:00Z");
    assert_eq!(info["currentActivations"], 1);
    assert_eq!(info["maxActivations"], 3);
    assert_eq!(info["isValid"], true);
}

#[test]
fn activated_state_includes_info() {
    let (editor, backend, _, _) = common::make_editor(true, ScriptedActivation::new("OX-1"));

    editor
        .view()
        .receive_event(events::ACTIVATE_LICENSE, &json!({"code": "OX-1"}));
    editor.pump_ui();
    backend.clear();

    editor
        .view()
        .receive_event(events::GET_ACTIVATION_STATUS, &json!({}));

    let states = backend.events_named(events::ACTIVATION_STATE);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["isActivated"], true);
    assert_eq!(states[0]["info"]["isValid"], true);
}

#[test]
fn deactivation_yields_exactly_one_result() {
    let (editor, backend, _, _) = common::make_editor(true, ScriptedActivation::new("OX-1"));
    backend.clear();

    editor
        .view()
        .receive_event(events::DEACTIVATE_LICENSE, &json!({}));
    editor.pump_ui();
    editor.pump_ui();

    let results = backend.events_named(events::DEACTIVATION_RESULT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["status"], "Deactivated");
}

#[test]
fn worker_thread_completion_is_redispatched_to_the_ui_pump() {
    let (editor, backend, _, _) = common::make_editor(true, ScriptedActivation::threaded("OX-1"));
    backend.clear();

    editor
        .view()
        .receive_event(events::ACTIVATE_LICENSE, &json!({"code": "OX-1"}));

    common::pump_until(&editor, Duration::from_secs(2), || {
        !backend.events_named(events::ACTIVATION_RESULT).is_empty()
    });

    let results = backend.events_named(events::ACTIVATION_RESULT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["status"], "Valid");
}

#[test]
fn noop_provider_makes_every_operation_a_silent_noop() {
    let (editor, backend, _, _) = common::make_editor(true, Arc::new(NoopActivation));
    backend.clear();

    editor
        .view()
        .receive_event(events::ACTIVATE_LICENSE, &json!({"code": "OX-1"}));
    editor
        .view()
        .receive_event(events::DEACTIVATE_LICENSE, &json!({}));
    editor.pump_ui();

    assert!(backend.events_named(events::ACTIVATION_RESULT).is_empty());
    assert!(backend.events_named(events::DEACTIVATION_RESULT).is_empty());

    // The status query still answers, reporting an unconfigured build.
    editor
        .view()
        .receive_event(events::GET_ACTIVATION_STATUS, &json!({}));
    let states = backend.events_named(events::ACTIVATION_STATE);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0]["isConfigured"], false);
    assert_eq!(states[0]["isActivated"], false);
}

#[test]
fn missing_code_field_is_treated_as_an_empty_code() {
    let (editor, backend, _, _) = common::make_editor(true, ScriptedActivation::new("OX-1"));
    backend.clear();

    editor
        .view()
        .receive_event(events::ACTIVATE_LICENSE, &json!({}));
    editor.pump_ui();

    let results = backend.events_named(events::ACTIVATION_RESULT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["status"], "Invalid");
}
