use super::*;

const MODES: [SessionMode; 2] = [SessionMode::Inference, SessionMode::Finetune];
const TYPES: [SessionType; 2] = [SessionType::Text, SessionType::Image];
const QUERY_APP_IDS: [&str; 2] = ["", "app-from-query"];

// =============================================================
// Per-rule checks over the full input domain
// =============================================================

#[test]
fn model_picker_requires_unbound_inference_text() {
    for mode in MODES {
        for session_type in TYPES {
            for app_bound in [false, true] {
                for query_app_id in QUERY_APP_IDS {
                    let visibility =
                        toolbar_visibility(mode, session_type, app_bound, query_app_id, false);
                    let expected = !app_bound
                        && query_app_id.is_empty()
                        && mode == SessionMode::Inference
                        && session_type == SessionType::Text;
                    assert_eq!(visibility.model_picker, expected);
                }
            }
        }
    }
}

#[test]
fn settings_requires_unbound_non_inference() {
    for mode in MODES {
        for app_bound in [false, true] {
            let visibility = toolbar_visibility(mode, SessionType::Text, app_bound, "", false);
            assert_eq!(visibility.settings, !app_bound && mode != SessionMode::Inference);
        }
    }
}

#[test]
fn mode_selector_requires_unbound_app_only() {
    for mode in MODES {
        for session_type in TYPES {
            for query_app_id in QUERY_APP_IDS {
                let unbound = toolbar_visibility(mode, session_type, false, query_app_id, true);
                assert!(unbound.mode_selector);

                let bound = toolbar_visibility(mode, session_type, true, query_app_id, true);
                assert!(!bound.mode_selector);
            }
        }
    }
}

#[test]
fn login_tracks_auth_state_only() {
    for mode in MODES {
        for app_bound in [false, true] {
            let anonymous = toolbar_visibility(mode, SessionType::Text, app_bound, "", false);
            assert!(anonymous.login);

            let authenticated = toolbar_visibility(mode, SessionType::Text, app_bound, "", true);
            assert!(!authenticated.login);
        }
    }
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn default_anonymous_inference_text_shows_picker_mode_and_login() {
    let visibility =
        toolbar_visibility(SessionMode::Inference, SessionType::Text, false, "", false);

    assert_eq!(
        visibility,
        ToolbarVisibility {
            model_picker: true,
            settings: false,
            mode_selector: true,
            login: true,
        }
    );
}

#[test]
fn app_binding_suppresses_everything_but_login() {
    for mode in MODES {
        for session_type in TYPES {
            for authenticated in [false, true] {
                let visibility = toolbar_visibility(mode, session_type, true, "", authenticated);
                assert!(!visibility.model_picker);
                assert!(!visibility.settings);
                assert!(!visibility.mode_selector);
                assert_eq!(visibility.login, !authenticated);
            }
        }
    }
}

#[test]
fn query_app_id_hides_only_the_model_picker() {
    let visibility = toolbar_visibility(
        SessionMode::Inference,
        SessionType::Text,
        false,
        "app-123",
        false,
    );

    assert!(!visibility.model_picker);
    assert!(visibility.mode_selector);
    assert!(visibility.login);
}

#[test]
fn visibility_is_idempotent_for_identical_inputs() {
    for mode in MODES {
        for session_type in TYPES {
            for app_bound in [false, true] {
                for query_app_id in QUERY_APP_IDS {
                    for authenticated in [false, true] {
                        let first = toolbar_visibility(
                            mode,
                            session_type,
                            app_bound,
                            query_app_id,
                            authenticated,
                        );
                        let second = toolbar_visibility(
                            mode,
                            session_type,
                            app_bound,
                            query_app_id,
                            authenticated,
                        );
                        assert_eq!(first, second);
                    }
                }
            }
        }
    }
}
