use super::*;

#[test]
fn push_appends_toast_with_kind_and_message() {
    let mut state = ToastState::default();
    state.push("Copied to clipboard", ToastKind::Success);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "Copied to clipboard");
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
}

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let first = state.push("one", ToastKind::Success);
    let second = state.push("two", ToastKind::Error);

    assert_ne!(first, second);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push("one", ToastKind::Success);
    let second = state.push("two", ToastKind::Error);

    state.dismiss(&first);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_with_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push("one", ToastKind::Success);

    state.dismiss("missing");

    assert_eq!(state.toasts.len(), 1);
}
