use super::*;

#[test]
fn variant_for_maps_viewport_class() {
    assert_eq!(variant_for(true), ModeControlVariant::Switch);
    assert_eq!(variant_for(false), ModeControlVariant::Dropdown);
}

#[test]
fn switch_position_round_trips_every_mode() {
    for mode in [SessionMode::Inference, SessionMode::Finetune] {
        assert_eq!(mode_from_switch(switch_checked(mode)), mode);
    }
}

#[test]
fn switch_checked_means_finetune() {
    assert!(!switch_checked(SessionMode::Inference));
    assert!(switch_checked(SessionMode::Finetune));
    assert_eq!(mode_from_switch(false), SessionMode::Inference);
    assert_eq!(mode_from_switch(true), SessionMode::Finetune);
}

#[test]
fn dropdown_values_parse_back_to_modes() {
    // The dropdown's option values are the wire strings; both must parse so
    // the change handler can never drop a legal selection.
    for mode in [SessionMode::Inference, SessionMode::Finetune] {
        assert_eq!(SessionMode::parse(mode.as_str()), Some(mode));
    }
}
