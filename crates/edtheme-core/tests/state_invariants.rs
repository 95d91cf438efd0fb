use edtheme_core::{ExtraId, ThemeState};

#[test]
fn second_extra_taking_a_slot_clears_the_first() {
    let mut state = ThemeState::default();
    state.set_override(ExtraId::Background, Some(3));
    state.set_override(ExtraId::MenuHeaderText, Some(3));
    assert_eq!(state.extra(ExtraId::Background).override_id, None);
    assert_eq!(state.extra(ExtraId::MenuHeaderText).override_id, Some(3));
}

#[test]
fn distinct_targets_coexist() {
    let mut state = ThemeState::default();
    state.set_override(ExtraId::Background, Some(3));
    state.set_override(ExtraId::MenuHeaderText, Some(4));
    assert_eq!(state.extra(ExtraId::Background).override_id, Some(3));
    assert_eq!(state.extra(ExtraId::MenuHeaderText).override_id, Some(4));
}

#[test]
fn override_displaces_own_free_slot_selection() {
    let mut state = ThemeState::default();
    state.set_free_slot(Some(ExtraId::Background));
    state.set_override(ExtraId::Background, Some(2));
    assert_eq!(state.free_slot, None);
    assert_eq!(state.extra(ExtraId::Background).override_id, Some(2));
}

#[test]
fn free_slot_selection_displaces_override() {
    let mut state = ThemeState::default();
    state.set_override(ExtraId::Background, Some(2));
    state.set_free_slot(Some(ExtraId::Background));
    assert_eq!(state.extra(ExtraId::Background).override_id, None);
    assert_eq!(state.free_slot, Some(ExtraId::Background));
}

#[test]
fn slot_5_override_displaces_free_slot_across_extras() {
    // Both features contend for slot 5's index cells, so an override of
    // slot 5 evicts the selection even when the other extra holds it.
    let mut state = ThemeState::default();
    state.set_free_slot(Some(ExtraId::Background));
    state.set_override(ExtraId::MenuHeaderText, Some(5));
    assert_eq!(state.free_slot, None);
}

#[test]
fn clearing_an_override_leaves_everything_else_alone() {
    let mut state = ThemeState::default();
    state.set_free_slot(Some(ExtraId::Background));
    state.set_override(ExtraId::MenuHeaderText, None);
    assert_eq!(state.free_slot, Some(ExtraId::Background));
}

#[test]
fn malformed_hex_disables_download_but_keeps_last_color() {
    let mut state = ThemeState::default();
    state.set_slot_color(1, "#12");
    assert!(!state.download_enabled());
    assert_eq!(state.slot(1).bgr555, 0x7FFF, "packed color keeps last good value");
    assert_eq!(state.slot(1).hex, "#12");

    state.set_slot_color(1, "#ff0000");
    assert!(state.download_enabled());
    assert_eq!(state.slot(1).hex, "#FF0000", "hex input is uppercased");
}

#[test]
fn inactive_extra_may_hold_partial_input() {
    let mut state = ThemeState::default();
    state.set_extra_color(ExtraId::Background, "#");
    assert!(state.download_enabled());

    state.set_override(ExtraId::Background, Some(1));
    assert!(!state.download_enabled(), "active extras gate the build");
}

#[test]
fn reset_restores_the_defaults() {
    let mut state = ThemeState::default();
    state.set_slot_color(3, "#000000");
    state.set_free_slot(Some(ExtraId::MenuHeaderText));
    state.reset();
    assert!(state.is_default());
}
