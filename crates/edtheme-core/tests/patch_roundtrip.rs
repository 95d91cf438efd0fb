use edtheme_core::color::{bgr555_to_hex, hex_to_bgr555};
use edtheme_core::patch::decode::apply_patch;
use edtheme_core::patch::encode::build_patch;
use edtheme_core::{ExtraId, ThemeState};

/// The patch carries packed 15-bit colors, so only quantization fixed
/// points survive byte-exactly. Tests pick their colors through this.
fn canon(hex: &str) -> String {
    bgr555_to_hex(hex_to_bgr555(hex).expect("test color must parse"))
}

fn round_trip(state: &ThemeState) -> ThemeState {
    let bytes = build_patch(state);
    let mut out = ThemeState::default();
    // Seed with a stray edit to prove decode resets before applying.
    out.set_slot_color(2, "#123456");
    apply_patch(&mut out, &bytes).expect("decode failed");
    out
}

#[test]
fn default_state_round_trips() {
    let state = ThemeState::default();
    assert_eq!(round_trip(&state), state);
}

#[test]
fn edited_colors_round_trip() {
    let mut state = ThemeState::default();
    state.set_slot_color(1, &canon("#102030"));
    state.set_slot_color(3, &canon("#80FF00"));
    state.set_slot_color(5, &canon("#0000F8"));
    assert_eq!(round_trip(&state), state);
}

#[test]
fn each_extra_can_override_each_slot() {
    for extra in ExtraId::BOTH {
        for target in 1..=5u8 {
            let mut state = ThemeState::default();
            state.set_extra_color(extra, &canon("#A5C600"));
            state.set_override(extra, Some(target));
            assert_eq!(
                round_trip(&state),
                state,
                "extra {extra:?} over slot {target}"
            );
        }
    }
}

#[test]
fn free_slot_round_trips_for_both_extras() {
    for extra in ExtraId::BOTH {
        let mut state = ThemeState::default();
        state.set_free_slot(Some(extra));
        assert_eq!(round_trip(&state), state, "free slot {extra:?}");
    }
}

#[test]
fn free_slot_and_override_coexist_across_extras() {
    let mut state = ThemeState::default();
    state.set_free_slot(Some(ExtraId::Background));
    state.set_extra_color(ExtraId::MenuHeaderText, &canon("#E7E7E7"));
    state.set_override(ExtraId::MenuHeaderText, Some(1));
    assert_eq!(round_trip(&state), state);
}

#[test]
fn truncated_record_fails_loudly() {
    let mut bytes = build_patch(&ThemeState::default());
    bytes.truncate(bytes.len() - 4);
    let mut state = ThemeState::default();
    assert!(apply_patch(&mut state, &bytes).is_err());
}

#[test]
fn empty_buffer_is_rejected() {
    let mut state = ThemeState::default();
    assert!(apply_patch(&mut state, &[]).is_err());
    assert!(apply_patch(&mut state, b"PATCHEO").is_err());
}

#[test]
fn unknown_offsets_are_ignored() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"PATCH");
    bytes.extend_from_slice(&[0x00, 0x12, 0x34, 0x00, 0x01, 0xAB]);
    bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 0x02, 0xCD, 0xEF]);
    bytes.extend_from_slice(b"EOF");

    let mut state = ThemeState::default();
    apply_patch(&mut state, &bytes).expect("foreign records must not error");
    assert_eq!(state, ThemeState::default());
}

#[test]
fn decode_is_idempotent() {
    let mut state = ThemeState::default();
    state.set_free_slot(Some(ExtraId::MenuHeaderText));
    state.set_slot_color(2, &canon("#C64200"));
    let bytes = build_patch(&state);

    let mut out = ThemeState::default();
    apply_patch(&mut out, &bytes).expect("first decode");
    apply_patch(&mut out, &bytes).expect("second decode");
    assert_eq!(out, state);
}
