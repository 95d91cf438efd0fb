// A patch built against either firmware's addresses must reconstruct
// the same logical state: the decoder's reverse map spans every known
// version at once.

use edtheme_core::firmware::FirmwareVersion;
use edtheme_core::patch::decode::apply_patch;
use edtheme_core::patch::encode::build_patch_for;
use edtheme_core::{ExtraId, ThemeState};

fn decode(bytes: &[u8]) -> ThemeState {
    let mut state = ThemeState::default();
    apply_patch(&mut state, bytes).expect("decode failed");
    state
}

#[test]
fn plain_colors_decode_identically_from_either_version() {
    let mut state = ThemeState::default();
    state.set_slot_color(2, "#A5C6E7");
    state.set_slot_color(4, "#084221");

    for version in FirmwareVersion::KNOWN {
        let bytes = build_patch_for(&state, version);
        assert_eq!(decode(&bytes), state, "{version:?}");
    }
}

#[test]
fn overrides_and_free_slot_decode_identically_from_either_version() {
    let mut state = ThemeState::default();
    state.set_override(ExtraId::MenuHeaderText, Some(3));
    state.set_free_slot(Some(ExtraId::Background));

    let v1 = decode(&build_patch_for(&state, FirmwareVersion::V1));
    let v2 = decode(&build_patch_for(&state, FirmwareVersion::V2));
    assert_eq!(v1, v2);
    assert_eq!(v1, state);
}

#[test]
fn the_two_address_tables_do_not_collide() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for version in FirmwareVersion::KNOWN {
        for slot in 1..=5u8 {
            let addrs = edtheme_core::firmware::slot_addresses(version, slot);
            assert!(seen.insert(addrs.value_addr), "duplicate value cell");
            for &addr in addrs.index_addrs {
                assert!(seen.insert(addr), "duplicate index cell");
            }
        }
    }
}
