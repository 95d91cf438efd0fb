// crates/edtheme-core/src/share.rs
//
// Compact shareable-URL token: comma-joined fields under a standard
// base64 coat. Colors travel as lowercase base-36 of the 24-bit RGB
// value, so the token preserves the exact hex the user typed.
//
// Field layout:
//   version "1",
//   slot1..slot5 color,
//   free-slot selector ("" none, "6" background, "7" header text),
//   extra6 color, extra6 override (0 = none),
//   extra7 color, extra7 override (0 = none)

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::theme::state::{ExtraId, ThemeState};

const TOKEN_VERSION: &str = "1";
const FIELD_COUNT: usize = 11;

pub fn encode_token(state: &ThemeState) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(FIELD_COUNT);
    fields.push(TOKEN_VERSION.to_string());
    for slot in &state.slots {
        fields.push(to_base36(rgb24(&slot.hex)));
    }
    fields.push(match state.free_slot {
        None => String::new(),
        Some(id) => id.slot_number().to_string(),
    });
    for extra in &state.extras {
        fields.push(to_base36(rgb24(&extra.hex)));
        fields.push(extra.override_id.unwrap_or(0).to_string());
    }
    STANDARD.encode(fields.join(","))
}

/// Apply a token to the state. Returns false, leaving the state
/// untouched, for anything that does not parse as a version-1 token;
/// stale links degrade to the caller's current state instead of
/// erroring.
pub fn apply_token(state: &mut ThemeState, token: &str) -> bool {
    let Some(fields) = parse_token(token) else {
        return false;
    };

    state.reset();
    for (i, hex) in fields.slot_hex.iter().enumerate() {
        state.set_slot_color(i as u8 + 1, hex);
    }
    for (i, id) in ExtraId::BOTH.into_iter().enumerate() {
        state.set_extra_color(id, &fields.extra_hex[i]);
        state.set_override(id, fields.extra_override[i]);
    }
    state.set_free_slot(fields.free_slot);
    true
}

struct TokenFields {
    slot_hex: [String; 5],
    free_slot: Option<ExtraId>,
    extra_hex: [String; 2],
    extra_override: [Option<u8>; 2],
}

fn parse_token(token: &str) -> Option<TokenFields> {
    let raw = STANDARD.decode(token.trim()).ok()?;
    let text = String::from_utf8(raw).ok()?;
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != FIELD_COUNT || fields[0] != TOKEN_VERSION {
        return None;
    }

    let mut slot_hex: [String; 5] = Default::default();
    for (i, hex) in slot_hex.iter_mut().enumerate() {
        *hex = hex_from_base36(fields[1 + i])?;
    }

    let free_slot = match fields[6] {
        "" => None,
        "6" => Some(ExtraId::Background),
        "7" => Some(ExtraId::MenuHeaderText),
        _ => return None,
    };

    let mut extra_hex: [String; 2] = Default::default();
    let mut extra_override: [Option<u8>; 2] = [None, None];
    for i in 0..2 {
        extra_hex[i] = hex_from_base36(fields[7 + i * 2])?;
        let ovr: u8 = fields[8 + i * 2].parse().ok()?;
        extra_override[i] = match ovr {
            0 => None,
            1..=5 => Some(ovr),
            _ => return None,
        };
    }

    Some(TokenFields {
        slot_hex,
        free_slot,
        extra_hex,
        extra_override,
    })
}

fn rgb24(hex: &str) -> u32 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    u32::from_str_radix(digits, 16).unwrap_or(0)
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    // 36^7 > 2^32, seven digits always suffice.
    let mut buf = [0u8; 7];
    let mut at = buf.len();
    loop {
        at -= 1;
        buf[at] = DIGITS[(value % 36) as usize];
        value /= 36;
        if value == 0 {
            break;
        }
    }
    String::from_utf8_lossy(&buf[at..]).into_owned()
}

fn hex_from_base36(field: &str) -> Option<String> {
    let rgb = u32::from_str_radix(field, 36).ok()?;
    if rgb > 0xFF_FFFF {
        return None;
    }
    Some(format!("#{rgb:06X}"))
}
