// crates/edtheme-core/src/color.rs
//
// Conversions between `#RRGGBB` hex strings and the GBA's packed
// 15-bit BGR555 colors: B<<10 | G<<5 | R, five bits per channel.

/// `#RRGGBB` -> packed BGR555. Each 8-bit channel is floored to five
/// bits (`v / 8`, no rounding), so the conversion is deterministic and
/// lossy. `None` for anything that is not a 7-character hex color; the
/// codec never validates beyond that, callers gate on it.
pub fn hex_to_bgr555(hex: &str) -> Option<u16> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u16::from_str_radix(&digits[0..2], 16).ok()? / 8;
    let g = u16::from_str_radix(&digits[2..4], 16).ok()? / 8;
    let b = u16::from_str_radix(&digits[4..6], 16).ok()? / 8;
    Some(b << 10 | g << 5 | r)
}

/// Packed BGR555 -> uppercase `#RRGGBB`, always 7 characters.
///
/// Bit 15 is a flag in some legacy 16-bit dumps; it is masked off, not
/// rejected. Channel expansion replicates the high bits into the low
/// three, which tracks true color closer than zero-fill and makes
/// `hex_to_bgr555` an exact inverse over the whole 15-bit range.
pub fn bgr555_to_hex(raw: u16) -> String {
    let packed = raw & 0x7FFF;
    let r = expand5(packed & 0x1F);
    let g = expand5((packed >> 5) & 0x1F);
    let b = expand5((packed >> 10) & 0x1F);
    format!("#{r:02X}{g:02X}{b:02X}")
}

#[inline]
fn expand5(v5: u16) -> u16 {
    v5 * 8 + (v5 * 8) / 32
}
