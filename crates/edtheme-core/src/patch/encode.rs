// crates/edtheme-core/src/patch/encode.rs

use crate::firmware::FirmwareVersion;
use crate::theme::resolve::resolve;
use crate::theme::state::ThemeState;

use super::{FOOTER, HEADER};

/// Serialize the theme into a patch against the current firmware.
pub fn build_patch(state: &ThemeState) -> Vec<u8> {
    build_patch_for(state, FirmwareVersion::CURRENT)
}

/// Every build re-emits all applicable records in slot order 1..=5: one
/// two-byte value record per slot, then one one-byte record per index
/// cell when the slot carries an index override. No merging and no
/// deduplication; the artifact is tiny either way.
///
/// Color cells are written little-endian, the byte order the firmware
/// reads BGR555 in (white `0x7FFF` goes on the wire as `FF 7F`).
pub fn build_patch_for(state: &ThemeState, version: FirmwareVersion) -> Vec<u8> {
    let mut out = Vec::with_capacity(96);
    out.extend_from_slice(HEADER);

    for slot in resolve(state, version) {
        push_record(&mut out, slot.value_addr, &slot.bgr555.to_le_bytes());
        if let Some(index) = slot.index_override {
            for &addr in &slot.index_addrs {
                push_record(&mut out, addr, &[index]);
            }
        }
    }

    out.extend_from_slice(FOOTER);
    out
}

fn push_record(out: &mut Vec<u8>, addr: u16, value: &[u8]) {
    out.push(0);
    out.push((addr >> 8) as u8);
    out.push((addr & 0xFF) as u8);
    out.push(0);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
}
