// crates/edtheme-core/src/patch/decode.rs
//
// The inverse direction: split a patch byte stream into records, then
// map known addresses back onto slot / extra / free-slot state across
// every firmware version at once.

use std::collections::HashMap;

use crate::color;
use crate::error::{Result, ThemeError};
use crate::firmware::{self, AddressRole};
use crate::theme::resolve::FREE_SLOT_POSITION;
use crate::theme::state::{ExtraId, ThemeState};

use super::{PatchRecord, FOOTER, HEADER};

/// Split a patch byte stream into records.
///
/// The header and footer are trimmed by their fixed lengths, not
/// content-checked; anything shorter than header plus footer is
/// rejected. Per record: 3-byte big-endian offset, one padding byte
/// (the length high byte, always zero on this wire), 1-byte length,
/// then the value bytes. A truncated trailing record is a loud error,
/// never a silent stop; the cursor advances every iteration.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<PatchRecord>> {
    if bytes.len() < HEADER.len() + FOOTER.len() {
        return Err(ThemeError::PatchFormat(format!(
            "patch too short: {} bytes",
            bytes.len()
        )));
    }
    let body = &bytes[HEADER.len()..bytes.len() - FOOTER.len()];

    let mut records = Vec::new();
    let mut i = 0usize;
    while i < body.len() {
        if body.len() - i < 5 {
            return Err(ThemeError::PatchFormat(format!(
                "truncated record prelude at byte {i}"
            )));
        }
        let offset =
            u32::from(body[i]) << 16 | u32::from(body[i + 1]) << 8 | u32::from(body[i + 2]);
        let len = usize::from(body[i + 4]);
        i += 5;
        if body.len() - i < len {
            return Err(ThemeError::PatchFormat(format!(
                "truncated record value at byte {i}"
            )));
        }
        records.push(PatchRecord {
            offset,
            value: body[i..i + len].to_vec(),
        });
        i += len;
    }
    Ok(records)
}

/// Rebuild the theme from a patch.
///
/// The state is reset to defaults before anything is applied, so a
/// decode is total and idempotent, never incremental. Offsets outside
/// the known tables are ignored: patches may carry unrelated writes.
pub fn apply_patch(state: &mut ThemeState, bytes: &[u8]) -> Result<()> {
    let records = parse_records(bytes)?;
    state.reset();

    let roles = firmware::address_roles();

    // Classify the whole batch first; index writes steer where the
    // colors land.
    let mut colors: Vec<(u8, u16)> = Vec::new();
    let mut index_writes: HashMap<(u8, u8), u8> = HashMap::new();
    for record in &records {
        let Ok(addr) = u16::try_from(record.offset) else {
            continue;
        };
        match roles.get(&addr) {
            Some(&AddressRole::Value { slot }) if record.value.len() == 2 => {
                colors.push((slot, u16::from_le_bytes([record.value[0], record.value[1]])));
            }
            Some(&AddressRole::Index { slot, position }) if record.value.len() == 1 => {
                index_writes.insert((slot, position), record.value[0]);
            }
            // Unknown offsets and odd-sized records: ignore.
            _ => {}
        }
    }

    for (slot_id, packed) in colors {
        let hex = color::bgr555_to_hex(packed);
        // A write to the slot's primary index cell marks the color as
        // belonging to an extra, not to the base slot.
        let routed = index_writes
            .get(&(slot_id, 0))
            .and_then(|&v| ExtraId::from_palette_index(v));
        match routed {
            Some(extra_id) => {
                let extra = state.extra_mut(extra_id);
                extra.bgr555 = packed;
                extra.hex = hex;
                extra.override_id = Some(slot_id);
            }
            None => {
                let slot = state.slot_mut(slot_id);
                slot.bgr555 = packed;
                slot.hex = hex;
            }
        }
    }

    // Free-slot reuse writes only slot 5's repurposed third index cell;
    // a full slot-5 override writes all three. The second cell is the
    // discriminator, the first is never consulted here.
    if !index_writes.contains_key(&(5, 1)) {
        if let Some(&value) = index_writes.get(&(5, FREE_SLOT_POSITION as u8)) {
            if let Some(extra) = ExtraId::from_palette_index(value) {
                state.set_free_slot(Some(extra));
            }
        }
    }

    Ok(())
}
