// crates/edtheme-core/src/theme/resolve.rs
//
// Override resolution: fold the two extras and the free-slot selector
// into the five base slots, producing exactly what the patch encoder
// writes for one firmware version.

use crate::firmware::{self, FirmwareVersion};
use crate::theme::state::ThemeState;

/// Position in slot 5's index-address list that free-slot reuse
/// repurposes. The first entry is the slot's own primary index and is
/// never re-pointed; the second stays untouched too, which is how the
/// decoder tells free-slot reuse apart from a full slot-5 override.
pub const FREE_SLOT_POSITION: usize = 2;

/// A slot as the encoder sees it: color, value cell, and whichever
/// index cells must be written.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSlot {
    pub id: u8,
    pub bgr555: u16,
    pub hex: String,
    pub value_addr: u16,
    pub index_addrs: Vec<u16>,
    /// When present, every address in `index_addrs` gets this byte.
    pub index_override: Option<u8>,
}

pub fn resolve(state: &ThemeState, version: FirmwareVersion) -> Vec<ResolvedSlot> {
    state
        .slots
        .iter()
        .map(|slot| {
            let addrs = firmware::slot_addresses(version, slot.id);
            let mut resolved = ResolvedSlot {
                id: slot.id,
                bgr555: slot.bgr555,
                hex: slot.hex.clone(),
                value_addr: addrs.value_addr,
                index_addrs: addrs.index_addrs.to_vec(),
                index_override: None,
            };

            // Explicit override first. The state mutators keep override
            // and free-slot exclusive, but resolution must not rely on
            // that being externally enforced.
            if let Some(extra) = state.extras.iter().find(|e| e.override_id == Some(slot.id)) {
                resolved.bgr555 = extra.bgr555;
                resolved.hex = extra.hex.clone();
                resolved.index_override = Some(extra.palette_index);
            } else if slot.id == 5 {
                if let Some(id) = state.free_slot {
                    // Slot 5 keeps its own color; only the repurposed
                    // index cell carries the extra's palette index.
                    resolved.index_override = Some(state.extra(id).palette_index);
                    resolved.index_addrs = vec![resolved.index_addrs[FREE_SLOT_POSITION]];
                }
            }

            resolved
        })
        .collect()
}
