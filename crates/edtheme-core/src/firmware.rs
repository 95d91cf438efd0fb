// crates/edtheme-core/src/firmware.rs
//
// Versioned address table for the firmware's theme color cells.
// Every slot has one value cell (packed BGR555) and one or more
// system-palette index cells. The table is static; nothing here is
// user-editable.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FirmwareVersion {
    V1,
    V2,
}

impl FirmwareVersion {
    /// Ascending declared order. The decoder's reverse map is built in
    /// this order and later versions win on collision; reordering this
    /// changes reconstruction.
    pub const KNOWN: [FirmwareVersion; 2] = [FirmwareVersion::V1, FirmwareVersion::V2];

    /// The table patches are built against.
    pub const CURRENT: FirmwareVersion = FirmwareVersion::V2;
}

pub const SLOT_COUNT: usize = 5;

#[derive(Clone, Copy, Debug)]
pub struct SlotAddresses {
    pub value_addr: u16,
    pub index_addrs: &'static [u16],
}

const V1_TABLE: [SlotAddresses; SLOT_COUNT] = [
    SlotAddresses { value_addr: 0x6A64, index_addrs: &[0x6A60] },
    SlotAddresses { value_addr: 0x6A50, index_addrs: &[0x6A54] },
    SlotAddresses { value_addr: 0x6A5C, index_addrs: &[0x6A58] },
    SlotAddresses { value_addr: 0x6A80, index_addrs: &[0x6A7C] },
    SlotAddresses { value_addr: 0x6A70, index_addrs: &[0x6A6C, 0x6A74, 0x6A78] },
];

// V2 moved the palette block down 0x48 bytes; the layout is otherwise
// unchanged.
const V2_TABLE: [SlotAddresses; SLOT_COUNT] = [
    SlotAddresses { value_addr: 0x6A1C, index_addrs: &[0x6A18] },
    SlotAddresses { value_addr: 0x6A08, index_addrs: &[0x6A0C] },
    SlotAddresses { value_addr: 0x6A14, index_addrs: &[0x6A10] },
    SlotAddresses { value_addr: 0x6A38, index_addrs: &[0x6A34] },
    SlotAddresses { value_addr: 0x6A28, index_addrs: &[0x6A24, 0x6A2C, 0x6A30] },
];

/// Addresses for one base slot under one firmware version. Slot ids
/// outside 1..=5 are a programming error.
pub fn slot_addresses(version: FirmwareVersion, slot_id: u8) -> SlotAddresses {
    assert!((1..=5).contains(&slot_id), "slot id out of range: {slot_id}");
    let table = match version {
        FirmwareVersion::V1 => &V1_TABLE,
        FirmwareVersion::V2 => &V2_TABLE,
    };
    table[usize::from(slot_id - 1)]
}

/// What a patch write to a given address means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressRole {
    /// Packed BGR555 color cell for a base slot.
    Value { slot: u8 },
    /// System-palette index cell; `position` indexes into the slot's
    /// address list (slot 5 has three, the rest one).
    Index { slot: u8, position: u8 },
}

/// Reverse map over every known version, iterated ascending so later
/// versions overwrite earlier entries. The same logical cell lives at a
/// different address per version; all of them point at the same role.
pub fn address_roles() -> HashMap<u16, AddressRole> {
    let mut roles = HashMap::new();
    for version in FirmwareVersion::KNOWN {
        for slot in 1..=SLOT_COUNT as u8 {
            let addrs = slot_addresses(version, slot);
            roles.insert(addrs.value_addr, AddressRole::Value { slot });
            for (position, &addr) in addrs.index_addrs.iter().enumerate() {
                roles.insert(addr, AddressRole::Index { slot, position: position as u8 });
            }
        }
    }
    roles
}
