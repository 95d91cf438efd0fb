// crates/edtheme-core/src/theme/state.rs
//
// The editable theme: five fixed base slots, two optional extras, and
// the free-slot selector. Cardinality never changes; loads overwrite
// fields, nothing is ever added or removed.

use serde::{Deserialize, Serialize};

use crate::color;

/// Palette index values the firmware reserves for the two extras.
pub const BACKGROUND_INDEX: u8 = 0x00;
pub const HEADER_TEXT_INDEX: u8 = 0x7E;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraId {
    Background,
    MenuHeaderText,
}

impl ExtraId {
    pub const BOTH: [ExtraId; 2] = [ExtraId::Background, ExtraId::MenuHeaderText];

    /// Display numbering carried over from the original tool: the
    /// extras sit after the five base slots.
    pub fn slot_number(self) -> u8 {
        match self {
            ExtraId::Background => 6,
            ExtraId::MenuHeaderText => 7,
        }
    }

    pub fn palette_index(self) -> u8 {
        match self {
            ExtraId::Background => BACKGROUND_INDEX,
            ExtraId::MenuHeaderText => HEADER_TEXT_INDEX,
        }
    }

    /// Inverse of `palette_index`; the decoder routes colors with it.
    pub fn from_palette_index(value: u8) -> Option<ExtraId> {
        match value {
            BACKGROUND_INDEX => Some(ExtraId::Background),
            HEADER_TEXT_INDEX => Some(ExtraId::MenuHeaderText),
            _ => None,
        }
    }
}

/// One of the five always-active color roles. `hex` and `bgr555` are
/// kept in sync by `set_color`; the firmware addresses live in the
/// versioned table in `firmware`, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: u8,
    pub label: String,
    pub bgr555: u16,
    pub hex: String,
}

/// One of the two optional override colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtraSlot {
    pub id: ExtraId,
    pub label: String,
    pub bgr555: u16,
    pub hex: String,
    /// Base slot this extra's color replaces, if active.
    pub override_id: Option<u8>,
    pub palette_index: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    pub slots: [Slot; 5],
    pub extras: [ExtraSlot; 2],
    /// Extra whose palette index is carried through slot 5's repurposed
    /// index cell. Exclusive with that extra having an override.
    pub free_slot: Option<ExtraId>,
}

fn slot(id: u8, label: &str, bgr555: u16, hex: &str) -> Slot {
    Slot { id, label: label.to_string(), bgr555, hex: hex.to_string() }
}

fn extra(id: ExtraId, label: &str) -> ExtraSlot {
    ExtraSlot {
        id,
        label: label.to_string(),
        bgr555: 0,
        hex: "#000000".to_string(),
        override_id: None,
        palette_index: id.palette_index(),
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState {
            slots: [
                slot(1, "Basic Text, Selected Entry", 0x7FFF, "#FFFFFF"),
                slot(2, "Unselected ROM", 0x5EF7, "#BDBDBD"),
                slot(3, "Unselected Folder, Menu Item", 0x27BD, "#EFEF4A"),
                slot(4, "Menu Header BG", 0x7E94, "#A5A5FF"),
                slot(5, "ROM List Header/Footer BG, Menu BG", 0x4631, "#8C8C8C"),
            ],
            extras: [
                extra(ExtraId::Background, "Background"),
                extra(ExtraId::MenuHeaderText, "Menu Header Text"),
            ],
            free_slot: None,
        }
    }
}

impl ThemeState {
    pub fn reset(&mut self) {
        *self = ThemeState::default();
    }

    pub fn slot(&self, id: u8) -> &Slot {
        self.slots.iter().find(|s| s.id == id).expect("slot id out of range")
    }

    pub fn slot_mut(&mut self, id: u8) -> &mut Slot {
        self.slots.iter_mut().find(|s| s.id == id).expect("slot id out of range")
    }

    pub fn extra(&self, id: ExtraId) -> &ExtraSlot {
        self.extras.iter().find(|e| e.id == id).expect("extras are fixed")
    }

    pub fn extra_mut(&mut self, id: ExtraId) -> &mut ExtraSlot {
        self.extras.iter_mut().find(|e| e.id == id).expect("extras are fixed")
    }

    /// Store the hex (uppercased) and refresh the packed color when it
    /// parses. A malformed hex keeps the last good packed color; the
    /// `download_enabled` gate keeps it out of any patch.
    pub fn set_slot_color(&mut self, id: u8, hex: &str) {
        let slot = self.slot_mut(id);
        slot.hex = hex.to_uppercase();
        if let Some(packed) = color::hex_to_bgr555(&slot.hex) {
            slot.bgr555 = packed;
        }
    }

    pub fn set_extra_color(&mut self, id: ExtraId, hex: &str) {
        let extra = self.extra_mut(id);
        extra.hex = hex.to_uppercase();
        if let Some(packed) = color::hex_to_bgr555(&extra.hex) {
            extra.bgr555 = packed;
        }
    }

    /// Point an extra at a base slot (or deactivate it). At most one
    /// extra may target a given slot, so the other extra's equal target
    /// is cleared. An override displaces the free-slot selection when
    /// the same extra held it, and whenever slot 5 itself is taken.
    pub fn set_override(&mut self, id: ExtraId, target: Option<u8>) {
        if let Some(slot) = target {
            for other in self.extras.iter_mut().filter(|e| e.id != id) {
                if other.override_id == Some(slot) {
                    other.override_id = None;
                }
            }
            if self.free_slot == Some(id) || slot == 5 {
                self.free_slot = None;
            }
        }
        self.extra_mut(id).override_id = target;
    }

    /// Select the extra whose palette index rides in slot 5's free
    /// cell. Selecting an extra clears its override; the two are
    /// mutually exclusive.
    pub fn set_free_slot(&mut self, selection: Option<ExtraId>) {
        if let Some(id) = selection {
            self.extra_mut(id).override_id = None;
        }
        self.free_slot = selection;
    }

    /// Caller-side gate for building a patch: every color that would be
    /// emitted must be a well-formed 7-character hex. Inactive extras
    /// may hold partial input without blocking the build.
    pub fn download_enabled(&self) -> bool {
        let slots_ok = self.slots.iter().all(|s| s.hex.len() == 7);
        let extras_ok = self
            .extras
            .iter()
            .all(|e| e.override_id.is_none() || e.hex.len() == 7);
        slots_ok && extras_ok
    }

    /// The canonical default-state share URL collapses to a bare URL.
    pub fn is_default(&self) -> bool {
        *self == ThemeState::default()
    }
}
