// crates/edtheme-cli/src/io/storage.rs
//
// A theme directory holds three independently stored JSON values,
// matching the three storage keys of the original web tool. Each piece
// falls back to its default when its file is absent, so a partially
// populated directory still loads.

use std::path::Path;

use anyhow::Context;
use edtheme_core::{ExtraId, ExtraSlot, Slot, ThemeState};

const PALETTES_FILE: &str = "palettes.json";
const EXTRAS_FILE: &str = "extras.json";
const FREE_SLOT_FILE: &str = "free_slot.json";

pub fn load_theme(dir: &Path) -> anyhow::Result<ThemeState> {
    let mut state = ThemeState::default();
    if let Some(slots) = read_json::<[Slot; 5]>(&dir.join(PALETTES_FILE))? {
        state.slots = slots;
    }
    if let Some(extras) = read_json::<[ExtraSlot; 2]>(&dir.join(EXTRAS_FILE))? {
        state.extras = extras;
    }
    if let Some(free) = read_json::<Option<ExtraId>>(&dir.join(FREE_SLOT_FILE))? {
        state.free_slot = free;
    }
    Ok(state)
}

pub fn save_theme(dir: &Path, state: &ThemeState) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create theme dir: {}", dir.display()))?;
    write_json(&dir.join(PALETTES_FILE), &state.slots)?;
    write_json(&dir.join(EXTRAS_FILE), &state.extras)?;
    write_json(&dir.join(FREE_SLOT_FILE), &state.free_slot)?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(value))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = ThemeState::default();
        state.set_slot_color(2, "#123456");
        state.set_override(ExtraId::MenuHeaderText, Some(4));
        state.set_free_slot(Some(ExtraId::Background));

        save_theme(dir.path(), &state).expect("save");
        let loaded = load_theme(dir.path()).expect("load");
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_pieces_keep_their_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = ThemeState::default();
        state.set_slot_color(1, "#0000F8");
        save_theme(dir.path(), &state).expect("save");

        // Drop two of the three values; the palettes alone must load.
        std::fs::remove_file(dir.path().join(EXTRAS_FILE)).expect("rm extras");
        std::fs::remove_file(dir.path().join(FREE_SLOT_FILE)).expect("rm free slot");

        let loaded = load_theme(dir.path()).expect("load");
        assert_eq!(loaded.slots, state.slots);
        assert_eq!(loaded.extras, ThemeState::default().extras);
        assert_eq!(loaded.free_slot, None);
    }

    #[test]
    fn empty_directory_loads_the_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_theme(dir.path()).expect("load");
        assert!(loaded.is_default());
    }
}
