// crates/edtheme-cli/src/io/mod.rs

pub mod storage;

use std::path::Path;

use edtheme_core::{share, ThemeState};

/// Resolve the input state for a command. A share token outranks the
/// stored theme, the same precedence the web tool gave its `t` query
/// parameter; with neither, the built-in defaults apply.
pub fn load_state(theme_dir: Option<&Path>, token: Option<&str>) -> anyhow::Result<ThemeState> {
    if let Some(token) = token {
        let mut state = ThemeState::default();
        if !share::apply_token(&mut state, token) {
            anyhow::bail!("unrecognized share token");
        }
        return Ok(state);
    }
    match theme_dir {
        Some(dir) => storage::load_theme(dir),
        None => Ok(ThemeState::default()),
    }
}
