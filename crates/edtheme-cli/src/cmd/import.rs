// crates/edtheme-cli/src/cmd/import.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use edtheme_core::patch::decode::apply_patch;
use edtheme_core::ThemeState;

use crate::cmd::show::print_state;
use crate::io::storage;

#[derive(Args)]
pub struct ImportArgs {
    /// Input .ips path
    #[arg(long)]
    pub r#in: PathBuf,

    /// Theme directory to write the reconstructed state into
    #[arg(long)]
    pub theme: Option<PathBuf>,
}

pub fn run(args: ImportArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in)
        .with_context(|| format!("read {}", args.r#in.display()))?;

    let mut state = ThemeState::default();
    apply_patch(&mut state, &bytes)
        .with_context(|| format!("decode {}", args.r#in.display()))?;

    if let Some(dir) = &args.theme {
        storage::save_theme(dir, &state)?;
        println!("imported into {}", dir.display());
    }
    print_state(&state);
    Ok(())
}
