// crates/edtheme-cli/src/cmd/build.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use edtheme_core::patch::encode::build_patch;

use crate::io;

#[derive(Args)]
pub struct BuildArgs {
    /// Theme directory (palettes.json / extras.json / free_slot.json)
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Share token; takes precedence over --theme
    #[arg(long)]
    pub token: Option<String>,

    /// Output .ips path
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: BuildArgs) -> anyhow::Result<()> {
    let state = io::load_state(args.theme.as_deref(), args.token.as_deref())?;
    if !state.download_enabled() {
        anyhow::bail!("theme has malformed colors; fix the hex values before building");
    }

    let bytes = build_patch(&state);
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write {}", args.out.display()))?;
    println!("wrote {} bytes to {}", bytes.len(), args.out.display());
    Ok(())
}
