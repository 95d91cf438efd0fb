// crates/edtheme-cli/src/cmd/show.rs

use std::path::PathBuf;

use clap::Args;
use edtheme_core::ThemeState;

use crate::io;

#[derive(Args)]
pub struct ShowArgs {
    /// Theme directory; defaults apply when omitted
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Share token; takes precedence over --theme
    #[arg(long)]
    pub token: Option<String>,
}

pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let state = io::load_state(args.theme.as_deref(), args.token.as_deref())?;
    print_state(&state);
    if !state.download_enabled() {
        println!("(some colors are malformed; building is disabled)");
    }
    Ok(())
}

pub fn print_state(state: &ThemeState) {
    for slot in &state.slots {
        println!(
            "{}. {:<36} {}  bgr555 {:#06X}",
            slot.id, slot.label, slot.hex, slot.bgr555
        );
    }
    for extra in &state.extras {
        let status = match extra.override_id {
            Some(id) => format!("overrides #{id}"),
            None if state.free_slot == Some(extra.id) => "free slot".to_string(),
            None => "inactive".to_string(),
        };
        println!(
            "{}. {:<36} {}  {}",
            extra.id.slot_number(),
            extra.label,
            extra.hex,
            status
        );
    }
}
