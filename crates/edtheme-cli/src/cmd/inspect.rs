// crates/edtheme-cli/src/cmd/inspect.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use edtheme_core::firmware::{self, AddressRole, FirmwareVersion};
use edtheme_core::patch::decode::parse_records;

#[derive(Args)]
pub struct InspectArgs {
    /// Input .ips path
    #[arg(long)]
    pub r#in: PathBuf,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in)
        .with_context(|| format!("read {}", args.r#in.display()))?;
    let records = parse_records(&bytes)
        .with_context(|| format!("parse {}", args.r#in.display()))?;

    let roles = firmware::address_roles();
    println!("{} records", records.len());
    for record in &records {
        let value = record
            .value
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        let meaning = u16::try_from(record.offset)
            .ok()
            .and_then(|addr| roles.get(&addr).map(|role| describe(addr, *role)))
            .unwrap_or_else(|| "(unknown)".to_string());
        println!("  {:#08X}  len {:>2}  {:<8}  {}", record.offset, record.value.len(), value, meaning);
    }
    Ok(())
}

fn describe(addr: u16, role: AddressRole) -> String {
    let version = version_of(addr)
        .map(|v| format!("{v:?} "))
        .unwrap_or_default();
    match role {
        AddressRole::Value { slot } => format!("{version}slot {slot} color"),
        AddressRole::Index { slot, position } => {
            format!("{version}slot {slot} palette index [{position}]")
        }
    }
}

fn version_of(addr: u16) -> Option<FirmwareVersion> {
    for version in FirmwareVersion::KNOWN {
        for slot in 1..=5u8 {
            let addrs = firmware::slot_addresses(version, slot);
            if addrs.value_addr == addr || addrs.index_addrs.contains(&addr) {
                return Some(version);
            }
        }
    }
    None
}
