// crates/edtheme-cli/src/cmd/mod.rs

pub mod build;
pub mod import;
pub mod inspect;
pub mod show;
pub mod token;
