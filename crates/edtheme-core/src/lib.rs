pub mod color;
pub mod editor;
pub mod error;
pub mod firmware;
pub mod patch;
pub mod share;
pub mod theme;

pub use crate::editor::Editor;
pub use crate::error::{Result, ThemeError};
pub use crate::theme::state::{ExtraId, ExtraSlot, Slot, ThemeState};
