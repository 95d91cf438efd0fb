pub mod resolve;
pub mod state;
