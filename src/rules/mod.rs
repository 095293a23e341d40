//! Game rules for Renju win judging
//!
//! The judged rule set is deliberately small: exactly five in a row wins,
//! overlines (six or more) do not. Forbidden-move enforcement is out of
//! scope; boards are taken as given.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winner, WinResult};
