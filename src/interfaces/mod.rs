//! User interfaces
//!
//! - `cli`: one-shot commands with colored output
//! - `tui`: interactive terminal dashboard (feature `tui`)

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
