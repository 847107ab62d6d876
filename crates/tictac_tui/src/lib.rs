//! Terminal front end for tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the [`tictac_core::BoardStore`] and subscribes to its
//!   events through a channel; all input is turned into [`input::Action`]s
//! - **UI**: stateless rendering of the app into a ratatui frame, plus the
//!   screen layout used for mouse hit testing
//! - **Celebration**: confetti and winner banner, stepped once per tick
//! - **Config**: TOML file and CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod celebration;
pub mod cli;
pub mod config;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
