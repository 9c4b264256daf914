//! Command-line interface module
//!
//! Argument definitions live in `args`; each command has its own handler.

pub mod analyze;
pub mod args;
pub mod config;
pub mod doctor;
pub mod generate;
pub mod spinner;

pub use analyze::{handle_analyze_command, handle_themes_command};
pub use args::{Cli, Commands};
pub use config::handle_config_command;
pub use doctor::handle_doctor_command;
pub use generate::handle_generate_command;
