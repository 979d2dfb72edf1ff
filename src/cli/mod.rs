pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
mod shell;
pub mod shell_context;
pub mod table;

pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
