pub mod app;
pub mod commands;
pub mod render;
pub mod repl;

pub use app::{Cli, Commands, LogLevel, OutputFormat};
pub use repl::{Input, Shell};
