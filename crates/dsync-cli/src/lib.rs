mod args;
mod commands;
mod handlers;
mod views;

pub use args::{Cli, Commands, SyncArgs};
pub use commands::run;
