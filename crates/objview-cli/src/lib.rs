mod args;
mod commands;
mod output;

pub use args::{Cli, Commands, ModeArg};
pub use commands::run;
