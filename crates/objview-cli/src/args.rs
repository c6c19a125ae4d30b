use clap::{Parser, Subcommand, ValueEnum};
use objview_types::Mode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "objview")]
#[command(about = "Render remote value-inspection preview documents as text", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable ANSI colors even when stdout is a terminal
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a preview document
    Render {
        /// Path to a preview JSON document
        file: PathBuf,

        #[arg(long, default_value = "full")]
        mode: ModeArg,

        /// Print the one-line title instead of the full preview
        #[arg(long)]
        title: bool,
    },

    /// Parse and render a preview, reporting the losslessness verdict.
    /// Exits non-zero when the rendering is not lossless.
    Check {
        /// Path to a preview JSON document
        file: PathBuf,

        #[arg(long, default_value = "full")]
        mode: ModeArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Brief,
    Full,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Brief => Mode::Brief,
            ModeArg::Full => Mode::Full,
        }
    }
}
