//! CLI type definitions.

use clap::Parser;

#[derive(Parser)]
#[command(name = "hello-md")]
#[command(version)]
#[command(
    about = "Write a timestamped Hello World markdown file into the current directory",
    long_about = None
)]
pub(crate) struct Cli {
    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
