pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "linkcard")]
#[command(about = "A terminal front end for key generation and link previews", long_about = None)]
pub struct Cli {
    /// Base URL of the API server (overrides the config file)
    #[arg(long, global = true)]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a page and print its preview card
    Preview {
        /// URL of the page to preview
        url: String,
    },
    /// Generate a key via the API
    Key {
        /// Key length in characters
        #[arg(default_value_t = 16)]
        length: u32,
    },
    /// Launch the TUI
    Tui,
}
