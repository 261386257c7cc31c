pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kacker")]
#[command(about = "A fragment-routed Hacker News reader", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/kacker/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one fragment and write the page
    Render {
        /// Fragment to start at, e.g. "#/page/2" or "#/show/42"
        #[arg(default_value = "")]
        fragment: String,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the written page in the default browser
        #[arg(long, requires = "output")]
        open: bool,
    },
    /// Navigate interactively; each line read from stdin is a new fragment
    Browse {
        /// Page file rewritten after every navigation (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the page in the default browser after the first render
        #[arg(long)]
        open: bool,
    },
}
