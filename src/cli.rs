use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "linefix",
    version,
    about = "Rejoin split className attributes and normalize CRLF line endings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Repair the given files, or the configured target list when none are given
    Fix {
        paths: Vec<String>,
        /// Repeat the className join until nothing changes
        #[arg(long)]
        until_stable: bool,
    },
    /// Find every page file under a directory and repair the ones that need it
    Scan {
        #[arg(long)]
        root: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Overwrite one line in each file, optionally dropping its split-off tail
    ReplaceLine {
        #[arg(required = true)]
        files: Vec<String>,
        #[arg(long)]
        line: usize,
        #[arg(long = "with", allow_hyphen_values = true)]
        replacement: String,
        #[arg(long)]
        drop_continuation: Option<String>,
    },
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
    Completions {
        #[arg(long)]
        shell: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    Get { key: String },
    Set { key: String, value: String },
}
