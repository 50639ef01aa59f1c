use clap::{Parser, Subcommand, ValueEnum};

use crate::transfer::DEFAULT_EXPORT_FILE;

const PASSDESK_LONG_VERSION: &str = concat!(
"version: ", env!("CARGO_PKG_VERSION"), "\n",
"git sha: ", env!("PASSDESK_GIT_SHA"), "\n",
"build time (UTC): ", env!("PASSDESK_BUILD_TIME"), "\n",
"target: ", env!("PASSDESK_TARGET")
);

#[derive(Parser)]
#[command(
    name = "passdesk",
    version = env!("CARGO_PKG_VERSION"),
    long_version = PASSDESK_LONG_VERSION,
    about = " 🗝️ Passdesk — local password book"
)]
pub struct Cli {
    /// Database file path override
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new service entry
    Add {
        /// Service name (prompted when omitted)
        #[arg(long)]
        service: Option<String>,
        /// Service URL
        #[arg(long)]
        url: Option<String>,
        /// Login / username
        #[arg(long)]
        login: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Edit an existing entry; fields without a flag keep their value
    Edit {
        /// Current service name
        service: String,
        /// New service name
        #[arg(long)]
        rename: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        login: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Show URL and login of an entry (password masked)
    Show {
        service: String,
        /// Print the password instead of a mask
        #[arg(long)]
        reveal_password: bool,
    },
    /// Copy a field of an entry to the clipboard
    Get {
        service: String,
        /// Which field to retrieve
        #[arg(long, value_enum, default_value = "password")]
        field: GetFieldArg,
        /// Do not copy to clipboard
        #[arg(long)]
        no_copy: bool,
        /// Print the selected field to stdout (use with --no-copy for safe piping)
        #[arg(long)]
        echo: bool,
        /// Clipboard TTL in seconds (overrides PASSDESK_CLIP_TTL)
        #[arg(long)]
        ttl: Option<u64>,
    },
    /// List entries, optionally filtered by a case-insensitive service substring
    #[command(alias = "search")]
    List {
        #[arg(long)]
        query: Option<String>,
        /// Output JSON array (machine-readable)
        #[arg(long)]
        json: bool,
    },
    /// Remove an entry by service name
    Rm {
        service: String,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Delete every entry
    Clear {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Export all entries to a `;`-separated CSV file
    Export {
        #[arg(default_value = DEFAULT_EXPORT_FILE)]
        path: String,
    },
    /// Import entries from a `;`-separated CSV file (first row is the header)
    Import { path: String },
    /// Open the URL of an entry in the default browser
    Open { service: String },
    /// Launch the interactive Terminal UI
    Tui,
    /// Print the resolved configuration
    Config,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum GetFieldArg {
    Password,
    Login,
    Url,
}
