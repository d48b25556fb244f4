use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dsync")]
#[command(about = "rsync-first directory sync between local and ssh-reachable roots", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter config under the user's config directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Validate the config and report what it defines
    Doctor {
        /// Validate a single endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Validate a single link
        #[arg(long)]
        link: Option<String>,

        /// Emit NDJSON on stdout (future)
        #[arg(long)]
        json: bool,
    },

    /// List a directory via rsync --list-only (planned)
    Ls,

    /// Sync remote -> local
    Pull(SyncArgs),

    /// Sync local -> remote
    Push(SyncArgs),

    /// Remove .dsync-partial staging directories (planned)
    Clean,
}

#[derive(Args)]
pub struct SyncArgs {
    /// Treat <NAME> as a link name
    #[arg(long)]
    pub link: bool,

    /// Use the link's configured paths batch (conflicts with a scope and --all)
    #[arg(long)]
    pub use_link_paths: bool,

    /// Allow full-root operations
    #[arg(long)]
    pub all: bool,

    /// Preview only (no prompt, no apply)
    #[arg(long)]
    pub dry_run: bool,

    /// Apply without prompting (future)
    #[arg(long)]
    pub yes: bool,

    /// Stream full rsync output (future)
    #[arg(long)]
    pub verbose: bool,

    /// Emit NDJSON events on stdout (future)
    #[arg(long)]
    pub json: bool,

    /// Override the high-risk destination blocklist (future)
    #[arg(long)]
    pub dangerous: bool,

    /// Endpoint or link name
    pub name: String,

    /// Relative scope below the root (use '--' before a scope starting with '-')
    pub relative_path: Option<String>,
}
