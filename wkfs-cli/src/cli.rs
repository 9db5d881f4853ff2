use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wkfs",
    about = "WaniKani French Synonyms - adds French meanings to unlocked subjects",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(
        long,
        env = "WANIKANI_API_TOKEN",
        hide_env_values = true,
        global = true,
        help = "WaniKani API v2 personal access token"
    )]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Synchronize French synonyms (default if no command specified)")]
    Sync(SyncArgs),

    #[command(about = "Fetch the French datasets and show entry counts")]
    Datasets,

    #[command(subcommand, about = "View and modify configuration")]
    Config(ConfigCommands),
}

#[derive(Args, Default)]
pub struct SyncArgs {
    #[arg(long, help = "Decide every item but send no writes")]
    pub dry_run: bool,

    #[arg(long, help = "Also synchronize radicals")]
    pub include_radicals: bool,

    #[arg(long, help = "Blank every record written during this run once it ends")]
    pub delete_after_run: bool,

    #[arg(long, help = "Request ceiling for this run")]
    pub max_requests: Option<u32>,

    #[arg(long, help = "Highest subject level to consider (defaults to the user's level)")]
    pub max_level: Option<u32>,

    #[arg(short, long, help = "Print the report as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Get a specific configuration value")]
    Get {
        #[arg(help = "Configuration key (e.g., 'request_ceiling', 'include_radicals')")]
        key: String,
    },

    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key")]
        key: String,

        #[arg(help = "New value")]
        value: String,
    },
}
