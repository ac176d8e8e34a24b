use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `IB_LOG=itembucket=debug`.
pub const LOG_ENV: &str = "IB_LOG";

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "ib", bin_name = "ib", version = get_version())]
#[command(about = "Two-bucket todo list: general and today", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the storage file (default: $IB_HOME, then your home directory)
    #[arg(short = 's', long = "storage-path", global = true, value_name = "DIR")]
    pub storage_path: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item to the general bucket (or today with --today)
    #[command(alias = "a")]
    Add {
        /// Title of the item
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Add to the today bucket instead
        #[arg(short, long)]
        today: bool,
    },

    /// List items in a bucket (both buckets when omitted)
    #[command(alias = "ls")]
    List {
        /// 'general' or 'today'
        bucket: Option<String>,
    },

    /// Mark an item done, or pending again if it is already done
    #[command(alias = "t")]
    Toggle {
        /// Item id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },

    /// Move an item to another bucket
    #[command(alias = "mv")]
    Move {
        /// Item id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,

        /// 'general' or 'today'
        bucket: String,
    },

    /// Move everything in today back to general
    EmptyToday,

    /// Delete all done items
    Cleanup,

    /// Change an item's title
    #[command(alias = "e")]
    Edit {
        /// Item id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,

        /// New title
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete one item
    #[command(alias = "rm")]
    Delete {
        /// Item id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },

    /// Renumber item ids sequentially starting at 1
    Compact,

    /// Print the storage file path
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., file-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Install the stderr log subscriber. `IB_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "itembucket=debug"
    } else {
        "itembucket=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
