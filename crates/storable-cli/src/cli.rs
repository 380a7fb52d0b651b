use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use storable_core::VERSION;

/// Storable - typed values in a durable or session-scoped key-value store
#[derive(Parser)]
#[command(name = "storable")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "STORABLE_CONFIG")]
    pub config: Option<String>,

    /// Path to the durable store file
    #[arg(long, global = true, env = "STORABLE_DURABLE_PATH")]
    pub durable_path: Option<String>,

    /// Path to the session store file
    #[arg(long, global = true, env = "STORABLE_SESSION_PATH")]
    pub session_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Payload shape used when reading a value back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Record if the stored value holds an object, sequence if it holds an array
    Auto,
    /// Key-value record
    Record,
    /// Ordered sequence
    Sequence,
}

/// Arguments for the `store` command
#[derive(Args)]
pub struct StoreArgs {
    /// Key to store under
    #[arg(value_name = "KEY")]
    pub key: String,

    /// JSON object or array (read from stdin when omitted)
    #[arg(value_name = "JSON")]
    pub value: Option<String>,

    /// Storage tier: durable (1) or session (2)
    #[arg(short, long, default_value = "durable")]
    pub tier: String,
}

/// Arguments for the `retrieve` command
#[derive(Args)]
pub struct RetrieveArgs {
    /// Key to read
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Storage tier: durable (1) or session (2)
    #[arg(short, long, default_value = "durable")]
    pub tier: String,

    /// Expected payload shape
    #[arg(long, value_enum, default_value_t = Shape::Auto)]
    pub shape: Shape,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Key to delete
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Storage tier: durable (1) or session (2)
    #[arg(short, long, default_value = "durable")]
    pub tier: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only list one tier
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the resolved store locations
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a config file with the default store locations
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a JSON object or array under a key
    Store(StoreArgs),

    /// Print the value stored under a key
    Retrieve(RetrieveArgs),

    /// Delete the value stored under a key
    Remove(RemoveArgs),

    /// List stored keys
    List(ListArgs),

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigSubcommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_store_defaults_to_durable() {
        let cli = Cli::try_parse_from(["storable", "store", "k", "[1]"]).unwrap();
        match cli.command {
            Commands::Store(args) => {
                assert_eq!(args.tier, "durable");
                assert_eq!(args.value.as_deref(), Some("[1]"));
            }
            _ => panic!("expected store"),
        }
    }

    #[test]
    fn test_retrieve_shape_flag() {
        let cli = Cli::try_parse_from([
            "storable", "retrieve", "k", "--tier", "session", "--shape", "sequence",
        ])
        .unwrap();
        match cli.command {
            Commands::Retrieve(args) => {
                assert_eq!(args.tier, "session");
                assert_eq!(args.shape, Shape::Sequence);
            }
            _ => panic!("expected retrieve"),
        }
    }
}
