//! Application context for the Storable CLI.
//!
//! Bundles CLI arguments with lazily-resolved store paths.

use once_cell::unsync::OnceCell;

use storable_core::storage::{FileStore, TieredStorage};

use crate::cli::Cli;

use super::resolver::{resolve_store_paths, StorePaths};

/// File-backed storage as opened by the CLI.
pub type CliStorage = TieredStorage<FileStore, FileStore>;

/// Application context that bundles CLI args with resolved store paths.
pub struct AppContext<'a> {
    cli: &'a Cli,
    paths: OnceCell<StorePaths>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            paths: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the store paths, resolving them on first use.
    pub fn paths(&self) -> anyhow::Result<&StorePaths> {
        self.paths.get_or_try_init(|| resolve_store_paths(self.cli))
    }

    /// Open both tiers.
    pub fn open_storage(&self) -> anyhow::Result<CliStorage> {
        let paths = self.paths()?;
        Ok(TieredStorage::open_files(&paths.durable, &paths.session)?)
    }
}
