//! Runtime context for CLI commands

use anyhow::{Context, Result};
use sb_core::{catalog, Config, FixtureSet};
use sb_db::Database;
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing loaded config and database connection
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Database connection
    pub db: Arc<dyn Database>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let project_path = Path::new(&args.project_dir);

        // Load config from custom path or project directory
        let mut config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(project_path).context("Failed to load project configuration")?
        };

        // Apply database path override
        if let Some(database) = &args.database {
            config.database.path = database.clone();
        }

        let db = sb_db::connect(&config.database).context("Failed to connect to database")?;

        Ok(Self {
            config,
            db,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Resolve fixture sets from a comma-separated argument, falling
    /// back to the config's default selection
    pub fn resolve_sets(&self, sets_arg: &Option<String>) -> Result<Vec<FixtureSet>> {
        let names: Vec<String> = match sets_arg {
            Some(sets) => sets
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => self.config.fixtures.clone(),
        };

        names
            .iter()
            .map(|name| catalog::get(name).with_context(|| format!("Unknown fixture set: {}", name)))
            .collect()
    }
}
