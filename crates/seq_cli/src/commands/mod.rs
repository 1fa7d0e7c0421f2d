//! Subcommand handlers and the options they share.

pub mod doc;
pub mod search;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use seq_search::SearchConfig;

/// Search bounds and result display, shared by `search` and `test`.
#[derive(Args, Debug, Clone)]
pub struct SearchOptions {
    /// TOML file with search bounds; flags below override it
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Largest number of generators combined linearly
    #[arg(long)]
    pub max_generators: Option<usize>,

    /// Bound on coefficient magnitude
    #[arg(long)]
    pub max_coefficient: Option<u64>,

    /// Skip termwise products of two generators
    #[arg(long, default_value_t = false)]
    pub no_products: bool,

    /// Accept non-integer coefficients
    #[arg(long, default_value_t = false)]
    pub rationals: bool,

    /// Stop after checking this many candidate subsets
    #[arg(long)]
    pub node_limit: Option<usize>,

    /// Number of candidates to display
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Number of terms to display per sequence
    #[arg(long, default_value_t = 10)]
    pub items: usize,
}

impl SearchOptions {
    /// Defaults, then the config file, then command-line overrides.
    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)
                .with_context(|| format!("loading search config from {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if let Some(m) = self.max_generators {
            config.max_generators = m;
        }
        if let Some(b) = self.max_coefficient {
            config.max_coefficient = b;
        }
        if self.no_products {
            config.products = false;
        }
        if self.rationals {
            config.rationals = true;
        }
        if self.node_limit.is_some() {
            config.node_limit = self.node_limit;
        }
        Ok(config)
    }
}
