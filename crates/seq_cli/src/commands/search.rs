//! search subcommand handler.

use anyhow::Result;
use clap::Args;
use num_bigint::BigInt;
use seq_search::Searcher;

use super::SearchOptions;
use crate::format::{format_prefix, format_results};

/// Arguments for the search subcommand
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Observed prefix, starting at n = 0
    #[arg(required = true, allow_negative_numbers = true, value_name = "INT")]
    pub values: Vec<BigInt>,

    #[command(flatten)]
    pub options: SearchOptions,
}

pub fn run(args: SearchArgs) -> Result<()> {
    let searcher = Searcher::new(args.options.search_config()?);
    let results = searcher.search(&args.values);

    println!("target: {}", format_prefix(&args.values));
    for line in format_results(&results, args.options.limit, args.options.items) {
        println!("{}", line);
    }
    Ok(())
}
