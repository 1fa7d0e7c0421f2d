//! `seq_cli`: identify integer sequences from a prefix.
//!
//! - `search <int>...` ranks library combinations matching the prefix
//! - `test <expression>` compiles an expression and checks the search
//!   rediscovers it from its own prefix
//! - `doc [name...]` lists library generators

mod commands;
mod format;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{doc::DocArgs, search::SearchArgs, test::TestArgs};

#[derive(Parser, Debug)]
#[command(name = "seq_cli", version, about = "Identify integer sequences from a finite prefix")]
struct Cli {
    /// Log search progress to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find library expressions whose prefix matches the given integers
    Search(SearchArgs),
    /// Compile an expression and check that search rediscovers it
    Test(TestArgs),
    /// Describe library generators
    Doc(DocArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Command::Search(args) => commands::search::run(args),
        Command::Test(args) => commands::test::run(args),
        Command::Doc(args) => commands::doc::run(args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
