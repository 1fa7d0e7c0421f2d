//! doc subcommand handler.

use anyhow::Result;
use clap::Args;
use seq_catalog::{Generator, Library};

use crate::format::format_prefix;

/// Arguments for the doc subcommand
#[derive(Args, Debug)]
pub struct DocArgs {
    /// Generators to describe; all of them when omitted
    pub names: Vec<String>,

    /// Number of sample terms
    #[arg(long, default_value_t = 10)]
    pub items: usize,
}

pub fn run(args: DocArgs) -> Result<()> {
    let library = Library::global();
    let generators: Vec<&Generator> = if args.names.is_empty() {
        library.all().iter().collect()
    } else {
        args.names
            .iter()
            .map(|name| library.resolve(name))
            .collect::<Result<_, _>>()?
    };

    for g in generators {
        println!("{}: {}", g.name(), g.doc());
        println!("    {}", format_prefix(&g.prefix(args.items)));
        if let Some(known) = g.known_len().filter(|_| !g.covers(args.items)) {
            println!("    (only {} terms known)", known);
        }
    }
    Ok(())
}
