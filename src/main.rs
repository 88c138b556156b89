use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use coinmap::{
    convert::{self, CONFIRMATION, DEFAULT_DESTINATION, DEFAULT_SOURCE},
    domain::symbol_map::DuplicatePolicy,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map coin symbols to coin ids.
#[derive(Parser)]
#[command(name = "coinmap", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a coin list into a symbol map (the default)
    Convert {
        /// JSON array of coins with `symbol` and `id` fields
        #[arg(default_value = DEFAULT_SOURCE)]
        source: PathBuf,

        /// Where to write the symbol map
        #[arg(default_value = DEFAULT_DESTINATION)]
        destination: PathBuf,

        /// How to handle two coins sharing a symbol
        #[arg(long, value_enum, default_value_t = OnDuplicate::LastWriteWins)]
        on_duplicate: OnDuplicate,
    },
    /// Resolve symbols against an existing symbol map
    Lookup {
        /// Symbol map written by `convert`
        #[arg(long, default_value = DEFAULT_DESTINATION)]
        map: PathBuf,

        /// Symbols to resolve, case-insensitive
        #[arg(required = true)]
        symbols: Vec<String>,
    },
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OnDuplicate {
    /// Keep the id of the later coin
    #[default]
    LastWriteWins,
    /// Fail on the first repeated symbol
    Reject,
}

impl From<OnDuplicate> for DuplicatePolicy {
    fn from(value: OnDuplicate) -> Self {
        match value {
            OnDuplicate::LastWriteWins => DuplicatePolicy::LastWriteWins,
            OnDuplicate::Reject => DuplicatePolicy::Reject,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Convert {
            source: DEFAULT_SOURCE.into(),
            destination: DEFAULT_DESTINATION.into(),
            on_duplicate: OnDuplicate::default(),
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match cli.command.unwrap_or_default() {
        Command::Convert {
            source,
            destination,
            on_duplicate,
        } => {
            let conversion = convert::convert(&source, &destination, on_duplicate.into())?;
            info!(
                records = conversion.records,
                symbols = conversion.symbols,
                overwritten = conversion.overwritten(),
                "conversion finished"
            );
            println!("{CONFIRMATION}");
        }
        Command::Lookup { map, symbols } => {
            let map = convert::load_map(&map)?;
            for symbol in symbols {
                let id = map.resolve(&symbol)?;
                println!("{symbol}\t{id}");
            }
        }
    }

    Ok(())
}
