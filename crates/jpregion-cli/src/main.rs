//! jpregion — Command-line interface for jpregion-core
//!
//! Usage examples
//! --------------
//!
//! - Show one prefecture, in English
//!   $ jpregion get JP-13 --locale en
//!
//! - Show every prefecture (optionally below a parent region)
//!   $ jpregion all JP
//!   $ jpregion all JP --parent JP-13
//!
//! - List names keyed by id, as JSON
//!   $ jpregion --json list JP --locale en
//!
//! Data source
//! -----------
//!
//! By default the CLI reads `<scope>.json` files from the data directory
//! shipped with `jpregion-core`. Use `--data-dir <path>` for another dataset
//! or `--bundled` for the snapshot compiled into the binary. Set `RUST_LOG`
//! (e.g. `RUST_LOG=jpregion_core=debug`) to see cache and load diagnostics.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use jpregion_core::{DefinitionSource, RegionLookup, RegionRepository};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    #[cfg(feature = "bundled")]
    if args.bundled {
        return run(&args, &RegionRepository::bundled());
    }
    #[cfg(not(feature = "bundled"))]
    if args.bundled {
        anyhow::bail!("this build has no bundled dataset; use --data-dir");
    }

    let repo = match &args.data_dir {
        Some(dir) => RegionRepository::with_data_dir(dir),
        None => RegionRepository::new(),
    };
    tracing::debug!(dir = %repo.store().source().dir().display(), "using definition files");
    run(&args, &repo)
}

fn run<S: DefinitionSource>(args: &CliArgs, repo: &RegionRepository<S>) -> anyhow::Result<()> {
    let locale = args.locale.as_deref();

    match &args.command {
        Commands::Get { id } => match repo.get(id, locale) {
            Some(region) if args.json => println!("{}", serde_json::to_string_pretty(&region)?),
            Some(region) => {
                println!("Region: {}", region.name());
                println!("ID: {}", region.id());
                println!("Code: {}", region.code());
                println!("Country: {}", region.country_code());
                println!("Parent: {}", region.parent_id().unwrap_or("-"));
                println!("Locale: {}", region.locale());
            }
            None => eprintln!("No region found for: {id}"),
        },

        Commands::All { country, parent } => {
            let regions = repo.get_all(country, parent.as_deref(), locale);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&regions)?);
            } else if regions.is_empty() {
                println!("No regions found for {country}");
            } else {
                for region in regions.values() {
                    println!("{} [{}] {}", region.id(), region.code(), region.name());
                }
            }
        }

        Commands::List { country, parent } => {
            let list = repo.get_list(country, parent.as_deref(), locale);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                for (id, name) in &list {
                    println!("{id}\t{name}");
                }
            }
        }
    }

    Ok(())
}
