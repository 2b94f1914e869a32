//! CLI command implementations
//!
//! Every command follows the same sequence:
//! 1. Configuration load (file, then command-line overrides)
//! 2. Dataset load
//! 3. Linkage
//! 4. Command execution (read-only)

use std::io::{self, Write};

use crate::database::NeoDatabase;
use crate::dataset::{load_approaches, load_neos, write_to_file, OutputFormat};
use crate::filter::{create_filters, limit};
use crate::observability::{Event, Logger};

use super::args::{Cli, Command, InspectArgs, QueryArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_approaches, write_neo};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_cli(cli)
}

/// Run a parsed command line, printing to stdout
pub fn run_cli(cli: Cli) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    Logger::set_min_severity(config.severity()?);

    let db = open_database(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::Inspect(args) => inspect(&db, args, &mut out),
        Command::Query(args) => query(&db, &config, args, &mut out).map(|_| ()),
    }
}

/// Loads the config file, if any, and applies path overrides
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            Logger::info(
                Event::ConfigLoaded,
                &[("path", &path.display().to_string())],
            );
            config
        }
        None => Config::default(),
    };
    Ok(config.with_overrides(cli.neofile.clone(), cli.cadfile.clone()))
}

/// Loads both datasets and links them
pub fn open_database(config: &Config) -> CliResult<NeoDatabase> {
    let neos = load_neos(&config.neo_path)?;
    let approaches = load_approaches(&config.cad_path)?;
    Ok(NeoDatabase::new(neos, approaches))
}

/// Print one NEO, and its approaches with `--verbose`
pub fn inspect<W: Write>(db: &NeoDatabase, args: &InspectArgs, out: &mut W) -> CliResult<()> {
    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), _) => db.get_neo_by_designation(pdes),
        (None, Some(name)) => db.get_neo_by_name(name),
        (None, None) => {
            return Err(CliError::invalid_argument(
                "inspect requires --pdes or --name",
            ))
        }
    };
    let neo = neo.ok_or_else(CliError::not_found)?;

    let approaches = args.verbose.then(|| db.approaches_for(neo));
    write_neo(out, neo, approaches)
}

/// Run a query and print or export the results.
///
/// Without `--outfile`, output is capped by `--limit` or the configured
/// default. With `--outfile`, only `--limit` caps it. Returns the number
/// of results produced.
pub fn query<W: Write>(
    db: &NeoDatabase,
    config: &Config,
    args: &QueryArgs,
    out: &mut W,
) -> CliResult<usize> {
    // Reject a bad extension before scanning
    let format = args
        .outfile
        .as_deref()
        .map(OutputFormat::from_path)
        .transpose()?;

    let filters = create_filters(&args.criteria());
    let max = match (&args.outfile, args.limit) {
        (_, Some(n)) => Some(n),
        (Some(_), None) => None,
        (None, None) => config.default_limit,
    };
    let results = limit(db.query(&filters), max);

    let count = match (&args.outfile, format) {
        (Some(path), Some(format)) => write_to_file(format, results, path)?,
        _ => write_approaches(out, results)?,
    };

    Logger::info(
        Event::QueryComplete,
        &[
            ("filters", &filters.len().to_string()),
            ("returned", &count.to_string()),
        ],
    );

    Ok(count)
}
