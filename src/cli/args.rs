//! CLI argument definitions using clap
//!
//! Commands:
//! - neodb inspect (--pdes <designation> | --name <name>) [--verbose]
//! - neodb query [criteria...] [--limit N] [--outfile <path>]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::filter::Criteria;

/// neodb - Query near-Earth object close approaches
#[derive(Parser, Debug)]
#[command(name = "neodb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the NEO CSV file (overrides config)
    #[arg(long, global = true)]
    pub neofile: Option<PathBuf>,

    /// Path to the close-approach JSON file (overrides config)
    #[arg(long, global = true)]
    pub cadfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up one NEO by designation or name
    Inspect(InspectArgs),

    /// List close approaches matching the given criteria
    Query(QueryArgs),
}

#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("target").required(true).args(["pdes", "name"])))]
pub struct InspectArgs {
    /// Primary designation of the NEO
    #[arg(short, long)]
    pub pdes: Option<String>,

    /// IAU name of the NEO
    #[arg(short, long)]
    pub name: Option<String>,

    /// Also list the NEO's close approaches
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only approaches on this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Only approaches on or after this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// Only approaches on or before this date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// Minimum approach distance (au)
    #[arg(long)]
    pub min_distance: Option<f64>,

    /// Maximum approach distance (au)
    #[arg(long)]
    pub max_distance: Option<f64>,

    /// Minimum relative velocity (km/s)
    #[arg(long)]
    pub min_velocity: Option<f64>,

    /// Maximum relative velocity (km/s)
    #[arg(long)]
    pub max_velocity: Option<f64>,

    /// Minimum NEO diameter (km)
    #[arg(long)]
    pub min_diameter: Option<f64>,

    /// Maximum NEO diameter (km)
    #[arg(long)]
    pub max_diameter: Option<f64>,

    /// Only potentially hazardous NEOs
    #[arg(long, conflicts_with = "not_hazardous")]
    pub hazardous: bool,

    /// Only NEOs that are not potentially hazardous
    #[arg(long)]
    pub not_hazardous: bool,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Write results to a .csv or .json file instead of stdout
    #[arg(short, long)]
    pub outfile: Option<PathBuf>,
}

impl QueryArgs {
    /// Converts the flags into query criteria
    pub fn criteria(&self) -> Criteria {
        let hazardous = match (self.hazardous, self.not_hazardous) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        };

        Criteria {
            date: self.date,
            start_date: self.start_date,
            end_date: self.end_date,
            distance_min: self.min_distance,
            distance_max: self.max_distance,
            velocity_min: self.min_velocity,
            velocity_max: self.max_velocity,
            diameter_min: self.min_diameter,
            diameter_max: self.max_diameter,
            hazardous,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date: {}", s, e))
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_flags_to_criteria() {
        let cli = Cli::try_parse_from([
            "neodb",
            "query",
            "--start-date",
            "2020-01-01",
            "--min-distance",
            "0",
            "--not-hazardous",
            "--limit",
            "5",
        ])
        .unwrap();

        let Command::Query(args) = cli.command else {
            panic!("expected query command");
        };
        let criteria = args.criteria();
        assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(criteria.distance_min, Some(0.0));
        assert_eq!(criteria.hazardous, Some(false));
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn test_hazard_flags_conflict() {
        let result = Cli::try_parse_from(["neodb", "query", "--hazardous", "--not-hazardous"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_date() {
        let result = Cli::try_parse_from(["neodb", "query", "--date", "2020-Jan-01"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_requires_target() {
        assert!(Cli::try_parse_from(["neodb", "inspect"]).is_err());

        let cli = Cli::try_parse_from(["neodb", "--neofile", "n.csv", "inspect", "--name", "Eros"])
            .unwrap();
        assert_eq!(cli.neofile, Some(PathBuf::from("n.csv")));
        let Command::Inspect(args) = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(args.name.as_deref(), Some("Eros"));
        assert!(!args.verbose);
    }
}
