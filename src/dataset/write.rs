//! Result writers
//!
//! Both formats render an unknown diameter as an empty value (empty CSV
//! field, JSON `null`), never as `NaN`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::database::ApproachView;
use crate::model::NearEarthObject;
use crate::observability::{Event, Logger};

use super::errors::{DatasetError, DatasetResult};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Picks the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> DatasetResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(OutputFormat::Csv),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(DatasetError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: &'static str,
}

#[derive(Debug, Serialize)]
struct JsonApproach<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: Option<JsonNeo<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonNeo<'a> {
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

fn known_diameter(neo: &NearEarthObject) -> Option<f64> {
    neo.has_known_diameter().then(|| neo.diameter())
}

impl<'a> CsvRow<'a> {
    fn from_view(view: &ApproachView<'a>) -> Self {
        let approach = view.approach();
        let neo = view.neo();
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance(),
            velocity_km_s: approach.velocity(),
            designation: neo.map_or("", |neo| neo.designation()),
            name: neo.and_then(|neo| neo.name()).unwrap_or(""),
            diameter_km: neo.and_then(known_diameter),
            potentially_hazardous: if neo.is_some_and(|neo| neo.hazardous()) {
                "True"
            } else {
                "False"
            },
        }
    }
}

impl<'a> JsonApproach<'a> {
    fn from_view(view: &ApproachView<'a>) -> Self {
        let approach = view.approach();
        Self {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance(),
            velocity_km_s: approach.velocity(),
            neo: view.neo().map(|neo| JsonNeo {
                designation: neo.designation(),
                name: neo.name().unwrap_or(""),
                diameter_km: known_diameter(neo),
                potentially_hazardous: neo.hazardous(),
            }),
        }
    }
}

/// Writes results as CSV with a header row. Returns the number of rows.
pub fn write_csv<'a, W, I>(writer: W, results: I) -> DatasetResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut count = 0;

    for view in results {
        csv_writer.serialize(CsvRow::from_view(&view))?;
        count += 1;
    }

    // serde only emits the header with the first row
    if count == 0 {
        csv_writer.write_record([
            "datetime_utc",
            "distance_au",
            "velocity_km_s",
            "designation",
            "name",
            "diameter_km",
            "potentially_hazardous",
        ])?;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Writes results as a pretty-printed JSON array. Returns the number of entries.
pub fn write_json<'a, W, I>(mut writer: W, results: I) -> DatasetResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let entries: Vec<JsonApproach<'a>> = results
        .into_iter()
        .map(|view| JsonApproach::from_view(&view))
        .collect();

    serde_json::to_writer_pretty(&mut writer, &entries)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(entries.len())
}

/// Writes results to a CSV file
pub fn write_to_csv<'a, I>(results: I, path: &Path) -> DatasetResult<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    write_to_file(OutputFormat::Csv, results, path)
}

/// Writes results to a JSON file
pub fn write_to_json<'a, I>(results: I, path: &Path) -> DatasetResult<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    write_to_file(OutputFormat::Json, results, path)
}

/// Writes results to `path` in the given format
pub fn write_to_file<'a, I>(format: OutputFormat, results: I, path: &Path) -> DatasetResult<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let writer = BufWriter::new(File::create(path)?);
    let count = match format {
        OutputFormat::Csv => write_csv(writer, results)?,
        OutputFormat::Json => write_json(writer, results)?,
    };

    Logger::info(
        Event::ResultsWritten,
        &[
            ("format", format.as_str()),
            ("path", &path.display().to_string()),
            ("count", &count.to_string()),
        ],
    );

    Ok(count)
}
