//! Dataset loaders
//!
//! - NEOs: CSV with a header row, columns read by name
//! - Close approaches: CAD JSON (`fields` + `data` rows)

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{parse_approach_time, CloseApproach, NearEarthObject};
use crate::observability::{Event, Logger};

use super::errors::{DatasetError, DatasetResult};

/// Hazard code marking a potentially hazardous asteroid
const HAZARDOUS_CODE: &str = "Y";

/// CAD columns read by the loader
const CAD_DESIGNATION: &str = "des";
const CAD_TIME: &str = "cd";
const CAD_DISTANCE: &str = "dist";
const CAD_VELOCITY: &str = "v_rel";

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    data: Vec<Vec<Value>>,
}

/// Loads NEOs from a CSV file
pub fn load_neos(path: &Path) -> DatasetResult<Vec<NearEarthObject>> {
    let file = File::open(path)?;
    let neos = read_neos(BufReader::new(file))?;

    Logger::info(
        Event::DatasetLoaded,
        &[
            ("kind", "neos"),
            ("path", &path.display().to_string()),
            ("count", &neos.len().to_string()),
        ],
    );

    Ok(neos)
}

/// Reads NEOs from CSV.
///
/// An empty `name` is absent and an empty `diameter` is unknown (NaN).
/// Only a `pha` of `Y` marks the NEO hazardous.
pub fn read_neos<R: Read>(reader: R) -> DatasetResult<Vec<NearEarthObject>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut neos = Vec::new();

    for (idx, row) in csv_reader.deserialize::<NeoRow>().enumerate() {
        let row = row?;
        let designation = row.pdes.trim();
        if designation.is_empty() {
            return Err(DatasetError::parse(
                format!("NEO row {}", idx + 1),
                "empty designation",
            ));
        }

        let mut neo = NearEarthObject::new(designation)
            .with_hazardous(row.pha.trim() == HAZARDOUS_CODE);

        let name = row.name.trim();
        if !name.is_empty() {
            neo = neo.with_name(name);
        }

        let diameter = row.diameter.trim();
        if !diameter.is_empty() {
            let value = diameter.parse::<f64>().map_err(|e| {
                DatasetError::parse(
                    format!("NEO row {} ({})", idx + 1, designation),
                    format!("invalid diameter '{}': {}", diameter, e),
                )
            })?;
            neo = neo.with_diameter(value);
        }

        neos.push(neo);
    }

    Ok(neos)
}

/// Loads close approaches from a CAD JSON file
pub fn load_approaches(path: &Path) -> DatasetResult<Vec<CloseApproach>> {
    let file = File::open(path)?;
    let approaches = read_approaches(BufReader::new(file))?;

    Logger::info(
        Event::DatasetLoaded,
        &[
            ("kind", "approaches"),
            ("path", &path.display().to_string()),
            ("count", &approaches.len().to_string()),
        ],
    );

    Ok(approaches)
}

/// Reads close approaches from CAD JSON.
///
/// Columns are located through `fields`, so column order does not matter.
/// Cells may be JSON strings or numbers.
pub fn read_approaches<R: Read>(reader: R) -> DatasetResult<Vec<CloseApproach>> {
    let document: CadDocument = serde_json::from_reader(reader)?;

    let designation_col = column(&document.fields, CAD_DESIGNATION)?;
    let time_col = column(&document.fields, CAD_TIME)?;
    let distance_col = column(&document.fields, CAD_DISTANCE)?;
    let velocity_col = column(&document.fields, CAD_VELOCITY)?;

    let mut approaches = Vec::with_capacity(document.data.len());
    for (idx, row) in document.data.iter().enumerate() {
        let context = format!("approach row {}", idx + 1);

        let designation = cell_str(row, designation_col, &context)?;
        let raw_time = cell_str(row, time_col, &context)?;
        let time = parse_approach_time(&raw_time).ok_or_else(|| {
            DatasetError::parse(&context, format!("invalid timestamp '{}'", raw_time))
        })?;
        let distance = cell_f64(row, distance_col, &context)?;
        let velocity = cell_f64(row, velocity_col, &context)?;

        approaches.push(CloseApproach::new(designation, time, distance, velocity));
    }

    Ok(approaches)
}

fn column(fields: &[String], name: &str) -> DatasetResult<usize> {
    fields
        .iter()
        .position(|field| field == name)
        .ok_or_else(|| DatasetError::MissingField(name.to_string()))
}

fn cell<'a>(row: &'a [Value], col: usize, context: &str) -> DatasetResult<&'a Value> {
    row.get(col)
        .ok_or_else(|| DatasetError::parse(context, format!("missing column {}", col)))
}

fn cell_str(row: &[Value], col: usize, context: &str) -> DatasetResult<String> {
    match cell(row, col, context)? {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(DatasetError::parse(
            context,
            format!("expected text in column {}, found {}", col, other),
        )),
    }
}

fn cell_f64(row: &[Value], col: usize, context: &str) -> DatasetResult<f64> {
    match cell(row, col, context)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            DatasetError::parse(context, format!("number out of range in column {}", col))
        }),
        Value::String(s) => s.trim().parse::<f64>().map_err(|e| {
            DatasetError::parse(context, format!("invalid number '{}': {}", s, e))
        }),
        other => Err(DatasetError::parse(
            context,
            format!("expected number in column {}, found {}", col, other),
        )),
    }
}
