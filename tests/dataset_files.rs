//! Dataset File Tests
//!
//! Load NEO CSV and CAD JSON from disk, link, query, and export:
//! - Loaders read columns by name and tolerate extra columns
//! - Unknown diameter and absent name export as empty values
//! - Exported rows keep query order

use std::fs;
use std::path::PathBuf;

use neodb::dataset::{
    load_approaches, load_neos, write_to_csv, write_to_json, DatasetError,
};
use neodb::filter::{create_filters, limit, Criteria};
use neodb::NeoDatabase;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const NEOS_CSV: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,diameter,albedo
a0000433,2000433,433 Eros (A898 PA),433,Eros,,Y,N,16.84,0.25
a0099942,2099942,99942 Apophis (2004 MN4),99942,Apophis,,Y,Y,0.37,0.23
bK20A00B,3000001,(2020 AB),2020 AB,,,Y,N,,
";

const CAD_JSON: &str = r#"{
    "signature": {"source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1"},
    "count": "4",
    "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
    "data": [
        ["433", "659", "2415020.507", "1900-Jan-01 00:11", "0.0921", "0.0921", "0.0921", "16.75", "16.74", "< 00:01", "10.3"],
        ["2020 AB", "1", "2458849.5", "2020-Jan-01 00:00", "0.15", "0.15", "0.15", "5.2", "5.2", "00:01", "25.1"],
        ["99942", "199", "2462240.407", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42", "5.84", "< 00:01", "19.7"],
        ["2021 ZZ", "3", "2459580.5", "2022-Jan-01 12:00", "0.3", "0.3", "0.3", "9.1", "9.0", "00:05", "27.0"]
    ]
}"#;

fn write_sources(dir: &TempDir) -> (PathBuf, PathBuf) {
    let neo_path = dir.path().join("neos.csv");
    let cad_path = dir.path().join("cad.json");
    fs::write(&neo_path, NEOS_CSV).unwrap();
    fs::write(&cad_path, CAD_JSON).unwrap();
    (neo_path, cad_path)
}

fn load_db(dir: &TempDir) -> NeoDatabase {
    let (neo_path, cad_path) = write_sources(dir);
    let neos = load_neos(&neo_path).unwrap();
    let approaches = load_approaches(&cad_path).unwrap();
    NeoDatabase::new(neos, approaches)
}

// =============================================================================
// Loader Tests
// =============================================================================

/// Loaded files link by designation; the unknown designation stays unlinked.
#[test]
fn test_load_and_link() {
    let dir = TempDir::new().unwrap();
    let db = load_db(&dir);

    assert_eq!(db.neo_count(), 3);
    assert_eq!(db.approach_count(), 4);

    let report = db.link_report();
    assert_eq!(report.linked, 3);
    assert_eq!(report.unlinked, 1);

    let apophis = db.get_neo_by_name("Apophis").unwrap();
    assert!(apophis.hazardous());
    assert_eq!(apophis.approaches().len(), 1);

    let unnamed = db.get_neo_by_designation("2020 AB").unwrap();
    assert!(unnamed.name().is_none());
    assert!(unnamed.diameter().is_nan());
}

/// A missing source file is an I/O error, not a panic.
#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_neos(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, DatasetError::Io(_)));
}

// =============================================================================
// Export Tests
// =============================================================================

/// CSV export writes the fixed header and empty fields for unknown values.
#[test]
fn test_export_csv() {
    let dir = TempDir::new().unwrap();
    let db = load_db(&dir);
    let out = dir.path().join("out.csv");

    let filters = create_filters(&Criteria::new().distance_max(0.2));
    let count = write_to_csv(db.query(&filters), &out).unwrap();
    assert_eq!(count, 3);

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "datetime_utc,distance_au,velocity_km_s,designation,name,diameter_km,potentially_hazardous",
            "1900-01-01 00:11,0.0921,16.75,433,Eros,16.84,False",
            "2020-01-01 00:00,0.15,5.2,2020 AB,,,False",
            "2029-04-13 21:46,0.000254,7.42,99942,Apophis,0.37,True",
        ]
    );
}

/// JSON export nests NEO data and never emits NaN.
#[test]
fn test_export_json_limited() {
    let dir = TempDir::new().unwrap();
    let db = load_db(&dir);
    let out = dir.path().join("out.json");

    let filters = create_filters(&Criteria::new().hazardous(false));
    let count = write_to_json(limit(db.query(&filters), Some(2)), &out).unwrap();
    assert_eq!(count, 2);

    let text = fs::read_to_string(&out).unwrap();
    assert!(!text.contains("NaN"));

    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["datetime_utc"], "1900-01-01 00:11");
    assert_eq!(entries[0]["neo"]["designation"], "433");
    assert_eq!(entries[0]["neo"]["diameter_km"], 16.84);
    assert_eq!(entries[1]["neo"]["designation"], "2020 AB");
    assert_eq!(entries[1]["neo"]["name"], "");
    assert!(entries[1]["neo"]["diameter_km"].is_null());
    assert_eq!(entries[1]["neo"]["potentially_hazardous"], false);
}
