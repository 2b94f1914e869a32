//! Dataset import and export for neodb
//!
//! Loaders turn source files into unlinked model records. Writers turn a
//! result stream back into CSV or JSON.

mod errors;
mod extract;
mod write;

pub use errors::{DatasetError, DatasetResult};
pub use extract::{load_approaches, load_neos, read_approaches, read_neos};
pub use write::{
    write_csv, write_json, write_to_csv, write_to_file, write_to_json, OutputFormat,
};
