//! neodb - A strict, deterministic query engine for near-Earth object
//! close approaches
//!
//! NEO and close-approach records are loaded, linked by designation, and
//! queried with a conjunction of attribute filters.

pub mod cli;
pub mod database;
pub mod dataset;
pub mod filter;
pub mod model;
pub mod observability;

pub use database::{ApproachView, NeoDatabase};
pub use filter::{create_filters, limit, AttributeFilter, Criteria};
pub use model::{CloseApproach, NearEarthObject};
