//! Entity model for neodb
//!
//! Two record kinds linked by designation:
//!
//! - `NearEarthObject`: one row per catalogued object
//! - `CloseApproach`: one row per pass near Earth
//!
//! # Ownership
//!
//! The database owns both collections. Cross references are indices into
//! those collections (`NeoId`, `ApproachId`), never owning pointers.
//! Links are written once, during linkage, and only read afterwards.

mod approach;
mod neo;
mod time;

use std::fmt;

pub use approach::CloseApproach;
pub use neo::NearEarthObject;
pub use time::{format_approach_time, parse_approach_time};

/// Index of a NEO in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeoId(pub usize);

/// Index of a close approach in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApproachId(pub usize);

impl fmt::Display for NeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "neo#{}", self.0)
    }
}

impl fmt::Display for ApproachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "approach#{}", self.0)
    }
}
