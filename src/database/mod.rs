//! Database subsystem for neodb
//!
//! # Lifecycle
//!
//! 1. Loaders produce unlinked `NearEarthObject` and `CloseApproach` records
//! 2. `NeoDatabase::new` takes ownership of both and links them in one pass
//! 3. Lookups and queries only read
//!
//! # Invariants
//!
//! - Linkage completes before any query can run
//! - Each approach is linked at most once and never relinked
//! - Query results follow input order (chronological for CAD data)

mod database;
mod view;

pub use database::{LinkReport, NeoDatabase};
pub use view::ApproachView;
