//! Predicate filter subsystem for neodb
//!
//! Turns sparse user criteria into a conjunction of attribute filters and
//! bounds the resulting stream.
//!
//! # Flow
//!
//! 1. `create_filters` emits one `AttributeFilter` per present criterion
//! 2. The database streams every approach through `AttributeFilter::matches_all`
//! 3. `limit` caps the stream
//!
//! # Invariants
//!
//! - Filters are immutable and side-effect free
//! - An absent criterion adds no filter; a zero or `false` criterion does
//! - NaN and unlinked values fail every comparison

mod attribute;
mod criteria;
mod errors;
mod limit;

pub use attribute::{Attribute, AttributeFilter, AttributeValue, CompareOp};
pub use criteria::{create_filters, Criteria};
pub use errors::{FilterError, FilterResult};
pub use limit::{limit, Limit};
