//! Filter error types

use thiserror::Error;

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building attribute filters.
///
/// These signal a construction defect in the caller. `create_filters`
/// never produces them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The reference value cannot be compared with the attribute
    #[error("Unsupported criterion: {attribute} cannot be compared with a {value_kind} value")]
    UnsupportedCriterion {
        attribute: &'static str,
        value_kind: &'static str,
    },
}
