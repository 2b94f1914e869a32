//! Observable events for neodb

use std::fmt;

/// Observable events, one per log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// A dataset file was read
    DatasetLoaded,
    /// Linkage finished
    DatabaseLinked,
    /// A NEO designation appeared more than once
    DuplicateDesignation,
    /// Active filter conjunction for a query
    QueryPlanned,
    QueryComplete,
    /// Results exported to a file
    ResultsWritten,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatabaseLinked => "DATABASE_LINKED",
            Event::DuplicateDesignation => "DUPLICATE_DESIGNATION",
            Event::QueryPlanned => "QUERY_PLAN",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::ResultsWritten => "RESULTS_WRITTEN",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
