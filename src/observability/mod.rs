//! Observability subsystem for neodb
//!
//! Structured JSON event logging. Logging is read-only: it never changes
//! query results and never fails the operation that emits it.
//!
//! # Usage
//!
//! ```ignore
//! use neodb::observability::{Event, Logger};
//!
//! Logger::info(Event::QueryComplete, &[("returned", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
