//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: drives a byte source through the line classifier into a sink
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

pub mod orchestrator;

pub use filter_log_ports::FilterSummary;
pub use orchestrator::FilterStream;
