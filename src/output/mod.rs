//! Report formatting
//!
//! Turns a completed scan into output lines:
//!
//! - `size` - megabyte formatting of byte counts
//! - `config` - report configuration types
//! - `report` - the text reporter (sum line or sorted listing)
//! - `json` - JSON report

mod config;
mod json;
mod report;
mod size;

// Re-export public types
pub use config::{ReportConfig, ReportFormat};
pub use json::JsonEntry;
pub use report::Reporter;
pub use size::{MEGABYTE, SizeFormatter};
