//! Directory size scanning
//!
//! This module walks a directory tree depth-first and records the cumulative
//! size of every directory it visits.
//!
//! - `Scanner`: the recursive walker, generic over its listing primitive
//! - `DirReader`: the listing primitive (`FsReader` for the real filesystem)
//! - `SizeTable`: the per-directory results handed to the reporter

mod config;
mod error;
mod reader;
mod scanner;
mod table;
mod utils;

// Re-export public types
pub use config::ScanConfig;
pub use error::ScanError;
pub use reader::{DirEntryInfo, DirReader, FsReader};
pub use scanner::{ScanResult, Scanner};
pub use table::SizeTable;
pub use utils::{clean_path, is_dot_name, join_key, path_bytes};
