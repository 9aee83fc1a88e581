//! Dirsize - cumulative size of every directory in a tree

pub mod output;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{JsonEntry, ReportConfig, ReportFormat, Reporter, SizeFormatter};
pub use scan::{
    DirEntryInfo, DirReader, FsReader, ScanConfig, ScanError, ScanResult, Scanner, SizeTable,
};
