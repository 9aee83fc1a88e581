//! Configuration types for the scanner

/// Configuration for directory scanning behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Skip files and directories whose name starts with a dot
    pub ignore_dot_files: bool,
    /// Treat a directory that cannot be listed as empty instead of aborting
    pub ignore_errors: bool,
}
