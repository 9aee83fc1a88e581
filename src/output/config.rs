//! Report configuration types

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Pad paths to a common width and fix the size field width
    pub align: bool,
    /// Report only the root's aggregate size
    pub sum: bool,
    pub use_color: bool,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            align: true,
            sum: false,
            use_color: false,
            format: ReportFormat::Text,
        }
    }
}
