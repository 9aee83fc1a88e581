//! Reporter - renders a size table as a sum line or a sorted listing

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::scan::ScanResult;

use super::config::{ReportConfig, ReportFormat};
use super::json;
use super::size::SizeFormatter;

/// A rendered report line, kept split so the size column can be colored.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Sum { size: String },
    /// `path` holds the raw key bytes; `pad` spaces follow it.
    Entry { path: Vec<u8>, pad: usize, size: String },
}

/// Number of characters in `bytes`, counting each invalid UTF-8 byte as one.
fn char_count(bytes: &[u8]) -> usize {
    bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
        .sum()
}

/// Renders completed scans.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render the text report as plain lines (no trailing newlines).
    ///
    /// In sum mode this is exactly one line. Otherwise there is one line per
    /// directory, ordered by descending path. Paths that are not valid UTF-8
    /// are decoded lossily here; `write_text` emits the raw bytes.
    pub fn render(&self, result: &ScanResult) -> Vec<String> {
        self.lines(result)
            .into_iter()
            .map(|line| match line {
                Line::Sum { size } => size,
                Line::Entry { path, pad, size } => format!(
                    "{}{:pad$} -- {}",
                    String::from_utf8_lossy(&path),
                    "",
                    size,
                    pad = pad
                ),
            })
            .collect()
    }

    /// Write the report in the configured format.
    pub fn write<W: WriteColor + ?Sized>(&self, result: &ScanResult, out: &mut W) -> io::Result<()> {
        match self.config.format {
            ReportFormat::Text => self.write_text(result, out),
            ReportFormat::Json => self.write_json(result, out),
        }
    }

    /// Write the text report, coloring sizes when the sink supports it.
    pub fn write_text<W: WriteColor + ?Sized>(&self, result: &ScanResult, out: &mut W) -> io::Result<()> {
        let mut size_color = ColorSpec::new();
        size_color.set_fg(Some(Color::Cyan));
        let use_color = self.config.use_color && out.supports_color();

        for line in self.lines(result) {
            let size = match line {
                Line::Sum { size } => size,
                Line::Entry { path, pad, size } => {
                    out.write_all(&path)?;
                    write!(out, "{:pad$} -- ", "", pad = pad)?;
                    size
                }
            };
            if use_color {
                out.set_color(&size_color)?;
                write!(out, "{}", size)?;
                out.reset()?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", size)?;
            }
        }
        out.flush()
    }

    /// Write the report as JSON: one object in sum mode, an array otherwise.
    pub fn write_json<W: Write + ?Sized>(&self, result: &ScanResult, out: &mut W) -> io::Result<()> {
        if self.config.sum {
            json::write_pretty(out, &json::sum_entry(result))?;
        } else {
            json::write_pretty(out, &json::listing_entries(result))?;
        }
        out.flush()
    }

    fn lines(&self, result: &ScanResult) -> Vec<Line> {
        let formatter = SizeFormatter::new(self.config.align);

        if self.config.sum {
            let bytes = result.table.get(&result.root).unwrap_or(0);
            return vec![Line::Sum {
                size: formatter.format(bytes),
            }];
        }

        // Width is the longest path in bytes, while padding counts
        // characters, so non-ASCII paths get extra trailing spaces.
        let max_len = if self.config.align {
            result.table.max_path_len()
        } else {
            0
        };
        let width = max_len + 1;

        result
            .table
            .iter_descending()
            .map(|(path, bytes)| Line::Entry {
                path: path.to_vec(),
                pad: width.saturating_sub(char_count(path)),
                size: formatter.format(bytes),
            })
            .collect()
    }
}
