//! Size formatting

/// Bytes per megabyte (binary).
pub const MEGABYTE: f64 = 1024.0 * 1024.0;

/// Formats byte counts as megabytes with two decimals, e.g. `"1.00 MB"`.
///
/// When aligned, the number is right-justified in an 8-character field so
/// every size in a listing has the same width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeFormatter {
    pub align: bool,
}

impl SizeFormatter {
    pub fn new(align: bool) -> Self {
        Self { align }
    }

    pub fn format(&self, bytes: u64) -> String {
        let megs = bytes as f64 / MEGABYTE;
        if self.align {
            format!("{:8.2} MB", megs)
        } else {
            format!("{:.2} MB", megs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unaligned() {
        let f = SizeFormatter::new(false);
        assert_eq!(f.format(0), "0.00 MB");
        assert_eq!(f.format(1_048_576), "1.00 MB");
        assert_eq!(f.format(1_572_864), "1.50 MB");
        assert_eq!(f.format(10_485_760), "10.00 MB");
    }

    #[test]
    fn test_format_aligned_pads_to_eight() {
        let f = SizeFormatter::new(true);
        assert_eq!(f.format(1_048_576), "    1.00 MB");
        assert_eq!(f.format(0), "    0.00 MB");
        // 1000 GB still fits the field exactly
        assert_eq!(f.format(1_048_576 * 10_000), "10000.00 MB");
    }

    #[test]
    fn test_format_aligned_overflows_field() {
        // Wider numbers are never truncated
        let f = SizeFormatter::new(true);
        assert_eq!(f.format(1_048_576 * 123_456), "123456.00 MB");
    }

    #[test]
    fn test_format_rounds_to_two_decimals() {
        let f = SizeFormatter::new(false);
        assert_eq!(f.format(100), "0.00 MB");
        assert_eq!(f.format(10_486), "0.01 MB");
    }
}
