// src/render/size.rs
// =============================================================================
// Human-readable file sizes: 1536 -> "1.5KB".
//
// Binary steps (1024), one decimal digit, no space before the unit, and
// nothing bigger than TB. Halves round up (1280 -> "1.3KB"), so the math is
// done on integer tenths instead of going through `{:.1}`, which rounds
// exact ties to even.
// =============================================================================

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

pub fn format_size(bytes: u64) -> String {
    let bytes = u128::from(bytes);
    let mut divisor: u128 = 1;
    let mut unit = 0;

    while bytes >= divisor * 1024 && unit < UNITS.len() - 1 {
        divisor *= 1024;
        unit += 1;
    }

    // floor(bytes / divisor * 10 + 0.5)
    let tenths = (bytes * 20 + divisor) / (divisor * 2);

    format!("{}.{}{}", tenths / 10, tenths % 10, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_size(0), "0.0B");
    }

    #[test]
    fn test_below_one_kilobyte() {
        assert_eq!(format_size(512), "512.0B");
        assert_eq!(format_size(1023), "1023.0B");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_size(1024), "1.0KB");
        assert_eq!(format_size(1536), "1.5KB");
        assert_eq!(format_size(2_097_152), "2.0MB");
        assert_eq!(format_size(1_073_741_824), "1.0GB");
        assert_eq!(format_size(1u64 << 40), "1.0TB");
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(format_size(1280), "1.3KB");
        assert_eq!(format_size(3328), "3.3KB");
        assert_eq!(format_size(1_310_720), "1.3MB");
        assert_eq!(format_size(1792), "1.8KB");
    }

    #[test]
    fn test_non_ties_round_to_nearest() {
        // 1.125KB and 1.1748KB
        assert_eq!(format_size(1152), "1.1KB");
        assert_eq!(format_size(1203), "1.2KB");
        // Just under 1MB stays in KB but rounds up to 1024.0
        assert_eq!(format_size(1_048_575), "1024.0KB");
    }

    #[test]
    fn test_stops_at_terabytes() {
        assert_eq!(format_size(1u64 << 50), "1024.0TB");
        assert!(format_size(u64::MAX).ends_with("TB"));
    }

    #[test]
    fn test_always_one_decimal() {
        for bytes in [0, 1, 999, 1025, 123_456_789, 9_999_999_999_999] {
            let formatted = format_size(bytes);
            let digits: String = formatted
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            let (_, decimals) = digits.split_once('.').unwrap();
            assert_eq!(decimals.len(), 1, "{formatted}");
        }
    }
}
