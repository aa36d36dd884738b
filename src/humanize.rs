const SECOND: u64 = 1000;
const MINUTE: u64 = SECOND * 60;
const HOUR: u64 = MINUTE * 60;
const DAY: u64 = HOUR * 24;

/// Renders a millisecond duration in its largest whole unit, eg `+1s`
/// (without the `+`)
pub fn humanize(ms: i64) -> String {
    let abs = ms.unsigned_abs();
    for (unit, suffix) in [(DAY, "d"), (HOUR, "h"), (MINUTE, "m"), (SECOND, "s")] {
        if abs >= unit {
            return format!("{}{}", round_div(ms, unit), suffix);
        }
    }
    format!("{}ms", ms)
}

// Rounds half away from zero
fn round_div(value: i64, unit: u64) -> i64 {
    (value as f64 / unit as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_test() {
        assert_eq!(humanize(0), "0ms");
        assert_eq!(humanize(999), "999ms");
    }

    #[test]
    fn units_test() {
        assert_eq!(humanize(1000), "1s");
        assert_eq!(humanize(1499), "1s");
        assert_eq!(humanize(1500), "2s");
        assert_eq!(humanize(60 * 1000), "1m");
        assert_eq!(humanize(90 * 60 * 1000), "2h");
        assert_eq!(humanize(3 * 24 * 60 * 60 * 1000), "3d");
    }

    #[test]
    fn negative_test() {
        assert_eq!(humanize(-5), "-5ms");
        assert_eq!(humanize(-2000), "-2s");
    }

    #[test]
    fn extremes_test() {
        assert!(humanize(i64::MIN).starts_with('-'));
        assert!(humanize(i64::MIN).ends_with('d'));
        assert!(humanize(i64::MAX).ends_with('d'));
    }
}
