//! Delay labeling from minute differences (training only)

/// Minutes past schedule after which a flight counts as delayed
pub const DELAY_THRESHOLD_MINUTES: f64 = 15.0;

/// 1 iff the departure was strictly more than the threshold late.
/// Exactly on the threshold is not delayed.
pub fn delay_label(minute_difference: f64) -> i32 {
    if minute_difference > DELAY_THRESHOLD_MINUTES {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(delay_label(15.0), 0);
        assert_eq!(delay_label(15.0001), 1);
    }

    #[test]
    fn test_early_departures_are_on_time() {
        assert_eq!(delay_label(-30.0), 0);
        assert_eq!(delay_label(0.0), 0);
    }

    #[test]
    fn test_large_delay() {
        assert_eq!(delay_label(240.0), 1);
    }
}
