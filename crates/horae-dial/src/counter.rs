use chrono::{Datelike, NaiveDateTime};

/// Milliseconds per counter step.
///
/// Opaque calibration constant; the factors carry no derived unit meaning.
const MS_PER_COUNT: f64 = 60.0 * 9.0 * 1000.0;

/// Decorative counter shown on the face: elapsed time since the first moment
/// of the current calendar month, divided down by [`MS_PER_COUNT`] and
/// rounded to nearest.
///
/// Pure in `now`; total for any valid timestamp.
pub fn counter_value(now: NaiveDateTime) -> i64 {
    let first_of_month = now
        .date()
        .with_day(1)
        .unwrap_or(now.date())
        .and_hms_opt(0, 0, 0)
        .unwrap_or(now);

    let elapsed_ms = (now - first_of_month).num_milliseconds() as f64;
    (elapsed_ms / MS_PER_COUNT).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn zero_at_the_month_boundary() {
        assert_eq!(counter_value(at(1, 0, 0, 0)), 0);
    }

    #[test]
    fn one_step_per_nine_minutes() {
        assert_eq!(counter_value(at(1, 0, 9, 0)), 1);
        assert_eq!(counter_value(at(1, 0, 18, 0)), 2);
    }

    #[test]
    fn half_steps_round_to_nearest() {
        // 4m30s is exactly half a step.
        assert_eq!(counter_value(at(1, 0, 4, 30)), 1);
        assert_eq!(counter_value(at(1, 0, 4, 29)), 0);
    }

    #[test]
    fn mid_month_value() {
        // 16 days and 13.5 hours is 1_431_000_000 ms, an exact multiple.
        assert_eq!(counter_value(at(17, 13, 30, 0)), 2650);
    }

    #[test]
    fn grows_with_time() {
        assert!(counter_value(at(20, 8, 0, 0)) > counter_value(at(3, 8, 0, 0)));
    }
}
