//! Wall-clock sampling.
//!
//! One sample per hand, derived fresh each tick and discarded after render.
//! The clock source is injected through [`Clock`] so derivation stays a pure
//! function of an explicit instant.

use chrono::{Local, NaiveDateTime, Timelike};

/// Which hand a sample drives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Unit {
    Hours,
    Minutes,
    Seconds,
}

/// One hand's worth of sampled time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSample {
    pub unit: Unit,

    /// Value on the hand's own scale. Integer-valued for minutes and seconds;
    /// hours carry `minute / 60` so the hour hand sweeps continuously.
    pub numeric: f64,

    /// Zero-padded display form (`HH`, `MM`, `SS`).
    pub text: String,
}

/// Wall-clock source.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. Test double.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Derives per-hand samples from an injected clock.
#[derive(Debug, Clone)]
pub struct Sampler<C> {
    clock: C,
}

impl<C: Clock> Sampler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Reads the underlying clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Samples the current time.
    ///
    /// Total; the only side effect is the clock read itself.
    pub fn sample(&self) -> [TimeSample; 3] {
        sample_at(self.now())
    }
}

/// Derives the samples for an explicit instant.
///
/// `second` and `minute` are the integer clock components; `hour` is
/// hours-of-day reduced mod 12 plus `minute / 60`, always in `[0, 12)`.
/// The array is ordered minutes, hours, seconds.
pub fn sample_at(now: NaiveDateTime) -> [TimeSample; 3] {
    let minute = f64::from(now.minute());
    let hour = f64::from(now.hour() % 12) + minute / 60.0;
    let second = f64::from(now.second());

    [
        TimeSample {
            unit: Unit::Minutes,
            numeric: minute,
            text: now.format("%M").to_string(),
        },
        TimeSample {
            unit: Unit::Hours,
            numeric: hour,
            text: now.format("%H").to_string(),
        },
        TimeSample {
            unit: Unit::Seconds,
            numeric: second,
            text: now.format("%S").to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn by_unit(samples: &[TimeSample; 3], unit: Unit) -> &TimeSample {
        samples.iter().find(|s| s.unit == unit).unwrap()
    }

    #[test]
    fn midnight_samples_are_all_zero() {
        let samples = sample_at(at(0, 0, 0));
        assert_eq!(by_unit(&samples, Unit::Hours).numeric, 0.0);
        assert_eq!(by_unit(&samples, Unit::Minutes).numeric, 0.0);
        assert_eq!(by_unit(&samples, Unit::Seconds).numeric, 0.0);
    }

    #[test]
    fn afternoon_hour_folds_to_dial_range() {
        // 13:30 reads as 1.5 on a 12-hour dial.
        let samples = sample_at(at(13, 30, 0));
        assert_eq!(by_unit(&samples, Unit::Hours).numeric, 1.5);
    }

    #[test]
    fn hour_numeric_stays_below_twelve() {
        let samples = sample_at(at(23, 59, 59));
        let hour = by_unit(&samples, Unit::Hours).numeric;
        assert!(hour < 12.0);
        assert!((hour - (11.0 + 59.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn display_text_is_zero_padded() {
        let samples = sample_at(at(5, 7, 9));
        assert_eq!(by_unit(&samples, Unit::Hours).text, "05");
        assert_eq!(by_unit(&samples, Unit::Minutes).text, "07");
        assert_eq!(by_unit(&samples, Unit::Seconds).text, "09");
    }

    #[test]
    fn hour_text_keeps_the_24h_reading() {
        // The dial folds the numeric, the label does not.
        let samples = sample_at(at(13, 30, 0));
        assert_eq!(by_unit(&samples, Unit::Hours).text, "13");
    }

    #[test]
    fn sample_order_is_minutes_hours_seconds() {
        let units: Vec<Unit> = sample_at(at(10, 20, 30)).iter().map(|s| s.unit).collect();
        assert_eq!(units, vec![Unit::Minutes, Unit::Hours, Unit::Seconds]);
    }

    #[test]
    fn sampler_delegates_to_its_clock() {
        let sampler = Sampler::new(FixedClock(at(13, 30, 0)));
        assert_eq!(sampler.now(), at(13, 30, 0));
        assert_eq!(sampler.sample(), sample_at(at(13, 30, 0)));
    }
}
