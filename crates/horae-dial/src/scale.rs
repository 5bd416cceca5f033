use core::f64::consts::TAU;

/// Pure linear map from a hand's numeric domain onto a full turn of the dial.
///
/// Angles come back in radians, clockwise from 12 o'clock, matching the
/// engine's arc convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AngleScale {
    domain_end: f64,
    modulus: Option<f64>,
}

impl AngleScale {
    /// Shared scale for seconds and minutes: `[0, 59 + 59/60]` onto a turn.
    ///
    /// The domain end sits one sub-unit past 59 so the value 59 lands just
    /// shy of a full revolution instead of wrapping onto 0.
    pub const SECS_MINS: Self = Self {
        domain_end: 59.0 + 59.0 / 60.0,
        modulus: None,
    };

    /// Hour scale: input reduced mod 12, then `[0, 11 + 59/60]` onto a turn.
    pub const HOURS: Self = Self {
        domain_end: 11.0 + 59.0 / 60.0,
        modulus: Some(12.0),
    };

    /// Maps `value` to its dial angle.
    pub fn angle(&self, value: f64) -> f32 {
        let v = match self.modulus {
            Some(m) => value.rem_euclid(m),
            None => value,
        };
        ((v / self.domain_end) * TAU) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::TAU as TAU32;

    #[test]
    fn seconds_stay_inside_a_full_turn() {
        for s in 0..60 {
            let angle = AngleScale::SECS_MINS.angle(f64::from(s));
            assert!(angle >= 0.0, "second {s} mapped below zero");
            assert!(angle < TAU32, "second {s} wrapped past a full turn");
        }
    }

    #[test]
    fn zero_points_at_twelve() {
        assert_eq!(AngleScale::SECS_MINS.angle(0.0), 0.0);
        assert_eq!(AngleScale::HOURS.angle(0.0), 0.0);
    }

    #[test]
    fn later_seconds_sweep_further() {
        let scale = AngleScale::SECS_MINS;
        assert!(scale.angle(59.0) > scale.angle(58.0));
        assert!(scale.angle(30.0) > scale.angle(15.0));
    }

    #[test]
    fn hours_reduce_mod_twelve_before_scaling() {
        let scale = AngleScale::HOURS;
        assert_eq!(scale.angle(13.5), scale.angle(1.5));
        assert_eq!(scale.angle(24.0), scale.angle(0.0));
    }

    #[test]
    fn hour_angle_never_jumps_at_the_hour() {
        // A minute shy of the hour lands strictly below the on-the-hour
        // angle, and only barely.
        let scale = AngleScale::HOURS;
        let just_before = scale.angle(1.0 + 59.999 / 60.0);
        let on_the_hour = scale.angle(2.0);
        assert!(just_before < on_the_hour);
        assert!(on_the_hour - just_before < 1e-4);
    }
}
