use std::time::{Duration, Instant};

/// Fixed-period schedule for work much slower than the frame rate.
///
/// The first tick is due immediately, so consumers show real data on their
/// first frame instead of waiting out a full period. Deadlines are anchored
/// to the schedule rather than to poll times, so polling late does not drift
/// the period.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    deadline: Instant,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        debug_assert!(period > Duration::ZERO);
        Self {
            period,
            deadline: Instant::now(),
        }
    }

    /// Polls the schedule at `now`.
    ///
    /// Returns `true` when a tick is due and arms the next deadline. Missed
    /// periods coalesce into a single tick.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        while self.deadline <= now {
            self.deadline += self.period;
        }
        true
    }

    /// The instant the next tick becomes due.
    pub fn next_deadline(&self) -> Instant {
        self.deadline
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_fires_immediately() {
        let mut interval = Interval::new(Duration::from_secs(1));
        assert!(interval.due(Instant::now()));
    }

    #[test]
    fn second_poll_waits_a_full_period() {
        let mut interval = Interval::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(interval.due(t0));
        assert!(!interval.due(t0));
        assert!(interval.due(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn missed_periods_coalesce_into_one_tick() {
        let mut interval = Interval::new(Duration::from_secs(1));
        let t0 = Instant::now();
        assert!(interval.due(t0));

        let late = t0 + Duration::from_millis(3500);
        assert!(interval.due(late));
        assert!(!interval.due(late));
        assert!(interval.next_deadline() > late);
    }
}
