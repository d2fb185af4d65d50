//! Clock abstraction so the generator can be driven by a fixed timestamp.

use chrono::{Local, NaiveDateTime, Timelike};

/// Source of the current wall-clock moment.
pub trait Clock {
    /// Returns the current local date-time.
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Clock backed by the system's local time, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        now.with_nanosecond(0).unwrap_or(now)
    }
}

/// Clock that always reports the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_repeats() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|d| d.and_hms_opt(10, 30, 45))
            .unwrap();
        let clock = FixedClock(ts);
        assert_eq!(clock.now(), ts);
        assert_eq!(clock.now(), ts);
    }

    #[test]
    fn test_system_clock_whole_seconds() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }

    #[test]
    fn test_clock_by_reference() {
        fn read(clock: impl Clock) -> NaiveDateTime {
            clock.now()
        }
        let ts = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let clock = FixedClock(ts);
        assert_eq!(read(&clock), ts);
    }
}
