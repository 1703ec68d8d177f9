use std::fmt;
use std::time::Duration;

use chrono::{Local, NaiveTime, Timelike};

/// How often the clock face and the quote rotation are refreshed.
pub const TICK: Duration = Duration::from_secs(1);

/// Source of the wall-clock time of day.
///
/// Lets the app run against a fixed time in tests.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local time from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub NaiveTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

// ---------------------------------------------------------------------------
// ClockReading – what the clock face shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockReading {
    pub fn of<T: Timelike>(time: &T) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
            seconds: time.second(),
        }
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::model::TimeKey;

    #[test]
    fn reading_is_zero_padded() {
        let t = NaiveTime::from_hms_opt(7, 4, 9).unwrap();
        let reading = ClockReading::of(&FixedClock(t).now());
        assert_eq!(reading.to_string(), "07:04:09");
        assert_eq!(TimeKey::from_time(&t).to_string(), "07:04");
    }

    #[test]
    fn last_second_of_the_day() {
        let t = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(ClockReading::of(&t).to_string(), "23:59:59");
        assert_eq!(TimeKey::from_time(&t).minute_of_day(), 1439);
    }
}
