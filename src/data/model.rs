use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use serde::Deserialize;
use thiserror::Error;

/// Number of distinct minutes in a day, i.e. the size of the key space.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

// ---------------------------------------------------------------------------
// TimeKey – one minute of the day
// ---------------------------------------------------------------------------

/// A minute of the day, written as zero-padded `"HH:MM"` in the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeKey(u16);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeKeyError {
    #[error("'{0}' is not in HH:MM format")]
    Format(String),
    #[error("'{0}' is out of range (00:00 – 23:59)")]
    OutOfRange(String),
}

impl TimeKey {
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| TimeKey(hour * 60 + minute))
    }

    /// Key for the wall-clock minute of any chrono time value.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // hour() < 24 and minute() < 60 are guaranteed by chrono
        TimeKey((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn minute_of_day(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Distance in minutes going whichever way round the clock is shorter.
    pub fn circular_distance(self, other: TimeKey) -> u16 {
        let d = self.0.abs_diff(other.0);
        d.min(MINUTES_PER_DAY - d)
    }

    /// All 1440 keys in chronological order.
    pub fn all() -> impl Iterator<Item = TimeKey> {
        (0..MINUTES_PER_DAY).map(TimeKey)
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeKey {
    type Err = TimeKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !well_formed {
            return Err(TimeKeyError::Format(s.to_string()));
        }
        let digit = |i: usize| u16::from(bytes[i] - b'0');
        let hour = digit(0) * 10 + digit(1);
        let minute = digit(3) * 10 + digit(4);
        TimeKey::new(hour, minute).ok_or_else(|| TimeKeyError::OutOfRange(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Quote – one passage from a book
// ---------------------------------------------------------------------------

/// A sentence from a book that mentions a time of day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub text: String,
    pub title: String,
    pub author: String,
}

// ---------------------------------------------------------------------------
// QuoteDataset – the complete loaded dictionary
// ---------------------------------------------------------------------------

/// Quotes grouped by the minute they mention.
///
/// Every stored key has at least one quote. The map is never modified once
/// built; selection only borrows from it.
#[derive(Debug, Clone, Default)]
pub struct QuoteDataset {
    entries: BTreeMap<TimeKey, Vec<Quote>>,
}

impl QuoteDataset {
    /// Build the dataset, dropping keys without quotes.
    pub fn from_entries(entries: impl IntoIterator<Item = (TimeKey, Vec<Quote>)>) -> Self {
        let mut map: BTreeMap<TimeKey, Vec<Quote>> = BTreeMap::new();
        for (key, quotes) in entries {
            if !quotes.is_empty() {
                map.entry(key).or_default().extend(quotes);
            }
        }
        QuoteDataset { entries: map }
    }

    /// Quotes for exactly this minute, if any.
    pub fn get(&self, key: TimeKey) -> Option<&[Quote]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Keys with their quotes, in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeKey, &[Quote])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of covered minutes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quote_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
