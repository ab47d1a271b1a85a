//! Canonical `YYYY-MM-DD` keys for local calendar days.

use crate::errors::TrackerError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// One local calendar day. Time-of-day never reaches the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Keys the calendar day of `at` as seen in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self(at.date_naive())
    }

    pub fn today() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }
}

pub fn to_key(date: NaiveDate) -> DateKey {
    DateKey::from_date(date)
}

pub fn from_key(key: &DateKey) -> NaiveDateTime {
    key.midnight()
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = TrackerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || TrackerError::InvalidDateKey(raw.to_string());
        // chrono tolerates signs and unpadded fields; only the canonical form is a key.
        let key = NaiveDate::parse_from_str(raw, KEY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())?;
        if key.to_string() != raw {
            return Err(invalid());
        }
        Ok(key)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for DateKey {
    type Error = TrackerError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}
