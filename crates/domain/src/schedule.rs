use crate::errors::DomainError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time with minute precision, persisted as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minute_of_day: u16,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidTimeOfDay(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self {
            minute_of_day: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            minute_of_day: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    pub fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    pub fn hour(&self) -> u8 {
        (self.minute_of_day / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.minute_of_day % 60) as u8
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTimeOfDay(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Daily activation window `[start_time, end_time)`.
///
/// When `end_time <= start_time` the window spans midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub enabled: bool,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl Schedule {
    pub fn new(enabled: bool, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            enabled,
            start_time,
            end_time,
        }
    }

    /// Whether `now` falls inside the window, ignoring `enabled`.
    pub fn contains(&self, now: TimeOfDay) -> bool {
        let now = now.minute_of_day() % MINUTES_PER_DAY;
        let start = self.start_time.minute_of_day();
        let end = self.end_time.minute_of_day();

        if end <= start {
            now >= start || now < end
        } else {
            now >= start && now < end
        }
    }

    /// The enabled flag this schedule demands at `now`, or `None` when the
    /// schedule is switched off and abstains.
    pub fn desired_state(&self, now: TimeOfDay) -> Option<bool> {
        self.enabled.then(|| self.contains(now))
    }
}
