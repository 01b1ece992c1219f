use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Seconds since the Unix epoch, exactly as they appear on the wire.
///
/// Records keep the raw integer so that encoding stays lossless; the calendar
/// rendering is only produced when the value is displayed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Timestamp(u32);

impl Timestamp {
    pub fn from_unix(seconds: u32) -> Self {
        Timestamp(seconds)
    }

    pub fn as_unix(&self) -> u32 {
        self.0
    }

    /// Calendar time in UTC.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.0), 0)
    }
}

impl From<u32> for Timestamp {
    fn from(seconds: u32) -> Self {
        Timestamp(seconds)
    }
}

impl Display for Timestamp {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(formatter, "{}", datetime.format(DISPLAY_FORMAT)),
            None => write!(formatter, "{}", self.0)
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
