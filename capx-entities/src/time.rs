use std::{fmt, ops::Add, time::Duration};

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Point in time with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().unix_timestamp())
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, rhs: Duration) -> Self {
        let secs = i64::try_from(rhs.as_secs()).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(secs))
    }
}

impl From<TimestampMs> for Timestamp {
    fn from(from: TimestampMs) -> Self {
        Self(from.0.div_euclid(1000))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_rfc3339(f, i128::from(self.0) * 1_000_000_000)
    }
}

/// Point in time with millisecond precision.
///
/// Used for the creation and modification time of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

impl TimestampMs {
    pub fn now() -> Self {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self(i64::try_from(millis).unwrap_or(i64::MAX))
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<Timestamp> for TimestampMs {
    fn from(from: Timestamp) -> Self {
        Self(from.0.saturating_mul(1000))
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_rfc3339(f, i128::from(self.0) * 1_000_000)
    }
}

fn fmt_rfc3339(f: &mut fmt::Formatter, nanos: i128) -> fmt::Result {
    let formatted = OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok());
    match formatted {
        Some(s) => f.write_str(&s),
        None => write!(f, "{nanos}ns"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_between_precisions() {
        let ts = Timestamp::from_secs(1_600_000_000);
        let ms = TimestampMs::from(ts);
        assert_eq!(1_600_000_000_000, ms.as_millis());
        assert_eq!(ts, Timestamp::from(TimestampMs::from_millis(1_600_000_000_999)));
    }

    #[test]
    fn display_as_rfc3339() {
        assert_eq!(
            "2020-09-13T12:26:40Z",
            Timestamp::from_secs(1_600_000_000).to_string()
        );
    }

    #[test]
    fn add_duration() {
        let ts = Timestamp::from_secs(10) + Duration::from_secs(5);
        assert_eq!(15, ts.as_secs());
    }
}
