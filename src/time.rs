//! Time and Timer - calendar snapshots and monotonic stopwatch.
//!
//! [`Time`] captures an instant from the system clock and decomposes it
//! into calendar fields (year, month, day, hour, minute, second) under an
//! explicitly requested zone interpretation, local or UTC. The fields are
//! only valid after a decomposition call; reading them earlier returns
//! [`PointstatsError::NotDecomposed`].
//!
//! [`Timer`] records start and stop instants from the monotonic clock and
//! reports the elapsed duration between them in integer nanoseconds,
//! microseconds, or milliseconds. Querying out of order returns
//! [`PointstatsError::TimerNotStarted`] or
//! [`PointstatsError::TimerNotStopped`] instead of a meaningless duration.
//!
//! # Examples
//!
//! ```
//! use pointstats::{Time, Timer};
//!
//! let mut t = Time::now();
//! t.get_local_time();
//! assert!(t.year().unwrap() >= 2024);
//!
//! let mut tm = Timer::new();
//! tm.start();
//! tm.stop();
//! assert!(tm.elapsed_nanos().unwrap() < 1_000_000_000);
//! ```

use crate::error::{PointstatsError, Result};
use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use std::time::{Duration, Instant};

/// Zone interpretation used for the last calendar decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Local time zone of the host
    Local,
    /// Coordinated universal time
    Utc,
}

impl Zone {
    /// Suffix appended to rendered datetime strings.
    pub fn suffix(&self) -> &'static str {
        match self {
            Zone::Local => "local time zone",
            Zone::Utc => "GMT",
        }
    }
}

/// Decomposed calendar fields of a captured instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    /// Full year, e.g. 2026
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Hour, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-59
    pub second: u32,
    /// Zone interpretation the fields were computed under
    pub zone: Zone,
}

/// An updateable snapshot of the system calendar clock.
///
/// The captured instant and its decomposed calendar representation are
/// held separately: the instant is set at construction (and by
/// [`Time::update`]), the fields only after [`Time::get_local_time`] or
/// [`Time::get_gmt_time`]. The two zone interpretations are mutually
/// exclusive per instance; the last call wins.
#[derive(Debug, Clone, Copy)]
pub struct Time {
    instant: DateTime<Utc>,
    cal: Option<Calendar>,
}

impl Time {
    /// Capture the current instant with no calendar decomposition.
    pub fn now() -> Self {
        Self {
            instant: Utc::now(),
            cal: None,
        }
    }

    /// Capture the current instant and decompose it as local time.
    pub fn local() -> Self {
        let mut t = Self::now();
        t.get_local_time();
        t
    }

    /// Capture the current instant and decompose it as UTC.
    pub fn utc() -> Self {
        let mut t = Self::now();
        t.get_gmt_time();
        t
    }

    /// Recapture the instant from the system clock.
    ///
    /// Invalidates any previous decomposition; the calendar fields must be
    /// recomputed before the accessors can be read again.
    pub fn update(&mut self) {
        self.instant = Utc::now();
        self.cal = None;
    }

    /// Seconds since the Unix epoch of the captured instant.
    pub fn epoch_secs(&self) -> i64 {
        self.instant.timestamp()
    }

    /// Decompose the captured instant under the local time zone.
    pub fn get_local_time(&mut self) -> Calendar {
        let dt = self.instant.with_timezone(&Local);
        let cal = Self::decompose(&dt, Zone::Local);
        self.cal = Some(cal);
        cal
    }

    /// Decompose the captured instant under UTC.
    pub fn get_gmt_time(&mut self) -> Calendar {
        let cal = Self::decompose(&self.instant, Zone::Utc);
        self.cal = Some(cal);
        cal
    }

    fn decompose<Tz: chrono::TimeZone>(dt: &DateTime<Tz>, zone: Zone) -> Calendar {
        Calendar {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            zone,
        }
    }

    fn calendar(&self) -> Result<&Calendar> {
        self.cal.as_ref().ok_or(PointstatsError::NotDecomposed)
    }

    /// Zone interpretation of the last decomposition, if any.
    pub fn zone(&self) -> Option<Zone> {
        self.cal.map(|c| c.zone)
    }

    /// Suffix of the last-used zone interpretation.
    pub fn time_zone(&self) -> Result<&'static str> {
        Ok(self.calendar()?.zone.suffix())
    }

    /// Full year of the last decomposition.
    pub fn year(&self) -> Result<i32> {
        Ok(self.calendar()?.year)
    }

    /// Month (1-12) of the last decomposition.
    pub fn month(&self) -> Result<u32> {
        Ok(self.calendar()?.month)
    }

    /// Day of month (1-31) of the last decomposition.
    pub fn day(&self) -> Result<u32> {
        Ok(self.calendar()?.day)
    }

    /// Hour (0-23) of the last decomposition.
    pub fn hour(&self) -> Result<u32> {
        Ok(self.calendar()?.hour)
    }

    /// Minute (0-59) of the last decomposition.
    pub fn minutes(&self) -> Result<u32> {
        Ok(self.calendar()?.minute)
    }

    /// Second (0-59) of the last decomposition.
    pub fn seconds(&self) -> Result<u32> {
        Ok(self.calendar()?.second)
    }

    /// Render a fixed-format datetime string with the zone suffix, e.g.
    /// `"Wed Feb 21 10:18:12 2024 local time zone"`.
    pub fn to_string_calendar(&self) -> Result<String> {
        let zone = self.calendar()?.zone;
        let rendered = match zone {
            Zone::Local => self
                .instant
                .with_timezone(&Local)
                .format("%a %b %e %H:%M:%S %Y")
                .to_string(),
            Zone::Utc => self.instant.format("%a %b %e %H:%M:%S %Y").to_string(),
        };
        Ok(format!("{} {}", rendered, zone.suffix()))
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::now()
    }
}

/// A stopwatch over the monotonic high-resolution clock.
///
/// Elapsed queries require both a start and a subsequent stop; each
/// precondition has its own error. A stop recorded before its start
/// saturates to a zero duration rather than going negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl Timer {
    /// Create a timer with no recorded instants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start instant.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Record the stop instant.
    pub fn stop(&mut self) {
        self.stopped = Some(Instant::now());
    }

    /// Duration between the recorded start and stop instants.
    pub fn elapsed(&self) -> Result<Duration> {
        let started = self.started.ok_or(PointstatsError::TimerNotStarted)?;
        let stopped = self.stopped.ok_or(PointstatsError::TimerNotStopped)?;
        Ok(stopped.saturating_duration_since(started))
    }

    /// Elapsed time in whole nanoseconds.
    pub fn elapsed_nanos(&self) -> Result<u128> {
        Ok(self.elapsed()?.as_nanos())
    }

    /// Elapsed time in whole microseconds.
    pub fn elapsed_micros(&self) -> Result<u128> {
        Ok(self.elapsed()?.as_micros())
    }

    /// Elapsed time in whole milliseconds.
    pub fn elapsed_millis(&self) -> Result<u128> {
        Ok(self.elapsed()?.as_millis())
    }
}
