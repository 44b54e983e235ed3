//! Forecast issue time resolution.
//!
//! The short-term forecast is published eight times a day and each issue
//! becomes queryable roughly ten minutes after the hour.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike, Utc};
use chrono_tz::Asia::Seoul;
use serde::{Deserialize, Serialize};

/// Hours at which a new forecast issue is published
pub const PUBLICATION_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

/// Minutes after the first issue of the day before it can be queried
const FIRST_ISSUE_DELAY_MINUTES: u32 = 10;

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the forecast service's time zone (KST)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&Seoul).naive_local()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Issue date and hour of a published forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseDateTime {
    pub date: NaiveDate,
    pub hour: u32,
}

impl BaseDateTime {
    /// Issue date as `YYYYMMDD`
    pub fn base_date(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// Issue time as `HH00`
    pub fn base_time(&self) -> String {
        format!("{:02}00", self.hour)
    }
}

impl std::fmt::Display for BaseDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.base_date(), self.base_time())
    }
}

/// Latest forecast issue available at `now`.
///
/// Before 02:11 the newest issue is yesterday's 23:00 one; afterwards it is
/// the latest publication hour not after the current hour.
pub fn resolve_base_datetime(now: NaiveDateTime) -> BaseDateTime {
    let (hour, minute) = (now.hour(), now.minute());

    if hour < 2 || (hour == 2 && minute <= FIRST_ISSUE_DELAY_MINUTES) {
        return BaseDateTime {
            date: (now - Duration::days(1)).date(),
            hour: 23,
        };
    }

    let hour = PUBLICATION_HOURS
        .iter()
        .rev()
        .copied()
        .find(|h| *h <= hour)
        .unwrap_or(PUBLICATION_HOURS[0]);

    BaseDateTime {
        date: now.date(),
        hour,
    }
}
