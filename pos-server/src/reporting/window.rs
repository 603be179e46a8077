//! Date window resolution
//!
//! Dashboard queries carry `?filter=&date=`; the filter names resolve to
//! an inclusive `[start, end]` window in UTC. Unrecognized filters fall
//! back to "today".

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::utils::time::{day_end, day_start, parse_flexible_date};

/// Inclusive date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// One calendar day, midnight through 23:59:59.999
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: day_start(date),
            end: day_end(date),
        }
    }

    /// Window covering effectively all representable dates
    pub fn all() -> Self {
        Self {
            start: day_start(NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date")),
            end: day_end(NaiveDate::from_ymd_opt(2099, 12, 31).expect("valid date")),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Resolve a named filter against the current date
    pub fn resolve(filter: &str, custom_date: Option<&str>) -> Self {
        Self::resolve_at(filter, custom_date, Utc::now().date_naive())
    }

    /// Resolve a named filter against an explicit "today" (deterministic
    /// variant for tests)
    pub fn resolve_at(filter: &str, custom_date: Option<&str>, today: NaiveDate) -> Self {
        match filter {
            "today" => Self::single_day(today),
            "yesterday" => Self::single_day(today - Duration::days(1)),
            "this-week" => {
                // Week starts on Sunday
                let back = today.weekday().num_days_from_sunday();
                Self {
                    start: day_start(today - Duration::days(i64::from(back))),
                    end: day_end(today),
                }
            }
            "custom" => match custom_date.and_then(parse_flexible_date) {
                Some(date) => Self::single_day(date),
                None => Self::single_day(today),
            },
            "all" => Self::all(),
            _ => Self::single_day(today),
        }
    }
}
