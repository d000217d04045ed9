//! Weekly send window.

use std::fmt;

use jiff::{civil::Weekday, tz::TimeZone, Timestamp};

use crate::error::Result;

/// Minimum whole calendar days between two cycles.
pub const MIN_DAYS_BETWEEN_CYCLES: i32 = 6;

/// Why a cycle did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Today is not the notification day
    WrongDay { today: Weekday, expected: Weekday },
    /// The last cycle was too recent
    TooSoon { days_since: i32 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::WrongDay { today, expected } => {
                write!(f, "today is {today:?}, reminders go out on {expected:?}")
            }
            SkipReason::TooSoon { days_since } => write!(
                f,
                "too soon after last notification ({days_since} days ago, need {MIN_DAYS_BETWEEN_CYCLES})"
            ),
        }
    }
}

/// Allows one cycle per week on a fixed weekday.
///
/// A cycle may run when the current date, in `time_zone`, falls on `day`
/// and at least [`MIN_DAYS_BETWEEN_CYCLES`] calendar days separate it from
/// the date of the last cycle. Running the job twice on the same day is
/// therefore a no-op the second time.
#[derive(Debug, Clone)]
pub struct Gate {
    day: Weekday,
    time_zone: TimeZone,
}

impl Gate {
    pub fn new(day: Weekday, time_zone: TimeZone) -> Self {
        Self { day, time_zone }
    }

    /// Decides whether a cycle may run at `now`.
    ///
    /// Returns `Ok(None)` when the cycle should run.
    pub fn check(&self, last_notified: Option<Timestamp>, now: Timestamp) -> Result<Option<SkipReason>> {
        let today = now.to_zoned(self.time_zone.clone()).date();

        if today.weekday() != self.day {
            return Ok(Some(SkipReason::WrongDay {
                today: today.weekday(),
                expected: self.day,
            }));
        }

        let Some(last) = last_notified else {
            return Ok(None);
        };

        let last_date = last.to_zoned(self.time_zone.clone()).date();
        let days_since = last_date.until(today)?.get_days();
        if days_since < MIN_DAYS_BETWEEN_CYCLES {
            return Ok(Some(SkipReason::TooSoon { days_since }));
        }

        Ok(None)
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(Weekday::Sunday, TimeZone::system())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_sunday_gate() -> Gate {
        Gate::new(Weekday::Sunday, TimeZone::UTC)
    }

    // 2024-03-10 is a Sunday.
    fn sunday() -> Timestamp {
        "2024-03-10T18:00:00Z".parse().unwrap()
    }

    fn days_before(ts: Timestamp, days: i64) -> Timestamp {
        ts.checked_sub(jiff::SignedDuration::from_hours(24 * days)).unwrap()
    }

    #[test]
    fn test_first_run_on_notification_day() {
        assert_eq!(utc_sunday_gate().check(None, sunday()).unwrap(), None);
    }

    #[test]
    fn test_wrong_day() {
        let monday = "2024-03-11T18:00:00Z".parse().unwrap();
        assert_eq!(
            utc_sunday_gate().check(None, monday).unwrap(),
            Some(SkipReason::WrongDay {
                today: Weekday::Monday,
                expected: Weekday::Sunday,
            })
        );
    }

    #[test]
    fn test_five_days_is_too_soon() {
        let last = days_before(sunday(), 5);
        assert_eq!(
            utc_sunday_gate().check(Some(last), sunday()).unwrap(),
            Some(SkipReason::TooSoon { days_since: 5 })
        );
    }

    #[test]
    fn test_seven_days_runs() {
        let last = days_before(sunday(), 7);
        assert_eq!(utc_sunday_gate().check(Some(last), sunday()).unwrap(), None);
    }

    #[test]
    fn test_same_day_rerun_is_skipped() {
        let earlier = "2024-03-10T08:00:00Z".parse().unwrap();
        assert_eq!(
            utc_sunday_gate().check(Some(earlier), sunday()).unwrap(),
            Some(SkipReason::TooSoon { days_since: 0 })
        );
    }

    #[test]
    fn test_calendar_days_not_elapsed_hours() {
        // Late Monday to early Sunday is under six full days but six
        // calendar days apart.
        let last = "2024-03-04T23:30:00Z".parse().unwrap();
        let now = "2024-03-10T00:15:00Z".parse().unwrap();
        assert_eq!(utc_sunday_gate().check(Some(last), now).unwrap(), None);
    }

    #[test]
    fn test_day_is_judged_in_configured_zone() {
        // Sunday 02:00 in Tokyo is still Saturday in UTC.
        let now: Timestamp = "2024-03-09T17:00:00Z".parse().unwrap();
        let tokyo = Gate::new(Weekday::Sunday, TimeZone::get("Asia/Tokyo").unwrap());
        assert_eq!(tokyo.check(None, now).unwrap(), None);
        assert!(utc_sunday_gate().check(None, now).unwrap().is_some());
    }
}
