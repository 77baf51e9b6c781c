use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use super::period::PeriodSelector;

/// Closed range of wall-clock instants in the dashboard's time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Resolves a selector against the current date.
    pub fn resolve(period: PeriodSelector, today: NaiveDate) -> Self {
        match period {
            PeriodSelector::Today => Self::day(today),
            PeriodSelector::Month(anchor) => Self::month(anchor),
        }
    }

    /// From 00:00:00 to the last nanosecond of `date`.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date.and_time(NaiveTime::MIN),
            end: date.and_time(last_instant_of_day()),
        }
    }

    /// From the first day to the last nanosecond of the month containing `anchor`.
    pub fn month(anchor: NaiveDate) -> Self {
        let first = anchor.with_day(1).unwrap_or(anchor);
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        Self {
            start: first.and_time(NaiveTime::MIN),
            end: last.and_time(last_instant_of_day()),
        }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

// NaiveTime subtraction wraps around midnight: 23:59:59.999999999.
fn last_instant_of_day() -> NaiveTime {
    NaiveTime::MIN - Duration::nanoseconds(1)
}
