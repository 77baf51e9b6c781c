use chrono::{DateTime, NaiveDateTime, TimeZone};

use super::interval::Interval;
use super::period::PeriodSelector;
use super::record::{Record, record_timestamp};

/// Keeps the items whose timestamp falls inside `interval`, in input order.
///
/// Items for which `timestamp` returns `None` are dropped.
pub fn filter_by<T, F>(items: &[T], interval: &Interval, timestamp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<NaiveDateTime>,
{
    items
        .iter()
        .filter(|&item| timestamp(item).is_some_and(|instant| interval.contains(&instant)))
        .cloned()
        .collect()
}

/// Keeps the records whose `field` falls inside the period selected at `now`.
///
/// Day and month boundaries follow `now`'s time zone. Records without the
/// field, or with an unparseable value, are excluded.
pub fn filter_records<Tz: TimeZone>(
    records: &[Record],
    field: &str,
    period: PeriodSelector,
    now: &DateTime<Tz>,
) -> Vec<Record> {
    let tz = now.timezone();
    let interval = Interval::resolve(period, now.date_naive());
    filter_by(records, &interval, |record| record_timestamp(record, field, &tz))
}
