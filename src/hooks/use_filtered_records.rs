use chrono::{DateTime, Local};
use std::rc::Rc;
use yew::prelude::*;

use crate::models::filter::filter_records;
use crate::models::period::PeriodSelector;
use crate::models::record::Record;

/// Records of `records` falling inside `period`, keyed on `field`.
///
/// The result is memoized on the inputs and on the current date, so a
/// `Today` view refreshes at midnight but not on every clock tick.
#[hook]
pub fn use_filtered_records(
    records: Rc<Vec<Record>>,
    field: AttrValue,
    period: PeriodSelector,
    now: DateTime<Local>,
) -> Rc<Vec<Record>> {
    use_memo(
        (records, field, period, now.date_naive()),
        move |(records, field, period, _)| {
            let filtered = filter_records(records, field, *period, &now);
            gloo::console::debug!(&format!(
                "Filtered {} of {} records for {:?}",
                filtered.len(),
                records.len(),
                period
            ));
            filtered
        },
    )
}
