use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::AppError;
use super::locale::Locale;

/// A calendar month. Ordering compares the year first, then the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// First day of the month, if the pair names a real month.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The period the dashboard is scoped to.
///
/// `Month` carries an anchor date; only its year and month matter. The
/// current month is always represented as `Today`, never as `Month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "anchor", rename_all = "lowercase")]
pub enum PeriodSelector {
    #[default]
    Today,
    Month(NaiveDate),
}

impl PeriodSelector {
    /// Builds a month selector, collapsing the current month to `Today`.
    pub fn month(anchor: NaiveDate, today: NaiveDate) -> Self {
        if YearMonth::from(anchor) == YearMonth::from(today) {
            Self::Today
        } else {
            Self::Month(anchor)
        }
    }

    pub const fn is_today(self) -> bool {
        matches!(self, Self::Today)
    }

    /// The calendar month this selector resolves to.
    pub fn year_month(self, today: NaiveDate) -> YearMonth {
        match self {
            Self::Today => today.into(),
            Self::Month(anchor) => anchor.into(),
        }
    }

    /// Steps one month back. `Today` steps to the month before the current one.
    pub fn previous(self, today: NaiveDate) -> Self {
        let anchor = match self {
            Self::Today => today,
            Self::Month(anchor) => anchor,
        };
        Self::Month(one_month_before(anchor))
    }

    /// Whether `next` may be called: only months strictly before the current one.
    pub fn can_advance(self, today: NaiveDate) -> bool {
        match self {
            Self::Today => false,
            Self::Month(anchor) => YearMonth::from(anchor) < YearMonth::from(today),
        }
    }

    /// Steps one month forward, landing on `Today` when reaching the current month.
    ///
    /// Returns [`AppError::CannotAdvance`] when [`Self::can_advance`] is false.
    pub fn next(self, today: NaiveDate) -> Result<Self, AppError> {
        match self {
            Self::Month(anchor) if self.can_advance(today) => {
                let candidate = anchor
                    .checked_add_months(Months::new(1))
                    .ok_or_else(|| AppError::DateOutOfRange(anchor.to_string()))?;
                Ok(Self::month(candidate, today))
            }
            _ => Err(AppError::CannotAdvance(self.year_month(today))),
        }
    }

    pub const fn go_to_today(self) -> Self {
        Self::Today
    }

    /// Display label: "Today", or the month name and year.
    pub fn label(self, locale: Locale) -> String {
        match self {
            Self::Today => locale.today_label().to_string(),
            Self::Month(anchor) => locale.month_label(anchor.into()),
        }
    }
}

// Saturates at the earliest representable month.
fn one_month_before(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}
