use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AppError;
use super::period::YearMonth;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Display language for dashboard labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

impl Locale {
    /// Returns the primary language subtag.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Spanish => "es",
        }
    }

    /// Returns the language name in that language.
    pub fn name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Spanish => "Español",
        }
    }

    pub fn today_label(&self) -> &'static str {
        match self {
            Locale::English => "Today",
            Locale::Spanish => "Hoy",
        }
    }

    pub fn previous_month_label(&self) -> &'static str {
        match self {
            Locale::English => "Previous month",
            Locale::Spanish => "Mes anterior",
        }
    }

    pub fn next_month_label(&self) -> &'static str {
        match self {
            Locale::English => "Next month",
            Locale::Spanish => "Mes siguiente",
        }
    }

    pub fn empty_period_label(&self) -> &'static str {
        match self {
            Locale::English => "No readings for this period",
            Locale::Spanish => "No hay lecturas para este periodo",
        }
    }

    /// Month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        let names = match self {
            Locale::English => &ENGLISH_MONTHS,
            Locale::Spanish => &SPANISH_MONTHS,
        };
        names.get(index).copied()
    }

    /// "March 2025" / "marzo de 2025". Falls back to `YYYY-MM` for invalid months.
    pub fn month_label(&self, year_month: YearMonth) -> String {
        match (self, self.month_name(year_month.month)) {
            (_, None) => year_month.to_string(),
            (Locale::English, Some(name)) => format!("{name} {}", year_month.year),
            (Locale::Spanish, Some(name)) => format!("{name} de {}", year_month.year),
        }
    }

    /// All supported locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Spanish]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    /// Accepts BCP 47 tags such as `en`, `es-MX` or `en_GB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "en" => Ok(Locale::English),
            "es" => Ok(Locale::Spanish),
            _ => Err(AppError::ConfigError(format!("Unsupported locale: {s}"))),
        }
    }
}
