use super::period::YearMonth;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Cannot advance past {0}: already at the current month")]
    CannotAdvance(YearMonth),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
