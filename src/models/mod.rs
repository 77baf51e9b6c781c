pub mod error;
pub mod filter;
pub mod interval;
pub mod locale;
pub mod period;
pub mod record;
