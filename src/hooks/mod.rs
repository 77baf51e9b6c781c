pub mod use_filtered_records;
pub mod use_locale;
pub mod use_now;

pub use use_filtered_records::use_filtered_records;
pub use use_locale::{LocaleHandle, use_locale};
pub use use_now::use_now;
