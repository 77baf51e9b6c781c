pub mod locale_selector;
pub mod month_navigator;
pub mod readings_table;

pub use locale_selector::LocaleSelector;
pub use month_navigator::MonthNavigator;
pub use readings_table::{ReadingsTable, cell_text, table_columns};
