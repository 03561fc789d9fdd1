//! Mesen's core option table and the settings derived from it.

mod table;
pub mod timing;

use core_options::LocaleTable;

pub use table::{CATEGORIES, OPTIONS, OPTIONS_US};
pub use timing::{ConsoleModel, FpsMode, FPS_MODE_OPTION, REGION_OPTION};

/// Locale table with the English schema as base.
pub fn locale_table() -> LocaleTable<'static> {
    LocaleTable::new(&OPTIONS_US)
}
