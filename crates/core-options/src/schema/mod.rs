//! Declarative option schema: categories, options, values and locale tables.

pub mod language;
pub mod locale_table;
pub mod schema;

pub use language::Language;
pub use locale_table::LocaleTable;
pub use schema::{Category, OptionDef, OptionValue, Schema};
