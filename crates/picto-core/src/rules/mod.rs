pub mod validation;

pub use validation::{ColumnRule, COLUMN_RULES};
