//! Dataset loading.
//!
//! Only `Calories` is coerced to a number; every other column stays text.

mod loader;

pub use loader::{
    BEVERAGE_COLUMN, CALORIES_COLUMN, MILK_TYPE_COLUMN, SIZE_COLUMN, load_records_from_path,
    load_records_from_reader, load_records_from_str,
};
