use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::BeverageRecord;
use crate::error::{ChartError, ChartResult};

/// Inclusive calorie bounds selected on the range slider.
///
/// `min <= max` is not enforced. An inverted range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaloriesRange {
    pub min: f64,
    pub max: f64,
}

impl CaloriesRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Accepts exactly two values, `[min, max]`.
    pub fn from_slice(values: &[f64]) -> ChartResult<Self> {
        match values {
            [min, max] => Ok(Self::new(*min, *max)),
            _ => Err(ChartError::InvalidCaloriesRange { len: values.len() }),
        }
    }

    #[must_use]
    pub fn contains(self, calories: f64) -> bool {
        calories >= self.min && calories <= self.max
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.min, self.max]
    }
}

impl Default for CaloriesRange {
    fn default() -> Self {
        Self::new(0.0, 510.0)
    }
}

impl From<[f64; 2]> for CaloriesRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

/// Records matching `size`, `milk_type` and `range`, highest calories first.
///
/// Ties keep dataset order.
#[must_use]
pub fn filter_and_sort<'a>(
    records: &'a [BeverageRecord],
    size: &str,
    milk_type: &str,
    range: CaloriesRange,
) -> Vec<&'a BeverageRecord> {
    let mut filtered: Vec<&BeverageRecord> = records
        .iter()
        .filter(|record| record.size == size && record.milk_type == milk_type)
        .filter(|record| range.contains(record.calories))
        .collect();
    filtered.sort_by_key(|record| Reverse(OrderedFloat(record.calories)));
    filtered
}
