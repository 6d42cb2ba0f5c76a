use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One beverage/size/milk-type row of the dataset.
///
/// Columns other than the four the chart reads are kept in `extra`, in file
/// order, so hosts can show them without re-reading the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeverageRecord {
    pub beverage: String,
    pub size: String,
    pub milk_type: String,
    pub calories: f64,
    #[serde(default)]
    pub extra: IndexMap<String, String>,
}

impl BeverageRecord {
    #[must_use]
    pub fn new(
        beverage: impl Into<String>,
        size: impl Into<String>,
        milk_type: impl Into<String>,
        calories: f64,
    ) -> Self {
        Self {
            beverage: beverage.into(),
            size: size.into(),
            milk_type: milk_type.into(),
            calories,
            extra: IndexMap::new(),
        }
    }

    /// Looks up a pass-through column by its header name.
    #[must_use]
    pub fn extra(&self, column: &str) -> Option<&str> {
        self.extra.get(column).map(String::as_str)
    }
}
