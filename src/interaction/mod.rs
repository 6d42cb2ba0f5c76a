//! Control-side state: option lists for the radio groups and the selection
//! they drive.

mod selection;

pub use selection::{ControlEvent, Selection, SelectionObserver, SelectionStore};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{BeverageRecord, CaloriesRange};

/// Choices offered by the size and milk-type radio groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOptions {
    /// Distinct sizes in order of first appearance.
    pub sizes: Vec<String>,
    /// Distinct milk types, sorted.
    pub milk_types: Vec<String>,
}

impl ControlOptions {
    #[must_use]
    pub fn from_records(records: &[BeverageRecord]) -> Self {
        let sizes: IndexSet<&str> = records.iter().map(|r| r.size.as_str()).collect();
        let mut milk_types: Vec<String> = records
            .iter()
            .map(|r| r.milk_type.as_str())
            .collect::<IndexSet<&str>>()
            .into_iter()
            .map(str::to_owned)
            .collect();
        milk_types.sort();

        Self {
            sizes: sizes.into_iter().map(str::to_owned).collect(),
            milk_types,
        }
    }

    /// First size, first milk type and the `0 - 510` starting range.
    ///
    /// An empty dataset yields empty strings, which filter to an empty chart.
    #[must_use]
    pub fn default_selection(&self) -> Selection {
        Selection::new(
            self.sizes.first().cloned().unwrap_or_default(),
            self.milk_types.first().cloned().unwrap_or_default(),
            CaloriesRange::default(),
        )
    }
}
