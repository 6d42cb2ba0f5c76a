use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::CaloriesRange;
use crate::error::{ChartError, ChartResult};

/// Current filter parameters chosen in the controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub size: String,
    pub milk_type: String,
    pub calories_range: CaloriesRange,
}

impl Selection {
    #[must_use]
    pub fn new(
        size: impl Into<String>,
        milk_type: impl Into<String>,
        calories_range: CaloriesRange,
    ) -> Self {
        Self {
            size: size.into(),
            milk_type: milk_type.into(),
            calories_range,
        }
    }

    /// Text shown next to the range slider, e.g. `"0 - 510"`.
    #[must_use]
    pub fn range_label(&self) -> String {
        format!(
            "{} - {}",
            self.calories_range.min, self.calories_range.max
        )
    }
}

/// Discrete change emitted by a radio group or slider handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlEvent {
    SizeSelected(String),
    MilkTypeSelected(String),
    CaloriesMinChanged(f64),
    CaloriesMaxChanged(f64),
    CaloriesRangeChanged(CaloriesRange),
}

/// Observer notified after each selection change.
pub trait SelectionObserver {
    fn id(&self) -> &str;
    fn on_selection_changed(&mut self, selection: &Selection, event: &ControlEvent);
}

/// Single-writer owner of the selection.
///
/// Handles are not clamped against each other: moving min past max is
/// accepted and simply filters everything out.
pub struct SelectionStore {
    selection: Selection,
    observers: Vec<Box<dyn SelectionObserver>>,
    revision: u64,
}

impl SelectionStore {
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            observers: Vec::new(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Bumped on every applied change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `event`. Returns `false` when it left the selection unchanged.
    pub fn apply(&mut self, event: ControlEvent) -> bool {
        let selection = &mut self.selection;
        let changed = match &event {
            ControlEvent::SizeSelected(size) => replace_if_changed(&mut selection.size, size),
            ControlEvent::MilkTypeSelected(milk_type) => {
                replace_if_changed(&mut selection.milk_type, milk_type)
            }
            ControlEvent::CaloriesMinChanged(min) => {
                replace_value(&mut selection.calories_range.min, *min)
            }
            ControlEvent::CaloriesMaxChanged(max) => {
                replace_value(&mut selection.calories_range.max, *max)
            }
            ControlEvent::CaloriesRangeChanged(range) => {
                let min = replace_value(&mut selection.calories_range.min, range.min);
                let max = replace_value(&mut selection.calories_range.max, range.max);
                min || max
            }
        };

        if !changed {
            trace!(?event, "selection unchanged");
            return false;
        }

        self.revision += 1;
        debug!(
            ?event,
            size = %self.selection.size,
            milk_type = %self.selection.milk_type,
            min = self.selection.calories_range.min,
            max = self.selection.calories_range.max,
            "selection changed"
        );
        for observer in &mut self.observers {
            observer.on_selection_changed(&self.selection, &event);
        }
        true
    }

    /// Registers an observer with a unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn SelectionObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

fn replace_if_changed(slot: &mut String, value: &str) -> bool {
    if slot == value {
        return false;
    }
    value.clone_into(slot);
    true
}

fn replace_value(slot: &mut f64, value: f64) -> bool {
    if slot.to_bits() == value.to_bits() {
        return false;
    }
    *slot = value;
    true
}
