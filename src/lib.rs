//! beverage-chart: headless calorie bar chart for a coffee-chain menu.
//!
//! Records are filtered by size, milk type and a calorie range, sorted by
//! calories and reconciled into keyed bars and labels that animate between
//! updates. Frames are handed to a [`render::Renderer`]; an SVG backend and a
//! counting null backend ship with the crate.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BeverageChart, BeverageDashboard, ChartConfig, ChartStyle, UpdateReport};
pub use crate::core::{
    BeverageLabel, BeverageRecord, CaloriesRange, decorate_beverage_name, filter_and_sort,
};
pub use error::{ChartError, ChartResult};
pub use interaction::{ControlEvent, ControlOptions, Selection, SelectionStore};
