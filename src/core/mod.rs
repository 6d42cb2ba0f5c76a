pub mod band_scale;
pub mod filter;
pub mod label;
pub mod reconcile;
pub mod record;
pub mod scale;
pub mod transition;
pub mod types;

pub use band_scale::BandScale;
pub use filter::{CaloriesRange, filter_and_sort};
pub use label::{BeverageLabel, LabelLine, LabelLineRole, decorate_beverage_name};
pub use reconcile::{KeyedCollection, ReconcileReport};
pub use record::BeverageRecord;
pub use scale::{LinearScale, format_tick};
pub use transition::{Animated, Easing, Interpolate, Transition};
pub use types::{Padding, PlotArea, Viewport};
