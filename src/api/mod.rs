mod axis;
mod chart;
mod chart_config;
mod dashboard;
mod elements;

pub use axis::{AxisGroup, AxisOrientation, AxisTick};
pub use chart::{BeverageChart, ChartScales, UpdateReport};
pub use chart_config::{ChartConfig, ChartStyle, MAX_TICK_COUNT};
pub use dashboard::BeverageDashboard;
pub use elements::{BarElement, BarGeometry, LabelElement};
