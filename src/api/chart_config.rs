use serde::{Deserialize, Serialize};

use crate::core::{Easing, Padding, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Upper bound on requested axis ticks; tick generation allocates per tick.
pub const MAX_TICK_COUNT: usize = 1_000;

/// Colors and font sizes used when materializing frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub bar_color: Color,
    pub label_color: Color,
    pub annotation_color: Color,
    pub axis_color: Color,
    pub grid_color: Color,
    #[serde(default)]
    pub background: Option<Color>,
    pub label_font_size_px: f64,
    pub axis_font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb(0.0, 0.439, 0.290),
            label_color: Color::rgb(0.133, 0.133, 0.133),
            annotation_color: Color::rgb(0.467, 0.467, 0.467),
            axis_color: Color::rgb(0.0, 0.0, 0.0),
            grid_color: Color::rgb(0.8, 0.8, 0.8),
            background: None,
            label_font_size_px: 12.0,
            axis_font_size_px: 10.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can keep chart setup next to their data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_calorie_domain")]
    pub calorie_domain: [f64; 2],
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_tick_padding_px")]
    pub tick_padding_px: f64,
    #[serde(default = "default_tick_size_px")]
    pub tick_size_px: f64,
    #[serde(default = "default_label_anchor_x")]
    pub label_anchor_x: f64,
    #[serde(default = "default_bar_group_offset_y")]
    pub bar_group_offset_y: f64,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: Padding::default(),
            calorie_domain: default_calorie_domain(),
            band_padding: default_band_padding(),
            transition_duration_ms: default_transition_duration_ms(),
            easing: Easing::default(),
            tick_count: default_tick_count(),
            tick_padding_px: default_tick_padding_px(),
            tick_size_px: default_tick_size_px(),
            label_anchor_x: default_label_anchor_x(),
            bar_group_offset_y: default_bar_group_offset_y(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_calorie_domain(mut self, start: f64, end: f64) -> Self {
        self.calorie_domain = [start, end];
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_viewport(self.viewport, self.padding)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.padding.is_valid() {
            return Err(ChartError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.plot_area().is_valid() {
            return Err(ChartError::InvalidData(
                "padding leaves no room for the plot area".to_owned(),
            ));
        }
        let [start, end] = self.calorie_domain;
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(ChartError::InvalidData(
                "calorie domain must be finite and non-zero".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..=1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be in [0, 1]".to_owned(),
            ));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }
        if self.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "tick count must be <= {MAX_TICK_COUNT} (got {})",
                self.tick_count
            )));
        }
        for (name, value) in [
            ("tick padding", self.tick_padding_px),
            ("tick size", self.tick_size_px),
            ("label anchor", self.label_anchor_x),
            ("bar group offset", self.bar_group_offset_y),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("{name} must be finite")));
            }
        }
        for color in [
            self.style.bar_color,
            self.style.label_color,
            self.style.annotation_color,
            self.style.axis_color,
            self.style.grid_color,
        ] {
            color.validate()?;
        }
        if let Some(background) = self.style.background {
            background.validate()?;
        }
        let positive = |value: f64| value.is_finite() && value > 0.0;
        if !positive(self.style.label_font_size_px) || !positive(self.style.axis_font_size_px) {
            return Err(ChartError::InvalidData(
                "font sizes must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::new(1000, 760))
    }
}

fn default_calorie_domain() -> [f64; 2] {
    [0.0, 550.0]
}

fn default_band_padding() -> f64 {
    0.1
}

fn default_transition_duration_ms() -> f64 {
    500.0
}

fn default_tick_count() -> usize {
    10
}

fn default_tick_padding_px() -> f64 {
    10.0
}

fn default_tick_size_px() -> f64 {
    6.0
}

fn default_label_anchor_x() -> f64 {
    220.0
}

fn default_bar_group_offset_y() -> f64 {
    24.0
}
