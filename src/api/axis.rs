use crate::core::{BandScale, LinearScale, format_tick};
use crate::render::{
    Color, FrameGroup, FrameLayer, LinePrimitive, LineStrokeStyle, TextHAlign, TextPrimitive,
};

use super::ChartConfig;

const GRID_DASH: LineStrokeStyle = LineStrokeStyle::Dashed {
    dash_px: 2.0,
    gap_px: 2.0,
};

/// Which side of the plot an axis sits on; ticks and labels point away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Top,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Coordinate along the axis, in axis-local pixels.
    pub position: f64,
    /// `None` draws the tick line without a label.
    pub label: Option<String>,
}

/// Fully built axis group. Axes are rebuilt from scratch on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGroup {
    pub class: &'static str,
    pub orientation: AxisOrientation,
    pub translate_x: f64,
    pub translate_y: f64,
    pub ticks: Vec<AxisTick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    /// Axis-local extent of the domain line, drawn only when `show_domain`.
    pub range: (f64, f64),
    pub show_domain: bool,
    pub tick_style: LineStrokeStyle,
    pub tick_color: Color,
    pub text_color: Color,
    pub font_size_px: f64,
}

impl AxisGroup {
    fn direction(&self) -> f64 {
        match self.orientation {
            AxisOrientation::Top | AxisOrientation::Left => -1.0,
            AxisOrientation::Bottom => 1.0,
        }
    }

    /// Converts the axis into drawable primitives in its own coordinate space.
    #[must_use]
    pub fn to_frame_group(&self) -> FrameGroup {
        let mut group = FrameGroup::new(
            self.class,
            FrameLayer::Axes,
            self.translate_x,
            self.translate_y,
        );
        let k = self.direction();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;

        if self.show_domain {
            let (start, end) = self.range;
            let outer = k * self.tick_size_outer;
            let (a, b) = (start + 0.5, end + 0.5);
            let domain_lines = match self.orientation {
                AxisOrientation::Left => [
                    (outer, a, 0.5, a),
                    (0.5, a, 0.5, b),
                    (0.5, b, outer, b),
                ],
                AxisOrientation::Top | AxisOrientation::Bottom => [
                    (a, outer, a, 0.5),
                    (a, 0.5, b, 0.5),
                    (b, 0.5, b, outer),
                ],
            };
            for (x1, y1, x2, y2) in domain_lines {
                group
                    .lines
                    .push(LinePrimitive::new(x1, y1, x2, y2, 1.0, self.tick_color));
            }
        }

        for tick in &self.ticks {
            let p = tick.position;
            let (line, text) = match self.orientation {
                AxisOrientation::Left => (
                    LinePrimitive::new(0.0, p, k * self.tick_size_inner, p, 1.0, self.tick_color),
                    tick.label.as_ref().map(|label| {
                        TextPrimitive::new(
                            label.clone(),
                            k * spacing,
                            p,
                            self.font_size_px,
                            self.text_color,
                            TextHAlign::Right,
                        )
                        .with_dy_em(0.32)
                    }),
                ),
                AxisOrientation::Top | AxisOrientation::Bottom => (
                    LinePrimitive::new(p, 0.0, p, k * self.tick_size_inner, 1.0, self.tick_color),
                    tick.label.as_ref().map(|label| {
                        let dy = if self.orientation == AxisOrientation::Top {
                            0.0
                        } else {
                            0.71
                        };
                        TextPrimitive::new(
                            label.clone(),
                            p,
                            k * spacing,
                            self.font_size_px,
                            self.text_color,
                            TextHAlign::Center,
                        )
                        .with_dy_em(dy)
                    }),
                ),
            };
            group.lines.push(line.with_style(self.tick_style));
            if let Some(text) = text {
                group.texts.push(text);
            }
        }
        group
    }
}

fn numeric_ticks(scale: LinearScale, count: usize) -> Vec<AxisTick> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            position: scale.map(value),
            label: Some(format_tick(value, step)),
        })
        .collect()
}

/// Top calorie axis: short dashed ticks, no domain line.
pub(super) fn top_calorie_axis(config: &ChartConfig, calories: LinearScale) -> AxisGroup {
    AxisGroup {
        class: "x-axis-top",
        orientation: AxisOrientation::Top,
        translate_x: config.padding.left,
        translate_y: config.padding.top,
        ticks: numeric_ticks(calories, config.tick_count),
        tick_size_inner: config.tick_size_px,
        tick_size_outer: config.tick_size_px,
        tick_padding: config.tick_padding_px,
        range: calories.range(),
        show_domain: false,
        tick_style: GRID_DASH,
        tick_color: config.style.grid_color,
        text_color: config.style.axis_color,
        font_size_px: config.style.axis_font_size_px,
    }
}

/// Bottom calorie axis: tick lines reach up across the plot as a grid.
pub(super) fn bottom_calorie_axis(
    config: &ChartConfig,
    calories: LinearScale,
    beverages: &BandScale,
) -> AxisGroup {
    let (_, band_end) = beverages.range();
    AxisGroup {
        class: "x-axis-bottom",
        orientation: AxisOrientation::Bottom,
        translate_x: config.padding.left,
        translate_y: f64::from(config.viewport.height) - config.padding.bottom,
        ticks: numeric_ticks(calories, config.tick_count),
        tick_size_inner: -band_end,
        tick_size_outer: -band_end,
        tick_padding: config.tick_padding_px,
        range: calories.range(),
        show_domain: false,
        tick_style: GRID_DASH,
        tick_color: config.style.grid_color,
        text_color: config.style.axis_color,
        font_size_px: config.style.axis_font_size_px,
    }
}

/// Beverage axis: one unlabeled tick per band center plus the domain line.
pub(super) fn beverage_axis(config: &ChartConfig, beverages: &BandScale) -> AxisGroup {
    let ticks = beverages
        .domain()
        .filter_map(|key| beverages.center(key))
        .map(|position| AxisTick {
            position,
            label: None,
        })
        .collect();
    AxisGroup {
        class: "y-axis",
        orientation: AxisOrientation::Left,
        translate_x: config.padding.left,
        translate_y: config.padding.top,
        ticks,
        tick_size_inner: config.tick_size_px,
        tick_size_outer: config.tick_size_px,
        tick_padding: 3.0,
        range: beverages.range(),
        show_domain: true,
        tick_style: LineStrokeStyle::Solid,
        tick_color: config.style.axis_color,
        text_color: config.style.axis_color,
        font_size_px: config.style.axis_font_size_px,
    }
}
