use tracing::{debug, trace};

use crate::core::{
    BandScale, BeverageRecord, CaloriesRange, KeyedCollection, LabelLineRole, LinearScale,
    ReconcileReport, filter_and_sort,
};
use crate::error::ChartResult;
use crate::interaction::Selection;
use crate::render::{
    FrameGroup, FrameLayer, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    TextSpan,
};

use super::axis::{AxisGroup, beverage_axis, bottom_calorie_axis, top_calorie_axis};
use super::{BarElement, BarGeometry, ChartConfig, LabelElement};

/// Scales derived for one update. Rebuilt every time, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub calories: LinearScale,
    pub beverages: BandScale,
}

impl ChartScales {
    /// Calorie domain is fixed by config; the band domain is the filtered order.
    pub fn build(config: &ChartConfig, filtered: &[&BeverageRecord]) -> ChartResult<Self> {
        let plot = config.plot_area();
        let [domain_start, domain_end] = config.calorie_domain;
        let calories = LinearScale::new(domain_start, domain_end)?.with_range(0.0, plot.width)?;
        let beverages = BandScale::new(
            filtered.iter().map(|record| record.beverage.as_str()),
            0.0,
            plot.height,
            config.band_padding,
        )?;
        Ok(Self {
            calories,
            beverages,
        })
    }

    fn bar_target(&self, record: &BeverageRecord) -> BarGeometry {
        BarGeometry {
            y: self.band_start(&record.beverage),
            height: self.beverages.bandwidth(),
            width: self.bar_width(record.calories),
        }
    }

    /// Finite, non-negative width; infinite calories fill the plot.
    fn bar_width(&self, calories: f64) -> f64 {
        let width = self.calories.map(calories);
        if width.is_finite() {
            return width.max(0.0);
        }
        let (_, range_end) = self.calories.range();
        if width > 0.0 { range_end } else { 0.0 }
    }

    fn label_target(&self, record: &BeverageRecord) -> f64 {
        self.band_start(&record.beverage) + self.beverages.bandwidth() / 2.0
    }

    fn band_start(&self, key: &str) -> f64 {
        self.beverages
            .position(key)
            .unwrap_or_else(|| self.beverages.range().0)
    }
}

/// Outcome of one `BeverageChart::update` call.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub calories_range: CaloriesRange,
    pub filtered: Vec<String>,
    pub bars: ReconcileReport,
    pub labels: ReconcileReport,
}

impl UpdateReport {
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }
}

/// Horizontal calorie bar chart with keyed, animated bars and labels.
///
/// Time is a host-supplied millisecond clock: `update` starts transitions at
/// `now_ms` and `frame_at`/`render` sample them at any later instant.
pub struct BeverageChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    bars: KeyedCollection<BarElement>,
    labels: KeyedCollection<LabelElement>,
    axes: Vec<AxisGroup>,
    scales: Option<ChartScales>,
    update_count: u64,
}

impl<R: Renderer> BeverageChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            bars: KeyedCollection::new(),
            labels: KeyedCollection::new(),
            axes: Vec::new(),
            scales: None,
            update_count: 0,
        })
    }

    /// Filters, rescales and reconciles the chart against `data`.
    ///
    /// Fails only when `calories_range` does not hold exactly two values.
    /// Unknown sizes or milk types produce an empty chart.
    pub fn update(
        &mut self,
        data: &[BeverageRecord],
        size: &str,
        milk_type: &str,
        calories_range: &[f64],
        now_ms: f64,
    ) -> ChartResult<UpdateReport> {
        let range = CaloriesRange::from_slice(calories_range)?;
        let filtered = filter_and_sort(data, size, milk_type, range);
        let scales = ChartScales::build(&self.config, &filtered)?;

        let duration_ms = self.config.transition_duration_ms;
        let easing = self.config.easing;

        let bars = self.bars.reconcile(
            &filtered,
            |record| record.beverage.as_str(),
            |record| BarElement::entered(scales.bar_target(record)),
            |bar, record| {
                bar.retarget(scales.bar_target(record), now_ms, duration_ms, easing);
            },
        );
        let labels = self.labels.reconcile(
            &filtered,
            |record| record.beverage.as_str(),
            |record| LabelElement::entered(record, scales.label_target(record)),
            |label, record| {
                label
                    .y
                    .retarget(scales.label_target(record), now_ms, duration_ms, easing);
            },
        );

        self.axes = vec![
            bottom_calorie_axis(&self.config, scales.calories, &scales.beverages),
            top_calorie_axis(&self.config, scales.calories),
            beverage_axis(&self.config, &scales.beverages),
        ];
        self.scales = Some(scales);
        self.update_count += 1;

        debug!(
            size,
            milk_type,
            min = range.min,
            max = range.max,
            filtered = filtered.len(),
            entered = bars.entered.len(),
            updated = bars.updated.len(),
            exited = bars.exited.len(),
            "chart updated"
        );

        Ok(UpdateReport {
            calories_range: range,
            filtered: filtered
                .iter()
                .map(|record| record.beverage.clone())
                .collect(),
            bars,
            labels,
        })
    }

    /// Same as [`BeverageChart::update`] driven by a selection snapshot.
    pub fn update_with_selection(
        &mut self,
        data: &[BeverageRecord],
        selection: &Selection,
        now_ms: f64,
    ) -> ChartResult<UpdateReport> {
        self.update(
            data,
            &selection.size,
            &selection.milk_type,
            &selection.calories_range.to_array(),
            now_ms,
        )
    }

    /// Materializes the scene with every transition sampled at `now_ms`.
    #[must_use]
    pub fn frame_at(&self, now_ms: f64) -> RenderFrame {
        let mut frame = RenderFrame::new(self.config.viewport);
        if let Some(background) = self.config.style.background {
            frame = frame.with_background(background);
        }
        for axis in &self.axes {
            frame = frame.with_group(axis.to_frame_group());
        }

        let style = &self.config.style;
        let mut bar_group =
            FrameGroup::new("bar-group", FrameLayer::Bars, 0.0, self.config.bar_group_offset_y);
        for (key, bar) in self.bars.iter() {
            let geometry = bar.geometry_at(now_ms);
            bar_group.rects.push(RectPrimitive::new(
                key,
                self.config.padding.left,
                geometry.y,
                geometry.width,
                geometry.height,
                style.bar_color,
            ));
        }
        for (key, label) in self.labels.iter() {
            let spans = label
                .label
                .lines()
                .into_iter()
                .map(|line| {
                    let (class, fill) = match line.role {
                        LabelLineRole::Name => (None, None),
                        LabelLineRole::Annotation => {
                            (Some("annotation"), Some(style.annotation_color))
                        }
                    };
                    TextSpan {
                        text: line.text,
                        x: line.dx_px,
                        dy_em: line.dy_em,
                        class,
                        fill,
                    }
                })
                .collect();
            bar_group.texts.push(
                TextPrimitive::new(
                    String::new(),
                    self.config.label_anchor_x,
                    label.y_at(now_ms),
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Right,
                )
                .with_key(key)
                .with_spans(spans)
                .with_dy_em(0.35),
            );
        }
        frame.with_group(bar_group)
    }

    pub fn render(&mut self, now_ms: f64) -> ChartResult<()> {
        let frame = self.frame_at(now_ms);
        trace!(
            now_ms,
            rects = frame.rect_count(),
            texts = frame.text_count(),
            "render chart frame"
        );
        self.renderer.render(&frame)
    }

    /// `true` while any bar or label is still moving at `now_ms`.
    #[must_use]
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.bars.iter().any(|(_, bar)| bar.geometry.is_moving(now_ms))
            || self.labels.iter().any(|(_, label)| label.y.is_moving(now_ms))
    }

    /// Collapses finished transitions so later frames need no sampling.
    pub fn settle(&mut self, now_ms: f64) {
        for bar in self.bars.values_mut() {
            bar.geometry.settle(now_ms);
        }
        for label in self.labels.values_mut() {
            label.y.settle(now_ms);
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn scales(&self) -> Option<&ChartScales> {
        self.scales.as_ref()
    }

    #[must_use]
    pub fn axes(&self) -> &[AxisGroup] {
        &self.axes
    }

    #[must_use]
    pub fn bars(&self) -> &KeyedCollection<BarElement> {
        &self.bars
    }

    #[must_use]
    pub fn labels(&self) -> &KeyedCollection<LabelElement> {
        &self.labels
    }

    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
