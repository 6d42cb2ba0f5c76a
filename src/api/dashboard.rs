use tracing::{debug, info};

use crate::core::BeverageRecord;
use crate::error::ChartResult;
use crate::interaction::{
    ControlEvent, ControlOptions, Selection, SelectionObserver, SelectionStore,
};
use crate::render::Renderer;

use super::{BeverageChart, ChartConfig, UpdateReport};

/// Wires the controls to the chart: every selection change re-runs `update`.
pub struct BeverageDashboard<R: Renderer> {
    records: Vec<BeverageRecord>,
    options: ControlOptions,
    store: SelectionStore,
    chart: BeverageChart<R>,
}

impl<R: Renderer> BeverageDashboard<R> {
    /// Builds options from `records` and draws the default selection at `now_ms`.
    pub fn new(
        records: Vec<BeverageRecord>,
        config: ChartConfig,
        renderer: R,
        now_ms: f64,
    ) -> ChartResult<Self> {
        let options = ControlOptions::from_records(&records);
        let store = SelectionStore::new(options.default_selection());
        let mut chart = BeverageChart::new(renderer, config)?;
        chart.update_with_selection(&records, store.selection(), now_ms)?;

        info!(
            records = records.len(),
            sizes = options.sizes.len(),
            milk_types = options.milk_types.len(),
            "dashboard ready"
        );

        Ok(Self {
            records,
            options,
            store,
            chart,
        })
    }

    /// Applies a control event. Returns `None` when the selection did not change.
    pub fn handle(&mut self, event: ControlEvent, now_ms: f64) -> ChartResult<Option<UpdateReport>> {
        if !self.store.apply(event) {
            return Ok(None);
        }
        let report = self
            .chart
            .update_with_selection(&self.records, self.store.selection(), now_ms)?;
        debug!(
            revision = self.store.revision(),
            label = %self.store.selection().range_label(),
            "dashboard refreshed"
        );
        Ok(Some(report))
    }

    pub fn render(&mut self, now_ms: f64) -> ChartResult<()> {
        self.chart.render(now_ms)
    }

    #[must_use]
    pub fn records(&self) -> &[BeverageRecord] {
        &self.records
    }

    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.store.selection()
    }

    /// Observers only see changes; every mutation goes through `handle`.
    pub fn register_observer(&mut self, observer: Box<dyn SelectionObserver>) -> ChartResult<()> {
        self.store.register_observer(observer)
    }

    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        self.store.unregister_observer(observer_id)
    }

    #[must_use]
    pub fn chart(&self) -> &BeverageChart<R> {
        &self.chart
    }
}
