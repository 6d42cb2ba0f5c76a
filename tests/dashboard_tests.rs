use beverage_chart::api::{BeverageDashboard, ChartConfig};
use beverage_chart::core::CaloriesRange;
use beverage_chart::data::load_records_from_str;
use beverage_chart::interaction::{ControlEvent, Selection, SelectionObserver};
use beverage_chart::render::NullRenderer;
use std::cell::RefCell;
use std::rc::Rc;

const MENU: &str = include_str!("fixtures/menu_sample.csv");

fn dashboard() -> BeverageDashboard<NullRenderer> {
    let records = load_records_from_str(MENU).expect("load menu");
    BeverageDashboard::new(records, ChartConfig::default(), NullRenderer::default(), 0.0)
        .expect("dashboard init")
}

struct RangeLabelObserver {
    labels: Rc<RefCell<Vec<String>>>,
}

impl SelectionObserver for RangeLabelObserver {
    fn id(&self) -> &str {
        "range-label"
    }

    fn on_selection_changed(&mut self, selection: &Selection, _event: &ControlEvent) {
        self.labels.borrow_mut().push(selection.range_label());
    }
}

#[test]
fn initial_selection_draws_first_size_and_milk_type() {
    let dashboard = dashboard();
    let options = dashboard.options();
    assert_eq!(options.sizes, ["Short", "Tall"]);
    assert_eq!(options.milk_types, ["2% Milk", "Nonfat Milk", "Soy Milk", "n/a"]);

    let selection = dashboard.selection();
    assert_eq!(selection.size, "Short");
    assert_eq!(selection.milk_type, "2% Milk");
    assert_eq!(selection.calories_range, CaloriesRange::new(0.0, 510.0));
    assert_eq!(selection.range_label(), "0 - 510");
    assert_eq!(dashboard.chart().bars().len(), 4);
}

#[test]
fn control_events_refresh_the_chart() {
    let mut dashboard = dashboard();
    let report = dashboard
        .handle(ControlEvent::SizeSelected("Tall".to_owned()), 100.0)
        .expect("size change")
        .expect("selection changed");
    assert_eq!(
        report.filtered.first().map(String::as_str),
        Some("White Chocolate Mocha (Without Whipped Cream)")
    );

    let report = dashboard
        .handle(ControlEvent::CaloriesMaxChanged(200.0), 200.0)
        .expect("max change")
        .expect("selection changed");
    assert_eq!(report.filtered_count(), 4);
    assert_eq!(report.bars.exited, ["White Chocolate Mocha (Without Whipped Cream)"]);

    let report = dashboard
        .handle(ControlEvent::MilkTypeSelected("n/a".to_owned()), 300.0)
        .expect("milk change")
        .expect("selection changed");
    assert_eq!(report.filtered, ["Brewed Coffee"]);
    assert_eq!(dashboard.chart().update_count(), 4);
}

#[test]
fn unchanged_events_do_not_update() {
    let mut dashboard = dashboard();
    let outcome = dashboard
        .handle(ControlEvent::SizeSelected("Short".to_owned()), 10.0)
        .expect("same size");
    assert!(outcome.is_none());
    assert_eq!(dashboard.chart().update_count(), 1);
}

#[test]
fn min_handle_past_max_empties_chart() {
    let mut dashboard = dashboard();
    let report = dashboard
        .handle(ControlEvent::CaloriesMinChanged(520.0), 10.0)
        .expect("min change")
        .expect("selection changed");
    assert_eq!(report.filtered_count(), 0);
    assert_eq!(dashboard.selection().range_label(), "520 - 510");
    dashboard.render(600.0).expect("render");
    assert_eq!(dashboard.chart().renderer().last_rect_count, 0);
}

#[test]
fn observers_see_each_change() {
    let labels = Rc::new(RefCell::new(Vec::new()));
    let mut dashboard = dashboard();
    dashboard
        .register_observer(Box::new(RangeLabelObserver {
            labels: labels.clone(),
        }))
        .expect("register observer");

    dashboard
        .handle(ControlEvent::CaloriesMinChanged(50.0), 10.0)
        .expect("min change");
    dashboard
        .handle(
            ControlEvent::CaloriesRangeChanged(CaloriesRange::new(60.0, 250.0)),
            20.0,
        )
        .expect("range change");
    dashboard
        .handle(ControlEvent::CaloriesMaxChanged(250.0), 30.0)
        .expect("unchanged max");

    assert_eq!(*labels.borrow(), ["50 - 510", "60 - 250"]);
}

#[test]
fn selection_changes_always_reach_the_chart() {
    let labels = Rc::new(RefCell::new(Vec::new()));
    let mut dashboard = dashboard();
    dashboard
        .register_observer(Box::new(RangeLabelObserver {
            labels: labels.clone(),
        }))
        .expect("register observer");
    assert!(
        dashboard
            .register_observer(Box::new(RangeLabelObserver {
                labels: labels.clone(),
            }))
            .is_err()
    );

    let report = dashboard
        .handle(ControlEvent::SizeSelected("Tall".to_owned()), 10.0)
        .expect("size change")
        .expect("selection changed");
    assert_eq!(dashboard.selection().size, "Tall");
    let bar_keys: Vec<_> = dashboard.chart().bars().keys().collect();
    assert_eq!(bar_keys, report.filtered);
    assert!(dashboard.chart().bars().get("Tazo Tea (Chai) (Iced)").is_some());

    assert!(dashboard.unregister_observer("range-label"));
    assert!(!dashboard.unregister_observer("range-label"));
    dashboard
        .handle(ControlEvent::CaloriesMaxChanged(300.0), 20.0)
        .expect("max change");
    assert_eq!(labels.borrow().len(), 1);
}
