use approx::assert_relative_eq;
use beverage_chart::api::{BeverageChart, ChartConfig};
use beverage_chart::core::{BeverageRecord, Easing};
use beverage_chart::error::ChartError;
use beverage_chart::render::{FrameGroup, NullRenderer, RenderFrame};

fn records() -> Vec<BeverageRecord> {
    vec![
        BeverageRecord::new("A", "Short", "2% Milk", 100.0),
        BeverageRecord::new("B", "Short", "2% Milk", 200.0),
        BeverageRecord::new("C", "Tall", "2% Milk", 300.0),
    ]
}

fn chart() -> BeverageChart<NullRenderer> {
    BeverageChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init")
}

fn width_for(calories: f64) -> f64 {
    calories / 550.0 * ChartConfig::default().plot_area().width
}

fn bar_group(frame: &RenderFrame) -> &FrameGroup {
    frame.group("bar-group").expect("bar group")
}

#[test]
fn higher_calories_are_drawn_above() {
    let data = records();
    let mut chart = chart();
    let report = chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("update");
    assert_eq!(report.filtered, ["B", "A"]);
    assert_eq!(report.bars.entered, ["B", "A"]);

    let frame = chart.frame_at(0.0);
    let bars = bar_group(&frame);
    assert_eq!(bars.translate_y, 24.0);
    assert_eq!(bars.rects.len(), 2);
    assert_eq!(bars.rects[0].key, "B");
    assert!(bars.rects[0].y < bars.rects[1].y);
    assert_relative_eq!(bars.rects[0].x, 228.0);
    assert_relative_eq!(bars.rects[0].width, width_for(200.0), epsilon = 1e-9);
    assert_relative_eq!(bars.rects[1].width, width_for(100.0), epsilon = 1e-9);

    let keys: Vec<_> = bars.texts.iter().filter_map(|text| text.key.as_deref()).collect();
    assert_eq!(keys, ["B", "A"]);
    assert_relative_eq!(bars.texts[0].x, 220.0);
}

#[test]
fn bands_use_ten_percent_padding() {
    let data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("update");
    let scales = chart.scales().expect("scales");
    let height = ChartConfig::default().plot_area().height;
    let step = height / 2.1;
    assert_relative_eq!(scales.beverages.step(), step, epsilon = 1e-9);
    assert_relative_eq!(scales.beverages.bandwidth(), step * 0.9, epsilon = 1e-9);
    assert_relative_eq!(
        scales.beverages.position("B").expect("B band"),
        step * 0.1,
        epsilon = 1e-9
    );

    let frame = chart.frame_at(0.0);
    let label = &bar_group(&frame).texts[0];
    assert_relative_eq!(label.y, step * 0.1 + step * 0.45, epsilon = 1e-9);
}

#[test]
fn unknown_milk_type_clears_bars_but_keeps_axes() {
    let data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("first update");
    let report = chart
        .update(&data, "Short", "Oat Milk", &[0.0, 510.0], 10.0)
        .expect("second update");
    assert_eq!(report.filtered_count(), 0);
    assert_eq!(report.bars.exited, ["B", "A"]);
    assert!(chart.bars().is_empty());
    assert!(chart.labels().is_empty());

    let frame = chart.frame_at(10.0);
    assert!(bar_group(&frame).is_empty());
    for class in ["x-axis-bottom", "x-axis-top", "y-axis"] {
        assert!(frame.group(class).is_some(), "missing {class}");
    }
    let bottom = frame.group("x-axis-bottom").expect("bottom axis");
    let labels: Vec<_> = bottom.texts.iter().map(|text| text.text()).collect();
    assert_eq!(labels.first().map(String::as_str), Some("0"));
    assert_eq!(labels.last().map(String::as_str), Some("550"));
    assert_eq!(labels.len(), 12);
}

#[test]
fn range_above_every_record_is_empty() {
    let data = records();
    let mut chart = chart();
    let report = chart
        .update(&data, "Tall", "2% Milk", &[600.0, 700.0], 0.0)
        .expect("update");
    assert_eq!(report.filtered_count(), 0);
    assert_eq!(chart.frame_at(0.0).rect_count(), 0);
}

#[test]
fn malformed_range_is_rejected_without_touching_state() {
    let data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("update");

    let err = chart
        .update(&data, "Short", "2% Milk", &[100.0], 5.0)
        .expect_err("one value");
    assert!(matches!(err, ChartError::InvalidCaloriesRange { len: 1 }));
    let err = chart
        .update(&data, "Short", "2% Milk", &[], 5.0)
        .expect_err("no values");
    assert!(matches!(err, ChartError::InvalidCaloriesRange { len: 0 }));

    assert_eq!(chart.update_count(), 1);
    assert_eq!(chart.bars().len(), 2);
}

#[test]
fn repeated_update_is_idempotent() {
    let data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("first update");
    let before = chart.frame_at(1_000.0);
    let report = chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 1_000.0)
        .expect("second update");
    assert!(report.bars.entered.is_empty());
    assert!(report.bars.exited.is_empty());
    assert_eq!(report.bars.updated, ["B", "A"]);

    for now in [1_000.0, 1_250.0, 1_500.0] {
        assert_eq!(chart.frame_at(now), before);
    }
}

#[test]
fn changed_calories_animate_toward_the_new_width() {
    let mut data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("first update");

    data[1].calories = 300.0;
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 1_000.0)
        .expect("second update");
    assert!(chart.is_animating(1_250.0));

    let bar = chart.bars().get("B").expect("bar B");
    assert_relative_eq!(bar.geometry_at(1_000.0).width, width_for(200.0), epsilon = 1e-9);
    assert_relative_eq!(
        bar.geometry_at(1_250.0).width,
        (width_for(200.0) + width_for(300.0)) / 2.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(bar.geometry_at(1_500.0).width, width_for(300.0), epsilon = 1e-9);
    assert!(!chart.is_animating(1_500.0));
}

#[test]
fn retargeting_mid_transition_lets_the_last_update_win() {
    let mut data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("first update");

    data[1].calories = 300.0;
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 1_000.0)
        .expect("second update");
    let midway = chart
        .bars()
        .get("B")
        .expect("bar B")
        .geometry_at(1_250.0)
        .width;

    data[1].calories = 50.0;
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 1_250.0)
        .expect("third update");
    let bar = chart.bars().get("B").expect("bar B");
    assert_relative_eq!(bar.geometry_at(1_250.0).width, midway, epsilon = 1e-9);
    assert_relative_eq!(bar.geometry_at(1_750.0).width, width_for(50.0), epsilon = 1e-9);

    // B now has fewer calories than A, so it moved below.
    let frame = chart.frame_at(1_750.0);
    assert_eq!(bar_group(&frame).rects[0].key, "A");
}

#[test]
fn exited_bar_leaves_remaining_label_moving() {
    let data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("first update");
    let before = chart.labels().get("A").expect("label A").y_at(0.0);

    let report = chart
        .update(&data, "Short", "2% Milk", &[0.0, 150.0], 100.0)
        .expect("second update");
    assert_eq!(report.bars.exited, ["B"]);
    assert_eq!(report.labels.updated, ["A"]);

    let label = chart.labels().get("A").expect("label A");
    assert_relative_eq!(label.y_at(100.0), before, epsilon = 1e-9);
    let height = ChartConfig::default().plot_area().height;
    assert_relative_eq!(label.y_at(600.0), height / 2.0, epsilon = 1e-9);

    chart.settle(600.0);
    assert!(!chart.is_animating(600.0));
}

#[test]
fn render_validates_and_counts_primitives() {
    let data = records();
    let mut chart = chart();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("update");
    chart.render(250.0).expect("render");

    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 2);
    assert_eq!(renderer.last_text_count, 2 + 12 + 12);
}

#[test]
fn invalid_config_is_rejected() {
    let config = ChartConfig::default().with_transition_duration_ms(-1.0);
    assert!(BeverageChart::new(NullRenderer::default(), config).is_err());
}

#[test]
fn infinite_calories_render_as_a_full_width_bar() {
    let data = vec![
        BeverageRecord::new("A", "Short", "2% Milk", f64::INFINITY),
        BeverageRecord::new("B", "Short", "2% Milk", f64::NAN),
        BeverageRecord::new("C", "Short", "2% Milk", 100.0),
    ];
    let mut chart = chart();
    let report = chart
        .update(&data, "Short", "2% Milk", &[0.0, f64::INFINITY], 0.0)
        .expect("update");
    assert_eq!(report.filtered, ["A", "C"]);

    let frame = chart.frame_at(0.0);
    let bars = bar_group(&frame);
    assert_relative_eq!(bars.rects[0].width, ChartConfig::default().plot_area().width);
    chart.render(0.0).expect("render");
    assert_eq!(chart.renderer().last_rect_count, 2);
}

#[test]
fn configured_domain_and_easing_shape_the_bars() {
    let config = ChartConfig::default()
        .with_calorie_domain(0.0, 1_000.0)
        .with_easing(Easing::Linear);
    let mut chart = BeverageChart::new(NullRenderer::default(), config).expect("chart init");
    let mut data = records();
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("first update");

    let plot_width = ChartConfig::default().plot_area().width;
    let bar = chart.bars().get("B").expect("bar B");
    assert_relative_eq!(bar.geometry_at(0.0).width, plot_width * 0.2, epsilon = 1e-9);

    data[1].calories = 600.0;
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 1_000.0], 1_000.0)
        .expect("second update");
    let bar = chart.bars().get("B").expect("bar B");
    assert_relative_eq!(bar.geometry_at(1_100.0).width, plot_width * 0.28, epsilon = 1e-9);
    assert_relative_eq!(bar.geometry_at(1_500.0).width, plot_width * 0.6, epsilon = 1e-9);

    let bottom = chart.frame_at(1_500.0);
    let labels: Vec<_> = bottom
        .group("x-axis-bottom")
        .expect("bottom axis")
        .texts
        .iter()
        .map(|text| text.text())
        .collect();
    assert_eq!(labels.last().map(String::as_str), Some("1000"));
}
