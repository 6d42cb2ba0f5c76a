use beverage_chart::api::{BeverageChart, ChartConfig};
use beverage_chart::core::BeverageRecord;
use beverage_chart::render::SvgRenderer;

fn rendered_document(now_ms: f64) -> String {
    let data = vec![
        BeverageRecord::new("Caffè Latte", "Short", "2% Milk", 100.0),
        BeverageRecord::new("Caffè Mocha (Without Whipped Cream)", "Short", "2% Milk", 130.0),
    ];
    let mut chart =
        BeverageChart::new(SvgRenderer::new(), ChartConfig::default()).expect("chart init");
    chart
        .update(&data, "Short", "2% Milk", &[0.0, 510.0], 0.0)
        .expect("update");
    chart.render(now_ms).expect("render");
    chart.into_renderer().into_document()
}

#[test]
fn document_nests_axes_and_bars() {
    let svg = rendered_document(500.0);
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1000" height="760""#));
    assert!(svg.contains(r#"<g class="axis-group">"#));
    assert!(svg.contains(r#"<g class="x-axis-bottom" transform="translate(228, 736)">"#));
    assert!(svg.contains(r#"<g class="x-axis-top" transform="translate(228, 24)">"#));
    assert!(svg.contains(r#"<g class="y-axis" transform="translate(228, 24)">"#));
    assert!(svg.contains(r#"<g class="bar-group" transform="translate(0, 24)">"#));
    assert!(svg.trim_end().ends_with("</svg>"));

    let axis_group = svg.find(r#"class="axis-group""#).expect("axis group");
    let bar_group = svg.find(r#"class="bar-group""#).expect("bar group");
    assert!(axis_group < bar_group);
}

#[test]
fn bars_and_labels_carry_their_keys() {
    let svg = rendered_document(500.0);
    let mocha = svg
        .find(r#"data-key="Caffè Mocha (Without Whipped Cream)""#)
        .expect("mocha bar");
    let latte = svg.find(r#"data-key="Caffè Latte""#).expect("latte bar");
    assert!(mocha < latte);

    assert!(svg.contains(r#"<tspan x="224" dy="-0.25em">Caffè Mocha</tspan>"#));
    assert!(svg.contains(r#"class="annotation""#));
    assert!(svg.contains(">Without Whipped Cream</tspan>"));
    assert!(svg.contains(r#"<tspan x="220">Caffè Latte</tspan>"#));
    assert!(svg.contains(r#"text-anchor="end""#));
}

#[test]
fn axis_ticks_are_labeled_every_fifty_calories() {
    let svg = rendered_document(0.0);
    for label in ["0", "50", "250", "550"] {
        assert!(svg.contains(&format!(">{label}</tspan>")), "missing tick {label}");
    }
    assert!(svg.contains(r#"stroke-dasharray="2,2""#));
}
