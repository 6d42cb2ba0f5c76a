use beverage_chart::core::{BeverageLabel, LabelLineRole, decorate_beverage_name};

#[test]
fn menu_names_with_a_parenthesized_note_split_in_two() {
    let label = decorate_beverage_name("White Chocolate Mocha (Without Whipped Cream)");
    assert_eq!(label.name(), "White Chocolate Mocha");
    assert_eq!(label.annotation(), Some("Without Whipped Cream"));

    let lines = label.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].role, LabelLineRole::Name);
    assert_eq!(lines[0].dx_px, 4.0);
    assert_eq!(lines[0].dy_em, -0.25);
    assert_eq!(lines[1].role, LabelLineRole::Annotation);
    assert_eq!(lines[1].dy_em, 1.0);
}

#[test]
fn plain_names_stay_on_one_line() {
    let label = decorate_beverage_name("Brewed Coffee");
    assert_eq!(label, BeverageLabel::SingleLine("Brewed Coffee".to_owned()));
    assert_eq!(label.lines().len(), 1);
    assert_eq!(label.to_svg_tspans(), r#"<tspan x="0">Brewed Coffee</tspan>"#);
}

#[test]
fn only_the_last_group_becomes_the_annotation() {
    let label = decorate_beverage_name("Tazo Tea (Chai) (Iced)");
    assert_eq!(label.name(), "Tazo Tea (Chai)");
    assert_eq!(label.annotation(), Some("Iced"));
}

#[test]
fn whitespace_before_the_group_is_required() {
    assert_eq!(
        decorate_beverage_name("Mocha(Short)"),
        BeverageLabel::SingleLine("Mocha(Short)".to_owned())
    );
    assert!(decorate_beverage_name("(Iced)").annotation().is_none());
}

#[test]
fn tspans_escape_markup() {
    let label = decorate_beverage_name("Tea & Honey (<Hot>)");
    assert_eq!(
        label.to_svg_tspans(),
        r#"<tspan x="4px" dy="-0.25em">Tea &amp; Honey</tspan><tspan x="0" dy="1.0em" class="annotation">&lt;Hot&gt;</tspan>"#
    );
}
