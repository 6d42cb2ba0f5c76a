use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use smallvec::{SmallVec, smallvec};

// Greedy first group: with several parenthesized groups only the trailing one
// becomes the annotation.
static ANNOTATED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\w\W]+)\s+\(([\w\W]+)\)$").unwrap_or_else(|err| {
        unreachable!("annotated beverage name pattern must compile: {err}")
    })
});

/// Beverage name split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeverageLabel {
    SingleLine(String),
    TwoLine { name: String, annotation: String },
}

/// Role of one displayed line of a beverage label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLineRole {
    Name,
    Annotation,
}

/// One displayed line with its vertical offset relative to the previous line, in em.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLine {
    pub text: String,
    pub role: LabelLineRole,
    pub dx_px: f64,
    pub dy_em: f64,
}

/// Splits `"Name (Annotation)"` into two lines; anything else stays on one line.
#[must_use]
pub fn decorate_beverage_name(beverage_name: &str) -> BeverageLabel {
    match ANNOTATED_NAME.captures(beverage_name) {
        Some(captures) => BeverageLabel::TwoLine {
            name: captures[1].to_owned(),
            annotation: captures[2].to_owned(),
        },
        None => BeverageLabel::SingleLine(beverage_name.to_owned()),
    }
}

impl BeverageLabel {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SingleLine(name) | Self::TwoLine { name, .. } => name,
        }
    }

    #[must_use]
    pub fn annotation(&self) -> Option<&str> {
        match self {
            Self::SingleLine(_) => None,
            Self::TwoLine { annotation, .. } => Some(annotation),
        }
    }

    /// Lines in draw order. The name of a two-line label is nudged up a
    /// quarter em and 4px right; the annotation sits one em below it.
    #[must_use]
    pub fn lines(&self) -> SmallVec<[LabelLine; 2]> {
        match self {
            Self::SingleLine(name) => smallvec![LabelLine {
                text: name.clone(),
                role: LabelLineRole::Name,
                dx_px: 0.0,
                dy_em: 0.0,
            }],
            Self::TwoLine { name, annotation } => smallvec![
                LabelLine {
                    text: name.clone(),
                    role: LabelLineRole::Name,
                    dx_px: 4.0,
                    dy_em: -0.25,
                },
                LabelLine {
                    text: annotation.clone(),
                    role: LabelLineRole::Annotation,
                    dx_px: 0.0,
                    dy_em: 1.0,
                },
            ],
        }
    }

    /// SVG `tspan` markup for the label, with text content XML-escaped.
    #[must_use]
    pub fn to_svg_tspans(&self) -> String {
        let mut out = String::new();
        match self {
            Self::SingleLine(name) => {
                let _ = write!(out, r#"<tspan x="0">{}</tspan>"#, escape_xml(name));
            }
            Self::TwoLine { name, annotation } => {
                let _ = write!(
                    out,
                    r#"<tspan x="4px" dy="-0.25em">{}</tspan><tspan x="0" dy="1.0em" class="annotation">{}</tspan>"#,
                    escape_xml(name),
                    escape_xml(annotation)
                );
            }
        }
        out
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trailing_annotation() {
        let label = decorate_beverage_name("Caffè Latte (Grande)");
        assert_eq!(
            label,
            BeverageLabel::TwoLine {
                name: "Caffè Latte".to_owned(),
                annotation: "Grande".to_owned(),
            }
        );
    }

    #[test]
    fn plain_name_stays_single_line() {
        let label = decorate_beverage_name("Brewed Coffee");
        assert_eq!(label, BeverageLabel::SingleLine("Brewed Coffee".to_owned()));
        assert_eq!(label.annotation(), None);
        assert_eq!(label.lines().len(), 1);
    }

    #[test]
    fn only_last_group_is_annotation() {
        let label = decorate_beverage_name("Tazo Tea (Chai) (Iced)");
        assert_eq!(label.name(), "Tazo Tea (Chai)");
        assert_eq!(label.annotation(), Some("Iced"));
    }

    #[test]
    fn needs_whitespace_before_group() {
        let label = decorate_beverage_name("Mocha(Short)");
        assert_eq!(label, BeverageLabel::SingleLine("Mocha(Short)".to_owned()));
    }

    #[test]
    fn empty_group_falls_back_to_earlier_group() {
        let label = decorate_beverage_name("Mocha (Short) ()");
        assert_eq!(label.name(), "Mocha");
        assert_eq!(label.annotation(), Some("Short) ("));
    }

    #[test]
    fn tspans_are_escaped() {
        let label = decorate_beverage_name("Tea & Milk (<Hot>)");
        assert_eq!(
            label.to_svg_tspans(),
            r#"<tspan x="4px" dy="-0.25em">Tea &amp; Milk</tspan><tspan x="0" dy="1.0em" class="annotation">&lt;Hot&gt;</tspan>"#
        );
    }

    #[test]
    fn decoration_is_stable() {
        let first = decorate_beverage_name("Caramel Macchiato (Iced)");
        let second = decorate_beverage_name("Caramel Macchiato (Iced)");
        assert_eq!(first, second);
    }
}
