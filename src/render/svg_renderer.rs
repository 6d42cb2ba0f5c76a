use std::fmt::Write as _;

use crate::core::label::escape_xml;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    FrameGroup, FrameLayer, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes frames as standalone SVG documents.
///
/// Axis groups are nested under `<g class="axis-group">`; bar groups keep
/// their own class and translation. The last document is kept until the
/// next render.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        write_document(&mut out, frame, &mut stats)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_document(
    out: &mut String,
    frame: &RenderFrame,
    stats: &mut SvgRenderStats,
) -> std::fmt::Result {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    if let Some(background) = frame.background {
        writeln!(
            out,
            r#"  <rect class="background" width="{width}" height="{height}" fill="{}"/>"#,
            background.to_hex()
        )?;
    }

    writeln!(out, r#"  <g class="axis-group">"#)?;
    for group in frame.groups_in(FrameLayer::Axes) {
        write_group(out, group, "    ", stats)?;
    }
    writeln!(out, "  </g>")?;

    for group in frame.groups_in(FrameLayer::Bars) {
        write_group(out, group, "  ", stats)?;
    }
    writeln!(out, "</svg>")
}

fn write_group(
    out: &mut String,
    group: &FrameGroup,
    indent: &str,
    stats: &mut SvgRenderStats,
) -> std::fmt::Result {
    writeln!(
        out,
        r#"{indent}<g class="{}" transform="translate({}, {})">"#,
        group.class,
        num(group.translate_x),
        num(group.translate_y)
    )?;
    let (rect_class, text_class) = match group.layer {
        FrameLayer::Bars => ("bar", "label"),
        FrameLayer::Axes => ("tick", "tick-label"),
    };
    for line in &group.lines {
        write_line(out, line, indent)?;
        stats.lines_drawn += 1;
    }
    for rect in &group.rects {
        write_rect(out, rect, rect_class, indent)?;
        stats.rects_drawn += 1;
    }
    for text in &group.texts {
        write_text(out, text, text_class, indent)?;
        stats.texts_drawn += 1;
    }
    writeln!(out, "{indent}</g>")
}

fn write_line(out: &mut String, line: &LinePrimitive, indent: &str) -> std::fmt::Result {
    write!(
        out,
        r#"{indent}  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_hex(),
        num(line.stroke_width)
    )?;
    if line.color.alpha < 1.0 {
        write!(out, r#" stroke-opacity="{}""#, num(line.color.alpha))?;
    }
    if let LineStrokeStyle::Dashed { dash_px, gap_px } = line.style {
        write!(out, r#" stroke-dasharray="{},{}""#, num(dash_px), num(gap_px))?;
    }
    writeln!(out, "/>")
}

fn write_rect(
    out: &mut String,
    rect: &RectPrimitive,
    class: &str,
    indent: &str,
) -> std::fmt::Result {
    writeln!(
        out,
        r#"{indent}  <rect class="{class}" data-key="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        escape_xml(&rect.key),
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        rect.fill_color.to_hex()
    )
}

fn write_text(
    out: &mut String,
    text: &TextPrimitive,
    class: &str,
    indent: &str,
) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    write!(
        out,
        r#"{indent}  <text class="{class}" x="{}" y="{}" dy="{}em" text-anchor="{anchor}" font-size="{}" fill="{}">"#,
        num(text.x),
        num(text.y),
        num(text.dy_em),
        num(text.font_size_px),
        text.color.to_hex()
    )?;
    for span in &text.spans {
        write!(out, r#"<tspan x="{}""#, num(text.x + span.x))?;
        if span.dy_em != 0.0 {
            write!(out, r#" dy="{}em""#, num(span.dy_em))?;
        }
        if let Some(class) = span.class {
            write!(out, r#" class="{class}""#)?;
        }
        if let Some(fill) = span.fill {
            write!(out, r#" fill="{}""#, fill.to_hex())?;
        }
        write!(out, ">{}</tspan>", escape_xml(&span.text))?;
    }
    writeln!(out, "</text>")
}

fn num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{value:.3}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}
