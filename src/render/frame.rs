use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Top-level layer a group belongs to. Axis groups draw beneath bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLayer {
    Axes,
    Bars,
}

/// Primitives sharing one translation, expressed in group-local pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGroup {
    pub class: &'static str,
    pub layer: FrameLayer,
    pub translate_x: f64,
    pub translate_y: f64,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl FrameGroup {
    #[must_use]
    pub fn new(class: &'static str, layer: FrameLayer, translate_x: f64, translate_y: f64) -> Self {
        Self {
            class,
            layer,
            translate_x,
            translate_y,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.translate_x.is_finite() || !self.translate_y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "group `{}` translation must be finite",
                self.class
            )));
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Option<Color>,
    pub groups: Vec<FrameGroup>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: None,
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: FrameGroup) -> Self {
        self.groups.push(group);
        self
    }

    #[must_use]
    pub fn group(&self, class: &str) -> Option<&FrameGroup> {
        self.groups.iter().find(|group| group.class == class)
    }

    pub fn groups_in(&self, layer: FrameLayer) -> impl Iterator<Item = &FrameGroup> {
        self.groups.iter().filter(move |group| group.layer == layer)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(background) = self.background {
            background.validate()?;
        }
        for group in &self.groups {
            group.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.groups.iter().map(|group| group.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.groups.iter().map(|group| group.rects.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.groups.iter().map(|group| group.texts.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(FrameGroup::is_empty)
    }
}
