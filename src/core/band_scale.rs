use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Categorical scale splitting a pixel range into evenly spaced bands.
///
/// `padding` is applied as both the inner gap between bands and the outer
/// gap before the first and after the last band, with the bands centered in
/// the range.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    step: f64,
    bandwidth: f64,
    offset: f64,
}

impl BandScale {
    /// Builds the scale; duplicate keys keep their first position.
    pub fn new<I, S>(domain: I, range_start: f64, range_end: f64, padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band scale padding must be finite and in [0, 1]".to_owned(),
            ));
        }

        let domain: IndexSet<String> = domain.into_iter().map(Into::into).collect();
        let mut scale = Self {
            domain,
            range_start,
            range_end,
            padding,
            step: 0.0,
            bandwidth: 0.0,
            offset: range_start,
        };
        scale.rescale();
        Ok(scale)
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let reverse = self.range_end < self.range_start;
        let (start, stop) = if reverse {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };
        let inner = self.padding;
        let outer = self.padding;

        let step = (stop - start) / (n - inner + outer * 2.0).max(1.0);
        let offset = start + (stop - start - step * (n - inner)) * 0.5;
        self.step = step;
        self.bandwidth = step * (1.0 - inner);
        self.offset = if reverse {
            // Bands are laid out from the far end so index 0 stays at range_start.
            stop - (offset - start) - self.bandwidth
        } else {
            offset
        };
    }

    #[must_use]
    pub fn domain(&self) -> impl ExactSizeIterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Start coordinate of the band for `key`, or `None` when it is not in the domain.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.get_index_of(key)? as f64;
        if self.range_end < self.range_start {
            Some(self.offset - index * self.step)
        } else {
            Some(self.offset + index * self.step)
        }
    }

    #[must_use]
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|start| start + self.bandwidth / 2.0)
    }
}
