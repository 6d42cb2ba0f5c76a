use crate::error::{ChartError, ChartResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a numeric domain onto a pixel range.
///
/// Values outside the domain extrapolate; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Human-friendly tick values covering the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten, so `0..550` with ten
    /// requested ticks yields `0, 50, ..., 550`.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let reverse = self.domain_end < self.domain_start;
        let (start, stop) = if reverse {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let mut ticks = ticks_between(start, stop, count);
        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Tick step chosen by [`LinearScale::ticks`] for the same `count`.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (start, stop) = if self.domain_end < self.domain_start {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };
        let increment = tick_increment(start, stop, count);
        if increment < 0.0 { -1.0 / increment } else { increment }
    }
}

/// Positive results are a step, negative results are the inverse of a step
/// below one; this keeps `i / inverse` exact for fractional steps.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || stop <= start {
        return f64::NAN;
    }
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

fn ticks_between(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return if count > 0 { vec![start] } else { Vec::new() };
    }

    let increment = tick_increment(start, stop, count);
    if !increment.is_finite() || increment == 0.0 {
        return Vec::new();
    }

    if increment > 0.0 {
        let first = (start / increment).ceil() as i64;
        let last = (stop / increment).floor() as i64;
        (first..=last).map(|i| i as f64 * increment).collect()
    } else {
        let inverse = -increment;
        let first = (start * inverse).ceil() as i64;
        let last = (stop * inverse).floor() as i64;
        (first..=last).map(|i| i as f64 / inverse).collect()
    }
}

/// Formats a tick value with just enough decimals for the given step.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10() - 1e-9).ceil() as usize
    } else {
        0
    };
    let formatted = format!("{value:.decimals$}");
    // Avoid "-0" for values that round to zero.
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        formatted.trim_start_matches('-').to_owned()
    } else {
        formatted
    }
}
