use serde::{Deserialize, Serialize};

/// Values a transition can blend between.
pub trait Interpolate: Copy {
    #[must_use]
    fn interpolate(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// Timing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Timed blend from one value to another on a host-supplied millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T: Interpolate> {
    pub from: T,
    pub to: T,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl<T: Interpolate> Transition<T> {
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> T {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.interpolate(self.to, self.easing.apply(progress))
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// A value that is either settled or moving toward a target.
///
/// Re-targeting mid-flight starts the new transition from wherever the old
/// one currently is, so the last target set always wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animated<T: Interpolate> {
    Settled(T),
    Moving(Transition<T>),
}

impl<T: Interpolate> Animated<T> {
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self::Settled(value)
    }

    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> T {
        match self {
            Self::Settled(value) => *value,
            Self::Moving(transition) => transition.sample(now_ms),
        }
    }

    #[must_use]
    pub fn target(&self) -> T {
        match self {
            Self::Settled(value) => *value,
            Self::Moving(transition) => transition.to,
        }
    }

    #[must_use]
    pub fn is_moving(&self, now_ms: f64) -> bool {
        matches!(self, Self::Moving(transition) if !transition.is_finished(now_ms))
    }

    pub fn retarget(&mut self, to: T, now_ms: f64, duration_ms: f64, easing: Easing) {
        let from = self.value_at(now_ms);
        *self = Self::Moving(Transition {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
            easing,
        });
    }

    /// Collapses a finished transition into its settled value.
    pub fn settle(&mut self, now_ms: f64) {
        if let Self::Moving(transition) = self {
            if transition.is_finished(now_ms) {
                *self = Self::Settled(transition.to);
            }
        }
    }
}
