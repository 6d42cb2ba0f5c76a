use crate::core::{Animated, BeverageLabel, BeverageRecord, Easing, Interpolate, decorate_beverage_name};

/// Animated part of a bar. `x` is fixed at the plot's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub y: f64,
    pub height: f64,
    pub width: f64,
}

impl Interpolate for BarGeometry {
    fn interpolate(self, to: Self, t: f64) -> Self {
        Self {
            y: self.y.interpolate(to.y, t),
            height: self.height.interpolate(to.height, t),
            width: self.width.interpolate(to.width, t),
        }
    }
}

/// One bar bound to a beverage; the owning collection holds its key.
#[derive(Debug, Clone, PartialEq)]
pub struct BarElement {
    pub geometry: Animated<BarGeometry>,
}

impl BarElement {
    pub(super) fn entered(target: BarGeometry) -> Self {
        Self {
            geometry: Animated::settled(target),
        }
    }

    pub(super) fn retarget(
        &mut self,
        target: BarGeometry,
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) {
        self.geometry.retarget(target, now_ms, duration_ms, easing);
    }

    #[must_use]
    pub fn geometry_at(&self, now_ms: f64) -> BarGeometry {
        self.geometry.value_at(now_ms)
    }
}

/// One beverage name label; only its vertical center animates.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    pub label: BeverageLabel,
    pub y: Animated<f64>,
}

impl LabelElement {
    pub(super) fn entered(record: &BeverageRecord, y: f64) -> Self {
        Self {
            label: decorate_beverage_name(&record.beverage),
            y: Animated::settled(y),
        }
    }

    #[must_use]
    pub fn y_at(&self, now_ms: f64) -> f64 {
        self.y.value_at(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn geometry_blends_every_field() {
        let from = BarGeometry {
            y: 0.0,
            height: 10.0,
            width: 100.0,
        };
        let to = BarGeometry {
            y: 50.0,
            height: 20.0,
            width: 0.0,
        };
        let mid = from.interpolate(to, 0.5);
        assert_relative_eq!(mid.y, 25.0);
        assert_relative_eq!(mid.height, 15.0);
        assert_relative_eq!(mid.width, 50.0);
    }

    #[test]
    fn entered_label_is_decorated() {
        let record = BeverageRecord::new("Caffè Mocha (Without Whipped Cream)", "Tall", "Soy Milk", 200.0);
        let label = LabelElement::entered(&record, 12.0);
        assert_eq!(label.label.annotation(), Some("Without Whipped Cream"));
        assert_relative_eq!(label.y_at(0.0), 12.0);
    }
}
