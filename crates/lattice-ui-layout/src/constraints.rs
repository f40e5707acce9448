//! Min/max size constraints passed top-down during layout.
//!
//! A constraint is the only input a component receives when computing its
//! size. `min <= max` holds componentwise; a violation is a programmer
//! error and is caught by `debug_assert!` in the constructors rather than
//! surfaced as a runtime error. Only max bounds may be infinite.

use crate::geometry::{EdgeInsets, Size};

/// Inclusive min/max bounds for both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    pub fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        let c = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        c.debug_check();
        c
    }

    /// Exact constraints: the child must resolve to `size`.
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Zero minimum, `size` maximum.
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// No bounds on either axis.
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    pub fn max_size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    /// Componentwise clamp of a candidate size into `[min, max]`.
    ///
    /// Negative inputs floor to zero before clamping; infinite max bounds
    /// are unbounded. This cannot fail and has no side effects.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            self.constrain_width(size.width),
            self.constrain_height(size.height),
        )
    }

    pub fn constrain_width(&self, width: f32) -> f32 {
        width.max(0.0).clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: f32) -> f32 {
        height.max(0.0).clamp(self.min_height, self.max_height)
    }

    /// Shrinks both min and max by the given insets, floored at zero.
    ///
    /// Infinite max bounds stay infinite. This is the constraint a
    /// padding-style component hands to its child.
    pub fn inset(&self, insets: EdgeInsets) -> Self {
        let horizontal = insets.horizontal_sum();
        let vertical = insets.vertical_sum();
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    fn debug_check(&self) {
        debug_assert!(
            self.min_width >= 0.0
                && self.min_height >= 0.0
                && self.min_width.is_finite()
                && self.min_height.is_finite(),
            "constraint min bounds must be finite and non-negative: {self:?}"
        );
        debug_assert!(
            self.min_width <= self.max_width && self.min_height <= self.max_height,
            "constraint min exceeds max: {self:?}"
        );
    }
}

impl Size {
    /// Largest size that keeps this size's aspect ratio, fits the
    /// constraint's max bounds and does not exceed the base (shrink-only).
    ///
    /// Both max axes infinite → the base size unchanged. A zero-area base
    /// degrades to [`Size::ZERO`].
    pub fn scaled_to_fit(self, constraints: &Constraints) -> Size {
        match self.aspect_ratio() {
            None => Size::ZERO,
            Some(_) => {
                let mut scale = 1.0f32;
                if constraints.has_bounded_width() {
                    scale = scale.min(constraints.max_width / self.width);
                }
                if constraints.has_bounded_height() {
                    scale = scale.min(constraints.max_height / self.height);
                }
                Size::new(self.width * scale, self.height * scale)
            }
        }
    }

    /// Scales this size up or down to the largest aspect-preserving size
    /// that fits every finite max axis of the constraint.
    ///
    /// No finite axis → the base size unchanged. A zero-area base degrades
    /// to [`Size::ZERO`].
    pub fn scaled_to_fill(self, constraints: &Constraints) -> Size {
        match self.aspect_ratio() {
            None => Size::ZERO,
            Some(_) => {
                let mut scale = f32::INFINITY;
                if constraints.has_bounded_width() {
                    scale = scale.min(constraints.max_width / self.width);
                }
                if constraints.has_bounded_height() {
                    scale = scale.min(constraints.max_height / self.height);
                }
                if scale.is_finite() {
                    Size::new(self.width * scale, self.height * scale)
                } else {
                    self
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain_clamps_componentwise() {
        let c = Constraints::new(10.0, 100.0, 20.0, 50.0);
        assert_eq!(c.constrain(Size::new(5.0, 200.0)), Size::new(10.0, 50.0));
        assert_eq!(c.constrain(Size::new(60.0, 30.0)), Size::new(60.0, 30.0));
    }

    #[test]
    fn test_constrain_floors_negative_to_zero() {
        let c = Constraints::loose(Size::new(100.0, 100.0));
        assert_eq!(c.constrain(Size::new(-5.0, -1.0)), Size::ZERO);
    }

    #[test]
    fn test_constrain_with_infinite_max_is_unbounded() {
        let c = Constraints::unbounded();
        let s = Size::new(1.0e9, 2.0e9);
        assert_eq!(c.constrain(s), s);
    }

    #[test]
    fn test_inset_floors_at_zero() {
        let c = Constraints::new(10.0, 30.0, 10.0, 30.0);
        let inner = c.inset(EdgeInsets::uniform(20.0));
        assert_eq!(inner.min_width, 0.0);
        assert_eq!(inner.max_width, 0.0);
    }

    #[test]
    fn test_inset_keeps_infinite_max() {
        let c = Constraints::unbounded();
        let inner = c.inset(EdgeInsets::uniform(16.0));
        assert!(inner.max_width.is_infinite());
        assert!(inner.max_height.is_infinite());
    }

    #[test]
    fn test_scaled_to_fit_never_grows() {
        let base = Size::new(100.0, 100.0);
        let c = Constraints::new(0.0, 200.0, 0.0, f32::INFINITY);
        assert_eq!(base.scaled_to_fit(&c), Size::new(100.0, 100.0));
    }

    #[test]
    fn test_scaled_to_fit_shrinks_to_tightest_axis() {
        let base = Size::new(100.0, 100.0);
        let width_only = Constraints::new(0.0, 50.0, 0.0, f32::INFINITY);
        assert_eq!(base.scaled_to_fit(&width_only), Size::new(50.0, 50.0));

        let both = Constraints::new(0.0, 50.0, 0.0, 40.0);
        assert_eq!(base.scaled_to_fit(&both), Size::new(40.0, 40.0));
    }

    #[test]
    fn test_scaled_to_fill_grows_to_finite_axis() {
        let base = Size::new(100.0, 100.0);
        let c = Constraints::new(0.0, 200.0, 0.0, f32::INFINITY);
        assert_eq!(base.scaled_to_fill(&c), Size::new(200.0, 200.0));

        let smaller = Constraints::new(0.0, 50.0, 0.0, f32::INFINITY);
        assert_eq!(base.scaled_to_fill(&smaller), Size::new(50.0, 50.0));
    }

    #[test]
    fn test_scaled_to_fill_unbounded_returns_base() {
        let base = Size::new(100.0, 50.0);
        assert_eq!(base.scaled_to_fill(&Constraints::unbounded()), base);
    }

    #[test]
    fn test_zero_area_base_degrades_to_zero() {
        let base = Size::new(0.0, 100.0);
        let c = Constraints::loose(Size::new(50.0, 50.0));
        assert_eq!(base.scaled_to_fit(&c), Size::ZERO);
        assert_eq!(base.scaled_to_fill(&c), Size::ZERO);
    }
}
