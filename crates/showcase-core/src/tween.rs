//! Fire-and-forget transitions started on section changes.
//!
//! Two kinds exist: an extra spin added to a section object's rotation, and a
//! heading style that animates from an exaggerated pose back to neutral.

use std::fmt::Write as _;

/// Easing curves (names follow the usual `powerN` convention).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-in-out.
    Power2InOut,
}

impl Ease {
    /// Input is clamped to `[0, 1]`; output is 0 at 0 and 1 at 1.
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Power1Out => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Relative rotation tween: adds `total` radians to one object over
/// `duration` seconds. Each `advance` returns only the newly covered part so
/// it composes with the constant spin applied by the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct SpinTween {
    pub object: usize,
    total: f32,
    duration: f32,
    ease: Ease,
    elapsed: f32,
    applied: f32,
}

impl SpinTween {
    pub fn new(object: usize, total: f32, duration: f32) -> Self {
        Self {
            object,
            total,
            duration: duration.max(f32::EPSILON),
            ease: Ease::Power2InOut,
            elapsed: 0.0,
            applied: 0.0,
        }
    }

    pub fn advance(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() || delta <= 0.0 || self.is_finished() {
            return 0.0;
        }
        self.elapsed = (self.elapsed + delta).min(self.duration);
        let target = self.total * self.ease.evaluate(self.elapsed / self.duration);
        let increment = target - self.applied;
        self.applied = target;
        increment
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Visual pose of a heading element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadingStyle {
    pub translate_y_px: f32,
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
    /// Unclamped; may exceed 1 at the start of a transition.
    pub opacity: f32,
}

impl HeadingStyle {
    pub const NEUTRAL: HeadingStyle = HeadingStyle {
        translate_y_px: 0.0,
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Starting pose for the heading of `section`.
    pub fn entrance_for_section(section: usize) -> Self {
        let mut style = HeadingStyle {
            scale: crate::constants::HEADING_FROM_SCALE,
            opacity: crate::constants::HEADING_FROM_OPACITY,
            ..Self::NEUTRAL
        };
        match section {
            0 => style.translate_y_px = 100.0,
            1 => style.rotate_x_deg = -180.0,
            2 => style.rotate_y_deg = 180.0,
            _ => {}
        }
        style
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            translate_y_px: mix(self.translate_y_px, other.translate_y_px),
            rotate_x_deg: mix(self.rotate_x_deg, other.rotate_x_deg),
            rotate_y_deg: mix(self.rotate_y_deg, other.rotate_y_deg),
            scale: mix(self.scale, other.scale),
            opacity: mix(self.opacity, other.opacity),
        }
    }

    /// Inline CSS declarations for the element's `style` attribute.
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(96);
        let _ = write!(
            css,
            "transform: translateY({:.2}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.4}); opacity: {:.4};",
            self.translate_y_px,
            self.rotate_x_deg,
            self.rotate_y_deg,
            self.scale,
            self.opacity.clamp(0.0, 1.0),
        );
        css
    }
}

/// "From" tween: the heading jumps to `from` and eases back to neutral.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingTween {
    pub heading: usize,
    from: HeadingStyle,
    duration: f32,
    elapsed: f32,
}

impl HeadingTween {
    pub fn new(heading: usize, duration: f32) -> Self {
        Self {
            heading,
            from: HeadingStyle::entrance_for_section(heading),
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        if delta.is_finite() && delta > 0.0 {
            self.elapsed = (self.elapsed + delta).min(self.duration);
        }
    }

    pub fn style(&self) -> HeadingStyle {
        let t = Ease::Power1Out.evaluate(self.elapsed / self.duration);
        self.from.lerp(&HeadingStyle::NEUTRAL, t)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
