//! Responsive hexagon sizing derived from the viewport width.

/// Widths at or below this use the narrow tier.
pub const NARROW_MAX_WIDTH: u32 = 750;
/// Widths at or above this use the wide tier.
pub const WIDE_MIN_WIDTH: u32 = 1280;

const NARROW: HexagonStyleParameters = HexagonStyleParameters {
    width: 62,
    height: 42,
    margin_top_rem: 2.25,
    font_size_rem: 1.25,
};

const WIDE: HexagonStyleParameters = HexagonStyleParameters {
    width: 104,
    height: 72,
    margin_top_rem: 3.5,
    font_size_rem: 2.0,
};

const WIDTH_DIVISOR: u32 = 12;
const HEIGHT_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tier {
    Narrow,
    /// Carries the interpolation factor, strictly inside `(0, 1)`.
    Interpolated(f64),
    Wide,
}

impl Tier {
    pub fn for_viewport(viewport_width: u32) -> Self {
        if viewport_width <= NARROW_MAX_WIDTH {
            Tier::Narrow
        } else if viewport_width >= WIDE_MIN_WIDTH {
            Tier::Wide
        } else {
            Tier::Interpolated(interpolation_factor(viewport_width))
        }
    }
}

/// Sizing shared by every hexagon in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexagonStyleParameters {
    /// Pixels.
    pub width: u32,
    /// Pixels.
    pub height: u32,
    pub margin_top_rem: f64,
    pub font_size_rem: f64,
}

impl HexagonStyleParameters {
    pub fn for_viewport(viewport_width: u32) -> Self {
        match Tier::for_viewport(viewport_width) {
            Tier::Narrow => NARROW,
            Tier::Wide => WIDE,
            Tier::Interpolated(t) => {
                // Derived from the viewport directly, not blended between the fixed tiers.
                let width = viewport_width / WIDTH_DIVISOR;
                let height = (f64::from(width) * HEIGHT_RATIO).floor() as u32;
                Self {
                    width,
                    height,
                    margin_top_rem: lerp(NARROW.margin_top_rem, WIDE.margin_top_rem, t),
                    font_size_rem: lerp(NARROW.font_size_rem, WIDE.font_size_rem, t),
                }
            }
        }
    }

    pub fn width_px(&self) -> String {
        format!("{}px", self.width)
    }

    pub fn height_px(&self) -> String {
        format!("{}px", self.height)
    }

    pub fn margin_top(&self) -> String {
        format!("{}rem", self.margin_top_rem)
    }

    pub fn font_size(&self) -> String {
        format!("{}rem", self.font_size_rem)
    }
}

/// Position of `viewport_width` between the two fixed tiers.
pub fn interpolation_factor(viewport_width: u32) -> f64 {
    f64::from(viewport_width.saturating_sub(NARROW_MAX_WIDTH))
        / f64::from(WIDE_MIN_WIDTH - NARROW_MAX_WIDTH)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
