pub mod pseudo;

use crate::config::ColorPair;
use crate::geometry::HexagonStyleParameters;
use crate::surface::StyleProperty;

pub use pseudo::{EdgeGeometry, PseudoElementDeclarationSet};

pub type InlineDeclaration = (StyleProperty, String);

/// Presentation applied once to each hexagon before any resize pass.
pub fn initial_declarations(colors: &ColorPair) -> Vec<InlineDeclaration> {
    vec![
        (StyleProperty::BackgroundColor, colors.base.clone()),
        (StyleProperty::BorderColor, colors.base.clone()),
        (StyleProperty::Color, colors.hover.clone()),
        (StyleProperty::Position, "relative".to_string()),
        (StyleProperty::Display, "inline-block".to_string()),
        (StyleProperty::Transition, "0s ease-in".to_string()),
        (StyleProperty::BoxSizing, "border-box".to_string()),
    ]
}

pub fn sizing_declarations(params: &HexagonStyleParameters) -> [InlineDeclaration; 4] {
    [
        (StyleProperty::Width, params.width_px()),
        (StyleProperty::Height, params.height_px()),
        (StyleProperty::MarginTop, params.margin_top()),
        (StyleProperty::FontSize, params.font_size()),
    ]
}

/// Everything one resize pass writes, computed once for all hexagons.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveStyle {
    pub viewport_width: u32,
    pub params: HexagonStyleParameters,
    pub pseudo: PseudoElementDeclarationSet,
}

impl ResponsiveStyle {
    pub fn compute(viewport_width: u32, selector: &str, colors: &ColorPair) -> Self {
        let params = HexagonStyleParameters::for_viewport(viewport_width);
        let pseudo = PseudoElementDeclarationSet::build(params.width, selector, &colors.hover);
        Self {
            viewport_width,
            params,
            pseudo,
        }
    }

    pub fn sizing(&self) -> [InlineDeclaration; 4] {
        sizing_declarations(&self.params)
    }
}
