//! Presentation targets the layout writes into.
//!
//! A surface hands out opaque handles for the hexagon elements and the four
//! style-rule containers. The browser host lives in `crate::web`.

use thiserror::Error;

pub type SurfaceResult<T> = std::result::Result<T, SurfaceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("failed to set style property `{property}`: {reason}")]
    StyleRejected { property: &'static str, reason: String },
    #[error("failed to write style-rule text: {reason}")]
    TextRejected { reason: String },
}

/// Which of the four generated rules a container holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSlot {
    Before,
    After,
    BeforeHover,
    AfterHover,
}

impl RuleSlot {
    pub const ALL: [RuleSlot; 4] = [
        RuleSlot::Before,
        RuleSlot::After,
        RuleSlot::BeforeHover,
        RuleSlot::AfterHover,
    ];

    pub const fn is_hover(self) -> bool {
        matches!(self, RuleSlot::BeforeHover | RuleSlot::AfterHover)
    }

    pub const fn pseudo_suffix(self) -> &'static str {
        match self {
            RuleSlot::Before => "::before",
            RuleSlot::After => "::after",
            RuleSlot::BeforeHover => ":hover::before",
            RuleSlot::AfterHover => ":hover::after",
        }
    }
}

/// Inline style properties written on each hexagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Width,
    Height,
    MarginTop,
    FontSize,
    BackgroundColor,
    BorderColor,
    Color,
    Position,
    Display,
    Transition,
    BoxSizing,
}

impl StyleProperty {
    /// CSS property name as accepted by `style.setProperty`.
    pub const fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::MarginTop => "margin-top",
            StyleProperty::FontSize => "font-size",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::BorderColor => "border-color",
            StyleProperty::Color => "color",
            StyleProperty::Position => "position",
            StyleProperty::Display => "display",
            StyleProperty::Transition => "transition",
            StyleProperty::BoxSizing => "box-sizing",
        }
    }
}

/// An element whose inline style can be set.
pub trait StyleTarget {
    fn set_style(&self, property: StyleProperty, value: &str) -> SurfaceResult<()>;
}

/// A container whose whole text content is replaced on each write.
pub trait TextTarget {
    fn replace_text(&self, text: &str) -> SurfaceResult<()>;
}

pub trait HexagonSurface {
    type Element: StyleTarget;
    type Container: TextTarget;

    fn query_hexagons(&self) -> Vec<Self::Element>;

    /// `None` when the container for `slot` is absent.
    fn style_container(&self, slot: RuleSlot) -> Option<Self::Container>;
}
