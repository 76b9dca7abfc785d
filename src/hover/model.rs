use crate::config::ColorPair;
use crate::surface::StyleProperty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Resting,
    Hovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    /// `mouseover`
    PointerEnter,
    /// `mouseout`
    PointerLeave,
}

impl HoverEvent {
    pub const fn dom_event_name(self) -> &'static str {
        match self {
            HoverEvent::PointerEnter => "mouseover",
            HoverEvent::PointerLeave => "mouseout",
        }
    }
}

/// Foreground and background an element shows in one hover state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementColors {
    pub foreground: String,
    pub background: String,
}

impl ElementColors {
    pub fn for_state(state: HoverState, colors: &ColorPair) -> Self {
        match state {
            HoverState::Resting => Self {
                foreground: colors.hover.clone(),
                background: colors.base.clone(),
            },
            HoverState::Hovered => Self {
                foreground: colors.base.clone(),
                background: colors.hover.clone(),
            },
        }
    }

    pub fn declarations(&self) -> [(StyleProperty, &str); 2] {
        [
            (StyleProperty::Color, self.foreground.as_str()),
            (StyleProperty::BackgroundColor, self.background.as_str()),
        ]
    }
}
