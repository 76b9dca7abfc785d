use super::model::{HoverEvent, HoverState};

/// Per-element hover toggle. Every event is accepted; a repeated enter stays hovered.
#[derive(Debug, Default, Clone, Copy)]
pub struct HoverMachine {
    state: HoverState,
}

impl HoverMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn next_state(&self, event: HoverEvent) -> HoverState {
        match event {
            HoverEvent::PointerEnter => HoverState::Hovered,
            HoverEvent::PointerLeave => HoverState::Resting,
        }
    }

    pub fn transition(&mut self, event: HoverEvent) -> HoverState {
        let next = self.next_state(event);
        tracing::trace!(from = ?self.state, event = ?event, to = ?next, "hover transition");
        self.state = next;
        self.state
    }
}

impl std::fmt::Display for HoverMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HoverState::{:?}", self.state)
    }
}
