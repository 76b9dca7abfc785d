pub mod machine;
pub mod model;

pub use machine::HoverMachine;
pub use model::{ElementColors, HoverEvent, HoverState};
