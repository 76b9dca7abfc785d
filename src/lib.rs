pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod logging;
pub mod style;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

pub use app::{ApplyReport, HexagonLayout};
pub use config::{ColorPair, HexagonConfig};
pub use error::{AppError, AppResult};
pub use geometry::{HexagonStyleParameters, Tier};
pub use style::{PseudoElementDeclarationSet, ResponsiveStyle};
