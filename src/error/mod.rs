use crate::config::ConfigError;
use crate::surface::SurfaceError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("logger setup failed: {0}")]
    Logger(String),
    #[error("host environment unavailable: {0}")]
    Host(&'static str),
}
