//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

pub const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber on stderr. `RUST_LOG` wins; `level` is the fallback.
pub fn init(level: &str) -> AppResult<()> {
    init_with_writer(level, std::io::stderr)
}

pub fn init_with_writer<W>(level: &str, writer: W) -> AppResult<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|err| AppError::Logger(format!("invalid log level '{level}': {err}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);
    // No system clock or terminal colors in the browser.
    #[cfg(target_arch = "wasm32")]
    let result = builder.without_time().with_ansi(false).try_init();
    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.try_init();

    result.map_err(|err| AppError::Logger(format!("failed to set subscriber: {err}")))
}

pub fn parse_level(level: &str) -> AppResult<LevelFilter> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
