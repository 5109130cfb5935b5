//! # knack-log
//!
//! Console logging setup over `tracing`, for binaries that want structured
//! logging without hand-assembling a subscriber.
//!
//! ```rust,ignore
//! fn main() -> knack_log::LogResult<()> {
//!     knack_log::init()?;
//!     knack_log::info!("listening on {}", addr);
//!     Ok(())
//! }
//! ```
//!
//! Configuration is a plain value: presets ([`Config::from_env`],
//! [`Config::development`], [`Config::production`]) plus fluent tweaks
//! ([`Config::with_level`], [`Config::without_module`]). The leveled
//! `tracing` macros are re-exported so dependents get the whole logging
//! surface from one crate. Message formatting is `tracing`'s own: inline
//! `{}` placeholders, resolved only when the event's level is enabled.

pub mod builder;
pub mod config;
mod errors;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use errors::{LogError, LogResult};

pub use tracing::{debug, error, info, trace, warn};

/// Initializes logging from the environment.
///
/// Reads `KNACK_LOG` / `RUST_LOG` and `KNACK_LOG_FORMAT`, then installs the
/// global subscriber.
pub fn init() -> LogResult<()> {
    init_with(Config::from_env())
}

/// Initializes logging from an explicit config.
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
