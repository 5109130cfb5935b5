//! Logger builder: turns a [`Config`] into an installed global subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::{Config, Format};
use crate::errors::{LogError, LogResult};

/// Logger builder.
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the filter string cannot be parsed
    /// and [`LogError::Init`] if a global subscriber is already installed.
    pub fn build(self) -> LogResult<()> {
        let filter = EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("{}: {}", self.config.level, e)))?;

        let display = self.config.display;

        // Each format produces a differently-typed layer, so the registry is
        // assembled and installed per arm.
        match self.config.format {
            Format::Pretty => {
                let fmt_layer = tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(display.colors)
                    .with_target(display.target)
                    .with_file(display.source)
                    .with_line_number(display.source);
                Registry::default().with(filter).with(fmt_layer).try_init()
            }
            Format::Compact => {
                let fmt_layer = tracing_subscriber::fmt::layer()
                    .compact()
                    .with_ansi(display.colors)
                    .with_target(display.target)
                    .with_file(display.source)
                    .with_line_number(display.source);
                Registry::default().with(filter).with(fmt_layer).try_init()
            }
            Format::Json => {
                let fmt_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(display.target)
                    .with_file(display.source)
                    .with_line_number(display.source);
                Registry::default().with(filter).with(fmt_layer).try_init()
            }
        }
        .map_err(|e| LogError::Init(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filter_is_rejected_before_install() {
        let result = LoggerBuilder::from_config(Config::default().with_level("app=not_a_level"))
            .build();
        assert!(matches!(result, Err(LogError::Filter(_))));
    }
}
