//! Logger configuration and presets.

use serde::{Deserialize, Serialize};

/// Logger configuration.
///
/// `level` is an env-filter directive string: a bare level (`"info"`), a
/// comma-separated list of `target=level` pairs, or any mix the
/// `tracing_subscriber::EnvFilter` grammar accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Filter directives.
    pub level: String,
    /// Output format.
    pub format: Format,
    /// Per-event display options.
    pub display: DisplayConfig,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human-first output.
    Pretty,
    /// Single-line output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

/// Per-event display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// ANSI colors.
    pub colors: bool,
    /// Event target (module path).
    pub target: bool,
    /// Source file and line number.
    pub source: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            target: true,
            source: false,
        }
    }
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// `KNACK_LOG` (falling back to `RUST_LOG`) supplies the filter;
    /// `KNACK_LOG_FORMAT` selects `pretty` / `json` / `compact`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("KNACK_LOG") {
            config.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            config.level = level;
        }

        if let Ok(format) = std::env::var("KNACK_LOG_FORMAT") {
            config.format = match format.to_lowercase().as_str() {
                "pretty" => Format::Pretty,
                "json" => Format::Json,
                _ => Format::Compact,
            };
        }

        config
    }

    /// Development configuration (pretty, debug level, source locations).
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level, no colors).
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
        }
    }

    /// Replaces the filter directives.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Silences a module by appending a `target=off` directive.
    ///
    /// Later directives win in the env-filter grammar, so this overrides
    /// whatever the base filter would allow for that target.
    #[must_use]
    pub fn without_module(mut self, target: &str) -> Self {
        self.level = format!("{},{target}=off", self.level);
        self
    }
}
