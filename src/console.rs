//! Console sink shared by the snippet binaries.
//!
//! Human-readable results go to stdout through [`Console`]; diagnostics go to
//! stderr through `tracing`.

use std::fmt::Display;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, ValidationError};

/// `NO_COLOR` set to anything turns colors off.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_level` when it is set. Calling this twice is
/// harmless: the second subscriber is dropped.
pub fn init_tracing(default_level: &str) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|err| ConfigError::invalid("log_level", err.to_string()))?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct Console {
    color: bool,
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self {
            color: color && colors_enabled(),
        }
    }

    pub fn heading(&self, text: &str) {
        println!("{}", self.format_heading(text));
    }

    pub fn line(&self, text: impl Display) {
        println!("{text}");
    }

    pub fn success(&self, text: impl Display) {
        println!("{}", self.format_success(text));
    }

    pub fn failure(&self, error: impl Display) {
        println!("{}", self.format_failure(error));
    }

    pub fn report(&self, errors: &[ValidationError]) {
        println!("{}", self.format_report(errors));
    }

    pub fn format_heading(&self, text: &str) -> String {
        let heading = format!("=== {text} ===");
        if self.color {
            heading.bold().cyan().to_string()
        } else {
            heading
        }
    }

    pub fn format_success(&self, text: impl Display) -> String {
        let line = format!("✓ {text}");
        if self.color {
            line.green().to_string()
        } else {
            line
        }
    }

    pub fn format_failure(&self, error: impl Display) -> String {
        let line = format!("✗ {error}");
        if self.color {
            line.red().to_string()
        } else {
            line
        }
    }

    /// One line per error, followed by a pluralized count.
    pub fn format_report(&self, errors: &[ValidationError]) -> String {
        if errors.is_empty() {
            return self.format_success("no validation errors");
        }

        let mut output = String::new();
        for (i, error) in errors.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, error));
        }
        let noun = if errors.len() == 1 { "error" } else { "errors" };
        output.push_str(&self.format_failure(format!("{} validation {noun}", errors.len())));
        output
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::new(true)
    }
}
