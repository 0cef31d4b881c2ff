use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::ValueKind;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a value could not be turned into a [`Record`](crate::record::Record).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Failed to serialize value: {0}")]
    Serialize(String),

    #[error("Only objects can become records, got a {kind} value")]
    NotAnObject { kind: ValueKind },

    #[error("Map keys must be text, got a {kind} key")]
    KeyNotText { kind: ValueKind },
}

impl serde::ser::Error for RecordError {
    fn custom<T: Display>(msg: T) -> Self {
        RecordError::Serialize(msg.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("The record must have a {field}")]
    MissingField { field: String },

    #[error("Field '{field}' holds a {kind} value, which is not supported")]
    UnsupportedKind { field: String, kind: ValueKind },

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl ValidationError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    pub fn unsupported_kind(field: impl Into<String>, kind: ValueKind) -> Self {
        Self::UnsupportedKind {
            field: field.into(),
            kind,
        }
    }

    /// Name of the offending field, if the error is about a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::UnsupportedKind { field, .. } => {
                Some(field.as_str())
            }
            Self::Record(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config at line {line}, column {col}: {message}")]
    Parse {
        line: usize,
        col: usize,
        message: String,
    },

    #[error("Invalid configuration value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn parse(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            message: message.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            line: err.line(),
            col: err.column(),
            message: err.to_string(),
        }
    }
}

impl ConfigError {
    /// Maps the byte span of a TOML error back to a line and column of `source`.
    pub fn from_toml(err: &toml::de::Error, source: &str) -> Self {
        let (line, col) = err
            .span()
            .and_then(|span| source.get(..span.start))
            .map(|before| {
                let line = before.matches('\n').count() + 1;
                let col = before.rsplit('\n').next().map_or(0, |tail| tail.chars().count()) + 1;
                (line, col)
            })
            .unwrap_or((0, 0));
        ConfigError::parse(line, col, err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = ValidationError::missing_field("name");
        assert_eq!(error.to_string(), "The record must have a name");
        assert_eq!(error.field(), Some("name"));
    }

    #[test]
    fn test_unsupported_kind_display() {
        let error = ValidationError::unsupported_kind("tags", ValueKind::Sequence);
        let display = error.to_string();
        assert!(display.contains("tags"));
        assert!(display.contains("sequence"));
    }

    #[test]
    fn test_record_error_has_no_field() {
        let error = ValidationError::from(RecordError::NotAnObject {
            kind: ValueKind::Number,
        });
        assert_eq!(error.field(), None);
        assert!(error.to_string().contains("number"));
    }

    #[test]
    fn test_errors_compare_by_payload() {
        assert_eq!(
            ValidationError::missing_field("price"),
            ValidationError::missing_field("price")
        );
        assert_ne!(
            ValidationError::missing_field("price"),
            ValidationError::missing_field("size")
        );
        assert_ne!(
            ValidationError::missing_field("tags"),
            ValidationError::unsupported_kind("tags", ValueKind::Sequence)
        );
    }

    #[test]
    fn test_config_parse_error_display() {
        let error = ConfigError::parse(3, 7, "unexpected token");
        let display = error.to_string();
        assert!(display.contains("line 3"));
        assert!(display.contains("column 7"));
        assert!(display.contains("unexpected token"));
    }

    #[test]
    fn test_toml_error_points_at_line_and_column() {
        let source = "color = false\nlog_level = \"info\" junk\n";
        let err = toml::from_str::<toml::Table>(source).unwrap_err();
        match ConfigError::from_toml(&err, source) {
            ConfigError::Parse { line, col, .. } => {
                assert_eq!(line, 2);
                assert!(col > 1);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_serialize_error() {
        let error = <RecordError as serde::ser::Error>::custom("boom");
        assert_eq!(error, RecordError::Serialize("boom".to_string()));
        assert!(ValidationError::from(error).to_string().contains("boom"));
    }

    #[test]
    fn test_errors_are_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<ValidationError>();
        assert_sync::<ValidationError>();
        assert_send::<ConfigError>();
        assert_sync::<ConfigError>();
    }
}
