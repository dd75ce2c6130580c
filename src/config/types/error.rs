//! Configuration error types.

use std::fmt;
use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};
use thiserror::Error;

use super::FieldPath;
use crate::logger::paint;

/// Why `gallery.toml` could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML in config file")]
    Toml(#[from] toml::de::Error),

    // Rendered in full by Display; no source to avoid printing it twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected setting.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// `  scan.exclude: empty directory name` with an optional hint line.
impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = paint(self.field.as_str(), Stream::Stderr, |t| t.cyan().to_string());
        write!(f, "  {field}: {}", self.message)?;
        if let Some(hint) = &self.hint {
            let label = paint("hint", Stream::Stderr, |t| t.yellow().to_string());
            write!(f, "\n    {label}: {hint}")?;
        }
        Ok(())
    }
}

/// Problems found while validating the settings.
///
/// Every section reports into one collection so all mistakes surface in a
/// single run. Hints are not collected; they are logged right away.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Log a non-fatal note about `field`.
    pub fn hint(&mut self, field: FieldPath, message: impl Into<String>) {
        crate::log!("hint"; "{}: {}", field.as_str(), message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Err(self)` when anything was reported.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = crate::utils::plural_count(self.errors.len(), "problem");
        let title = format!("invalid settings ({count}):");
        write!(f, "{}", paint(&title, Stream::Stderr, |t| t.red().bold().to_string()))?;
        for diagnostic in &self.errors {
            write!(f, "\n{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("gallery.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(format!("{io_err}"), "cannot read config file `gallery.toml`");
    }

    #[test]
    fn test_diagnostics_into_result() {
        let diag = ConfigDiagnostics::new();
        assert!(diag.into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("scan.exclude"), "empty directory name");
        diag.error_with_hint(FieldPath::new("scan.extensions"), "invalid extension `p*g`", "use `png`");
        assert!(diag.has_errors());
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use `png`"));

        let err = diag.into_result().unwrap_err();
        owo_colors::set_override(false);
        assert_eq!(
            format!("{err}"),
            "invalid settings (2 problems):\n  scan.exclude: empty directory name\n  scan.extensions: invalid extension `p*g`\n    hint: use `png`"
        );
    }
}
