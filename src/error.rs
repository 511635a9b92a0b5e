//! Error taxonomy for the QR generator.
//!
//! Every failure the tool can report is a [`QrGeneratorError`]: a [`Reason`] that carries the
//! parameters of its message template, plus optional free-text details. The templates are
//! attached to the [`Reason`] variants with `#[error]`, so adding a kind without a message is a
//! compile error.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Shorthand for results whose error is a [`QrGeneratorError`].
pub type Result<T, E = QrGeneratorError> = std::result::Result<T, E>;

/// The symbolic kind of a [`QrGeneratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    FileReadError,
    InvalidOption,
    WriteError,
    InvalidColor,
}

impl ErrorKind {
    /// The symbolic name of this kind, e.g. `INVALID_OPTION`.
    pub fn name(self) -> &'static str {
        use ErrorKind::*;
        match self {
            FileNotFound => "FILE_NOT_FOUND",
            FileReadError => "FILE_READ_ERROR",
            InvalidOption => "INVALID_OPTION",
            WriteError => "WRITE_ERROR",
            InvalidColor => "INVALID_COLOR",
        }
    }

    /// The stable numeric code of this kind, printed in `Error [<CODE>]: ...` lines.
    pub fn code(self) -> &'static str {
        use ErrorKind::*;
        match self {
            FileNotFound => "E0001",
            FileReadError => "E0002",
            InvalidOption => "E0003",
            WriteError => "E0004",
            InvalidColor => "E0005",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What went wrong, with the values interpolated into the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError { path: String },

    #[error("Invalid {option}: {value} ({details})")]
    InvalidOption { option: String, value: String, details: String },

    #[error("Failed to write output file: {path}")]
    WriteError { path: String },

    #[error("Invalid color: {color}")]
    InvalidColor { color: String },
}

impl Reason {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Reason::FileNotFound { .. } => ErrorKind::FileNotFound,
            Reason::FileReadError { .. } => ErrorKind::FileReadError,
            Reason::InvalidOption { .. } => ErrorKind::InvalidOption,
            Reason::WriteError { .. } => ErrorKind::WriteError,
            Reason::InvalidColor { .. } => ErrorKind::InvalidColor,
        }
    }
}

/// A domain error: a [`Reason`] and optional details.
///
/// The `Display` output is the interpolated message only. Use [`QrGeneratorError::report`] for the
/// full text printed on standard error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct QrGeneratorError {
    reason: Reason,
    details: Option<String>,
}

impl QrGeneratorError {
    pub fn new(reason: Reason, details: Option<String>) -> Self {
        QrGeneratorError { reason, details }
    }

    pub fn file_not_found(path: &Path, details: impl Into<String>) -> Self {
        Self::new(
            Reason::FileNotFound { path: path.display().to_string() },
            Some(details.into()),
        )
    }

    pub fn file_read(path: &Path, details: impl Into<String>) -> Self {
        Self::new(
            Reason::FileReadError { path: path.display().to_string() },
            Some(details.into()),
        )
    }

    /// An option failed validation. `details` is the explanation of the accepted values and is
    /// part of the message itself.
    pub fn invalid_option(
        option: impl Into<String>,
        value: impl fmt::Display,
        details: impl Into<String>,
    ) -> Self {
        Self::new(
            Reason::InvalidOption {
                option: option.into(),
                value: value.to_string(),
                details: details.into(),
            },
            None,
        )
    }

    pub fn write(path: &Path, details: impl Into<String>) -> Self {
        Self::new(
            Reason::WriteError { path: path.display().to_string() },
            Some(details.into()),
        )
    }

    pub fn invalid_color(color: impl Into<String>) -> Self {
        Self::new(Reason::InvalidColor { color: color.into() }, None)
    }

    pub fn kind(&self) -> ErrorKind {
        self.reason.kind()
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// The lines printed on standard error: `Error [<CODE>]: <message>`, followed by a
    /// `詳細: <details>` line when details are present.
    pub fn report(&self) -> String {
        let mut out = format!("Error [{}]: {}", self.kind().code(), self.reason);
        if let Some(details) = &self.details {
            out.push_str("\n詳細: ");
            out.push_str(details);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_option_interpolates_all_parameters() {
        let err = QrGeneratorError::invalid_option(
            "size",
            50,
            "サイズは128から1024の間で指定してください",
        );
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
        assert_eq!(
            err.to_string(),
            "Invalid size: 50 (サイズは128から1024の間で指定してください)"
        );
        assert_eq!(err.details(), None);
    }

    #[test]
    fn report_appends_details_line() {
        let err = QrGeneratorError::file_read(Path::new("notes.txt"), "ファイルが空です");
        assert_eq!(
            err.report(),
            "Error [E0002]: Failed to read file: notes.txt\n詳細: ファイルが空です"
        );
    }

    #[test]
    fn report_without_details_is_one_line() {
        let err = QrGeneratorError::invalid_color("#ABC");
        assert_eq!(err.report(), "Error [E0005]: Invalid color: #ABC");
    }

    #[test]
    fn every_kind_has_distinct_code() {
        let kinds = [
            ErrorKind::FileNotFound,
            ErrorKind::FileReadError,
            ErrorKind::InvalidOption,
            ErrorKind::WriteError,
            ErrorKind::InvalidColor,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
        assert_eq!(ErrorKind::FileNotFound.code(), "E0001");
        assert_eq!(ErrorKind::WriteError.code(), "E0004");
        assert_eq!(ErrorKind::InvalidOption.to_string(), "INVALID_OPTION");
    }

    #[test]
    fn write_error_keeps_output_path() {
        let err = QrGeneratorError::write(Path::new("out/qr.png"), "permission denied");
        assert_eq!(err.kind(), ErrorKind::WriteError);
        assert_eq!(err.to_string(), "Failed to write output file: out/qr.png");
        assert_eq!(err.details(), Some("permission denied"));
    }
}
