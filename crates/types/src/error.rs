use thiserror::Error;

/// A chart or table was handed input of the wrong shape.
///
/// Fatal to the vendor being processed, never to the whole batch.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{subject}: {detail}")]
pub struct DataShapeError {
    pub subject: String,
    pub detail: String,
}

impl DataShapeError {
    pub fn new(subject: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            detail: detail.into(),
        }
    }
}

/// A recoverable formatting problem: output was produced, but not exactly as
/// asked (a dropped row, a token that could not be replaced, ...).
///
/// Never raised. Logged where it occurs and collected into reports.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatWarning {
    pub subject: String,
    pub message: String,
}

impl FormatWarning {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        let warning = Self {
            subject: subject.into(),
            message: message.into(),
        };
        log::warn!("{warning}");
        warning
    }
}

impl std::fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}
