//! Error types for loading and routing scenes

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::routing::RoutingError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene parse error: {message}")]
    Parse { span: Option<Span>, message: String },

    /// A connection names a shape id that is not defined
    #[error("undefined shape '{id}'")]
    UndefinedShape {
        id: String,
        span: Option<Span>,
        suggestions: Vec<String>,
    },

    /// Two shapes share an id
    #[error("duplicate shape id '{id}'")]
    DuplicateShape { id: String, span: Option<Span> },

    /// A value the routing engine rejects, such as an unknown layout name
    #[error("invalid value: {reason}")]
    InvalidValue { span: Option<Span>, reason: RoutingError },

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),
}

impl SceneError {
    /// Create an undefined shape error with suggestions
    pub fn undefined(id: impl Into<String>, span: Option<Span>, suggestions: Vec<String>) -> Self {
        Self::UndefinedShape {
            id: id.into(),
            span,
            suggestions,
        }
    }

    pub fn invalid(span: Option<Span>, reason: RoutingError) -> Self {
        Self::InvalidValue { span, reason }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Parse { span, .. } => span.as_ref(),
            Self::UndefinedShape { span, .. } => span.as_ref(),
            Self::InvalidValue { span, .. } => span.as_ref(),
            Self::DuplicateShape { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UndefinedShape { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("Error: {}", self);
        };

        let label_message = match self {
            Self::Parse { message, .. } => message.clone(),
            Self::UndefinedShape { id, .. } => format!("no shape with id '{}'", id),
            Self::InvalidValue { reason, .. } => reason.to_string(),
            Self::DuplicateShape { .. } => "defined again here".to_string(),
            _ => self.to_string(),
        };

        let mut report = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(label_message)
                    .with_color(Color::Red),
            );

        if let Some(suggestions) = self.suggestions().filter(|s| !s.is_empty()) {
            report = report.with_help(format!("did you mean {}?", suggestions.join(", ")));
        }

        let mut buf = Vec::new();
        if report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .is_err()
        {
            return format!("Error: {}", self);
        }
        String::from_utf8(buf).unwrap_or_else(|_| format!("Error: {}", self))
    }
}

impl From<toml::de::Error> for SceneError {
    fn from(err: toml::de::Error) -> Self {
        SceneError::Parse {
            span: err.span(),
            message: err.message().to_string(),
        }
    }
}
