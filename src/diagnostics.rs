//! Diagnostic reporting infrastructure.
//!
//! This module provides error reporting with source locations,
//! suggestions, and pretty-printed output.
//!
//! # Error Codes
//!
//! Ivy backend error codes are organized by category:
//!
//! - **E0500-E0599**: Code generation errors (invalid allocation targets,
//!   oversized allocations, etc.)
//!
//! Frontend categories (lexer, parser, type checker) live with the frontend;
//! this crate only raises codegen errors.

use crate::span::Span;
use ariadne::{Color, Label, Report, ReportKind, Source};

/// Compiler error codes raised by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // ============================================================
    // Code generation errors (E0500-E0599)
    // ============================================================
    /// Heap allocation requested for a value type.
    InvalidAllocationTarget = 500,
    /// Allocation size does not fit the runtime's 32-bit size argument.
    AllocationTooLarge = 501,
}

impl ErrorCode {
    /// Get the formatted error code string (e.g., "E0500").
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidAllocationTarget => "cannot heap-allocate a value type",
            ErrorCode::AllocationTooLarge => "allocation size exceeds the runtime limit",
        }
    }

    /// Get a help message suggesting how to fix the error.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ErrorCode::InvalidAllocationTarget => {
                Some("value types are stored inline; only records, strings, and arrays live on the GC heap")
            }
            ErrorCode::AllocationTooLarge => {
                Some("the runtime allocator takes a 32-bit size; no single object may exceed 4 GiB")
            }
        }
    }
}

/// The kind of diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An error that prevents compilation.
    Error,
    /// A warning that doesn't prevent compilation.
    Warning,
    /// An informational note.
    Note,
}

impl DiagnosticKind {
    fn to_report_kind(self) -> ReportKind<'static> {
        match self {
            DiagnosticKind::Error => ReportKind::Error,
            DiagnosticKind::Warning => ReportKind::Warning,
            DiagnosticKind::Note => ReportKind::Advice,
        }
    }

    fn color(self) -> Color {
        match self {
            DiagnosticKind::Error => Color::Red,
            DiagnosticKind::Warning => Color::Yellow,
            DiagnosticKind::Note => Color::Cyan,
        }
    }
}

/// A compiler diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The kind of diagnostic.
    pub kind: DiagnosticKind,
    /// The error code (e.g., "E0500").
    pub code: Option<String>,
    /// The main error message.
    pub message: String,
    /// The primary span where the error occurred.
    pub span: Span,
    /// Additional labels pointing to relevant code.
    pub labels: Vec<DiagnosticLabel>,
    /// Suggestions for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the error code from an ErrorCode enum.
    /// Automatically adds the help message if available.
    pub fn with_error_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code.as_str());
        if let Some(help) = code.help() {
            self.suggestions.push(help.to_string());
        }
        self
    }

    /// Add a note to help explain the error.
    pub fn with_note(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(DiagnosticLabel::secondary(span, message));
        self
    }

    /// Add a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// A secondary label in a diagnostic.
#[derive(Debug, Clone)]
pub struct DiagnosticLabel {
    /// The span this label points to.
    pub span: Span,
    /// The label message.
    pub message: String,
    /// Whether this is the primary label.
    pub primary: bool,
}

impl DiagnosticLabel {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: false,
        }
    }
}

/// Diagnostic emitter that prints diagnostics to stderr.
pub struct DiagnosticEmitter<'a> {
    filename: &'a str,
    source: &'a str,
}

impl<'a> DiagnosticEmitter<'a> {
    pub fn new(filename: &'a str, source: &'a str) -> Self {
        Self { filename, source }
    }

    /// Emit a diagnostic to stderr.
    pub fn emit(&self, diagnostic: &Diagnostic) {
        let mut builder = Report::build(
            diagnostic.kind.to_report_kind(),
            self.filename,
            diagnostic.span.start,
        );

        let message = if let Some(code) = &diagnostic.code {
            format!("[{}] {}", code, diagnostic.message)
        } else {
            diagnostic.message.clone()
        };
        builder = builder.with_message(&message);

        builder = builder.with_label(
            Label::new((self.filename, diagnostic.span.start..diagnostic.span.end))
                .with_color(diagnostic.kind.color())
                .with_message(&diagnostic.message),
        );

        for label in &diagnostic.labels {
            let color = if label.primary {
                diagnostic.kind.color()
            } else {
                Color::Blue
            };
            builder = builder.with_label(
                Label::new((self.filename, label.span.start..label.span.end))
                    .with_color(color)
                    .with_message(&label.message),
            );
        }

        if !diagnostic.suggestions.is_empty() {
            let help = diagnostic.suggestions.join("\n");
            builder = builder.with_help(help);
        }

        let report = builder.finish();

        report
            .eprint((self.filename, Source::from(self.source)))
            .expect("Failed to write diagnostic");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_formatting() {
        assert_eq!(ErrorCode::InvalidAllocationTarget.as_str(), "E0500");
        assert_eq!(ErrorCode::AllocationTooLarge.as_str(), "E0501");
        assert_eq!(
            ErrorCode::InvalidAllocationTarget.description(),
            "cannot heap-allocate a value type"
        );
    }

    #[test]
    fn test_error_code_attaches_help() {
        let diag = Diagnostic::error("cannot heap-allocate value type `number`", Span::dummy())
            .with_error_code(ErrorCode::InvalidAllocationTarget);
        assert_eq!(diag.code.as_deref(), Some("E0500"));
        assert_eq!(diag.suggestions.len(), 1);
    }

    #[test]
    fn test_diagnostic_builders() {
        let span = Span::new(4, 10, 1, 5);
        let diag = Diagnostic::warning("unused allocation", span)
            .with_note(Span::new(0, 3, 1, 1), "allocated here")
            .with_suggestion("remove the allocation");
        assert_eq!(diag.kind, DiagnosticKind::Warning);
        assert_eq!(diag.labels.len(), 1);
        assert!(!diag.labels[0].primary);
        assert_eq!(diag.suggestions.len(), 1);
    }
}
