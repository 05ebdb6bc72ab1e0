use crate::lines::LineTable;
use crate::span::Span;

/// Used as the "error" value for a `Result` to indicate that an error was
/// detected and reported to the user (i.e., pushed onto a [`Diagnostics`]
/// sink).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ErrorReported;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub message: String,
    pub labels: Vec<Label>,
    pub children: Vec<Diagnostic>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Severity {
    Help,
    Note,
    Warning,
    Error,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// Per-file diagnostics sink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) -> ErrorReported {
        self.0.push(diagnostic);
        ErrorReported
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

/// Convenience macro for avoiding `format!`
#[macro_export]
macro_rules! diag {
    ($severity:expr, $span:expr, $($message:tt)*) => {
        $crate::diagnostic::Diagnostic::new($severity, $span, format!($($message)*))
    }
}

/// Convenience macro for avoiding `format!`
#[macro_export]
macro_rules! error {
    ($span:expr, $($message:tt)*) => {
        $crate::diagnostic::Diagnostic::new($crate::diagnostic::Severity::Error, $span, format!($($message)*))
    }
}

/// Convenience macro for avoiding `format!`
#[macro_export]
macro_rules! warning {
    ($span:expr, $($message:tt)*) => {
        $crate::diagnostic::Diagnostic::new($crate::diagnostic::Severity::Warning, $span, format!($($message)*))
    }
}

/// Convenience macro for avoiding `format!`
#[macro_export]
macro_rules! note {
    ($span:expr, $($message:tt)*) => {
        $crate::diagnostic::Diagnostic::new($crate::diagnostic::Severity::Note, $span, format!($($message)*))
    }
}

impl Diagnostic {
    /// Create a new diagnostic with the given "main message" at the
    /// given span.
    pub fn new(severity: Severity, span: Span, message: impl ToString) -> DiagnosticBuilder {
        DiagnosticBuilder::new(severity, span, message)
    }

    /// Push the diagnostic onto the given sink.
    pub fn emit(self, diagnostics: &mut Diagnostics) -> ErrorReported {
        diagnostics.push(self)
    }

    /// Renders the diagnostic as plain text against the file's line
    /// table, one line per label, children indented below.
    pub fn format(&self, file_name: &str, lines: &LineTable) -> String {
        let start = lines.line_column(self.span.start);
        let mut output = format!(
            "{}: {} ({}:{}:{})",
            self.severity, self.message, file_name, start.line, start.column
        );
        for label in &self.labels {
            let at = lines.line_column(label.span.start);
            output.push_str(&format!("\n  {}:{}: {}", at.line, at.column, label.message));
        }
        for child in &self.children {
            for line in child.format(file_name, lines).lines() {
                output.push_str("\n  ");
                output.push_str(line);
            }
        }
        output
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Severity::Help => "help",
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{text}")
    }
}

impl Label {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &String {
        &self.message
    }
}


#[must_use]
pub struct DiagnosticBuilder {
    severity: Severity,
    span: Span,
    message: String,
    labels: Vec<Label>,
    children: Vec<Diagnostic>,
}

impl DiagnosticBuilder {
    fn new(severity: Severity, span: Span, message: impl ToString) -> Self {
        Self {
            severity,
            span,
            message: message.to_string(),
            labels: vec![],
            children: vec![],
        }
    }

    /// Add a label to this diagnostic.
    pub fn label(mut self, span: Span, message: impl ToString) -> Self {
        self.labels.push(Label {
            span,
            message: message.to_string(),
        });
        self
    }

    /// Add a child diagnostic. Our severity is raised to at least
    /// the child's level.
    pub fn child(mut self, diagnostic: Diagnostic) -> Self {
        self.severity = self.severity.max(diagnostic.severity);
        self.children.push(diagnostic);
        self
    }

    /// Return the completed diagnostic.
    pub fn finish(mut self) -> Diagnostic {
        if self.labels.is_empty() {
            let span = self.span;
            self = self.label(span, "here");
        }

        Diagnostic {
            severity: self.severity,
            span: self.span,
            message: self.message,
            labels: self.labels,
            children: self.children,
        }
    }

    /// Finish and push the diagnostic onto the given sink.
    pub fn emit(self, diagnostics: &mut Diagnostics) -> ErrorReported {
        self.finish().emit(diagnostics)
    }
}
