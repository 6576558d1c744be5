//! Validation result types.

use serde::Serialize;

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation error or warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub message: String,
    /// 1-indexed source line, when the issue can be tied to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub severity: Severity,
    /// Closest known key, for unknown-key warnings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            severity: Severity::Error,
            suggestion: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            severity: Severity::Warning,
            suggestion: None,
        }
    }

    pub fn at_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }
}

/// Outcome of validating one config file.
///
/// `valid` always equals `errors.is_empty()`; the fields are private so the two
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    path: String,
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            valid: true,
            path: path.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Build a result from issues, routing each by severity.
    pub fn from_issues(
        path: impl Into<String>,
        issues: impl IntoIterator<Item = ValidationIssue>,
    ) -> Self {
        let mut result = Self::new(path);
        for issue in issues {
            result.push(issue);
        }
        result
    }

    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
        self.valid = self.errors.is_empty();
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Strict mode: every warning becomes an error.
    ///
    /// Messages, lines and suggestions are kept; only severity changes. Promoted
    /// issues are appended after the existing errors.
    pub fn promote_warnings(mut self) -> Self {
        let warnings = std::mem::take(&mut self.warnings);
        for mut issue in warnings {
            issue.severity = Severity::Error;
            self.errors.push(issue);
        }
        self.valid = self.errors.is_empty();
        self
    }
}
