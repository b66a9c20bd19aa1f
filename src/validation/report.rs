//! Validation report types for structured error reporting.

use std::fmt;

/// The result of validating a TextGrid or lab.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    /// All issues found during validation, in discovery order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any issue carries `code`.
    pub fn has(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Validation passed: no issues found");
        }

        writeln!(
            f,
            "Validation completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single validation issue (error or warning).
#[derive(Clone, Debug)]
pub struct ValidationIssue {
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Where the issue occurred.
    pub context: IssueContext,
}

impl ValidationIssue {
    pub fn new(
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
        context: IssueContext,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            context,
        }
    }

    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Error, code, message, context)
    }

    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Warning, code, message, context)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Suspicious but still writable data.
    Warning,
    /// Data that breaks a structural rule of the format.
    Error,
}

/// A stable code identifying the type of validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueCode {
    // Range issues
    /// A grid or tier has xmin > xmax.
    InvalidTimeRange,
    /// A time is NaN or infinite.
    NonFiniteTime,
    /// A tier range extends past the grid range.
    TierOutOfGridBounds,
    /// An interval or point lies outside its tier range.
    ItemOutOfTierBounds,

    // Ordering issues
    /// Items are not in ascending time order.
    UnsortedItems,
    /// An interval or annotation ends before it starts.
    InvertedInterval,
    /// Adjacent intervals leave a gap or overlap.
    NonContiguousIntervals,
    /// Two points share the same time.
    DuplicatePointTime,

    // Naming issues
    /// Several tiers share a name, so lookup by name finds only the first.
    DuplicateTierName,
    EmptyTierName,
}

/// Where a validation issue occurred.
#[derive(Clone, Debug, PartialEq)]
pub enum IssueContext {
    TextGrid,
    Tier { index: usize, name: String },
    Interval { tier: String, index: usize },
    Point { tier: String, index: usize },
    Lab,
    Annotation { index: usize },
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::TextGrid => write!(f, "TextGrid"),
            IssueContext::Tier { index, name } => write!(f, "tier {} '{}'", index, name),
            IssueContext::Interval { tier, index } => {
                write!(f, "tier '{}' interval {}", tier, index)
            }
            IssueContext::Point { tier, index } => write!(f, "tier '{}' point {}", tier, index),
            IssueContext::Lab => write!(f, "lab"),
            IssueContext::Annotation { index } => write!(f, "annotation {}", index),
        }
    }
}
