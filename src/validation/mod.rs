//! TextGrid and lab validation.
//!
//! Construction and parsing are permissive about item placement, so a
//! grid read from disk or JSON may hold data Praat would refuse. This
//! module reports such problems instead of failing:
//! - Range integrity (finite times, xmin <= xmax, tiers inside the grid,
//!   items inside their tier)
//! - Ordering (sorted items, contiguous intervals, distinct point times)
//! - Naming (empty or duplicate tier names)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use std::collections::HashMap;

use crate::ir::{IntervalTier, Lab, PointTier, TextGrid, Tier};

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Validates a TextGrid and returns a report of all issues found.
pub fn validate_textgrid(grid: &TextGrid, opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    let grid_ok = check_range(
        grid.xmin(),
        grid.xmax(),
        IssueContext::TextGrid,
        &mut report,
    );

    validate_tier_names(grid, &mut report);

    for (index, tier) in grid.tiers().iter().enumerate() {
        let context = IssueContext::Tier {
            index,
            name: tier.name().to_string(),
        };
        let tier_ok = check_range(tier.xmin(), tier.xmax(), context.clone(), &mut report);

        if grid_ok && tier_ok && (tier.xmin() < grid.xmin() || tier.xmax() > grid.xmax()) {
            report.add(ValidationIssue::error(
                IssueCode::TierOutOfGridBounds,
                format!(
                    "Tier range [{}, {}] extends past TextGrid range [{}, {}]",
                    tier.xmin(),
                    tier.xmax(),
                    grid.xmin(),
                    grid.xmax()
                ),
                context.clone(),
            ));
        }

        if !tier.is_sorted() {
            report.add(ValidationIssue::error(
                IssueCode::UnsortedItems,
                "Items are not in ascending time order",
                context,
            ));
        }

        match tier {
            Tier::Interval(tier) => validate_intervals(tier, &mut report),
            Tier::Point(tier) => validate_points(tier, &mut report),
        }
    }

    finish(report, opts)
}

/// Validates a lab and returns a report of all issues found.
///
/// Lab files carry no enclosing range, so only per-annotation times and
/// ordering are checked. Out-of-order annotations are a warning here.
pub fn validate_lab(lab: &Lab, opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (index, annotation) in lab.annotations.iter().enumerate() {
        let context = IssueContext::Annotation { index };
        if !annotation.start.is_finite() || !annotation.end.is_finite() {
            report.add(ValidationIssue::error(
                IssueCode::NonFiniteTime,
                format!(
                    "Non-finite time in [{}, {}]",
                    annotation.start, annotation.end
                ),
                context,
            ));
            continue;
        }
        if annotation.start > annotation.end {
            report.add(ValidationIssue::warning(
                IssueCode::InvertedInterval,
                format!(
                    "Annotation '{}' ends at {} before it starts at {}",
                    annotation.label, annotation.end, annotation.start
                ),
                context,
            ));
        }
    }

    if lab
        .annotations
        .windows(2)
        .any(|pair| pair[0].start > pair[1].start)
    {
        report.add(ValidationIssue::warning(
            IssueCode::UnsortedItems,
            "Annotations are not in ascending start order",
            IssueContext::Lab,
        ));
    }

    finish(report, opts)
}

/// Reports non-finite or inverted bounds. Returns true if the range is usable.
fn check_range(
    xmin: f64,
    xmax: f64,
    context: IssueContext,
    report: &mut ValidationReport,
) -> bool {
    if !xmin.is_finite() || !xmax.is_finite() {
        report.add(ValidationIssue::error(
            IssueCode::NonFiniteTime,
            format!("Non-finite range [{}, {}]", xmin, xmax),
            context,
        ));
        return false;
    }
    if xmin > xmax {
        report.add(ValidationIssue::error(
            IssueCode::InvalidTimeRange,
            format!("xmin {} is greater than xmax {}", xmin, xmax),
            context,
        ));
        return false;
    }
    true
}

fn validate_tier_names(grid: &TextGrid, report: &mut ValidationReport) {
    let mut seen_names: HashMap<&str, usize> = HashMap::new();

    for (index, tier) in grid.tiers().iter().enumerate() {
        let context = IssueContext::Tier {
            index,
            name: tier.name().to_string(),
        };
        if tier.name().is_empty() {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyTierName,
                "Empty tier name",
                context,
            ));
        } else if let Some(first) = seen_names.get(tier.name()) {
            // Lookup by name only ever finds the first one.
            report.add(ValidationIssue::warning(
                IssueCode::DuplicateTierName,
                format!(
                    "Duplicate tier name '{}' (first used by tier {})",
                    tier.name(),
                    first
                ),
                context,
            ));
        } else {
            seen_names.insert(tier.name(), index);
        }
    }
}

fn validate_intervals(tier: &IntervalTier, report: &mut ValidationReport) {
    let ranged = tier.xmin().is_finite() && tier.xmax().is_finite();

    for (index, interval) in tier.intervals().iter().enumerate() {
        let context = IssueContext::Interval {
            tier: tier.name().to_string(),
            index,
        };

        if !interval.xmin.is_finite() || !interval.xmax.is_finite() {
            report.add(ValidationIssue::error(
                IssueCode::NonFiniteTime,
                format!("Non-finite interval [{}, {}]", interval.xmin, interval.xmax),
                context,
            ));
            continue;
        }

        if interval.xmin > interval.xmax {
            report.add(ValidationIssue::warning(
                IssueCode::InvertedInterval,
                format!(
                    "Interval '{}' ends at {} before it starts at {}",
                    interval.text, interval.xmax, interval.xmin
                ),
                context.clone(),
            ));
        }

        let low = interval.xmin.min(interval.xmax);
        let high = interval.xmin.max(interval.xmax);
        if ranged && (low < tier.xmin() || high > tier.xmax()) {
            report.add(ValidationIssue::error(
                IssueCode::ItemOutOfTierBounds,
                format!(
                    "Interval [{}, {}] lies outside tier range [{}, {}]",
                    interval.xmin,
                    interval.xmax,
                    tier.xmin(),
                    tier.xmax()
                ),
                context,
            ));
        }
    }

    for (first, second) in tier.overlapping() {
        let a = &tier.intervals()[first];
        let b = &tier.intervals()[second];
        let kind = if a.xmax < b.xmin { "gap" } else { "overlap" };
        report.add(ValidationIssue::warning(
            IssueCode::NonContiguousIntervals,
            format!(
                "{} between interval {} ending at {} and interval {} starting at {}",
                kind, first, a.xmax, second, b.xmin
            ),
            IssueContext::Interval {
                tier: tier.name().to_string(),
                index: second,
            },
        ));
    }
}

fn validate_points(tier: &PointTier, report: &mut ValidationReport) {
    let ranged = tier.xmin().is_finite() && tier.xmax().is_finite();

    for (index, point) in tier.points().iter().enumerate() {
        let context = IssueContext::Point {
            tier: tier.name().to_string(),
            index,
        };

        if !point.value.is_finite() {
            report.add(ValidationIssue::error(
                IssueCode::NonFiniteTime,
                format!("Non-finite point time {}", point.value),
                context,
            ));
            continue;
        }

        if ranged && (point.value < tier.xmin() || point.value > tier.xmax()) {
            report.add(ValidationIssue::error(
                IssueCode::ItemOutOfTierBounds,
                format!(
                    "Point {} lies outside tier range [{}, {}]",
                    point.value,
                    tier.xmin(),
                    tier.xmax()
                ),
                context,
            ));
        }
    }

    for (first, second) in tier.overlapping() {
        report.add(ValidationIssue::warning(
            IssueCode::DuplicatePointTime,
            format!(
                "Points {} and {} share time {}",
                first,
                second,
                tier.points()[second].value
            ),
            IssueContext::Point {
                tier: tier.name().to_string(),
                index: second,
            },
        ));
    }
}

fn finish(mut report: ValidationReport, opts: &ValidateOptions) -> ValidationReport {
    if opts.strict {
        for issue in &mut report.issues {
            issue.severity = Severity::Error;
        }
    }
    report
}
