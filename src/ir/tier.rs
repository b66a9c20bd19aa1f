//! Interval and point tiers.
//!
//! A tier is a named track over a declared time range `[xmin, xmax]`. The two
//! Praat tier classes are modelled as separate structs, [`IntervalTier`] and
//! [`PointTier`], and unified by the [`Tier`] sum type. Operations that only
//! make sense for one variant return [`LabgridError::TierKindMismatch`] when
//! called on the other.
//!
//! # Invariants
//!
//! - Every mutation that adds items leaves the sequence sorted ascending by
//!   item start (interval `xmin`, point `value`). The sort is stable, so items
//!   with equal starts keep their insertion order.
//! - With validation enabled (the [`EditOptions`] default), items must lie
//!   within the tier range, and a bound may not be moved past an existing item.
//!   A rejected call leaves the tier unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::point::Point;
use crate::error::LabgridError;

/// The two tier classes a TextGrid can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierKind {
    /// A tier of [`Interval`]s (`IntervalTier`).
    Interval,
    /// A tier of [`Point`]s (`TextTier`).
    Point,
}

impl TierKind {
    /// Returns the Praat class name used in TextGrid files.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierKind::Interval => "IntervalTier",
            TierKind::Point => "TextTier",
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierKind {
    type Err = LabgridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IntervalTier" => Ok(TierKind::Interval),
            "TextTier" => Ok(TierKind::Point),
            other => Err(LabgridError::UnknownTierType(other.to_string())),
        }
    }
}

/// Options for tier and TextGrid mutators.
#[derive(Clone, Copy, Debug)]
pub struct EditOptions {
    /// Check bounds before mutating. Defaults to `true`; disable only for
    /// trusted bulk construction, nothing re-validates later.
    pub validate: bool,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}

impl EditOptions {
    /// Options with validation disabled.
    pub fn unchecked() -> Self {
        Self { validate: false }
    }
}

/// A named tier of labeled intervals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalTier {
    name: String,
    xmin: f64,
    xmax: f64,
    #[serde(default)]
    intervals: Vec<Interval>,
}

impl IntervalTier {
    /// Creates an empty interval tier over `[xmin, xmax]`.
    pub fn new(name: impl Into<String>, xmin: f64, xmax: f64) -> Self {
        Self {
            name: name.into(),
            xmin,
            xmax,
            intervals: Vec::new(),
        }
    }

    /// Builds a tier from parsed parts, keeping the file order of intervals.
    pub(crate) fn from_parts(name: String, xmin: f64, xmax: f64, intervals: Vec<Interval>) -> Self {
        Self {
            name,
            xmin,
            xmax,
            intervals,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Returns `xmax - xmin` of the tier range.
    pub fn duration(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_intervals(self) -> Vec<Interval> {
        self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sets the tier start.
    ///
    /// # Errors
    /// With validation enabled, fails with [`LabgridError::BoundsViolation`]
    /// if `xmin` is greater than the smallest interval start.
    pub fn set_xmin(&mut self, xmin: f64, opts: &EditOptions) -> Result<(), LabgridError> {
        if opts.validate {
            if let Some(first) = self.intervals.iter().map(|i| i.xmin).reduce(f64::min) {
                if xmin > first {
                    return Err(self.violation(format!(
                        "cannot set xmin to {xmin}: an interval starts at {first}"
                    )));
                }
            }
        }
        self.xmin = xmin;
        Ok(())
    }

    /// Sets the tier end.
    ///
    /// # Errors
    /// With validation enabled, fails with [`LabgridError::BoundsViolation`]
    /// if `xmax` is smaller than the largest interval end.
    pub fn set_xmax(&mut self, xmax: f64, opts: &EditOptions) -> Result<(), LabgridError> {
        if opts.validate {
            if let Some(last) = self.intervals.iter().map(|i| i.xmax).reduce(f64::max) {
                if xmax < last {
                    return Err(self.violation(format!(
                        "cannot set xmax to {xmax}: an interval ends at {last}"
                    )));
                }
            }
        }
        self.xmax = xmax;
        Ok(())
    }

    /// Appends an interval and re-sorts by `xmin`.
    pub fn push_interval(
        &mut self,
        interval: Interval,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        if opts.validate {
            self.check_interval(&interval)?;
        }
        self.intervals.push(interval);
        self.sort();
        Ok(())
    }

    /// Appends several intervals and re-sorts by `xmin`.
    ///
    /// Every interval is checked before any is added.
    pub fn push_intervals(
        &mut self,
        intervals: impl IntoIterator<Item = Interval>,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        let intervals: Vec<Interval> = intervals.into_iter().collect();
        if opts.validate {
            for interval in &intervals {
                self.check_interval(interval)?;
            }
        }
        self.intervals.extend(intervals);
        self.sort();
        Ok(())
    }

    /// Replaces all intervals and sorts them by `xmin`.
    pub fn set_intervals(
        &mut self,
        intervals: Vec<Interval>,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        if opts.validate {
            for interval in &intervals {
                self.check_interval(interval)?;
            }
        }
        self.intervals = intervals;
        self.sort();
        Ok(())
    }

    /// Returns index pairs `(i, i + 1)` of adjacent intervals that do not meet
    /// exactly, i.e. where `intervals[i].xmax != intervals[i + 1].xmin`.
    ///
    /// Despite the name this flags gaps as well as overlaps: any break in
    /// contiguity is reported.
    pub fn overlapping(&self) -> Vec<(usize, usize)> {
        self.intervals
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0].xmax != pair[1].xmin)
            .map(|(i, _)| (i, i + 1))
            .collect()
    }

    /// Returns true if intervals are in ascending `xmin` order.
    pub fn is_sorted(&self) -> bool {
        self.intervals.windows(2).all(|pair| pair[0].xmin <= pair[1].xmin)
    }

    fn check_interval(&self, interval: &Interval) -> Result<(), LabgridError> {
        // Written so that NaN endpoints are rejected too.
        if interval.xmin >= self.xmin && interval.xmax <= self.xmax {
            return Ok(());
        }
        Err(self.violation(format!(
            "interval [{}, {}] '{}' lies outside tier range [{}, {}]",
            interval.xmin, interval.xmax, interval.text, self.xmin, self.xmax
        )))
    }

    fn violation(&self, message: String) -> LabgridError {
        LabgridError::BoundsViolation {
            tier: self.name.clone(),
            message,
        }
    }

    fn sort(&mut self) {
        self.intervals.sort_by(|a, b| a.xmin.total_cmp(&b.xmin));
    }
}

/// A named tier of labeled points (Praat `TextTier`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointTier {
    name: String,
    xmin: f64,
    xmax: f64,
    #[serde(default)]
    points: Vec<Point>,
}

impl PointTier {
    /// Creates an empty point tier over `[xmin, xmax]`.
    pub fn new(name: impl Into<String>, xmin: f64, xmax: f64) -> Self {
        Self {
            name: name.into(),
            xmin,
            xmax,
            points: Vec::new(),
        }
    }

    /// Builds a tier from parsed parts, keeping the file order of points.
    pub(crate) fn from_parts(name: String, xmin: f64, xmax: f64, points: Vec<Point>) -> Self {
        Self {
            name,
            xmin,
            xmax,
            points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn duration(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sets the tier start, refusing (when validating) to exclude a point.
    pub fn set_xmin(&mut self, xmin: f64, opts: &EditOptions) -> Result<(), LabgridError> {
        if opts.validate {
            if let Some(first) = self.points.iter().map(|p| p.value).reduce(f64::min) {
                if xmin > first {
                    return Err(self.violation(format!(
                        "cannot set xmin to {xmin}: a point lies at {first}"
                    )));
                }
            }
        }
        self.xmin = xmin;
        Ok(())
    }

    /// Sets the tier end, refusing (when validating) to exclude a point.
    pub fn set_xmax(&mut self, xmax: f64, opts: &EditOptions) -> Result<(), LabgridError> {
        if opts.validate {
            if let Some(last) = self.points.iter().map(|p| p.value).reduce(f64::max) {
                if xmax < last {
                    return Err(self.violation(format!(
                        "cannot set xmax to {xmax}: a point lies at {last}"
                    )));
                }
            }
        }
        self.xmax = xmax;
        Ok(())
    }

    /// Appends a point and re-sorts by value.
    pub fn push_point(&mut self, point: Point, opts: &EditOptions) -> Result<(), LabgridError> {
        if opts.validate {
            self.check_point(&point)?;
        }
        self.points.push(point);
        self.sort();
        Ok(())
    }

    /// Appends several points and re-sorts by value. All-or-nothing.
    pub fn push_points(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        let points: Vec<Point> = points.into_iter().collect();
        if opts.validate {
            for point in &points {
                self.check_point(point)?;
            }
        }
        self.points.extend(points);
        self.sort();
        Ok(())
    }

    /// Replaces all points and sorts them by value.
    pub fn set_points(&mut self, points: Vec<Point>, opts: &EditOptions) -> Result<(), LabgridError> {
        if opts.validate {
            for point in &points {
                self.check_point(point)?;
            }
        }
        self.points = points;
        self.sort();
        Ok(())
    }

    /// Returns index pairs `(i, i + 1)` of adjacent points with equal values.
    pub fn overlapping(&self) -> Vec<(usize, usize)> {
        self.points
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[0].value == pair[1].value)
            .map(|(i, _)| (i, i + 1))
            .collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.points.windows(2).all(|pair| pair[0].value <= pair[1].value)
    }

    fn check_point(&self, point: &Point) -> Result<(), LabgridError> {
        if point.value >= self.xmin && point.value <= self.xmax {
            return Ok(());
        }
        Err(self.violation(format!(
            "point {} '{}' lies outside tier range [{}, {}]",
            point.value, point.mark, self.xmin, self.xmax
        )))
    }

    fn violation(&self, message: String) -> LabgridError {
        LabgridError::BoundsViolation {
            tier: self.name.clone(),
            message,
        }
    }

    fn sort(&mut self) {
        self.points.sort_by(|a, b| a.value.total_cmp(&b.value));
    }
}

/// A tier of either kind.
///
/// Serialized with a `class` tag holding the Praat class name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum Tier {
    #[serde(rename = "IntervalTier")]
    Interval(IntervalTier),
    #[serde(rename = "TextTier")]
    Point(PointTier),
}

impl From<IntervalTier> for Tier {
    fn from(tier: IntervalTier) -> Self {
        Tier::Interval(tier)
    }
}

impl From<PointTier> for Tier {
    fn from(tier: PointTier) -> Self {
        Tier::Point(tier)
    }
}

impl Tier {
    pub fn kind(&self) -> TierKind {
        match self {
            Tier::Interval(_) => TierKind::Interval,
            Tier::Point(_) => TierKind::Point,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Tier::Interval(tier) => tier.name(),
            Tier::Point(tier) => tier.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Tier::Interval(tier) => tier.set_name(name),
            Tier::Point(tier) => tier.set_name(name),
        }
    }

    pub fn xmin(&self) -> f64 {
        match self {
            Tier::Interval(tier) => tier.xmin(),
            Tier::Point(tier) => tier.xmin(),
        }
    }

    pub fn xmax(&self) -> f64 {
        match self {
            Tier::Interval(tier) => tier.xmax(),
            Tier::Point(tier) => tier.xmax(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.xmax() - self.xmin()
    }

    /// Number of intervals or points in the tier.
    pub fn len(&self) -> usize {
        match self {
            Tier::Interval(tier) => tier.len(),
            Tier::Point(tier) => tier.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_xmin(&mut self, xmin: f64, opts: &EditOptions) -> Result<(), LabgridError> {
        match self {
            Tier::Interval(tier) => tier.set_xmin(xmin, opts),
            Tier::Point(tier) => tier.set_xmin(xmin, opts),
        }
    }

    pub fn set_xmax(&mut self, xmax: f64, opts: &EditOptions) -> Result<(), LabgridError> {
        match self {
            Tier::Interval(tier) => tier.set_xmax(xmax, opts),
            Tier::Point(tier) => tier.set_xmax(xmax, opts),
        }
    }

    /// See [`IntervalTier::overlapping`] and [`PointTier::overlapping`].
    pub fn overlapping(&self) -> Vec<(usize, usize)> {
        match self {
            Tier::Interval(tier) => tier.overlapping(),
            Tier::Point(tier) => tier.overlapping(),
        }
    }

    pub fn is_sorted(&self) -> bool {
        match self {
            Tier::Interval(tier) => tier.is_sorted(),
            Tier::Point(tier) => tier.is_sorted(),
        }
    }

    pub fn as_interval_tier(&self) -> Option<&IntervalTier> {
        match self {
            Tier::Interval(tier) => Some(tier),
            Tier::Point(_) => None,
        }
    }

    pub fn as_interval_tier_mut(&mut self) -> Option<&mut IntervalTier> {
        match self {
            Tier::Interval(tier) => Some(tier),
            Tier::Point(_) => None,
        }
    }

    pub fn as_point_tier(&self) -> Option<&PointTier> {
        match self {
            Tier::Point(tier) => Some(tier),
            Tier::Interval(_) => None,
        }
    }

    pub fn as_point_tier_mut(&mut self) -> Option<&mut PointTier> {
        match self {
            Tier::Point(tier) => Some(tier),
            Tier::Interval(_) => None,
        }
    }

    /// Returns the intervals of an interval tier.
    ///
    /// # Errors
    /// [`LabgridError::TierKindMismatch`] on a point tier.
    pub fn intervals(&self) -> Result<&[Interval], LabgridError> {
        match self {
            Tier::Interval(tier) => Ok(tier.intervals()),
            Tier::Point(_) => Err(self.mismatch(TierKind::Interval)),
        }
    }

    /// Returns the points of a point tier.
    ///
    /// # Errors
    /// [`LabgridError::TierKindMismatch`] on an interval tier.
    pub fn points(&self) -> Result<&[Point], LabgridError> {
        match self {
            Tier::Point(tier) => Ok(tier.points()),
            Tier::Interval(_) => Err(self.mismatch(TierKind::Point)),
        }
    }

    pub fn push_interval(
        &mut self,
        interval: Interval,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        self.interval_tier_mut()?.push_interval(interval, opts)
    }

    pub fn push_intervals(
        &mut self,
        intervals: impl IntoIterator<Item = Interval>,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        self.interval_tier_mut()?.push_intervals(intervals, opts)
    }

    pub fn set_intervals(
        &mut self,
        intervals: Vec<Interval>,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        self.interval_tier_mut()?.set_intervals(intervals, opts)
    }

    pub fn push_point(&mut self, point: Point, opts: &EditOptions) -> Result<(), LabgridError> {
        self.point_tier_mut()?.push_point(point, opts)
    }

    pub fn push_points(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        opts: &EditOptions,
    ) -> Result<(), LabgridError> {
        self.point_tier_mut()?.push_points(points, opts)
    }

    pub fn set_points(&mut self, points: Vec<Point>, opts: &EditOptions) -> Result<(), LabgridError> {
        self.point_tier_mut()?.set_points(points, opts)
    }

    fn interval_tier_mut(&mut self) -> Result<&mut IntervalTier, LabgridError> {
        let mismatch = self.mismatch(TierKind::Interval);
        match self {
            Tier::Interval(tier) => Ok(tier),
            Tier::Point(_) => Err(mismatch),
        }
    }

    fn point_tier_mut(&mut self) -> Result<&mut PointTier, LabgridError> {
        let mismatch = self.mismatch(TierKind::Point);
        match self {
            Tier::Point(tier) => Ok(tier),
            Tier::Interval(_) => Err(mismatch),
        }
    }

    fn mismatch(&self, expected: TierKind) -> LabgridError {
        LabgridError::TierKindMismatch {
            expected,
            found: self.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_tier() -> IntervalTier {
        let mut tier = IntervalTier::new("words", 0.0, 3.0);
        tier.set_intervals(
            vec![
                Interval::new(2.0, 3.0, "c"),
                Interval::new(0.0, 1.0, "a"),
                Interval::new(1.0, 2.0, "b"),
            ],
            &EditOptions::default(),
        )
        .expect("intervals within bounds");
        tier
    }

    #[test]
    fn set_intervals_sorts_by_xmin() {
        let tier = words_tier();
        let texts: Vec<&str> = tier.intervals().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(tier.is_sorted());
    }

    #[test]
    fn push_interval_keeps_order() {
        let mut tier = IntervalTier::new("words", 0.0, 4.0);
        tier.push_interval(Interval::new(2.0, 4.0, "late"), &EditOptions::default())
            .expect("push late");
        tier.push_interval(Interval::new(0.0, 2.0, "early"), &EditOptions::default())
            .expect("push early");
        assert_eq!(tier.intervals()[0].text, "early");
        assert_eq!(tier.intervals()[1].text, "late");
    }

    #[test]
    fn push_interval_outside_bounds_is_rejected() {
        let mut tier = words_tier();
        let before = tier.clone();
        let err = tier
            .push_interval(Interval::new(2.5, 3.5, "over"), &EditOptions::default())
            .unwrap_err();
        assert!(matches!(err, LabgridError::BoundsViolation { .. }));
        assert_eq!(tier, before);
    }

    #[test]
    fn push_intervals_is_all_or_nothing() {
        let mut tier = IntervalTier::new("words", 0.0, 2.0);
        let err = tier
            .push_intervals(
                vec![Interval::new(0.0, 1.0, "ok"), Interval::new(1.0, 5.0, "bad")],
                &EditOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, LabgridError::BoundsViolation { .. }));
        assert!(tier.is_empty());
    }

    #[test]
    fn unchecked_push_skips_validation() {
        let mut tier = IntervalTier::new("words", 0.0, 1.0);
        tier.push_interval(Interval::new(5.0, 6.0, "far"), &EditOptions::unchecked())
            .expect("validation disabled");
        assert_eq!(tier.len(), 1);
    }

    #[test]
    fn set_xmin_refuses_to_cut_off_intervals() {
        let mut tier = words_tier();
        let err = tier.set_xmin(0.5, &EditOptions::default()).unwrap_err();
        assert!(matches!(err, LabgridError::BoundsViolation { .. }));
        assert_eq!(tier.xmin(), 0.0);

        tier.set_xmin(-1.0, &EditOptions::default())
            .expect("growing the range is allowed");
        assert_eq!(tier.xmin(), -1.0);

        tier.set_xmin(0.5, &EditOptions::unchecked())
            .expect("forced shrink");
        assert_eq!(tier.xmin(), 0.5);
    }

    #[test]
    fn set_xmax_refuses_to_cut_off_intervals() {
        let mut tier = words_tier();
        assert!(tier.set_xmax(2.5, &EditOptions::default()).is_err());
        tier.set_xmax(10.0, &EditOptions::default()).expect("grow");
        assert_eq!(tier.duration(), 10.0);
    }

    #[test]
    fn bounds_of_empty_tier_can_move_freely() {
        let mut tier = PointTier::new("tones", 0.0, 1.0);
        tier.set_xmin(0.8, &EditOptions::default()).expect("no points");
        tier.set_xmax(0.9, &EditOptions::default()).expect("no points");
        assert_eq!((tier.xmin(), tier.xmax()), (0.8, 0.9));
    }

    #[test]
    fn overlapping_flags_overlaps() {
        let mut tier = IntervalTier::new("t", 0.0, 1.0);
        tier.set_intervals(
            vec![Interval::new(0.0, 1.0, "a"), Interval::new(0.5, 1.0, "b")],
            &EditOptions::default(),
        )
        .expect("set");
        assert_eq!(tier.overlapping(), vec![(0, 1)]);
    }

    #[test]
    fn overlapping_flags_gaps() {
        let mut tier = IntervalTier::new("t", 0.0, 3.0);
        tier.set_intervals(
            vec![Interval::new(0.0, 1.0, "a"), Interval::new(2.0, 3.0, "b")],
            &EditOptions::default(),
        )
        .expect("set");
        assert_eq!(tier.overlapping(), vec![(0, 1)]);
    }

    #[test]
    fn overlapping_is_empty_for_contiguous_intervals() {
        let mut tier = IntervalTier::new("t", 0.0, 2.0);
        tier.set_intervals(
            vec![Interval::new(0.0, 1.0, "a"), Interval::new(1.0, 2.0, "b")],
            &EditOptions::default(),
        )
        .expect("set");
        assert!(tier.overlapping().is_empty());
        assert!(IntervalTier::new("empty", 0.0, 1.0).overlapping().is_empty());
    }

    #[test]
    fn point_overlapping_flags_equal_values() {
        let mut tier = PointTier::new("p", 0.0, 2.0);
        tier.set_points(
            vec![
                Point::new(0.5, "a"),
                Point::new(1.0, "b"),
                Point::new(1.0, "c"),
            ],
            &EditOptions::default(),
        )
        .expect("set");
        assert_eq!(tier.overlapping(), vec![(1, 2)]);
    }

    #[test]
    fn push_point_below_xmin_leaves_tier_unchanged() {
        let mut tier = PointTier::new("p", 1.0, 2.0);
        tier.push_point(Point::new(1.5, "in"), &EditOptions::default())
            .expect("push inside");
        let before = tier.points().to_vec();

        let err = tier
            .push_point(Point::new(0.5, "below"), &EditOptions::default())
            .unwrap_err();
        assert!(matches!(err, LabgridError::BoundsViolation { .. }));
        assert_eq!(tier.points(), before.as_slice());
    }

    #[test]
    fn push_points_sorts_by_value() {
        let mut tier = PointTier::new("p", 0.0, 3.0);
        tier.push_points(
            vec![Point::new(2.0, "b"), Point::new(1.0, "a")],
            &EditOptions::default(),
        )
        .expect("push");
        assert_eq!(tier.points()[0].mark, "a");
        assert!(tier.is_sorted());
    }

    #[test]
    fn cross_variant_calls_return_kind_mismatch() {
        let mut tier = Tier::from(PointTier::new("p", 0.0, 1.0));
        let err = tier
            .push_interval(Interval::new(0.0, 1.0, "x"), &EditOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LabgridError::TierKindMismatch {
                expected: TierKind::Interval,
                found: TierKind::Point
            }
        ));
        assert!(tier.intervals().is_err());
        assert!(tier.points().expect("point tier").is_empty());

        let mut tier = Tier::from(IntervalTier::new("i", 0.0, 1.0));
        assert!(matches!(
            tier.push_point(Point::new(0.5, "x"), &EditOptions::default()),
            Err(LabgridError::TierKindMismatch { .. })
        ));
    }

    #[test]
    fn tier_kind_parses_praat_class_names() {
        assert_eq!("IntervalTier".parse::<TierKind>().unwrap(), TierKind::Interval);
        assert_eq!("TextTier".parse::<TierKind>().unwrap(), TierKind::Point);
        assert!(matches!(
            "PointTier".parse::<TierKind>(),
            Err(LabgridError::UnknownTierType(_))
        ));
    }
}
