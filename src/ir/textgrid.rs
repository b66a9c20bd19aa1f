//! The TextGrid aggregate.

use serde::{Deserialize, Serialize};

use super::tier::{EditOptions, Tier, TierKind};
use crate::error::LabgridError;

/// A Praat TextGrid: a global time range, a name, and an ordered list of tiers.
///
/// Tiers are expected to lie within `[xmin, xmax]`. The parser enforces this;
/// the plain setters do not, so call [`TextGrid::check_bounds`] (or
/// [`crate::validation::validate_textgrid`]) after editing bounds by hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextGrid {
    name: String,
    xmin: f64,
    xmax: f64,
    #[serde(default)]
    tiers: Vec<Tier>,
}

impl TextGrid {
    /// Creates a TextGrid with no tiers.
    pub fn new(name: impl Into<String>, xmin: f64, xmax: f64) -> Self {
        Self {
            name: name.into(),
            xmin,
            xmax,
            tiers: Vec::new(),
        }
    }

    pub(crate) fn from_parts(name: String, xmin: f64, xmax: f64, tiers: Vec<Tier>) -> Self {
        Self {
            name,
            xmin,
            xmax,
            tiers,
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

    pub fn set_xmin(&mut self, xmin: f64) {
        self.xmin = xmin;
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn set_xmax(&mut self, xmax: f64) {
        self.xmax = xmax;
    }

    pub fn duration(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Replaces all tiers without checking them against the global range.
    pub fn set_tiers(&mut self, tiers: Vec<Tier>) {
        self.tiers = tiers;
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn has_interval_tier(&self) -> bool {
        self.tiers.iter().any(|t| t.kind() == TierKind::Interval)
    }

    pub fn has_point_tier(&self) -> bool {
        self.tiers.iter().any(|t| t.kind() == TierKind::Point)
    }

    /// Returns the first tier with the given name.
    pub fn tier(&self, name: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.name() == name)
    }

    pub fn tier_mut(&mut self, name: &str) -> Option<&mut Tier> {
        self.tiers.iter_mut().find(|t| t.name() == name)
    }

    pub fn tier_at(&self, index: usize) -> Option<&Tier> {
        self.tiers.get(index)
    }

    pub fn tier_at_mut(&mut self, index: usize) -> Option<&mut Tier> {
        self.tiers.get_mut(index)
    }

    /// Replaces every tier named `name` with a copy of `tier`.
    ///
    /// # Errors
    /// [`LabgridError::TierNotFound`] if no tier has that name.
    pub fn set_tier(&mut self, name: &str, tier: Tier) -> Result<(), LabgridError> {
        let mut replaced = false;
        for slot in self.tiers.iter_mut().filter(|t| t.name() == name) {
            *slot = tier.clone();
            replaced = true;
        }
        if replaced {
            Ok(())
        } else {
            Err(LabgridError::TierNotFound(name.to_string()))
        }
    }

    /// Replaces the tier at `index`.
    pub fn set_tier_at(&mut self, index: usize, tier: Tier) -> Result<(), LabgridError> {
        let len = self.tiers.len();
        let slot = self
            .tiers
            .get_mut(index)
            .ok_or(LabgridError::IndexOutOfRange { index, len })?;
        *slot = tier;
        Ok(())
    }

    /// Appends a tier.
    ///
    /// # Errors
    /// With validation enabled, [`LabgridError::TierBounds`] if the tier range
    /// is not inside the TextGrid range. The grid is left unchanged.
    pub fn push_tier(&mut self, tier: Tier, opts: &EditOptions) -> Result<(), LabgridError> {
        if opts.validate {
            self.check_tier(&tier)?;
        }
        self.tiers.push(tier);
        Ok(())
    }

    /// Removes and returns the first tier with the given name.
    pub fn remove_tier(&mut self, name: &str) -> Option<Tier> {
        let index = self.tiers.iter().position(|t| t.name() == name)?;
        Some(self.tiers.remove(index))
    }

    /// Checks that every tier lies within the global range.
    ///
    /// Returns the first offending tier as [`LabgridError::TierBounds`].
    pub fn check_bounds(&self) -> Result<(), LabgridError> {
        self.tiers.iter().try_for_each(|tier| self.check_tier(tier))
    }

    pub(crate) fn check_tier(&self, tier: &Tier) -> Result<(), LabgridError> {
        check_tier_range(tier.name(), tier.xmin(), tier.xmax(), self.xmin, self.xmax)
    }
}

/// Checks a tier range `[xmin, xmax]` against the enclosing grid range.
pub(crate) fn check_tier_range(
    name: &str,
    xmin: f64,
    xmax: f64,
    grid_xmin: f64,
    grid_xmax: f64,
) -> Result<(), LabgridError> {
    if xmin < grid_xmin {
        return Err(LabgridError::TierBounds {
            tier: name.to_string(),
            bound: "xmin",
            value: xmin,
            limit: grid_xmin,
        });
    }
    if xmax > grid_xmax {
        return Err(LabgridError::TierBounds {
            tier: name.to_string(),
            bound: "xmax",
            value: xmax,
            limit: grid_xmax,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Interval, IntervalTier, Point, PointTier};

    fn sample_grid() -> TextGrid {
        let mut words = IntervalTier::new("words", 0.0, 10.0);
        words
            .push_interval(Interval::new(0.0, 10.0, "Interval"), &EditOptions::default())
            .expect("push interval");
        let mut tones = PointTier::new("tones", 0.0, 10.0);
        tones
            .push_point(Point::new(5.0, "Point"), &EditOptions::default())
            .expect("push point");

        let mut grid = TextGrid::new("TextGrid", 0.0, 10.0);
        grid.push_tier(words.into(), &EditOptions::default())
            .expect("push words");
        grid.push_tier(tones.into(), &EditOptions::default())
            .expect("push tones");
        grid
    }

    #[test]
    fn test_accessors() {
        let grid = sample_grid();
        assert_eq!(grid.xmin(), 0.0);
        assert_eq!(grid.xmax(), 10.0);
        assert_eq!(grid.name(), "TextGrid");
        assert_eq!(grid.len(), 2);
        assert!(grid.has_interval_tier());
        assert!(grid.has_point_tier());
        assert_eq!(grid.tier("words").map(Tier::kind), Some(TierKind::Interval));
        assert_eq!(grid.tier_at(1).map(Tier::kind), Some(TierKind::Point));
        assert!(grid.tier("missing").is_none());
        assert!(grid.tier_at(2).is_none());
    }

    #[test]
    fn test_mutators() {
        let mut grid = sample_grid();
        grid.set_xmin(10.0);
        grid.set_xmax(20.0);
        grid.set_name("NewTextGrid");
        grid.set_tiers(vec![PointTier::new("NewPointTier", 10.0, 20.0).into()]);

        assert_eq!(grid.duration(), 10.0);
        assert_eq!(grid.name(), "NewTextGrid");
        assert!(!grid.has_interval_tier());
        assert!(grid.check_bounds().is_ok());
    }

    #[test]
    fn test_set_tier_by_name_and_index() {
        let mut grid = sample_grid();
        grid.set_tier("tones", IntervalTier::new("tones", 0.0, 5.0).into())
            .expect("replace tones");
        assert_eq!(grid.tier_at(1).map(Tier::kind), Some(TierKind::Interval));

        let err = grid
            .set_tier("nope", IntervalTier::new("nope", 0.0, 1.0).into())
            .unwrap_err();
        assert!(matches!(err, LabgridError::TierNotFound(_)));

        let err = grid
            .set_tier_at(5, IntervalTier::new("x", 0.0, 1.0).into())
            .unwrap_err();
        assert!(matches!(err, LabgridError::IndexOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn test_push_tier_checks_global_bounds() {
        let mut grid = sample_grid();
        let err = grid
            .push_tier(IntervalTier::new("late", 5.0, 12.0).into(), &EditOptions::default())
            .unwrap_err();
        assert!(matches!(err, LabgridError::TierBounds { bound: "xmax", .. }));
        assert_eq!(grid.len(), 2);

        grid.push_tier(IntervalTier::new("late", 5.0, 12.0).into(), &EditOptions::unchecked())
            .expect("unchecked push");
        assert!(matches!(
            grid.check_bounds(),
            Err(LabgridError::TierBounds { .. })
        ));
    }

    #[test]
    fn test_remove_tier() {
        let mut grid = sample_grid();
        let removed = grid.remove_tier("words").expect("tier exists");
        assert_eq!(removed.name(), "words");
        assert_eq!(grid.len(), 1);
        assert!(grid.remove_tier("words").is_none());
    }
}
