//! In-memory model of Praat TextGrids and HTK label files, with their codecs.
//!
//! A [`TextGrid`] holds an ordered list of [`Tier`]s. A tier is either an
//! [`IntervalTier`] of labeled time spans or a [`PointTier`] of labeled
//! instants (Praat's `TextTier`). A [`Lab`] is the flat `start end label`
//! list used by HTK-style tools.
//!
//! # Design Principles
//!
//! 1. **Typed tiers**: the tier kind is part of the type, so asking a point
//!    tier for intervals is a [`crate::LabgridError::TierKindMismatch`], not a
//!    silent empty result.
//!
//! 2. **Validated edits**: adding items through the model checks them against
//!    the enclosing range unless [`EditOptions::unchecked`] is used.
//!
//! 3. **Permissive reads**: parsing enforces only what the format itself
//!    requires. Item placement and ordering are left to
//!    [`crate::validation`].
//!
//! # Example
//!
//! ```
//! use labgrid::ir::{EditOptions, Interval, IntervalTier, TextGrid};
//! use labgrid::ir::io_textgrid::{to_textgrid_string, TextGridFormat};
//!
//! let mut words = IntervalTier::new("words", 0.0, 1.0);
//! words.push_interval(Interval::new(0.0, 1.0, "hello"), &EditOptions::default())?;
//!
//! let mut grid = TextGrid::new("utt", 0.0, 1.0);
//! grid.push_tier(words.into(), &EditOptions::default())?;
//!
//! let text = to_textgrid_string(&grid, TextGridFormat::Short);
//! assert!(text.contains("\"hello\""));
//! # Ok::<(), labgrid::LabgridError>(())
//! ```

mod interval;
pub mod io_json;
pub mod io_lab;
pub mod io_textgrid;
mod lab;
pub mod lexer;
pub mod output;
mod point;
mod textgrid;
mod tier;

// Re-export core types for convenient access
pub use interval::Interval;
pub use lab::{Annotation, Lab, DEFAULT_LAB_PRECISION};
pub use output::WriteOptions;
pub use point::Point;
pub use textgrid::TextGrid;
pub use tier::{EditOptions, IntervalTier, PointTier, Tier, TierKind};
