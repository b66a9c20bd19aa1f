//! Labgrid: readers, writers and a validating model for Praat TextGrid and
//! HTK-style label files.
//!
//! # Modules
//!
//! - [`ir`]: TextGrid, tier, interval, point and lab types plus their codecs
//! - [`validation`]: Structural checks reported as errors and warnings
//! - [`error`]: Error types for labgrid operations
//!
//! # Logging
//!
//! Parsing and writing emit [`tracing`] events (`debug` for progress, `warn`
//! for lossy or degenerate input such as Latin-1 decoding or `<absent>`
//! tiers). The library never installs a subscriber.

pub mod error;
pub mod ir;
pub mod validation;

pub use error::LabgridError;
