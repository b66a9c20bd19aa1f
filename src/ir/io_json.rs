//! JSON serialization of a [`TextGrid`].
//!
//! Tiers are tagged by `class` with the Praat class names, so a grid reads
//! naturally next to its TextGrid file:
//!
//! ```json
//! {"name": "utt", "xmin": 0.0, "xmax": 1.0,
//!  "tiers": [{"class": "IntervalTier", "name": "words", "xmin": 0.0,
//!             "xmax": 1.0, "intervals": [{"xmin": 0.0, "xmax": 1.0, "text": "hi"}]}]}
//! ```
//!
//! Deserialized grids are not checked; run
//! [`crate::validation::validate_textgrid`] on them.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::textgrid::TextGrid;
use crate::error::LabgridError;

/// Reads a TextGrid from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_json(path: &Path) -> Result<TextGrid, LabgridError> {
    let file = File::open(path).map_err(LabgridError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| LabgridError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a TextGrid to a JSON file, replacing any existing file.
pub fn write_json(path: &Path, grid: &TextGrid) -> Result<(), LabgridError> {
    let file = File::create(path).map_err(LabgridError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, grid).map_err(|source| LabgridError::JsonWrite {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), "wrote TextGrid JSON");
    Ok(())
}

pub fn from_json_str(json: &str) -> Result<TextGrid, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn to_json_string(grid: &TextGrid) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(grid)
}
