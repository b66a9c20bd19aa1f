//! HTK-style label (`.lab`) file reader and writer.
//!
//! Each non-blank line is `start end label...`, whitespace separated. The
//! label is everything after the second field, rejoined with single spaces.
//!
//! ```text
//! 0.0000000 0.3100000 sil
//! 0.3100000 0.5200000 hh
//! ```
//!
//! The number of decimals in the first line's end time becomes the lab's
//! precision and is used for every time when writing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::lab::{Annotation, Lab, DEFAULT_LAB_PRECISION};
use super::lexer::UTF8_BOM;
use super::output::{self, WriteOptions};
use crate::error::LabgridError;

/// File extension used when writing into a directory.
pub const LAB_EXTENSION: &str = "lab";

/// Reads a lab file, naming the result after the file stem.
///
/// The file must be UTF-8. A leading byte-order mark is skipped.
pub fn read_lab(path: &Path) -> Result<Lab, LabgridError> {
    let bytes = fs::read(path)?;
    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(&bytes[..]);
    let content = std::str::from_utf8(bytes).map_err(|e| LabgridError::UnsupportedEncoding {
        detail: format!("lab file {} is not UTF-8: {e}", path.display()),
    })?;
    parse_lab(content, &output::file_stem(path), path)
}

/// Parses lab content from a string.
///
/// Errors report the path as `<string>`.
pub fn from_lab_str(content: &str, name: &str) -> Result<Lab, LabgridError> {
    parse_lab(content, name, Path::new("<string>"))
}

/// Serializes a lab with fixed-point times at its precision.
pub fn to_lab_string(lab: &Lab) -> String {
    lab.to_string()
}

/// Writes a lab to `path` and returns the file actually written.
///
/// See [`output::resolve_destination`] for how `path` is interpreted.
pub fn write_lab(path: &Path, lab: &Lab, opts: &WriteOptions) -> Result<PathBuf, LabgridError> {
    let destination = output::resolve_destination(path, &lab.name, LAB_EXTENSION, opts)?;
    output::write_bytes(&destination, to_lab_string(lab).as_bytes())?;
    Ok(destination)
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = usize::from(self.precision);
        for annotation in &self.annotations {
            writeln!(
                f,
                "{:.*} {:.*} {}",
                precision, annotation.start, precision, annotation.end, annotation.label
            )?;
        }
        Ok(())
    }
}

fn parse_lab(content: &str, name: &str, path: &Path) -> Result<Lab, LabgridError> {
    let mut lab = Lab::new(name, DEFAULT_LAB_PRECISION);
    let mut precision_set = false;

    for (index, line) in content.lines().enumerate() {
        let line_num = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 3 {
            return Err(LabgridError::MalformedLabFile {
                path: path.to_path_buf(),
                line: line_num,
                message: format!(
                    "expected 'start end label', found {} field(s)",
                    fields.len()
                ),
            });
        }

        let start = parse_time(fields[0], "start", path, line_num)?;
        let end = parse_time(fields[1], "end", path, line_num)?;

        if !precision_set {
            lab.precision = precision_of(fields[1]);
            precision_set = true;
        }

        lab.annotations
            .push(Annotation::new(start, end, fields[2..].join(" ")));
    }

    tracing::debug!(
        name,
        annotations = lab.annotations.len(),
        precision = lab.precision,
        "parsed lab file"
    );
    Ok(lab)
}

fn parse_time(raw: &str, field: &str, path: &Path, line: usize) -> Result<f64, LabgridError> {
    raw.parse::<f64>().map_err(|_| LabgridError::MalformedLabFile {
        path: path.to_path_buf(),
        line,
        message: format!("invalid {field} time '{raw}'"),
    })
}

/// Digits after the decimal point, or the default when there is none.
fn precision_of(raw: &str) -> u8 {
    match raw.split_once('.') {
        Some((_, fraction)) => {
            let digits = fraction.chars().take_while(char::is_ascii_digit).count();
            u8::try_from(digits).unwrap_or(u8::MAX)
        }
        None => DEFAULT_LAB_PRECISION,
    }
}
