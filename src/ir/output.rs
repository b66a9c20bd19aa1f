//! Destination resolution and file writing shared by the TextGrid, lab and
//! JSON writers.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LabgridError;

/// Options for writing files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Replace an existing destination file instead of failing.
    pub overwrite: bool,
}

impl WriteOptions {
    pub fn overwrite() -> Self {
        Self { overwrite: true }
    }
}

/// Returns the file name of `path` without its final extension.
///
/// `"dir/utt01.TextGrid"` gives `"utt01"`. Paths with no file name give an
/// empty string.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Works out which file a writer should create.
///
/// * An existing directory, or a missing path with no extension, is treated
///   as a directory: it is created if needed and `<name>.<extension>` inside
///   it is the destination. That file is always recreated.
/// * Anything else is the destination file itself. Its parent directories
///   are created.
///
/// # Errors
/// [`LabgridError::FileExists`] if an explicit file path already exists and
/// `opts.overwrite` is false.
pub fn resolve_destination(
    path: &Path,
    name: &str,
    extension: &str,
    opts: &WriteOptions,
) -> Result<PathBuf, LabgridError> {
    let is_dir = path.is_dir() || (!path.exists() && path.extension().is_none());

    if is_dir {
        fs::create_dir_all(path)?;
        return Ok(path.join(format!("{name}.{extension}")));
    }

    if path.exists() && !opts.overwrite {
        return Err(LabgridError::FileExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(path.to_path_buf())
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), LabgridError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}
