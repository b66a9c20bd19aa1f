//! Praat TextGrid reader and writer.
//!
//! The Praat text format is described at
//! <https://www.fon.hum.uva.nl/praat/manual/TextGrid_file_formats.html>.
//! Both the long form (field names, indentation, 1-based item indices) and
//! the short form (bare values, one per line) are read through the same
//! positional parser, because [`lexer::preprocess`] reduces either form to
//! the short-form token sequence.
//!
//! # Parse protocol
//!
//! ```text
//! "ooTextFile" "TextGrid" xmin xmax <exists|absent>
//!     [tier_count { class name xmin xmax item_count { item } }]
//! ```
//!
//! where an `IntervalTier` item is `xmin xmax "text"` and a `TextTier` item
//! is `number "mark"`. `<absent>` ends the grid with zero tiers. Tier ranges
//! must lie within the global range. A failed parse discards everything
//! built so far.
//!
//! # Output
//!
//! Floats are written in their shortest round-trippable decimal form and all
//! text fields are quoted verbatim, so `parse(write(grid)) == grid` for either
//! form as long as texts contain no lone `"` characters.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::interval::Interval;
use super::lexer::{self, TokenQueue};
use super::output::{self, WriteOptions};
use super::point::Point;
use super::textgrid::{check_tier_range, TextGrid};
use super::tier::{IntervalTier, PointTier, Tier, TierKind};
use crate::error::LabgridError;

/// File extension used when writing into a directory.
pub const TEXTGRID_EXTENSION: &str = "TextGrid";

const FILE_TYPE: &str = "ooTextFile";
const OBJECT_CLASS: &str = "TextGrid";

/// Which of the two text serializations to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextGridFormat {
    /// Labeled fields with tab indentation and 1-based indices.
    #[default]
    Long,
    /// Bare values, one per line.
    Short,
}

/// Reads a TextGrid file in either text form.
///
/// The grid is named after the file stem.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use labgrid::ir::io_textgrid::read_textgrid;
///
/// let grid = read_textgrid(Path::new("utterance.TextGrid"))?;
/// println!("{} tiers", grid.len());
/// # Ok::<(), labgrid::LabgridError>(())
/// ```
pub fn read_textgrid(path: &Path) -> Result<TextGrid, LabgridError> {
    let bytes = fs::read(path).map_err(LabgridError::Io)?;
    from_textgrid_slice(&bytes, &output::file_stem(path))
}

/// Parses TextGrid bytes, detecting the encoding.
pub fn from_textgrid_slice(bytes: &[u8], name: &str) -> Result<TextGrid, LabgridError> {
    let (mut queue, _) = lexer::preprocess(bytes)?;
    parse_tokens(&mut queue, name)
}

/// Parses TextGrid text that has already been decoded.
pub fn from_textgrid_str(text: &str, name: &str) -> Result<TextGrid, LabgridError> {
    let mut queue = lexer::tokenize(text);
    parse_tokens(&mut queue, name)
}

/// Serializes a TextGrid in the requested form.
pub fn to_textgrid_string(grid: &TextGrid, format: TextGridFormat) -> String {
    match format {
        TextGridFormat::Long => to_long_string(grid),
        TextGridFormat::Short => to_short_string(grid),
    }
}

/// Writes a TextGrid to `path` and returns the file actually written.
///
/// If `path` is a directory (or has no extension) the file is
/// `<path>/<grid name>.TextGrid`, replacing any earlier output. An explicit
/// file path that already exists is only replaced when `opts.overwrite` is
/// set.
pub fn write_textgrid(
    path: &Path,
    grid: &TextGrid,
    format: TextGridFormat,
    opts: &WriteOptions,
) -> Result<PathBuf, LabgridError> {
    let destination = output::resolve_destination(path, grid.name(), TEXTGRID_EXTENSION, opts)?;
    output::write_bytes(&destination, to_textgrid_string(grid, format).as_bytes())?;
    Ok(destination)
}

fn parse_tokens(queue: &mut TokenQueue, name: &str) -> Result<TextGrid, LabgridError> {
    verify_header(queue)?;

    let xmin = queue.next_float("TextGrid xmin")?;
    let xmax = queue.next_float("TextGrid xmax")?;

    let status = queue.next_flag("tier status")?;
    match status.as_str() {
        "exists" => {}
        "absent" => {
            tracing::warn!(name, "tiers? <absent>: returning a TextGrid with no tiers");
            return Ok(TextGrid::from_parts(name.to_string(), xmin, xmax, Vec::new()));
        }
        _ => return Err(LabgridError::InvalidTierStatus(status)),
    }

    let tier_count = queue.next_count("tier count")?;
    let mut tiers = Vec::with_capacity(tier_count.min(queue.len()));
    for index in 0..tier_count {
        tiers.push(parse_tier(queue, index + 1, xmin, xmax)?);
    }

    Ok(TextGrid::from_parts(name.to_string(), xmin, xmax, tiers))
}

fn verify_header(queue: &mut TokenQueue) -> Result<(), LabgridError> {
    for expected in [FILE_TYPE, OBJECT_CLASS] {
        let token = queue.next_token("TextGrid header")?;
        match token {
            lexer::Token::Quoted(ref value) if value == expected => {}
            other => {
                return Err(LabgridError::MalformedHeader {
                    expected,
                    found: other.to_string(),
                })
            }
        }
    }
    Ok(())
}

fn parse_tier(
    queue: &mut TokenQueue,
    number: usize,
    grid_xmin: f64,
    grid_xmax: f64,
) -> Result<Tier, LabgridError> {
    let kind: TierKind = queue.next_quoted(&format!("tier {number} class"))?.parse()?;
    let name = queue.next_quoted(&format!("tier {number} name"))?;
    let xmin = queue.next_float(&format!("tier {number} xmin"))?;
    let xmax = queue.next_float(&format!("tier {number} xmax"))?;
    check_tier_range(&name, xmin, xmax, grid_xmin, grid_xmax)?;

    let count = queue.next_count(&format!("tier {number} size"))?;
    let tier = match kind {
        TierKind::Interval => {
            let mut intervals = Vec::with_capacity(count.min(queue.len() / 3));
            for i in 1..=count {
                let what = |field: &str| format!("tier {number} interval {i} {field}");
                let ixmin = queue.next_float(&what("xmin"))?;
                let ixmax = queue.next_float(&what("xmax"))?;
                let text = queue.next_quoted(&what("text"))?;
                intervals.push(Interval::new(ixmin, ixmax, text));
            }
            Tier::Interval(IntervalTier::from_parts(name, xmin, xmax, intervals))
        }
        TierKind::Point => {
            let mut points = Vec::with_capacity(count.min(queue.len() / 2));
            for i in 1..=count {
                let what = |field: &str| format!("tier {number} point {i} {field}");
                let value = queue.next_float(&what("number"))?;
                let mark = queue.next_quoted(&what("mark"))?;
                points.push(Point::new(value, mark));
            }
            Tier::Point(PointTier::from_parts(name, xmin, xmax, points))
        }
    };

    tracing::debug!(
        tier = tier.name(),
        kind = %tier.kind(),
        items = tier.len(),
        "parsed tier"
    );
    Ok(tier)
}

/// Shortest decimal that parses back to the same `f64`, never in exponent form.
pub(crate) fn format_time(value: f64) -> String {
    format!("{value}")
}

fn write_header(out: &mut String) {
    write!(
        out,
        "File type = \"{FILE_TYPE}\"\nObject class = \"{OBJECT_CLASS}\"\n\n"
    )
    .expect("write to string");
}

/// Serializes a TextGrid in the long (labeled, indented) form.
pub fn to_long_string(grid: &TextGrid) -> String {
    let mut out = String::new();
    write_header(&mut out);

    writeln!(out, "xmin = {}", format_time(grid.xmin())).expect("write to string");
    writeln!(out, "xmax = {}", format_time(grid.xmax())).expect("write to string");
    if grid.is_empty() {
        out.push_str("tiers? <absent>\n");
        return out;
    }
    out.push_str("tiers? <exists>\n");
    writeln!(out, "size = {}", grid.len()).expect("write to string");
    out.push_str("item []:\n");

    for (index, tier) in grid.tiers().iter().enumerate() {
        writeln!(out, "\titem [{}]:", index + 1).expect("write to string");
        writeln!(out, "\t\tclass = \"{}\"", tier.kind()).expect("write to string");
        writeln!(out, "\t\tname = \"{}\"", tier.name()).expect("write to string");
        writeln!(out, "\t\txmin = {}", format_time(tier.xmin())).expect("write to string");
        writeln!(out, "\t\txmax = {}", format_time(tier.xmax())).expect("write to string");

        match tier {
            Tier::Interval(tier) => {
                writeln!(out, "\t\tintervals: size = {}", tier.len()).expect("write to string");
                for (i, interval) in tier.intervals().iter().enumerate() {
                    writeln!(out, "\t\tintervals [{}]:", i + 1).expect("write to string");
                    writeln!(out, "\t\t\txmin = {}", format_time(interval.xmin)).expect("write to string");
                    writeln!(out, "\t\t\txmax = {}", format_time(interval.xmax)).expect("write to string");
                    writeln!(out, "\t\t\ttext = \"{}\"", interval.text).expect("write to string");
                }
            }
            Tier::Point(tier) => {
                writeln!(out, "\t\tpoints: size = {}", tier.len()).expect("write to string");
                for (i, point) in tier.points().iter().enumerate() {
                    writeln!(out, "\t\tpoints [{}]:", i + 1).expect("write to string");
                    writeln!(out, "\t\t\tnumber = {}", format_time(point.value)).expect("write to string");
                    writeln!(out, "\t\t\tmark = \"{}\"", point.mark).expect("write to string");
                }
            }
        }
    }

    out
}

/// Serializes a TextGrid in the short (bare values) form.
pub fn to_short_string(grid: &TextGrid) -> String {
    let mut out = String::new();
    write_header(&mut out);

    writeln!(out, "{}", format_time(grid.xmin())).expect("write to string");
    writeln!(out, "{}", format_time(grid.xmax())).expect("write to string");
    if grid.is_empty() {
        out.push_str("<absent>\n");
        return out;
    }
    out.push_str("<exists>\n");
    writeln!(out, "{}", grid.len()).expect("write to string");

    for tier in grid.tiers() {
        writeln!(out, "\"{}\"", tier.kind()).expect("write to string");
        writeln!(out, "\"{}\"", tier.name()).expect("write to string");
        writeln!(out, "{}", format_time(tier.xmin())).expect("write to string");
        writeln!(out, "{}", format_time(tier.xmax())).expect("write to string");
        writeln!(out, "{}", tier.len()).expect("write to string");

        match tier {
            Tier::Interval(tier) => {
                for interval in tier.intervals() {
                    writeln!(out, "{}", format_time(interval.xmin)).expect("write to string");
                    writeln!(out, "{}", format_time(interval.xmax)).expect("write to string");
                    writeln!(out, "\"{}\"", interval.text).expect("write to string");
                }
            }
            Tier::Point(tier) => {
                for point in tier.points() {
                    writeln!(out, "{}", format_time(point.value)).expect("write to string");
                    writeln!(out, "\"{}\"", point.mark).expect("write to string");
                }
            }
        }
    }

    out
}
