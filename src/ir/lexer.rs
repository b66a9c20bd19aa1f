//! TextGrid preprocessing: encoding detection and tokenization.
//!
//! Both TextGrid text forms reduce to the same token stream once field names,
//! indentation and index markers are dropped. A long-form fragment such as
//!
//! ```text
//! item [1]:
//!     class = "IntervalTier"
//!     xmin = 0
//! tiers? <exists>
//! ```
//!
//! yields `"IntervalTier"`, `0`, `<exists>`: exactly what the short form
//! holds on those lines. The parser then only needs a FIFO cursor over the
//! tokens, never lookahead.
//!
//! # Encodings
//!
//! Input may be UTF-8 (with or without a byte-order mark), UTF-16 with a
//! byte-order mark, or a single-byte Latin-1 file. Anything else, including
//! NUL bytes or C0 control bytes other than tab, line feed, carriage return
//! and form feed, is rejected as [`LabgridError::UnsupportedEncoding`].

use std::collections::VecDeque;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LabgridError;

// Alternatives, in priority order at a given position:
//   1. a double-quoted string, where `""` stands for an embedded quote
//   2. an angle-bracketed flag such as `<exists>`
//   3. an index marker `[3]` or `[]`, matched only so that it is dropped
//   4. a numeric literal with optional sign, fraction and exponent
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#""((?:[^"]|"")*)"|<([^<>]*)>|\[\s*\d*\s*\]|([-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?)"#,
    )
    .expect("token regex is valid")
});

pub(crate) const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// The encoding a TextGrid buffer was decoded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

/// A single lexical token of the short-form grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A numeric literal, kept as written.
    Number(String),
    /// The contents of a quoted string, quotes stripped, `""` kept verbatim.
    Quoted(String),
    /// The contents of an angle-bracketed flag, e.g. `exists`.
    Flag(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {n}"),
            Token::Quoted(s) => write!(f, "string \"{s}\""),
            Token::Flag(s) => write!(f, "flag <{s}>"),
        }
    }
}

/// A consuming front-to-back cursor over tokens.
///
/// Every accessor checks for exhaustion first, so running out of input is an
/// [`LabgridError::UnexpectedEndOfInput`] rather than a panic.
#[derive(Clone, Debug, Default)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
}

impl TokenQueue {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Removes the front token, if any.
    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Removes the front token, failing if the queue is exhausted.
    pub fn next_token(&mut self, expected: &str) -> Result<Token, LabgridError> {
        self.tokens
            .pop_front()
            .ok_or_else(|| LabgridError::UnexpectedEndOfInput {
                expected: expected.to_string(),
            })
    }

    /// Removes the front token, which must be a quoted string.
    pub fn next_quoted(&mut self, expected: &str) -> Result<String, LabgridError> {
        match self.next_token(expected)? {
            Token::Quoted(s) => Ok(s),
            other => Err(invalid(expected, &other)),
        }
    }

    /// Removes the front token, which must be a flag.
    pub fn next_flag(&mut self, expected: &str) -> Result<String, LabgridError> {
        match self.next_token(expected)? {
            Token::Flag(s) => Ok(s),
            other => Err(invalid(expected, &other)),
        }
    }

    /// Removes the front token, which must be a finite number.
    ///
    /// Literals that overflow `f64` (such as `1e999`) are rejected, since
    /// `inf` has no TextGrid spelling to write back.
    pub fn next_float(&mut self, expected: &str) -> Result<f64, LabgridError> {
        match self.next_token(expected)? {
            Token::Number(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(LabgridError::InvalidToken {
                    expected: expected.to_string(),
                    found: format!("number {raw}"),
                }),
            },
            other => Err(invalid(expected, &other)),
        }
    }

    /// Removes the front token, which must be a non-negative integer.
    pub fn next_count(&mut self, expected: &str) -> Result<usize, LabgridError> {
        match self.next_token(expected)? {
            Token::Number(raw) => raw.parse::<usize>().map_err(|_| LabgridError::InvalidToken {
                expected: expected.to_string(),
                found: format!("number {raw}"),
            }),
            other => Err(invalid(expected, &other)),
        }
    }
}

impl FromIterator<Token> for TokenQueue {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

fn invalid(expected: &str, found: &Token) -> LabgridError {
    LabgridError::InvalidToken {
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

/// Decodes raw TextGrid bytes and tokenizes them.
pub fn preprocess(bytes: &[u8]) -> Result<(TokenQueue, TextEncoding), LabgridError> {
    let (text, encoding) = decode(bytes)?;
    let queue = tokenize(&text);
    tracing::debug!(?encoding, tokens = queue.len(), "preprocessed TextGrid");
    Ok((queue, encoding))
}

/// Splits decoded TextGrid text into tokens, in file order.
pub fn tokenize(text: &str) -> TokenQueue {
    TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            if let Some(quoted) = caps.get(1) {
                Some(Token::Quoted(quoted.as_str().to_string()))
            } else if let Some(flag) = caps.get(2) {
                Some(Token::Flag(flag.as_str().trim().to_string()))
            } else {
                caps.get(3).map(|number| Token::Number(number.as_str().to_string()))
            }
        })
        .collect()
}

/// Detects the encoding of `bytes` and decodes them to a string.
///
/// Used by the TextGrid reader.
pub fn decode(bytes: &[u8]) -> Result<(String, TextEncoding), LabgridError> {
    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        let text = std::str::from_utf8(rest).map_err(|e| LabgridError::UnsupportedEncoding {
            detail: format!("invalid UTF-8 after byte-order mark: {e}"),
        })?;
        check_controls(text.as_bytes())?;
        return Ok((text.to_string(), TextEncoding::Utf8));
    }

    if let Some(rest) = bytes.strip_prefix(&UTF16_LE_BOM) {
        tracing::warn!("transcoding UTF-16LE input");
        let text = decode_utf16(rest, u16::from_le_bytes)?;
        return Ok((text, TextEncoding::Utf16Le));
    }

    if let Some(rest) = bytes.strip_prefix(&UTF16_BE_BOM) {
        tracing::warn!("transcoding UTF-16BE input");
        let text = decode_utf16(rest, u16::from_be_bytes)?;
        return Ok((text, TextEncoding::Utf16Be));
    }

    check_controls(bytes)?;

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok((text.to_string(), TextEncoding::Utf8)),
        Err(_) => {
            tracing::warn!("input is not valid UTF-8, decoding as Latin-1");
            // Every byte maps to the code point of the same value.
            let text = bytes.iter().map(|&b| char::from(b)).collect();
            Ok((text, TextEncoding::Latin1))
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, LabgridError> {
    if bytes.len() % 2 != 0 {
        return Err(LabgridError::UnsupportedEncoding {
            detail: format!("UTF-16 input has odd length {}", bytes.len() + 2),
        });
    }

    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    let text: String = char::decode_utf16(units)
        .collect::<Result<_, _>>()
        .map_err(|e| LabgridError::UnsupportedEncoding {
            detail: format!("malformed UTF-16: {e}"),
        })?;
    check_controls(text.as_bytes())?;
    Ok(text)
}

fn check_controls(bytes: &[u8]) -> Result<(), LabgridError> {
    let foreign = bytes
        .iter()
        .position(|&b| b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r' | 0x0C));

    match foreign {
        Some(offset) => Err(LabgridError::UnsupportedEncoding {
            detail: format!(
                "control byte 0x{:02X} at offset {offset}; expected UTF-8 or Latin-1 text",
                bytes[offset]
            ),
        }),
        None => Ok(()),
    }
}
