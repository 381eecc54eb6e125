//! Query-string arrangement options.
//!
//! Parses strings like `?mode=smarter&gap=4&prefer=col` into an
//! [`Arrangement`]. Problems never fail the parse; they come back as
//! [`ParseWarning`]s and the offending key is ignored.
//!
//! # Example
//!
//! ```
//! use zenarrange::{ShelfAxis, Strategy, query};
//!
//! let result = query::parse("mode=smarter&gap=4&prefer=col");
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.arrangement.strategy, Strategy::MinResize);
//! assert_eq!(result.arrangement.options.gap, Some(4.0));
//! assert_eq!(result.arrangement.options.min_resize.prefer, ShelfAxis::Column);
//! ```
//!
//! # Keys
//!
//! | Key | Value |
//! |---|---|
//! | `mode`, `strategy`, `layout` | `tile`, `cascade`, `smart`, `min_resize` (`smarter`) |
//! | `gap` | non-negative number |
//! | `padding`, `pad` | non-negative number |
//! | `preserveaspect`, `aspect` | boolean |
//! | `offsetx`, `offset_x`, `offsety`, `offset_y` | non-negative number |
//! | `offset` | non-negative number, both axes |
//! | `basescale`, `scale` | positive number |
//! | `minaspect`, `min_aspect` | non-negative number |
//! | `prefer` | `row` or `col` |
//!
//! Keys are case-insensitive and percent-decoded.

mod parse;

use alloc::string::String;
use alloc::vec::Vec;

use crate::arrange::Arrangement;

/// Result of parsing an arrangement query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Strategy and options; unset keys keep their defaults.
    pub arrangement: Arrangement,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (fields, warnings) = parse::parse_query(query);
    ParseResult {
        arrangement: fields.to_arrangement(),
        warnings,
    }
}
