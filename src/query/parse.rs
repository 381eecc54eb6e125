//! Query string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use crate::arrange::{Arrangement, Strategy};
use crate::shelf::ShelfAxis;

/// Every recognized field, unset until its key is seen.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct QueryFields {
    pub strategy: Option<Strategy>,
    pub gap: Option<f64>,
    pub padding: Option<f64>,
    pub preserve_aspect: Option<bool>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub base_scale: Option<f64>,
    pub min_aspect: Option<f64>,
    pub prefer: Option<ShelfAxis>,
}

impl QueryFields {
    pub(crate) fn to_arrangement(&self) -> Arrangement {
        let mut a = Arrangement::new(self.strategy.unwrap_or_default());
        a.options.gap = self.gap;
        a.options.padding = self.padding;
        if let Some(v) = self.preserve_aspect {
            a.options.tile.preserve_aspect = v;
        }
        if let Some(v) = self.offset_x {
            a.options.cascade.offset_x = v;
        }
        if let Some(v) = self.offset_y {
            a.options.cascade.offset_y = v;
        }
        if let Some(v) = self.base_scale {
            a.options.cascade.base_scale = v;
        }
        if let Some(v) = self.min_aspect {
            a.options.smart.min_aspect = v;
        }
        if let Some(v) = self.prefer {
            a.options.min_resize.prefer = v;
        }
        a
    }
}

/// Parse a query string into fields + warnings.
pub(crate) fn parse_query(query: &str) -> (QueryFields, Vec<ParseWarning>) {
    let mut fields = QueryFields::default();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        dispatch_key(&key, &value, &mut fields, &mut warnings);
    }

    (fields, warnings)
}

const NON_NEGATIVE: &str = "expected a non-negative number";

fn dispatch_key(key: &str, value: &str, f: &mut QueryFields, warnings: &mut Vec<ParseWarning>) {
    let Some(canonical) = canonical_key(key) else {
        warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        });
        return;
    };

    match canonical {
        "mode" => match value.trim().parse::<Strategy>() {
            Ok(s) => set_or_warn(&mut f.strategy, Some(s), key, value, warnings),
            Err(_) => invalid(
                canonical,
                value,
                "expected tile|cascade|smart|min_resize",
                warnings,
            ),
        },
        "gap" => {
            let parsed = parse_non_negative(value);
            set_number(&mut f.gap, parsed, canonical, key, value, NON_NEGATIVE, warnings);
        }
        "padding" => {
            let parsed = parse_non_negative(value);
            set_number(&mut f.padding, parsed, canonical, key, value, NON_NEGATIVE, warnings);
        }
        "offsetx" => {
            let parsed = parse_non_negative(value);
            set_number(&mut f.offset_x, parsed, canonical, key, value, NON_NEGATIVE, warnings);
        }
        "offsety" => {
            let parsed = parse_non_negative(value);
            set_number(&mut f.offset_y, parsed, canonical, key, value, NON_NEGATIVE, warnings);
        }
        "offset" => {
            let parsed = parse_non_negative(value);
            set_number(&mut f.offset_x, parsed, canonical, key, value, NON_NEGATIVE, warnings);
            set_or_warn(&mut f.offset_y, parsed, key, value, warnings);
        }
        "basescale" => {
            let parsed = parse_f64(value).filter(|&v| v > 0.0);
            let reason = "expected a positive number";
            set_number(&mut f.base_scale, parsed, canonical, key, value, reason, warnings);
        }
        "minaspect" => {
            let parsed = parse_non_negative(value);
            set_number(&mut f.min_aspect, parsed, canonical, key, value, NON_NEGATIVE, warnings);
        }
        "preserveaspect" => match parse_bool(value) {
            Some(b) => set_or_warn(&mut f.preserve_aspect, Some(b), key, value, warnings),
            None => invalid(canonical, value, "expected true|false", warnings),
        },
        "prefer" => match parse_axis(value) {
            Some(axis) => set_or_warn(&mut f.prefer, Some(axis), key, value, warnings),
            None => invalid(canonical, value, "expected row|col", warnings),
        },
        _ => {}
    }
}

/// Map a lowercased key to its canonical name, or `None` if unknown.
fn canonical_key(key: &str) -> Option<&'static str> {
    Some(match key {
        "mode" | "strategy" | "layout" => "mode",
        "gap" => "gap",
        "padding" | "pad" => "padding",
        "preserveaspect" | "preserve_aspect" | "aspect" => "preserveaspect",
        "offsetx" | "offset_x" => "offsetx",
        "offsety" | "offset_y" => "offsety",
        "offset" => "offset",
        "basescale" | "base_scale" | "scale" => "basescale",
        "minaspect" | "min_aspect" => "minaspect",
        "prefer" => "prefer",
        _ => return None,
    })
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

/// Like [`set_or_warn`], but an unparseable value is reported.
fn set_number(
    field: &mut Option<f64>,
    parsed: Option<f64>,
    canonical: &'static str,
    key: &str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ParseWarning>,
) {
    if parsed.is_none() {
        invalid(canonical, value, reason, warnings);
    }
    set_or_warn(field, parsed, key, value, warnings);
}

fn invalid(key: &'static str, value: &str, reason: &'static str, warnings: &mut Vec<ParseWarning>) {
    warnings.push(ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_non_negative(s: &str) -> Option<f64> {
    parse_f64(s).filter(|&v| v >= 0.0)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_axis(s: &str) -> Option<ShelfAxis> {
    match s.trim().to_ascii_lowercase().as_str() {
        "row" | "rows" => Some(ShelfAxis::Row),
        "col" | "cols" | "column" | "columns" => Some(ShelfAxis::Column),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
/// Invalid UTF-8 after decoding is replaced.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode_aliases() {
        for q in ["mode=cascade", "strategy=Cascade", "LAYOUT=cascade"] {
            let (f, warnings) = parse_query(q);
            assert_eq!(f.strategy, Some(Strategy::Cascade), "{q}");
            assert!(warnings.is_empty());
        }
        let (f, _) = parse_query("mode=smarter");
        assert_eq!(f.strategy, Some(Strategy::MinResize));
    }

    #[test]
    fn invalid_mode_warns_and_keeps_default() {
        let (f, warnings) = parse_query("mode=spiral");
        assert_eq!(f.strategy, None);
        assert_eq!(
            warnings,
            [ParseWarning::ValueInvalid {
                key: "mode",
                value: String::from("spiral"),
                reason: "expected tile|cascade|smart|min_resize",
            }]
        );
    }

    #[test]
    fn spacing_values() {
        let (f, warnings) = parse_query("gap=4&pad=12.5");
        assert_eq!(f.gap, Some(4.0));
        assert_eq!(f.padding, Some(12.5));
        assert!(warnings.is_empty());
    }

    #[test]
    fn negative_and_non_finite_rejected() {
        let (f, warnings) = parse_query("gap=-3&padding=inf&scale=0");
        assert_eq!(f.gap, None);
        assert_eq!(f.padding, None);
        assert_eq!(f.base_scale, None);
        assert_eq!(warnings.len(), 3);
        assert!(
            warnings
                .iter()
                .all(|w| matches!(w, ParseWarning::ValueInvalid { .. }))
        );
    }

    #[test]
    fn offset_sets_both_axes() {
        let (f, _) = parse_query("offset=20");
        assert_eq!((f.offset_x, f.offset_y), (Some(20.0), Some(20.0)));

        let (f, warnings) = parse_query("offset=20&offset_y=10");
        assert_eq!((f.offset_x, f.offset_y), (Some(20.0), Some(10.0)));
        assert!(matches!(
            &warnings[..],
            [ParseWarning::DuplicateKey { key, .. }] if key == "offset_y"
        ));
    }

    #[test]
    fn booleans_and_axes() {
        let (f, _) = parse_query("aspect=yes&prefer=columns");
        assert_eq!(f.preserve_aspect, Some(true));
        assert_eq!(f.prefer, Some(ShelfAxis::Column));

        let (_, warnings) = parse_query("prefer=diagonal");
        assert!(matches!(
            &warnings[..],
            [ParseWarning::ValueInvalid { key: "prefer", .. }]
        ));
    }

    #[test]
    fn unknown_key_warns() {
        let (_, warnings) = parse_query("gap=4&foobar=baz");
        assert_eq!(
            warnings,
            [ParseWarning::KeyNotRecognized {
                key: String::from("foobar"),
                value: String::from("baz"),
            }]
        );
    }

    #[test]
    fn duplicate_key_last_wins() {
        let (f, warnings) = parse_query("gap=8&gap=2");
        assert_eq!(f.gap, Some(2.0));
        assert!(
            warnings
                .iter()
                .any(|w| matches!(w, ParseWarning::DuplicateKey { .. }))
        );
    }

    #[test]
    fn leading_question_mark_and_empty_pairs() {
        let (f, warnings) = parse_query("?&mode=tile&&gap=1&");
        assert_eq!(f.strategy, Some(Strategy::Tile));
        assert_eq!(f.gap, Some(1.0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn percent_decoding() {
        assert_eq!(percent_decode("min%5Faspect"), "min_aspect");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%C3%A9"), "é");

        let (f, _) = parse_query("min%5Faspect=0.5");
        assert_eq!(f.min_aspect, Some(0.5));
    }

    #[test]
    fn fields_map_onto_arrangement() {
        let (f, _) = parse_query("mode=cascade&offsetx=10&offsety=12&basescale=0.5&gap=0");
        let a = f.to_arrangement();
        assert_eq!(a.strategy, Strategy::Cascade);
        assert_eq!(a.options.cascade.offset_x, 10.0);
        assert_eq!(a.options.cascade.offset_y, 12.0);
        assert_eq!(a.options.cascade.base_scale, 0.5);
        assert_eq!(a.options.gap, Some(0.0));
        assert_eq!(a.options.padding, None);
    }
}
