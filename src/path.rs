//! Symbol names and JSON addresses.
//!
//! An address is a `/`-delimited path from the document root, built from the
//! raw declaration tokens of every enclosing scope. Tokens keep their bracket
//! suffixes so the definition emitter can turn them into index subscripts.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

pub const ROOT_ADDRESS: &str = "/";

static SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+").unwrap());

/// Leading identifier run of the final `/` segment of `token`.
///
/// `foo` → `foo`, `foo[3]` → `foo`, `frame/metadata` → `metadata`.
pub fn symbol_name(token: &str) -> Result<String> {
    let last = token.rsplit('/').next().unwrap_or(token);
    SYMBOL
        .find(last)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::InvalidToken { token: token.to_string() })
}

/// `parent` + `/` + `token`, never doubling the separator.
pub fn compose_address(parent: &str, token: &str) -> String {
    if parent.ends_with('/') {
        format!("{parent}{token}")
    } else {
        format!("{parent}/{token}")
    }
}

/// Symbol with its first character upper-cased, for type and accessor names.
pub fn type_name(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One step of a JSON address: an object key, then any index subscripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub key: String,
    pub indices: Vec<String>,
}

/// Split an address into key/index steps. Empty segments are skipped, so
/// `/a//b` and `/a/b` resolve the same way.
pub fn access_segments(address: &str) -> Result<Vec<Segment>> {
    address
        .split('/')
        .filter(|s| !s.is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(raw: &str) -> Result<Segment> {
    let invalid = || Error::InvalidToken { token: raw.to_string() };
    let (key, mut rest) = match raw.find('[') {
        Some(at) => (&raw[..at], &raw[at..]),
        None => (raw, ""),
    };
    if key.is_empty() {
        return Err(invalid());
    }
    let mut indices = Vec::new();
    while !rest.is_empty() {
        // rest always starts with '[' here
        let close = rest.find(']').ok_or_else(invalid)?;
        let expr = rest[1..close].trim();
        if expr.is_empty() || expr.contains('[') {
            return Err(invalid());
        }
        indices.push(expr.to_string());
        rest = &rest[close + 1..];
        if !rest.is_empty() && !rest.starts_with('[') {
            return Err(invalid());
        }
    }
    Ok(Segment { key: key.to_string(), indices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn symbol_name_strips_suffixes() {
        assert_eq!(symbol_name("foo").unwrap(), "foo");
        assert_eq!(symbol_name("foo[3]").unwrap(), "foo");
        assert_eq!(symbol_name("frame/metadata").unwrap(), "metadata");
        assert_eq!(symbol_name("frameArray[0]/frame").unwrap(), "frame");
        assert_eq!(symbol_name("snake_case9").unwrap(), "snake_case9");
    }

    #[test]
    fn symbol_name_keeps_unicode_letters() {
        assert_eq!(symbol_name("größe").unwrap(), "größe");
        assert_eq!(symbol_name("grün[2]").unwrap(), "grün");
        assert_eq!(symbol_name("données/durée").unwrap(), "durée");
        assert_eq!(type_name("écart"), "Écart");
    }

    #[test]
    fn symbol_name_rejects_punctuation() {
        assert_eq!(
            symbol_name("[3]"),
            Err(Error::InvalidToken { token: "[3]".into() })
        );
        assert!(symbol_name("a/").is_err());
        assert!(symbol_name("").is_err());
    }

    #[test]
    fn addresses_nest() {
        let outer = compose_address(ROOT_ADDRESS, "outer");
        let inner = compose_address(&outer, "inner");
        let leaf = compose_address(&inner, "leaf");
        assert_eq!(outer, "/outer");
        assert_eq!(leaf, "/outer/inner/leaf");
        assert_eq!(compose_address("/a", "b[2]"), "/a/b[2]");
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name("focalLength"), "FocalLength");
        assert_eq!(type_name("Camera"), "Camera");
        assert_eq!(type_name("x"), "X");
        assert_eq!(type_name(""), "");
    }

    #[test]
    fn segments_with_indices() {
        let segs = access_segments("/master/frameArray[0]/grid[i][j]").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment { key: "master".into(), indices: vec![] },
                Segment { key: "frameArray".into(), indices: vec!["0".into()] },
                Segment { key: "grid".into(), indices: vec!["i".into(), "j".into()] },
            ]
        );
    }

    #[test]
    fn broken_indices_are_invalid() {
        for bad in ["/a[]", "/a[0", "/a[0]x", "/[0]", "/a[[0]]"] {
            assert!(access_segments(bad).is_err(), "{bad} should be rejected");
        }
    }

    proptest! {
        #[test]
        fn symbol_name_idempotent_on_identifiers(ident in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
            let once = symbol_name(&ident).unwrap();
            prop_assert_eq!(&once, &ident);
            prop_assert_eq!(symbol_name(&once).unwrap(), ident);
        }

        #[test]
        fn symbol_name_ignores_bracket_suffix(ident in "[a-z][A-Za-z0-9]{0,12}", size in "[0-9]{0,3}") {
            let token = format!("{ident}[{size}]");
            prop_assert_eq!(symbol_name(&token).unwrap(), ident);
        }
    }
}
