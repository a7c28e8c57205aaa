//! Recursive-descent schema parser.
//!
//! Each `class` line opens a scope that consumes member lines until a line
//! starting with `}`. The root scope never closes and ends with the input.
//! All state (current address, enclosing scope) travels as arguments.
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::ast::{Array, Class, Node, Primitive, Root, ScalarKind};
use crate::error::{Error, Result};
use crate::lines::{Line, SchemaLines};
use crate::path::{compose_address, symbol_name, ROOT_ADDRESS};

// `values[8]`, `values[]`, `float[9]`
static ARRAY_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\[([^\[\]]*)\]$").unwrap());

pub fn parse(source: &str) -> Result<Root> {
    let mut lines = SchemaLines::new(source);
    let mut nodes = Vec::new();
    while let Some(line) = lines.next() {
        nodes.push(parse_line(&mut lines, line, ROOT_ADDRESS)?);
    }
    let root = Root { nodes };
    debug!(nodes = root.node_count(), "parsed schema");
    Ok(root)
}

fn parse_line(lines: &mut SchemaLines<'_>, line: Line<'_>, address: &str) -> Result<Node> {
    let mut tokens = line.tokens();
    // trimmed and non-empty, so there is always a first token
    let keyword = tokens.next().unwrap_or_default();
    let Some(token) = tokens.next() else {
        return Err(malformed(&line, "missing field name"));
    };

    if keyword == "class" {
        return parse_class(lines, &line, token, address).map(Node::Class);
    }

    if let Ok(kind) = keyword.parse::<ScalarKind>() {
        if token.ends_with(']') {
            return parse_field_array(&line, kind, token, address).map(Node::Array);
        }
        return Ok(Node::Primitive(Primitive {
            kind,
            name: symbol_name(token)?,
            address: compose_address(address, token),
        }));
    }

    if keyword.ends_with(']') {
        return parse_typed_array(&line, keyword, token, address).map(Node::Array);
    }

    if token.ends_with(']') {
        return Err(malformed(&line, &format!("unknown array element kind `{keyword}`")));
    }
    Err(malformed(&line, &format!("unknown keyword `{keyword}`")))
}

fn parse_class(
    lines: &mut SchemaLines<'_>,
    opening: &Line<'_>,
    token: &str,
    address: &str,
) -> Result<Class> {
    let name = symbol_name(token)?;
    let address = compose_address(address, token);
    let mut members = Vec::new();

    while let Some(line) = lines.next() {
        if line.is_block_close() {
            debug!(class = %name, members = members.len(), "closed class");
            return Ok(Class { name, address, members });
        }
        members.push(parse_line(lines, line, &address)?);
    }

    Err(Error::UnterminatedBlock { line: opening.number, name })
}

/// `float values[8]`: kind from the keyword, size from the field token.
fn parse_field_array(line: &Line<'_>, kind: ScalarKind, token: &str, address: &str) -> Result<Array> {
    let caps = ARRAY_SUFFIX
        .captures(token)
        .ok_or_else(|| malformed(line, "expected `name[size]`"))?;
    Ok(Array {
        element_kind: kind,
        size: caps[2].trim().to_string(),
        name: symbol_name(&caps[1])?,
        address: compose_address(address, token),
    })
}

/// `float[9] values`: kind and size from the keyword.
fn parse_typed_array(line: &Line<'_>, keyword: &str, token: &str, address: &str) -> Result<Array> {
    let caps = ARRAY_SUFFIX
        .captures(keyword)
        .ok_or_else(|| malformed(line, "expected `kind[size]`"))?;
    let element_kind = caps[1].parse::<ScalarKind>().map_err(|()| {
        malformed(line, &format!("unknown array element kind `{}`", &caps[1]))
    })?;
    Ok(Array {
        element_kind,
        size: caps[2].trim().to_string(),
        name: symbol_name(token)?,
        address: compose_address(address, token),
    })
}

fn malformed(line: &Line<'_>, reason: &str) -> Error {
    Error::MalformedDeclaration {
        line: line.number,
        text: line.text.to_string(),
        reason: reason.to_string(),
    }
}
