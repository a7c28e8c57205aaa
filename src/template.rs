//! Boilerplate around the generated fragments: `${NAME}` placeholder
//! substitution into the fixed header and source templates.
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{Error, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

pub const HEADER: &str = r#"
#pragma once

#include <iostream>
#include <memory>
#include <string>

namespace Json {
class Value;
}

${NAMESPACE_BEGIN}
/**
 * A class providing native access to JSON data.
 */
class ${CLASS} {
public:
	typedef std::shared_ptr<::Json::Value> ValuePtr;

	/**
	 * A constructor.
	 */
	${CLASS}();

	/**
	 * Construct the accessor from a stream holding a JSON document.
	 */
	${CLASS}(std::istream &is);

	/**
	 * A destructor.
	 */
	~${CLASS}();

	/**
	 * Read a JSON document from a stream.
	 */
	void read(std::istream &is);

	// generated accessors
${GENERATED}
private:
	ValuePtr m_root;
};

${NAMESPACE_END}
"#;

pub const SOURCE: &str = r#"
#include "${INCLUDE}.h"

#include <memory>

#include <json/reader.h>
#include <json/value.h>

${NAMESPACE_BEGIN}
${CLASS}::${CLASS}() {

}

${CLASS}::${CLASS}(std::istream& is) {
	read(is);
}

${CLASS}::~${CLASS}() {

}

void ${CLASS}::read(std::istream &is) {
	::Json::CharReaderBuilder builder;
	::Json::Value root;
	std::string errs;
	::Json::parseFromStream(builder, is, &root, &errs);
	m_root = std::make_shared< ::Json::Value >(root);
}

// generated accessors
${GENERATED}
${NAMESPACE_END}
"#;

/// Replace every `${NAME}` in `template`. A placeholder without a value is an
/// error; values are inserted verbatim.
pub fn render(template: &str, placeholders: &BTreeMap<&str, String>) -> Result<String> {
    let mut missing = None;
    let out = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        match placeholders.get(name) {
            Some(value) => value.clone(),
            None => {
                if missing.is_none() {
                    missing = Some(name.to_string());
                }
                String::new()
            }
        }
    });
    match missing {
        Some(name) => Err(Error::MissingPlaceholder { name }),
        None => Ok(out.into_owned()),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// QUALIFIED OUTPUT NAME
// ————————————————————————————————————————————————————————————————————————————

/// `Outer::Inner::Class` split into enclosing namespaces and the class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub namespaces: Vec<String>,
    pub class: String,
}

impl QualifiedName {
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = || Error::InvalidQualifiedName { name: name.to_string() };
        let mut parts: Vec<String> = name
            .split("::")
            .map(|p| p.trim().to_string())
            .collect();
        if parts.iter().any(|p| p.is_empty() || p.contains(char::is_whitespace)) {
            return Err(invalid());
        }
        let class = parts.pop().ok_or_else(invalid)?;
        Ok(Self { namespaces: parts, class })
    }

    pub fn namespace_begin(&self) -> String {
        self.namespaces
            .iter()
            .map(|ns| format!("namespace {ns} {{\n"))
            .collect()
    }

    pub fn namespace_end(&self) -> String {
        "}\n".repeat(self.namespaces.len())
    }
}

/// Placeholder values shared by both templates.
pub fn placeholders<'a>(
    name: &QualifiedName,
    include: &str,
    generated: String,
) -> BTreeMap<&'a str, String> {
    BTreeMap::from([
        ("CLASS", name.class.clone()),
        ("INCLUDE", include.to_string()),
        ("NAMESPACE_BEGIN", name.namespace_begin()),
        ("NAMESPACE_END", name.namespace_end()),
        ("GENERATED", generated),
    ])
}
