//! Code generation settings: scalar bindings and indentation.
//!
//! The defaults target jsoncpp. A JSON file can override them, e.g. to map
//! `float` to `double`/`asDouble`:
//!
//! ```json
//! { "scalars": { "float": { "native": "double", "extract": "asDouble" } } }
//! ```
//!
//! A `scalars` table replaces the default one wholesale, so it must list every
//! kind the schema uses.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::ScalarKind;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarBinding {
    /// Native return type of the accessor, e.g. `std::string`.
    pub native: String,
    /// `Json::Value` method that extracts it, e.g. `asString`.
    pub extract: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// One level of indentation in generated code.
    pub indent: String,
    pub scalars: BTreeMap<ScalarKind, ScalarBinding>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        let scalars = [
            (ScalarKind::Bool, "bool", "asBool"),
            (ScalarKind::Int, "int", "asInt"),
            (ScalarKind::Float, "float", "asFloat"),
            (ScalarKind::String, "std::string", "asString"),
        ]
        .into_iter()
        .map(|(kind, native, extract)| {
            (kind, ScalarBinding { native: native.into(), extract: extract.into() })
        })
        .collect();
        Self { indent: "\t".into(), scalars }
    }
}

impl CodegenConfig {
    pub fn from_json(src: &str) -> serde_json::Result<Self> {
        serde_json::from_str(src)
    }

    pub fn binding(&self, kind: ScalarKind) -> Result<&ScalarBinding> {
        self.scalars
            .get(&kind)
            .ok_or_else(|| Error::UnknownScalarKind { kind: kind.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_kind() {
        let config = CodegenConfig::default();
        for kind in ScalarKind::ALL {
            assert!(config.binding(kind).is_ok(), "{kind} unbound");
        }
        assert_eq!(config.binding(ScalarKind::String).unwrap().native, "std::string");
        assert_eq!(config.binding(ScalarKind::Float).unwrap().extract, "asFloat");
    }

    #[test]
    fn partial_json_keeps_default_indent() {
        let config = CodegenConfig::from_json(
            r#"{ "scalars": { "float": { "native": "double", "extract": "asDouble" } } }"#,
        )
        .unwrap();
        assert_eq!(config.indent, "\t");
        assert_eq!(config.binding(ScalarKind::Float).unwrap().native, "double");
        assert_eq!(
            config.binding(ScalarKind::Int),
            Err(Error::UnknownScalarKind { kind: "int".into() })
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(CodegenConfig::from_json(r#"{ "indnet": "  " }"#).is_err());
        assert!(CodegenConfig::from_json(r#"{ "scalars": { "double": { "native": "double", "extract": "asDouble" } } }"#).is_err());
    }
}
