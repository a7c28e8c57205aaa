//! Schema AST. Built once by the parser, then only borrowed by the emitters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four scalar kinds the schema language knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Bool,
    Int,
    Float,
    String,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 4] = [Self::Bool, Self::Int, Self::Float, Self::String];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}

impl FromStr for ScalarKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|k| k.keyword() == s).ok_or(())
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Root {
    pub nodes: Vec<Node>,    // declaration order
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Node {
    Class(Class),
    Primitive(Primitive),
    Array(Array),
}

/// A nested JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub name: String,
    pub address: String,
    pub members: Vec<Node>,  // may be empty
}

/// A scalar leaf at `address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Primitive {
    pub kind: ScalarKind,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Array {
    pub element_kind: ScalarKind,
    pub size: String,        // unevaluated; empty for dynamic length
    pub name: String,
    pub address: String,
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Class(c) => &c.name,
            Node::Primitive(p) => &p.name,
            Node::Array(a) => &a.name,
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Node::Class(c) => &c.address,
            Node::Primitive(p) => &p.address,
            Node::Array(a) => &a.address,
        }
    }
}

impl Root {
    /// Pre-order count of every node below the root.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.iter().map(|n| match n {
                Node::Class(c) => 1 + count(&c.members),
                _ => 1,
            }).sum()
        }
        count(&self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_keywords_round_trip() {
        for kind in ScalarKind::ALL {
            assert_eq!(kind.keyword().parse::<ScalarKind>(), Ok(kind));
        }
        assert!("double".parse::<ScalarKind>().is_err());
        assert!("class".parse::<ScalarKind>().is_err());
    }

    #[test]
    fn serializes_tagged() {
        let root = Root {
            nodes: vec![Node::Primitive(Primitive {
                kind: ScalarKind::Int,
                name: "width".into(),
                address: "/width".into(),
            })],
        };
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [{ "node": "primitive", "kind": "int", "name": "width", "address": "/width" }]
            })
        );
    }
}
