//! Accessor code generation.
//!
//! Two emitters walk the same AST through one [`Visitor`] contract:
//! - [`decl::DeclEmitter`] renders the nested class declarations (header),
//! - [`defn::DefnEmitter`] renders the matching out-of-line definitions (source).
//!
//! Both name every symbol the same way (`type_name` of the node's symbol,
//! accessors prefixed with `get`), so each declared accessor has exactly one
//! definition under the same qualified name. Array accessors are the one
//! exception: they are declared but have no generated body.
pub mod decl;
pub mod defn;

use crate::ast::{Array, Class, Node, Primitive, Root};
use crate::config::CodegenConfig;
use crate::error::{Error, Result};
use crate::path::type_name;

pub use decl::DeclEmitter;
pub use defn::DefnEmitter;

/// Name of the shared JSON handle type and member in generated code.
pub const HANDLE_TYPE: &str = "ValuePtr";
pub const HANDLE_FIELD: &str = "m_root";

// ————————————————————————————————————————————————————————————————————————————
// TRAVERSAL
// ————————————————————————————————————————————————————————————————————————————

/// Hooks invoked by [`walk`] in pre-order. `leave_class` runs after every
/// member of the class has been visited.
pub trait Visitor {
    fn enter_class(&mut self, class: &Class) -> Result<()>;
    fn leave_class(&mut self, class: &Class) -> Result<()>;
    fn visit_primitive(&mut self, primitive: &Primitive) -> Result<()>;
    fn visit_array(&mut self, array: &Array) -> Result<()>;
}

pub fn walk<V: Visitor + ?Sized>(root: &Root, visitor: &mut V) -> Result<()> {
    root.nodes.iter().try_for_each(|node| walk_node(node, visitor))
}

fn walk_node<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) -> Result<()> {
    match node {
        Node::Class(class) => {
            visitor.enter_class(class)?;
            for member in &class.members {
                walk_node(member, visitor)?;
            }
            visitor.leave_class(class)
        }
        Node::Primitive(primitive) => visitor.visit_primitive(primitive),
        Node::Array(array) => visitor.visit_array(array),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ENTRY POINTS
// ————————————————————————————————————————————————————————————————————————————

/// Accessor declarations, indented to sit inside the output class body.
pub fn emit_declarations(root: &Root, config: &CodegenConfig) -> Result<String> {
    let mut cg = DeclEmitter::new(config);
    walk(root, &mut cg)?;
    Ok(cg.into_string())
}

/// Accessor definitions, qualified under `class_name`.
pub fn emit_definitions(root: &Root, class_name: &str, config: &CodegenConfig) -> Result<String> {
    let mut cg = DefnEmitter::new(config, class_name);
    walk(root, &mut cg)?;
    Ok(cg.into_string())
}

/// `get` + type-cased symbol.
pub fn accessor_name(symbol: &str) -> String {
    format!("get{}", type_name(symbol))
}

/// Reject any class whose type name equals its enclosing class, starting
/// from the output class `class_name`.
pub fn check_class_names(root: &Root, class_name: &str) -> Result<()> {
    fn check(nodes: &[Node], enclosing: &str) -> Result<()> {
        for node in nodes {
            if let Node::Class(class) = node {
                let ty = type_name(&class.name);
                if ty == enclosing {
                    return Err(Error::ClassNameClash { name: ty });
                }
                check(&class.members, &ty)?;
            }
        }
        Ok(())
    }
    check(&root.nodes, class_name)
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Line buffer with a depth counter.
#[derive(Debug)]
struct Writer<'a> {
    buf: String,
    level: usize,
    unit: &'a str,
}

impl<'a> Writer<'a> {
    fn new(unit: &'a str, level: usize) -> Self {
        Self { buf: String::new(), level, unit }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.level {
            self.buf.push_str(self.unit);
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Empty line, no trailing indentation.
    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    /// Records the hook sequence.
    #[derive(Default)]
    struct Trace(Vec<String>);

    impl Visitor for Trace {
        fn enter_class(&mut self, class: &Class) -> Result<()> {
            self.0.push(format!("enter {}", class.name));
            Ok(())
        }
        fn leave_class(&mut self, class: &Class) -> Result<()> {
            self.0.push(format!("leave {}", class.name));
            Ok(())
        }
        fn visit_primitive(&mut self, primitive: &Primitive) -> Result<()> {
            self.0.push(format!("prim {}", primitive.name));
            Ok(())
        }
        fn visit_array(&mut self, array: &Array) -> Result<()> {
            self.0.push(format!("array {}", array.name));
            Ok(())
        }
    }

    #[test]
    fn walk_is_pre_order() {
        let root = parse("int a\nclass b\n  int c\n  class d\n  }\n  float e[2]\n}\nbool f").unwrap();
        let mut trace = Trace::default();
        walk(&root, &mut trace).unwrap();
        assert_eq!(
            trace.0,
            [
                "prim a", "enter b", "prim c", "enter d", "leave d", "array e", "leave b", "prim f",
            ]
        );
    }

    #[test]
    fn writer_indents_and_keeps_blanks_clean() {
        let mut w = Writer::new("  ", 1);
        w.line("a");
        w.indent();
        w.blank();
        w.line("b");
        w.dedent();
        w.dedent();
        w.dedent();
        w.line("c");
        assert_eq!(w.into_string(), "  a\n\n    b\nc\n");
    }

    #[test]
    fn accessor_names() {
        assert_eq!(accessor_name("focalLength"), "getFocalLength");
        assert_eq!(accessor_name("Camera"), "getCamera");
    }

    #[test]
    fn class_sharing_its_enclosing_name_is_rejected() {
        let top = parse("class metadata\n  int width\n}").unwrap();
        assert_eq!(
            check_class_names(&top, "Metadata"),
            Err(Error::ClassNameClash { name: "Metadata".into() })
        );

        let nested = parse("class camera\n  class camera\n  }\n}").unwrap();
        assert_eq!(
            check_class_names(&nested, "Doc"),
            Err(Error::ClassNameClash { name: "Camera".into() })
        );

        // same name in unrelated scopes is fine
        let siblings = parse("class a\n  class b\n  }\n}\nclass c\n  class b\n    class a\n    }\n  }\n}").unwrap();
        assert_eq!(check_class_names(&siblings, "Doc"), Ok(()));
    }
}
