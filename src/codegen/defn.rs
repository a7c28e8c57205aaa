//! Source side: out-of-line definitions for every declared accessor.
//!
//! Every nested accessor object holds the same `m_root` handle as the output
//! class; a scalar accessor resolves its full address from the document root.
use tracing::{debug, warn};

use super::{accessor_name, Visitor, Writer, HANDLE_FIELD, HANDLE_TYPE};
use crate::ast::{Array, Class, Primitive};
use crate::config::CodegenConfig;
use crate::error::Result;
use crate::path::{access_segments, type_name};

pub struct DefnEmitter<'a> {
    config: &'a CodegenConfig,
    /// Qualified-name stack, seeded with the output class.
    scope: Vec<String>,
    out: Writer<'a>,
}

impl<'a> DefnEmitter<'a> {
    pub fn new(config: &'a CodegenConfig, class_name: &str) -> Self {
        Self {
            config,
            scope: vec![class_name.to_string()],
            out: Writer::new(&config.indent, 0),
        }
    }

    pub fn into_string(self) -> String {
        self.out.into_string()
    }

    fn qualified(&self) -> String {
        self.scope.join("::")
    }

    /// `type qualified::name() const { return <expr>; }` plus a trailing blank.
    fn getter(&mut self, ret: &str, name: &str, expr: &str) {
        let q = self.qualified();
        self.out.line(format!("{ret} {q}::{name}() const {{"));
        self.out.indent();
        self.out.line(format!("return {expr};"));
        self.out.dedent();
        self.out.line("}");
        self.out.blank();
    }
}

impl Visitor for DefnEmitter<'_> {
    fn enter_class(&mut self, class: &Class) -> Result<()> {
        let ty = type_name(&class.name);
        self.scope.push(ty.clone());
        let q = self.qualified();
        debug!(class = %q, "defining class");
        self.out.line(format!(
            "{q}::{ty}(const {HANDLE_TYPE} &root) : {HANDLE_FIELD}(root) {{"
        ));
        self.out.blank();
        self.out.line("}");
        self.out.blank();
        Ok(())
    }

    fn leave_class(&mut self, class: &Class) -> Result<()> {
        let ty = type_name(&class.name);
        self.scope.pop();
        let ret = format!("{}::{ty}", self.qualified());
        self.getter(&ret, &accessor_name(&class.name), &format!("{ty}({HANDLE_FIELD})"));
        Ok(())
    }

    fn visit_primitive(&mut self, primitive: &Primitive) -> Result<()> {
        let binding = self.config.binding(primitive.kind)?;
        let (native, extract) = (binding.native.clone(), binding.extract.clone());
        let expr = format!(
            "(*{HANDLE_FIELD}){}.{extract}()",
            subscripts(&primitive.address)?
        );
        self.getter(&native, &accessor_name(&primitive.name), &expr);
        Ok(())
    }

    /// Array accessors are declared but not defined: whether they should
    /// return an owned copy or a view into the JSON array is undecided.
    fn visit_array(&mut self, array: &Array) -> Result<()> {
        // fail the same way the declaration side does
        self.config.binding(array.element_kind)?;
        warn!(
            accessor = %format!("{}::{}", self.qualified(), accessor_name(&array.name)),
            "array accessor bodies are not generated"
        );
        Ok(())
    }
}

/// `/a/b[0]/c` → `["a"]["b"][0]["c"]`
pub fn subscripts(address: &str) -> Result<String> {
    let mut out = String::new();
    for segment in access_segments(address)? {
        out.push_str(&format!("[\"{}\"]", escape(&segment.key)));
        for index in &segment.indices {
            out.push_str(&format!("[{index}]"));
        }
    }
    Ok(out)
}

fn escape(key: &str) -> String {
    key.replace('\\', "\\\\").replace('"', "\\\"")
}
