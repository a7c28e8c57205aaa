//! Header side: nested accessor classes and accessor signatures.
use tracing::debug;

use super::{accessor_name, Visitor, Writer, HANDLE_FIELD, HANDLE_TYPE};
use crate::ast::{Array, Class, Primitive};
use crate::config::CodegenConfig;
use crate::error::Result;
use crate::path::type_name;

/// Generated declarations live inside the output class body.
const BASE_LEVEL: usize = 1;

pub struct DeclEmitter<'a> {
    config: &'a CodegenConfig,
    out: Writer<'a>,
}

impl<'a> DeclEmitter<'a> {
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self { config, out: Writer::new(&config.indent, BASE_LEVEL) }
    }

    pub fn into_string(self) -> String {
        self.out.into_string()
    }
}

impl Visitor for DeclEmitter<'_> {
    fn enter_class(&mut self, class: &Class) -> Result<()> {
        let ty = type_name(&class.name);
        debug!(class = %ty, depth = self.out.level, "declaring class");
        self.out.blank();
        self.out.line(format!("class {ty} {{"));
        self.out.line("public:");
        self.out.indent();
        self.out.line(format!("{ty}() = default;"));
        self.out.line(format!("{ty}(const {ty}& other) = default;"));
        self.out.line(format!("{ty}(const {HANDLE_TYPE} &root);"));
        self.out.blank();
        Ok(())
    }

    fn leave_class(&mut self, class: &Class) -> Result<()> {
        let ty = type_name(&class.name);
        self.out.dedent();
        self.out.line("private:");
        self.out.indent();
        self.out.line(format!("{HANDLE_TYPE} {HANDLE_FIELD};"));
        self.out.dedent();
        self.out.line("};");
        // owning accessor on the enclosing scope
        self.out.line(format!("{ty} {}() const;", accessor_name(&class.name)));
        Ok(())
    }

    fn visit_primitive(&mut self, primitive: &Primitive) -> Result<()> {
        let native = &self.config.binding(primitive.kind)?.native;
        self.out.line(format!("{native} {}() const;", accessor_name(&primitive.name)));
        Ok(())
    }

    fn visit_array(&mut self, array: &Array) -> Result<()> {
        let native = &self.config.binding(array.element_kind)?.native;
        self.out.line(format!("{native}* {}() const;", accessor_name(&array.name)));
        Ok(())
    }
}
