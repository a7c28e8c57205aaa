//! Schema → jsoncpp accessor generator.
//!
//! A schema describes the shape of a JSON document as nested classes of
//! scalar fields:
//!
//! ```text
//! class Metadata
//!     string title
//!     int width
//!     class Camera
//!         float focalLength
//!     }
//! }
//! ```
//!
//! [`generate`] turns it into a C++ header/source pair whose accessor objects
//! read each field out of a shared `Json::Value` by path.
pub mod ast;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod lines;
pub mod parser;
pub mod path;
pub mod template;

use tracing::debug;

pub use config::CodegenConfig;
pub use error::{Error, Result};
pub use template::QualifiedName;

/// The two rendered output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: String,
    pub source: String,
}

/// Parse `schema` and render both artifacts. `include` is the header base
/// name the source file includes. Nothing partial is returned on failure.
pub fn generate(
    schema: &str,
    name: &QualifiedName,
    include: &str,
    config: &CodegenConfig,
) -> Result<Artifacts> {
    // 1) parse
    let root = parser::parse(schema)?;
    codegen::check_class_names(&root, &name.class)?;

    // 2) both passes only borrow the tree
    let (declarations, definitions) = rayon::join(
        || codegen::emit_declarations(&root, config),
        || codegen::emit_definitions(&root, &name.class, config),
    );
    let (declarations, definitions) = (declarations?, definitions?);
    debug!(
        declarations = declarations.len(),
        definitions = definitions.len(),
        "emitted accessor fragments"
    );

    // 3) wrap
    let header = template::render(
        template::HEADER,
        &template::placeholders(name, include, declarations),
    )?;
    let source = template::render(
        template::SOURCE,
        &template::placeholders(name, include, definitions),
    )?;
    Ok(Artifacts { header, source })
}
