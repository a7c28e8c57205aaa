//! Minimal CLI: schema → (header + source | ast)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::{CodegenConfig, QualifiedName};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate C++ accessor classes for a JSON document from a line-oriented schema
#[derive(Parser, Debug)]
#[command(name = "json-accessor-gen", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// write `<schema base name>.h` and `.cpp`
    Generate(GenerateOut),
    /// parse the schema and print its tree as JSON
    Ast(AstOut),
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    /// fully qualified output class, e.g. `Lyli::Image::Metadata`
    qualified_name: String,

    /// schema file (`class`, `bool`, `int`, `float`, `string` declarations)
    schema: PathBuf,

    /// directory for the generated files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file overriding scalar bindings and indentation
    #[arg(long)]
    config: Option<PathBuf>,

    /// print both artifacts instead of writing them
    #[arg(long, default_value_t = false)]
    stdout: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct AstOut {
    /// schema file (`class`, `bool`, `int`, `float`, `string` declarations)
    schema: PathBuf,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl GenerateOut {
    fn load_config(&self) -> Result<CodegenConfig> {
        let Some(path) = self.config.as_ref() else {
            return Ok(CodegenConfig::default());
        };
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        CodegenConfig::from_json(&src)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                // 1) inputs
                let name = QualifiedName::parse(&target.qualified_name)?;
                let config = target.load_config()?;
                let schema = read_schema(&target.schema)?;
                let base = base_name(&target.schema)?;

                // 2) render everything before touching the file system
                let artifacts = crate::generate(&schema, &name, &base, &config)
                    .with_context(|| format!("failed to generate from {}", target.schema.display()))?;

                if target.stdout {
                    println!("{}", artifacts.header);
                    println!("{}", artifacts.source);
                    return Ok(());
                }

                // 3) write
                let header_path = target.out_dir.join(format!("{base}.h"));
                let source_path = target.out_dir.join(format!("{base}.cpp"));
                std::fs::create_dir_all(&target.out_dir).with_context(|| {
                    format!("failed to create output directory {}", target.out_dir.display())
                })?;
                write_artifact(&header_path, &artifacts.header)?;
                if let Err(err) = write_artifact(&source_path, &artifacts.source) {
                    // both files or neither
                    if let Err(cleanup) = std::fs::remove_file(&header_path) {
                        warn!(path = %header_path.display(), error = %cleanup, "failed to remove header");
                    }
                    return Err(err);
                }
            }
            Command::Ast(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let schema = read_schema(&target.schema)?;
                let root = crate::parser::parse(&schema)
                    .with_context(|| format!("failed to parse {}", target.schema.display()))?;
                let ast_src = serde_json::to_string_pretty(&root)?;
                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    write_artifact(out, &ast_src)?;
                } else {
                    println!("{ast_src}");
                }
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn read_schema(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))
}

/// File stem of the schema, used to name both artifacts.
fn base_name(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .with_context(|| format!("schema path {} has no file name", path.display()))
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CommandLineInterface::command().debug_assert();
    }

    #[test]
    fn generate_requires_both_arguments() {
        assert!(CommandLineInterface::try_parse_from(["json-accessor-gen", "generate"]).is_err());
        assert!(CommandLineInterface::try_parse_from(["json-accessor-gen", "generate", "A::B"]).is_err());
        let cli = CommandLineInterface::try_parse_from([
            "json-accessor-gen", "generate", "A::B", "schema.txt", "--out-dir", "gen",
        ])
        .unwrap();
        let Command::Generate(target) = cli.cmd else { panic!("expected generate") };
        assert_eq!(target.qualified_name, "A::B");
        assert_eq!(target.schema, PathBuf::from("schema.txt"));
        assert_eq!(target.out_dir, PathBuf::from("gen"));
        assert_eq!(base_name(&target.schema).unwrap(), "schema");
    }
}
