//! Errors surfaced by the parse → emit → render pipeline.
//!
//! Every failure is synchronous and deterministic: the same input fails the
//! same way, and nothing is written when any stage fails.
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A schema line whose leading token is neither a keyword nor an
    /// array-suffixed token, or which is missing its field token.
    #[error("line {line}: malformed declaration `{text}`: {reason}")]
    MalformedDeclaration {
        line: usize,
        text: String,
        reason: String,
    },

    /// A `class` block ran into end of input before its closing `}`.
    #[error("line {line}: class `{name}` is never closed with `}}`")]
    UnterminatedBlock { line: usize, name: String },

    /// A declaration token that yields no identifier, or an address segment
    /// with a broken index suffix.
    #[error("invalid token `{token}`")]
    InvalidToken { token: String },

    /// The emitter has no binding for a scalar kind the parser accepted.
    /// Always an internal-consistency fault in the bindings, never retried.
    #[error("no native type binding for scalar kind `{kind}`")]
    UnknownScalarKind { kind: String },

    /// A schema class whose type name equals its enclosing class, which C++
    /// would read as a constructor (`Metadata::Metadata`).
    #[error("class `{name}` has the same name as its enclosing class")]
    ClassNameClash { name: String },

    #[error("template placeholder `${{{name}}}` has no value")]
    MissingPlaceholder { name: String },

    #[error("invalid qualified name `{name}` (expected e.g. `Outer::Inner::Class`)")]
    InvalidQualifiedName { name: String },
}
