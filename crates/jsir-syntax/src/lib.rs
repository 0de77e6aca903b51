//! JavaScript syntax trees for the `jsir` compiler.
//!
//! `jsir-syntax` owns the input side of the pipeline: a Babel-shaped syntax
//! tree and the readers that produce it.
//!
//! # Architecture
//!
//! ```text
//! Input                     Reader               Tree
//! ─────────────────    ──────────────────    ─────────
//! JavaScript source ─> tree-sitter reader ─┐
//!                                          ├─> Program
//! Babel JSON        ─> ESTree reader    ───┘   (ast/)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use jsir_syntax::input::read_javascript;
//!
//! let program = read_javascript("const x = 1 + 2;")?;
//! assert_eq!(program.body[0].kind(), "VariableDeclaration");
//! ```
//!
//! The tree is syntax only: no scopes, no types. Constructs outside the
//! modeled grammar are kept as `Unsupported` nodes carrying their Babel kind
//! name so that the compiler can reject them with a precise message.

pub mod ast;
pub mod input;
pub mod registry;
pub mod traits;

// Re-exports: tree types
pub use ast::{
    ArrowBody, ArrowFunction, BlockStatement, CatchClause, Expression, ForInit, Function,
    Identifier, MethodKind, ObjectMember, ObjectMethod, ObjectProperty, Pattern, Program,
    Statement, UnsupportedNode, VariableDeclaration, VariableDeclarator,
};

// Re-exports: Traits
pub use traits::{ReadError, Reader};

// Re-exports: Registry
pub use registry::{reader_for_extension, reader_for_language, readers, register_reader};

// Re-exports: Built-in readers
pub use input::estree::{ESTREE_READER, EstreeReader, read_estree};
#[cfg(feature = "read-javascript")]
pub use input::javascript::{JAVASCRIPT_READER, JavaScriptReader, read_javascript};
