//! Compiles JavaScript syntax trees into the protobuf AST consumed by the fuzzer.
//!
//! # Architecture
//!
//! ```text
//! jsir_syntax::Program ─> compile/ ─> ir::Ast ─> encode ─> bytes
//!                            │
//!                            └─ schema::make (every message)
//! ```
//!
//! The accepted grammar is deliberately narrow: loop heads bind exactly one
//! variable, parameters are plain identifiers, object members have fixed
//! shapes. Anything else fails with [`CompileError`] rather than being
//! rewritten into something the fuzzer might misread.
//!
//! # Example
//!
//! ```ignore
//! use jsir_compiler::{compile, encode};
//! use jsir_syntax::read_javascript;
//!
//! let program = read_javascript("const x = 1 + 2;")?;
//! let bytes = encode(&compile(&program)?);
//! ```

pub mod compile;
pub mod encode;
pub mod error;
pub mod ir;
pub mod schema;

pub use compile::{CompileOptions, Compiler, compile};
pub use encode::{DecodeError, decode, encode, to_json};
pub use error::{CompileError, ShapeViolation};
pub use ir::Ast;
pub use schema::{Schema, make};
