//! Wire encoding of compiled programs.

use crate::ir::Ast;
use prost::Message;

pub use prost::DecodeError;

/// Canonical protobuf encoding of `ast`.
pub fn encode(ast: &Ast) -> Vec<u8> {
    let bytes = ast.encode_to_vec();
    tracing::debug!(bytes = bytes.len(), "encoded AST");
    bytes
}

pub fn decode(bytes: &[u8]) -> Result<Ast, DecodeError> {
    Ast::decode(bytes)
}

/// Pretty JSON rendering of `ast`, for inspection only.
pub fn to_json(ast: &Ast) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ast)
}
