//! Input readers - turn source text or exported trees into a [`Program`](crate::Program).

pub mod estree;
pub mod literal;

#[cfg(feature = "read-javascript")]
pub mod javascript;

pub use estree::{ESTREE_READER, EstreeReader, read_estree};

#[cfg(feature = "read-javascript")]
pub use javascript::{JAVASCRIPT_READER, JavaScriptReader, read_javascript};
