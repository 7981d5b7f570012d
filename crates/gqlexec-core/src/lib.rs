//! Core building blocks for the `gqlexec` query-execution pipeline.
//!
//! Two loosely coupled pieces live here. The [`DocumentBuilder`] turns raw
//! query text into a typed [`ast::Document`] or a [`SyntaxError`], consuming
//! the external grammar parser through the [`cst`] boundary. The [`resolver`]
//! module holds the field-resolution abstractions that the execution engine
//! and the `gqlexec-di` crate build on.

pub mod ast;
pub mod cst;
mod execution;
pub mod loc;
pub mod resolver;

pub use execution::DocumentBuilder;
pub use execution::SyntaxError;
