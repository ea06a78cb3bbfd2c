//! # tsys-core — Foundational Types for Typed Coercion
//!
//! This crate defines the values that flow into and out of every validator
//! in the workspace. It knows nothing about schemas; `tsys-schema` builds
//! the validators on top of these types.
//!
//! ## Key Design Principles
//!
//! 1. **One closed input model.** [`Value`] is the untyped, JSON-like input
//!    plus native date/time values. Map keys are [`Key`]s so that non-string
//!    keys can be represented and rejected rather than silently stringified.
//!
//! 2. **Errors mirror the input shape.** [`ErrorTree`] is either a single
//!    [`ErrorMessage`] or a branch keyed by property name. It never holds
//!    both, and an empty branch means "no error".
//!
//! 3. **Success xor failure.** [`ValidationResult`] is an enum: a coerced
//!    value or an error tree, never both and never a partial success.
//!
//! 4. **Data errors are values, schema errors are `Err`.** Bad input is
//!    reported inside a `ValidationResult`. Only misconfigured schemas
//!    produce a [`SchemaError`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tsys-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod message;
pub mod result;
pub mod tree;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::SchemaError;
pub use message::{ErrorCode, ErrorMessage, MessageStyle};
pub use result::ValidationResult;
pub use tree::{ErrorTree, Iter, Path};
pub use value::{DateTimeValue, Key, Map, Value};
