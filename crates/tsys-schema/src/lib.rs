//! # tsys-schema — Validators
//!
//! Turns untyped [`Value`](tsys_core::Value)s into typed ones, or explains
//! exactly where and why they are wrong.
//!
//! ## Primitive Validators
//!
//! [`BooleanValidator`], [`StringValidator`], [`IntegerValidator`],
//! [`NumberValidator`] and the temporal trio [`DateValidator`],
//! [`TimeValidator`], [`DateTimeValidator`]. Each checks null and type
//! before any constraint, and the first failure wins.
//! Coercion (numeric strings, boolean tokens, whole floats to integers) is
//! disabled by the `strict` flag. Temporal grammars are always parsed.
//!
//! ## Object Engine
//!
//! [`ObjectValidator`] dispatches each key to `properties`,
//! `pattern_properties` or the [`AdditionalProperties`] policy, recurses,
//! and merges child failures into a single path-addressed
//! [`ErrorTree`](tsys_core::ErrorTree).
//!
//! ## Definitions
//!
//! The [`definition`] module builds a [`Validator`] graph from a JSON
//! descriptor. It goes through the same constructors as typed
//! construction, so the same conflicts are rejected.
//!
//! ## Crate Policy
//!
//! - Depends only on `tsys-core` internally.
//! - Invalid data never panics and never returns `Err`; only invalid
//!   schemas do, at construction.
//! - Validators are immutable after construction and `Send + Sync`.

mod common;
mod grammar;

pub mod boolean;
pub mod definition;
pub mod numeric;
pub mod object;
pub mod string;
pub mod temporal;
pub mod validator;

pub use boolean::{BooleanOptions, BooleanValidator};
pub use numeric::{IntegerOptions, IntegerValidator, NumberOptions, NumberValidator};
pub use object::{AdditionalProperties, ObjectOptions, ObjectValidator};
pub use string::{StringOptions, StringValidator};
pub use temporal::{DateTimeValidator, DateValidator, TemporalOptions, TimeValidator};
pub use validator::{Validator, ValidatorKind};
