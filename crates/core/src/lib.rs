//! Core building blocks shared by the lotry crates.
//!
//! Every collection operation in `lotry-collections` consumes callbacks that
//! may fail, stops at the first failure, and hands that failure back to the
//! caller unchanged. This crate holds the pieces of that contract that are not
//! tied to a particular collection.
//!
//! ## Key Components
//!
//! - **`zero`**: the zero value of a type, used where an operation has to
//!   produce a value without having found one.
//! - **`trace`**: the short-circuit hook that reports a halted iteration
//!   through `tracing`.
//! - **`errors`**: an optional `Error` enum and `Result` alias for callers
//!   who want a ready-made callback error.
//! - **`functional`**: fallible composition and partial application.
//! - **`constants`**: shared constants such as the tracing target.

pub mod constants;
pub mod errors;
pub mod functional;
pub mod trace;
pub mod zero;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    trace::{short_circuit, ShortCircuit},
    zero::empty,
};
