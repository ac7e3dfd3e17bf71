//! Functional programming utilities for lotry callbacks
//!
//! This module provides fallible composition and partial application, so
//! callbacks passed to the collection operations can be assembled from
//! smaller functions without giving up error propagation.

pub mod composition;
pub mod partial;

// Re-export commonly used helpers
pub use composition::{compose, constant, flip, identity, lift, lift2, negate, negate2};
pub use partial::{partial, partial1, partial2, partial3, partial4, partial5};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::composition::*;
    pub use super::partial::*;
}
