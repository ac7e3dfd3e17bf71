//! Short-circuit reporting shared by every collection operation.

#[cfg(feature = "tracing")]
use crate::constants::SHORT_CIRCUIT_TARGET;

/// Record that `operation` stopped because the callback failed on the
/// element at `index`.
///
/// Emits a single `TRACE` event on
/// [`SHORT_CIRCUIT_TARGET`](crate::constants::SHORT_CIRCUIT_TARGET). The
/// callback's error is opaque to the library and is not part of the event.
/// Compiles to nothing without the `tracing` feature.
#[inline]
pub fn short_circuit(operation: &'static str, index: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: SHORT_CIRCUIT_TARGET,
        operation,
        index,
        "callback failed, halting iteration"
    );

    #[cfg(not(feature = "tracing"))]
    let _ = (operation, index);
}

/// Extension for callback results that reports the failure before it is
/// propagated with `?`.
pub trait ShortCircuit<T, E> {
    /// Pass `self` through unchanged, reporting a short circuit when it is `Err`
    fn halt_at(self, operation: &'static str, index: usize) -> Result<T, E>;
}

impl<T, E> ShortCircuit<T, E> for Result<T, E> {
    #[inline]
    fn halt_at(self, operation: &'static str, index: usize) -> Result<T, E> {
        if self.is_err() {
            short_circuit(operation, index);
        }
        self
    }
}
