/// Constants used throughout the lotry crates

// Tracing target for short-circuit events
pub const SHORT_CIRCUIT_TARGET: &str = "lotry::short_circuit";

// Index reported by searches that found nothing
pub const NOT_FOUND_INDEX: isize = -1;
