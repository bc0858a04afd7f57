//! Trace hook for operation boundaries.
//!
//! With the `tracing` feature enabled, [`trace_operation!`] emits a single
//! trace-level event carrying the operation name and its size fields. With
//! the feature disabled it expands to nothing and the field expressions are
//! never evaluated.

#[cfg(feature = "tracing")]
macro_rules! trace_operation {
    ($operation:literal $(, $field:ident = $value:expr)* $(,)?) => {
        ::tracing::trace!(operation = $operation $(, $field = $value)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_operation {
    ($operation:literal $(, $field:ident = $value:expr)* $(,)?) => {};
}

pub(crate) use trace_operation;
