//! # exemplar-observability
//!
//! Tracing subscriber setup and the span macros used by the index builder,
//! the ranking engine, and the retriever.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, try_init_tracing, try_init_tracing_with_filter};
