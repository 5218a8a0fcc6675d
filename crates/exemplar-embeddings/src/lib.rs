//! # exemplar-embeddings
//!
//! Turns passages into an [`EmbeddingIndex`]: one `f32` row per passage,
//! built concurrently and stored in input order.
//!
//! Also ships an in-memory cache usable in front of any provider.

pub mod builder;
pub mod cache;
pub mod index;

pub use builder::IndexBuilder;
pub use cache::CachedProvider;
pub use index::{validate_dimensions, EmbeddingIndex};
