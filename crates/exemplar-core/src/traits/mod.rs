mod embedding;
mod retriever;

pub use embedding::IEmbeddingProvider;
pub use retriever::{IRetriever, RetrieverCapabilities};
