// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_K: usize = 4;
pub const DEFAULT_INDEX_THREADS: usize = 0; // 0 = available parallelism

// --- Classifier ---
pub const DEFAULT_C: f64 = 0.1;
pub const DEFAULT_TOL: f64 = 1e-6;
pub const DEFAULT_MAX_ITER: usize = 10_000;
pub const DEFAULT_RANDOM_SEED: u64 = 0;
pub const DEFAULT_INTERCEPT_SCALING: f64 = 1.0;

// --- Embeddings ---
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
