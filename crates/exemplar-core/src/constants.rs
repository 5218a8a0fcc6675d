/// Exemplar library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Row of the augmented matrix that holds the query vector.
pub const QUERY_ROW: usize = 0;

/// Label assigned to the query row when fitting the separator.
pub const POSITIVE_LABEL: f64 = 1.0;

/// Label assigned to every indexed passage when fitting the separator.
pub const NEGATIVE_LABEL: f64 = -1.0;

/// Projected gradients at or below this magnitude leave a dual variable untouched.
pub const PROJECTED_GRADIENT_EPSILON: f64 = 1.0e-12;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "EXEMPLAR_LOG";
