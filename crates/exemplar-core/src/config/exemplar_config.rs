//! Top-level exemplar configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EmbeddingConfig, ObservabilityConfig, RetrievalConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`EXEMPLAR_*`)
/// 2. Config file passed to [`ExemplarConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExemplarConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl ExemplarConfig {
    /// Load configuration from `path` (if it exists), then environment overrides.
    ///
    /// A missing file is not an error; compiled defaults are used instead.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `EXEMPLAR_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("EXEMPLAR_K").and_then(|s| s.parse::<usize>().ok()) {
            self.retrieval.k = v;
        }
        if let Some(val) = lookup("EXEMPLAR_RELEVANCY_THRESHOLD") {
            if val.eq_ignore_ascii_case("none") {
                self.retrieval.relevancy_threshold = None;
            } else if let Ok(v) = val.parse::<f64>() {
                self.retrieval.relevancy_threshold = Some(v);
            }
        }
        if let Some(v) = lookup("EXEMPLAR_INDEX_THREADS").and_then(|s| s.parse::<usize>().ok()) {
            self.retrieval.index_threads = v;
        }
        if let Some(v) = lookup("EXEMPLAR_SVM_C").and_then(|s| s.parse::<f64>().ok()) {
            self.retrieval.classifier.c = v;
        }
        if let Some(v) = lookup("EXEMPLAR_SVM_TOL").and_then(|s| s.parse::<f64>().ok()) {
            self.retrieval.classifier.tol = v;
        }
        if let Some(v) = lookup("EXEMPLAR_SVM_MAX_ITER").and_then(|s| s.parse::<usize>().ok()) {
            self.retrieval.classifier.max_iter = v;
        }
        if let Some(v) = lookup("EXEMPLAR_SVM_SEED").and_then(|s| s.parse::<u64>().ok()) {
            self.retrieval.classifier.random_seed = v;
        }
        if let Some(val) = lookup(crate::constants::LOG_ENV_VAR) {
            self.observability.log_level = val;
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_retrieval(&self.retrieval)
    }
}

/// Validate a retrieval section on its own, as retrievers do at construction.
pub fn validate_retrieval(config: &RetrievalConfig) -> Result<(), ConfigError> {
    if config.k == 0 {
        return Err(invalid("retrieval.k", "must be at least 1"));
    }
    if let Some(threshold) = config.relevancy_threshold {
        if !threshold.is_finite() {
            return Err(invalid(
                "retrieval.relevancy_threshold",
                "must be a finite number",
            ));
        }
    }
    let classifier = &config.classifier;
    if !(classifier.c.is_finite() && classifier.c > 0.0) {
        return Err(invalid("retrieval.classifier.c", "must be a positive number"));
    }
    if !(classifier.tol.is_finite() && classifier.tol > 0.0) {
        return Err(invalid("retrieval.classifier.tol", "must be a positive number"));
    }
    if classifier.max_iter == 0 {
        return Err(invalid("retrieval.classifier.max_iter", "must be at least 1"));
    }
    if !classifier.intercept_scaling.is_finite() {
        return Err(invalid(
            "retrieval.classifier.intercept_scaling",
            "must be finite",
        ));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
