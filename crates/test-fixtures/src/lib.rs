//! Shared test fixtures for the exemplar workspace.
//!
//! Stub embedders with known, hand-checkable behavior:
//! - [`TopicEmbedder`]: words map onto a handful of named topic axes
//! - [`DelayedEmbedder`]: per-text latency, for completion-order tests
//! - [`FailingEmbedder`]: fails on texts containing a poison word
//! - [`CountingEmbedder`]: counts calls, for cache tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use exemplar_core::errors::{EmbeddingError, ExemplarResult};
use exemplar_core::traits::IEmbeddingProvider;

/// Topic axes of [`TopicEmbedder`], in vector order.
pub const TOPICS: [&str; 8] = [
    "animal", "feline", "canine", "vehicle", "mechanic", "food", "code", "music",
];

/// Embeds text as an L2-normalized bag of topic hits.
///
/// `cat` is `animal + feline`, `dog` is `animal + canine`, `car engine repair`
/// is `2 * vehicle + mechanic`. Unknown words contribute nothing.
#[derive(Debug, Clone)]
pub struct TopicEmbedder {
    lexicon: HashMap<&'static str, Vec<usize>>,
}

impl TopicEmbedder {
    pub fn new() -> Self {
        let entries: [(&str, &[&str]); 20] = [
            ("cat", &["animal", "feline"]),
            ("cats", &["animal", "feline"]),
            ("kitten", &["animal", "feline"]),
            ("dog", &["animal", "canine"]),
            ("dogs", &["animal", "canine"]),
            ("puppy", &["animal", "canine"]),
            ("car", &["vehicle"]),
            ("truck", &["vehicle"]),
            ("engine", &["vehicle"]),
            ("repair", &["mechanic"]),
            ("mechanic", &["mechanic"]),
            ("pasta", &["food"]),
            ("pizza", &["food"]),
            ("recipe", &["food"]),
            ("rust", &["code"]),
            ("compiler", &["code"]),
            ("code", &["code"]),
            ("guitar", &["music"]),
            ("piano", &["music"]),
            ("song", &["music"]),
        ];
        let lexicon = entries
            .into_iter()
            .map(|(word, topics)| {
                let axes = topics
                    .iter()
                    .filter_map(|t| TOPICS.iter().position(|axis| axis == t))
                    .collect();
                (word, axes)
            })
            .collect();
        Self { lexicon }
    }
}

impl Default for TopicEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl IEmbeddingProvider for TopicEmbedder {
    fn embed(&self, text: &str) -> ExemplarResult<Vec<f32>> {
        let mut vec = vec![0.0f32; TOPICS.len()];
        for word in text.split(|c: char| !c.is_alphanumeric()) {
            if let Some(axes) = self.lexicon.get(word.to_lowercase().as_str()) {
                for &axis in axes {
                    vec[axis] += 1.0;
                }
            }
        }
        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vec.iter_mut().for_each(|v| *v /= norm);
        }
        Ok(vec)
    }

    fn dimensions(&self) -> usize {
        TOPICS.len()
    }

    fn name(&self) -> &str {
        "topic"
    }
}

/// Embeds each known text as a one-hot vector after a per-text delay.
#[derive(Debug, Clone)]
pub struct DelayedEmbedder {
    positions: HashMap<String, usize>,
    delays: HashMap<String, Duration>,
}

impl DelayedEmbedder {
    /// Texts later in `texts` sleep less, so they complete first.
    pub fn reversed(texts: &[&str], step_ms: u64) -> Self {
        let n = texts.len() as u64;
        let positions = texts
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();
        let delays = texts
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), Duration::from_millis((n - i as u64) * step_ms)))
            .collect();
        Self { positions, delays }
    }

    /// The vector this embedder returns for `text`.
    pub fn expected(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0; self.positions.len()];
        if let Some(&i) = self.positions.get(text) {
            vec[i] = 1.0;
        }
        vec
    }
}

impl IEmbeddingProvider for DelayedEmbedder {
    fn embed(&self, text: &str) -> ExemplarResult<Vec<f32>> {
        let delay = self
            .delays
            .get(text)
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: format!("unknown text {text:?}"),
            })?;
        thread::sleep(*delay);
        Ok(self.expected(text))
    }

    fn dimensions(&self) -> usize {
        self.positions.len()
    }

    fn name(&self) -> &str {
        "delayed"
    }
}

/// Fails on any text containing `poison`; otherwise returns a fixed pattern.
#[derive(Debug, Clone)]
pub struct FailingEmbedder {
    dimensions: usize,
    poison: String,
}

impl FailingEmbedder {
    pub fn new(dimensions: usize, poison: impl Into<String>) -> Self {
        Self {
            dimensions,
            poison: poison.into(),
        }
    }
}

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, text: &str) -> ExemplarResult<Vec<f32>> {
        if text.contains(&self.poison) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("refused to embed {text:?}"),
            }
            .into());
        }
        Ok((0..self.dimensions)
            .map(|j| ((text.len() + j) % 7) as f32)
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Counts `embed` calls. Vectors depend only on the text length.
#[derive(Debug, Default)]
pub struct CountingEmbedder {
    dimensions: usize,
    calls: AtomicUsize,
}

impl CountingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for CountingEmbedder {
    fn embed(&self, text: &str) -> ExemplarResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![text.len() as f32; self.dimensions])
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "counting"
    }
}
