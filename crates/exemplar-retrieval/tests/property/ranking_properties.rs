use std::sync::Arc;

use exemplar_core::config::RetrievalConfig;
use exemplar_core::traits::IRetriever;
use exemplar_embeddings::EmbeddingIndex;
use exemplar_retrieval::{RankingEngine, SvmRetriever};
use proptest::prelude::*;
use test_fixtures::TopicEmbedder;

const WORDS: [&str; 12] = [
    "cat", "dog", "puppy", "kitten", "car", "truck", "repair", "pasta", "pizza", "rust",
    "guitar", "piano",
];

/// Query plus 1..8 passages, all of the same dimension.
fn query_and_rows() -> impl Strategy<Value = (Vec<f32>, Vec<Vec<f32>>)> {
    (2usize..6).prop_flat_map(|dims| {
        (
            prop::collection::vec(-1.0f32..1.0, dims),
            prop::collection::vec(prop::collection::vec(-1.0f32..1.0, dims), 1..8),
        )
    })
}

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..3).prop_map(|w| w.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn query_row_is_pinned_first_and_order_is_a_permutation((query, rows) in query_and_rows()) {
        let n = rows.len();
        let index = EmbeddingIndex::from_rows(rows).unwrap();
        let result = RankingEngine::default().rank(&query, &index).unwrap();

        prop_assert_eq!(result.sorted_ix[0], 0);
        let mut seen = result.sorted_ix.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..=n).collect::<Vec<_>>());
    }

    #[test]
    fn normalized_scores_span_zero_to_below_one((query, rows) in query_and_rows()) {
        let index = EmbeddingIndex::from_rows(rows).unwrap();
        let result = RankingEngine::default().rank(&query, &index).unwrap();

        let min = result.normalized.iter().copied().fold(f64::INFINITY, f64::min);
        let max = result.normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(min, 0.0);
        prop_assert!(max < 1.0, "max normalized score {}", max);
        prop_assert!(result.normalized.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn never_more_than_k_results(
        passages in prop::collection::vec(phrase(), 1..8),
        query in phrase(),
        k in 1usize..10,
    ) {
        let retriever = SvmRetriever::from_texts(
            passages.clone(),
            Arc::new(TopicEmbedder::new()),
            RetrievalConfig::default().with_k(k),
        )
        .unwrap();
        let results = retriever.get_relevant_documents(&query).unwrap();
        prop_assert_eq!(results.len(), k.min(passages.len()));
    }

    #[test]
    fn higher_threshold_only_removes_results(
        passages in prop::collection::vec(phrase(), 1..8),
        query in phrase(),
        low in 0.0f64..0.5,
        high in 0.5f64..1.0,
    ) {
        let run = |threshold: f64| {
            SvmRetriever::from_texts(
                passages.clone(),
                Arc::new(TopicEmbedder::new()),
                RetrievalConfig::default()
                    .with_k(passages.len())
                    .with_relevancy_threshold(Some(threshold)),
            )
            .unwrap()
            .get_relevant_documents(&query)
            .unwrap()
        };
        let loose = run(low);
        let strict = run(high);
        // Same ranking for both runs, so the strict results are an ordered
        // subsequence of the loose ones.
        let mut remaining = loose.iter();
        for kept in &strict {
            prop_assert!(remaining.any(|r| r == kept), "{:?} not in loose results", kept);
        }
    }
}
