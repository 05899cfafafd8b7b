//! Property tests for in-memory index search ordering.

use proptest::prelude::*;
use voxfin_rag::document::{IndexedRecord, RecordMetadata};
use voxfin_rag::index::VectorIndex;
use voxfin_rag::inmemory::InMemoryVectorIndex;

const DIM: usize = 8;

/// A unit-length embedding of dimension `DIM`.
fn arb_unit_embedding() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-1.0f32..1.0f32, DIM).prop_filter_map("zero vector", |mut v| {
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm < 1e-6 {
            return None;
        }
        for x in &mut v {
            *x /= norm;
        }
        Some(v)
    })
}

fn record_at(position: usize, embedding: Vec<f32>) -> IndexedRecord {
    IndexedRecord {
        id: format!("doc_{position}"),
        embedding,
        metadata: RecordMetadata {
            text: format!("chunk {position}"),
            source: "doc".to_string(),
            page_number: None,
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any stored set, query results come back in descending-score order
    /// and never exceed `top_k` or the number of stored records.
    #[test]
    fn query_results_are_ordered_and_bounded(
        embeddings in proptest::collection::vec(arb_unit_embedding(), 1..16),
        query in arb_unit_embedding(),
        top_k in 1usize..20,
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let stored = embeddings.len();

        let hits = rt.block_on(async {
            let index = InMemoryVectorIndex::new(DIM);
            let records: Vec<IndexedRecord> = embeddings
                .into_iter()
                .enumerate()
                .map(|(i, e)| record_at(i, e))
                .collect();
            index.upsert(&records).await.unwrap();
            index.query(&query, top_k).await.unwrap()
        });

        prop_assert!(hits.len() <= top_k);
        prop_assert!(hits.len() <= stored);
        for pair in hits.windows(2) {
            prop_assert!(
                pair[0].score >= pair[1].score,
                "scores out of order: {} then {}",
                pair[0].score,
                pair[1].score,
            );
        }
    }
}
