//! Property tests for chunk packing invariants

use pdfchunk_parsing::{Chunk, ChunkBuilder, ChunkingParameters};
use pdfchunk_test_utils::{FakeTokenCounter, sized_sentences};
use proptest::prelude::*;
use std::sync::Arc;

fn build(sizes: &[usize], budget: usize, ratio: f64) -> (Vec<Chunk>, usize) {
    let params = ChunkingParameters::new(budget, ratio).expect("valid params");
    let overlap_tokens = params.overlap_tokens();
    let builder = ChunkBuilder::new(Arc::new(FakeTokenCounter::new()), params);
    (builder.build(&sized_sentences(sizes, 1)), overlap_tokens)
}

/// Minimal trailing count whose sum reaches `target`, capped at `len - 1`
fn expected_rewind(sizes: &[usize], target: usize) -> usize {
    let mut sum = 0;
    let mut back = 0;
    for &size in sizes.iter().rev() {
        sum += size;
        back += 1;
        if sum >= target {
            break;
        }
    }
    back.min(sizes.len() - 1)
}

fn sizes_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..40, 0..60)
}

#[test]
fn prop_every_sentence_is_covered() {
    proptest!(|(sizes in sizes_strategy(), budget in 1usize..80, ratio in 0.0f64..0.95)| {
        let (chunks, _) = build(&sizes, budget, ratio);

        if sizes.is_empty() {
            prop_assert!(chunks.is_empty());
            return Ok(());
        }

        prop_assert_eq!(chunks[0].sentence_range.start, 0);
        prop_assert_eq!(chunks[chunks.len() - 1].sentence_range.end, sizes.len());
        for pair in chunks.windows(2) {
            prop_assert!(
                pair[1].sentence_range.start <= pair[0].sentence_range.end,
                "Gap between consecutive chunks"
            );
        }
    });
}

#[test]
fn prop_token_budget_respected() {
    proptest!(|(sizes in sizes_strategy(), budget in 1usize..80, ratio in 0.0f64..0.95)| {
        let (chunks, _) = build(&sizes, budget, ratio);

        for chunk in &chunks {
            let expected: usize = sizes[chunk.sentence_range.clone()].iter().sum();
            prop_assert_eq!(chunk.token_count, expected);

            if chunk.sentence_count() > 1 {
                prop_assert!(chunk.token_count <= budget);
            }

            // Packing is greedy: the following sentence would not have fit
            if let Some(next_size) = sizes.get(chunk.sentence_range.end) {
                prop_assert!(chunk.token_count + next_size > budget);
            }
        }
    });
}

#[test]
fn prop_chunk_starts_strictly_increase() {
    proptest!(|(sizes in sizes_strategy(), budget in 1usize..80, ratio in 0.0f64..0.95)| {
        let (chunks, _) = build(&sizes, budget, ratio);

        for pair in chunks.windows(2) {
            prop_assert!(pair[1].sentence_range.start > pair[0].sentence_range.start);
        }
        prop_assert!(chunks.len() <= sizes.len());
    });
}

#[test]
fn prop_overlap_is_minimal_trailing_window() {
    proptest!(|(sizes in sizes_strategy(), budget in 1usize..80, ratio in 0.0f64..0.95)| {
        let (chunks, overlap_tokens) = build(&sizes, budget, ratio);

        for pair in chunks.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let shared = prev.sentence_range.end - next.sentence_range.start;

            if prev.sentence_count() == 1 {
                prop_assert_eq!(shared, 0);
            } else {
                let expected = expected_rewind(&sizes[prev.sentence_range.clone()], overlap_tokens);
                prop_assert_eq!(shared, expected);
            }
        }
    });
}

#[test]
fn prop_build_is_deterministic() {
    proptest!(|(sizes in sizes_strategy(), budget in 1usize..80, ratio in 0.0f64..0.95)| {
        let (first, _) = build(&sizes, budget, ratio);
        let (second, _) = build(&sizes, budget, ratio);
        prop_assert_eq!(first, second);
    });
}
