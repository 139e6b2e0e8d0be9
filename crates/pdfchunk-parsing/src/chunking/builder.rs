//! Greedy token-bounded chunk packing with sentence-level overlap

use super::traits::TokenCounterRef;
use super::types::{Chunk, ChunkingParameters, Sentence};
use std::collections::BTreeSet;

/// Packs an ordered sentence stream into overlapping chunks
///
/// Each chunk is filled greedily up to the token budget. A sentence that is
/// over budget on its own becomes a single-sentence chunk. After each
/// multi-sentence chunk the cursor is rewound over just enough trailing
/// sentences to cover `overlap_tokens`, but never back to the chunk's start.
pub struct ChunkBuilder {
    counter: TokenCounterRef,
    params: ChunkingParameters,
}

impl ChunkBuilder {
    pub fn new(counter: TokenCounterRef, params: ChunkingParameters) -> Self {
        Self { counter, params }
    }

    pub fn params(&self) -> &ChunkingParameters {
        &self.params
    }

    pub fn counter_name(&self) -> &str {
        self.counter.name()
    }

    /// Build chunks from sentences in reading order
    pub fn build(&self, sentences: &[Sentence]) -> Vec<Chunk> {
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        let token_counts = self.counter.count_batch(&texts);
        self.pack(sentences, &token_counts)
    }

    fn pack(&self, sentences: &[Sentence], token_counts: &[usize]) -> Vec<Chunk> {
        let budget = self.params.chunk_size_tokens();
        let overlap_tokens = self.params.overlap_tokens();
        let total = sentences.len();

        let mut chunks = Vec::new();
        let mut cursor = 0;

        loop {
            let start = cursor;
            let mut tokens = 0;

            while cursor < total {
                let sentence_tokens = token_counts[cursor];
                if cursor == start && sentence_tokens >= budget {
                    // Oversized sentence becomes its own chunk
                    tokens = sentence_tokens;
                    cursor += 1;
                    break;
                }
                if tokens + sentence_tokens > budget {
                    break;
                }
                tokens += sentence_tokens;
                cursor += 1;
            }

            if cursor == start {
                break;
            }

            chunks.push(Self::assemble(&sentences[start..cursor], tokens, start));

            if cursor >= total {
                break;
            }

            let packed = cursor - start;
            if packed == 1 {
                continue;
            }

            let rewind = Self::rewind_count(&token_counts[start..cursor], overlap_tokens);
            cursor = (start + 1).max(cursor - rewind);
        }

        tracing::debug!(
            sentences = total,
            chunks = chunks.len(),
            budget,
            overlap_tokens,
            "Packed sentences into chunks"
        );
        chunks
    }

    /// Trailing sentences whose token sum first reaches `overlap_tokens`,
    /// capped so the chunk is never fully undone
    fn rewind_count(packed_counts: &[usize], overlap_tokens: usize) -> usize {
        let mut back_tokens = 0;
        let mut back = 0;
        for &count in packed_counts.iter().rev() {
            back_tokens += count;
            back += 1;
            if back_tokens >= overlap_tokens {
                break;
            }
        }
        back.min(packed_counts.len() - 1)
    }

    fn assemble(sentences: &[Sentence], token_count: usize, start: usize) -> Chunk {
        let text = sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let pages: BTreeSet<u32> = sentences.iter().map(|s| s.page).collect();
        let chunk = Chunk {
            text,
            pages: pages.into_iter().collect(),
            token_count,
            sentence_range: start..start + sentences.len(),
        };
        tracing::trace!(
            range = ?chunk.sentence_range,
            tokens = chunk.token_count,
            pages = %chunk.page_range(),
            "Emitted chunk"
        );
        chunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::WhitespaceCounter;
    use std::sync::Arc;

    fn words(n: usize, tag: usize) -> String {
        (0..n).map(|i| format!("s{tag}w{i}")).collect::<Vec<_>>().join(" ")
    }

    fn sentences(sizes: &[usize]) -> Vec<Sentence> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| Sentence::new(words(n, i), 1))
            .collect()
    }

    fn builder(size: usize, ratio: f64) -> ChunkBuilder {
        let params = ChunkingParameters::new(size, ratio).expect("valid params");
        ChunkBuilder::new(Arc::new(WhitespaceCounter::new()), params)
    }

    fn ranges(chunks: &[Chunk]) -> Vec<(usize, usize)> {
        chunks
            .iter()
            .map(|c| (c.sentence_range.start, c.sentence_range.end))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(builder(100, 0.1).build(&[]).is_empty());
    }

    #[test]
    fn test_ten_equal_sentences_overlap_by_one() {
        let chunks = builder(120, 0.1).build(&sentences(&[50; 10]));

        let expected: Vec<(usize, usize)> = (0..9).map(|i| (i, i + 2)).collect();
        assert_eq!(ranges(&chunks), expected);
        assert!(chunks.iter().all(|c| c.token_count == 100));
    }

    #[test]
    fn test_oversized_single_sentence() {
        let input = vec![Sentence::new(words(500, 0), 4)];
        let chunks = builder(300, 0.1).build(&input);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, input[0].text);
        assert_eq!(chunks[0].pages, vec![4]);
        assert_eq!(chunks[0].token_count, 500);
    }

    #[test]
    fn test_sentence_exactly_at_budget_stands_alone() {
        let chunks = builder(10, 0.5).build(&sentences(&[10, 2, 2]));
        assert_eq!(ranges(&chunks), vec![(0, 1), (1, 3)]);
    }

    #[test]
    fn test_oversized_sentence_mid_stream() {
        let chunks = builder(10, 0.2).build(&sentences(&[3, 3, 40, 3]));
        // Rewound sentence 1 cannot share a chunk with the 40-token sentence
        assert_eq!(ranges(&chunks), vec![(0, 2), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_single_sentence_chunk_skips_rewind() {
        let chunks = builder(10, 0.5).build(&sentences(&[8, 8, 8]));
        assert_eq!(ranges(&chunks), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_zero_ratio_still_rewinds_one_sentence() {
        let chunks = builder(10, 0.0).build(&sentences(&[4, 4, 4, 4]));
        assert_eq!(ranges(&chunks), vec![(0, 2), (1, 3), (2, 4)]);
    }

    #[test]
    fn test_rewind_capped_below_chunk_length() {
        // Overlap target 9 would take all three sentences back
        let chunks = builder(10, 0.9).build(&sentences(&[3, 3, 3, 3]));
        assert_eq!(ranges(&chunks), vec![(0, 3), (1, 4)]);
    }

    #[test]
    fn test_text_joined_and_pages_sorted() {
        let input = vec![
            Sentence::new("Alpha one.", 2),
            Sentence::new("Beta two.", 3),
            Sentence::new("Gamma three.", 3),
        ];
        let chunks = builder(100, 0.1).build(&input);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Alpha one. Beta two. Gamma three.");
        assert_eq!(chunks[0].pages, vec![2, 3]);
        assert_eq!(chunks[0].page_range(), "2,3");
    }

    #[test]
    fn test_deterministic() {
        let input = sentences(&[5, 17, 2, 9, 30, 1, 1, 12]);
        let b = builder(20, 0.3);
        assert_eq!(b.build(&input), b.build(&input));
    }
}
