//! Vocabulary-free token counter

use super::traits::TokenCounter;

/// Counts whitespace-separated words
///
/// Useful when no BPE vocabulary is wanted, and as a predictable counter
/// in tests. Each word costs exactly one token.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceCounter;

impl WhitespaceCounter {
    pub fn new() -> Self {
        Self
    }
}

impl TokenCounter for WhitespaceCounter {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_words() {
        let counter = WhitespaceCounter::new();
        assert_eq!(counter.count("one two  three\nfour"), 4);
        assert_eq!(counter.count(""), 0);
        assert_eq!(counter.count("   "), 0);
    }
}
