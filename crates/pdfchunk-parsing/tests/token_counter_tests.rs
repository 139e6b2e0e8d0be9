//! Tests for all token counter implementations

use pdfchunk_parsing::{
    TiktokenCounter, TokenCodec, TokenCounter, TokenCounterRef, WhitespaceCounter,
    counter_for_encoding,
};
use pdfchunk_test_utils::FakeTokenCounter;
use std::sync::Arc;

#[test]
fn test_all_counters_implement_trait() {
    let counters: Vec<TokenCounterRef> = vec![
        Arc::new(WhitespaceCounter::new()),
        Arc::new(FakeTokenCounter::new()),
        Arc::new(TiktokenCounter::cl100k().expect("Should create")),
    ];

    for counter in counters {
        assert!(!counter.name().is_empty());
        assert_eq!(counter.count(""), 0);
        assert!(counter.count("Hello world") > 0);

        let batch = counter.count_batch(&["Hello", "World"]);
        assert_eq!(batch.len(), 2);
    }
}

#[test]
fn test_counts_are_stable_across_calls() {
    let counter = counter_for_encoding("cl100k_base").expect("cl100k");
    let text = "Token counts must not drift between calls, or packing would change.";

    let first = counter.count(text);
    for _ in 0..10 {
        assert_eq!(counter.count(text), first);
    }
}

#[test]
fn test_tiktoken_vs_whitespace_on_prose() {
    let text = "The quick brown fox jumps over the lazy dog. This is a test of token counting!";

    let tiktoken = TiktokenCounter::cl100k().expect("Should create tiktoken counter");
    let whitespace = WhitespaceCounter::new();

    // BPE splits punctuation off, so it never counts fewer tokens than words here
    assert!(tiktoken.count(text) >= whitespace.count(text));
}

#[test]
fn test_encodings_disagree_on_some_text() {
    let text = "你好世界，这是一个关于分块的测试。";
    let cl100k = TiktokenCounter::for_encoding("cl100k_base").expect("cl100k");
    let r50k = TiktokenCounter::for_encoding("r50k_base").expect("r50k");

    // The GPT-2 vocabulary falls back to byte tokens for CJK
    assert!(r50k.count(text) > cl100k.count(text));
}

#[test]
fn test_decode_restores_encoded_text() {
    let counter = TiktokenCounter::cl100k().expect("cl100k");
    for text in ["", "plain", "你好世界", "Mixed 🔥 text, with punctuation."] {
        let tokens = counter.encode(text);
        assert_eq!(counter.decode(&tokens).expect("decode"), text);
    }
}
