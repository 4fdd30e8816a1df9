//! Test modules for the Koa Word Trie.
//!
//! This module contains the crate-internal test suites:
//! - Unit tests covering every operation and error path
//! - Property-based tests using proptest
//! - Validation rejection tables using test-case
//!
//! Cross-crate integration scenarios live in `tests/koa_trie_test.rs`.

pub mod validation_tests;
