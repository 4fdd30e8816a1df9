// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Koa Word Trie.
//!
//! This module defines the rejection reasons for word validation. The word
//! operations themselves never return these as `Err`; they signal failure
//! with a `false` return. [`crate::KoaTrie::validate`] exposes the typed
//! reason for callers that need to distinguish them.

/// Result type for Koa Trie validation.
pub type KoaTrieResult<T> = Result<T, KoaTrieError>;

/// Reasons a word is rejected by the trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KoaTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word contains a character outside A-Z/a-z.
    #[error("Word '{word}' contains non-alphabetic character '{ch}'")]
    NonAlphabetic {
        /// The rejected word.
        word: String,
        /// The first offending character.
        ch: char,
    },

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_len}")]
    WordTooLong {
        /// The rejected word.
        word: String,
        /// The configured length cap.
        max_len: usize,
    },
}

// Display implementation is automatically provided by thiserror
