// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Configuration for the Koa Word Trie.

/// Configuration for the Koa Word Trie.
///
/// The trie always stores words case-insensitively; the only tunable is an
/// optional cap on word length, useful for bounding memory per insertion
/// when the trie is fed untrusted input.
#[derive(Debug, Clone)]
pub struct KoaTrieConfig {
    /// Optional maximum accepted word length in characters.
    /// If `None`, word length is unconstrained.
    max_word_len: Option<usize>,
}

impl KoaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_word_len: None (unconstrained)
    pub fn new() -> Self {
        Self { max_word_len: None }
    }

    /// Set a maximum accepted word length.
    ///
    /// Words longer than this are rejected as invalid by every word
    /// operation. Must be greater than zero.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        if max_word_len == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        self.max_word_len = Some(max_word_len);
        self
    }

    /// Get the configured word length cap, if any.
    pub fn get_max_word_len(&self) -> Option<usize> {
        self.max_word_len
    }
}

impl Default for KoaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KoaTrieConfig::default();
        assert_eq!(config.get_max_word_len(), None);
    }

    #[test]
    fn test_config_builder() {
        let config = KoaTrieConfig::new().with_max_word_len(64);
        assert_eq!(config.get_max_word_len(), Some(64));
    }

    #[test]
    #[should_panic(expected = "Maximum word length must be greater than 0")]
    fn test_invalid_max_word_len() {
        let _config = KoaTrieConfig::new().with_max_word_len(0);
    }
}
