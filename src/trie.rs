// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Koa Word Trie implementation.
//!
//! The trie stores case-insensitive alphabetic words and answers exact-word
//! membership queries. Deletion prunes nodes that no longer serve any stored
//! word, so repeated add/delete cycles do not accumulate dead paths.

use crate::config::KoaTrieConfig;
use crate::error::{KoaTrieError, KoaTrieResult};
use crate::node::{letter_index, TrieNode};

/// Koa Word Trie: a prefix tree over the lowercase Latin alphabet with a
/// running count of stored words.
///
/// Key properties:
/// * Case-insensitive storage and lookup ("BANANA" and "banana" are the same word)
/// * Exact-word membership only; an internal path node is not a word
/// * Deletion prunes dead paths back toward the root
/// * O(1) word count via [`KoaTrie::len`]
///
/// Invalid input (empty words, non-alphabetic characters, words over a
/// configured length cap) is an expected, handled case: every word operation
/// reports it with a `false` return rather than an error or panic.
#[derive(Debug)]
pub struct KoaTrie {
    /// Root of the tree. `None` iff the trie holds zero words; created
    /// lazily on the first successful insertion.
    root: Option<Box<TrieNode>>,

    /// Number of distinct words currently stored.
    size: usize,

    /// Configuration options.
    config: KoaTrieConfig,
}

impl KoaTrie {
    /// Creates a new empty `KoaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KoaTrieConfig::default())
    }

    /// Creates a new empty `KoaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: KoaTrieConfig) -> Self {
        Self {
            root: None,
            size: 0,
            config,
        }
    }

    /// Creates a `KoaTrie` seeded from an initial dictionary.
    ///
    /// Entries that are invalid or duplicates of earlier entries are
    /// skipped, exactly as they would be by [`KoaTrie::add_word`].
    pub fn with_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.add_word(word);
        }
        trie
    }

    /// Inserts a word into the trie.
    ///
    /// The word is lower-cased before storage. Inserting a word that is a
    /// prefix or an extension of an existing word leaves both independently
    /// queryable.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was inserted; `false` if the word is invalid or
    /// already present. On `false` the trie is unchanged.
    pub fn add_word<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let key = match self.normalize(word) {
            Ok(key) => key,
            Err(err) => {
                tracing::trace!(word, %err, "add_word rejected invalid word");
                return false;
            }
        };

        if self.node_for(&key).map_or(false, |node| node.is_word) {
            tracing::trace!(word, "add_word rejected duplicate word");
            return false;
        }

        let mut node: &mut TrieNode = self.root.get_or_insert_with(Default::default);
        for &letter in &key {
            node = node.children[letter_index(letter)].get_or_insert_with(Default::default);
        }
        node.is_word = true;
        self.size += 1;

        true
    }

    /// Checks whether a word is stored in the trie.
    ///
    /// Only complete inserted words match: with "bar" stored, "ba" is not
    /// contained unless it was separately inserted.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look up.
    ///
    /// # Returns
    ///
    /// `true` if the word is present; `false` if the trie is empty, the
    /// word is invalid, or the word is absent.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if self.root.is_none() {
            return false;
        }

        match self.normalize(word) {
            Ok(key) => self.node_for(&key).map_or(false, |node| node.is_word),
            Err(err) => {
                tracing::trace!(word, %err, "contains rejected invalid word");
                false
            }
        }
    }

    /// Removes a word from the trie.
    ///
    /// On success the terminal mark is cleared and every node left serving
    /// no stored word is pruned, walking back toward the root until a node
    /// is reached that is itself a word or still has another child. Removal
    /// never affects any other stored word, including prefixes and
    /// extensions of the removed word.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// `true` if the word was removed; `false` if the trie is empty, the
    /// word is invalid, or the word is not present. On `false` the trie is
    /// unchanged.
    pub fn delete_word<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if self.root.is_none() {
            return false;
        }

        let key = match self.normalize(word) {
            Ok(key) => key,
            Err(err) => {
                tracing::trace!(word, %err, "delete_word rejected invalid word");
                return false;
            }
        };

        if !self.node_for(&key).map_or(false, |node| node.is_word) {
            tracing::trace!(word, "delete_word rejected absent word");
            return false;
        }

        // Presence was established above, so the walk always finds the path.
        if let Some(root) = self.root.as_mut() {
            Self::remove_in(root, &key);
        }
        self.size -= 1;
        if self.size == 0 {
            self.root = None;
        }

        true
    }

    /// Returns the number of words in the trie.
    ///
    /// This is maintained incrementally, so it's an O(1) operation.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Checks if the trie is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Clears all words from the trie.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Returns the number of live nodes in the tree.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    /// Useful for observing that deletion pruning reclaims dead paths.
    pub fn node_count(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            1 + node
                .children
                .iter()
                .flatten()
                .map(|child| count(child))
                .sum::<usize>()
        }
        self.root.as_deref().map_or(0, count)
    }

    /// Checks a word against the validation contract.
    ///
    /// The word operations report invalid input as a `false` return; this
    /// method exposes the typed rejection reason for callers that need it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word is non-empty, alphabetic, and within the
    ///   configured length cap.
    /// * `Err(KoaTrieError)` - The first rule the word breaks.
    pub fn validate<W>(&self, word: W) -> KoaTrieResult<()>
    where
        W: AsRef<str>,
    {
        self.normalize(word.as_ref()).map(|_| ())
    }

    /// Validates a word and lowers it to child-slot key bytes.
    fn normalize(&self, word: &str) -> KoaTrieResult<Vec<u8>> {
        if word.is_empty() {
            return Err(KoaTrieError::EmptyWord);
        }

        if let Some(max_len) = self.config.get_max_word_len() {
            if word.chars().count() > max_len {
                return Err(KoaTrieError::WordTooLong {
                    word: word.to_string(),
                    max_len,
                });
            }
        }

        let mut key = Vec::with_capacity(word.len());
        for ch in word.chars() {
            if !ch.is_ascii_alphabetic() {
                return Err(KoaTrieError::NonAlphabetic {
                    word: word.to_string(),
                    ch,
                });
            }
            key.push((ch as u8).to_ascii_lowercase());
        }

        Ok(key)
    }

    /// Walks the path for `key`, returning the terminal node if the whole
    /// path exists.
    fn node_for(&self, key: &[u8]) -> Option<&TrieNode> {
        let mut node = self.root.as_deref()?;
        for &letter in key {
            node = node.children[letter_index(letter)].as_deref()?;
        }
        Some(node)
    }

    /// Clears the terminal mark for `key`, then prunes on the way back up.
    ///
    /// Returns `true` if `node` itself now serves no stored word and should
    /// be detached from its parent.
    fn remove_in(node: &mut TrieNode, key: &[u8]) -> bool {
        match key.split_first() {
            None => node.is_word = false,
            Some((&letter, rest)) => {
                let slot = letter_index(letter);
                let prune_child = node.children[slot]
                    .as_mut()
                    .map_or(false, |child| Self::remove_in(child, rest));
                if prune_child {
                    node.children[slot] = None;
                }
            }
        }
        !node.is_word && node.is_leaf()
    }
}

impl Default for KoaTrie {
    fn default() -> Self {
        Self::new()
    }
}
