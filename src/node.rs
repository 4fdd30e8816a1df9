// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the Koa Word Trie.
//!
//! Nodes are the fundamental building blocks of the trie, each representing
//! one character position in some stored word(s). Children are held in a
//! fixed-size array indexed by `letter - 'a'`, trading a little memory for
//! cache locality over a dynamic map.

/// Number of child slots per node, one per lowercase Latin letter.
pub(crate) const ALPHABET_SIZE: usize = 26;

/// Maps a lowercase ASCII letter to its child-slot index.
///
/// Callers must pass a byte in `b'a'..=b'z'`; validated words guarantee this.
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// A node in the Koa Word Trie.
///
/// Each node represents a character in a word path. Terminal nodes mark the
/// end of a complete stored word.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// Child nodes, indexed by `letter - 'a'`. `None` means no stored word
    /// continues with that letter from this node.
    pub children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether the path from the root to this node spells a complete word.
    pub is_word: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            is_word: false,
        }
    }

    /// Returns `true` if this node has no populated children.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
