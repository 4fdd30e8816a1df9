// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Koa Word Trie
//!
//! A prefix-tree (trie) over the lowercase Latin alphabet for storing
//! case-insensitive alphabetic words, with exact-word membership queries,
//! deletion with node pruning, and an O(1) running word count.
//!
//! # Features
//!
//! - Case-insensitive insertion, lookup, and deletion.
//! - Invalid input (empty, non-alphabetic, over a configured length cap) is
//!   an expected, handled case reported as a `false` return, never a panic.
//! - Deletion prunes nodes that no longer serve any stored word, so
//!   repeated add/delete cycles do not leak dead paths.
//! - Children held in fixed-size 26-slot arrays for cache locality.
//! - Single-threaded by design: mutation goes through `&mut self`, so the
//!   borrow checker enforces the exclusive access the structure requires.
//!   Embedders that need sharing should wrap the trie in a mutex.
//!
//! # Example
//!
//! ```
//! use koa_trie_lib::KoaTrie;
//!
//! let mut trie = KoaTrie::new();
//!
//! assert!(trie.add_word("banana"));
//! assert!(trie.contains("BANANA"));
//! assert_eq!(trie.len(), 1);
//!
//! // Internal path nodes are not words
//! assert!(!trie.contains("ban"));
//!
//! // Invalid input is reported, not thrown
//! assert!(!trie.add_word("not a word"));
//!
//! assert!(trie.delete_word("banana"));
//! assert!(trie.is_empty());
//! ```

mod config;
mod error;
mod node;
mod trie;

pub use config::KoaTrieConfig;
pub use error::{KoaTrieError, KoaTrieResult};
pub use trie::KoaTrie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Koa Word Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
