//! Validation rejection tables for the Koa Word Trie.
//!
//! Every word operation must treat malformed input as a handled case:
//! a `false` return with no state change, never a panic.

use crate::{KoaTrie, KoaTrieError};
use test_case::test_case;

#[test_case("" ; "empty string")]
#[test_case("1" ; "single digit")]
#[test_case("-" ; "single hyphen")]
#[test_case("&" ; "single ampersand")]
#[test_case("apple1" ; "trailing digit")]
#[test_case("1apple" ; "leading digit")]
#[test_case("hello world" ; "embedded space")]
#[test_case("hello-world" ; "embedded hyphen")]
#[test_case("hellow1world" ; "embedded digit")]
#[test_case("hello_world" ; "embedded underscore")]
#[test_case("caf\u{e9}" ; "non ascii letter")]
fn rejected_by_all_operations(word: &str) {
    let mut trie = KoaTrie::new();
    assert!(trie.add_word("control"));

    assert!(!trie.add_word(word));
    assert!(!trie.contains(word));
    assert!(!trie.delete_word(word));

    // The control word and the count are untouched
    assert!(trie.contains("control"));
    assert_eq!(trie.len(), 1);
}

#[test_case("a" ; "shortest word")]
#[test_case("control" ; "plain lowercase")]
#[test_case("BANANA" ; "all uppercase")]
#[test_case("MiXeD" ; "mixed case")]
fn accepted_words_validate_cleanly(word: &str) {
    let trie = KoaTrie::new();
    assert_eq!(trie.validate(word), Ok(()));
}

#[test]
fn empty_word_reports_empty_error() {
    let trie = KoaTrie::new();
    assert_eq!(trie.validate(""), Err(KoaTrieError::EmptyWord));
}

#[test]
fn non_alphabetic_reports_first_offending_character() {
    let trie = KoaTrie::new();
    assert_eq!(
        trie.validate("ab1c2"),
        Err(KoaTrieError::NonAlphabetic {
            word: "ab1c2".to_string(),
            ch: '1',
        })
    );
}
