//! Tokenizer invariants.
//!
//! - Tokens are lowercase and never contain separator characters.
//! - Tokenization is deterministic.
//! - A token re-tokenizes to itself (the model is a fixpoint on its output).

use proptest::prelude::*;
use seas_alerts::tokenize;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No token contains whitespace or a separator character, and none is empty.
    #[test]
    fn prop_tokens_are_clean(text in ".{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert!(!token.contains(&['/', ',', '.', '-'][..]));
        }
    }

    /// Tokens carry no uppercase ASCII.
    #[test]
    fn prop_tokens_are_lowercased(text in "[a-zA-Z /,.-]{0,200}") {
        for token in tokenize(&text) {
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    /// Deterministic: same input, same token set.
    #[test]
    fn prop_tokenize_deterministic(text in ".{0,200}") {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }

    /// Every produced token survives re-tokenization unchanged.
    #[test]
    fn prop_tokens_are_fixpoints(text in ".{0,200}") {
        for token in tokenize(&text) {
            let again = tokenize(&token);
            prop_assert_eq!(again.len(), 1);
            prop_assert!(again.contains(&token));
        }
    }

    /// Word order and duplication never change the token set.
    #[test]
    fn prop_order_insensitive(words in proptest::collection::vec("[a-z]{1,8}", 1..10)) {
        let forward = words.join(" ");
        let mut reversed_words = words.clone();
        reversed_words.reverse();
        let reversed = reversed_words.join(" ");
        prop_assert_eq!(tokenize(&forward), tokenize(&reversed));

        let doubled = format!("{} {}", forward, forward);
        prop_assert_eq!(tokenize(&forward), tokenize(&doubled));
    }
}
