use bedside_lexicon::{all_drugs, extract, tokenize};
use proptest::prelude::*;

const FILLER: [&str; 10] = [
    "the", "patient", "was", "given", "dose", "mg", "daily", "and", "with", "history",
];

const SEPARATORS: [&str; 10] = [" ", ", ", ". ", "; ", " (", ") ", "/", "\n", " - ", "!? "];

fn cased(word: &str, case: u8) -> String {
    match case {
        0 => word.to_string(),
        1 => word.to_uppercase(),
        _ => {
            let mut chars = word.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
    }
}

/// Picks index the drug table first, then the filler words.
fn words() -> impl Strategy<Value = Vec<(usize, u8, usize)>> {
    prop::collection::vec(
        (
            0..all_drugs().len() + FILLER.len(),
            0..3u8,
            0..SEPARATORS.len(),
        ),
        1..40,
    )
}

proptest! {
    #[test]
    fn each_key_reported_once_in_first_occurrence_order(words in words()) {
        let drugs = all_drugs();
        let mut text = String::new();
        let mut expected: Vec<(&str, usize)> = Vec::new();

        for (pick, case, sep) in words {
            text.push_str(SEPARATORS[sep]);
            let offset = text.len();
            let word = match drugs.get(pick) {
                Some(drug) => drug.name,
                None => FILLER[pick - drugs.len()],
            };
            text.push_str(&cased(word, case));
            if pick < drugs.len() && !expected.iter().any(|(name, _)| *name == word) {
                expected.push((word, offset));
            }
        }
        text.push('.');

        let extraction = extract(&text).unwrap();
        let found: Vec<(&str, usize)> = extraction
            .matches
            .iter()
            .map(|m| (m.generic_name.as_str(), m.offset))
            .collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn tokens_are_nonempty_slices_at_their_offsets(text in ".{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(&text[token.offset..token.offset + token.text.len()], token.text);
            prop_assert!(token.text.chars().all(char::is_alphanumeric));
        }
    }
}
