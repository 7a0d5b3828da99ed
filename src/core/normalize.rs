// File: src/core/normalize.rs
use std::collections::HashSet;

/// Tokens that separate sentences inside a raw example cell.
/// `\r\n` must come before `\n` so it is consumed as one separator.
const EXAMPLE_SEPARATORS: [&str; 5] = ["\r\n", "\n", "；", ";", "。"];

/// Lookup-key normalization: trim surrounding whitespace, lowercase.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns the first candidate that is non-empty after trimming, trimmed.
/// Returns an empty string when no candidate qualifies.
pub fn first_non_empty<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Splits a raw example cell on every separator, trims the fragments,
/// drops empty ones and removes duplicates keeping first occurrence.
pub fn clean_list(raw: Option<&str>) -> Vec<String> {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return vec![],
    };

    let mut unified = raw.to_string();
    for sep in EXAMPLE_SEPARATORS {
        unified = unified.replace(sep, "\n");
    }

    let mut seen = HashSet::new();
    unified
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty() && seen.insert(*p))
        .map(str::to_string)
        .collect()
}

/// Appends `incoming` to `existing`, skipping duplicates, then caps at `max`.
/// Once the cap is reached later examples never displace earlier ones.
pub fn merge_examples(existing: &mut Vec<String>, incoming: Vec<String>, max: usize) {
    for example in incoming {
        if !existing.contains(&example) {
            existing.push(example);
        }
    }
    existing.truncate(max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_word_trims_and_lowercases() {
        assert_eq!(normalize_word("  Hello\t"), "hello");
        assert_eq!(normalize_word("   "), "");
    }

    #[test]
    fn normalize_word_is_idempotent() {
        for raw in ["Cat", " DOG ", "naïve", "ÉCOLE", ""] {
            let once = normalize_word(raw);
            assert_eq!(normalize_word(&once), once);
        }
    }

    #[test]
    fn first_non_empty_skips_blank_candidates() {
        assert_eq!(first_non_empty([None, Some("  "), Some(" b "), Some("c")]), "b");
        assert_eq!(first_non_empty([None, Some("\n")]), "");
        assert_eq!(first_non_empty(std::iter::empty()), "");
    }

    #[test]
    fn clean_list_splits_full_width_separators() {
        assert_eq!(clean_list(Some("a；b。c")), vec!["a", "b", "c"]);
    }

    #[test]
    fn clean_list_handles_every_separator_and_dedups() {
        let raw = "one\r\ntwo\nthree;one ；  two。four\n\n";
        assert_eq!(clean_list(Some(raw)), vec!["one", "two", "three", "four"]);
        assert!(clean_list(None).is_empty());
        assert!(clean_list(Some("")).is_empty());
        assert!(clean_list(Some(" ; \n ")).is_empty());
    }

    #[test]
    fn merge_examples_keeps_first_seen_order_under_cap() {
        let mut examples = vec!["a".to_string(), "b".to_string()];
        merge_examples(&mut examples, vec!["b".into(), "c".into(), "d".into()], 3);
        assert_eq!(examples, vec!["a", "b", "c"]);

        merge_examples(&mut examples, vec!["z".into()], 3);
        assert_eq!(examples, vec!["a", "b", "c"]);
    }
}
