//! Text normalization and term matching shared by the triage components.

/// Lowercases and collapses runs of whitespace to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Splits normalized text into whitespace-separated words.
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Finds the first occurrence of `term` that starts and ends on a word boundary.
pub fn find_word(haystack: &str, term: &str) -> Option<usize> {
    find_bounded(haystack, term, true)
}

/// Finds the first occurrence of `term` that starts on a word boundary.
///
/// The match may run on into a longer word, so "cough" matches "coughing".
pub fn find_prefix(haystack: &str, term: &str) -> Option<usize> {
    find_bounded(haystack, term, false)
}

fn find_bounded(haystack: &str, term: &str, require_end: bool) -> Option<usize> {
    if term.is_empty() {
        return None;
    }

    let mut from = 0;
    while let Some(rel) = haystack[from..].find(term) {
        let start = from + rel;
        let end = start + term.len();

        let start_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let end_ok = !require_end
            || haystack[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());

        if start_ok && end_ok {
            return Some(start);
        }

        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}
