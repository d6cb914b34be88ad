/// Case-insensitive check that at least one term occurs in `text`.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|term| lower.contains(&term.to_lowercase()))
}

/// Case-insensitive check that every term occurs in `text`, in any position.
pub fn contains_all(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().all(|term| lower.contains(&term.to_lowercase()))
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case() {
        assert!(contains_any("Shop at JUMBO today", &["albert heijn", "jumbo"]));
        assert!(!contains_any("Shop at Lidl", &["albert heijn", "jumbo"]));
        assert!(contains_all("Gluten-FREE bread", &["gluten", "free"]));
        assert!(!contains_all("gluten bread", &["gluten", "free"]));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(preview("€€€", 2), "€€");
        assert_eq!(preview("short", 200), "short");
        assert_eq!(preview(&"a".repeat(250), 200).len(), 200);
    }
}
