//! Query highlighting for search results.
//!
//! Splits text into plain and emphasized fragments so the renderer can wrap
//! matches without re-scanning. Concatenating the fragments always
//! reproduces the input text exactly.

use regex::Regex;

/// One run of text, either plain or an emphasized query match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub emphasis: bool,
}

impl Fragment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasis: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasis: true,
        }
    }
}

/// Split `text` into fragments, emphasizing every case-insensitive
/// occurrence of `query`.
///
/// The query is matched literally (regex metacharacters escaped) with
/// Unicode case folding, so `"зуб"` matches `"Зуб"`. An empty query or
/// no match yields a single plain fragment.
pub fn highlight(text: &str, query: &str) -> Vec<Fragment> {
    if text.is_empty() {
        return Vec::new();
    }
    let query = query.trim();
    if query.is_empty() {
        return vec![Fragment::plain(text)];
    }

    let pattern = format!("(?i){}", regex::escape(query));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!(error = %e, "highlight pattern failed to compile");
            return vec![Fragment::plain(text)];
        }
    };

    let mut fragments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            fragments.push(Fragment::plain(&text[last..m.start()]));
        }
        fragments.push(Fragment::emphasized(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        fragments.push(Fragment::plain(&text[last..]));
    }

    if fragments.is_empty() {
        vec![Fragment::plain(text)]
    } else {
        fragments
    }
}

/// Truncate `text` to at most `limit` characters, appending an ellipsis
/// when anything was cut. Counts Unicode scalar values, never bytes.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(fragments: &[Fragment]) -> String {
        fragments.iter().map(|f| f.text.as_str()).collect()
    }

    // ---- highlight ----

    #[test]
    fn test_highlight_case_insensitive_cyrillic() {
        let fragments = highlight("Стоматология: лечение зубов", "зуб");
        assert_eq!(concat(&fragments), "Стоматология: лечение зубов");

        let emphasized: Vec<_> = fragments.iter().filter(|f| f.emphasis).collect();
        assert_eq!(emphasized.len(), 1);
        assert_eq!(emphasized[0].text, "зуб");
    }

    #[test]
    fn test_highlight_matches_uppercase_occurrence() {
        let fragments = highlight("Зубной врач лечит зубы", "зуб");
        let emphasized: Vec<_> = fragments.iter().filter(|f| f.emphasis).collect();
        assert_eq!(emphasized.len(), 2);
        assert_eq!(emphasized[0].text, "Зуб");
        assert_eq!(emphasized[1].text, "зуб");
        assert_eq!(concat(&fragments), "Зубной врач лечит зубы");
    }

    #[test]
    fn test_highlight_each_occurrence_wrapped_exactly_once() {
        let fragments = highlight("ааа", "а");
        assert_eq!(fragments.len(), 3);
        assert!(fragments.iter().all(|f| f.emphasis));
        assert_eq!(concat(&fragments), "ааа");
    }

    #[test]
    fn test_highlight_no_match_single_plain_fragment() {
        let fragments = highlight("Кардиология", "зуб");
        assert_eq!(fragments.len(), 1);
        assert!(!fragments[0].emphasis);
        assert_eq!(fragments[0].text, "Кардиология");
    }

    #[test]
    fn test_highlight_empty_query() {
        let fragments = highlight("Анализы", "   ");
        assert_eq!(fragments.len(), 1);
        assert!(!fragments[0].emphasis);
    }

    #[test]
    fn test_highlight_empty_text() {
        assert!(highlight("", "зуб").is_empty());
    }

    #[test]
    fn test_highlight_regex_metacharacters_literal() {
        let fragments = highlight("Приём (первичный)", "(первичный)");
        let emphasized: Vec<_> = fragments.iter().filter(|f| f.emphasis).collect();
        assert_eq!(emphasized.len(), 1);
        assert_eq!(emphasized[0].text, "(первичный)");
    }

    #[test]
    fn test_highlight_match_at_boundaries() {
        let fragments = highlight("зуб болит зуб", "зуб");
        assert_eq!(concat(&fragments), "зуб болит зуб");
        assert!(fragments.first().unwrap().emphasis);
        assert!(fragments.last().unwrap().emphasis);
    }

    #[test]
    fn test_highlight_latin_case_insensitive() {
        let fragments = highlight("MRT и мрт", "Мрт");
        let emphasized: Vec<_> = fragments.iter().filter(|f| f.emphasis).collect();
        assert_eq!(emphasized.len(), 1);
        assert_eq!(emphasized[0].text, "мрт");
    }

    // ---- truncate_chars ----

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("короткий текст", 150), "короткий текст");
    }

    #[test]
    fn test_truncate_exact_limit_unchanged() {
        let text = "а".repeat(150);
        assert_eq!(truncate_chars(&text, 150), text);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // 200 Cyrillic characters = 400 bytes; the cut must land on a char
        // boundary at 150 characters.
        let text = "ю".repeat(200);
        let truncated = truncate_chars(&text, 150);
        assert_eq!(truncated.chars().count(), 151); // 150 chars + ellipsis
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_truncate_then_highlight_round_trip() {
        let long = format!("лечение зубов {}", "х".repeat(200));
        let truncated = truncate_chars(&long, 150);
        let fragments = highlight(&truncated, "зуб");
        let rebuilt: String = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(rebuilt, truncated);
    }
}
