//! Heuristic language detection and basic entity extraction.
//!
//! These heuristics serve two roles: the deterministic fallback when no AI
//! provider is reachable, and the language hint fed into AI prompts. The
//! detector performs a single pass over a bounded character sample and tests
//! script ranges in fixed priority order.

use once_cell::sync::Lazy;
use regex::Regex;

use relevo_core::defaults;

/// Quoted phrases are extracted verbatim.
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("valid regex"));

/// Maximal runs of capitalized words, e.g. "New York City".
static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)*\b").expect("valid regex"));

/// Guess the language of `text` from character ranges.
///
/// Tests, in fixed priority order: Vietnamese diacritics, CJK ideographs,
/// Hiragana/Katakana, Hangul. Returns the first match's language code, else
/// the engine default. Only the first 500 characters are sampled.
///
/// # Examples
///
/// ```
/// use relevo_search::language::detect_language;
///
/// assert_eq!(detect_language("tiếng Việt"), "vi");
/// assert_eq!(detect_language("機械学習"), "zh");
/// assert_eq!(detect_language("こんにちは"), "ja");
/// assert_eq!(detect_language("안녕하세요"), "ko");
/// assert_eq!(detect_language("hello world"), "en");
/// ```
pub fn detect_language(text: &str) -> String {
    detect_language_with_default(text, defaults::DEFAULT_LANGUAGE)
}

/// [`detect_language`] with a caller-supplied default code.
pub fn detect_language_with_default(text: &str, default: &str) -> String {
    let mut has_vietnamese = false;
    let mut has_han = false;
    let mut has_kana = false;
    let mut has_hangul = false;

    for ch in text.chars().take(defaults::LANGUAGE_SAMPLE_CHARS) {
        if is_vietnamese_diacritic(ch) {
            has_vietnamese = true;
        } else if matches!(ch, '\u{4E00}'..='\u{9FFF}') {
            has_han = true;
        } else if matches!(ch, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}') {
            has_kana = true;
        } else if matches!(ch, '\u{AC00}'..='\u{D7AF}') {
            has_hangul = true;
        }
    }

    // Priority order is fixed; e.g. kanji-plus-kana text classifies by the
    // first matching range, not by proportion.
    let code = if has_vietnamese {
        "vi"
    } else if has_han {
        "zh"
    } else if has_kana {
        "ja"
    } else if has_hangul {
        "ko"
    } else {
        default
    };
    code.to_string()
}

/// Characters distinctive to Vietnamese orthography.
///
/// The 1EA0-1EF9 block holds Vietnamese tone-marked vowels; ă/đ/ơ/ư are the
/// distinctly Vietnamese base letters outside that block.
fn is_vietnamese_diacritic(ch: char) -> bool {
    matches!(ch, '\u{1EA0}'..='\u{1EF9}')
        || matches!(ch, 'ă' | 'Ă' | 'đ' | 'Đ' | 'ơ' | 'Ơ' | 'ư' | 'Ư')
}

/// Extract basic entities from a query: double-quoted phrases verbatim, then
/// maximal runs of capitalized words. Returns the deduplicated union, quoted
/// phrases first.
///
/// # Examples
///
/// ```
/// use relevo_search::language::extract_basic_entities;
///
/// let entities = extract_basic_entities(r#"deploy "docker compose" on New York servers"#);
/// assert_eq!(entities, vec!["docker compose", "New York"]);
/// ```
pub fn extract_basic_entities(query: &str) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();

    for cap in QUOTED.captures_iter(query) {
        let phrase = cap[1].to_string();
        if !entities.contains(&phrase) {
            entities.push(phrase);
        }
    }

    // Strip quoted regions so their contents are not re-matched as
    // capitalized runs.
    let unquoted = QUOTED.replace_all(query, " ");
    for m in CAPITALIZED_RUN.find_iter(&unquoted) {
        let run = m.as_str().to_string();
        if !entities.contains(&run) {
            entities.push(run);
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_vietnamese() {
        assert_eq!(detect_language("học máy là gì"), "vi");
        assert_eq!(detect_language("tiếng Việt"), "vi");
    }

    #[test]
    fn test_detect_chinese() {
        assert_eq!(detect_language("机器学习"), "zh");
    }

    #[test]
    fn test_detect_japanese_kana() {
        assert_eq!(detect_language("こんにちは"), "ja");
        assert_eq!(detect_language("カタカナ"), "ja");
    }

    #[test]
    fn test_kanji_takes_cjk_priority_over_kana() {
        // Mixed kanji + hiragana classifies as "zh" under the fixed priority
        assert_eq!(detect_language("日本語を学ぶ"), "zh");
    }

    #[test]
    fn test_detect_korean() {
        assert_eq!(detect_language("안녕하세요"), "ko");
    }

    #[test]
    fn test_detect_default_for_latin() {
        assert_eq!(detect_language("plain english query"), "en");
        assert_eq!(detect_language(""), "en");
    }

    #[test]
    fn test_detect_with_custom_default() {
        assert_eq!(detect_language_with_default("hello", "de"), "de");
        assert_eq!(detect_language_with_default("안녕", "de"), "ko");
    }

    #[test]
    fn test_sampling_bound() {
        // Hangul placed after the 500-char sample is never seen
        let text = format!("{}안녕", "a".repeat(defaults::LANGUAGE_SAMPLE_CHARS));
        assert_eq!(detect_language(&text), "en");

        // ...but inside the sample it is
        let text = format!("{}안녕", "a".repeat(10));
        assert_eq!(detect_language(&text), "ko");
    }

    #[test]
    fn test_entities_quoted_phrases() {
        let entities = extract_basic_entities(r#"find "exact phrase" and "another one""#);
        assert_eq!(entities, vec!["exact phrase", "another one"]);
    }

    #[test]
    fn test_entities_capitalized_runs() {
        let entities = extract_basic_entities("weather in New York City and London");
        assert_eq!(entities, vec!["New York City", "London"]);
    }

    #[test]
    fn test_entities_quoted_before_capitalized() {
        let entities = extract_basic_entities(r#"Docker setup for "machine learning""#);
        assert_eq!(entities, vec!["machine learning", "Docker"]);
    }

    #[test]
    fn test_entities_deduplicated() {
        let entities = extract_basic_entities(r#""Rust" and Rust and "Rust""#);
        // Quoted "Rust" first; the bare capitalized Rust duplicates it
        assert_eq!(entities, vec!["Rust"]);
    }

    #[test]
    fn test_entities_empty_for_lowercase_query() {
        assert!(extract_basic_entities("plain lowercase query").is_empty());
        assert!(extract_basic_entities("").is_empty());
    }

    #[test]
    fn test_quoted_contents_not_rematched_as_capitalized() {
        let entities = extract_basic_entities(r#""New York" pizza"#);
        assert_eq!(entities, vec!["New York"]);
    }
}
