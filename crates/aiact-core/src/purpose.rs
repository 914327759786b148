//! Primary purpose extraction
//!
//! Pulls a short natural-language purpose statement out of the corpus by
//! sentence splitting and a small preference cascade. Deterministic single
//! pass; always returns something, even for degenerate input.

/// Purpose-signalling verbs accepted in place of the system name.
const PURPOSE_VERBS: &[&str] = &["uses", "enables", "provides", "helps"];

/// Maximum length of a fallback purpose string.
const PURPOSE_TRUNCATE: usize = 150;

/// Extract the primary purpose of a system from free text.
///
/// Preference order:
/// 1. the first sentence naming the system (case-insensitive) or containing
///    a purpose verb, with trimmed length strictly between 20 and 200
/// 2. the first sentence longer than 30 chars, truncated to 150
/// 3. the first 150 chars of the whole text
pub fn extract_purpose(text: &str, name: &str) -> String {
    let name_lower = name.to_lowercase();

    for sentence in text.split('.') {
        let lower = sentence.to_lowercase();
        if lower.contains(&name_lower) || PURPOSE_VERBS.iter().any(|v| lower.contains(v)) {
            let cleaned = sentence.trim();
            if cleaned.len() > 20 && cleaned.len() < 200 {
                return cleaned.to_string();
            }
        }
    }

    for sentence in text.split('.') {
        let cleaned = sentence.trim();
        if cleaned.len() > 30 {
            return truncate(cleaned, PURPOSE_TRUNCATE);
        }
    }

    truncate(text, PURPOSE_TRUNCATE)
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    // Back off to a char boundary so multibyte input cannot split a char.
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
