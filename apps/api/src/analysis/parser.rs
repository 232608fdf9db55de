//! Splits a free-text model reply into detected items and suggestions.
//!
//! Heuristic by nature: it keys on the section headers the prompt asks for,
//! drops header-ish lines, and strips bullet and numbering markers.

/// Any of these on a line may open the suggestions section.
const SUGGESTION_SECTION_HINTS: &[&str] = &[
    "improvement",
    "suggestions",
    "to improve",
    "could be added",
    "missing",
    "section 2",
];
/// A hinted line only opens the section if it also contains one of these.
const SUGGESTION_SECTION_CONFIRM: &[&str] = &["section", "improve", "suggestions"];

const ITEM_SKIP: &[&str] = &[
    "section",
    "detected items",
    "format",
    "example",
    "instructions",
];
const SUGGESTION_SKIP: &[&str] = &["section", "format", "example", "instructions"];
const SUGGESTION_VERBS: &[&str] = &["add", "include", "wear", "display", "take"];

const MIN_ITEM_LEN: usize = 2;
const MIN_SUGGESTION_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedReply {
    pub detected_items: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn split_model_reply(text: &str) -> ParsedReply {
    let lines: Vec<&str> = text.split('\n').collect();
    let split_at = find_suggestions_start(&lines).unwrap_or(lines.len());
    let (item_lines, suggestion_lines) = lines.split_at(split_at);

    let mut detected_items: Vec<String> = item_lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !contains_any(&l.to_lowercase(), ITEM_SKIP))
        .map(clean_line)
        .filter(|l| char_len(l) > MIN_ITEM_LEN)
        .collect();

    let suggestions: Vec<String> = suggestion_lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| {
            let lower = l.to_lowercase();
            !l.is_empty()
                && !contains_any(&lower, SUGGESTION_SKIP)
                && (starts_with_bullet(l) || contains_any(&lower, SUGGESTION_VERBS))
        })
        .map(clean_line)
        .filter(|l| char_len(l) > MIN_SUGGESTION_LEN)
        .collect();

    // Prose reply with no usable lines: fall back to sentences.
    if detected_items.is_empty() {
        detected_items = item_lines
            .join("\n")
            .split('.')
            .map(str::trim)
            .filter(|s| char_len(s) > MIN_ITEM_LEN)
            .map(str::to_string)
            .collect();
    }

    ParsedReply {
        detected_items,
        suggestions,
    }
}

fn find_suggestions_start(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|line| {
        let lower = line.to_lowercase();
        contains_any(&lower, SUGGESTION_SECTION_HINTS)
            && contains_any(&lower, SUGGESTION_SECTION_CONFIRM)
    })
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn starts_with_bullet(line: &str) -> bool {
    line.starts_with(['-', '•', '*'])
}

/// Strips one leading bullet, then a leading `1.` / `2)` marker.
fn clean_line(line: &str) -> String {
    let mut cleaned = line;
    if starts_with_bullet(cleaned) {
        let mut chars = cleaned.chars();
        chars.next();
        cleaned = chars.as_str().trim();
    }
    strip_list_number(cleaned).to_string()
}

fn strip_list_number(line: &str) -> &str {
    if !line.starts_with(|c: char| c.is_ascii_digit()) {
        return line;
    }
    let prefix: String = line.chars().take(3).collect();
    let marker = if prefix.contains('.') {
        '.'
    } else if prefix.contains(')') {
        ')'
    } else {
        return line;
    };
    match line.split_once(marker) {
        Some((_, rest)) => rest.trim(),
        None => line,
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
