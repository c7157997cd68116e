/// Private helper functions for cell text normalization
use regex::Regex;
use scraper::{ElementRef, Node};
use std::sync::LazyLock;

// Every maximal run outside letters, comma and space.
static DISALLOWED_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z, ]+").expect("valid regex"));

/// Replace each run of disallowed characters with a single comma.
pub fn collapse_disallowed(text: &str) -> String {
    DISALLOWED_RUN_REGEX.replace_all(text, ",").into_owned()
}

/// Split on `delimiter`, keeping only segments longer than one character.
///
/// The length check runs on the raw segment, before any trimming.
pub fn split_long_segments<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
    text.split(delimiter)
        .filter(|segment| segment.chars().count() > 1)
        .collect()
}

/// Raw text of a cell cut at every `<br>`, in document order.
///
/// Text nested inside links or spans belongs to the segment it appears in.
pub fn br_segments(cell: &ElementRef<'_>) -> Vec<String> {
    let mut segments = vec![String::new()];
    for node in cell.descendants() {
        match node.value() {
            Node::Text(text) => {
                if let Some(current) = segments.last_mut() {
                    current.push_str(text);
                }
            }
            Node::Element(el) if el.name() == "br" => segments.push(String::new()),
            _ => {}
        }
    }
    segments
}
