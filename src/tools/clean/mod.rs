mod utils;

use utils::*;

use crate::selectors::BR_SELECTOR;
use scraper::ElementRef;

/// Normalize text.
///
/// Every maximal run of characters other than ASCII letters, comma and space
/// becomes a single comma, then the whole string is lowercased. The result
/// only ever contains `[a-z, ]`.
///
/// # Examples
/// ```
/// use wiki_animals::tools::clean::normalize_text;
///
/// assert_eq!(
///     normalize_text("[2]This[1] \nIS[[~~!245356] sparta"),
///     ",this, ,is, sparta"
/// );
/// ```
pub fn normalize_text(raw: &str) -> String {
    collapse_disallowed(raw).to_lowercase()
}

/// Split plain cell text into normalized items.
///
/// First matching rule wins:
/// 1. contains `,`: split on commas, drop segments of one character or less
/// 2. contains `" or "`: split on it, same filter
/// 3. otherwise the whole text is one item, unfiltered
///
/// # Examples
/// ```
/// use wiki_animals::tools::clean::split_cell_text;
///
/// assert_eq!(split_cell_text("fox, vixen"), vec!["fox", "vixen"]);
/// assert_eq!(split_cell_text("cub or kit"), vec!["cub", "kit"]);
/// assert_eq!(split_cell_text("a"), vec!["a"]);
/// ```
pub fn split_cell_text(text: &str) -> Vec<String> {
    if text.contains(',') {
        split_long_segments(text, ",")
            .into_iter()
            .map(normalize_item)
            .collect()
    } else if text.contains(" or ") {
        split_long_segments(text, " or ")
            .into_iter()
            .map(normalize_item)
            .collect()
    } else {
        vec![normalize_item(text)]
    }
}

/// Normalize a table cell into its list of items.
///
/// Cells holding `<br>` elements are split at the breaks; otherwise the cell
/// text goes through [`split_cell_text`].
pub fn normalize_cell(cell: &ElementRef<'_>) -> Vec<String> {
    if cell.select(&BR_SELECTOR).next().is_some() {
        return br_segments(cell)
            .iter()
            .map(|segment| normalize_item(segment))
            .collect();
    }
    split_cell_text(&cell.text().collect::<String>())
}

fn normalize_item(segment: &str) -> String {
    normalize_text(segment.trim())
}
