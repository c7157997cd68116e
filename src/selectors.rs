//! Shared Selectors

use once_cell::sync::Lazy;
use scraper::Selector;

/// Sortable data tables on the animal list page.
pub static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.wikitable.sortable").expect("valid table selector"));

/// Selector for table rows.
pub static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid row selector"));

/// Selector for header cells.
pub static HEADER_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("valid header cell selector"));

/// Selector for data cells.
pub static DATA_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid data cell selector"));

/// Selector for anchor elements with hrefs.
pub static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid link selector"));

/// Selector for `<br>` line breaks.
pub static BR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("br").expect("valid br selector"));

/// Selector for `<img>` elements.
pub static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("valid img selector"));
