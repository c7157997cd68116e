use scraper::ElementRef;

use crate::selectors::{DATA_CELL_SELECTOR, HEADER_CELL_SELECTOR, LINK_SELECTOR, ROW_SELECTOR};
use crate::tools::clean::normalize_cell;
use crate::types::AnimalRecord;

/// Convert one table into records: first row is the header, the rest are data.
pub(super) fn parse_table(table: &ElementRef<'_>) -> Vec<AnimalRecord> {
    let mut rows = table.select(&ROW_SELECTOR);
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row
        .select(&HEADER_CELL_SELECTOR)
        .map(|th| header_name(&th))
        .collect();

    rows.map(|row| parse_row(&headers, &row)).collect()
}

/// Header text with every newline removed.
pub(super) fn header_name(th: &ElementRef<'_>) -> String {
    th.text().collect::<String>().replace('\n', "")
}

/// Pair data cells with headers positionally; surplus on either side is dropped.
pub(super) fn parse_row(headers: &[String], row: &ElementRef<'_>) -> AnimalRecord {
    let mut record = AnimalRecord::new();
    for (header, cell) in headers.iter().zip(row.select(&DATA_CELL_SELECTOR)) {
        let text: String = cell.text().collect();
        if text.chars().count() <= 1 {
            continue;
        }
        record.insert_values(header, normalize_cell(&cell));
        if let Some(href) = first_href(&cell) {
            record.insert_href(header, href.to_string());
        }
    }
    record
}

fn first_href<'a>(cell: &ElementRef<'a>) -> Option<&'a str> {
    cell.select(&LINK_SELECTOR)
        .next()
        .and_then(|a| a.value().attr("href"))
}
