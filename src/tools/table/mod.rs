mod tests;
mod utils;

use utils::*;

use crate::error::Result;
use crate::selectors::TABLE_SELECTOR;
use crate::services::fetch::Fetcher;
use crate::types::AnimalRecord;
use scraper::Html;
use tracing::{info, instrument, warn};

/// Origin prepended to the site-relative links found in table cells.
pub const WIKI_ORIGIN: &str = "https://en.wikipedia.org";

/// The one page this crate scrapes.
pub const ANIMAL_LIST_URL: &str = "https://en.wikipedia.org/wiki/List_of_animal_names";

/// Fetch the animal list page and parse its sortable tables.
///
/// Any fetch failure is returned as-is; there is no retry. The records are
/// returned to the caller, who passes them on to image fetching and grouping.
///
/// # Examples
/// ```no_run
/// use wiki_animals::services::fetch::ReqwestFetcher;
/// use wiki_animals::tools::table::fetch_animal_records;
///
/// # async fn example() -> wiki_animals::Result<()> {
/// let fetcher = ReqwestFetcher::new("wiki_animals/0.1")?;
/// let records = fetch_animal_records(&fetcher).await?;
/// println!("{} animals", records.len());
/// # Ok(())
/// # }
/// ```
#[instrument(skip_all)]
pub async fn fetch_animal_records(fetcher: &dyn Fetcher) -> Result<Vec<AnimalRecord>> {
    info!("fetching {} via {}", ANIMAL_LIST_URL, fetcher.name());
    let html = fetcher.fetch_text(ANIMAL_LIST_URL).await?;
    let records = parse_animal_tables(&html);
    info!("parsed {} animal records", records.len());
    Ok(records)
}

/// Parse every `table.wikitable.sortable` in `html` into records.
///
/// Records keep row order; tables are concatenated in document order. A page
/// without matching tables yields an empty list.
pub fn parse_animal_tables(html: &str) -> Vec<AnimalRecord> {
    let doc = Html::parse_document(html);
    let tables: Vec<_> = doc.select(&TABLE_SELECTOR).collect();
    if tables.is_empty() {
        warn!("no sortable wikitable found on page");
    }
    tables.iter().flat_map(parse_table).collect()
}
