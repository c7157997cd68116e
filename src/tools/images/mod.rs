mod utils;

use utils::*;

use crate::error::{Error, Result};
use crate::services::fetch::Fetcher;
use crate::tools::table::WIKI_ORIGIN;
use crate::types::{AnimalRecord, DownloadResult, ImageBatch};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

/// Column whose link points at each animal's own article.
pub const ANIMAL_COLUMN: &str = "Animal";

/// Default record filter: take every record.
pub fn accept_all(_: &AnimalRecord) -> bool {
    true
}

/// Article URLs of the records passing `filter` that link their animal.
///
/// Records without an `Animal_href` are dropped whatever the filter says.
pub fn animal_page_urls<F>(records: &[AnimalRecord], filter: F) -> Vec<String>
where
    F: Fn(&AnimalRecord) -> bool,
{
    records
        .iter()
        .filter(|record| filter(record))
        .filter_map(|record| record.href(ANIMAL_COLUMN))
        .map(|href| format!("{WIKI_ORIGIN}{href}"))
        .collect()
}

/// Download the lead image of every selected animal page into `download_dir`.
///
/// Pages are handled one at a time, in record order. A failing page is logged
/// and recorded as [`DownloadResult::Failed`]; it never stops the batch.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
/// use wiki_animals::services::fetch::ReqwestFetcher;
/// use wiki_animals::tools::images::{accept_all, fetch_images};
/// use wiki_animals::tools::table::fetch_animal_records;
///
/// # async fn example() -> wiki_animals::Result<()> {
/// let fetcher = ReqwestFetcher::new("wiki_animals/0.1")?;
/// let records = fetch_animal_records(&fetcher).await?;
/// let batch = fetch_images(&fetcher, &records, accept_all, Path::new("images")).await;
/// println!("{:?}", batch.saved_paths());
/// # Ok(())
/// # }
/// ```
#[instrument(skip_all, fields(dir = %download_dir.display()))]
pub async fn fetch_images<F>(
    fetcher: &dyn Fetcher,
    records: &[AnimalRecord],
    filter: F,
    download_dir: &Path,
) -> ImageBatch
where
    F: Fn(&AnimalRecord) -> bool,
{
    let urls = animal_page_urls(records, filter);
    info!("fetching images for {} animal pages", urls.len());

    let mut batch = ImageBatch::default();
    for url in urls {
        let result = match fetch_image(fetcher, &url, download_dir).await {
            Ok(path) => {
                debug!("saved {} from {}", path.display(), url);
                DownloadResult::Saved { url, path }
            }
            Err(err) => {
                error!("url: {} failed to load/parse: {}", url, err);
                DownloadResult::Failed { url, error: err }
            }
        };
        batch.results.push(result);
    }

    info!(
        "saved {} of {} images",
        batch.saved_paths().len(),
        batch.len()
    );
    batch
}

/// Fetch one animal page, download its first image and save it under the
/// image's alt text. The alt text is used verbatim as the file name.
pub async fn fetch_image(fetcher: &dyn Fetcher, page_url: &str, download_dir: &Path) -> Result<PathBuf> {
    let html = fetcher.fetch_text(page_url).await?;
    let image = first_image(&html, page_url)?;
    debug!("image for {} is {}", page_url, image.url);

    let bytes = fetcher.fetch_bytes(&image.url).await?;
    let path = download_dir.join(&image.alt);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|e| Error::filesystem(&path, e))?;
    Ok(path)
}
