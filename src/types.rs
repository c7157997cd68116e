use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Suffix appended to a column name for the first hyperlink found in its cell.
pub const HREF_SUFFIX: &str = "_href";

/// Value stored under one record key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Normalized cell items.
    Values(Vec<String>),
    /// Raw href of the first link in a cell (`<Column>_href`).
    Href(String),
}

impl FieldValue {
    pub fn as_values(&self) -> Option<&[String]> {
        match self {
            FieldValue::Values(v) => Some(v),
            FieldValue::Href(_) => None,
        }
    }

    pub fn as_href(&self) -> Option<&str> {
        match self {
            FieldValue::Href(h) => Some(h),
            FieldValue::Values(_) => None,
        }
    }
}

/// One parsed table row.
///
/// Keys are the table's header names, plus `<Column>_href` entries. A missing
/// key means the source cell was blank (one character or less), never an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalRecord(pub BTreeMap<String, FieldValue>);

impl AnimalRecord {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_values(mut self, column: &str, values: &[&str]) -> Self {
        self.insert_values(column, values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn with_href(mut self, column: &str, href: &str) -> Self {
        self.insert_href(column, href.to_string());
        self
    }

    pub(crate) fn insert_values(&mut self, column: &str, values: Vec<String>) {
        self.0
            .insert(column.to_string(), FieldValue::Values(values));
    }

    pub(crate) fn insert_href(&mut self, column: &str, href: String) {
        self.0
            .insert(format!("{column}{HREF_SUFFIX}"), FieldValue::Href(href));
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Normalized items of `column`, if the cell was present.
    pub fn values(&self, column: &str) -> Option<&[String]> {
        self.get(column).and_then(FieldValue::as_values)
    }

    /// First link of `column`'s cell, if it had one.
    pub fn href(&self, column: &str) -> Option<&str> {
        self.get(&format!("{column}{HREF_SUFFIX}"))
            .and_then(FieldValue::as_href)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/* Compact JSON object; used for report lines */
impl fmt::Display for AnimalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Outcome of one attempted image download.
#[derive(Debug)]
pub enum DownloadResult {
    Saved { url: String, path: PathBuf },
    Failed { url: String, error: crate::Error },
}

impl DownloadResult {
    pub fn url(&self) -> &str {
        match self {
            DownloadResult::Saved { url, .. } | DownloadResult::Failed { url, .. } => url,
        }
    }

    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            DownloadResult::Saved { path, .. } => Some(path),
            DownloadResult::Failed { .. } => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadResult::Saved { .. })
    }
}

/// Results of an image batch, one entry per attempted page in input order.
#[derive(Debug, Default)]
pub struct ImageBatch {
    pub results: Vec<DownloadResult>,
}

impl ImageBatch {
    /// Paths of the images that were written; failed entries are absent.
    pub fn saved_paths(&self) -> Vec<&PathBuf> {
        self.results.iter().filter_map(DownloadResult::path).collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &crate::Error)> {
        self.results.iter().filter_map(|r| match r {
            DownloadResult::Failed { url, error } => Some((url.as_str(), error)),
            DownloadResult::Saved { .. } => None,
        })
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Settings for one scrape/download/report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub log_file: PathBuf,
    pub log_level: String,
    /// Download images here; `None` skips the image phase.
    pub image_dir: Option<PathBuf>,
    pub group_by: String,
    /// Also write the report to this file.
    pub report_file: Option<PathBuf>,
    pub user_agent: String,
    pub print_json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("wiki_animals.log"),
            log_level: "debug".into(),
            image_dir: None,
            group_by: "Collateral adjective".into(),
            report_file: None,
            user_agent: concat!("wiki_animals/", env!("CARGO_PKG_VERSION")).into(),
            print_json: false,
        }
    }
}
