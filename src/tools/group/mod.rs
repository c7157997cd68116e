
use crate::types::AnimalRecord;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::{info, instrument};

/// Records bucketed by the values of one field.
///
/// Keys iterate in ascending lexicographic order. Each bucket keeps records in
/// the order they were met, and a record sits in one bucket per value it holds.
#[derive(Debug, Default)]
pub struct GroupedIndex<'a> {
    field: String,
    groups: BTreeMap<String, Vec<&'a AnimalRecord>>,
}

impl<'a> GroupedIndex<'a> {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn get(&self, key: &str) -> Option<&[&'a AnimalRecord]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a AnimalRecord])> {
        self.groups
            .iter()
            .map(|(key, records)| (key.as_str(), records.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of bucket sizes, counting a record once per bucket.
    pub fn total_members(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Group `records` by the items of `field`.
///
/// Records without `field` (or holding only a link under that name) are
/// skipped; there is no catch-all bucket.
///
/// # Examples
/// ```
/// use wiki_animals::tools::group::group_by;
/// use wiki_animals::AnimalRecord;
///
/// let records = vec![
///     AnimalRecord::new().with_values("Collateral adjective", &["feline", "leonine"]),
///     AnimalRecord::new().with_values("Collateral adjective", &["feline"]),
/// ];
/// let index = group_by(&records, "Collateral adjective");
/// assert_eq!(index.get("feline").map(|g| g.len()), Some(2));
/// assert_eq!(index.get("leonine").map(|g| g.len()), Some(1));
/// ```
pub fn group_by<'a>(records: &'a [AnimalRecord], field: &str) -> GroupedIndex<'a> {
    let mut groups: BTreeMap<String, Vec<&'a AnimalRecord>> = BTreeMap::new();
    for record in records {
        let Some(values) = record.values(field) else {
            continue;
        };
        for value in values {
            groups.entry(value.clone()).or_default().push(record);
        }
    }
    GroupedIndex {
        field: field.to_string(),
        groups,
    }
}

/// Render the report lines.
///
/// One `[<index> <key>]` header per group (zero-based index, sorted keys),
/// followed by `<position>, <record>` for each member (one-based).
pub fn render_report(index: &GroupedIndex<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(index.len() + index.total_members());
    for (i, (key, records)) in index.iter().enumerate() {
        lines.push(format!("[{i} {key}]"));
        for (position, record) in records.iter().enumerate() {
            lines.push(format!("{}, {}", position + 1, record));
        }
    }
    lines
}

/// Write the report, one line each, to `out`.
pub fn write_report<W: Write>(index: &GroupedIndex<'_>, out: &mut W) -> io::Result<()> {
    for line in render_report(index) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Emit the report through the log at info level.
#[instrument(skip_all, fields(field = %index.field()))]
pub fn log_report(index: &GroupedIndex<'_>) {
    for line in render_report(index) {
        info!("{}", line);
    }
}
