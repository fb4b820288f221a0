//! JSON file persistence for normalized postings.
//!
//! Every query re-reads the file; nothing is cached between calls.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, PostingRecord, Result};

/// Number of postings returned by [`JsonStore::top_ten`].
pub const TOP_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store named `<keyword>.json` inside `dir`. Path separators in the
    /// keyword are replaced so the file always lands directly in `dir`.
    pub fn for_keyword(dir: impl AsRef<Path>, keyword: &str) -> Self {
        let file_name: String = keyword
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        Self::new(dir.as_ref().join(format!("{file_name}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `records` as a pretty-printed JSON array, replacing whatever
    /// the file held before.
    pub fn create(&self, records: &[PostingRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).map_err(|source| Error::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = records.len(), "postings written");
        Ok(())
    }

    pub fn select_all(&self) -> Result<Vec<PostingRecord>> {
        let content = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<PostingRecord> =
            serde_json::from_str(&content).map_err(|source| Error::Json {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = records.len(), "postings loaded");
        Ok(records)
    }

    /// All postings, lowest `salary_from` first. Equal salaries keep file order.
    pub fn sorted_by_salary(&self) -> Result<Vec<PostingRecord>> {
        let mut records = self.select_all()?;
        records.sort_by(PostingRecord::cmp_by_salary);
        Ok(records)
    }

    /// The `limit` best-paid postings by `salary_from`, highest first.
    /// Equal salaries keep file order.
    pub fn top(&self, limit: usize) -> Result<Vec<PostingRecord>> {
        let mut records = self.select_all()?;
        records.sort_by(|a, b| b.cmp_by_salary(a));
        records.truncate(limit);
        Ok(records)
    }

    pub fn top_ten(&self) -> Result<Vec<PostingRecord>> {
        self.top(TOP_LIMIT)
    }
}
