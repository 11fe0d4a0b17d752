use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::viewport::RowSource;

pub mod error;
pub use error::StoreError;

/// One catalog entry. Records carry no identity beyond their position in the
/// store; equality across mutation is by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub year: String,
    pub title: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub seen: bool,
}

impl Record {
    pub fn new(year: impl Into<String>, title: impl Into<String>) -> Self {
        Record {
            year: year.into(),
            title: title.into(),
            path: None,
            seen: false,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

/// The comparison key for the catalog ordering. Session-only: every load
/// starts back at `Year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Year,
    Title,
    Seen,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Year => write!(f, "year"),
            SortField::Title => write!(f, "title"),
            SortField::Seen => write!(f, "seen"),
        }
    }
}

/// The durable, always-sorted record collection.
///
/// Records live in memory; every structural mutation re-sorts and then
/// synchronously rewrites the whole backing file before returning. The
/// rewrite goes through a temp file plus rename so a crash mid-write never
/// leaves a torn catalog.
pub struct Store {
    records: Vec<Record>,
    file: Option<PathBuf>,
    sort: SortField,
    reversed: bool,
}

impl Store {
    /// Load the catalog from `file`. A missing file yields an empty store; a
    /// file that cannot be decoded is an unrecoverable load failure.
    pub fn load(file: &Path) -> Result<Self, StoreError> {
        let records: Vec<Record> = if file.is_file() {
            let bytes = fs::read(file)?;
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
                file: file.to_path_buf(),
                source,
            })?
        } else {
            Vec::new()
        };
        let mut store = Store {
            records,
            file: Some(file.to_path_buf()),
            sort: SortField::default(),
            reversed: false,
        };
        store.resort();
        Ok(store)
    }

    /// A store with no backing file. Mutations skip persistence; used by
    /// tests and anywhere a throwaway sorted list is useful.
    pub fn in_memory(records: Vec<Record>) -> Self {
        let mut store = Store {
            records,
            file: None,
            sort: SortField::default(),
            reversed: false,
        };
        store.resort();
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sort_field(&self) -> SortField {
        self.sort
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Record at `index`, or `None` when out of range. Absence means "no
    /// current selection", not an error.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Insert a record, re-sort, persist.
    pub fn append(&mut self, record: Record) -> Result<(), StoreError> {
        self.records.push(record);
        self.resort();
        self.commit()
    }

    /// Remove the record at `index` and persist. Removal preserves the sort
    /// order, so no re-sort is needed.
    pub fn delete(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::OutOfRange(index));
        }
        self.records.remove(index);
        self.commit()
    }

    /// Update the seen flag of the record at `index`, re-sort, persist.
    /// An out-of-range index is a silent no-op and touches nothing.
    pub fn set_seen(&mut self, index: usize, seen: bool) -> Result<(), StoreError> {
        match self.records.get_mut(index) {
            Some(record) => {
                record.seen = seen;
                self.resort();
                self.commit()
            }
            None => Ok(()),
        }
    }

    pub fn toggle_seen(&mut self, index: usize) -> Result<(), StoreError> {
        match self.records.get(index) {
            Some(record) => {
                let seen = record.seen;
                self.set_seen(index, !seen)
            }
            None => Ok(()),
        }
    }

    /// Change the comparison key and re-sort in place. Not persisted: sort
    /// order is session state only.
    pub fn sort_by(&mut self, field: SortField) {
        self.sort = field;
        self.resort();
    }

    /// Flip the sort direction and re-sort in place.
    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
        self.resort();
    }

    // Stable sort with the direction folded into the comparator, so records
    // with equal keys keep their original relative order either way.
    fn resort(&mut self) {
        let field = self.sort;
        let reversed = self.reversed;
        self.records.sort_by(|a, b| {
            let ord = match field {
                SortField::Year => a.year.cmp(&b.year),
                SortField::Title => a.title.cmp(&b.title),
                SortField::Seen => a.seen.cmp(&b.seen),
            };
            if reversed {
                ord.reverse()
            } else {
                ord
            }
        });
        debug_assert!(self.is_sorted());
    }

    fn is_sorted(&self) -> bool {
        self.records.windows(2).all(|pair| {
            let ord = match self.sort {
                SortField::Year => pair[0].year.cmp(&pair[1].year),
                SortField::Title => pair[0].title.cmp(&pair[1].title),
                SortField::Seen => pair[0].seen.cmp(&pair[1].seen),
            };
            if self.reversed {
                ord != Ordering::Less
            } else {
                ord != Ordering::Greater
            }
        })
    }

    // Full rewrite of the backing file via temp-and-rename.
    fn commit(&self) -> Result<(), StoreError> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_vec_pretty(&self.records).map_err(StoreError::Encode)?;
        let tmp = file.with_extension("tmp");
        fs::write(&tmp, &data)?;
        fs::rename(&tmp, file)?;
        debug!("catalog committed: {} records", self.records.len());
        Ok(())
    }
}

impl RowSource for Store {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn render(&self, index: usize) -> Option<String> {
        self.records.get(index).map(|record| {
            let marker = if record.seen { ' ' } else { '!' };
            format!("{} ({}) {}", marker, record.year, record.title)
        })
    }
}
