//! JSON-file record store.
//!
//! The whole collection lives in one pretty-printed JSON array and is read
//! and rewritten wholesale on every mutation. A process-local lock serialises
//! the read-modify-write cycle; separate processes writing the same file can
//! still lose updates.

use chrono::NaiveDate;
use freightcast_core::clock::{Clock, SystemClock};
use freightcast_core::error::Result;
use freightcast_core::models::{NewRecord, RecordId, RecordPatch, TodayRecord};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ops;
use crate::ports::RecordStore;

pub struct JsonRecordStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

/// Outcome of reading the backing file
enum Loaded {
    Records(Vec<TodayRecord>),
    Missing,
    Corrupt(Vec<TodayRecord>),
}

impl Loaded {
    fn into_records(self) -> Vec<TodayRecord> {
        match self {
            Loaded::Records(records) | Loaded::Corrupt(records) => records,
            Loaded::Missing => Vec::new(),
        }
    }
}

impl JsonRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, Arc::new(SystemClock))
    }

    pub fn with_clock(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            clock,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file; unreadable or malformed content degrades to an empty
    /// collection with a warning
    fn load(&self) -> Loaded {
        if !self.path.exists() {
            return Loaded::Missing;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read record file, treating as empty"
                );
                return Loaded::Corrupt(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<TodayRecord>>(&content) {
            Ok(records) => Loaded::Records(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to parse record file, treating as empty"
                );
                Loaded::Corrupt(Vec::new())
            }
        }
    }

    /// Keep a copy of a corrupt file before it is overwritten
    fn preserve_corrupt(&self) {
        let backup = self.path.with_extension("json.corrupt");
        match fs::copy(&self.path, &backup) {
            Ok(_) => tracing::warn!(
                backup = %backup.display(),
                "Corrupt record file will be replaced; previous content preserved"
            ),
            Err(e) => tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Corrupt record file will be replaced and could not be backed up"
            ),
        }
    }

    fn save(&self, records: &[TodayRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "Saved record file");
        Ok(())
    }

    /// Run one read-modify-write cycle under the write lock
    fn mutate<T>(&self, op: impl FnOnce(&mut Vec<TodayRecord>) -> Result<T>) -> Result<T> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let loaded = self.load();
        let corrupt = matches!(loaded, Loaded::Corrupt(_));
        let mut records = loaded.into_records();

        let value = op(&mut records)?;

        if corrupt {
            self.preserve_corrupt();
        }
        self.save(&records)?;
        Ok(value)
    }
}

impl RecordStore for JsonRecordStore {
    fn add_record(&self, draft: NewRecord) -> Result<TodayRecord> {
        let now = self.clock.now();
        let record = self.mutate(|records| ops::add(records, draft, now))?;
        tracing::info!(
            id = record.id,
            origin = %record.origin_city,
            destination = %record.destination_city,
            vehicle = %record.vehicle_type,
            price = record.price,
            "Added record"
        );
        Ok(record)
    }

    fn update_record(&self, id: RecordId, patch: RecordPatch) -> Result<TodayRecord> {
        let now = self.clock.now();
        let record = self.mutate(|records| ops::update(records, id, &patch, now))?;
        tracing::info!(id, "Updated record");
        Ok(record)
    }

    fn delete_record(&self, id: RecordId) -> Result<TodayRecord> {
        let record = self.mutate(|records| ops::delete(records, id))?;
        tracing::info!(id, "Deleted record");
        Ok(record)
    }

    fn list_today(&self) -> Result<Vec<TodayRecord>> {
        let records = self.load().into_records();
        Ok(ops::on_date(&records, self.clock.today()))
    }

    fn list_all(&self) -> Result<Vec<TodayRecord>> {
        Ok(self.load().into_records())
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
