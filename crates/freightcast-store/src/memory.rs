//! In-memory record store for tests and ephemeral runs.
//!
//! Uses `RwLock::unwrap()` intentionally: poisoning only follows a panic
//! while holding the lock.

use chrono::NaiveDate;
use freightcast_core::clock::{Clock, SystemClock};
use freightcast_core::error::Result;
use freightcast_core::models::{NewRecord, RecordId, RecordPatch, TodayRecord};
use std::sync::{Arc, RwLock};

use crate::ops;
use crate::ports::RecordStore;

#[derive(Clone)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<Vec<TodayRecord>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Seed the store with existing records, e.g. from earlier days
    pub fn with_records(self, records: Vec<TodayRecord>) -> Self {
        *self.records.write().unwrap() = records;
        self
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn add_record(&self, draft: NewRecord) -> Result<TodayRecord> {
        let mut records = self.records.write().unwrap();
        ops::add(&mut records, draft, self.clock.now())
    }

    fn update_record(&self, id: RecordId, patch: RecordPatch) -> Result<TodayRecord> {
        let mut records = self.records.write().unwrap();
        ops::update(&mut records, id, &patch, self.clock.now())
    }

    fn delete_record(&self, id: RecordId) -> Result<TodayRecord> {
        let mut records = self.records.write().unwrap();
        ops::delete(&mut records, id)
    }

    fn list_today(&self) -> Result<Vec<TodayRecord>> {
        let records = self.records.read().unwrap();
        Ok(ops::on_date(&records, self.clock.today()))
    }

    fn list_all(&self) -> Result<Vec<TodayRecord>> {
        Ok(self.records.read().unwrap().clone())
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
