use chrono::NaiveDate;
use freightcast_core::error::Result;
use freightcast_core::models::{NewRecord, RecordId, RecordPatch, TodayRecord};
use std::sync::Arc;

/// Port for the same-day quote collection.
///
/// Every mutation is a full read-modify-write of the backing collection and
/// either succeeds completely or leaves the collection unchanged.
pub trait RecordStore: Send + Sync {
    /// Validate and append a record; id, date and time are assigned here
    fn add_record(&self, draft: NewRecord) -> Result<TodayRecord>;

    /// Change the editable fields of a record
    fn update_record(&self, id: RecordId, patch: RecordPatch) -> Result<TodayRecord>;

    /// Remove a record and return it
    fn delete_record(&self, id: RecordId) -> Result<TodayRecord>;

    /// Records dated today, in insertion order
    fn list_today(&self) -> Result<Vec<TodayRecord>>;

    /// Every stored record regardless of date
    fn list_all(&self) -> Result<Vec<TodayRecord>>;

    /// The date `list_today` filters on
    fn today(&self) -> NaiveDate;
}

impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    fn add_record(&self, draft: NewRecord) -> Result<TodayRecord> {
        (**self).add_record(draft)
    }

    fn update_record(&self, id: RecordId, patch: RecordPatch) -> Result<TodayRecord> {
        (**self).update_record(id, patch)
    }

    fn delete_record(&self, id: RecordId) -> Result<TodayRecord> {
        (**self).delete_record(id)
    }

    fn list_today(&self) -> Result<Vec<TodayRecord>> {
        (**self).list_today()
    }

    fn list_all(&self) -> Result<Vec<TodayRecord>> {
        (**self).list_all()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
