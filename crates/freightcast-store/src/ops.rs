//! Collection-level record operations shared by the adapters.
//!
//! Each function validates before touching the collection, so a failed call
//! leaves it unchanged.

use chrono::{NaiveDate, NaiveDateTime};
use freightcast_core::error::{FreightError, Result};
use freightcast_core::models::{next_record_id, NewRecord, RecordId, RecordPatch, TodayRecord};

pub(crate) fn add(
    records: &mut Vec<TodayRecord>,
    draft: NewRecord,
    now: NaiveDateTime,
) -> Result<TodayRecord> {
    draft.validate()?;
    let record = TodayRecord::create(next_record_id(records), draft, now);
    records.push(record.clone());
    Ok(record)
}

pub(crate) fn update(
    records: &mut [TodayRecord],
    id: RecordId,
    patch: &RecordPatch,
    now: NaiveDateTime,
) -> Result<TodayRecord> {
    patch.validate()?;
    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or(FreightError::RecordNotFound { id })?;
    patch.apply(record, now.time());
    Ok(record.clone())
}

pub(crate) fn delete(records: &mut Vec<TodayRecord>, id: RecordId) -> Result<TodayRecord> {
    let pos = records
        .iter()
        .position(|r| r.id == id)
        .ok_or(FreightError::RecordNotFound { id })?;
    Ok(records.remove(pos))
}

pub(crate) fn on_date(records: &[TodayRecord], date: NaiveDate) -> Vec<TodayRecord> {
    records.iter().filter(|r| r.is_on(date)).cloned().collect()
}
