//! Manually entered same-day price quotes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{require_field, validate_price};

pub type RecordId = u64;

/// A quote entered by hand, scoped to the calendar date it was created on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    pub time: NaiveTime,

    #[serde(alias = "from_city")]
    pub origin_city: String,

    #[serde(alias = "to_city")]
    pub destination_city: String,

    #[serde(alias = "vehicle")]
    pub vehicle_type: String,

    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<NaiveTime>,
}

impl TodayRecord {
    /// Build a stored record from a validated draft
    pub fn create(id: RecordId, draft: NewRecord, now: NaiveDateTime) -> Self {
        Self {
            id,
            date: now.date(),
            time: now.time(),
            origin_city: draft.origin_city,
            destination_city: draft.destination_city,
            vehicle_type: draft.vehicle_type,
            price: draft.price,
            updated_time: None,
        }
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Caller-supplied fields of a new record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub origin_city: String,
    pub destination_city: String,
    pub vehicle_type: String,
    pub price: f64,
}

impl NewRecord {
    pub fn new(
        origin_city: impl Into<String>,
        destination_city: impl Into<String>,
        vehicle_type: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            origin_city: origin_city.into(),
            destination_city: destination_city.into(),
            vehicle_type: vehicle_type.into(),
            price,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_field("origin_city", &self.origin_city)?;
        require_field("destination_city", &self.destination_city)?;
        require_field("vehicle_type", &self.vehicle_type)?;
        validate_price(self.price)?;
        Ok(())
    }
}

/// Partial update of a record.
///
/// Only the route, vehicle and price are editable. Unknown fields in a
/// deserialized patch are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default, alias = "from_city")]
    pub origin_city: Option<String>,

    #[serde(default, alias = "to_city")]
    pub destination_city: Option<String>,

    #[serde(default, alias = "vehicle")]
    pub vehicle_type: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,
}

impl RecordPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(origin) = &self.origin_city {
            require_field("origin_city", origin)?;
        }
        if let Some(destination) = &self.destination_city {
            require_field("destination_city", destination)?;
        }
        if let Some(vehicle) = &self.vehicle_type {
            require_field("vehicle_type", vehicle)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.origin_city.is_none()
            && self.destination_city.is_none()
            && self.vehicle_type.is_none()
            && self.price.is_none()
    }

    /// Apply the patched fields and stamp the update time
    pub fn apply(&self, record: &mut TodayRecord, at: NaiveTime) {
        if let Some(origin) = &self.origin_city {
            record.origin_city = origin.clone();
        }
        if let Some(destination) = &self.destination_city {
            record.destination_city = destination.clone();
        }
        if let Some(vehicle) = &self.vehicle_type {
            record.vehicle_type = vehicle.clone();
        }
        if let Some(price) = self.price {
            record.price = price;
        }
        record.updated_time = Some(at);
    }
}

/// Next free id: one past the largest id ever stored, so deleted ids stay retired
/// as long as a larger id survives.
pub fn next_record_id(records: &[TodayRecord]) -> RecordId {
    records.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(10, 15, 0).unwrap()
    }

    fn record(id: RecordId) -> TodayRecord {
        TodayRecord::create(id, NewRecord::new("Khorgos", "Almaty", "20t", 1500.0), now())
    }

    #[test]
    fn test_create_assigns_date_and_time() {
        let r = record(7);
        assert_eq!(r.id, 7);
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(r.time, NaiveTime::from_hms_opt(10, 15, 0).unwrap());
        assert!(r.updated_time.is_none());
    }

    #[test]
    fn test_next_record_id() {
        assert_eq!(next_record_id(&[]), 1);
        assert_eq!(next_record_id(&[record(3), record(1)]), 4);
    }

    #[test]
    fn test_new_record_rejects_non_positive_price() {
        assert!(NewRecord::new("A", "B", "van", 0.0).validate().is_err());
        assert!(NewRecord::new("A", "B", "van", -5.0).validate().is_err());
        assert!(NewRecord::new("A", "B", "van", f64::NAN).validate().is_err());
        assert!(NewRecord::new("A", "B", "van", 1.0).validate().is_ok());
    }

    #[test]
    fn test_new_record_requires_fields() {
        assert!(NewRecord::new("", "B", "van", 10.0).validate().is_err());
        assert!(NewRecord::new("A", "  ", "van", 10.0).validate().is_err());
        assert!(NewRecord::new("A", "B", "", 10.0).validate().is_err());
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut r = record(2);
        let patch = RecordPatch {
            price: Some(1750.0),
            ..Default::default()
        };
        let at = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
        patch.apply(&mut r, at);

        assert_eq!(r.price, 1750.0);
        assert_eq!(r.origin_city, "Khorgos");
        assert_eq!(r.destination_city, "Almaty");
        assert_eq!(r.id, 2);
        assert_eq!(r.time, NaiveTime::from_hms_opt(10, 15, 0).unwrap());
        assert_eq!(r.updated_time, Some(at));
    }

    #[test]
    fn test_patch_ignores_unknown_fields() {
        let patch: RecordPatch =
            serde_json::from_str(r#"{"id": 99, "date": "2000-01-01", "vehicle": "van"}"#).unwrap();
        assert_eq!(patch.vehicle_type.as_deref(), Some("van"));
        assert!(patch.origin_city.is_none());
        assert!(patch.price.is_none());
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(record(1)).unwrap();
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["time"], "10:15:00");
        assert_eq!(json["origin_city"], "Khorgos");
        assert!(json.get("updated_time").is_none());
    }

    #[test]
    fn test_record_accepts_legacy_field_names() {
        let r: TodayRecord = serde_json::from_str(
            r#"{"id": 1, "date": "2024-03-01", "time": "08:00:00",
                "from_city": "Khorgos", "to_city": "Moscow", "vehicle": "20t", "price": 4200}"#,
        )
        .unwrap();
        assert_eq!(r.destination_city, "Moscow");
        assert_eq!(r.vehicle_type, "20t");
    }
}
