use freightcast_core::error::{FreightError, Result};
use freightcast_core::models::{NewRecord, RecordPatch};
use freightcast_core::validation::{parse_price, validate_price};
use serde::Deserialize;

/// Price as sent by form-backed clients: a JSON number or a numeric string.
///
/// Any other JSON shape is kept so it can be rejected as an invalid price.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl PriceInput {
    pub fn parse(&self) -> Result<f64> {
        match self {
            PriceInput::Number(price) => validate_price(*price),
            PriceInput::Text(raw) => parse_price(raw),
            PriceInput::Other(_) => Err(FreightError::validation(
                "price",
                "must be a number or a numeric string",
            )),
        }
    }
}

/// Prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default, alias = "from_city")]
    pub origin: Option<String>,

    #[serde(default, alias = "to_city")]
    pub destination: String,

    #[serde(default, alias = "vehicle")]
    pub vehicle_type: Option<String>,
}

/// New record request body
#[derive(Debug, Deserialize)]
pub struct AddRecordRequest {
    #[serde(default, alias = "from_city")]
    pub origin_city: Option<String>,

    #[serde(default, alias = "to_city")]
    pub destination_city: Option<String>,

    #[serde(default, alias = "vehicle")]
    pub vehicle_type: Option<String>,

    #[serde(default)]
    pub price: Option<PriceInput>,
}

impl AddRecordRequest {
    pub fn into_new_record(self) -> Result<NewRecord> {
        let origin = required("origin_city", self.origin_city)?;
        let destination = required("destination_city", self.destination_city)?;
        let vehicle = required("vehicle_type", self.vehicle_type)?;
        let price = self
            .price
            .ok_or_else(|| FreightError::validation("price", "missing required field"))?
            .parse()?;

        Ok(NewRecord::new(origin, destination, vehicle, price))
    }
}

/// Record update request body; fields other than these are ignored
#[derive(Debug, Deserialize)]
pub struct UpdateRecordRequest {
    #[serde(default, alias = "from_city")]
    pub origin_city: Option<String>,

    #[serde(default, alias = "to_city")]
    pub destination_city: Option<String>,

    #[serde(default, alias = "vehicle")]
    pub vehicle_type: Option<String>,

    #[serde(default)]
    pub price: Option<PriceInput>,
}

impl UpdateRecordRequest {
    pub fn into_patch(self) -> Result<RecordPatch> {
        Ok(RecordPatch {
            origin_city: self.origin_city,
            destination_city: self.destination_city,
            vehicle_type: self.vehicle_type,
            price: self.price.map(|p| p.parse()).transpose()?,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| FreightError::validation(field, "missing required field"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_number_and_string() {
        let req: AddRecordRequest = serde_json::from_str(
            r#"{"from_city": "Khorgos", "to_city": "Almaty", "vehicle": "20t", "price": "1200.50"}"#,
        )
        .unwrap();
        assert_eq!(req.into_new_record().unwrap().price, 1200.5);

        let req: AddRecordRequest = serde_json::from_str(
            r#"{"origin_city": "Khorgos", "destination_city": "Almaty", "vehicle_type": "20t", "price": 900}"#,
        )
        .unwrap();
        assert_eq!(req.into_new_record().unwrap().price, 900.0);
    }

    #[test]
    fn test_malformed_price_is_validation_error() {
        let req: AddRecordRequest = serde_json::from_str(
            r#"{"origin_city": "Khorgos", "destination_city": "Almaty", "vehicle_type": "20t", "price": "cheap"}"#,
        )
        .unwrap();
        assert!(matches!(req.into_new_record(), Err(FreightError::Validation { .. })));
    }

    #[test]
    fn test_price_of_other_shape_is_validation_error() {
        let req: AddRecordRequest = serde_json::from_str(
            r#"{"from_city": "Khorgos", "to_city": "Almaty", "vehicle": "20t", "price": {"v": 1}}"#,
        )
        .unwrap();
        let err = req.into_new_record().unwrap_err();
        assert!(matches!(err, FreightError::Validation { ref field, .. } if field == "price"));

        let req: UpdateRecordRequest = serde_json::from_str(r#"{"price": [5]}"#).unwrap();
        assert!(matches!(req.into_patch(), Err(FreightError::Validation { .. })));
    }

    #[test]
    fn test_missing_field_is_validation_error() {
        let req: AddRecordRequest =
            serde_json::from_str(r#"{"origin_city": "Khorgos", "price": 10}"#).unwrap();
        let err = req.into_new_record().unwrap_err();
        assert!(matches!(err, FreightError::Validation { ref field, .. } if field == "destination_city"));
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let req: UpdateRecordRequest =
            serde_json::from_str(r#"{"id": 3, "date": "2020-01-01", "price": "55"}"#).unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.price, Some(55.0));
        assert!(patch.origin_city.is_none());
    }
}
