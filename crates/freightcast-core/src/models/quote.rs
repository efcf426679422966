use serde::{Deserialize, Serialize};

/// A row of the historical quote sheet.
///
/// The destination is free text ("Almaty, warehouse 4") and is resolved to a
/// known city during training. Rows without a price or a recognisable city
/// are skipped; rows without a vehicle type only feed the general model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalQuote {
    #[serde(default)]
    pub destination: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub vehicle_type: Option<String>,
}

impl HistoricalQuote {
    pub fn new(destination: impl Into<String>, price: f64, vehicle_type: impl Into<String>) -> Self {
        Self {
            destination: Some(destination.into()),
            price: Some(price),
            vehicle_type: Some(vehicle_type.into()),
        }
    }
}
