use serde::Serialize;

/// One weighted observation fed to the regression.
///
/// Historical rows carry weight 1; same-day records carry the configured
/// today weight, which is equivalent to duplicating them that many times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingRow {
    pub destination_city: String,
    pub distance_km: f64,
    pub price: f64,
    pub vehicle_type: Option<String>,
    pub weight: u32,
}
