use serde::{Deserialize, Serialize};

/// Key of the model trained across every vehicle type
pub const GENERAL_MODEL: &str = "general";

/// Price estimate for one route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub origin: String,
    pub destination: String,

    /// Great-circle distance, rounded to whole kilometers
    pub distance_km: f64,

    /// Estimated price, floored at zero and rounded to cents
    pub price: f64,

    /// Model actually used, after falling back to the general model
    pub vehicle_type: String,

    pub has_history: bool,
    pub is_prediction: bool,
}
