use freightcast_core::models::TodayRecord;
use serde::Serialize;

/// Created or updated record
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub success: bool,
    pub record: TodayRecord,
}

impl RecordResponse {
    pub fn new(record: TodayRecord) -> Self {
        Self { success: true, record }
    }
}

/// Deleted record
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: TodayRecord,
}

/// Today's records
#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub records: Vec<TodayRecord>,
    pub count: usize,
}

/// One selectable city
#[derive(Debug, Serialize)]
pub struct CityInfo {
    pub name: String,
    pub has_history: bool,
    pub is_origin: bool,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityInfo>,
    pub cities_with_history: Vec<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "freightcast-api" }
    }
}
