use freightcast_core::models::TodayRecord;
use freightcast_geo::CityTable;
use freightcast_model::ModelSummary;
use serde::Serialize;
use tabled::Tabled;

/// One row of the `today` listing
#[derive(Debug, Serialize, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "ID")]
    pub id: u64,
    #[tabled(rename = "Time")]
    pub time: String,
    #[tabled(rename = "From")]
    pub origin: String,
    #[tabled(rename = "To")]
    pub destination: String,
    #[tabled(rename = "Vehicle")]
    pub vehicle: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Updated")]
    pub updated: String,
}

impl From<&TodayRecord> for RecordRow {
    fn from(record: &TodayRecord) -> Self {
        Self {
            id: record.id,
            time: record.time.format("%H:%M:%S").to_string(),
            origin: record.origin_city.clone(),
            destination: record.destination_city.clone(),
            vehicle: record.vehicle_type.clone(),
            price: format!("{:.2}", record.price),
            updated: record
                .updated_time
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct CityRow {
    #[tabled(rename = "City")]
    pub name: String,
    #[tabled(rename = "Lat")]
    pub lat: f64,
    #[tabled(rename = "Lon")]
    pub lon: f64,
    #[tabled(rename = "History")]
    pub has_history: bool,
    #[tabled(rename = "Origin")]
    pub is_origin: bool,
}

impl CityRow {
    /// Rows with `origin` first and the rest sorted by name
    pub fn listing(table: &CityTable, origin: &str) -> Vec<Self> {
        let mut rows: Vec<Self> = table
            .entries()
            .iter()
            .map(|c| Self {
                name: c.name.clone(),
                lat: c.lat,
                lon: c.lon,
                has_history: c.has_history,
                is_origin: c.name == origin,
            })
            .collect();
        rows.sort_by(|a, b| (!a.is_origin, &a.name).cmp(&(!b.is_origin, &b.name)));
        rows
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct ModelRow {
    #[tabled(rename = "Model")]
    pub key: String,
    #[tabled(rename = "Rows")]
    pub rows: usize,
    #[tabled(rename = "Weight")]
    pub weight: String,
    #[tabled(rename = "Mean km")]
    pub distance_mean: String,
    #[tabled(rename = "Intercept")]
    pub intercept: String,
    #[tabled(rename = "Per km")]
    pub per_km: String,
}

impl From<&ModelSummary> for ModelRow {
    fn from(summary: &ModelSummary) -> Self {
        Self {
            key: summary.key.clone(),
            rows: summary.rows,
            weight: format!("{:.0}", summary.weight),
            distance_mean: format!("{:.1}", summary.distance_mean),
            intercept: format!("{:.2}", summary.intercept),
            per_km: format!("{:.4}", summary.slope / summary.distance_scale),
        }
    }
}

/// Output for the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}
