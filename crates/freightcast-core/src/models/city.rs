use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees (WGS 84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One row of the city reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub lat: f64,
    pub lon: f64,

    /// Whether the historical quote sheet covers this city
    #[serde(default)]
    pub has_history: bool,
}

impl CityEntry {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, has_history: bool) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            has_history,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Priority used when several known city names occur in the same text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrder {
    /// First name in table order wins
    #[default]
    Declaration,
    /// Longest name wins, ties fall back to table order
    LongestFirst,
}
