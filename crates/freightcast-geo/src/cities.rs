use freightcast_core::error::{FreightError, Result};
use freightcast_core::models::{CityEntry, Coordinate};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Ordered city reference table keyed by name
#[derive(Debug, Clone)]
pub struct CityTable {
    entries: Vec<CityEntry>,
    index: HashMap<String, usize>,
}

/// TOML layout of a city table file
#[derive(Debug, Deserialize)]
struct CityFile {
    #[serde(default)]
    city: Vec<CityEntry>,
}

impl CityTable {
    /// Build a table, rejecting duplicate names and out-of-range coordinates
    pub fn new(entries: Vec<CityEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(FreightError::ConfigInvalid {
                    key: "city".to_string(),
                    reason: format!("entry {} has an empty name", i),
                });
            }
            if !(-90.0..=90.0).contains(&entry.lat) || !(-180.0..=180.0).contains(&entry.lon) {
                return Err(FreightError::ConfigInvalid {
                    key: "city".to_string(),
                    reason: format!(
                        "{} has out-of-range coordinates ({}, {})",
                        entry.name, entry.lat, entry.lon
                    ),
                });
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(FreightError::ConfigInvalid {
                    key: "city".to_string(),
                    reason: format!("duplicate city name: {}", entry.name),
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// Load a table from a TOML file with a `[[city]]` array
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| FreightError::ConfigInvalid {
            key: "cities_path".to_string(),
            reason: format!("Failed to read {}: {}", path.as_ref().display(), e),
        })?;

        let file: CityFile = toml::from_str(&content).map_err(|e| FreightError::ConfigInvalid {
            key: "cities_path".to_string(),
            reason: format!("Failed to parse TOML: {}", e),
        })?;

        let table = Self::new(file.city)?;
        tracing::info!(
            path = %path.as_ref().display(),
            cities = table.len(),
            "Loaded city table"
        );
        Ok(table)
    }

    /// Table shipped with the service: Khorgos plus the Central Asian,
    /// Russian and Caucasus destinations it quotes for
    pub fn builtin() -> Self {
        let entries = vec![
            // Cities covered by the historical quote sheet
            CityEntry::new("Khorgos", 44.2167, 80.4167, false),
            CityEntry::new("Almaty", 43.2220, 76.8512, true),
            CityEntry::new("Astana", 51.1694, 71.4491, true),
            CityEntry::new("Tashkent", 41.2995, 69.2401, true),
            CityEntry::new("Moscow", 55.7558, 37.6173, true),
            CityEntry::new("Baku", 40.4093, 49.8671, true),
            // Kazakhstan
            CityEntry::new("Karaganda", 49.8047, 73.1094, false),
            CityEntry::new("Shymkent", 42.3417, 69.5967, false),
            CityEntry::new("Aktobe", 50.2839, 57.1670, false),
            // Kyrgyzstan
            CityEntry::new("Bishkek", 42.8746, 74.5698, false),
            // Uzbekistan
            CityEntry::new("Samarkand", 39.6542, 66.9597, false),
            // Russia
            CityEntry::new("Novosibirsk", 55.0084, 82.9357, false),
            CityEntry::new("Yekaterinburg", 56.8389, 60.6057, false),
            // Georgia
            CityEntry::new("Tbilisi", 41.7151, 44.8271, false),
        ];

        let index = entries.iter().enumerate().map(|(i, e)| (e.name.clone(), i)).collect();
        Self { entries, index }
    }

    pub fn get(&self, name: &str) -> Option<&CityEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn coordinate(&self, name: &str) -> Option<Coordinate> {
        self.get(name).map(CityEntry::coordinate)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether the historical quote sheet covers `name`.
    ///
    /// This is a fixed reference flag, not derived from the training set.
    pub fn has_history(&self, name: &str) -> bool {
        self.get(name).is_some_and(|e| e.has_history)
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[CityEntry] {
        &self.entries
    }

    /// Names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn history_cities(&self) -> Vec<&str> {
        self.entries.iter().filter(|e| e.has_history).map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CityTable {
    fn default() -> Self {
        Self::builtin()
    }
}
