//! Engine construction from layered configuration

use freightcast_core::config::LayeredConfig;
use freightcast_core::error::Result;
use freightcast_geo::CityTable;
use freightcast_store::{load_history, JsonRecordStore, RecordStore};
use std::sync::Arc;

use crate::engine::{EngineSettings, PredictionEngine};

/// Engine over a type-erased record store, as used by the binaries
pub type SharedEngine = PredictionEngine<Arc<dyn RecordStore>>;

/// Load reference data and open the record file named by `config`
pub fn engine_from_config(config: &LayeredConfig) -> Result<SharedEngine> {
    let cities = match &config.cities_path.value {
        Some(path) => CityTable::load_from_file(path)?,
        None => CityTable::builtin(),
    };

    let history = match &config.history_path.value {
        Some(path) => load_history(path)?,
        None => {
            tracing::warn!("No history file configured; training on same-day records only");
            Vec::new()
        }
    };

    let settings = EngineSettings::from(config);
    if !cities.contains(&settings.default_origin) {
        tracing::warn!(
            origin = %settings.default_origin,
            "Default origin is not in the city table"
        );
    }

    let store: Arc<dyn RecordStore> =
        Arc::new(JsonRecordStore::new(config.records_path.value.clone()));

    tracing::info!(
        cities = cities.len(),
        history = history.len(),
        records = %config.records_path.value.display(),
        "Prediction engine ready"
    );

    Ok(PredictionEngine::new(Arc::new(cities), Arc::new(history), store, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use freightcast_core::config::CliConfigOverrides;
    use freightcast_core::models::NewRecord;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_engine_from_config_files() {
        let dir = TempDir::new().unwrap();
        let history = dir.path().join("history.json");
        fs::write(
            &history,
            r#"[{"destination": "Almaty", "price": 900, "vehicle_type": "20t"},
                {"destination": "Astana", "price": 2100, "vehicle_type": "20t"},
                {"destination": "Moscow", "price": 5200, "vehicle_type": "20t"}]"#,
        )
        .unwrap();

        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            records_path: Some(dir.path().join("records.json")),
            history_path: Some(history),
            ..Default::default()
        });

        let engine = engine_from_config(&config).unwrap();
        assert_eq!(engine.history_len(), 3);
        assert_eq!(engine.cities().len(), 14);

        engine
            .store()
            .add_record(NewRecord::new("Khorgos", "Bishkek", "van", 480.0))
            .unwrap();
        assert!(dir.path().join("records.json").exists());

        let result = engine.predict("Khorgos", "Bishkek", "20t").unwrap();
        assert_eq!(result.vehicle_type, "20t");
    }

    #[test]
    fn test_missing_history_file_fails() {
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            history_path: Some("/nonexistent/history.json".into()),
            ..Default::default()
        });
        assert!(engine_from_config(&config).is_err());
    }
}
