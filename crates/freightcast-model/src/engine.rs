use chrono::NaiveDate;
use freightcast_core::config::{
    LayeredConfig, DEFAULT_MIN_VEHICLE_ROWS, DEFAULT_ORIGIN, DEFAULT_TODAY_WEIGHT,
};
use freightcast_core::error::{FreightError, Result};
use freightcast_core::models::{HistoricalQuote, MatchOrder, PredictionResult, GENERAL_MODEL};
use freightcast_geo::{CityExtractor, CityTable};
use freightcast_store::RecordStore;
use serde::Serialize;
use std::sync::{Arc, RwLock};

use crate::bank::{ModelBank, ModelSummary};
use crate::training::TrainingSetBuilder;

/// Tunables for training and prediction
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub default_origin: String,
    pub today_weight: u32,
    pub min_vehicle_rows: u32,
    pub city_match_order: MatchOrder,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_origin: DEFAULT_ORIGIN.to_string(),
            today_weight: DEFAULT_TODAY_WEIGHT,
            min_vehicle_rows: DEFAULT_MIN_VEHICLE_ROWS,
            city_match_order: MatchOrder::Declaration,
        }
    }
}

impl From<&LayeredConfig> for EngineSettings {
    fn from(config: &LayeredConfig) -> Self {
        Self {
            default_origin: config.default_origin.value.clone(),
            today_weight: config.today_weight.value,
            min_vehicle_rows: config.min_vehicle_rows.value,
            city_match_order: config.city_match_order.value,
        }
    }
}

/// Data volume overview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineStats {
    pub historical_rows: usize,
    pub today_records: usize,
    pub vehicle_types: usize,
    pub date: NaiveDate,
    pub city_count: usize,
}

/// Freight price predictor.
///
/// Every prediction retrains from the raw historical quotes and the current
/// contents of the record store, so record edits take effect immediately.
pub struct PredictionEngine<S>
where
    S: RecordStore,
{
    cities: Arc<CityTable>,
    extractor: CityExtractor,
    history: Arc<Vec<HistoricalQuote>>,
    store: S,
    settings: EngineSettings,
    last_vehicle_types: RwLock<Option<Vec<String>>>,
}

impl<S> PredictionEngine<S>
where
    S: RecordStore,
{
    /// Create a new prediction engine
    pub fn new(
        cities: Arc<CityTable>,
        history: Arc<Vec<HistoricalQuote>>,
        store: S,
        settings: EngineSettings,
    ) -> Self {
        let extractor = CityExtractor::new(&cities, settings.city_match_order);
        Self {
            cities,
            extractor,
            history,
            store,
            settings,
            last_vehicle_types: RwLock::new(None),
        }
    }

    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Retrain all models for routes leaving `origin`
    pub fn train(&self, origin: &str) -> Result<ModelBank> {
        let today = self.store.list_today()?;
        let builder =
            TrainingSetBuilder::new(&self.cities, &self.extractor, self.settings.today_weight);
        let rows = builder.build(origin, &self.history, &today);

        let bank = ModelBank::train(&rows, self.settings.min_vehicle_rows).ok_or_else(|| {
            FreightError::NoTrainableData {
                origin: origin.to_string(),
            }
        })?;

        self.remember_vehicle_types(bank.vehicle_types().to_vec());
        Ok(bank)
    }

    /// Estimate the price of moving a load from `origin` to `destination`.
    ///
    /// Unknown vehicle types, and an empty one, use the general model.
    pub fn predict(
        &self,
        origin: &str,
        destination: &str,
        vehicle_type: &str,
    ) -> Result<PredictionResult> {
        let distance = self.cities.distance_km(origin, destination).ok_or_else(|| {
            FreightError::DistanceUnavailable {
                origin: origin.to_string(),
                destination: destination.to_string(),
            }
        })?;

        let bank = self.train(origin)?;

        let requested = if vehicle_type.trim().is_empty() { GENERAL_MODEL } else { vehicle_type };
        let (used, model) = bank.select(requested);
        let raw = model.predict(distance);

        // Straight-line fits can dip below zero on short hauls
        let price = round_to_cents(raw.max(0.0));

        let has_history = self.cities.has_history(destination);

        tracing::info!(
            origin,
            destination,
            requested_vehicle = requested,
            vehicle = used,
            distance_km = distance,
            raw_price = raw,
            price,
            "Predicted price"
        );

        Ok(PredictionResult {
            origin: origin.to_string(),
            destination: destination.to_string(),
            distance_km: distance.round(),
            price,
            vehicle_type: used.to_string(),
            has_history,
            is_prediction: !has_history,
        })
    }

    /// Vehicle types seen by the most recent training pass.
    ///
    /// Trains for the default origin when nothing has been trained yet; an
    /// origin without data yields an empty list.
    pub fn vehicle_types_known(&self) -> Result<Vec<String>> {
        let cached = self.last_vehicle_types.read().unwrap_or_else(|e| e.into_inner()).clone();
        if let Some(types) = cached {
            return Ok(types);
        }

        match self.train(&self.settings.default_origin) {
            Ok(bank) => Ok(bank.vehicle_types().to_vec()),
            Err(FreightError::NoTrainableData { .. }) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Retrain for `origin` and describe every fitted model
    pub fn model_summaries(&self, origin: &str) -> Result<Vec<ModelSummary>> {
        Ok(self.train(origin)?.summaries())
    }

    pub fn stats(&self) -> Result<EngineStats> {
        Ok(EngineStats {
            historical_rows: self.history.len(),
            today_records: self.store.list_today()?.len(),
            vehicle_types: self.vehicle_types_known()?.len(),
            date: self.store.today(),
            city_count: self.cities.len(),
        })
    }

    fn remember_vehicle_types(&self, types: Vec<String>) {
        *self.last_vehicle_types.write().unwrap_or_else(|e| e.into_inner()) = Some(types);
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
