use freightcast_core::models::{TrainingRow, GENERAL_MODEL};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::regression::{FittedModel, WeightedPoint};

/// Models trained from one training set: one per sufficiently observed
/// vehicle type plus the general model.
#[derive(Debug, Clone)]
pub struct ModelBank {
    vehicles: BTreeMap<String, FittedModel>,
    general: FittedModel,
    vehicle_types: Vec<String>,
    vehicle_rows: BTreeMap<String, usize>,
    rows: usize,
}

/// Inspection view of one trained model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub key: String,
    pub rows: usize,
    pub weight: f64,
    pub distance_mean: f64,
    pub distance_scale: f64,
    pub intercept: f64,
    pub slope: f64,
}

impl ModelBank {
    /// Train every model; `None` when `rows` is empty.
    ///
    /// A vehicle type gets a dedicated model once its rows weigh at least
    /// `min_vehicle_rows`. Rows without a vehicle type, or labelled with the
    /// general key itself, only feed the general model.
    pub fn train(rows: &[TrainingRow], min_vehicle_rows: u32) -> Option<Self> {
        let all: Vec<WeightedPoint> = rows.iter().map(point).collect();
        let general = FittedModel::fit(&all)?;

        let mut groups: BTreeMap<&str, Vec<WeightedPoint>> = BTreeMap::new();
        for row in rows {
            if let Some(vehicle) = row.vehicle_type.as_deref().filter(|v| *v != GENERAL_MODEL) {
                groups.entry(vehicle).or_default().push(point(row));
            }
        }

        let vehicle_types: Vec<String> = groups.keys().map(|v| v.to_string()).collect();
        let vehicle_rows = groups.iter().map(|(v, points)| (v.to_string(), points.len())).collect();

        let vehicles: BTreeMap<String, FittedModel> = groups
            .iter()
            .filter_map(|(vehicle, points)| {
                let weight: f64 = points.iter().map(|p| p.w).sum();
                if weight < f64::from(min_vehicle_rows) {
                    return None;
                }
                FittedModel::fit(points).map(|model| (vehicle.to_string(), model))
            })
            .collect();

        tracing::debug!(
            rows = rows.len(),
            vehicle_types = ?vehicle_types,
            modelled = ?vehicles.keys().collect::<Vec<_>>(),
            "Trained model bank"
        );

        Some(Self {
            vehicles,
            general,
            vehicle_types,
            vehicle_rows,
            rows: rows.len(),
        })
    }

    /// Model for `vehicle_type`, falling back to the general model.
    ///
    /// Returns the key of the model actually used.
    pub fn select(&self, vehicle_type: &str) -> (&str, &FittedModel) {
        match self.vehicles.get_key_value(vehicle_type) {
            Some((key, model)) if vehicle_type != GENERAL_MODEL => (key.as_str(), model),
            _ => (GENERAL_MODEL, &self.general),
        }
    }

    pub fn has_dedicated_model(&self, vehicle_type: &str) -> bool {
        vehicle_type != GENERAL_MODEL && self.vehicles.contains_key(vehicle_type)
    }

    pub fn general(&self) -> &FittedModel {
        &self.general
    }

    /// Every vehicle type seen in the training set, sorted
    pub fn vehicle_types(&self) -> &[String] {
        &self.vehicle_types
    }

    /// Vehicle types with a dedicated model, sorted
    pub fn modelled_vehicle_types(&self) -> Vec<&str> {
        self.vehicles.keys().map(String::as_str).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Per-model parameters, general model last
    pub fn summaries(&self) -> Vec<ModelSummary> {
        let mut summaries: Vec<ModelSummary> = self
            .vehicles
            .iter()
            .map(|(key, model)| {
                let rows = self.vehicle_rows.get(key).copied().unwrap_or_default();
                summarize(key, rows, model)
            })
            .collect();
        summaries.push(summarize(GENERAL_MODEL, self.rows, &self.general));
        summaries
    }
}

fn point(row: &TrainingRow) -> WeightedPoint {
    WeightedPoint::new(row.distance_km, row.price, f64::from(row.weight))
}

fn summarize(key: &str, rows: usize, model: &FittedModel) -> ModelSummary {
    ModelSummary {
        key: key.to_string(),
        rows,
        weight: model.weight,
        distance_mean: model.scaler.mean,
        distance_scale: model.scaler.scale,
        intercept: model.regression.intercept,
        slope: model.regression.slope,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(distance_km: f64, price: f64, vehicle: Option<&str>, weight: u32) -> TrainingRow {
        TrainingRow {
            destination_city: "X".to_string(),
            distance_km,
            price,
            vehicle_type: vehicle.map(str::to_string),
            weight,
        }
    }

    #[test]
    fn test_empty_rows_fail() {
        assert!(ModelBank::train(&[], 3).is_none());
    }

    #[test]
    fn test_threshold_for_dedicated_models() {
        let rows = vec![
            row(100.0, 1000.0, Some("truck"), 1),
            row(200.0, 1800.0, Some("truck"), 1),
            row(300.0, 2600.0, Some("truck"), 1),
            row(100.0, 400.0, Some("van"), 1),
            row(200.0, 700.0, Some("van"), 1),
        ];
        let bank = ModelBank::train(&rows, 3).unwrap();

        assert!(bank.has_dedicated_model("truck"));
        assert!(!bank.has_dedicated_model("van"));
        assert_eq!(bank.vehicle_types(), &["truck".to_string(), "van".to_string()]);
        assert_eq!(bank.modelled_vehicle_types(), vec!["truck"]);

        let (key, _) = bank.select("van");
        assert_eq!(key, GENERAL_MODEL);
        let (key, model) = bank.select("truck");
        assert_eq!(key, "truck");
        assert!((model.predict(150.0) - 1400.0).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_counts_weighted_rows() {
        let rows = vec![row(120.0, 500.0, Some("van"), 3)];
        let bank = ModelBank::train(&rows, 3).unwrap();
        assert!(bank.has_dedicated_model("van"));
    }

    #[test]
    fn test_general_model_covers_untyped_rows() {
        let rows = vec![
            row(100.0, 1000.0, None, 1),
            row(300.0, 3000.0, None, 1),
        ];
        let bank = ModelBank::train(&rows, 3).unwrap();
        assert!(bank.vehicle_types().is_empty());
        let (key, model) = bank.select("anything");
        assert_eq!(key, GENERAL_MODEL);
        assert!((model.predict(200.0) - 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_summaries_end_with_general() {
        let rows = vec![
            row(100.0, 1000.0, Some("truck"), 1),
            row(200.0, 1800.0, Some("truck"), 1),
            row(300.0, 2600.0, Some("truck"), 1),
        ];
        let bank = ModelBank::train(&rows, 3).unwrap();
        let summaries = bank.summaries();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].key, "truck");
        assert_eq!(summaries[0].rows, 3);
        assert_eq!(summaries[1].key, GENERAL_MODEL);
        assert!((summaries[1].distance_mean - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_labelled_general_feed_only_the_general_model() {
        let rows = vec![
            row(100.0, 1000.0, Some(GENERAL_MODEL), 1),
            row(200.0, 1800.0, Some(GENERAL_MODEL), 1),
            row(300.0, 2600.0, Some(GENERAL_MODEL), 1),
            row(150.0, 1300.0, Some("truck"), 1),
        ];
        let bank = ModelBank::train(&rows, 3).unwrap();

        assert_eq!(bank.vehicle_types(), &["truck".to_string()]);
        assert!(bank.modelled_vehicle_types().is_empty());

        let keys: Vec<String> = bank.summaries().into_iter().map(|s| s.key).collect();
        assert_eq!(keys, vec![GENERAL_MODEL.to_string()]);
        assert_eq!(bank.summaries()[0].rows, 4);
    }
}
