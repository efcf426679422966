//! Freightcast Model - Training and prediction
//!
//! This crate turns historical quotes and same-day records into weighted
//! training rows, fits one distance regression per vehicle type plus a
//! general model, and answers price predictions. Models are rebuilt from raw
//! data on every prediction.

pub mod bank;
pub mod bootstrap;
pub mod engine;
pub mod regression;
pub mod training;

pub use bank::{ModelBank, ModelSummary};
pub use bootstrap::{engine_from_config, SharedEngine};
pub use engine::{EngineSettings, EngineStats, PredictionEngine};
pub use regression::{FittedModel, LinearRegression, StandardScaler, WeightedPoint};
pub use training::TrainingSetBuilder;
