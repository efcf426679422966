pub mod city;
pub mod prediction;
pub mod quote;
pub mod record;
pub mod training;

pub use city::{CityEntry, Coordinate, MatchOrder};
pub use prediction::{PredictionResult, GENERAL_MODEL};
pub use quote::HistoricalQuote;
pub use record::{next_record_id, NewRecord, RecordId, RecordPatch, TodayRecord};
pub use training::TrainingRow;
