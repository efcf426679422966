//! End-to-end tests for training and prediction

use chrono::NaiveDate;
use freightcast_core::clock::FixedClock;
use freightcast_core::models::{
    CityEntry, HistoricalQuote, NewRecord, RecordPatch, TodayRecord, GENERAL_MODEL,
};
use freightcast_core::FreightError;
use freightcast_geo::CityTable;
use freightcast_model::{EngineSettings, PredictionEngine};
use freightcast_store::{MemoryRecordStore, RecordStore};
use proptest::prelude::*;
use std::sync::Arc;

/// Kilometers per degree of longitude on the equator (mean earth radius)
const KM_PER_DEGREE: f64 = 111.195_08;

fn equator(name: &str, km: f64, has_history: bool) -> CityEntry {
    CityEntry::new(name, 0.0, km / KM_PER_DEGREE, has_history)
}

fn test_cities() -> CityTable {
    CityTable::new(vec![
        CityEntry::new("O", 0.0, 0.0, false),
        CityEntry::new("D", 0.0, 1.0, false),
        equator("C100", 100.0, true),
        equator("C200", 200.0, true),
        equator("C300", 300.0, true),
        equator("E", 80.0, false),
        equator("Far", 2500.0, false),
    ])
    .unwrap()
}

fn truck_history() -> Vec<HistoricalQuote> {
    vec![
        HistoricalQuote::new("Warehouse C100", 1000.0, "truck"),
        HistoricalQuote::new("C200 north gate", 1800.0, "truck"),
        HistoricalQuote::new("C300", 2600.0, "truck"),
    ]
}

fn clock() -> Arc<FixedClock> {
    let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    Arc::new(FixedClock::at(date, 12, 0, 0).unwrap())
}

fn engine(history: Vec<HistoricalQuote>) -> PredictionEngine<MemoryRecordStore> {
    PredictionEngine::new(
        Arc::new(test_cities()),
        Arc::new(history),
        MemoryRecordStore::with_clock(clock()),
        EngineSettings {
            default_origin: "O".to_string(),
            ..Default::default()
        },
    )
}

#[test]
fn test_truck_line_interpolates() {
    let engine = engine(truck_history());
    let result = engine.predict("O", "D", "truck").unwrap();

    let distance = engine.cities().distance_km("O", "D").unwrap();
    let expected = 8.0 * distance + 200.0;

    assert_eq!(result.vehicle_type, "truck");
    assert_eq!(result.distance_km, 111.0);
    assert!((result.price - expected).abs() < 0.5, "price {} vs {}", result.price, expected);
    assert!(!result.has_history);
    assert!(result.is_prediction);
}

#[test]
fn test_history_flag_comes_from_reference_table() {
    let engine = engine(truck_history());
    let result = engine.predict("O", "C200", "truck").unwrap();
    assert!(result.has_history);
    assert!(!result.is_prediction);
    assert!((result.price - 1800.0).abs() < 0.5);
}

#[test]
fn test_unknown_vehicle_matches_general() {
    let mut history = truck_history();
    history.push(HistoricalQuote::new("C100", 700.0, "van"));
    let engine = engine(history);

    let fallback = engine.predict("O", "D", "reefer").unwrap();
    let general = engine.predict("O", "D", GENERAL_MODEL).unwrap();
    let thin = engine.predict("O", "D", "van").unwrap();

    assert_eq!(fallback, general);
    assert_eq!(thin, general);
    assert_eq!(fallback.vehicle_type, GENERAL_MODEL);
}

#[test]
fn test_negative_fit_is_floored() {
    // Steep line crossing zero well above 0 km
    let history = vec![
        HistoricalQuote::new("C100", 100.0, "truck"),
        HistoricalQuote::new("C200", 2100.0, "truck"),
        HistoricalQuote::new("C300", 4100.0, "truck"),
    ];
    let engine = engine(history);
    let result = engine.predict("O", "E", "truck").unwrap();
    assert_eq!(result.price, 0.0);
}

#[test]
fn test_today_records_weigh_three_times() {
    let history = vec![
        HistoricalQuote::new("E", 200.0, "van"),
        HistoricalQuote::new("E", 200.0, "van"),
        HistoricalQuote::new("E", 200.0, "van"),
    ];
    let engine = engine(history);

    let before = engine.predict("O", "E", "van").unwrap();
    assert!((before.price - 200.0).abs() < 1e-6);

    for _ in 0..3 {
        engine.store().add_record(NewRecord::new("O", "E", "van", 500.0)).unwrap();
    }

    // (3 * 200 + 9 * 500) / 12
    let after = engine.predict("O", "E", "van").unwrap();
    assert_eq!(after.vehicle_type, "van");
    assert!((after.price - 425.0).abs() < 1e-6, "got {}", after.price);
}

#[test]
fn test_today_records_alone_train_a_model() {
    let engine = engine(Vec::new());
    engine.store().add_record(NewRecord::new("O", "E", "van", 500.0)).unwrap();

    let result = engine.predict("O", "E", "van").unwrap();
    assert_eq!(result.vehicle_type, "van");
    assert_eq!(result.price, 500.0);
}

#[test]
fn test_records_for_other_origins_are_ignored() {
    let engine = engine(Vec::new());
    engine.store().add_record(NewRecord::new("D", "E", "van", 500.0)).unwrap();

    let err = engine.predict("O", "E", "van").unwrap_err();
    assert!(matches!(err, FreightError::NoTrainableData { ref origin } if origin == "O"));
}

#[test]
fn test_record_edits_take_effect_on_next_prediction() {
    let engine = engine(Vec::new());
    let record = engine.store().add_record(NewRecord::new("O", "E", "van", 500.0)).unwrap();
    assert_eq!(engine.predict("O", "E", "van").unwrap().price, 500.0);

    engine
        .store()
        .update_record(record.id, RecordPatch { price: Some(650.0), ..Default::default() })
        .unwrap();
    assert_eq!(engine.predict("O", "E", "van").unwrap().price, 650.0);

    engine.store().delete_record(record.id).unwrap();
    assert!(matches!(
        engine.predict("O", "E", "van"),
        Err(FreightError::NoTrainableData { .. })
    ));
}

#[test]
fn test_stale_records_do_not_train() {
    let stale = TodayRecord::create(
        1,
        NewRecord::new("O", "E", "van", 999.0),
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap().and_hms_opt(8, 0, 0).unwrap(),
    );
    let store = MemoryRecordStore::with_clock(clock()).with_records(vec![stale]);
    let engine = PredictionEngine::new(
        Arc::new(test_cities()),
        Arc::new(truck_history()),
        store,
        EngineSettings::default(),
    );

    let result = engine.predict("O", "E", "van").unwrap();
    assert_eq!(result.vehicle_type, GENERAL_MODEL);
}

#[test]
fn test_unknown_origin() {
    let engine = engine(truck_history());
    assert!(matches!(
        engine.predict("Nowhere", "D", "truck"),
        Err(FreightError::DistanceUnavailable { .. })
    ));
}

#[test]
fn test_model_summaries() {
    let engine = engine(truck_history());
    let summaries = engine.model_summaries("O").unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].key, "truck");
    assert_eq!(summaries[1].key, GENERAL_MODEL);
    assert!((summaries[0].intercept - 1800.0).abs() < 1e-6);
}

proptest! {
    #[test]
    fn predictions_are_never_negative(
        prices in proptest::collection::vec(1.0f64..10_000.0, 3),
        destination in prop::sample::select(vec!["D", "E", "C100", "C300", "Far"]),
    ) {
        let history = vec![
            HistoricalQuote::new("C100", prices[0], "truck"),
            HistoricalQuote::new("C200", prices[1], "truck"),
            HistoricalQuote::new("C300", prices[2], "truck"),
        ];
        let engine = engine(history);
        let result = engine.predict("O", destination, "truck").unwrap();
        prop_assert!(result.price >= 0.0);
    }
}

#[test]
fn test_stats_date_matches_store_day() {
    let engine = engine(truck_history());
    engine
        .store()
        .add_record(NewRecord::new("O", "C100", "truck", 900.0))
        .unwrap();

    let stats = engine.stats().unwrap();
    assert_eq!(stats.date, NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
    assert_eq!(stats.date, engine.store().today());
    assert_eq!(stats.today_records, 1);
}
