//! Read-only views over reference data and configuration

use crate::output::OutputWriter;
use crate::output_types::{CityRow, ConfigRow};
use anyhow::Result;
use freightcast_core::config::LayeredConfig;
use freightcast_geo::CityTable;
use freightcast_model::engine_from_config;

pub fn vehicles(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let engine = engine_from_config(config)?;
    let types = engine.vehicle_types_known()?;

    if output.is_json() {
        return output.result(types);
    }

    output.section("Vehicle types");
    if types.is_empty() {
        output.info(format!("No training data for {}", engine.settings().default_origin));
    }
    for vehicle in &types {
        println!("  {}", vehicle);
    }
    Ok(())
}

pub fn cities(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let table = match &config.cities_path.value {
        Some(path) => CityTable::load_from_file(path)?,
        None => CityTable::builtin(),
    };
    let rows = CityRow::listing(&table, &config.default_origin.value);

    if !output.is_json() {
        output.section(format!("Cities ({})", rows.len()));
    }
    output.table(rows)
}

pub fn stats(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let engine = engine_from_config(config)?;
    let stats = engine.stats()?;

    if output.is_json() {
        return output.result(stats);
    }

    output.section("Freightcast statistics");
    output.kv("Date", stats.date);
    output.kv("Historical quotes", stats.historical_rows);
    output.kv("Records today", stats.today_records);
    output.kv("Vehicle types", stats.vehicle_types);
    output.kv("Cities", stats.city_count);
    Ok(())
}

pub fn config(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    if !output.is_json() {
        output.section("Configuration");
    }
    output.table(rows)
}
