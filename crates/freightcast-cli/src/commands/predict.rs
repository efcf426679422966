//! Predict command implementation

use crate::cli::PredictArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use console::style;
use freightcast_core::config::LayeredConfig;
use freightcast_core::models::GENERAL_MODEL;
use freightcast_core::validation::validate_route;
use freightcast_model::engine_from_config;

pub fn execute(args: PredictArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let origin = config.default_origin.value.as_str();
    validate_route(origin, &args.destination)?;

    let engine = engine_from_config(config)?;
    let vehicle = args.vehicle.as_deref().unwrap_or(GENERAL_MODEL);
    let result = engine.predict(origin, &args.destination, vehicle)?;

    if output.is_json() {
        return output.result(result);
    }

    output.section(format!("{} → {}", result.origin, result.destination));
    output.kv("Distance", format!("{} km", result.distance_km));
    output.kv("Model", &result.vehicle_type);
    output.kv("Price", style(format!("{:.2}", result.price)).green().bold());

    if vehicle != GENERAL_MODEL && result.vehicle_type == GENERAL_MODEL {
        output.warning(format!(
            "Not enough data for vehicle type '{}'; used the general model",
            vehicle
        ));
    }
    if result.is_prediction {
        output.info(format!("No historical quotes for {}; price is extrapolated", result.destination));
    }

    Ok(())
}
