//! Models command implementation

use crate::cli::ModelsArgs;
use crate::output::OutputWriter;
use crate::output_types::ModelRow;
use anyhow::Result;
use freightcast_core::config::LayeredConfig;
use freightcast_model::engine_from_config;

pub fn execute(args: ModelsArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let engine = engine_from_config(config)?;
    let origin = args.origin.unwrap_or_else(|| engine.settings().default_origin.clone());
    let summaries = engine.model_summaries(&origin)?;

    if output.is_json() {
        return output.result(summaries);
    }

    output.section(format!("Models for routes from {}", origin));
    output.table(summaries.iter().map(ModelRow::from).collect())
}
