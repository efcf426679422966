//! Same-day record commands

use crate::cli::{AddArgs, DeleteArgs, UpdateArgs};
use crate::output::OutputWriter;
use crate::output_types::RecordRow;
use anyhow::{bail, Result};
use freightcast_core::config::LayeredConfig;
use freightcast_core::models::{NewRecord, RecordPatch, TodayRecord};
use freightcast_core::validation::parse_price;
use freightcast_store::{JsonRecordStore, RecordStore};

fn open_store(config: &LayeredConfig) -> JsonRecordStore {
    JsonRecordStore::new(config.records_path.value.clone())
}

pub fn add(args: AddArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let price = parse_price(&args.price)?;
    let draft = NewRecord::new(args.origin, args.destination, args.vehicle, price);

    let record = open_store(config).add_record(draft)?;
    report(output, format!("Added record #{}", record.id), record)
}

pub fn update(args: UpdateArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let patch = RecordPatch {
        origin_city: args.origin,
        destination_city: args.destination,
        vehicle_type: args.vehicle,
        price: args.price.as_deref().map(parse_price).transpose()?,
    };
    if patch.is_empty() {
        bail!("Nothing to update; pass at least one of --from, --to, --vehicle, --price");
    }

    let record = open_store(config).update_record(args.id, patch)?;
    report(output, format!("Updated record #{}", record.id), record)
}

pub fn delete(args: DeleteArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let record = open_store(config).delete_record(args.id)?;
    report(output, format!("Deleted record #{}", record.id), record)
}

pub fn today(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let records = open_store(config).list_today()?;

    if output.is_json() {
        return output.result(records);
    }

    output.section(format!("Today's records ({})", records.len()));
    output.table(records.iter().map(RecordRow::from).collect())
}

fn report(output: &OutputWriter, message: String, record: TodayRecord) -> Result<()> {
    if output.is_json() {
        return output.result(record);
    }
    output.success(message);
    output.table(vec![RecordRow::from(&record)])
}
