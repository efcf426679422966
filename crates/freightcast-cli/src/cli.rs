use clap::{Args, Parser, Subcommand};
use freightcast_core::models::RecordId;
use std::path::PathBuf;

/// Freightcast - freight price prediction
#[derive(Parser, Debug)]
#[command(name = "freightcast")]
#[command(about = "Distance-based freight price prediction", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub paths: PathArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for configured data locations
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Same-day record file
    #[arg(long, global = true, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Historical quote file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub history: Option<PathBuf>,

    /// City table (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub cities: Option<PathBuf>,

    /// Default origin city
    #[arg(long, global = true, value_name = "CITY")]
    pub origin: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the price of a shipment from the default origin
    Predict(PredictArgs),

    /// Record a price quoted today
    Add(AddArgs),

    /// Change fields of a stored record
    Update(UpdateArgs),

    /// Delete a stored record
    Delete(DeleteArgs),

    /// List today's records
    Today,

    /// List vehicle types seen in training data
    Vehicles,

    /// List known cities
    Cities,

    /// Show the fitted models for an origin
    Models(ModelsArgs),

    /// Show data volume statistics
    Stats,

    /// Show effective configuration and where each value came from
    Config,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Destination city
    pub destination: String,

    /// Vehicle type (defaults to the general model)
    #[arg(long, short = 'v')]
    pub vehicle: Option<String>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    pub origin: String,
    pub destination: String,
    pub vehicle: String,
    pub price: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Record id
    pub id: RecordId,

    #[arg(long = "from", value_name = "CITY")]
    pub origin: Option<String>,

    #[arg(long = "to", value_name = "CITY")]
    pub destination: Option<String>,

    #[arg(long)]
    pub vehicle: Option<String>,

    #[arg(long)]
    pub price: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: RecordId,
}

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Origin to train for (defaults to the configured origin)
    #[arg(long = "from", value_name = "CITY")]
    pub origin: Option<String>,
}
