pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use config::{cli::LocalStorage, file_config::FileConfig};
pub use core::{
    catalog::Catalog,
    engine::{SearchEngine, SearchReport, MAX_VEHICLES},
    pipeline::ListingPipeline,
};
pub use domain::model::{Listing, LocationMatch, VehicleRequest};
pub use utils::error::{Result, SearchError};
