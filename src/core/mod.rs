pub mod capacity;
pub mod catalog;
pub mod engine;
pub mod fit;
pub mod pipeline;
pub mod search;

pub use crate::domain::model::{Listing, LocationMatch, VehicleRequest};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
