use crate::domain::model::{expand_vehicles, LocationMatch, VehicleRequest};
use crate::domain::ports::Pipeline;
use crate::utils::error::{Result, SearchError};
use crate::utils::monitor::SystemMonitor;

/// Admission limit: requests expanding to more vehicles than this are
/// rejected before any catalog access or search happens.
pub const MAX_VEHICLES: usize = 5;

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub matches: Vec<LocationMatch>,
    pub output_path: String,
}

pub struct SearchEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SearchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self, requests: &[VehicleRequest]) -> Result<SearchReport> {
        let vehicles = expand_vehicles(requests);

        if vehicles.len() > MAX_VEHICLES {
            return Err(SearchError::TooManyVehicles {
                count: vehicles.len(),
                limit: MAX_VEHICLES,
            });
        }

        if vehicles.is_empty() {
            tracing::info!("Empty demand, publishing empty result list");
            let output_path = self.pipeline.publish(&[]).await?;
            return Ok(SearchReport {
                matches: Vec::new(),
                output_path,
            });
        }

        tracing::info!("Searching placements for {} vehicles", vehicles.len());

        let catalog = self.pipeline.fetch_catalog().await?;
        tracing::info!(
            "Catalog loaded: {} listings across {} locations",
            catalog.listing_count(),
            catalog.location_count()
        );
        self.monitor.log_stats("Catalog");

        let matches = self.pipeline.rank(&catalog, &vehicles).await?;
        tracing::info!("{} locations can take the full demand", matches.len());
        self.monitor.log_stats("Search");

        let output_path = self.pipeline.publish(&matches).await?;
        self.monitor.log_stats("Publish");

        Ok(SearchReport {
            matches,
            output_path,
        })
    }
}
