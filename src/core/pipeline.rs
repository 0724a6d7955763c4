use crate::core::catalog::Catalog;
use crate::core::search;
use crate::domain::model::LocationMatch;
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, SearchError};
use reqwest::Client;

pub struct ListingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ListingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    fn source_is_remote(&self) -> bool {
        let source = self.config.listings_source();
        source.starts_with("http://") || source.starts_with("https://")
    }

    async fn fetch_remote(&self) -> Result<Catalog> {
        let source = self.config.listings_source();
        tracing::debug!("Fetching catalog from: {}", source);
        let response = self.client.get(source).send().await?;

        tracing::debug!("Catalog response status: {}", response.status());
        if !response.status().is_success() {
            return Err(SearchError::CatalogError {
                message: format!("Catalog endpoint returned {}", response.status()),
            });
        }

        let body = response.bytes().await?;
        Catalog::from_json_slice(&body)
    }

    async fn fetch_local(&self) -> Result<Catalog> {
        let source = self.config.listings_source();
        tracing::debug!("Reading catalog from: {}", source);
        let data = self.storage.read_file(source).await?;

        if source.ends_with(".csv") {
            Catalog::from_csv_slice(&data)
        } else {
            Catalog::from_json_slice(&data)
        }
    }

    fn render_csv(matches: &[LocationMatch]) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["location_id", "listing_ids", "total_price_in_cents"])?;
        for m in matches {
            let listing_ids = m.listing_ids.join(";");
            let price = m.total_price_in_cents.to_string();
            writer.write_record([m.location_id.as_str(), listing_ids.as_str(), price.as_str()])?;
        }
        writer
            .into_inner()
            .map_err(|e| SearchError::CatalogError {
                message: format!("CSV output buffer error: {}", e),
            })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ListingPipeline<S, C> {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let catalog = if self.source_is_remote() {
            self.fetch_remote().await?
        } else {
            self.fetch_local().await?
        };

        tracing::debug!(
            "Loaded {} listings across {} locations",
            catalog.listing_count(),
            catalog.location_count()
        );
        Ok(catalog)
    }

    async fn rank(&self, catalog: &Catalog, vehicles: &[u32]) -> Result<Vec<LocationMatch>> {
        Ok(search::rank_locations(vehicles, catalog))
    }

    async fn publish(&self, matches: &[LocationMatch]) -> Result<String> {
        let (filename, data) = match self.config.output_format() {
            "csv" => ("results.csv", Self::render_csv(matches)?),
            _ => ("results.json", serde_json::to_vec_pretty(matches)?),
        };

        let target = format!("{}/{}", self.config.output_path(), filename);
        tracing::debug!("Writing {} results to {}", matches.len(), target);
        self.storage.write_file(&target, &data).await?;

        Ok(target)
    }
}
