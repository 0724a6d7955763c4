use crate::core::catalog::Catalog;
use crate::domain::model::LocationMatch;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Local path or http(s) endpoint of the listing catalog.
    fn listings_source(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Output format for published results, `json` or `csv`.
    fn output_format(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog>;
    async fn rank(&self, catalog: &Catalog, vehicles: &[u32]) -> Result<Vec<LocationMatch>>;
    async fn publish(&self, matches: &[LocationMatch]) -> Result<String>;
}
