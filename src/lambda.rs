#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use lot_search::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use lot_search::utils::logger;
#[cfg(feature = "lambda")]
use lot_search::{
    ListingPipeline, LocalStorage, LocationMatch, SearchEngine, SearchError, VehicleRequest,
};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "lambda")]
#[derive(Debug, Deserialize)]
pub struct Request {
    pub vehicles: Vec<VehicleRequest>,
}

/// Either the ranked result list or an error object, exactly the two body
/// shapes the HTTP service exposes.
#[cfg(feature = "lambda")]
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Matches(Vec<LocationMatch>),
    Error { error: String },
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    tracing::info!(
        "Handling search request with {} demand lines",
        event.payload.vehicles.len()
    );

    // 創建配置、存儲和管道
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ListingPipeline::new(storage, config);

    // 運行搜索
    let engine = SearchEngine::new(pipeline);
    match engine.run(&event.payload.vehicles).await {
        Ok(report) => Ok(Response::Matches(report.matches)),
        // 超出車輛上限不是故障，回傳服務層的錯誤物件
        Err(e @ SearchError::TooManyVehicles { .. }) => Ok(Response::Error {
            error: e.to_string(),
        }),
        Err(e) => Err(Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
    }
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();
    run(service_fn(function_handler)).await
}
