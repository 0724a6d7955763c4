use httpmock::prelude::*;
use lot_search::{CliConfig, ListingPipeline, LocalStorage, SearchEngine, VehicleRequest};
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"[
    {"id": "a1", "location_id": "loc-a", "length": 20, "width": 10, "price_in_cents": 1000},
    {"id": "a2", "location_id": "loc-a", "length": 25, "width": 10, "price_in_cents": 1500},
    {"id": "b1", "location_id": "loc-b", "length": 50, "width": 20, "price_in_cents": 4000},
    {"id": "c1", "location_id": "loc-c", "length": 10, "width": 10, "price_in_cents": 500}
]"#;

fn config(listings: String, output_path: String) -> CliConfig {
    CliConfig {
        listings,
        vehicle: vec![],
        request: None,
        output_path,
        format: "json".to_string(),
        config: None,
        verbose: false,
        monitor: false,
    }
}

fn demand(pairs: &[(u32, u32)]) -> Vec<VehicleRequest> {
    pairs
        .iter()
        .map(|&(length, quantity)| VehicleRequest { length, quantity })
        .collect()
}

#[tokio::test]
async fn test_end_to_end_search_from_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let listings_path = temp_dir.path().join("listings.json");
    std::fs::write(&listings_path, CATALOG_JSON).unwrap();
    let output_path = temp_dir.path().join("output");

    let config = config(
        listings_path.to_str().unwrap().to_string(),
        output_path.to_str().unwrap().to_string(),
    );

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ListingPipeline::new(storage, config);
    let engine = SearchEngine::new(pipeline);

    let report = engine.run(&demand(&[(10, 1)])).await.unwrap();

    // every location fits a single 10ft vehicle; cheapest first
    assert_eq!(report.matches.len(), 3);
    assert_eq!(report.matches[0].location_id, "loc-c");
    assert_eq!(report.matches[0].listing_ids, vec!["c1"]);
    assert_eq!(report.matches[0].total_price_in_cents, 500);
    assert_eq!(report.matches[1].location_id, "loc-a");
    assert_eq!(report.matches[2].location_id, "loc-b");

    // the published file matches what the engine returned
    let results_file = output_path.join("results.json");
    assert!(results_file.exists());
    let written: Vec<lot_search::LocationMatch> =
        serde_json::from_slice(&std::fs::read(&results_file).unwrap()).unwrap();
    assert_eq!(written, report.matches);
}

#[tokio::test]
async fn test_http_catalog_gives_same_results_as_file() {
    let temp_dir = TempDir::new().unwrap();
    let listings_path = temp_dir.path().join("listings.json");
    std::fs::write(&listings_path, CATALOG_JSON).unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/listings");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(CATALOG_JSON);
    });

    let file_output = temp_dir.path().join("file_output");
    let http_output = temp_dir.path().join("http_output");

    let file_engine = SearchEngine::new(ListingPipeline::new(
        LocalStorage::new(".".to_string()),
        config(
            listings_path.to_str().unwrap().to_string(),
            file_output.to_str().unwrap().to_string(),
        ),
    ));
    let http_engine = SearchEngine::new(ListingPipeline::new(
        LocalStorage::new(".".to_string()),
        config(
            server.url("/listings"),
            http_output.to_str().unwrap().to_string(),
        ),
    ));

    let vehicles = demand(&[(20, 1), (25, 1)]);
    let from_file = file_engine.run(&vehicles).await.unwrap();
    let from_http = http_engine.run(&vehicles).await.unwrap();

    api_mock.assert();
    assert_eq!(from_file.matches, from_http.matches);

    let file_bytes = std::fs::read(file_output.join("results.json")).unwrap();
    let http_bytes = std::fs::read(http_output.join("results.json")).unwrap();
    assert_eq!(file_bytes, http_bytes);
}

#[tokio::test]
async fn test_csv_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let listings_path = temp_dir.path().join("listings.json");
    std::fs::write(&listings_path, CATALOG_JSON).unwrap();
    let output_path = temp_dir.path().join("output");

    let mut config = config(
        listings_path.to_str().unwrap().to_string(),
        output_path.to_str().unwrap().to_string(),
    );
    config.format = "csv".to_string();

    let engine = SearchEngine::new(ListingPipeline::new(LocalStorage::new(".".to_string()), config));
    let report = engine.run(&demand(&[(10, 1)])).await.unwrap();

    assert!(report.output_path.ends_with("results.csv"));
    let text = std::fs::read_to_string(output_path.join("results.csv")).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "location_id,listing_ids,total_price_in_cents"
    );
    assert_eq!(lines.next().unwrap(), "loc-c,c1,500");
}

#[tokio::test]
async fn test_csv_catalog_ingestion() {
    let temp_dir = TempDir::new().unwrap();
    let listings_path = temp_dir.path().join("listings.csv");
    std::fs::write(
        &listings_path,
        "id,location_id,length,width,price_in_cents\n\
         a1,loc-a,20,10,1000\n\
         c1,loc-c,10,10,500\n",
    )
    .unwrap();
    let output_path = temp_dir.path().join("output");

    let config = config(
        listings_path.to_str().unwrap().to_string(),
        output_path.to_str().unwrap().to_string(),
    );
    let engine = SearchEngine::new(ListingPipeline::new(LocalStorage::new(".".to_string()), config));

    let report = engine.run(&demand(&[(10, 1)])).await.unwrap();
    assert_eq!(report.matches.len(), 2);
    assert_eq!(report.matches[0].location_id, "loc-c");
}

#[tokio::test]
async fn test_malformed_catalog_is_rejected_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let listings_path = temp_dir.path().join("listings.json");
    std::fs::write(
        &listings_path,
        r#"[{"id": "bad", "location_id": "loc-x", "length": 0, "width": 10, "price_in_cents": 100}]"#,
    )
    .unwrap();
    let output_path = temp_dir.path().join("output");

    let config = config(
        listings_path.to_str().unwrap().to_string(),
        output_path.to_str().unwrap().to_string(),
    );
    let engine = SearchEngine::new(ListingPipeline::new(LocalStorage::new(".".to_string()), config));

    let result = engine.run(&demand(&[(10, 1)])).await;
    assert!(matches!(
        result,
        Err(lot_search::SearchError::CatalogError { .. })
    ));
    assert!(!output_path.join("results.json").exists());
}
