use clap::Parser;
use lot_search::domain::ports::ConfigProvider;
use lot_search::utils::{logger, validation::Validate};
use lot_search::{
    CliConfig, FileConfig, ListingPipeline, LocalStorage, SearchEngine, SearchError, SearchReport,
    VehicleRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting lot-search CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 組裝車輛需求
    let demand = match cli.demand() {
        Ok(demand) => demand,
        Err(e) => {
            tracing::error!("❌ Failed to read vehicle demand: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // TOML 配置優先於命令行參數
    let outcome = match &cli.config {
        Some(config_path) => {
            let file_config = match FileConfig::from_file(config_path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file {}: {}", config_path, e);
                    eprintln!("❌ {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = file_config.validate() {
                tracing::error!("❌ Config file validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            monitor_enabled |= file_config.monitoring.enabled;
            run_search(file_config, &demand, monitor_enabled).await
        }
        None => run_search(cli.clone(), &demand, monitor_enabled).await,
    };

    match outcome {
        Ok(report) => {
            if report.matches.is_empty() {
                println!("✅ Search completed: no location can take the full demand");
            } else {
                println!(
                    "✅ Search completed: {} locations can take the demand",
                    report.matches.len()
                );
                for (rank, m) in report.matches.iter().enumerate() {
                    println!(
                        "  {}. {} — listings [{}] — {} cents",
                        rank + 1,
                        m.location_id,
                        m.listing_ids.join(", "),
                        m.total_price_in_cents
                    );
                }
            }
            println!("📁 Results saved to: {}", report.output_path);
        }
        Err(e) => {
            tracing::error!("❌ Search failed: {}", e);

            // 拒絕的請求以服務相同的錯誤物件輸出
            if let SearchError::TooManyVehicles { .. } = &e {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            }
            eprintln!("❌ {}", e);

            let exit_code = match &e {
                SearchError::TooManyVehicles { .. } => 2,
                SearchError::InvalidConfigValueError { .. }
                | SearchError::MissingConfigError { .. }
                | SearchError::TomlError(_) => 1,
                _ => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run_search<C: ConfigProvider + 'static>(
    config: C,
    demand: &[VehicleRequest],
    monitor_enabled: bool,
) -> lot_search::Result<SearchReport> {
    // 存儲以工作目錄為根，輸出路徑由配置決定
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ListingPipeline::new(storage, config);
    let engine = SearchEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run(demand).await
}
