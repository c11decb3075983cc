//! Проверка ключей n11: `cargo run -p n11_api --example check_connection`
//!
//! Ключи берутся из config.toml рядом с исполняемым файлом.

use n11_api::shared::config::load_config;
use n11_api::N11ApiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("n11.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reqwest=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = load_config()?;
    tracing::info!("n11 config: {:?}", config.n11);

    let mut client = N11ApiClient::from_config(&config.n11)?;
    let ok = client.check_connection().await?;
    println!("check_connection: {}", ok);
    println!("last_error: {}", client.last_error());

    if ok && std::env::args().any(|a| a == "--cities") {
        let response = client.get_cities().await?;
        match response.result.into_result() {
            Ok(cities) => {
                for city in cities {
                    println!("{:>6}  {}", city.city_id, city.city_name);
                }
            }
            Err(record) => println!("GetCities failed: {}", record),
        }
    }

    Ok(())
}
