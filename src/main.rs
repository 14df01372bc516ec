use std::sync::Arc;

use calc_client::app::{App, Surface};
use calc_client::banner;
use calc_client::client::HttpServiceClient;
use calc_client::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        }
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    banner::print_banner(&config.api_base_url);

    let client = HttpServiceClient::new(reqwest::Client::new(), &config);
    let mut app = App::new(Arc::new(client), Surface::console());

    app.run_console().await
}
