use anyhow::Result;
use clap::Parser;
use integral_cli::{AppConfig, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let telemetry = &config.telemetry;
    let init = match &telemetry.otlp_endpoint {
        Some(endpoint) => integral_telemetry::init_with_otlp(&telemetry.service_name, endpoint),
        None => integral_telemetry::init_telemetry_with_format(
            &telemetry.service_name,
            telemetry.format,
        ),
    };
    if let Err(e) = init {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    let result = integral_cli::run(cli, config).await;
    integral_telemetry::shutdown_telemetry();
    result
}
