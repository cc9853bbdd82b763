//! Telemetry initialization and configuration

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Console output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn env_filter() -> Result<EnvFilter, Box<dyn std::error::Error>> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new("info")?),
    }
}

/// Initialize basic telemetry with console logging to stderr
///
/// Repeated calls after a successful one are no-ops. A failed call leaves
/// telemetry uninitialized, so later calls try again.
///
/// # Example
/// ```
/// use integral_telemetry::init_telemetry;
/// init_telemetry("integral-dashboard").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    init_telemetry_with_format(service_name, LogFormat::Pretty)
}

/// Initialize console logging in the given format.
pub fn init_telemetry_with_format(
    service_name: &str,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if INITIALIZED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let registry = tracing_subscriber::registry().with(env_filter()?);
    match format {
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()?,
    }
    INITIALIZED.store(true, Ordering::SeqCst);

    tracing::info!(service.name = service_name, log.format = ?format, "Telemetry initialized");
    Ok(())
}

/// Initialize telemetry with OpenTelemetry OTLP export
///
/// Spans are exported to an OTLP collector in addition to console logging.
/// Must be called from within a Tokio runtime.
///
/// # Example
/// ```no_run
/// use integral_telemetry::init_with_otlp;
/// # #[tokio::main]
/// # async fn main() {
/// init_with_otlp("integral-dashboard", "http://localhost:4317")
///     .expect("Failed to initialize telemetry");
/// # }
/// ```
pub fn init_with_otlp(
    service_name: &str,
    endpoint: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    use opentelemetry_otlp::WithExportConfig;
    use tracing_opentelemetry::OpenTelemetryLayer;

    if INITIALIZED.load(Ordering::SeqCst) {
        return Ok(());
    }

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_endpoint(endpoint))
        .with_trace_config(opentelemetry_sdk::trace::config().with_resource(
            opentelemetry_sdk::Resource::new(vec![opentelemetry::KeyValue::new(
                "service.name",
                service_name.to_string(),
            )]),
        ))
        .install_batch(opentelemetry_sdk::runtime::Tokio)?;

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()?;
    INITIALIZED.store(true, Ordering::SeqCst);

    tracing::info!(
        service.name = service_name,
        otlp.endpoint = endpoint,
        "Telemetry initialized with OpenTelemetry"
    );

    Ok(())
}

/// Shutdown telemetry and flush any pending spans
///
/// Should be called before application exit to ensure all telemetry data is sent.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
