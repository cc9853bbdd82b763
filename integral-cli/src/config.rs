//! Layered application configuration.
//!
//! Defaults, then an optional TOML file, then environment variables. Command
//! line flags are applied by the caller on top.

use anyhow::{Context, Result};
use integral_agent::{Pipeline, PipelineConfig};
use integral_dataset::{DatasetSource, DirectoryDatasets, EmbeddedDatasets};
use integral_model::{ModelHandle, ModelSettings};
use integral_server::{SecurityConfig, ServerConfig};
use integral_telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "integral.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelSettings,
    pub pipeline: PipelineConfig,
    pub server: ServerSettings,
    pub data: DataSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub max_body_size: usize,
    pub expose_error_details: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        let security = SecurityConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            allowed_origins: security.allowed_origins,
            request_timeout_secs: security.request_timeout.as_secs(),
            max_body_size: security.max_body_size,
            expose_error_details: security.expose_error_details,
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn security(&self) -> SecurityConfig {
        SecurityConfig {
            allowed_origins: self.allowed_origins.clone(),
            max_body_size: self.max_body_size,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            expose_error_details: self.expose_error_details,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding `<quadrant>_<variant>.csv` files. Unset uses the
    /// datasets built into the binary.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    pub service_name: String,
    pub format: LogFormat,
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: "integral-dashboard".to_string(),
            format: LogFormat::default(),
            otlp_endpoint: None,
        }
    }
}

impl AppConfig {
    /// Reads `path`, or `integral.toml` in the working directory if it exists,
    /// then applies the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Overrides fields from environment variables looked up through `lookup`.
    /// Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("OPENAI_API_KEY") {
            self.model.api_key = Some(key);
        }
        if let Some(model) = var("INTEGRAL_MODEL") {
            self.model.model = model;
        }
        if let Some(base_url) = var("INTEGRAL_BASE_URL") {
            self.model.base_url = Some(base_url);
        }
        if let Some(temperature) = var("INTEGRAL_TEMPERATURE") {
            self.pipeline.temperature = temperature
                .trim()
                .parse()
                .with_context(|| format!("INTEGRAL_TEMPERATURE is not a number: {temperature}"))?;
        }
        if let Some(dir) = var("INTEGRAL_DATA_DIR") {
            self.data.dir = Some(PathBuf::from(dir));
        }
        if let Some(port) = var("INTEGRAL_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("INTEGRAL_PORT is not a valid port: {port}"))?;
        }
        if let Some(endpoint) = var("INTEGRAL_OTLP_ENDPOINT") {
            self.telemetry.otlp_endpoint = Some(endpoint);
        }
        Ok(())
    }

    pub fn datasets(&self) -> Arc<dyn DatasetSource> {
        match &self.data.dir {
            Some(dir) => Arc::new(DirectoryDatasets::new(dir)),
            None => Arc::new(EmbeddedDatasets::new()),
        }
    }

    /// A missing or placeholder key yields an unconfigured handle rather than
    /// an error, so the server can still start and report it.
    pub fn model_handle(&self) -> Result<ModelHandle> {
        Ok(ModelHandle::from_settings(&self.model)?)
    }

    pub fn pipeline(&self) -> Result<Pipeline> {
        Ok(Pipeline::new(self.model_handle()?, self.datasets(), self.pipeline.clone()))
    }

    pub fn server_config(&self) -> Result<ServerConfig> {
        Ok(ServerConfig::new(self.pipeline()?).with_security(self.server.security()))
    }
}
