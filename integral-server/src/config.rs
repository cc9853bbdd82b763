use integral_agent::Pipeline;
use std::time::Duration;

/// Security configuration for the dashboard server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 64KB)
    pub max_body_size: usize,
    /// Request timeout (default: 10 minutes; a full run makes five model calls)
    pub request_timeout: Duration,
    /// Include internal error details in responses (default: false)
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 64 * 1024,
            request_timeout: Duration::from_secs(600),
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Permissive CORS and detailed errors.
    pub fn development() -> Self {
        Self { expose_error_details: true, ..Self::default() }
    }

    /// Only the given origins may call the API.
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins, ..Self::default() }
    }
}

/// Configuration for the dashboard server.
#[derive(Clone)]
pub struct ServerConfig {
    pub pipeline: Pipeline,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline, security: SecurityConfig::default() }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.security.expose_error_details = expose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_agent::PipelineConfig;
    use integral_dataset::EmbeddedDatasets;
    use integral_model::ModelHandle;
    use std::sync::Arc;

    fn pipeline() -> Pipeline {
        Pipeline::new(
            ModelHandle::unconfigured("no key"),
            Arc::new(EmbeddedDatasets::new()),
            PipelineConfig::default(),
        )
    }

    #[test]
    fn test_security_config_constructors() {
        let default = SecurityConfig::default();
        assert!(default.allowed_origins.is_empty());
        assert_eq!(default.request_timeout, Duration::from_secs(600));
        assert!(!default.expose_error_details);

        assert!(SecurityConfig::development().expose_error_details);

        let prod = SecurityConfig::production(vec!["https://ops.example.com".to_string()]);
        assert_eq!(prod.allowed_origins, vec!["https://ops.example.com"]);
        assert!(!prod.expose_error_details);
    }

    #[test]
    fn test_server_config_builder() {
        let config = ServerConfig::new(pipeline())
            .with_allowed_origins(vec!["http://localhost:5173".to_string()])
            .with_max_body_size(1024)
            .with_request_timeout(Duration::from_secs(5))
            .with_error_details(true);

        assert_eq!(config.security.allowed_origins.len(), 1);
        assert_eq!(config.security.max_body_size, 1024);
        assert_eq!(config.security.request_timeout, Duration::from_secs(5));
        assert!(config.security.expose_error_details);
    }
}
