//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{AdminError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AdminError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

/// Build and run the server until it is stopped
pub async fn run_server(config: Config) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("API endpoints:");
    info!("   GET  /health");
    info!("   POST /account/login | /account/forgot-password | /account/reset-password");
    info!("   GET|POST /admin/roles, PUT|DELETE /admin/roles/{{id}}");
    info!("   GET|POST /admin/users, PUT|DELETE /admin/users/{{id}}");
    info!("   GET|PUT  /admin/users/{{id}}/roles");

    server.start().await
}
