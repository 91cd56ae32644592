//! Web server for notetect.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{AuthConfig, ServerConfig};
use crate::Database;

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// CORS allowed origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(server_config: &ServerConfig, auth_config: &AuthConfig, db: Database) -> Self {
        let addr = format!("{}:{}", server_config.host, server_config.port)
            .parse()
            .expect("Invalid web server address");

        let app_state = AppState::new(
            db,
            &auth_config.jwt_secret,
            auth_config.session_expiry_days,
        );

        Self {
            addr,
            app_state: Arc::new(app_state),
            cors_origins: server_config.cors_origins.clone(),
        }
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(&self) -> axum::Router {
        create_router(self.app_state.clone(), &self.cors_origins)
            .merge(create_health_router())
    }

    /// Run the web server.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr, std::io::Error> {
        let router = self.build_router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthConfig, ServerConfig};

    fn test_configs() -> (ServerConfig, AuthConfig) {
        (
            ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec![],
            },
            AuthConfig {
                jwt_secret: "test-secret-key-for-testing-only".to_string(),
                session_expiry_days: 7,
            },
        )
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let (server_config, auth_config) = test_configs();
        let db = Database::open_in_memory().await.unwrap();

        let server = WebServer::new(&server_config, &auth_config, db);
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_web_server_binds() {
        let (server_config, auth_config) = test_configs();
        let db = Database::open_in_memory().await.unwrap();

        let server = WebServer::new(&server_config, &auth_config, db);
        let addr = server.run_with_addr().await.unwrap();
        assert_ne!(addr.port(), 0);
    }
}
