use anyhow::{Context, Result};
use log::info;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::routes::create_router;
use crate::api::handlers::AppState;
use crate::config::settings::AppConfig;
use crate::services::calibration::CalibrationService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| self.config.server.default_bind_address.to_string());
        let ip: IpAddr = bind_address
            .parse()
            .with_context(|| format!("Invalid BIND_ADDRESS: {}", bind_address))?;

        let state = Arc::new(AppState {
            calibration: CalibrationService::new(self.config.clone()),
        });

        let app = create_router(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

        let addr = SocketAddr::new(ip, self.port);
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
