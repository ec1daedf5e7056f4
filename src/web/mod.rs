pub mod pages;
pub mod routes;
pub mod view;

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::clients::HttpClient;
use crate::config::Settings;
use crate::error::Result;
use crate::services::{ApiService, VendorService};

use routes::{landing_handler, not_found_handler, vendors_handler};

pub struct AppState {
    pub vendors: VendorService,
}

impl AppState {
    pub fn new(vendors: VendorService) -> Arc<Self> {
        Arc::new(Self { vendors })
    }

    /// Wires the REST-backed source. Connection settings are checked per request.
    pub fn from_settings(settings: &Settings) -> Result<Arc<Self>> {
        let api = ApiService::new(HttpClient::new()?, settings.supabase.clone());
        Ok(Self::new(VendorService::new(Arc::new(api))))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing_handler))
        .route("/vendors", get(vendors_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(settings: Settings) -> Result<()> {
    info!("Initializing state...");
    let state = AppState::from_settings(&settings)?;

    if let Err(e) = settings.supabase.connection() {
        error!(error = %e, "Backend connection is incomplete; listing pages will fail");
    }

    let address = settings.bind_address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
