use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::models::major_cities;
use crate::{Result, SkycastConfig, WeatherApiClient};

/// Full application router with the JSON API mounted under `/api`
pub fn app(config: &SkycastConfig, client: WeatherApiClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        client,
        default_city: config.dashboard.default_city.clone(),
        default_units: config.dashboard.units,
        cities: major_cities(),
    };

    // The map fans out to every city, so leave headroom over one provider call
    let request_timeout = Duration::from_secs(u64::from(config.provider.timeout_seconds) + 5);

    Router::new()
        .nest("/api", api::router(state))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: &SkycastConfig, client: WeatherApiClient) -> Result<()> {
    let app = app(config, client);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_app_mounts_api_under_prefix() {
        let config = SkycastConfig::default();
        let client = WeatherApiClient::with_base_url("test_api_key_123", "http://127.0.0.1:9").unwrap();
        let app = app(&config, client);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
