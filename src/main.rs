use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wodah_leads_api::config::Config;
use wodah_leads_api::handlers::{self, AppState};
use wodah_leads_api::store::SupabaseStore;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the lead store client if
/// credentials are present, and starts the Axum server with request tracing,
/// CORS, a body size limit, and per-IP rate limiting on the capture endpoint.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wodah_leads_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize lead store client. A missing configuration is not fatal:
    // the validate endpoint answers 500 until credentials arrive, matching
    // how the landing pages are deployed before a backend is provisioned.
    let store = match (&config.supabase_url, &config.supabase_anon_key) {
        (Some(url), Some(key)) => match SupabaseStore::new(url.clone(), key.clone()) {
            Ok(store) => {
                tracing::info!("✓ Supabase lead store initialized: {}", url);
                Some(store)
            }
            Err(e) => {
                tracing::error!("Failed to initialize Supabase client: {}", e);
                None
            }
        },
        _ => {
            tracing::warn!("Supabase not configured; lead capture will return 500");
            None
        }
    };

    let app_state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        .route("/api/validate", post(handlers::validate_lead))
        .layer(
            ServiceBuilder::new()
                // Lead payloads are a couple hundred bytes; 16KB is generous
                .layer(RequestBodyLimitLayer::new(16 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check (bypasses rate limiting)
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
