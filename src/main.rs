//! GridHub API Server
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Client (Frontend)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Axum Web Server                         │
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                      Routes Layer                        ││
//! │  │  /health  /api/users  /api/spaces  /api/microgrids      ││
//! │  │  /api/investments  /api/reports  /api/cep               ││
//! │  │  /api/energy  /api/payments                             ││
//! │  └─────────────────────────────────────────────────────────┘│
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                    Services Layer                        ││
//! │  │  AddressLookup   EnergyPredictor   PaymentGateway       ││
//! │  └─────────────────────────────────────────────────────────┘│
//! │  ┌─────────────────────────────────────────────────────────┐│
//! │  │                     Data Layer                           ││
//! │  │  Generic PostgreSQL repository (one per entity)         ││
//! │  └─────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │         PostgreSQL   ·   ViaCEP   ·   payment provider       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridhub_api::{routes, AppState, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG=debug,sqlx=warn style level control
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridhub_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GridHub API server");

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    db.run_migrations().await?;
    tracing::info!("Migrations completed");

    let port = config.port;
    let state = AppState::new(db, config);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router.
///
/// # Route Structure
///
/// ```text
/// GET    /health                             - server + dependency status
///
/// GET    /api/users/:id      GET    /api/users
/// POST   /api/users          PUT    /api/users/:id
/// DELETE /api/users/:id
///   (same five verbs for /api/spaces, /api/microgrids,
///    /api/investments, /api/reports)
///
/// GET    /api/cep/:cep                       - address lookup
/// POST   /api/energy/predict                 - generation prediction
/// POST   /api/payments/create-payment-intent - payment handle
/// ```
fn create_router(state: AppState) -> Router {
    // CORS: locked to configured origins in production, open in development.
    let cors = if state.config.is_production() {
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "https://gridhub.example.com".to_string());
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // Users
        .route(
            "/api/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/api/users/:id",
            get(routes::users::get_user)
                .put(routes::users::update_user)
                .delete(routes::users::delete_user),
        )
        // Spaces
        .route(
            "/api/spaces",
            get(routes::spaces::list_spaces).post(routes::spaces::create_space),
        )
        .route(
            "/api/spaces/:id",
            get(routes::spaces::get_space)
                .put(routes::spaces::update_space)
                .delete(routes::spaces::delete_space),
        )
        // Microgrids
        .route(
            "/api/microgrids",
            get(routes::microgrids::list_microgrids).post(routes::microgrids::create_microgrid),
        )
        .route(
            "/api/microgrids/:id",
            get(routes::microgrids::get_microgrid)
                .put(routes::microgrids::update_microgrid)
                .delete(routes::microgrids::delete_microgrid),
        )
        // Investments
        .route(
            "/api/investments",
            get(routes::investments::list_investments).post(routes::investments::create_investment),
        )
        .route(
            "/api/investments/:id",
            get(routes::investments::get_investment)
                .put(routes::investments::update_investment)
                .delete(routes::investments::delete_investment),
        )
        // Reports
        .route(
            "/api/reports",
            get(routes::reports::list_reports).post(routes::reports::create_report),
        )
        .route(
            "/api/reports/:id",
            get(routes::reports::get_report)
                .put(routes::reports::update_report)
                .delete(routes::reports::delete_report),
        )
        // External collaborators
        .route("/api/cep/:cep", get(routes::address::lookup_cep))
        .route("/api/energy/predict", post(routes::prediction::predict))
        .route(
            "/api/payments/create-payment-intent",
            post(routes::payments::create_payment_intent),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State injection
        .with_state(state)
}
