//! GridHub API Library
//!
//! Backend for the GridHub renewable-microgrid crowdfunding platform.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐    │
//! │  │ Routes  │  │Services │  │   DB    │  │  Types  │    │
//! │  └────┬────┘  └────┬────┘  └────┬────┘  └────┬────┘    │
//! │       │            │            │            │          │
//! │       └────────────┴────────────┴────────────┘          │
//! └─────────────────────────┬────────────────────────────────┘
//!                           │
//!                  ┌────────┴────────┐
//!                  ▼                 ▼
//!           ┌────────────┐   ┌──────────────────┐
//!           │ PostgreSQL │   │ ViaCEP / payment │
//!           └────────────┘   │ / prediction     │
//!                            └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: environment-driven settings
//! - `error`: error types and HTTP mapping
//! - `routes`: HTTP endpoint handlers (one module per resource)
//! - `services`: external collaborators and password hashing
//! - `db`: PostgreSQL pool, models, generic repository
//! - `types`: the response envelope

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::ApiError;
pub use types::ApiResponse;

use db::{Investment, Microgrid, Report, Repository, Space, User};
use services::{AddressLookup, EnergyPredictor, PaymentGateway};

/// Application-wide state.
///
/// Handlers own their repositories through the trait object, so unit tests
/// swap in the in-memory mock without a running database.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub users: Arc<dyn Repository<User>>,
    pub spaces: Arc<dyn Repository<Space>>,
    pub microgrids: Arc<dyn Repository<Microgrid>>,
    pub investments: Arc<dyn Repository<Investment>>,
    pub reports: Arc<dyn Repository<Report>>,
    pub address_lookup: Arc<AddressLookup>,
    pub predictor: Arc<EnergyPredictor>,
    pub payments: Arc<PaymentGateway>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the production state: one Postgres-backed repository per entity
    /// plus the external-service clients, all driven by `config`.
    pub fn new(db: Database, config: Config) -> Self {
        let db = Arc::new(db);
        Self {
            users: Arc::new(db.repository::<User>()),
            spaces: Arc::new(db.repository::<Space>()),
            microgrids: Arc::new(db.repository::<Microgrid>()),
            investments: Arc::new(db.repository::<Investment>()),
            reports: Arc::new(db.repository::<Report>()),
            address_lookup: Arc::new(AddressLookup::new(&config.viacep_url)),
            predictor: Arc::new(EnergyPredictor::new(&config.prediction_url)),
            payments: Arc::new(PaymentGateway::new(
                &config.payment_api_url,
                config.payment_secret_key.clone(),
            )),
            config: Arc::new(config),
            db,
        }
    }
}
