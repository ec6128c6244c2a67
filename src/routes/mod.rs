//! API Routes Module
//!
//! All HTTP endpoints, one module per resource.
//!
//! # Routes
//! - `/health` - deep health check (store + ViaCEP reachability)
//! - `/api/users` - user accounts
//! - `/api/spaces` - registered land/solar sites
//! - `/api/microgrids` - microgrid projects
//! - `/api/investments` - investment proposals
//! - `/api/reports` - performance reports
//! - `/api/cep/{cep}` - postal-code address lookup
//! - `/api/energy/predict` - generation prediction pass-through
//! - `/api/payments` - payment-intent creation

pub mod address;
pub mod health;
pub mod investments;
pub mod microgrids;
pub mod payments;
pub mod prediction;
pub mod reports;
pub mod spaces;
pub mod users;
