//! Services Module
//!
//! Thin clients over the external collaborators plus the password hashing
//! capability. Nothing here holds business rules; handlers validate, these
//! forward.
//!
//! # Services
//! - `AddressLookup`: CEP to address resolution (ViaCEP)
//! - `EnergyPredictor`: pre-trained generation model served over HTTP
//! - `PaymentGateway`: payment-intent creation
//! - `password`: one-way hash / verify

mod address_lookup;
mod payment;
mod prediction;

pub mod password;

pub use address_lookup::{Address, AddressLookup};
pub use payment::{PaymentGateway, PaymentIntent};
pub use prediction::{EnergyPredictor, PredictionInput, PredictionOutput};
