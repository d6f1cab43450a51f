//! Ecoleta Registration Client
//!
//! This library drives the Ecoleta collection point registration workflow:
//! it loads the reference data the form depends on (the collectible item
//! catalog from the Ecoleta backend, state and city lists from the IBGE
//! localities service, a one-shot device position), tracks the form state
//! through user interaction events, and submits the composed record to the
//! backend.
//!
//! # Modules
//!
//! - `client`: EcoletaClient for the backend API
//! - `geography`: IbgeClient for the IBGE localities service
//! - `geolocation`: one-shot device position source
//! - `services`: form state and the session event loop
//! - `views`: the success screen

pub mod client;
pub mod geography;
pub mod geolocation;
pub mod models;
pub mod services;
pub mod views;

#[cfg(test)]
mod client_mock;
#[cfg(test)]
mod client_test;

// Re-export the main types for ease of use
pub use client::{ApiError, CollectApi, EcoletaClient};
pub use geography::{GeographyApi, IbgeClient};
pub use geolocation::{EnvLocationSource, LocationSource};
pub use services::form::{CityFetch, PointForm};
pub use services::session::{FormEvent, RegistrationSession, Route};
