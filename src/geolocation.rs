use dotenv::dotenv;
use std::env;
use tracing::debug;

use crate::models::common::Coordinate;

/// One-shot device position query. Failure is silent: the caller keeps its
/// default map center.
#[cfg_attr(test, mockall::automock)]
pub trait LocationSource {
    async fn current_position(&self) -> Option<Coordinate>;
}

/// Position source backed by environment variables, standing in for the
/// platform geolocation query a browser would issue.
pub struct EnvLocationSource;

impl LocationSource for EnvLocationSource {
    async fn current_position(&self) -> Option<Coordinate> {
        dotenv().ok();

        let latitude = env::var("ECOLETA_DEVICE_LAT").ok()?.parse::<f64>().ok()?;
        let longitude = env::var("ECOLETA_DEVICE_LNG").ok()?.parse::<f64>().ok()?;

        debug!("Device position resolved to ({}, {})", latitude, longitude);
        Some(Coordinate::new(latitude, longitude))
    }
}
