use chrono::NaiveDateTime;

use super::client::{ApiClient, ApiError};
use crate::models::InstantReading;
use crate::timestamp::format_api_timestamp;

pub const INSTANT_PATH: &str = "api/electricity/now";

/// Where the poller and the graph builder read meter data from
#[allow(async_fn_in_trait)]
pub trait ElectricitySource {
    /// Latest power reading
    async fn instant_power(&self) -> Result<InstantReading, ApiError>;

    /// Energy in Wh consumed in `[start, end)`
    async fn interval_energy(&self, start: NaiveDateTime, end: NaiveDateTime)
        -> Result<f64, ApiError>;
}

/// Path of the range query for `[start, end)`
pub fn interval_path(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    format!(
        "api/electricity?from={}&to={}",
        format_api_timestamp(start),
        format_api_timestamp(end)
    )
}

impl ElectricitySource for ApiClient {
    async fn instant_power(&self) -> Result<InstantReading, ApiError> {
        self.get(INSTANT_PATH).await
    }

    async fn interval_energy(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<f64, ApiError> {
        self.get(&interval_path(&start, &end)).await
    }
}
