//! The two flows of the page: instant power polling and the daily graph refresh

use chrono::NaiveDateTime;

use crate::api::ElectricitySource;
use crate::graph::GraphBuilder;
use crate::models::PowerDisplay;
use crate::render::{GraphFrame, RenderTarget};

/// Fetch the current power once and show it, or the error text on failure
pub async fn poll_power<S, T>(source: &S, target: &T)
where
    S: ElectricitySource,
    T: RenderTarget,
{
    let display = match source.instant_power().await {
        Ok(reading) => PowerDisplay::from_reading(&reading),
        Err(e) => {
            log::error!("Error fetching power: {}", e);
            PowerDisplay::error()
        }
    };
    target.show_power(display);
}

/// Rebuild the daily graph for `now`.
///
/// On failure nothing is rendered and the previous graph stays on screen.
/// Returns whether a new graph was rendered.
pub async fn refresh_graph<S, T>(builder: &GraphBuilder<S>, now: NaiveDateTime, target: &T) -> bool
where
    S: ElectricitySource,
    T: RenderTarget,
{
    match builder.build(now).await {
        Ok(samples) => {
            log::debug!("Rendering {} intervals", samples.len());
            target.render_graph(GraphFrame { samples, now });
            true
        }
        Err(e) => {
            log::error!("Error fetching interval data: {}", e);
            false
        }
    }
}
