use chrono::NaiveDateTime;
use futures::future::{join_all, try_join_all};

use super::partition::partition_day;
use crate::api::{ApiError, ElectricitySource};
use crate::models::{IntervalDescriptor, IntervalSample};

/// Outcome of a fan-out where every interval is kept, failed or not
#[derive(Debug, Clone, Default)]
pub struct GatherReport {
    /// Samples for the intervals that succeeded, in slot order
    pub samples: Vec<IntervalSample>,
    /// Slot index and error for each failed interval
    pub failures: Vec<(usize, ApiError)>,
}

impl GatherReport {
    pub fn success_count(&self) -> usize {
        self.samples.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// All-or-nothing view of the report
    pub fn into_result(self) -> Result<Vec<IntervalSample>, ApiError> {
        match self.failures.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(self.samples),
        }
    }
}

/// Fetches the energy of every slot in the rolling 24-hour view
pub struct GraphBuilder<S> {
    source: S,
}

impl<S: ElectricitySource> GraphBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch all 96 intervals concurrently. Any single failure fails the batch.
    pub async fn build(&self, now: NaiveDateTime) -> Result<Vec<IntervalSample>, ApiError> {
        let intervals = partition_day(now);

        let requests = intervals.iter().map(|interval| self.fetch_sample(interval));

        try_join_all(requests).await
    }

    /// Fetch all 96 intervals concurrently and keep partial results
    pub async fn gather(&self, now: NaiveDateTime) -> GatherReport {
        let intervals = partition_day(now);

        let results = join_all(intervals.iter().map(|interval| self.fetch_sample(interval))).await;

        let mut report = GatherReport::default();
        for (interval, result) in intervals.iter().zip(results) {
            match result {
                Ok(sample) => report.samples.push(sample),
                Err(err) => report.failures.push((interval.slot, err)),
            }
        }
        report
    }

    async fn fetch_sample(&self, interval: &IntervalDescriptor) -> Result<IntervalSample, ApiError> {
        let energy = self
            .source
            .interval_energy(interval.start, interval.end)
            .await?;
        Ok(IntervalSample::from_energy(interval, energy))
    }
}
