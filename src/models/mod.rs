pub mod electricity;

pub use electricity::{average_power, InstantReading, IntervalDescriptor, IntervalSample, PowerDisplay};
