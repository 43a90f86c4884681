pub mod client;
pub mod electricity;

pub use client::{ApiClient, ApiError};
pub use electricity::ElectricitySource;
