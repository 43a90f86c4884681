mod dashboard;
mod power_card;
mod usage_graph;

pub use dashboard::Dashboard;
