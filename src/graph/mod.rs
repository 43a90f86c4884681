pub mod builder;
pub mod layout;
pub mod partition;
pub mod tooltip;

pub use builder::{GatherReport, GraphBuilder};
pub use layout::{layout_bars, tooltip_lines, total_energy, Bar, BarTone};
pub use partition::{partition_day, SLOT_COUNT};
pub use tooltip::{place_tooltip, Placement, Size};
