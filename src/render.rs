use chrono::NaiveDateTime;
use leptos::*;

use crate::models::{IntervalSample, PowerDisplay};

/// Samples of one successful graph refresh, with the instant they were built for
#[derive(Debug, Clone, PartialEq)]
pub struct GraphFrame {
    pub samples: Vec<IntervalSample>,
    pub now: NaiveDateTime,
}

/// Surface the poller and the graph builder write their results to
pub trait RenderTarget {
    fn show_power(&self, display: PowerDisplay);

    /// Replace whatever graph is currently shown
    fn render_graph(&self, frame: GraphFrame);
}

/// Render target backed by Leptos signals
#[derive(Clone, Copy)]
pub struct SignalTarget {
    pub power: WriteSignal<PowerDisplay>,
    pub graph: WriteSignal<Option<GraphFrame>>,
}

impl RenderTarget for SignalTarget {
    fn show_power(&self, display: PowerDisplay) {
        self.power.set(display);
    }

    fn render_graph(&self, frame: GraphFrame) {
        self.graph.set(Some(frame));
    }
}
