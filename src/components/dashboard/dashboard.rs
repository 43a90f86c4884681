use leptos::*;

use super::power_card::PowerCard;
use super::usage_graph::UsageGraph;
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::models::PowerDisplay;
use crate::render::{GraphFrame, SignalTarget};

/// Dashboard page: live power plus the rolling 24-hour graph
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let client = ApiClient::from_config(&config);

    let (power, set_power) = create_signal(PowerDisplay::default());
    let (graph, set_graph) = create_signal(None::<GraphFrame>);
    let target = SignalTarget {
        power: set_power,
        graph: set_graph,
    };

    #[cfg(target_arch = "wasm32")]
    {
        use crate::graph::GraphBuilder;
        use crate::poller::{poll_power, refresh_graph};
        use gloo_timers::callback::Interval;
        use std::rc::Rc;
        use wasm_bindgen_futures::spawn_local;

        // Instant power: every tick starts a request, even if the previous
        // one is still in flight. Whichever finishes last is shown.
        let poll = {
            let client = client.clone();
            move || {
                let client = client.clone();
                spawn_local(async move { poll_power(&client, &target).await });
            }
        };
        poll();
        let power_interval = Interval::new(config.poll_interval_ms, poll);

        // Daily graph: once on mount, then periodically if configured
        let builder = Rc::new(GraphBuilder::new(client));
        let refresh = move || {
            let builder = Rc::clone(&builder);
            spawn_local(async move {
                let now = chrono::Local::now().naive_local();
                refresh_graph(&builder, now, &target).await;
            });
        };
        refresh();
        let graph_interval = config
            .graph_refresh_ms
            .map(|ms| Interval::new(ms, refresh));

        on_cleanup(move || {
            drop(power_interval);
            drop(graph_interval);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (client, target);

    view! {
        <div class="dashboard">
            <div class="dashboard-grid">
                <PowerCard display=power />
                <UsageGraph frame=graph />
            </div>
        </div>
    }
}
