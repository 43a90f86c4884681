use leptos::*;

use crate::models::PowerDisplay;

#[component]
pub fn PowerCard(display: ReadSignal<PowerDisplay>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Live Power"</h3>
            <div id="power" class="energy-value">
                {move || display.with(|d| d.power.clone())}
            </div>
            <div id="timestamp" class="subtitle">
                {move || display.with(|d| d.timestamp.clone())}
            </div>
        </div>
    }
}
