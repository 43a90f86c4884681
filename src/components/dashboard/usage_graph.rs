use leptos::*;

use crate::graph::{layout_bars, place_tooltip, tooltip_lines, total_energy, Placement, Size};
use crate::models::IntervalSample;
use crate::render::GraphFrame;

/// Used until the container has been laid out
const FALLBACK_SIZE: Size = Size {
    width: 960.0,
    height: 200.0,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct TooltipState {
    heading: String,
    body: String,
    visible: bool,
    placement: Placement,
}

/// Rolling 24-hour bar chart with hover tooltips
#[component]
pub fn UsageGraph(frame: ReadSignal<Option<GraphFrame>>) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let tooltip = create_node_ref::<html::Div>();
    let (tip, set_tip) = create_signal(TooltipState::default());

    let container_size = move || {
        container
            .get()
            .map(|el| Size {
                width: el.client_width() as f64,
                height: el.client_height() as f64,
            })
            .filter(|size| size.width > 0.0 && size.height > 0.0)
            .unwrap_or(FALLBACK_SIZE)
    };

    let show_tooltip = move |sample: IntervalSample, ev: ev::MouseEvent| {
        let (heading, body) = tooltip_lines(&sample);
        set_tip.update(|t| {
            t.heading = heading;
            t.body = body;
            t.visible = true;
        });

        // Measure after the new text is in place
        let tooltip_size = tooltip
            .get()
            .map(|el| Size {
                width: el.offset_width() as f64,
                height: el.offset_height() as f64,
            })
            .unwrap_or_default();
        let placement = place_tooltip(
            ev.page_x() as f64,
            ev.page_y() as f64,
            tooltip_size,
            viewport_size(),
        );
        set_tip.update(|t| t.placement = placement);
    };

    let hide_tooltip = move |_: ev::MouseEvent| {
        set_tip.update(|t| t.visible = false);
    };

    // Full rebuild whenever a new frame arrives
    let bars = move || {
        frame.get().map(|frame| {
            let size = container_size();
            let bars = layout_bars(&frame.samples, &frame.now, size.width, size.height);

            frame
                .samples
                .into_iter()
                .zip(bars)
                .map(|(sample, bar)| {
                    view! {
                        <div
                            class=bar.tone.class()
                            style:height=format!("{}px", bar.height)
                            style:width=format!("{}px", bar.width)
                            style:left=format!("{}px", bar.left)
                            on:mouseenter=move |ev| show_tooltip(sample, ev)
                            on:mouseleave=hide_tooltip
                        ></div>
                    }
                })
                .collect_view()
        })
    };

    let summary = move || {
        frame.with(|frame| match frame {
            Some(frame) => format!("{:.2} kWh", total_energy(&frame.samples) / 1000.0),
            None => "Loading...".to_string(),
        })
    };

    view! {
        <div class="card chart-card">
            <h3>"24h Electricity Usage"</h3>
            <div class="subtitle">{summary}</div>
            <div id="graph" class="graph" node_ref=container>
                {bars}
            </div>
            <div
                id="tooltip"
                class="tooltip"
                node_ref=tooltip
                style:opacity=move || if tip.with(|t| t.visible) { "1" } else { "0" }
                style:left=move || format!("{}px", tip.with(|t| t.placement.left))
                style:top=move || format!("{}px", tip.with(|t| t.placement.top))
            >
                <strong>{move || tip.with(|t| t.heading.clone())}</strong>
                <br />
                {move || tip.with(|t| t.body.clone())}
            </div>
        </div>
    }
}

fn viewport_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::default();
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Size {
        width: read(window.inner_width()),
        height: read(window.inner_height()),
    }
}
