//! Browser checks, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use electricity_web_leptos::config::AppConfig;
use electricity_web_leptos::graph::partition_day;
use electricity_web_leptos::timestamp::{format_api_timestamp, parse_api_timestamp};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn config_defaults_without_window_env() {
    let config = AppConfig::from_window();

    assert_eq!(config.base_url, "");
    assert_eq!(config.poll_interval_ms, 1000);
}

#[wasm_bindgen_test]
fn local_now_partitions_into_96_slots() {
    let now = chrono::Local::now().naive_local();
    let intervals = partition_day(now);

    assert_eq!(intervals.len(), 96);
    assert!(intervals.iter().all(|i| i.end <= now));
    assert!(intervals.iter().all(|i| i.duration_ms() >= 0));
}

#[wasm_bindgen_test]
fn local_now_round_trips_through_api_format() {
    let now = chrono::Local::now().naive_local();
    let encoded = format_api_timestamp(&now);

    let decoded = parse_api_timestamp(&encoded).unwrap();

    assert_eq!(format_api_timestamp(&decoded), encoded);
}
