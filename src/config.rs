#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Default interval between instant power requests
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1_000;

/// Runtime configuration, read once at startup and passed to the flows
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix prepended to every API path, e.g. `https://meter.local/`.
    /// Empty means requests are relative to the page.
    pub base_url: String,
    pub poll_interval_ms: u32,
    /// When set, the daily graph is rebuilt on this period. Unset means one-shot.
    pub graph_refresh_ms: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            graph_refresh_ms: None,
        }
    }
}

impl AppConfig {
    /// Build the configuration from `window.ENV`, falling back to defaults
    pub fn from_window() -> Self {
        let defaults = Self::default();

        let base_url = read_env_string("API_URL").unwrap_or(defaults.base_url);
        let poll_interval_ms = read_env_string("POLL_INTERVAL_MS")
            .and_then(|v| parse_interval(&v))
            .unwrap_or(defaults.poll_interval_ms);
        let graph_refresh_ms = read_env_string("GRAPH_REFRESH_MS").and_then(|v| parse_interval(&v));

        Self {
            base_url,
            poll_interval_ms,
            graph_refresh_ms,
        }
    }
}

/// Parse a millisecond period; zero and garbage are rejected
fn parse_interval(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

/// Look up `window.ENV[key]` as a string
fn read_env_string(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        if let Some(s) = value.as_string() {
            return Some(s);
        }
        // Numbers are accepted too, so `POLL_INTERVAL_MS: 500` works
        value.as_f64().map(|n| format!("{}", n as u64))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}
