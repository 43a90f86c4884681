use leptos::*;

use crate::components::layout::Layout;
use crate::components::Dashboard;
use crate::config::AppConfig;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Read window.ENV once and share it with the flows below
    let config = AppConfig::from_window();
    log::debug!("Using config {:?}", config);
    provide_context(config);

    view! {
        <Layout>
            <Dashboard />
        </Layout>
    }
}
