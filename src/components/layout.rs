use leptos::*;

/// Page frame with navbar and content
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                {children()}
            </main>
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Electricity Monitor"</h1>
                <div class="navbar-actions">
                    <CurrentTime />
                </div>
            </div>
        </nav>
    }
}

/// Local clock that updates every second
#[component]
fn CurrentTime() -> impl IntoView {
    let (time, set_time) = create_signal(current_time());

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1000, move || {
            set_time.set(current_time());
        });

        on_cleanup(move || drop(interval));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_time;

    view! {
        <span class="last-update">
            {move || time.get()}
        </span>
    }
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
