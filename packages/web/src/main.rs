// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use api::AdminApi;
use ui::admin::AdminDashboard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Backend base URL, fixed at build time.
const API_BASE: &str = match option_env!("ADMIN_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080",
};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One API handle for the life of the page, shared through context.
    use_context_provider(|| AdminApi::new(API_BASE).expect("API base URL must be valid"));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AdminDashboard {}
    }
}
