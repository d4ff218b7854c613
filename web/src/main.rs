use dioxus::prelude::*;

use ui::views::AppShell;

// Embedded shared theme (ui/assets/theme/main.css); the five screens are an
// in-memory state machine inside AppShell, so the web crate is launch glue only.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        AppShell {}
    }
}
