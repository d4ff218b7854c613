use dioxus::prelude::*;

use crate::core::state::{reduce, AppEvent, AppState};
use crate::i18n;
use crate::t;

/// EN/AR switcher rendered on every screen. The button shows the *other*
/// language's name (the one you'd switch to).
///
/// Switching updates the fluent loader first and only then dispatches
/// `ToggleLanguage`, so the reducer's language and the loader's locale stay
/// in step; displayed validation errors are re-localized by the reducer.
#[component]
pub fn LanguageToggle() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let label = t!("lang-toggle");

    rsx! {
        button {
            r#type: "button",
            class: "language-toggle",
            onclick: move |_| {
                let next = state().language.toggled();
                if i18n::set_language(next.tag()).is_ok() {
                    state.with_mut(|s| reduce(s, AppEvent::ToggleLanguage));
                }
            },
            "{label}"
        }
    }
}
