use dioxus::prelude::*;

use crate::core::session::Role;
use crate::core::state::{reduce, AppEvent, AppState, Screen};
use crate::i18n;
use crate::t;
use crate::views::{Dashboard, Signup, Welcome};

#[cfg(debug_assertions)]
fn log_shell_render(screen: Screen, lang: &str) {
    // Lightweight render trace for diagnosing navigation/i18n refresh issues.
    println!("[i18n] Shell render (screen={screen:?}, lang={lang})");
}

/// Root component shared by every launcher: owns the single `AppState`
/// signal, dispatches on the active [`Screen`], and renders the one-shot
/// notice banner. There is no router — the screen enum is the navigation.
#[component]
pub fn AppShell() -> Element {
    i18n::init();

    let mut state = use_context_provider(|| Signal::new(AppState::new()));
    let snapshot = state();

    #[cfg(debug_assertions)]
    log_shell_render(snapshot.screen, snapshot.language.tag());

    let body = match snapshot.screen {
        Screen::Welcome => rsx! { Welcome {} },
        Screen::UserSignup => rsx! { Signup { role: Role::User } },
        Screen::DoctorSignup => rsx! { Signup { role: Role::Doctor } },
        Screen::AdminSignup => rsx! { Signup { role: Role::Admin } },
        Screen::Dashboard => rsx! { Dashboard {} },
    };

    let dismiss_label = t!("notice-dismiss");

    rsx! {
        // Keyed wrapper forces a full remount when the language flips so every
        // fluent lookup below re-renders under the new locale.
        div {
            key: "{snapshot.language.tag()}",
            class: "app",
            dir: "{snapshot.language.dir()}",

            if let Some(notice) = snapshot.notice.clone() {
                div { class: "notice", role: "status",
                    span { class: "notice__text", "{notice}" }
                    button {
                        r#type: "button",
                        class: "notice__dismiss",
                        onclick: move |_| state.with_mut(|s| reduce(s, AppEvent::DismissNotice)),
                        "{dismiss_label}"
                    }
                }
            }

            {body}
        }
    }
}
