use dioxus::prelude::*;

use crate::components::LanguageToggle;
use crate::core::session::Role;
use crate::core::state::{reduce, AppEvent, AppState, Screen};
use crate::t;

/// Localized card copy for one role.
fn role_copy(role: Role) -> (String, String, String) {
    match role {
        Role::User => (
            t!("role-user-title"),
            t!("role-user-desc"),
            t!("role-user-button"),
        ),
        Role::Doctor => (
            t!("role-doctor-title"),
            t!("role-doctor-desc"),
            t!("role-doctor-button"),
        ),
        Role::Admin => (
            t!("role-admin-title"),
            t!("role-admin-desc"),
            t!("role-admin-button"),
        ),
    }
}

/// Role-selection welcome screen: one accent-colored card per role.
#[component]
pub fn Welcome() -> Element {
    let state = use_context::<Signal<AppState>>();

    let cards = Role::ALL.iter().map(|&role| {
        let mut state = state;
        let (title, desc, button) = role_copy(role);
        let accent = role.accent();
        rsx! {
            div { class: "role-card", key: "{role.as_str()}",
                div { class: "role-card__icon {accent}", aria_hidden: "true" }
                h2 { class: "role-card__title", "{title}" }
                p { class: "role-card__desc", "{desc}" }
                button {
                    r#type: "button",
                    class: "button button--block {accent}",
                    onclick: move |_| {
                        state.with_mut(|s| reduce(s, AppEvent::GoTo(Screen::signup_for(role))))
                    },
                    "{button}"
                }
            }
        }
    });

    rsx! {
        section { class: "page page-welcome",
            LanguageToggle {}

            div { class: "welcome__brand accent--user", aria_hidden: "true", "♥" }
            h1 { class: "welcome__title", {t!("welcome-title")} }
            p { class: "welcome__tagline", {t!("welcome-tagline")} }

            div { class: "welcome__roles", {cards} }

            footer { class: "welcome__footer", {t!("welcome-footer")} }
        }
    }
}
