use dioxus::prelude::*;

use crate::components::LanguageToggle;
use crate::core::state::{reduce, AppEvent, AppState};
use crate::t;

/// Static post-login dashboard. All content is demo data; the only live
/// pieces are the greeting, the role badge and the sign-out action.
///
/// Reachable without a session (navigation is unguarded); in that case a
/// localized guest name and the default `user` role are shown.
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let snapshot = state();

    let name = snapshot.display_name();
    let role = snapshot.dashboard_role();
    let greeting = t!("dashboard-hello", name = name);
    let badge = role.as_str().to_uppercase();

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard__header",
                div {
                    h1 { class: "dashboard__greeting", "{greeting}" }
                    p { class: "dashboard__subtitle", {t!("dashboard-subtitle")} }
                }
                div { class: "dashboard__header-actions",
                    span { class: "dashboard__badge {role.accent()}", "{badge}" }
                    LanguageToggle {}
                    button {
                        r#type: "button",
                        class: "link-button",
                        onclick: move |_| state.with_mut(|s| reduce(s, AppEvent::SignOut)),
                        {t!("dashboard-sign-out")}
                    }
                }
            }

            main { class: "dashboard__grid",
                section { class: "dashboard__main",
                    div { class: "dashboard__stats",
                        div { class: "stat-card",
                            h3 { class: "stat-card__label", {t!("dashboard-records")} }
                            p { class: "stat-card__value", "12" }
                        }
                        div { class: "stat-card",
                            h3 { class: "stat-card__label", {t!("dashboard-upcoming")} }
                            p { class: "stat-card__value", "3" }
                        }
                        div { class: "stat-card",
                            h3 { class: "stat-card__label", {t!("dashboard-settings")} }
                            p { class: "stat-card__value", "1" }
                        }
                    }

                    div { class: "dashboard-card",
                        h3 { class: "dashboard-card__title", {t!("dashboard-overview")} }
                        div { class: "dashboard__overview",
                            div { class: "dashboard__overview-item",
                                {t!("dashboard-recent-updates")}
                                div { class: "dashboard__overview-detail", {t!("dashboard-no-updates")} }
                            }
                            div { class: "dashboard__overview-item",
                                {t!("dashboard-notifications")}
                                div { class: "dashboard__overview-detail", {t!("dashboard-notifications-count")} }
                            }
                        }
                    }
                }

                aside { class: "dashboard__aside",
                    div { class: "dashboard-card",
                        h3 { class: "dashboard-card__title", {t!("dashboard-actions")} }
                        div { class: "dashboard__actions",
                            button { r#type: "button", class: "action-button accent--user", {t!("dashboard-action-appointment")} }
                            button { r#type: "button", class: "action-button accent--doctor", {t!("dashboard-action-record")} }
                            button { r#type: "button", class: "action-button accent--admin", {t!("dashboard-action-settings")} }
                        }
                    }
                    div { class: "dashboard-card",
                        h3 { class: "dashboard-card__title", {t!("dashboard-activity")} }
                        ul { class: "dashboard__activity",
                            li { {t!("dashboard-activity-signin")} }
                            li { {t!("dashboard-activity-profile")} }
                        }
                    }
                }
            }
        }
    }
}
