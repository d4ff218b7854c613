use dioxus::prelude::*;

use crate::core::session::Credentials;
use crate::core::state::{reduce, AppEvent, AppState};
use crate::t;

// Modal stylesheet (component-scoped, mirrored inline for release native builds)
const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");
const MODAL_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/modal.css"
));

/// Sign-in overlay dialog.
///
/// Pre-filled from the carried credentials in `ModalState`; submitting
/// accepts whatever was typed (the demo's sign-in path has no validation
/// gate) and lands on the dashboard. "Create Account" closes the modal and
/// jumps to the invoking role's registration screen.
#[component]
pub fn SignInModal() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let snapshot = state();
    let invoking_role = snapshot.modal.invoking_role;
    let accent = invoking_role.accent();

    // The component mounts fresh each time the modal opens, so the local
    // input signals pick up the carried credentials at that moment.
    let mut email = use_signal(|| snapshot.modal.email.clone());
    let mut password = use_signal(|| snapshot.modal.password.clone());

    let aria_label = t!("modal-aria-label");
    let close_label = t!("modal-close");

    rsx! {
        document::Link { rel: "stylesheet", href: MODAL_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{MODAL_CSS_INLINE}" }
        }

        div {
            class: "signin-modal",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{aria_label}",

            div {
                class: "signin-modal__overlay",
                onclick: move |_| state.with_mut(|s| reduce(s, AppEvent::CloseSignIn)),
            }

            div { class: "signin-modal__dialog",
                button {
                    r#type: "button",
                    class: "signin-modal__close",
                    aria_label: "{close_label}",
                    onclick: move |_| state.with_mut(|s| reduce(s, AppEvent::CloseSignIn)),
                    "✕"
                }

                div { class: "signin-modal__header",
                    div { class: "signin-modal__icon {accent}", aria_hidden: "true" }
                    h2 { class: "signin-modal__brand", "MedSync" }
                    p { class: "signin-modal__subtitle", {t!("modal-subtitle")} }
                }

                form {
                    class: "signin-modal__form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        state.with_mut(|s| {
                            reduce(
                                s,
                                AppEvent::SubmitSignIn(Credentials {
                                    email: email(),
                                    password: password(),
                                    role: invoking_role,
                                }),
                            )
                        });
                    },

                    div { class: "form-field",
                        label { class: "form-field__label", r#for: "signin-email", {t!("modal-email")} }
                        input {
                            id: "signin-email",
                            r#type: "email",
                            class: "form-field__input",
                            autofocus: true,
                            placeholder: t!("modal-email-placeholder"),
                            value: "{email()}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { class: "form-field__label", r#for: "signin-password", {t!("modal-password")} }
                        input {
                            id: "signin-password",
                            r#type: "password",
                            class: "form-field__input",
                            placeholder: t!("modal-password-placeholder"),
                            value: "{password()}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    div { class: "signin-modal__forgot",
                        button {
                            r#type: "button",
                            class: "link-button",
                            onclick: move |_| state.with_mut(|s| reduce(s, AppEvent::ForgotPassword)),
                            {t!("modal-forgot")}
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "button button--block {accent}",
                        {t!("modal-submit")}
                    }
                }

                div { class: "signin-modal__footer",
                    {t!("modal-no-account")}
                    " "
                    button {
                        r#type: "button",
                        class: "link-button",
                        onclick: move |_| {
                            state.with_mut(|s| {
                                reduce(s, AppEvent::CreateAccountFromModal { role: invoking_role })
                            })
                        },
                        {t!("modal-create-account")}
                    }
                }
            }
        }
    }
}
