use dioxus::prelude::*;

use crate::components::{LanguageToggle, SignInModal};
use crate::core::form::Field;
use crate::core::messages::Language;
use crate::core::session::Role;
use crate::core::state::{reduce, AppEvent, AppState};
use crate::t;

/// Localized heading, subtitle and submit label for one role's screen.
fn signup_copy(role: Role) -> (String, String, String) {
    match role {
        Role::User => (
            t!("signup-user-title"),
            t!("signup-user-subtitle"),
            t!("signup-user-submit"),
        ),
        Role::Doctor => (
            t!("signup-doctor-title"),
            t!("signup-doctor-subtitle"),
            t!("signup-doctor-submit"),
        ),
        Role::Admin => (
            t!("signup-admin-title"),
            t!("signup-admin-subtitle"),
            t!("signup-admin-submit"),
        ),
    }
}

fn field_label(field: Field) -> String {
    match field {
        Field::FullName => t!("field-full-name"),
        Field::Email => t!("field-email"),
        Field::Phone => t!("field-phone"),
        Field::Specialization => t!("field-specialization"),
        Field::LicenseNumber => t!("field-license-number"),
        Field::Organization => t!("field-organization"),
        Field::AdminCode => t!("field-admin-code"),
        Field::Password => t!("field-password"),
        Field::ConfirmPassword => t!("field-confirm-password"),
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Phone => "tel",
        Field::Password | Field::ConfirmPassword => "password",
        _ => "text",
    }
}

/// Screen field order: shared head, role extras, passwords last.
fn fields_for(role: Role) -> Vec<Field> {
    let mut fields = vec![Field::FullName, Field::Email, Field::Phone];
    match role {
        Role::User => {}
        Role::Doctor => fields.extend([Field::Specialization, Field::LicenseNumber]),
        Role::Admin => fields.extend([Field::Organization, Field::AdminCode]),
    }
    fields.extend([Field::Password, Field::ConfirmPassword]);
    fields
}

/// One registration screen parameterized by role; the three per-role pages
/// of the flow differ only in copy, accent and extra fields.
#[component]
pub fn Signup(role: Role) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let snapshot = state();
    let form = snapshot.form(role).clone();

    let (title, subtitle, submit_label) = signup_copy(role);
    let accent = role.accent();
    // The back arrow points "backwards" in the active reading direction.
    let back_arrow = match snapshot.language {
        Language::English => "←",
        Language::Arabic => "→",
    };

    let rows = fields_for(role).into_iter().map(|field| {
        let mut state = state;
        let label = field_label(field);
        let value = form.value(field).to_string();
        let error = form.error(field).map(str::to_string);
        let input_class = if error.is_some() {
            "form-field__input form-field__input--invalid"
        } else {
            "form-field__input"
        };
        rsx! {
            div { class: "form-field", key: "{field.as_str()}",
                label { class: "form-field__label", r#for: "{field.as_str()}", "{label}" }
                input {
                    id: "{field.as_str()}",
                    r#type: "{input_type(field)}",
                    class: "{input_class}",
                    value: "{value}",
                    placeholder: "{label}",
                    oninput: move |evt| {
                        state.with_mut(|s| {
                            reduce(
                                s,
                                AppEvent::FieldChanged {
                                    role,
                                    field,
                                    value: evt.value(),
                                },
                            )
                        })
                    },
                }
                if let Some(message) = error {
                    p { class: "form-field__error", "{message}" }
                }
            }
        }
    });

    rsx! {
        section { class: "page page-signup",
            button {
                r#type: "button",
                class: "back-button",
                onclick: move |_| state.with_mut(|s| reduce(s, AppEvent::BackToWelcome)),
                "{back_arrow} "
                {t!("signup-back")}
            }
            LanguageToggle {}

            div { class: "signup-card",
                div { class: "signup-card__icon {accent}", aria_hidden: "true" }
                h1 { class: "signup-card__title", "{title}" }
                p { class: "signup-card__subtitle", "{subtitle}" }

                form {
                    class: "signup-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        state.with_mut(|s| reduce(s, AppEvent::SubmitRegistration { role }));
                    },
                    {rows}
                    button {
                        r#type: "submit",
                        class: "button button--block {accent}",
                        "{submit_label}"
                    }
                }

                p { class: "signup-card__signin",
                    {t!("signup-have-account")}
                    " "
                    button {
                        r#type: "button",
                        class: "link-button",
                        onclick: move |_| {
                            state.with_mut(|s| reduce(s, AppEvent::OpenSignIn { role }))
                        },
                        {t!("signup-sign-in")}
                    }
                }
            }

            if snapshot.modal.open {
                SignInModal {}
            }
        }
    }
}
