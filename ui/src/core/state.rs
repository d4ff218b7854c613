//! Application state tree and reducer.
//!
//! The whole app is one `AppState` mutated synchronously by [`reduce`]:
//! every user-interface event (field edit, button press, form submit) maps
//! to one [`AppEvent`], and one event is applied to completion before the
//! next arrives. The views hold the state in a `Signal<AppState>` and call
//! `reduce` inside `with_mut`, so no other locking discipline exists.

use serde::{Deserialize, Serialize};

use super::form::{Field, RegistrationForm};
use super::messages::{self, Language};
use super::session::{Credentials, Role, Session};
use super::validation::validate;

/// The enumerated active view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Welcome,
    UserSignup,
    DoctorSignup,
    AdminSignup,
    Dashboard,
}

impl Screen {
    /// Registration screen belonging to `role`.
    pub fn signup_for(role: Role) -> Self {
        match role {
            Role::User => Screen::UserSignup,
            Role::Doctor => Screen::DoctorSignup,
            Role::Admin => Screen::AdminSignup,
        }
    }
}

/// Visibility and context of the sign-in overlay. The carried email and
/// password pre-fill the modal and survive closing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
    pub invoking_role: Role,
    pub email: String,
    pub password: String,
}

/// The single in-memory state tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub language: Language,
    pub user_form: RegistrationForm,
    pub doctor_form: RegistrationForm,
    pub admin_form: RegistrationForm,
    pub modal: ModalState,
    pub session: Option<Session>,
    /// One-shot informational notice (e.g. "forgot password" is disabled).
    pub notice: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::default(),
            language: Language::default(),
            user_form: RegistrationForm::for_role(Role::User),
            doctor_form: RegistrationForm::for_role(Role::Doctor),
            admin_form: RegistrationForm::for_role(Role::Admin),
            modal: ModalState::default(),
            session: None,
            notice: None,
        }
    }

    pub fn form(&self, role: Role) -> &RegistrationForm {
        match role {
            Role::User => &self.user_form,
            Role::Doctor => &self.doctor_form,
            Role::Admin => &self.admin_form,
        }
    }

    pub fn form_mut(&mut self, role: Role) -> &mut RegistrationForm {
        match role {
            Role::User => &mut self.user_form,
            Role::Doctor => &mut self.doctor_form,
            Role::Admin => &mut self.admin_form,
        }
    }

    /// Name shown on the dashboard: the session's, or a localized guest
    /// placeholder when the dashboard was reached without signing in.
    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map(|session| session.display_name.clone())
            .unwrap_or_else(|| messages::guest_display_name(self.language).to_string())
    }

    /// Role shown on the dashboard badge; defaults to `User` without a session.
    pub fn dashboard_role(&self) -> Role {
        self.session
            .as_ref()
            .map(|session| session.role)
            .unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Every discrete user-interface event the views can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Unconditional navigation; no guard prevents jumping to `Dashboard`
    /// without a session (preserved demo behavior).
    GoTo(Screen),
    BackToWelcome,
    ToggleLanguage,
    FieldChanged {
        role: Role,
        field: Field,
        value: String,
    },
    SubmitRegistration {
        role: Role,
    },
    OpenSignIn {
        role: Role,
    },
    CloseSignIn,
    /// Modal sign-in: accepted as-is, bypassing the validator (preserved
    /// demo behavior).
    SubmitSignIn(Credentials),
    CreateAccountFromModal {
        role: Role,
    },
    ForgotPassword,
    DismissNotice,
    SignOut,
}

impl AppEvent {
    /// Event name for trace lines; field values and credentials are
    /// intentionally not printed.
    fn name(&self) -> &'static str {
        match self {
            AppEvent::GoTo(_) => "GoTo",
            AppEvent::BackToWelcome => "BackToWelcome",
            AppEvent::ToggleLanguage => "ToggleLanguage",
            AppEvent::FieldChanged { .. } => "FieldChanged",
            AppEvent::SubmitRegistration { .. } => "SubmitRegistration",
            AppEvent::OpenSignIn { .. } => "OpenSignIn",
            AppEvent::CloseSignIn => "CloseSignIn",
            AppEvent::SubmitSignIn(_) => "SubmitSignIn",
            AppEvent::CreateAccountFromModal { .. } => "CreateAccountFromModal",
            AppEvent::ForgotPassword => "ForgotPassword",
            AppEvent::DismissNotice => "DismissNotice",
            AppEvent::SignOut => "SignOut",
        }
    }
}

#[cfg(debug_assertions)]
fn log_transition(event: &AppEvent, screen: Screen) {
    // Lightweight transition trace for diagnosing navigation issues.
    println!("[state] {} (screen={screen:?})", event.name());
}

/// Apply one event to the state. Never fails; validation failures are data
/// written into the affected form's error map.
pub fn reduce(state: &mut AppState, event: AppEvent) {
    #[cfg(debug_assertions)]
    log_transition(&event, state.screen);

    match event {
        AppEvent::GoTo(screen) => {
            state.screen = screen;
        }
        AppEvent::BackToWelcome => {
            state.screen = Screen::Welcome;
        }
        AppEvent::ToggleLanguage => {
            state.language = state.language.toggled();
            relocalize_errors(state);
        }
        AppEvent::FieldChanged { role, field, value } => {
            let language = state.language;
            let form = state.form_mut(role);
            form.set(field, value);
            form.errors = validate(form, role, language);
        }
        AppEvent::SubmitRegistration { role } => {
            let language = state.language;
            let errors = validate(state.form(role), role, language);
            if errors.is_empty() {
                let session = Session::from_registration(role, state.form(role));
                state.form_mut(role).errors.clear();
                state.session = Some(session);
                state.screen = Screen::Dashboard;
            } else {
                state.form_mut(role).errors = errors;
            }
        }
        AppEvent::OpenSignIn { role } => {
            state.modal.invoking_role = role;
            state.modal.open = true;
        }
        AppEvent::CloseSignIn => {
            // Carried credentials persist for pre-filling next time.
            state.modal.open = false;
        }
        AppEvent::SubmitSignIn(credentials) => {
            state.modal.email = credentials.email.clone();
            state.modal.password = credentials.password.clone();
            state.session = Some(Session::from_credentials(&credentials, state.language));
            state.modal.open = false;
            state.screen = Screen::Dashboard;
        }
        AppEvent::CreateAccountFromModal { role } => {
            state.modal.open = false;
            state.screen = Screen::signup_for(role);
        }
        AppEvent::ForgotPassword => {
            state.notice = Some(messages::forgot_password_notice(state.language).to_string());
        }
        AppEvent::DismissNotice => {
            state.notice = None;
        }
        AppEvent::SignOut => {
            state.session = None;
            state.screen = Screen::Welcome;
        }
    }
}

/// After a language switch, re-issue the messages of any form currently
/// showing errors. Pristine forms are skipped: validating them would
/// surface "required" errors the user never triggered.
fn relocalize_errors(state: &mut AppState) {
    let language = state.language;
    for role in Role::ALL {
        if !state.form(role).errors.is_empty() {
            let errors = validate(state.form(role), role, language);
            state.form_mut(role).errors = errors;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut AppState, role: Role, pairs: &[(Field, &str)]) {
        for (field, value) in pairs {
            reduce(
                state,
                AppEvent::FieldChanged {
                    role,
                    field: *field,
                    value: (*value).to_string(),
                },
            );
        }
    }

    #[test]
    fn scenario_a_user_registration_logs_in_and_lands_on_the_dashboard() {
        let mut state = AppState::new();
        reduce(&mut state, AppEvent::GoTo(Screen::UserSignup));
        fill(
            &mut state,
            Role::User,
            &[
                (Field::FullName, "Ana Lee"),
                (Field::Email, "ana@x.com"),
                (Field::Phone, "5551234567"),
                (Field::Password, "secret"),
                (Field::ConfirmPassword, "secret"),
            ],
        );

        reduce(&mut state, AppEvent::SubmitRegistration { role: Role::User });

        assert!(state.user_form.errors.is_empty());
        assert_eq!(state.screen, Screen::Dashboard);
        let session = state.session.as_ref().expect("session created");
        assert_eq!(session.role, Role::User);
        assert_eq!(session.display_name, "Ana Lee");
        assert_eq!(session.email, "ana@x.com");
    }

    #[test]
    fn scenario_b_doctor_submit_missing_specialization_is_aborted() {
        let mut state = AppState::new();
        reduce(&mut state, AppEvent::GoTo(Screen::DoctorSignup));
        fill(
            &mut state,
            Role::Doctor,
            &[
                (Field::FullName, "Dr. Sami Haddad"),
                (Field::Email, "sami@clinic.org"),
                (Field::Phone, "5551234567"),
                (Field::LicenseNumber, "MD-88431"),
                (Field::Password, "hunter22"),
                (Field::ConfirmPassword, "hunter22"),
            ],
        );

        reduce(
            &mut state,
            AppEvent::SubmitRegistration { role: Role::Doctor },
        );

        assert_eq!(state.screen, Screen::DoctorSignup);
        assert!(state.session.is_none());
        assert!(state.doctor_form.errors.contains_key(&Field::Specialization));
        assert_eq!(state.doctor_form.errors.len(), 1);
    }

    #[test]
    fn scenario_c_modal_sign_in_bypasses_validation() {
        let mut state = AppState::new();
        reduce(&mut state, AppEvent::GoTo(Screen::AdminSignup));
        reduce(&mut state, AppEvent::OpenSignIn { role: Role::Admin });
        assert!(state.modal.open);

        reduce(
            &mut state,
            AppEvent::SubmitSignIn(Credentials {
                email: "bob@x.com".into(),
                // Shorter than the registration minimum; accepted anyway.
                password: "anything".into(),
                role: Role::Admin,
            }),
        );

        assert!(!state.modal.open);
        assert_eq!(state.screen, Screen::Dashboard);
        let session = state.session.as_ref().expect("session created");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.display_name, "bob");
        assert_eq!(session.email, "bob@x.com");
        assert!(state.admin_form.errors.is_empty());
    }

    #[test]
    fn scenario_d_create_account_from_modal_opens_the_matching_signup() {
        let mut state = AppState::new();
        reduce(&mut state, AppEvent::GoTo(Screen::UserSignup));
        reduce(&mut state, AppEvent::OpenSignIn { role: Role::Doctor });

        reduce(
            &mut state,
            AppEvent::CreateAccountFromModal { role: Role::Doctor },
        );

        assert!(!state.modal.open);
        assert_eq!(state.screen, Screen::DoctorSignup);
    }

    #[test]
    fn scenario_e_sign_out_clears_the_session_and_returns_home() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            AppEvent::SubmitSignIn(Credentials {
                email: "ana@x.com".into(),
                password: "secret".into(),
                role: Role::User,
            }),
        );
        assert_eq!(state.screen, Screen::Dashboard);

        reduce(&mut state, AppEvent::SignOut);
        assert!(state.session.is_none());
        assert_eq!(state.screen, Screen::Welcome);
    }

    #[test]
    fn field_edits_revalidate_on_every_keystroke() {
        let mut state = AppState::new();
        fill(&mut state, Role::User, &[(Field::Email, "foo")]);
        assert!(state.user_form.errors.contains_key(&Field::Email));

        fill(&mut state, Role::User, &[(Field::Email, "foo@bar.com")]);
        assert!(!state.user_form.errors.contains_key(&Field::Email));
        // Other fields are still empty and still reported.
        assert!(state.user_form.errors.contains_key(&Field::FullName));
    }

    #[test]
    fn carried_credentials_survive_closing_the_modal() {
        let mut state = AppState::new();
        reduce(&mut state, AppEvent::OpenSignIn { role: Role::User });
        reduce(
            &mut state,
            AppEvent::SubmitSignIn(Credentials {
                email: "ana@x.com".into(),
                password: "secret".into(),
                role: Role::User,
            }),
        );
        reduce(&mut state, AppEvent::OpenSignIn { role: Role::Admin });
        assert_eq!(state.modal.email, "ana@x.com");
        assert_eq!(state.modal.password, "secret");
        assert_eq!(state.modal.invoking_role, Role::Admin);

        reduce(&mut state, AppEvent::CloseSignIn);
        assert_eq!(state.modal.email, "ana@x.com");
    }

    #[test]
    fn language_toggle_relocalizes_displayed_errors_only() {
        let mut state = AppState::new();
        fill(&mut state, Role::User, &[(Field::Email, "foo")]);
        assert_eq!(
            state.user_form.error(Field::Email),
            Some("Invalid email address")
        );
        let failing_before: Vec<_> = state.user_form.errors.keys().copied().collect();

        reduce(&mut state, AppEvent::ToggleLanguage);
        assert_eq!(state.language, Language::Arabic);
        assert_eq!(
            state.user_form.error(Field::Email),
            Some("البريد الإلكتروني غير صالح")
        );
        let failing_after: Vec<_> = state.user_form.errors.keys().copied().collect();
        assert_eq!(failing_before, failing_after);

        // Forms never touched stay pristine.
        assert!(state.doctor_form.errors.is_empty());
        assert!(state.admin_form.errors.is_empty());
    }

    #[test]
    fn unguarded_dashboard_shows_a_guest_placeholder() {
        let mut state = AppState::new();
        reduce(&mut state, AppEvent::GoTo(Screen::Dashboard));
        assert!(state.session.is_none());
        assert_eq!(state.display_name(), "User");
        assert_eq!(state.dashboard_role(), Role::User);

        reduce(&mut state, AppEvent::ToggleLanguage);
        assert_eq!(state.display_name(), "المستخدم");
    }

    #[test]
    fn forgot_password_surfaces_a_dismissible_notice() {
        let mut state = AppState::new();
        reduce(&mut state, AppEvent::ForgotPassword);
        assert_eq!(
            state.notice.as_deref(),
            Some("Forgot password flow is not enabled in the demo.")
        );
        // No other transition happened.
        assert_eq!(state.screen, Screen::Welcome);

        reduce(&mut state, AppEvent::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn new_login_overwrites_the_previous_session() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            AppEvent::SubmitSignIn(Credentials {
                email: "first@x.com".into(),
                password: "a".into(),
                role: Role::User,
            }),
        );
        reduce(
            &mut state,
            AppEvent::SubmitSignIn(Credentials {
                email: "second@x.com".into(),
                password: "b".into(),
                role: Role::Doctor,
            }),
        );
        let session = state.session.as_ref().expect("session");
        assert_eq!(session.display_name, "second");
        assert_eq!(session.role, Role::Doctor);
    }
}
