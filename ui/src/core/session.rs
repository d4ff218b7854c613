//! Session model: the fabricated signed-in user.
//!
//! "Signing in" never checks anything against a backend. A [`Session`] is
//! constructed from whatever the user submitted and is the only record of
//! who is "logged in"; at most one exists at a time.

use serde::{Deserialize, Serialize};

use super::form::RegistrationForm;
use super::messages::{self, Language};

/// The three dashboard roles offered on the welcome screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Doctor,
    Admin,
}

impl Role {
    /// Welcome-screen order.
    pub const ALL: [Role; 3] = [Role::User, Role::Doctor, Role::Admin];

    /// Stable lowercase name, as used by the role badge and state snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        }
    }

    /// CSS modifier selecting the per-role accent color in the theme.
    pub fn accent(self) -> &'static str {
        match self {
            Role::User => "accent--user",
            Role::Doctor => "accent--doctor",
            Role::Admin => "accent--admin",
        }
    }
}

/// Raw credentials collected by the sign-in modal. Accepted as-is: the
/// modal path intentionally applies no validation (demo behavior).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The current signed-in user. Overwritten (not merged) on each login and
/// cleared on sign-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub display_name: String,
    pub email: String,
}

impl Session {
    /// Session produced by a successful registration: the display name is
    /// the submitted full name.
    pub fn from_registration(role: Role, form: &RegistrationForm) -> Self {
        Self {
            role,
            display_name: form.full_name.clone(),
            email: form.email.clone(),
        }
    }

    /// Session produced by a modal sign-in: the display name is the local
    /// part of the email (text before `@`), falling back to a localized
    /// role placeholder when that part is empty.
    pub fn from_credentials(credentials: &Credentials, language: Language) -> Self {
        let local_part = credentials.email.split('@').next().unwrap_or_default();
        let display_name = if local_part.is_empty() {
            messages::role_placeholder(credentials.role, language).to_string()
        } else {
            local_part.to_string()
        };
        Self {
            role: credentials.role,
            display_name,
            email: credentials.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::Field;

    #[test]
    fn registration_session_uses_the_full_name() {
        let mut form = RegistrationForm::for_role(Role::User);
        form.set(Field::FullName, "Ana Lee".into());
        form.set(Field::Email, "ana@x.com".into());

        let session = Session::from_registration(Role::User, &form);
        assert_eq!(session.role, Role::User);
        assert_eq!(session.display_name, "Ana Lee");
        assert_eq!(session.email, "ana@x.com");
    }

    #[test]
    fn modal_session_takes_the_email_local_part() {
        let session = Session::from_credentials(
            &Credentials {
                email: "bob@x.com".into(),
                password: "anything".into(),
                role: Role::Admin,
            },
            Language::English,
        );
        assert_eq!(session.display_name, "bob");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.email, "bob@x.com");
    }

    #[test]
    fn empty_email_falls_back_to_a_role_placeholder() {
        let session = Session::from_credentials(
            &Credentials {
                email: String::new(),
                password: "x".into(),
                role: Role::Doctor,
            },
            Language::Arabic,
        );
        assert_eq!(session.display_name, "طبيب");
    }

    #[test]
    fn local_part_before_the_first_at_sign_wins() {
        let session = Session::from_credentials(
            &Credentials {
                email: "a@b@c".into(),
                password: String::new(),
                role: Role::User,
            },
            Language::English,
        );
        assert_eq!(session.display_name, "a");
    }
}
