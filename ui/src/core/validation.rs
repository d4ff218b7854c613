//! Shared validation ruleset for the three registration forms.
//!
//! All applicable rules run on every call; failures are collected rather
//! than short-circuited, so a submit surfaces every invalid field at once.
//! The function never fails itself: absence of violations is an empty map.

use once_cell::sync::Lazy;
use regex::Regex;

use super::form::{ErrorMap, Field, RegistrationForm};
use super::messages::{Language, Violation};
use super::session::Role;

/// Loose email shape check (not RFC-5322): `local@domain.tld` with no
/// whitespace and no extra `@` in either side.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Applied to the phone value after stripping every non-digit character.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,}$").expect("valid phone pattern"));

/// Minimum password length, counted in characters.
const MIN_PASSWORD_CHARS: usize = 6;

/// Validate `form` under the rules for `role`, producing messages in
/// `language`. Only failing fields appear in the returned map.
pub fn validate(form: &RegistrationForm, role: Role, language: Language) -> ErrorMap {
    let mut violations = Vec::new();

    if form.full_name.trim().is_empty() {
        violations.push(Violation::FullNameRequired);
    }

    if form.email.trim().is_empty() {
        violations.push(Violation::EmailRequired);
    } else if !EMAIL_RE.is_match(&form.email) {
        violations.push(Violation::EmailInvalid);
    }

    if form.phone.trim().is_empty() {
        violations.push(Violation::PhoneRequired);
    } else {
        let digits: String = form.phone.chars().filter(char::is_ascii_digit).collect();
        if !PHONE_RE.is_match(&digits) {
            violations.push(Violation::PhoneTooShort);
        }
    }

    match role {
        Role::User => {}
        Role::Doctor => {
            if form.value(Field::Specialization).trim().is_empty() {
                violations.push(Violation::SpecializationRequired);
            }
            if form.value(Field::LicenseNumber).trim().is_empty() {
                violations.push(Violation::LicenseNumberRequired);
            }
        }
        Role::Admin => {
            if form.value(Field::Organization).trim().is_empty() {
                violations.push(Violation::OrganizationRequired);
            }
            if form.value(Field::AdminCode).trim().is_empty() {
                violations.push(Violation::AdminCodeRequired);
            }
        }
    }

    if form.password.is_empty() {
        violations.push(Violation::PasswordRequired);
    } else if form.password.chars().count() < MIN_PASSWORD_CHARS {
        violations.push(Violation::PasswordTooShort);
    }

    if form.confirm_password.is_empty() {
        violations.push(Violation::ConfirmPasswordRequired);
    } else if form.confirm_password != form.password {
        violations.push(Violation::ConfirmPasswordMismatch);
    }

    violations
        .into_iter()
        .map(|violation| (violation.field(), violation.message(language).to_string()))
        .collect()
}
