//! Fixed bilingual string table consulted by the validator and the session
//! controller.
//!
//! The view layer localizes its labels through fluent (see `crate::i18n`);
//! the validator deliberately does not. `validate(form, role, language)` is
//! a pure function, so its messages come from this table keyed by
//! `(Violation, Language)` instead of whatever locale the global loader
//! currently holds. Both tables carry the same English/Arabic strings.

use serde::{Deserialize, Serialize};

use super::form::Field;
use super::session::Role;

/// Display language selected by the user. The core treats this as an
/// enumerated input, not a localization engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    /// The other language (the toggle button flips between exactly two).
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    /// BCP-47 tag matching the embedded fluent locale folders.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Arabic => "ar-EG",
        }
    }

    /// Document text direction.
    pub fn dir(self) -> &'static str {
        match self {
            Language::English => "ltr",
            Language::Arabic => "rtl",
        }
    }
}

/// One failed validation rule. Each variant identifies both the field and
/// the kind of failure, so the message table below stays a flat lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    FullNameRequired,
    EmailRequired,
    EmailInvalid,
    PhoneRequired,
    PhoneTooShort,
    SpecializationRequired,
    LicenseNumberRequired,
    OrganizationRequired,
    AdminCodeRequired,
    PasswordRequired,
    PasswordTooShort,
    ConfirmPasswordRequired,
    ConfirmPasswordMismatch,
}

impl Violation {
    /// The form field this violation is reported under.
    pub fn field(self) -> Field {
        match self {
            Violation::FullNameRequired => Field::FullName,
            Violation::EmailRequired | Violation::EmailInvalid => Field::Email,
            Violation::PhoneRequired | Violation::PhoneTooShort => Field::Phone,
            Violation::SpecializationRequired => Field::Specialization,
            Violation::LicenseNumberRequired => Field::LicenseNumber,
            Violation::OrganizationRequired => Field::Organization,
            Violation::AdminCodeRequired => Field::AdminCode,
            Violation::PasswordRequired | Violation::PasswordTooShort => Field::Password,
            Violation::ConfirmPasswordRequired | Violation::ConfirmPasswordMismatch => {
                Field::ConfirmPassword
            }
        }
    }

    /// Human-readable message in the requested language.
    pub fn message(self, language: Language) -> &'static str {
        use Language::{Arabic, English};
        match (self, language) {
            (Violation::FullNameRequired, English) => "Full name is required",
            (Violation::FullNameRequired, Arabic) => "الاسم الكامل مطلوب",
            (Violation::EmailRequired, English) => "Email is required",
            (Violation::EmailRequired, Arabic) => "البريد الإلكتروني مطلوب",
            (Violation::EmailInvalid, English) => "Invalid email address",
            (Violation::EmailInvalid, Arabic) => "البريد الإلكتروني غير صالح",
            (Violation::PhoneRequired, English) => "Phone number is required",
            (Violation::PhoneRequired, Arabic) => "رقم الهاتف مطلوب",
            (Violation::PhoneTooShort, English) => "Phone must be at least 10 digits",
            (Violation::PhoneTooShort, Arabic) => "رقم الهاتف يجب أن يكون 10 أرقام على الأقل",
            (Violation::SpecializationRequired, English) => "Specialization is required",
            (Violation::SpecializationRequired, Arabic) => "التخصص مطلوب",
            (Violation::LicenseNumberRequired, English) => "Medical License Number is required",
            (Violation::LicenseNumberRequired, Arabic) => "رقم الترخيص الطبي مطلوب",
            (Violation::OrganizationRequired, English) => "Organization is required",
            (Violation::OrganizationRequired, Arabic) => "المؤسسة مطلوبة",
            (Violation::AdminCodeRequired, English) => "Administrator Code is required",
            (Violation::AdminCodeRequired, Arabic) => "كود المدير مطلوب",
            (Violation::PasswordRequired, English) => "Password is required",
            (Violation::PasswordRequired, Arabic) => "كلمة المرور مطلوبة",
            (Violation::PasswordTooShort, English) => "Password must be at least 6 characters",
            (Violation::PasswordTooShort, Arabic) => "كلمة المرور يجب أن تكون 6 أحرف على الأقل",
            (Violation::ConfirmPasswordRequired, English) => "Confirm password is required",
            (Violation::ConfirmPasswordRequired, Arabic) => "تأكيد كلمة المرور مطلوب",
            (Violation::ConfirmPasswordMismatch, English) => "Confirm password does not match",
            (Violation::ConfirmPasswordMismatch, Arabic) => "تأكيد كلمة المرور لا يطابق",
        }
    }
}

/// Placeholder shown on the dashboard when no session exists.
pub fn guest_display_name(language: Language) -> &'static str {
    match language {
        Language::English => "User",
        Language::Arabic => "المستخدم",
    }
}

/// Fallback display name for a modal sign-in whose email has no local part.
pub fn role_placeholder(role: Role, language: Language) -> &'static str {
    match (role, language) {
        (Role::User, Language::English) => "User",
        (Role::User, Language::Arabic) => "المستخدم",
        (Role::Doctor, Language::English) => "Doctor",
        (Role::Doctor, Language::Arabic) => "طبيب",
        (Role::Admin, Language::English) => "Administrator",
        (Role::Admin, Language::Arabic) => "مدير النظام",
    }
}

/// One-shot notice surfaced by the modal's "Forgot password?" link.
pub fn forgot_password_notice(language: Language) -> &'static str {
    match language {
        Language::English => "Forgot password flow is not enabled in the demo.",
        Language::Arabic => "ميزة استعادة كلمة المرور غير مفعلة في النسخة التجريبية.",
    }
}
