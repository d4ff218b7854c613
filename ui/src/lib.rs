//! Shared UI crate for MedSync. All cross-platform logic and views live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Sign-in overlay dialog (components/sign_in_modal.rs)
    pub mod sign_in_modal;
    pub use sign_in_modal::SignInModal;

    // EN/AR switcher shown on every screen (components/language_toggle.rs)
    pub mod language_toggle;
    pub use language_toggle::LanguageToggle;
}
