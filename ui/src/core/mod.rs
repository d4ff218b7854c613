//! Pure application core: screens, forms, validation, sessions.
//!
//! Nothing in here touches Dioxus. The views own a `Signal<AppState>` and
//! feed every user-interface event through [`state::reduce`], so the whole
//! sign-up/sign-in flow is testable as plain functions over plain data.

pub mod form;
pub mod messages;
pub mod session;
pub mod state;
pub mod validation;
