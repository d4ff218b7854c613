//! Per-role registration form state plus its derived error mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::session::Role;

/// Identifier of a single form input. The wire names are the camelCase
/// keys the markup uses for input ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Specialization,
    LicenseNumber,
    Organization,
    AdminCode,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Specialization => "specialization",
            Field::LicenseNumber => "licenseNumber",
            Field::Organization => "organization",
            Field::AdminCode => "adminCode",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from field to the current validation failure message.
/// A field absent from the map is valid; an empty map means the form is valid.
pub type ErrorMap = BTreeMap<Field, String>;

/// Role-specific extension record. Regular users carry no extra fields, so
/// the form holds `Option<RoleExtension>` rather than three object shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoleExtension {
    Doctor {
        specialization: String,
        license_number: String,
    },
    Admin {
        organization: String,
        admin_code: String,
    },
}

/// Mutable field set for one registration screen. Created empty at startup
/// and kept for the lifetime of the app; values deliberately survive
/// navigating away.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub extra: Option<RoleExtension>,
    #[serde(skip)]
    pub errors: ErrorMap,
}

impl RegistrationForm {
    /// Empty form with the extension record matching `role`.
    pub fn for_role(role: Role) -> Self {
        let extra = match role {
            Role::User => None,
            Role::Doctor => Some(RoleExtension::Doctor {
                specialization: String::new(),
                license_number: String::new(),
            }),
            Role::Admin => Some(RoleExtension::Admin {
                organization: String::new(),
                admin_code: String::new(),
            }),
        };
        Self {
            extra,
            ..Self::default()
        }
    }

    /// Current value of `field`, or `""` when the field does not exist on
    /// this form's role.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Specialization => match &self.extra {
                Some(RoleExtension::Doctor { specialization, .. }) => specialization,
                _ => "",
            },
            Field::LicenseNumber => match &self.extra {
                Some(RoleExtension::Doctor { license_number, .. }) => license_number,
                _ => "",
            },
            Field::Organization => match &self.extra {
                Some(RoleExtension::Admin { organization, .. }) => organization,
                _ => "",
            },
            Field::AdminCode => match &self.extra {
                Some(RoleExtension::Admin { admin_code, .. }) => admin_code,
                _ => "",
            },
        }
    }

    /// Overwrite `field` with `value`. Writes to a field that does not
    /// exist on this form's role are dropped.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Specialization => {
                if let Some(RoleExtension::Doctor { specialization, .. }) = &mut self.extra {
                    *specialization = value;
                }
            }
            Field::LicenseNumber => {
                if let Some(RoleExtension::Doctor { license_number, .. }) = &mut self.extra {
                    *license_number = value;
                }
            }
            Field::Organization => {
                if let Some(RoleExtension::Admin { organization, .. }) = &mut self.extra {
                    *organization = value;
                }
            }
            Field::AdminCode => {
                if let Some(RoleExtension::Admin { admin_code, .. }) = &mut self.extra {
                    *admin_code = value;
                }
            }
        }
    }

    /// Current validation message for `field`, if it is failing.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_role_attaches_the_matching_extension() {
        assert!(RegistrationForm::for_role(Role::User).extra.is_none());
        assert!(matches!(
            RegistrationForm::for_role(Role::Doctor).extra,
            Some(RoleExtension::Doctor { .. })
        ));
        assert!(matches!(
            RegistrationForm::for_role(Role::Admin).extra,
            Some(RoleExtension::Admin { .. })
        ));
    }

    #[test]
    fn set_and_value_round_trip_common_fields() {
        let mut form = RegistrationForm::for_role(Role::User);
        form.set(Field::FullName, "Ana Lee".into());
        form.set(Field::Email, "ana@x.com".into());
        assert_eq!(form.value(Field::FullName), "Ana Lee");
        assert_eq!(form.value(Field::Email), "ana@x.com");
    }

    #[test]
    fn extension_fields_only_exist_for_their_role() {
        let mut user = RegistrationForm::for_role(Role::User);
        user.set(Field::Specialization, "Cardiology".into());
        assert_eq!(user.value(Field::Specialization), "");

        let mut doctor = RegistrationForm::for_role(Role::Doctor);
        doctor.set(Field::Specialization, "Cardiology".into());
        doctor.set(Field::LicenseNumber, "MD-1234".into());
        assert_eq!(doctor.value(Field::Specialization), "Cardiology");
        assert_eq!(doctor.value(Field::LicenseNumber), "MD-1234");
        assert_eq!(doctor.value(Field::Organization), "");
    }
}
