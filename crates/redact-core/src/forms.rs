//! Credential form validation
//!
//! All checks run locally before any auth request is made. The rules match
//! what the auth service enforces; an empty error map means the form can be
//! submitted.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Characters counted as "special" by the password policy.
const PASSWORD_SPECIALS: &str = "@$!%*?&";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, Default)]
pub struct CredentialForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field name -> human-readable error message.
pub type FieldErrors = BTreeMap<&'static str, String>;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap())
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z\s]+$").unwrap())
}

/// Password policy: at least 8 characters with an uppercase letter, a
/// lowercase letter, a digit, and one of `@$!%*?&`; nothing outside that
/// alphabet.
fn password_is_strong(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c))
}

/// Validate a credential form. Returns a mapping from field name to error
/// message; an empty map means the form is valid for `mode`.
pub fn validate(form: &CredentialForm, mode: FormMode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if mode == FormMode::Signup {
        if form.name.trim().is_empty() {
            errors.insert("name", "Name is required".to_string());
        } else if form.name.len() < 3 {
            errors.insert("name", "Name must be at least 3 characters".to_string());
        } else if !name_regex().is_match(&form.name) {
            errors.insert("name", "Name can contain only letters and spaces".to_string());
        }
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !email_regex().is_match(&form.email) {
        errors.insert("email", "Invalid email format".to_string());
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if !password_is_strong(&form.password) {
        errors.insert(
            "password",
            "Password must be at least 8 characters and include uppercase, lowercase, number, and special character"
                .to_string(),
        );
    }

    if mode == FormMode::Signup && form.password != form.confirm_password {
        errors.insert("confirm_password", "Passwords do not match".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> CredentialForm {
        CredentialForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "Sup3rSecret!".to_string(),
            confirm_password: "Sup3rSecret!".to_string(),
        }
    }

    #[test]
    fn test_valid_signup_has_no_errors() {
        assert!(validate(&valid_signup(), FormMode::Signup).is_empty());
    }

    #[test]
    fn test_login_ignores_name_and_confirmation() {
        let form = CredentialForm {
            email: "john@example.com".to_string(),
            password: "Sup3rSecret!".to_string(),
            ..Default::default()
        };
        assert!(validate(&form, FormMode::Login).is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let errors = validate(&CredentialForm::default(), FormMode::Signup);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn test_email_shape() {
        let mut form = valid_signup();
        form.email = "not-an-email".to_string();
        assert!(validate(&form, FormMode::Login).contains_key("email"));

        form.email = "a@b.co".to_string();
        assert!(!validate(&form, FormMode::Login).contains_key("email"));
    }

    #[test]
    fn test_name_rules() {
        let mut form = valid_signup();
        form.name = "Jo".to_string();
        assert!(validate(&form, FormMode::Signup).contains_key("name"));

        form.name = "J0hn".to_string();
        assert!(validate(&form, FormMode::Signup).contains_key("name"));
    }

    #[test]
    fn test_password_policy() {
        for weak in ["short1!", "alllowercase1!", "ALLUPPERCASE1!", "NoDigits!", "NoSpecial1"] {
            assert!(!password_is_strong(weak), "{weak} should be rejected");
        }
        assert!(password_is_strong("Sup3rSecret!"));
    }

    #[test]
    fn test_signup_requires_matching_passwords() {
        let mut form = valid_signup();
        form.confirm_password = "Different1!".to_string();
        let errors = validate(&form, FormMode::Signup);
        assert_eq!(errors.get("confirm_password").unwrap(), "Passwords do not match");

        // Login mode never checks the confirmation field.
        assert!(!validate(&form, FormMode::Login).contains_key("confirm_password"));
    }
}
