//! Form payloads and their field-level validation.
//!
//! Validation here covers presence and shape only; content rules that
//! belong to the store (the 200-character bound) live in `api::todos`, and
//! email uniqueness is the database constraint's job.

use api::Error;
use serde::Deserialize;

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl RegisterForm {
    /// Check the fields and return the normalized email.
    pub fn validate(&self) -> Result<String, Error> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::Validation("a valid email address is required".into()));
        }
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            return Err(Error::Validation(format!(
                "password must be at least {PASSWORD_MIN_LEN} characters"
            )));
        }
        if self.password != self.password2 {
            return Err(Error::Validation("passwords must match".into()));
        }
        Ok(email.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// HTML checkboxes post `"on"` when checked and nothing otherwise.
    pub remember: Option<String>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<String, Error> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(Error::Validation("email and password are required".into()));
        }
        Ok(email.to_string())
    }

    pub fn remember(&self) -> bool {
        self.remember.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, password: &str, password2: &str) -> RegisterForm {
        RegisterForm {
            email: email.into(),
            password: password.into(),
            password2: password2.into(),
        }
    }

    #[test]
    fn register_requires_an_email_shape() {
        assert!(register("", "secret1", "secret1").validate().is_err());
        assert!(register("not-an-email", "secret1", "secret1").validate().is_err());
        assert_eq!(
            register("  a@x.com  ", "secret1", "secret1").validate().unwrap(),
            "a@x.com"
        );
    }

    #[test]
    fn register_enforces_password_length_and_confirmation() {
        assert!(register("a@x.com", "short", "short").validate().is_err());
        assert!(register("a@x.com", "secret1", "secret2").validate().is_err());
        assert!(register("a@x.com", "secret1", "secret1").validate().is_ok());
    }

    #[test]
    fn login_remember_reads_the_checkbox() {
        let form = LoginForm {
            email: "a@x.com".into(),
            password: "secret1".into(),
            remember: Some("on".into()),
        };
        assert!(form.remember());
        assert!(form.validate().is_ok());

        let form = LoginForm {
            email: "a@x.com".into(),
            password: "secret1".into(),
            remember: None,
        };
        assert!(!form.remember());
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "a@x.com".into(),
            password: String::new(),
            remember: None,
        };
        assert!(form.validate().is_err());
    }
}
