//! Pluggable authentication.
//!
//! adscribe ships only [`MockAuthenticator`], which accepts any non-blank
//! email/password pair. A real identity provider implements
//! [`Authenticator`] and is handed to the API facade instead; nothing else
//! changes.

use crate::error::{AdScribeError, Result};
use crate::model::User;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<User>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<User> {
        let email = credentials.email.trim();
        if email.is_empty() || credentials.password.is_empty() {
            return Err(AdScribeError::Auth(
                "Please provide both email and password".to_string(),
            ));
        }
        Ok(User::from_email(email))
    }
}
