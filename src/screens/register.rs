// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration form.

use super::{failure_message, required, Navigation};
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{NewUser, User};

/// Registration form state.
#[derive(Debug, Clone, Default)]
pub struct RegisterScreen {
    pub username: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. On success the fields are cleared and the caller
    /// should move on to the login screen.
    pub async fn submit(&mut self, client: &ApiClient) -> Option<Navigation> {
        match self.try_submit(client).await {
            Ok(user) => {
                tracing::debug!(user_id = user.user_id, "Registration complete");
                *self = Self::default();
                Some(Navigation::Login)
            }
            Err(e) => {
                self.error = Some(failure_message("Failed to register", &e));
                None
            }
        }
    }

    async fn try_submit(&self, client: &ApiClient) -> Result<User> {
        let new_user = NewUser {
            username: required(&self.username, "Username")?.to_string(),
            email: required(&self.email, "Email")?.to_string(),
            password: {
                required(&self.password, "Password")?;
                self.password.clone()
            },
        };
        client.register_user(&new_user).await
    }

    /// Link back to the login form.
    pub fn go_to_login(&self) -> Navigation {
        Navigation::Login
    }
}
