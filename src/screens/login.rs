// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login form.

use super::{failure_message, required, Navigation};
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Credentials;

/// Login form state.
#[derive(Clone, Default)]
pub struct LoginScreen {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl std::fmt::Debug for LoginScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginScreen")
            .field("username", &self.username)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. On success the token is stored by the client and the
    /// caller should show the dashboard.
    ///
    /// On failure the password is kept so the user can correct the username
    /// without retyping it; any previously stored token is untouched.
    pub async fn submit(&mut self, client: &ApiClient) -> Option<Navigation> {
        match self.try_submit(client).await {
            Ok(()) => {
                *self = Self::default();
                Some(Navigation::Dashboard)
            }
            Err(e) => {
                self.error = Some(failure_message("Login failed", &e));
                None
            }
        }
    }

    async fn try_submit(&self, client: &ApiClient) -> Result<()> {
        let username = required(&self.username, "Username")?.to_string();
        required(&self.password, "Password")?;
        let credentials = Credentials {
            username,
            password: self.password.clone(),
        };
        client.login_user(&credentials).await?;
        Ok(())
    }

    /// Link to the registration form.
    pub fn go_to_register(&self) -> Navigation {
        Navigation::Register
    }
}
