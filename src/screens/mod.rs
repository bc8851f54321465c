// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form and list screens.
//!
//! A screen holds the field state for one entity and exposes async actions
//! that call [`ApiClient`](crate::ApiClient) operations. Actions never
//! return errors: failures are logged and recorded in the screen's `error`
//! field as a human-readable message, and any list data already loaded is
//! left as it was.

pub mod achievements;
pub mod activity_log;
pub mod dashboard;
pub mod login;
pub mod register;

pub use achievements::{AchievementsScreen, DialogState};
pub use activity_log::ActivityLogScreen;
pub use dashboard::DashboardScreen;
pub use login::LoginScreen;
pub use register::RegisterScreen;

use crate::error::{ClientError, Result};

/// Where the caller should go after an action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Register,
    Login,
    Dashboard,
}

/// Trimmed field value, or a precondition error if it is blank.
pub(crate) fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClientError::MissingField(field));
    }
    Ok(trimmed)
}

/// Log a failed action and turn it into the message shown on screen.
pub(crate) fn failure_message(context: &str, err: &ClientError) -> String {
    if err.is_precondition() {
        tracing::debug!(error = %err, "{}", context);
    } else {
        tracing::error!(error = %err, "{}", context);
    }
    format!("{}: {}", context, err.user_message())
}
