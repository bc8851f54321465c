// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity logging form.

use super::{failure_message, required};
use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{ActivityLog, ActivityType, NewActivityLog};
use crate::time_utils::parse_local_datetime;

/// Activity log form state. Numeric fields are held as typed text and parsed
/// on submit.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogScreen {
    pub user_id: String,
    pub activity_type: Option<ActivityType>,
    pub activity_value: String,
    pub date: String,
    pub error: Option<String>,
    /// Last log created from this form
    pub last_created: Option<ActivityLog>,
}

impl ActivityLogScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu entries for the activity type selector.
    pub fn activity_type_options() -> impl Iterator<Item = (ActivityType, &'static str)> {
        ActivityType::ALL.into_iter().map(|t| (t, t.label()))
    }

    /// Submit the form. Returns true and clears the fields on success.
    pub async fn submit(&mut self, client: &ApiClient) -> bool {
        let result = match self.build_log() {
            Ok(log) => client.create_activity_log(&log).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(created) => {
                self.user_id.clear();
                self.activity_type = None;
                self.activity_value.clear();
                self.date.clear();
                self.error = None;
                self.last_created = Some(created);
                true
            }
            Err(e) => {
                self.error = Some(failure_message("Failed to log activity", &e));
                false
            }
        }
    }

    /// Validate the fields and build the request payload.
    fn build_log(&self) -> Result<NewActivityLog> {
        let user_id = required(&self.user_id, "User ID")?
            .parse::<u64>()
            .map_err(|e| ClientError::InvalidField {
                field: "User ID",
                reason: e.to_string(),
            })?;

        let activity_type = self
            .activity_type
            .ok_or(ClientError::MissingField("Activity Type"))?;

        let activity_value = required(&self.activity_value, "Activity Value")?
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ClientError::InvalidField {
                field: "Activity Value",
                reason: format!("'{}' is not a number", self.activity_value),
            })?;

        let date_text = required(&self.date, "Date")?;
        let date = parse_local_datetime(date_text).ok_or_else(|| ClientError::InvalidField {
            field: "Date",
            reason: format!("'{}' is not a date and time", date_text),
        })?;

        Ok(NewActivityLog {
            user_id,
            activity_type,
            activity_value,
            date,
        })
    }
}
