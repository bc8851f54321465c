// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievements manager: a list with add/edit dialogs and delete.
//!
//! Every successful mutation is followed by a full [`refresh`]; the list is
//! never patched locally with the mutation result.
//!
//! [`refresh`]: AchievementsScreen::refresh

use super::{failure_message, required};
use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{Achievement, AchievementDraft};
use crate::time_utils::{format_display_date, parse_local_datetime, WIRE_FORMAT};

/// Which dialog, if any, is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Add,
    /// Editing the achievement with this ID
    Edit(u64),
}

/// Achievements list and dialog state.
#[derive(Debug, Clone)]
pub struct AchievementsScreen {
    pub achievements: Vec<Achievement>,
    pub loading: bool,
    pub error: Option<String>,
    pub dialog: DialogState,
    /// Dialog field: achievement type
    pub achievement_type: String,
    /// Dialog field: date awarded (`YYYY-MM-DDTHH:MM[:SS]`)
    pub date_awarded: String,
    /// Owner attached to created/updated achievements, if known
    pub user_id: Option<u64>,
}

impl Default for AchievementsScreen {
    fn default() -> Self {
        Self {
            achievements: Vec::new(),
            loading: true,
            error: None,
            dialog: DialogState::Closed,
            achievement_type: String::new(),
            date_awarded: String::new(),
            user_id: None,
        }
    }
}

impl AchievementsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen whose drafts are attributed to `user_id`.
    pub fn for_user(user_id: u64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Re-read the full list. On failure the current list is kept; on
    /// success any earlier error is dismissed.
    pub async fn refresh(&mut self, client: &ApiClient) -> bool {
        let result = client.list_achievements().await;
        self.loading = false;
        match result {
            Ok(achievements) => {
                self.achievements = achievements;
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(failure_message("Failed to fetch achievements", &e));
                false
            }
        }
    }

    // ─── Dialogs ─────────────────────────────────────────────────

    pub fn open_add(&mut self) {
        self.clear_fields();
        self.dialog = DialogState::Add;
    }

    /// Open the edit dialog pre-filled from an existing entry.
    pub fn open_edit(&mut self, achievement: &Achievement) {
        self.achievement_type = achievement.achievement_type.clone();
        self.date_awarded = achievement.date_awarded.format(WIRE_FORMAT).to_string();
        self.dialog = DialogState::Edit(achievement.achievement_id);
    }

    /// Cancel: close the dialog, keep the list.
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    // ─── Mutations ───────────────────────────────────────────────

    /// Create from the dialog fields, then refresh.
    pub async fn create(&mut self, client: &ApiClient) -> bool {
        let result = match self.draft() {
            Ok(draft) => client.create_achievement(&draft).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(created) => {
                tracing::info!(achievement_id = created.achievement_id, "Achievement created");
                self.after_write(client).await
            }
            Err(e) => {
                self.error = Some(failure_message("Failed to create achievement", &e));
                false
            }
        }
    }

    /// Update the entry being edited, then refresh.
    pub async fn update(&mut self, client: &ApiClient) -> bool {
        let result = match (self.dialog, self.draft()) {
            (DialogState::Edit(id), Ok(draft)) => client.update_achievement(id, &draft).await,
            (_, Err(e)) => Err(e),
            _ => Err(ClientError::MissingField("Achievement")),
        };
        match result {
            Ok(updated) => {
                tracing::info!(achievement_id = updated.achievement_id, "Achievement updated");
                self.after_write(client).await
            }
            Err(e) => {
                self.error = Some(failure_message("Failed to update achievement", &e));
                false
            }
        }
    }

    /// Delete by ID, then refresh.
    pub async fn delete(&mut self, client: &ApiClient, achievement_id: u64) -> bool {
        match client.delete_achievement(achievement_id).await {
            Ok(()) => {
                tracing::info!(achievement_id, "Achievement deleted");
                self.after_write(client).await
            }
            Err(e) => {
                self.error = Some(failure_message("Failed to delete achievement", &e));
                false
            }
        }
    }

    /// Completion step shared by every successful mutation: reset the dialog
    /// and re-read the list from the server.
    async fn after_write(&mut self, client: &ApiClient) -> bool {
        self.error = None;
        self.clear_fields();
        self.dialog = DialogState::Closed;
        self.refresh(client).await
    }

    fn draft(&self) -> Result<AchievementDraft> {
        let achievement_type = required(&self.achievement_type, "Achievement Type")?;
        let date_text = required(&self.date_awarded, "Date Awarded")?;
        let date_awarded =
            parse_local_datetime(date_text).ok_or_else(|| ClientError::InvalidField {
                field: "Date Awarded",
                reason: format!("'{}' is not a date and time", date_text),
            })?;

        Ok(AchievementDraft {
            achievement_type: achievement_type.to_string(),
            date_awarded,
            user_id: self.user_id,
        })
    }

    fn clear_fields(&mut self) {
        self.achievement_type.clear();
        self.date_awarded.clear();
    }

    // ─── Display ─────────────────────────────────────────────────

    /// `(primary, secondary)` text per list row.
    pub fn rows(&self) -> Vec<(String, String)> {
        self.achievements
            .iter()
            .map(|a| {
                (
                    a.achievement_type.clone(),
                    format_display_date(a.date_awarded),
                )
            })
            .collect()
    }

    /// Placeholder shown when the list is empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.achievements
            .is_empty()
            .then_some("No achievements found.")
    }
}
