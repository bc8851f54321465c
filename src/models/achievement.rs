// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement model and the response envelopes the API wraps it in.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Achievement as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(alias = "id")]
    pub achievement_id: u64,
    pub achievement_type: String,
    pub date_awarded: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// Fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementDraft {
    pub achievement_type: String,
    pub date_awarded: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// `GET /achievements` body: `{"status": ..., "achievements": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AchievementList {
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Single-item body: `{"status": ..., "achievement": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AchievementEnvelope {
    pub achievement: Achievement,
}
