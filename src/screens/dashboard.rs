// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user dashboard.

use super::failure_message;
use crate::client::ApiClient;
use crate::models::{Achievement, ActivityLog, Goal, Report, Tip};

/// Dashboard sections for one user.
#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    pub activities: Vec<ActivityLog>,
    pub reports: Vec<Report>,
    pub goals: Vec<Goal>,
    pub tips: Vec<Tip>,
    pub achievements: Vec<Achievement>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every section for `user_id`.
    ///
    /// The five requests are issued concurrently. Sections are replaced only
    /// if all of them succeed, so a partial failure never mixes fresh and
    /// stale data.
    pub async fn load(&mut self, client: &ApiClient, user_id: u64) -> bool {
        self.loading = true;

        let result = tokio::try_join!(
            client.get_user_activities(user_id),
            client.get_user_reports(user_id),
            client.get_user_goals(user_id),
            client.get_user_tips(user_id),
            client.get_user_achievements(user_id),
        );

        self.loading = false;
        match result {
            Ok((activities, reports, goals, tips, achievements)) => {
                tracing::debug!(
                    user_id,
                    activities = activities.len(),
                    achievements = achievements.len(),
                    "Dashboard loaded"
                );
                self.activities = activities;
                self.reports = reports;
                self.goals = goals;
                self.tips = tips;
                self.achievements = achievements;
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(failure_message("Failed to load dashboard", &e));
                false
            }
        }
    }

    /// One line per activity: `car_travel: 12.5`.
    pub fn activity_lines(&self) -> Vec<String> {
        self.activities
            .iter()
            .map(|a| format!("{}: {}", a.activity_type, a.activity_value))
            .collect()
    }

    /// One line per goal: `10 by 2024-12-31T00:00:00`.
    pub fn goal_lines(&self) -> Vec<String> {
        self.goals
            .iter()
            .map(|g| {
                format!(
                    "{} by {}",
                    g.target_reduction,
                    g.deadline.format(crate::time_utils::WIRE_FORMAT)
                )
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
            && self.reports.is_empty()
            && self.goals.is_empty()
            && self.tips.is_empty()
            && self.achievements.is_empty()
    }
}
