// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! EcoTrack API operations.
//!
//! Each operation is a verb, a resource path, and an optional payload sent
//! through the [`Gateway`]. Login is the only operation that touches the
//! session: a successful login stores the returned token, and `logout`
//! clears it.

use crate::config::Config;
use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway, Payload};
use crate::models::achievement::{AchievementEnvelope, AchievementList};
use crate::models::{
    Achievement, AchievementDraft, ActivityLog, Credentials, Goal, LoginResponse, NewActivityLog,
    NewGoal, NewUser, Report, Tip, User,
};
use crate::session::Session;

/// Resource paths.
pub mod paths {
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login/";
    pub const ACTIVITY_LOGS: &str = "/activity-logs/";
    pub const ACHIEVEMENTS: &str = "/achievements";

    pub fn user(user_id: u64) -> String {
        format!("/users/{}", user_id)
    }

    /// `/users/{id}/{collection}`
    pub fn user_collection(user_id: u64, collection: &str) -> String {
        format!("/users/{}/{}", user_id, collection)
    }

    pub fn achievement(achievement_id: u64) -> String {
        format!("{}/{}", ACHIEVEMENTS, achievement_id)
    }
}

/// Typed client for the EcoTrack API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    gateway: Gateway,
}

impl ApiClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Client for the configured base URL with a persistent session.
    pub fn from_config(config: &Config) -> Self {
        let session = Session::persistent(&config.session_dir);
        Self::new(Gateway::new(&config.api_base_url, session))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn session(&self) -> &Session {
        self.gateway.session()
    }

    // ─── Authentication ──────────────────────────────────────────

    /// Register a new account.
    pub async fn register_user(&self, user: &NewUser) -> Result<User> {
        let request = ApiRequest::post(paths::REGISTER, Payload::json(user)?);
        let created: User = self.gateway.send_json(request).await?;
        tracing::info!(user_id = created.user_id, "User registered");
        Ok(created)
    }

    /// Log in and persist the returned token.
    ///
    /// A rejected login leaves any previously stored token in place.
    pub async fn login_user(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let payload = Payload::form([
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ]);
        let response: LoginResponse = self
            .gateway
            .send_json(ApiRequest::post(paths::LOGIN, payload))
            .await?;

        self.session().set_token(&response.access_token)?;
        tracing::info!(username = %credentials.username, "Logged in, session token stored");
        Ok(response)
    }

    /// Drop the stored token. Purely local; the API has no logout endpoint.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()?;
        tracing::info!("Session token cleared");
        Ok(())
    }

    // ─── Users ───────────────────────────────────────────────────

    pub async fn get_user(&self, user_id: u64) -> Result<User> {
        self.gateway
            .send_json(ApiRequest::get(paths::user(user_id)))
            .await
    }

    pub async fn get_user_activities(&self, user_id: u64) -> Result<Vec<ActivityLog>> {
        self.gateway
            .send_json(ApiRequest::get(paths::user_collection(user_id, "activities")))
            .await
    }

    pub async fn create_user_activity(
        &self,
        user_id: u64,
        activity: &NewActivityLog,
    ) -> Result<ActivityLog> {
        let path = paths::user_collection(user_id, "activities");
        self.gateway
            .send_json(ApiRequest::post(path, Payload::json(activity)?))
            .await
    }

    pub async fn get_user_reports(&self, user_id: u64) -> Result<Vec<Report>> {
        self.gateway
            .send_json(ApiRequest::get(paths::user_collection(user_id, "reports")))
            .await
    }

    pub async fn get_user_goals(&self, user_id: u64) -> Result<Vec<Goal>> {
        self.gateway
            .send_json(ApiRequest::get(paths::user_collection(user_id, "goals")))
            .await
    }

    pub async fn create_user_goal(&self, user_id: u64, goal: &NewGoal) -> Result<Goal> {
        let path = paths::user_collection(user_id, "goals");
        self.gateway
            .send_json(ApiRequest::post(path, Payload::json(goal)?))
            .await
    }

    pub async fn get_user_tips(&self, user_id: u64) -> Result<Vec<Tip>> {
        self.gateway
            .send_json(ApiRequest::get(paths::user_collection(user_id, "tips")))
            .await
    }

    pub async fn get_user_achievements(&self, user_id: u64) -> Result<Vec<Achievement>> {
        self.gateway
            .send_json(ApiRequest::get(paths::user_collection(
                user_id,
                "achievements",
            )))
            .await
    }

    /// Total emissions computed by the server for a user.
    pub async fn get_user_emissions(&self, user_id: u64) -> Result<f64> {
        self.gateway
            .send_json(ApiRequest::get(paths::user_collection(user_id, "emissions")))
            .await
    }

    /// Ask the server to generate a new emission report.
    pub async fn create_emission_report(&self, user_id: u64) -> Result<Report> {
        let path = paths::user_collection(user_id, "emission_report");
        self.gateway
            .send_json(ApiRequest::post(path, Payload::None))
            .await
    }

    // ─── Activity Logs ───────────────────────────────────────────

    pub async fn create_activity_log(&self, log: &NewActivityLog) -> Result<ActivityLog> {
        let created: ActivityLog = self
            .gateway
            .send_json(ApiRequest::post(paths::ACTIVITY_LOGS, Payload::json(log)?))
            .await?;
        tracing::info!(
            log_id = created.log_id,
            user_id = created.user_id,
            activity_type = %created.activity_type,
            "Activity log created"
        );
        Ok(created)
    }

    // ─── Achievements ────────────────────────────────────────────

    pub async fn list_achievements(&self) -> Result<Vec<Achievement>> {
        let list: AchievementList = self
            .gateway
            .send_json(ApiRequest::get(paths::ACHIEVEMENTS))
            .await?;
        Ok(list.achievements)
    }

    pub async fn get_achievement(&self, achievement_id: u64) -> Result<Achievement> {
        let envelope: AchievementEnvelope = self
            .gateway
            .send_json(ApiRequest::get(paths::achievement(achievement_id)))
            .await?;
        Ok(envelope.achievement)
    }

    pub async fn create_achievement(&self, draft: &AchievementDraft) -> Result<Achievement> {
        let envelope: AchievementEnvelope = self
            .gateway
            .send_json(ApiRequest::post(
                paths::ACHIEVEMENTS,
                Payload::json(draft)?,
            ))
            .await?;
        Ok(envelope.achievement)
    }

    pub async fn update_achievement(
        &self,
        achievement_id: u64,
        draft: &AchievementDraft,
    ) -> Result<Achievement> {
        let envelope: AchievementEnvelope = self
            .gateway
            .send_json(ApiRequest::put(
                paths::achievement(achievement_id),
                Payload::json(draft)?,
            ))
            .await?;
        Ok(envelope.achievement)
    }

    pub async fn delete_achievement(&self, achievement_id: u64) -> Result<()> {
        self.gateway
            .send_no_content(ApiRequest::delete(paths::achievement(achievement_id)))
            .await
    }
}
