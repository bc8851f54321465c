// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! EcoTrack dashboard client
//!
//! Logs in (when credentials are provided) and prints a summary of a
//! user's dashboard. The session token is persisted between runs.

use anyhow::Context;
use ecotrack_client::{
    config::Config,
    screens::{DashboardScreen, LoginScreen, Navigation},
    ApiClient,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        api = %config.api_base_url,
        session_dir = %config.session_dir.display(),
        "Starting EcoTrack client"
    );

    let client = ApiClient::from_config(&config);

    // Log in only when asked to; otherwise reuse the persisted token.
    if let (Ok(username), Ok(password)) = (
        std::env::var("ECOTRACK_USERNAME"),
        std::env::var("ECOTRACK_PASSWORD"),
    ) {
        let mut login = LoginScreen {
            username,
            password,
            ..LoginScreen::default()
        };
        if login.submit(&client).await != Some(Navigation::Dashboard) {
            anyhow::bail!(login.error.unwrap_or_else(|| "Login failed".to_string()));
        }
    } else if !client.session().is_authenticated()? {
        tracing::warn!("No stored session; requests will be unauthenticated");
    }

    let user_id: u64 = std::env::var("ECOTRACK_USER_ID")
        .context("ECOTRACK_USER_ID is required")?
        .parse()
        .context("ECOTRACK_USER_ID must be a number")?;

    let mut dashboard = DashboardScreen::new();
    if !dashboard.load(&client, user_id).await {
        anyhow::bail!(dashboard
            .error
            .unwrap_or_else(|| "Failed to load dashboard".to_string()));
    }

    for line in dashboard.activity_lines() {
        tracing::info!(section = "activities", "{}", line);
    }
    for report in &dashboard.reports {
        tracing::info!(section = "reports", "{}", report.report_data);
    }
    for line in dashboard.goal_lines() {
        tracing::info!(section = "goals", "{}", line);
    }
    for tip in &dashboard.tips {
        tracing::info!(section = "tips", "{}", tip.tip_text);
    }
    for achievement in &dashboard.achievements {
        tracing::info!(
            section = "achievements",
            "{} on {}",
            achievement.achievement_type,
            achievement.date_awarded
        );
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecotrack_client=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
