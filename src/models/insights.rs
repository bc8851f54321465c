//! Per-user reports, goals, and tips shown on the dashboard.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Emission report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(alias = "id")]
    pub report_id: u64,
    pub user_id: u64,
    pub report_data: String,
    #[serde(default)]
    pub generated_date: Option<NaiveDateTime>,
}

/// Emission reduction goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(alias = "id")]
    pub goal_id: u64,
    pub user_id: u64,
    pub target_reduction: f64,
    pub deadline: NaiveDateTime,
    #[serde(default)]
    pub achieved: bool,
}

/// Goal creation payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGoal {
    pub user_id: u64,
    pub target_reduction: f64,
    pub deadline: NaiveDateTime,
    pub achieved: bool,
}

/// Reduction tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(alias = "id")]
    pub tip_id: u64,
    pub tip_text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
}
