// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the EcoTrack API.

pub mod achievement;
pub mod activity;
pub mod insights;
pub mod user;

pub use achievement::{Achievement, AchievementDraft};
pub use activity::{ActivityLog, ActivityType, NewActivityLog};
pub use insights::{Goal, NewGoal, Report, Tip};
pub use user::{Credentials, LoginResponse, NewUser, User};
