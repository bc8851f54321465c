// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! EcoTrack client: session handling and resource operations for the
//! EcoTrack sustainability tracker API.
//!
//! This crate provides the authenticated request gateway, the typed API
//! operations, and the screen state machines (register, login, activity
//! logging, dashboard, achievements) that drive them.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod screens;
pub mod session;
pub mod time_utils;

pub use client::ApiClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use gateway::{ApiRequest, Gateway, Payload};
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
