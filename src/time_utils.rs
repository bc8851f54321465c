// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::NaiveDateTime;

/// Wire format for timestamps (`2024-01-01T00:00:00`).
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a timestamp as typed into a date/time field.
///
/// Accepts full seconds precision, the minute precision produced by
/// datetime-local pickers (`2024-01-01T09:30`), and fractional seconds.
pub fn parse_local_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, WIRE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Format a timestamp for display next to a list entry (`2024-01-01`).
pub fn format_display_date(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}
