// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity log model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed categories an activity can be logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    CarTravel,
    PublicTransport,
    ElectricityUsage,
    NaturalGasUsage,
    WasteGeneration,
    WaterUsage,
    AirTravel,
    FoodConsumptionMeat,
    FoodConsumptionVegetables,
    ClothingPurchases,
}

impl ActivityType {
    /// All categories, in menu order.
    pub const ALL: [ActivityType; 10] = [
        ActivityType::CarTravel,
        ActivityType::PublicTransport,
        ActivityType::ElectricityUsage,
        ActivityType::NaturalGasUsage,
        ActivityType::WasteGeneration,
        ActivityType::WaterUsage,
        ActivityType::AirTravel,
        ActivityType::FoodConsumptionMeat,
        ActivityType::FoodConsumptionVegetables,
        ActivityType::ClothingPurchases,
    ];

    /// Wire value (`car_travel`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::CarTravel => "car_travel",
            ActivityType::PublicTransport => "public_transport",
            ActivityType::ElectricityUsage => "electricity_usage",
            ActivityType::NaturalGasUsage => "natural_gas_usage",
            ActivityType::WasteGeneration => "waste_generation",
            ActivityType::WaterUsage => "water_usage",
            ActivityType::AirTravel => "air_travel",
            ActivityType::FoodConsumptionMeat => "food_consumption_meat",
            ActivityType::FoodConsumptionVegetables => "food_consumption_vegetables",
            ActivityType::ClothingPurchases => "clothing_purchases",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::CarTravel => "Car Travel",
            ActivityType::PublicTransport => "Public Transport",
            ActivityType::ElectricityUsage => "Electricity Usage",
            ActivityType::NaturalGasUsage => "Natural Gas Usage",
            ActivityType::WasteGeneration => "Waste Generation",
            ActivityType::WaterUsage => "Water Usage",
            ActivityType::AirTravel => "Air Travel",
            ActivityType::FoodConsumptionMeat => "Food Consumption (Meat)",
            ActivityType::FoodConsumptionVegetables => "Food Consumption (Vegetables)",
            ActivityType::ClothingPurchases => "Clothing Purchases",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown activity type '{}'", s))
    }
}

/// Payload for `/activity-logs/` and `/users/{id}/activities`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewActivityLog {
    pub user_id: u64,
    pub activity_type: ActivityType,
    pub activity_value: f64,
    pub date: NaiveDateTime,
}

/// Stored activity log entry.
///
/// The server stores `activity_type` as free text, so rows written by other
/// clients may carry values outside [`ActivityType`]; those are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    #[serde(alias = "id")]
    pub log_id: u64,
    pub user_id: u64,
    pub activity_type: String,
    pub activity_value: f64,
    pub date: NaiveDateTime,
}

impl ActivityLog {
    /// Known category, or `None` for free-text types.
    pub fn kind(&self) -> Option<ActivityType> {
        self.activity_type.parse().ok()
    }
}
