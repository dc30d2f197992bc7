// ABOUTME: User body-metric profile passed through from the account layer
// ABOUTME: Carried for completeness; BMI and goal tracking are computed outside the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTrack Contributors

use serde::{Deserialize, Serialize};

/// Body metrics recorded on the user's account
///
/// The analytics engine does not read these fields; they are owned by the
/// account layer and are modelled here so both sides share one record shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Height in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Target body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,
}
