//! Capture payloads
//!
//! The capture roll is computed by the server; the client only replays it.

use serde::Deserialize;

/// The wild combatant targeted by a capture attempt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaptureTarget {
    #[serde(default)]
    pub species_name: String,
    #[serde(default)]
    pub is_shiny: bool,
}

/// Sent in response to using a ball
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaptureAttempt {
    #[serde(default)]
    pub start_animation: bool,
    pub pokemon: CaptureTarget,
    #[serde(default)]
    pub ball_type: String,
    #[serde(default)]
    pub capture_rate: f64,
    /// Shakes before the outcome, 0..=3
    #[serde(default)]
    pub shakes: u8,
    #[serde(default)]
    pub success: bool,
}

impl CaptureAttempt {
    /// Capture chance as a display percentage
    pub fn probability_percent(&self) -> f64 {
        (self.capture_rate * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CapturedPokemon {
    pub name: String,
    #[serde(default)]
    pub level: u32,
}

/// Sent in response to `confirm_capture`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaptureResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub captured_pokemon: Option<CapturedPokemon>,
    #[serde(default)]
    pub is_first_catch: bool,
}
