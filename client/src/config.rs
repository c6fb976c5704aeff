//! Battle page configuration
//!
//! The page embeds a JSON object describing the battle; [`BattleConfig`]
//! deserialises it. Every fixed delay used by the sequences lives in
//! [`Timings`] and can be overridden from the same object.

use std::time::Duration;

use anyhow::{Context, Result};
use pokearena_protocol::CombatantSnapshot;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleKind {
    #[default]
    Wild,
    Trainer,
    Gym,
}

impl BattleKind {
    /// Background music for this kind of battle
    pub fn bgm_track(&self) -> &'static str {
        match self {
            BattleKind::Wild => "battle_wild",
            BattleKind::Trainer => "battle_trainer",
            BattleKind::Gym => "battle_gym",
        }
    }
}

/// Server endpoints, absolute or relative to `base_url`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub action: String,
    pub get_team: String,
    pub get_items: String,
    pub learn_move: String,
    pub return_zone: String,
    #[serde(default)]
    pub my_team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleConfig {
    pub battle_id: u64,
    pub csrf_token: String,
    #[serde(default, rename = "battleType")]
    pub kind: BattleKind,
    #[serde(default)]
    pub player_trainer_id: Option<u64>,

    /// Active combatants when the page loads
    #[serde(default)]
    pub player_pokemon_id: Option<u64>,
    #[serde(default)]
    pub opponent_pokemon_id: Option<u64>,

    /// Combatants as rendered with the page
    #[serde(default)]
    pub player_pokemon: Option<CombatantSnapshot>,
    #[serde(default)]
    pub opponent_pokemon: Option<CombatantSnapshot>,

    /// Pokédex numbers, used for cries
    #[serde(default)]
    pub player_species_id: Option<u32>,
    #[serde(default)]
    pub opponent_species_id: Option<u32>,

    #[serde(default)]
    pub base_url: String,
    pub urls: Endpoints,

    #[serde(default)]
    pub timings: Timings,
}

impl BattleConfig {
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).context("Invalid battle configuration")
    }

    /// Resolve an endpoint against `base_url`
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Fixed delays, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    // Attack replay
    pub attack_delay: u64,
    pub attack_duration: u64,
    pub attack_gap: u64,
    pub attack_bounce: u64,

    // State synchronisation
    pub opponent_faint_hold: u64,
    pub entrance_cue: u64,
    pub forced_switch_hold: u64,
    pub switch_fade: u64,

    // Battle end and recovery
    pub victory_modal_delay: u64,
    pub defeat_modal_delay: u64,
    pub fled_modal_delay: u64,
    pub reload_grace: u64,
    pub flee_redirect: u64,

    pub learn_move_gap: u64,
    pub evolution: EvolutionTimings,
    pub capture: CaptureTimings,

    // Battle start
    pub entry_cue_delay: u64,
    pub opponent_cry_delay: u64,
    pub player_cry_delay: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            attack_delay: 300,
            attack_duration: 700,
            attack_gap: 400,
            attack_bounce: 600,
            opponent_faint_hold: 1400,
            entrance_cue: 600,
            forced_switch_hold: 1500,
            switch_fade: 500,
            victory_modal_delay: 1500,
            defeat_modal_delay: 1500,
            fled_modal_delay: 1000,
            reload_grace: 3000,
            flee_redirect: 2000,
            learn_move_gap: 400,
            evolution: EvolutionTimings::default(),
            capture: CaptureTimings::default(),
            entry_cue_delay: 100,
            opponent_cry_delay: 500,
            player_cry_delay: 1500,
        }
    }
}

impl Timings {
    /// Time between the start of two attack steps
    pub fn attack_step(&self) -> Duration {
        ms(self.attack_delay + self.attack_duration + self.attack_gap)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvolutionTimings {
    pub announce: u64,
    pub blink_count: u32,
    pub blink_on: u64,
    pub blink_off: u64,
    /// Full frame durations, each split half on and half off
    pub spin_frames: Vec<u64>,
    pub sustained_frame: u64,
    /// Position in the jingle where the transformation starts
    pub transform_at: u64,
    pub glow: u64,
    pub flash: u64,
    pub swap: u64,
    pub flash_off: u64,
    pub reveal: u64,
    /// Between closing the modal and showing a stashed battle end
    pub close_gap: u64,
}

impl Default for EvolutionTimings {
    fn default() -> Self {
        Self {
            announce: 1800,
            blink_count: 4,
            blink_on: 220,
            blink_off: 180,
            spin_frames: vec![
                1040, 980, 920, 860, 800, 740, 680, 620, 560, 500, 440, 380, 320, 260, 200, 160,
                130, 100, 80,
            ],
            sustained_frame: 30,
            transform_at: 14_000,
            glow: 300,
            flash: 350,
            swap: 200,
            flash_off: 400,
            reveal: 800,
            close_gap: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CaptureTimings {
    pub throw: u64,
    pub absorb: u64,
    pub drop: u64,
    pub shake: u64,
    pub shake_pause: u64,
    pub success: u64,
    pub success_hold: u64,
    pub escape_break: u64,
    pub escape_reappear: u64,
    pub escape_hold: u64,
    pub close: u64,
    pub success_modal_delay: u64,
}

impl Default for CaptureTimings {
    fn default() -> Self {
        Self {
            throw: 800,
            absorb: 800,
            drop: 300,
            shake: 500,
            shake_pause: 300,
            success: 600,
            success_hold: 3000,
            escape_break: 500,
            escape_reappear: 500,
            escape_hold: 2000,
            close: 300,
            success_modal_delay: 500,
        }
    }
}

pub(crate) fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub(crate) async fn wait(millis: u64) {
    tokio::time::sleep(ms(millis)).await;
}
