//! The action response: one server-computed turn outcome

use serde::Deserialize;

use super::battle::{Side, TurnInfo};
use super::battle_state::VolatileSnapshot;
use super::capture::{CaptureAttempt, CaptureResult};
use super::request::{PendingEvolution, PendingMove};

/// A move known by the active combatant, as shown in the moves menu
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveSlot {
    pub id: u64,
    pub name: String,
    #[serde(default, rename = "type")]
    pub move_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub current_pp: u32,
    #[serde(default)]
    pub max_pp: u32,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
}

impl MoveSlot {
    /// A move with no PP left cannot be selected
    pub fn is_usable(&self) -> bool {
        self.current_pp > 0
    }
}

/// Full snapshot of an active combatant
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CombatantSnapshot {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub species_name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub current_hp: u32,
    #[serde(default)]
    pub max_hp: u32,
    #[serde(default)]
    pub is_shiny: bool,
    /// Only sent for the player's combatant
    #[serde(default)]
    pub moves: Option<Vec<MoveSlot>>,
    #[serde(default)]
    pub exp_percent: Option<f64>,
}

/// How a finished battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
    #[serde(other)]
    Unknown,
}

/// Response to any battle action
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TurnResult {
    /// Present only when an attack exchange happened
    #[serde(default)]
    pub turn_info: Option<TurnInfo>,

    #[serde(default)]
    pub player_hp: Option<u32>,
    #[serde(default)]
    pub player_max_hp: Option<u32>,
    #[serde(default)]
    pub opponent_hp: Option<u32>,
    #[serde(default)]
    pub opponent_max_hp: Option<u32>,

    #[serde(default)]
    pub player_pokemon: Option<CombatantSnapshot>,
    #[serde(default)]
    pub opponent_pokemon: Option<CombatantSnapshot>,

    /// Narration, oldest first
    #[serde(default)]
    pub log: Vec<String>,

    #[serde(default)]
    pub battle_state: Option<VolatileSnapshot>,

    #[serde(default)]
    pub pending_evolution: Option<PendingEvolution>,
    #[serde(default)]
    pub pending_moves: Vec<PendingMove>,

    #[serde(default)]
    pub battle_ended: bool,
    #[serde(default)]
    pub result: Option<BattleOutcome>,
    /// Legacy end-of-battle format: the winning trainer's id
    #[serde(default)]
    pub winner_id: Option<u64>,
    #[serde(default)]
    pub exp_gained: Option<u32>,

    /// Set by the flee action
    #[serde(default)]
    pub fled: Option<bool>,

    #[serde(default)]
    pub capture_attempt: Option<CaptureAttempt>,
    #[serde(default)]
    pub capture_result: Option<CaptureResult>,
}

impl TurnResult {
    /// Post-turn HP for a side as `(current, max)`, if the server sent it
    pub fn hp(&self, side: Side) -> Option<(u32, u32)> {
        let (hp, max) = match side {
            Side::Player => (self.player_hp, self.player_max_hp),
            Side::Opponent => (self.opponent_hp, self.opponent_max_hp),
        };
        let hp = hp?;
        let max = max.or_else(|| self.combatant(side).map(|c| c.max_hp))?;
        Some((hp, max))
    }

    pub fn combatant(&self, side: Side) -> Option<&CombatantSnapshot> {
        match side {
            Side::Player => self.player_pokemon.as_ref(),
            Side::Opponent => self.opponent_pokemon.as_ref(),
        }
    }

    /// Whether `side` was attacked this turn (false when there was no exchange)
    pub fn was_hit(&self, side: Side) -> bool {
        self.turn_info.as_ref().is_some_and(|ti| ti.was_hit(side))
    }

    pub fn has_pending_moves(&self) -> bool {
        !self.pending_moves.is_empty()
    }
}
