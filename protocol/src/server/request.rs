//! Decisions the server asks the player to make
//!
//! These arrive inside a [`TurnResult`](super::TurnResult) (evolution, move
//! learning) or from the team endpoint (forced switch roster), together with
//! the replies to the matching confirmation actions.

use serde::Deserialize;

use super::turn::{CombatantSnapshot, MoveSlot};

/// The six base stats compared on the evolution result screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

/// The player's combatant is ready to evolve
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingEvolution {
    pub evolution_id: u64,
    pub from_name: String,
    pub to_name: String,
    #[serde(default)]
    pub is_shiny: bool,
    #[serde(default)]
    pub stats_before: StatBlock,
}

/// Reply to `confirm_evolution`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvolutionReply {
    #[serde(default)]
    pub stats_after: StatBlock,
    #[serde(default)]
    pub player_pokemon: Option<CombatantSnapshot>,
    #[serde(default)]
    pub log: Vec<String>,
}

/// A move the combatant currently knows, offered as a replacement target
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnownMove {
    pub id: u64,
    pub name: String,
    #[serde(default, rename = "type")]
    pub move_type: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: u32,
}

/// A move the combatant may learn; needs a replace-or-skip decision
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PendingMove {
    pub move_id: u64,
    pub move_name: String,
    #[serde(default)]
    pub move_type: String,
    #[serde(default)]
    pub move_power: Option<u32>,
    #[serde(default)]
    pub move_pp: u32,
    #[serde(default)]
    pub current_moves: Vec<KnownMove>,
}

/// Reply to `learn_move`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LearnMoveReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub moves: Option<Vec<MoveSlot>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Species {
    pub name: String,
}

/// A team member as listed by the team endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterMember {
    pub id: u64,
    #[serde(default)]
    pub nickname: Option<String>,
    pub species: Species,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub current_hp: u32,
    #[serde(default)]
    pub max_hp: u32,
    #[serde(default)]
    pub is_shiny: bool,
    #[serde(default)]
    pub status_condition: Option<String>,
}

impl RosterMember {
    /// Nickname if set, otherwise species name
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.species.name)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }
}

/// Reply from the team endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TeamReply {
    #[serde(default)]
    pub team: Vec<RosterMember>,
}

impl TeamReply {
    /// Members that can still battle
    pub fn available_switches(&self) -> Vec<&RosterMember> {
        self.team.iter().filter(|p| !p.is_fainted()).collect()
    }
}

/// An item in the trainer's bag
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventoryItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub item_type: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl InventoryItem {
    pub fn is_ball(&self) -> bool {
        self.item_type == "pokeball"
    }
}

/// Reply from the items endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemsReply {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}
