mod battle;
mod battle_state;
mod capture;
mod request;
mod tests;
mod turn;

use crate::ParseError;
use anyhow::Result;
use serde::de::DeserializeOwned;

pub use battle::{MoveCategory, MoveInfo, Side, TurnInfo};
pub use battle_state::{SideVolatiles, Stat, VolatileSnapshot};
pub use capture::{CaptureAttempt, CaptureResult, CaptureTarget, CapturedPokemon};
pub use request::{
    EvolutionReply, InventoryItem, ItemsReply, KnownMove, LearnMoveReply, PendingEvolution,
    PendingMove, RosterMember, Species, StatBlock, TeamReply,
};
pub use turn::{BattleOutcome, CombatantSnapshot, MoveSlot, TurnResult};

/// Parse the body of an action response
pub fn parse_turn_result(body: &str) -> Result<TurnResult> {
    parse_body(body)
}

/// Parse the reply to `confirm_evolution`
pub fn parse_evolution_reply(body: &str) -> Result<EvolutionReply> {
    parse_body(body)
}

/// Parse the reply to a learn-move decision
pub fn parse_learn_move_reply(body: &str) -> Result<LearnMoveReply> {
    parse_body(body)
}

/// Parse the team endpoint's reply
pub fn parse_team_reply(body: &str) -> Result<TeamReply> {
    parse_body(body)
}

/// Parse the items endpoint's reply
pub fn parse_items_reply(body: &str) -> Result<ItemsReply> {
    parse_body(body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let body = body.trim();

    if body.is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }

    if !body.starts_with('{') {
        return Err(ParseError::InvalidFormat(format!(
            "expected a JSON object, got {:?}",
            body.chars().take(32).collect::<String>()
        ))
        .into());
    }

    serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()).into())
}
