use thiserror::Error;

pub mod client;
pub mod server;

pub use client::{ActionRequest, MoveReplacement};
pub use server::{
    BattleOutcome, CaptureAttempt, CaptureResult, CaptureTarget, CapturedPokemon,
    CombatantSnapshot, EvolutionReply, InventoryItem, ItemsReply, KnownMove, LearnMoveReply,
    MoveCategory, MoveInfo, MoveSlot, PendingEvolution, PendingMove, RosterMember, Side,
    SideVolatiles, Species, Stat, StatBlock, TeamReply, TurnInfo, TurnResult, VolatileSnapshot,
    parse_evolution_reply, parse_items_reply, parse_learn_move_reply, parse_team_reply,
    parse_turn_result,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Empty message")]
    EmptyMessage,
}
