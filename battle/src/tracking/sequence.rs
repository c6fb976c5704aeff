//! Turn planning: which attacks to replay and in what order

use pokearena_protocol::{MoveInfo, Side, TurnResult};

use crate::effects::move_sound_key;

/// One attack to replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStep {
    pub actor: Side,
    /// None when the server did not describe the move
    pub move_info: Option<MoveInfo>,
}

impl SequenceStep {
    pub fn target(&self) -> Side {
        self.actor.other()
    }

    /// The move as played; unnamed special of type normal when absent
    pub fn move_or_default(&self) -> MoveInfo {
        self.move_info.clone().unwrap_or_default()
    }

    fn move_name(&self) -> Option<&str> {
        self.move_info
            .as_ref()
            .filter(|m| m.is_named())
            .map(|m| m.name.as_str())
    }

    /// `{name} utilise {move} !`, only for a named move
    pub fn log_line(&self, actor_name: &str) -> Option<String> {
        self.move_name()
            .map(|mv| format!("{actor_name} utilise {mv} !"))
    }

    pub fn sound_key(&self) -> Option<String> {
        self.move_name().and_then(move_sound_key)
    }
}

/// Ordered attack steps for a response.
///
/// Without `turn_info` there was no exchange and the plan is empty. Otherwise
/// the sides are taken in resolution order and a side is kept only if it
/// acted, so the plan has 0, 1 or 2 steps.
pub fn plan_turn(result: &TurnResult) -> Vec<SequenceStep> {
    let Some(info) = result.turn_info.as_ref() else {
        return Vec::new();
    };

    info.order()
        .into_iter()
        .filter(|side| info.acted(*side))
        .map(|actor| SequenceStep {
            actor,
            move_info: info.move_of(actor).cloned(),
        })
        .collect()
}
