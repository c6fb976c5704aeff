//! Deciding what happens after a response has been shown

use pokearena_protocol::{BattleOutcome, PendingEvolution, Side, TurnResult};

use super::battle::BattleSession;
use super::updater::is_down;

/// How a finished battle is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleEnd {
    Victory { exp_gained: Option<u32> },
    Defeat,
    Fled,
    /// No known terminal shape; the page is reloaded
    Unrecognized,
}

impl BattleEnd {
    /// Classify a terminal response.
    ///
    /// `winner_id` is the older end format and only counts as a victory when
    /// it names the local trainer.
    pub fn classify(result: &TurnResult, player_trainer_id: Option<u64>) -> Self {
        match result.result {
            Some(BattleOutcome::Victory) => BattleEnd::Victory {
                exp_gained: result.exp_gained,
            },
            Some(BattleOutcome::Defeat) => BattleEnd::Defeat,
            Some(BattleOutcome::Fled) => BattleEnd::Fled,
            Some(BattleOutcome::Unknown) | None => match (result.winner_id, player_trainer_id) {
                (Some(winner), Some(me)) if winner == me => BattleEnd::Victory {
                    exp_gained: result.exp_gained,
                },
                _ => BattleEnd::Unrecognized,
            },
        }
    }

    pub fn log_line(&self) -> Option<&'static str> {
        match self {
            BattleEnd::Victory { .. } => Some("🎉 Vous avez gagné le combat !"),
            BattleEnd::Defeat => Some("💀 Vous avez perdu le combat..."),
            BattleEnd::Fled => Some("🏃 Vous avez fui le combat !"),
            BattleEnd::Unrecognized => None,
        }
    }

    /// Line shown in the victory modal
    pub fn exp_message(&self) -> Option<String> {
        match self {
            BattleEnd::Victory {
                exp_gained: Some(exp),
            } if *exp > 0 => Some(format!("Votre Pokémon a gagné {exp} EXP !")),
            _ => None,
        }
    }
}

/// The next step once a response has been synchronised
#[derive(Debug, Clone, PartialEq)]
pub enum Interrupt {
    Evolution(PendingEvolution),
    BattleEnd(BattleEnd),
    ForcedSwitch,
    LearnMove,
    Idle,
}

impl BattleSession {
    /// Pick the interrupt for a synchronised response.
    ///
    /// Priority: evolution, battle end, forced switch, move learning, idle.
    /// A battle end that arrives with an evolution is stashed and comes back
    /// from [`BattleSession::after_evolution`]. Pending moves are queued even
    /// when something else wins, and are offered once nothing outranks them.
    pub fn resolve_interrupt(&mut self, result: &TurnResult) -> Interrupt {
        self.enqueue_moves(&result.pending_moves);

        if let Some(evolution) = &result.pending_evolution {
            if result.battle_ended {
                self.stash_battle_end(result.clone());
            }
            return Interrupt::Evolution(evolution.clone());
        }

        if result.battle_ended {
            return self.end_battle(result);
        }

        if is_down(result, Side::Player) {
            return Interrupt::ForcedSwitch;
        }

        self.idle_or_learn()
    }

    /// Next step once the evolution modal is dismissed
    pub fn after_evolution(&mut self) -> Interrupt {
        match self.take_stashed_battle_end() {
            Some(result) => self.end_battle(&result),
            None => self.idle_or_learn(),
        }
    }

    /// Next step once a move decision was confirmed
    pub fn after_move_decision(&mut self) -> Interrupt {
        self.complete_pending_move();
        self.idle_or_learn()
    }

    fn end_battle(&mut self, result: &TurnResult) -> Interrupt {
        self.ended = true;
        Interrupt::BattleEnd(BattleEnd::classify(result, self.player_trainer_id))
    }

    fn idle_or_learn(&self) -> Interrupt {
        if self.has_pending_moves() {
            Interrupt::LearnMove
        } else {
            Interrupt::Idle
        }
    }
}
