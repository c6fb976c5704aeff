//! BattleSession - the owned display state of one battle

use std::collections::VecDeque;

use pokearena_protocol::{PendingMove, Side, TurnResult};

use crate::log::BattleLog;
use crate::types::{FieldState, SideView};

/// Everything the presentation layer remembers between two server responses.
///
/// The server is authoritative; this only records what is currently shown
/// (active combatant ids, HP, stages, log) plus the interrupt bookkeeping
/// that spans several responses.
#[derive(Debug, Clone)]
pub struct BattleSession {
    /// Trainer id used by the legacy `winner_id` end format
    pub player_trainer_id: Option<u64>,

    /// Active combatant ids; these decide whether a snapshot is a refresh or
    /// a replacement
    pub(crate) player_id: Option<u64>,
    pub(crate) opponent_id: Option<u64>,

    pub player: SideView,
    pub opponent: SideView,

    pub field: FieldState,

    pub log: BattleLog,

    /// Moves waiting for a learn/skip decision, oldest first
    pub(crate) pending_moves: VecDeque<PendingMove>,

    /// Battle end that arrived together with an evolution
    pub(crate) stashed_battle_end: Option<TurnResult>,

    /// Set once the battle-end path has been entered
    pub ended: bool,
}

impl BattleSession {
    /// Create a new session for the combatants the page was rendered with
    pub fn new(player_id: Option<u64>, opponent_id: Option<u64>) -> Self {
        Self {
            player_trainer_id: None,
            player_id,
            opponent_id,
            player: SideView::new(Side::Player),
            opponent: SideView::new(Side::Opponent),
            field: FieldState::new(),
            log: BattleLog::new(),
            pending_moves: VecDeque::new(),
            stashed_battle_end: None,
            ended: false,
        }
    }

    pub fn with_trainer(mut self, trainer_id: Option<u64>) -> Self {
        self.player_trainer_id = trainer_id;
        self
    }

    pub fn active_id(&self, side: Side) -> Option<u64> {
        match side {
            Side::Player => self.player_id,
            Side::Opponent => self.opponent_id,
        }
    }

    pub fn side(&self, side: Side) -> &SideView {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideView {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Name shown above a side's HP bar, empty if not rendered yet
    pub fn display_name(&self, side: Side) -> &str {
        self.side(side)
            .active
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line);
    }

    // === Move learning queue ===

    pub fn enqueue_moves(&mut self, moves: &[PendingMove]) {
        self.pending_moves.extend(moves.iter().cloned());
    }

    pub fn has_pending_moves(&self) -> bool {
        !self.pending_moves.is_empty()
    }

    /// The move currently offered, without removing it
    pub fn current_pending_move(&self) -> Option<&PendingMove> {
        self.pending_moves.front()
    }

    /// Drop the front move once the server confirmed a decision
    pub fn complete_pending_move(&mut self) -> Option<PendingMove> {
        self.pending_moves.pop_front()
    }

    pub fn pending_move_count(&self) -> usize {
        self.pending_moves.len()
    }

    // === Evolution / battle end ===

    pub fn stash_battle_end(&mut self, result: TurnResult) {
        self.stashed_battle_end = Some(result);
    }

    pub fn take_stashed_battle_end(&mut self) -> Option<TurnResult> {
        self.stashed_battle_end.take()
    }

    pub fn has_stashed_battle_end(&self) -> bool {
        self.stashed_battle_end.is_some()
    }
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new(None, None)
    }
}
