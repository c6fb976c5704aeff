//! Applying a server response to the displayed state

use pokearena_protocol::{Side, TurnResult};

use super::battle::BattleSession;
use crate::types::{CombatantView, HpGauge, StageChange};

/// New HP bar value for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpUpdate {
    pub side: Side,
    pub gauge: HpGauge,
    /// Play the taking-damage cue
    pub damaged: bool,
}

/// What happened to the opponent's displayed combatant
#[derive(Debug, Clone, PartialEq)]
pub enum OpponentChange {
    /// Same combatant, redrawn in place
    Refreshed,
    /// A different combatant took the field.
    ///
    /// Opponents are only ever replaced after fainting, so the outgoing
    /// sprite plays the faint cue and holds before the swap.
    Replaced { incoming: CombatantView },
}

/// Everything the view has to show for one response, in render order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Player combatant redrawn from a snapshot
    pub player_snapshot: Option<CombatantView>,
    /// The snapshot is a different combatant than before
    pub player_replaced: bool,

    pub hp: Vec<HpUpdate>,

    /// Sides that play the faint cue on their current sprite
    pub fainted: Vec<Side>,

    pub opponent: Option<OpponentChange>,

    /// Whether a volatile snapshot was applied
    pub volatiles_updated: bool,
    pub stage_changes: Vec<(Side, StageChange)>,

    /// Lines appended to the log, oldest first
    pub log: Vec<String>,

    /// The player's combatant is down and the battle goes on
    pub forced_switch_required: bool,
}

impl SyncReport {
    pub fn hp_of(&self, side: Side) -> Option<&HpUpdate> {
        self.hp.iter().find(|u| u.side == side)
    }
}

/// Whether `side`'s active combatant is at 0 HP according to this response.
///
/// The explicit HP field wins over the snapshot.
pub fn is_down(result: &TurnResult, side: Side) -> bool {
    match result.hp(side) {
        Some((hp, _)) => hp == 0,
        None => result
            .combatant(side)
            .is_some_and(|c| c.current_hp == 0 && c.max_hp > 0),
    }
}

impl BattleSession {
    /// Apply a response to the displayed state.
    ///
    /// Only absolute values are written, so applying the same response twice
    /// leaves HP and stages where the first application put them.
    pub fn apply_turn(&mut self, result: &TurnResult) -> SyncReport {
        let mut report = SyncReport::default();

        // Player snapshot first, explicit HP after it
        if let Some(snapshot) = &result.player_pokemon {
            let replaced = self.player_id.is_some_and(|id| id != snapshot.id);
            if replaced {
                self.player.clear_combat_state();
            }
            self.player_id = Some(snapshot.id);
            let view = match self.player.active.take() {
                Some(mut current) if !replaced => {
                    current.refresh(snapshot);
                    current
                }
                _ => CombatantView::from_snapshot(snapshot),
            };
            self.player.show(view.clone());
            report.player_snapshot = Some(view);
            report.player_replaced = replaced;
        }

        let opponent_replaced = result
            .opponent_pokemon
            .as_ref()
            .is_some_and(|s| self.opponent_id.is_some_and(|id| id != s.id));
        let outgoing_max = self.opponent.hp.max;

        for side in [Side::Player, Side::Opponent] {
            if let Some((current, max)) = result.hp(side) {
                let gauge = HpGauge::new(current, max);
                self.side_mut(side).set_hp(gauge);
                // The incoming opponent's HP is drawn after the swap; the outgoing bar empties
                let shown = if side == Side::Opponent && opponent_replaced {
                    HpGauge::new(0, if outgoing_max > 0 { outgoing_max } else { max })
                } else {
                    gauge
                };
                report.hp.push(HpUpdate {
                    side,
                    gauge: shown,
                    damaged: result.was_hit(side) && !shown.is_full(),
                });
            }
        }

        if is_down(result, Side::Player) {
            report.fainted.push(Side::Player);
        }

        // Opponent snapshot after its HP
        if let Some(snapshot) = &result.opponent_pokemon {
            self.opponent_id = Some(snapshot.id);

            if opponent_replaced {
                let mut incoming = CombatantView::from_snapshot(snapshot);
                if let Some((current, max)) = result.hp(Side::Opponent) {
                    incoming.hp = HpGauge::new(current, max);
                }
                self.opponent.clear_combat_state();
                self.opponent.show(incoming.clone());
                report.opponent = Some(OpponentChange::Replaced { incoming });
            } else {
                let view = match self.opponent.active.take() {
                    Some(mut current) => {
                        current.refresh(snapshot);
                        current
                    }
                    None => CombatantView::from_snapshot(snapshot),
                };
                self.opponent.show(view);
                report.opponent = Some(OpponentChange::Refreshed);
            }
        }

        if !opponent_replaced && self.opponent.hp.max > 0 && self.opponent.hp.is_fainted() {
            report.fainted.push(Side::Opponent);
        }

        if let Some(snapshot) = &result.battle_state {
            self.field.apply(snapshot);
            for side in [Side::Player, Side::Opponent] {
                let changes = self.side_mut(side).apply_volatiles(snapshot.side(side));
                report
                    .stage_changes
                    .extend(changes.into_iter().map(|c| (side, c)));
            }
            report.volatiles_updated = true;
        }

        self.log.extend(result.log.iter().cloned());
        report.log = result.log.clone();

        report.forced_switch_required = is_down(result, Side::Player) && !result.battle_ended;
        report
    }
}
