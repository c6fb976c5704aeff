//! Showing the authoritative state of a response

use pokearena_battle::{OpponentChange, SyncReport};
use pokearena_protocol::{Side, TurnResult};

use crate::audio::sfx;
use crate::config::wait;
use crate::controller::BattleController;
use crate::ports::SpriteCue;

/// Experience gains below this many percent are drawn without the animation
const EXP_ANIMATION_THRESHOLD: f64 = 0.5;

impl BattleController {
    /// Apply a response to the session and render what changed.
    ///
    /// Only waits when the opponent's combatant is being replaced: the faint
    /// cue plays on the old sprite for `opponent_faint_hold` before
    /// the new one slides in.
    pub(crate) async fn synchronize(&mut self, result: &TurnResult) -> SyncReport {
        let previous_exp = self
            .session
            .player
            .active
            .as_ref()
            .and_then(|c| c.exp_percent);
        let report = self.session.apply_turn(result);
        let timings = &self.config.timings;

        if let Some(player) = &report.player_snapshot {
            self.view.render_combatant(Side::Player, player);
            self.view.render_hp(Side::Player, player.hp);
            if result.player_pokemon.as_ref().is_some_and(|p| p.moves.is_some()) {
                self.view.render_moves(&player.moves);
            }
            if let Some(exp) = player.exp_percent {
                let gained = !report.player_replaced
                    && exp > previous_exp.unwrap_or(0.0) + EXP_ANIMATION_THRESHOLD;
                if gained {
                    self.audio.play_sfx(sfx::EXP_GAIN);
                }
                self.view.render_exp(exp, gained);
            }
            if report.player_replaced {
                self.transient_cue(Side::Player, SpriteCue::Entrance, timings.entrance_cue);
            }
        }

        for update in &report.hp {
            self.view.render_hp(update.side, update.gauge);
            if update.damaged {
                self.transient_cue(update.side, SpriteCue::Damage, timings.attack_bounce);
            }
        }

        for &side in &report.fainted {
            tracing::debug!(%side, "Combatant fainted");
            self.view.cue(side, SpriteCue::Faint);
            self.audio.play_sfx(sfx::FAINT);
        }

        match &report.opponent {
            Some(OpponentChange::Refreshed) => {
                if let Some(opponent) = &self.session.opponent.active {
                    self.view.render_combatant(Side::Opponent, opponent);
                    self.view.render_hp(Side::Opponent, opponent.hp);
                }
            }
            Some(OpponentChange::Replaced { incoming }) => {
                let entrance = timings.entrance_cue;
                self.view.cue(Side::Opponent, SpriteCue::Faint);
                self.audio.play_sfx(sfx::FAINT);
                wait(timings.opponent_faint_hold).await;
                self.view.clear_cue(Side::Opponent, SpriteCue::Faint);
                tracing::debug!(name = %incoming.name, "Opponent replaced");
                self.view.render_combatant(Side::Opponent, incoming);
                self.view.render_hp(Side::Opponent, incoming.hp);
                self.transient_cue(Side::Opponent, SpriteCue::Entrance, entrance);
            }
            None => {}
        }

        if report.volatiles_updated {
            self.view.render_field(&self.session.field);
            for side in [Side::Player, Side::Opponent] {
                self.view.render_side_state(self.session.side(side));
            }
            for (side, change) in &report.stage_changes {
                self.view.flash_stage(*side, change);
            }
        }

        if !report.log.is_empty() {
            self.view.render_log(&self.session.log);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use pokearena_battle::{HpBand, HpGauge};
    use pokearena_protocol::{Side, TurnResult};

    use crate::ports::SpriteCue;
    use crate::testing::{Entry, Harness, ViewEvent, attack_result, snapshot};

    #[tokio::test(start_paused = true)]
    async fn test_hp_bars_take_absolute_values() {
        let mut harness = Harness::new();
        let mut result = attack_result(true, false);
        result.log = vec!["Le combat commence !".to_string()];

        harness.controller.synchronize(&result).await;
        harness.controller.synchronize(&result).await;

        let session = harness.controller.session();
        assert_eq!(session.player.hp, HpGauge::new(80, 100));
        assert_eq!(session.opponent.hp, HpGauge::new(50, 100));
        assert_eq!(session.player.hp.band(), HpBand::High);
        assert_eq!(session.opponent.hp.band(), HpBand::Medium);
        assert!(
            harness
                .view
                .events()
                .contains(&ViewEvent::Hp(Side::Opponent, HpGauge::new(50, 100)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_damage_cue_only_on_the_side_that_was_hit() {
        let mut harness = Harness::new();

        harness
            .controller
            .synchronize(&attack_result(true, true))
            .await;

        let damage: Vec<_> = harness
            .view
            .events()
            .into_iter()
            .filter(|e| matches!(e, ViewEvent::Cue(_, SpriteCue::Damage)))
            .collect();
        assert_eq!(damage, vec![ViewEvent::Cue(Side::Opponent, SpriteCue::Damage)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fainted_opponent_is_replaced_after_the_hold() {
        let mut harness = Harness::new();
        let result = TurnResult {
            opponent_hp: Some(30),
            opponent_max_hp: Some(30),
            opponent_pokemon: Some(snapshot(203, "Rattata", 30, 30)),
            ..attack_result(true, true)
        };

        harness.controller.synchronize(&result).await;

        let emptied = harness
            .journal
            .find(&Entry::View(ViewEvent::Hp(Side::Opponent, HpGauge::new(0, 100))))
            .unwrap();
        let incoming_hp = harness
            .journal
            .find(&Entry::View(ViewEvent::Hp(Side::Opponent, HpGauge::new(30, 30))))
            .unwrap();
        assert_eq!(emptied, 0);
        assert_eq!(incoming_hp, 1400);

        let faint = harness
            .journal
            .find(&Entry::View(ViewEvent::Cue(Side::Opponent, SpriteCue::Faint)))
            .unwrap();
        let swap = harness
            .journal
            .find(&Entry::View(ViewEvent::Combatant(
                Side::Opponent,
                "Rattata".to_string(),
            )))
            .unwrap();
        let entrance = harness
            .journal
            .find(&Entry::View(ViewEvent::Cue(Side::Opponent, SpriteCue::Entrance)))
            .unwrap();
        assert_eq!(faint, 0);
        assert_eq!(swap, 1400);
        assert_eq!(entrance, 1400);
        assert!(
            !harness
                .view
                .events()
                .contains(&ViewEvent::Cue(Side::Player, SpriteCue::Faint))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_opponent_is_refreshed_in_place() {
        let mut harness = Harness::new();
        let result = TurnResult {
            opponent_pokemon: Some(snapshot(202, "Roucool", 60, 100)),
            ..TurnResult::default()
        };

        let started = tokio::time::Instant::now();
        harness.controller.synchronize(&result).await;

        assert_eq!(started.elapsed().as_millis(), 0);
        let events = harness.view.events();
        assert!(!events.contains(&ViewEvent::Cue(Side::Opponent, SpriteCue::Entrance)));
        assert!(!events.contains(&ViewEvent::Cue(Side::Opponent, SpriteCue::Faint)));
        assert!(events.contains(&ViewEvent::Hp(Side::Opponent, HpGauge::new(60, 100))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exp_gain_is_animated() {
        let mut harness = Harness::new();
        let mut player = snapshot(101, "Salamèche", 80, 100);
        player.exp_percent = Some(40.0);
        let result = TurnResult {
            player_pokemon: Some(player.clone()),
            ..TurnResult::default()
        };
        harness.controller.synchronize(&result).await;

        player.exp_percent = Some(40.2);
        let result = TurnResult {
            player_pokemon: Some(player),
            ..TurnResult::default()
        };
        harness.controller.synchronize(&result).await;

        let exp: Vec<_> = harness
            .view
            .events()
            .into_iter()
            .filter(|e| matches!(e, ViewEvent::Exp(..)))
            .collect();
        assert_eq!(
            exp,
            vec![ViewEvent::Exp(40.0, true), ViewEvent::Exp(40.2, false)]
        );
    }
}
