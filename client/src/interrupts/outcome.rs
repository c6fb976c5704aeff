use pokearena_battle::BattleEnd;
use pokearena_battle::effects::particles::victory_burst;

use crate::audio::sfx;
use crate::config::wait;
use crate::controller::BattleController;
use crate::ports::OutcomeDialog;

impl BattleController {
    /// Stop the music, lock the panel and show the outcome modal.
    ///
    /// Input comes back when the modal is dismissed. An ending that matches
    /// no known shape reloads the page instead.
    pub(crate) async fn end_battle(&mut self, end: BattleEnd) {
        tracing::info!(battle_id = self.config.battle_id, ?end, "Battle ended");
        let timings = self.config.timings.clone();

        self.session.ended = true;
        self.audio.stop_bgm();
        self.view.set_input_enabled(false);
        if let Some(line) = end.log_line() {
            self.narrate(line);
        }

        let dialog = match end {
            BattleEnd::Victory { .. } => {
                let confetti = victory_burst(&mut self.rng, self.view.screen_center());
                self.effects.burst(confetti);
                self.audio.play_sfx(sfx::VICTORY);
                wait(timings.victory_modal_delay).await;
                OutcomeDialog::Victory {
                    exp_message: end.exp_message(),
                }
            }
            BattleEnd::Defeat => {
                self.audio.play_sfx(sfx::DEFEAT);
                wait(timings.defeat_modal_delay).await;
                OutcomeDialog::Defeat
            }
            BattleEnd::Fled => {
                wait(timings.fled_modal_delay).await;
                OutcomeDialog::Fled
            }
            BattleEnd::Unrecognized => {
                tracing::warn!(
                    battle_id = self.config.battle_id,
                    "Unknown battle end, reloading"
                );
                wait(timings.reload_grace).await;
                self.view.reload();
                return;
            }
        };

        self.dialogs.outcome(dialog).await;
        self.view.set_input_enabled(true);
    }
}
