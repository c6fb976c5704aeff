//! Attack replay
//!
//! Each step runs on a fixed schedule measured from its own start:
//!
//! ```text
//! 0                 log line, effect layer cleared, attacker bounce
//! attack_delay      effect and move sound start
//! attack_step()     next step
//! ```
//!
//! The effect is drawn on a spawned task, so a slow or failing effect never
//! moves the schedule.

use pokearena_battle::plan_turn;
use pokearena_protocol::TurnResult;
use tokio::time::{Instant, sleep_until};

use crate::config::ms;
use crate::controller::BattleController;
use crate::ports::SpriteCue;

impl BattleController {
    /// Replay the attack exchange of a response, one step after the other
    pub(crate) async fn play_turn(&mut self, result: &TurnResult) {
        let steps = plan_turn(result);
        if steps.is_empty() {
            tracing::debug!("No attack exchange to replay");
            return;
        }

        let attack_delay = ms(self.config.timings.attack_delay);
        let attack_bounce = self.config.timings.attack_bounce;
        let step_length = self.config.timings.attack_step();

        for step in steps {
            let started = Instant::now();
            let actor_name = self.session.display_name(step.actor).to_string();

            if let Some(line) = step.log_line(&actor_name) {
                self.narrate(line);
            }
            self.effects.clear();
            self.transient_cue(step.actor, SpriteCue::Attack, attack_bounce);

            sleep_until(started + attack_delay).await;

            let effect = self.registry.resolve(&step.move_or_default());
            let from = self.view.sprite_center(step.actor);
            let to = self.view.sprite_center(step.target());
            tracing::debug!(actor = %step.actor, effect = %effect.kind, "Attack step");

            let effects = self.effects.clone();
            tokio::spawn(async move {
                if let Err(e) = effects.play(&effect, from, to).await {
                    tracing::warn!(effect = %effect.kind, error = %e, "Effect skipped");
                }
            });

            if let Some(sound) = step.sound_key() {
                self.audio.play_sfx(&sound);
            }

            sleep_until(started + step_length).await;
        }
    }
}
