//! Ball throw replay
//!
//! The server rolls the capture when the ball is used and sends the shake
//! count and the outcome with the item response. The overlay replays that
//! roll, then `confirm_capture` makes it final.

use pokearena_battle::effects::particles::impact_burst;
use pokearena_protocol::{ActionRequest, CaptureAttempt, CaptureResult};

use crate::audio::sfx;
use crate::config::wait;
use crate::controller::BattleController;
use crate::ports::{CaptureExit, CaptureStage, CaptureSuccess, Menu};

/// Shakes the ball can do before the outcome
const MAX_SHAKES: u8 = 3;
const STAR_COLOR: &str = "#FFD700";
const STAR_COUNT: usize = 20;

impl BattleController {
    pub(crate) async fn capture(&mut self, item_id: u64, attempt: CaptureAttempt) {
        let timings = self.config.timings.capture.clone();
        tracing::info!(
            ball = %attempt.ball_type,
            shakes = attempt.shakes,
            success = attempt.success,
            "Capture attempt"
        );

        self.view.show_menu(Menu::Main);
        self.capture_stage(CaptureStage::Open {
            target: attempt.pokemon.clone(),
            ball: attempt.ball_type.clone(),
            probability_percent: attempt.probability_percent(),
        });

        self.capture_stage(CaptureStage::Throw);
        wait(timings.throw).await;
        self.capture_stage(CaptureStage::Absorb);
        wait(timings.absorb).await;
        self.capture_stage(CaptureStage::Drop);
        wait(timings.drop).await;

        for _ in 0..attempt.shakes.min(MAX_SHAKES) {
            self.capture_stage(CaptureStage::Shake(true));
            wait(timings.shake).await;
            self.capture_stage(CaptureStage::Shake(false));
            wait(timings.shake_pause).await;
        }

        if attempt.success {
            self.capture_stage(CaptureStage::Success);
            wait(timings.success).await;
            let stars = impact_burst(
                &mut self.rng,
                self.view.screen_center(),
                STAR_COLOR,
                STAR_COUNT,
            );
            self.capture_stage(CaptureStage::Stars(stars));
            self.capture_stage(CaptureStage::Message {
                text: "Pokémon capturé !".to_string(),
                success: true,
            });
            wait(timings.success_hold).await;
        } else {
            self.capture_stage(CaptureStage::Escape);
            wait(timings.escape_break).await;
            self.capture_stage(CaptureStage::Reappear);
            wait(timings.escape_reappear).await;
            self.capture_stage(CaptureStage::Message {
                text: "Le Pokémon s'est échappé !".to_string(),
                success: false,
            });
            wait(timings.escape_hold).await;
        }

        self.capture_stage(CaptureStage::Closed);
        wait(timings.close).await;

        let mut result = match self
            .server
            .act(&ActionRequest::ConfirmCapture { item_id })
            .await
        {
            Ok(result) => result,
            Err(e) => {
                self.report_failure("Erreur lors de la capture", &e);
                return;
            }
        };

        match result.capture_result.take() {
            Some(capture) if capture.success => {
                self.captured(capture, &attempt, timings.success_modal_delay)
                    .await
            }
            Some(capture) => {
                if !capture.message.is_empty() {
                    self.narrate(capture.message);
                }
                self.audio.play_sfx(sfx::CAPTURE_FAILED);
                self.replay(result).await;
            }
            None => {
                tracing::warn!("Capture confirmed without a result");
                self.replay(result).await;
            }
        }
    }

    /// The combatant is caught: the battle is over
    async fn captured(&mut self, capture: CaptureResult, attempt: &CaptureAttempt, delay: u64) {
        self.session.ended = true;
        if !capture.message.is_empty() {
            self.narrate(capture.message.clone());
        }
        self.audio.stop_bgm();
        self.audio.play_sfx(sfx::CAPTURE_SUCCESS);
        wait(delay).await;

        let (name, level_label) = match &capture.captured_pokemon {
            Some(pokemon) => (pokemon.name.clone(), format!("Niveau {}", pokemon.level)),
            None => (attempt.pokemon.species_name.clone(), String::new()),
        };
        let success = CaptureSuccess {
            title: format!("{name} capturé !"),
            level_label,
            first_catch: capture.is_first_catch,
            note: "Le Pokémon a été envoyé dans votre PC",
        };

        let urls = &self.config.urls;
        let target = match self.dialogs.capture_success(&success).await {
            CaptureExit::MyTeam => urls.my_team.as_deref().unwrap_or(urls.return_zone.as_str()),
            CaptureExit::ReturnZone => urls.return_zone.as_str(),
        };
        self.view.navigate(&self.config.url(target));
    }

    fn capture_stage(&self, stage: CaptureStage) {
        self.view.capture_stage(&stage);
    }
}
