use pokearena_battle::stat_deltas;
use pokearena_protocol::{PendingEvolution, TurnResult};
use tokio::time::Instant;

use crate::audio::EVOLUTION_JINGLE;
use crate::config::wait;
use crate::controller::BattleController;
use crate::ports::EvolutionStage;

impl BattleController {
    /// Play the evolution modal from announcement to dismissal.
    ///
    /// The server is only told once the animation is over; a failed
    /// confirmation is logged and the modal closes the same way.
    pub(crate) async fn evolve(&mut self, evolution: &PendingEvolution) {
        let timings = self.config.timings.evolution.clone();
        tracing::info!(
            evolution_id = evolution.evolution_id,
            from = %evolution.from_name,
            to = %evolution.to_name,
            "Evolution started"
        );

        self.view.set_input_enabled(false);
        self.audio.stop_bgm();
        self.audio.play_jingle(EVOLUTION_JINGLE);
        let started = Instant::now();

        self.evolution_stage(EvolutionStage::Announce {
            from: evolution.from_name.clone(),
            to: evolution.to_name.clone(),
            shiny: evolution.is_shiny,
        });
        wait(timings.announce).await;

        for _ in 0..timings.blink_count {
            self.evolution_stage(EvolutionStage::Blink(true));
            wait(timings.blink_on).await;
            self.evolution_stage(EvolutionStage::Blink(false));
            wait(timings.blink_off).await;
        }

        self.evolution_stage(EvolutionStage::Silhouette);
        for &frame in &timings.spin_frames {
            let half = frame / 2;
            self.evolution_stage(EvolutionStage::Spin(true));
            wait(half).await;
            self.evolution_stage(EvolutionStage::Spin(false));
            wait(frame - half).await;
        }

        while !self.transform_reached(started, timings.transform_at) {
            self.evolution_stage(EvolutionStage::Spin(true));
            wait(timings.sustained_frame).await;
            self.evolution_stage(EvolutionStage::Spin(false));
            wait(timings.sustained_frame).await;
        }

        self.evolution_stage(EvolutionStage::Glow);
        wait(timings.glow).await;
        self.evolution_stage(EvolutionStage::Flash(true));
        wait(timings.flash).await;
        self.evolution_stage(EvolutionStage::Swap);
        wait(timings.swap).await;
        self.evolution_stage(EvolutionStage::Flash(false));
        wait(timings.flash_off).await;
        self.evolution_stage(EvolutionStage::Reveal);
        wait(timings.reveal).await;

        match self.server.confirm_evolution(evolution.evolution_id).await {
            Ok(reply) => {
                let deltas = stat_deltas(&evolution.stats_before, &reply.stats_after);
                self.evolution_stage(EvolutionStage::Result(deltas));

                let update = TurnResult {
                    player_pokemon: reply.player_pokemon,
                    log: reply.log,
                    ..TurnResult::default()
                };
                self.synchronize(&update).await;
                self.dialogs.evolution_result().await;
            }
            Err(e) => {
                tracing::error!(
                    evolution_id = evolution.evolution_id,
                    error = %e,
                    "Evolution confirmation failed"
                );
                self.narrate("Erreur lors de l'évolution.");
            }
        }

        self.audio.stop_jingle();
        self.evolution_stage(EvolutionStage::Closed);
    }

    /// Whether the sustained spin is over.
    ///
    /// Follows the jingle when its position is known, the wall clock
    /// otherwise. A stalled jingle never holds the spin past twice the mark.
    fn transform_reached(&self, started: Instant, transform_at: u64) -> bool {
        let elapsed = started.elapsed().as_millis() as u64;
        match self.audio.jingle_position_ms() {
            Some(position) => position >= transform_at || elapsed >= transform_at * 2,
            None => elapsed >= transform_at,
        }
    }

    fn evolution_stage(&self, stage: EvolutionStage) {
        self.view.evolution_stage(&stage);
    }
}
