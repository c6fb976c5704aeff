use pokearena_battle::Interrupt;
use pokearena_protocol::{MoveReplacement, PendingMove, Side};

use crate::config::wait;
use crate::controller::BattleController;
use crate::ports::LearnMovePrompt;

/// What the learn-move modal shows for one queued move
pub(crate) fn learn_move_prompt(pokemon_name: &str, pending: &PendingMove) -> LearnMovePrompt {
    let power_label = match pending.move_power {
        Some(power) => format!("Puissance : {power}"),
        None => "Puissance : —".to_string(),
    };

    LearnMovePrompt {
        pokemon_name: pokemon_name.to_string(),
        move_name: pending.move_name.clone(),
        type_badge: pending.move_type.to_uppercase(),
        power_label,
        pp_label: format!("PP : {}", pending.move_pp),
        current_moves: pending.current_moves.clone(),
    }
}

impl BattleController {
    /// Offer the move at the front of the queue.
    ///
    /// The move leaves the queue only once the server confirmed the choice;
    /// a failed confirmation offers the same move again.
    pub(crate) async fn learn_next_move(&mut self) -> Interrupt {
        let Some(pending) = self.session.current_pending_move().cloned() else {
            return Interrupt::Idle;
        };
        let Some(pokemon_id) = self.session.active_id(Side::Player) else {
            tracing::warn!(move_id = pending.move_id, "No combatant to teach the move to");
            return self.session.after_move_decision();
        };

        let prompt = learn_move_prompt(self.session.display_name(Side::Player), &pending);

        loop {
            let choice = self.dialogs.learn_move(&prompt).await;
            match self
                .server
                .learn_move(pokemon_id, pending.move_id, choice)
                .await
            {
                Ok(reply) => {
                    let line = reply.message.unwrap_or_else(|| match choice {
                        MoveReplacement::Replace(_) => "Capacité apprise !".to_string(),
                        MoveReplacement::Skip => "Capacité ignorée.".to_string(),
                    });
                    self.narrate(line);

                    if let Some(moves) = reply.moves {
                        self.view.render_moves(&moves);
                        if let Some(active) = self.session.player.active.as_mut() {
                            active.moves = moves;
                        }
                    }

                    wait(self.config.timings.learn_move_gap).await;
                    return self.session.after_move_decision();
                }
                Err(e) => {
                    let line = match choice {
                        MoveReplacement::Replace(_) => "Erreur lors de l'apprentissage du move.",
                        MoveReplacement::Skip => "Erreur.",
                    };
                    self.report_failure(line, &e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Harness, ServerCall, ViewEvent, pending_move};

    #[test]
    fn test_prompt_labels() {
        let mut pending = pending_move(31, "Lance-Flammes");
        pending.move_type = "fire".to_string();
        pending.move_power = Some(90);
        pending.move_pp = 15;

        let prompt = learn_move_prompt("Salamèche", &pending);
        assert_eq!(prompt.type_badge, "FIRE");
        assert_eq!(prompt.power_label, "Puissance : 90");
        assert_eq!(prompt.pp_label, "PP : 15");

        pending.move_power = None;
        assert_eq!(
            learn_move_prompt("Salamèche", &pending).power_label,
            "Puissance : —"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_confirmation_offers_the_move_again() {
        let mut harness = Harness::new();
        harness
            .controller
            .session
            .enqueue_moves(&[pending_move(31, "Griffe")]);
        harness.server.fail_learn_moves(1);
        harness.dialogs.answer_learn_move(MoveReplacement::Replace(2));
        harness.dialogs.answer_learn_move(MoveReplacement::Skip);

        assert_eq!(harness.controller.learn_next_move().await, Interrupt::Idle);

        assert_eq!(
            harness.server.calls(),
            vec![
                ServerCall::LearnMove(101, 31, MoveReplacement::Replace(2)),
                ServerCall::LearnMove(101, 31, MoveReplacement::Skip),
            ]
        );
        assert!(harness.view.events().contains(&ViewEvent::Toast(
            "Erreur lors de l'apprentissage du move.".to_string()
        )));
        assert_eq!(
            harness.controller.session().log.latest(),
            Some("Capacité ignorée.")
        );
        assert!(!harness.controller.session().has_pending_moves());
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_message_and_moves_are_shown() {
        let mut harness = Harness::new();
        harness
            .controller
            .session
            .enqueue_moves(&[pending_move(31, "Griffe")]);
        harness
            .server
            .set_learn_move_reply(pokearena_protocol::LearnMoveReply {
                message: Some("Salamèche a appris Griffe !".to_string()),
                moves: Some(Vec::new()),
            });

        assert_eq!(harness.controller.learn_next_move().await, Interrupt::Idle);
        assert_eq!(
            harness.controller.session().log.latest(),
            Some("Salamèche a appris Griffe !")
        );
        assert!(
            harness
                .view
                .events()
                .contains(&ViewEvent::Moves(0))
        );
    }
}
