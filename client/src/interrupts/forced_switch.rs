use pokearena_protocol::{ActionRequest, RosterMember, Side};

use super::Flow;
use crate::config::wait;
use crate::controller::BattleController;
use crate::ports::{ForcedSwitchPrompt, SpriteCue};

impl BattleController {
    /// The player's combatant is down and the battle goes on: pick a
    /// replacement among the members still standing.
    ///
    /// There is no way out of the prompt. When nobody can take the field, or
    /// the roster cannot be loaded, the page reloads after the grace period.
    pub(crate) async fn forced_switch(&mut self) -> Flow {
        let timings = self.config.timings.clone();
        wait(timings.forced_switch_hold).await;

        let fainted_name = self.session.display_name(Side::Player).to_string();
        let team = match self.server.team(self.session.active_id(Side::Player)).await {
            Ok(team) => team,
            Err(e) => {
                tracing::error!(error = %e, "Roster unavailable for the forced switch");
                return self.abandon_switch("Erreur de chargement").await;
            }
        };
        if team.team.is_empty() {
            return self
                .abandon_switch("Aucun Pokémon disponible - Vous allez perdre!")
                .await;
        }

        let roster: Vec<RosterMember> = team.available_switches().into_iter().cloned().collect();
        if roster.is_empty() {
            return self
                .abandon_switch("Tous vos Pokémon sont K.O. - Défaite!")
                .await;
        }

        let prompt = ForcedSwitchPrompt {
            fainted_name,
            roster,
        };

        loop {
            let pokemon_id = self.dialogs.forced_switch(&prompt).await;
            if !prompt.roster.iter().any(|m| m.id == pokemon_id) {
                tracing::warn!(pokemon_id, "Picked a member that cannot battle");
                continue;
            }

            let request = ActionRequest::Switch {
                pokemon_id,
                forced: true,
            };
            match self.server.act(&request).await {
                Ok(mut next) => {
                    self.view.clear_cue(Side::Player, SpriteCue::Faint);
                    self.view.cue(Side::Player, SpriteCue::FadeOut);
                    wait(timings.switch_fade).await;
                    self.view.clear_cue(Side::Player, SpriteCue::FadeOut);

                    if let Some(incoming) = &next.player_pokemon {
                        next.log.push(format!("{} entre au combat !", incoming.name));
                    }
                    return Flow::Continue(next);
                }
                Err(e) => self.report_failure("Erreur lors du changement", &e),
            }
        }
    }

    async fn abandon_switch(&mut self, message: &str) -> Flow {
        tracing::error!(message, "Forced switch impossible, reloading");
        self.dialogs.forced_switch_notice(message).await;
        wait(self.config.timings.reload_grace).await;
        self.view.reload();
        Flow::Done
    }
}
