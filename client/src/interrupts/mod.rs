//! What follows a synchronised response
//!
//! [`BattleSession::resolve_interrupt`](pokearena_battle::BattleSession::resolve_interrupt)
//! picks the next step; this module plays it. Priority is evolution, battle
//! end, forced switch, move learning, then idle. Only idle and the battle
//! end leave the loop; a forced switch feeds the switch response back into
//! it.

mod evolution;
mod forced_switch;
mod learn_move;
mod outcome;

use pokearena_battle::Interrupt;
use pokearena_protocol::TurnResult;

use crate::config::wait;
use crate::controller::BattleController;

/// Where the resolver goes after an interrupt
#[derive(Debug)]
pub(crate) enum Flow {
    Done,
    /// Synchronise this response and resolve again
    Continue(TurnResult),
}

impl BattleController {
    /// Synchronise a response and play whatever it leads to, down to idle or
    /// the end of the battle
    pub(crate) async fn settle(&mut self, result: TurnResult) {
        let mut result = result;
        loop {
            self.synchronize(&result).await;
            let interrupt = self.session.resolve_interrupt(&result);
            tracing::debug!(?interrupt, "Resolving interrupt");

            match self.resolve(interrupt).await {
                Flow::Done => return,
                Flow::Continue(next) => result = next,
            }
        }
    }

    async fn resolve(&mut self, interrupt: Interrupt) -> Flow {
        let mut interrupt = interrupt;
        loop {
            interrupt = match interrupt {
                Interrupt::Evolution(evolution) => {
                    self.evolve(&evolution).await;
                    let next = self.session.after_evolution();
                    if matches!(next, Interrupt::BattleEnd(_)) {
                        wait(self.config.timings.evolution.close_gap).await;
                    }
                    next
                }
                Interrupt::BattleEnd(end) => {
                    self.end_battle(end).await;
                    return Flow::Done;
                }
                Interrupt::ForcedSwitch => return self.forced_switch().await,
                Interrupt::LearnMove => self.learn_next_move().await,
                Interrupt::Idle => {
                    self.idle();
                    return Flow::Done;
                }
            };
        }
    }
}
