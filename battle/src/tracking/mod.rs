//! Display-state tracking from server responses

mod battle;
mod interrupt;
mod sequence;
mod updater;

pub use battle::BattleSession;
pub use interrupt::{BattleEnd, Interrupt};
pub use sequence::{SequenceStep, plan_turn};
pub use updater::{HpUpdate, OpponentChange, SyncReport, is_down};
