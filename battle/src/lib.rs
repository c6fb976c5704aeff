//! Display state and turn planning for the battle screen.
//!
//! This crate holds everything the presentation layer knows about a battle
//! without doing any I/O or waiting: the owned session state, the pure
//! reducer that applies a server response to it, the turn planner, and the
//! move-effect registry.
//!
//! # Overview
//!
//! `pokearena-battle` sits between `pokearena-protocol` (wire format) and the
//! asynchronous orchestration:
//!
//! ```text
//! pokearena-protocol (wire format)
//!        │
//!        ▼
//! pokearena-battle (display state + planning) ← THIS CRATE
//!        │
//!        ▼
//! pokearena-client (sequencer, audio, server calls)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`StatStages`] - Stat stage modifiers (-6 to +6) with the multiplier table
//! - [`Weather`], [`Screen`] - Field and side conditions
//! - [`Volatile`] - Volatile badges (confusion, leech seed, ...)
//! - [`HpGauge`], [`HpBand`] - HP bars and their colour bands
//! - [`SideView`], [`FieldState`] - What is drawn for each side and the field
//! - [`BattleLog`] - Ten most recent narration lines
//!
//! ## Tracking
//! - [`BattleSession`] - Owned display state; [`BattleSession::apply_turn`]
//!   returns a [`SyncReport`] of what to render
//! - [`plan_turn`] - Ordered [`SequenceStep`]s for the attack replay
//! - [`Interrupt`] - What follows a response (evolution, battle end, ...)
//!
//! ## Effects
//! - [`EffectRegistry`] - Move to [`EffectDescriptor`], total
//! - [`effects::particles`] - Particle physics for bursts and confetti
//!
//! # Example Usage
//!
//! ```ignore
//! use pokearena_battle::{BattleSession, plan_turn};
//! use pokearena_protocol::parse_turn_result;
//!
//! let mut session = BattleSession::new(Some(player_id), Some(opponent_id));
//! let result = parse_turn_result(&body)?;
//!
//! for step in plan_turn(&result) {
//!     println!("{} attacks", step.actor);
//! }
//!
//! let report = session.apply_turn(&result);
//! if report.forced_switch_required {
//!     println!("pick a replacement");
//! }
//! ```

pub mod effects;
pub mod log;
pub mod tracking;
pub mod types;

pub use effects::{EffectDescriptor, EffectKind, EffectRegistry, move_sound_key};
pub use log::{BattleLog, LOG_CAPACITY};
pub use tracking::{
    BattleEnd, BattleSession, HpUpdate, Interrupt, OpponentChange, SequenceStep, SyncReport,
    is_down, plan_turn,
};
pub use types::{
    CombatantView, FieldState, HpBand, HpGauge, Screen, SideView, StageChange, StageFlash,
    StageRow, StatDelta, StatStages, Type, Volatile, Weather, stat_deltas,
};

// Re-export commonly used protocol types
pub use pokearena_protocol::{Side, Stat};
