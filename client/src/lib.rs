//! Async orchestration of the battle screen.
//!
//! The server resolves every turn. This crate turns one action response into
//! what the player sees and hears, in order: the attack replay, the
//! authoritative state, then whatever the response leads to (evolution, end
//! of battle, forced switch, move learning).
//!
//! # Overview
//!
//! ```text
//! pokearena-protocol (wire format)
//!        │
//!        ▼
//! pokearena-battle (display state + planning)
//!        │
//!        ▼
//! pokearena-client (sequencer, audio, server calls) ← THIS CRATE
//! ```
//!
//! Rendering, dialogs, effects, audio playback and the server are
//! collaborators behind the traits in [`ports`]. [`HttpBattleServer`] talks
//! to the real endpoints; the rest is supplied by the embedding page.
//!
//! # Example Usage
//!
//! ```ignore
//! use pokearena_client::{BattleConfig, BattleController, Collaborators, HttpBattleServer};
//!
//! let config = BattleConfig::from_json(&page_json)?;
//! let server = Arc::new(HttpBattleServer::new(config.clone())?);
//! let (mut controller, handle) = BattleController::new(config, Collaborators {
//!     view, dialogs, effects, audio, server, settings,
//! });
//!
//! tokio::spawn(async move { controller.run().await });
//! handle.use_move(33)?;
//! ```

pub mod audio;
mod capture;
pub mod config;
mod controller;
pub mod error;
mod gate;
mod handle;
mod http;
mod interrupts;
pub mod notify;
pub mod ports;
mod sequencer;
pub mod storage;
mod synchronizer;

#[cfg(test)]
mod testing;

pub use audio::{AudioManager, BgmStatus, Volumes};
pub use config::{BattleConfig, BattleKind, Endpoints, Timings};
pub use controller::{BattleController, Collaborators, MenuKey, PlayerAction};
pub use error::{ActionRejected, ClientError, EffectError, PlaybackError};
pub use gate::{ActionGate, GatePass};
pub use handle::BattleHandle;
pub use http::HttpBattleServer;
pub use notify::{Toast, ToastKind};
pub use ports::{
    AudioBackend, BattleServer, BattleView, CaptureExit, CaptureStage, CaptureSuccess, Channel,
    Dialogs, EffectPlayer, EvolutionStage, ForcedSwitchPrompt, LearnMovePrompt, Menu,
    OutcomeDialog, SettingsStore, SpriteCue,
};
pub use storage::{JsonFileStore, MemoryStore};

// Re-export commonly used battle types
pub use pokearena_battle::{BattleSession, EffectRegistry};
pub use pokearena_protocol::{ActionRequest, Side, TurnResult};
