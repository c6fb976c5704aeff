//! Collaborators the orchestration drives
//!
//! Rendering, audio playback, modal dialogs and the battle server are black
//! boxes behind these traits. Render and audio calls are synchronous and
//! return immediately; dialogs and server calls are awaited.
//!
//! [`BattleView`] and [`Dialogs`] methods have default no-op implementations,
//! so an implementation only overrides what it draws.
//!
//! # Example
//!
//! ```ignore
//! struct Terminal;
//!
//! impl BattleView for Terminal {
//!     fn render_log(&self, log: &BattleLog) {
//!         for line in log.entries() {
//!             println!("{line}");
//!         }
//!     }
//! }
//! ```

use anyhow::Result;
use async_trait::async_trait;
use pokearena_battle::effects::particles::{Particle, Point};
use pokearena_battle::{
    BattleLog, CombatantView, EffectDescriptor, FieldState, HpGauge, SideView, StageChange,
    StatDelta,
};
use pokearena_protocol::{
    ActionRequest, CaptureTarget, EvolutionReply, InventoryItem, KnownMove, LearnMoveReply,
    MoveReplacement, MoveSlot, RosterMember, Side, TeamReply, TurnResult,
};

use crate::error::{EffectError, PlaybackError};
use crate::notify::Toast;

/// Menus of the action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Moves,
    Team,
    Items,
}

/// Short-lived classes on a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteCue {
    /// Attacker bounce
    Attack,
    Damage,
    Faint,
    /// Slide in after a replacement or at battle start
    Entrance,
    FadeOut,
}

/// What the evolution modal shows, in order
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionStage {
    Announce {
        from: String,
        to: String,
        shiny: bool,
    },
    Blink(bool),
    Silhouette,
    Spin(bool),
    Glow,
    Flash(bool),
    /// The evolved form replaces the old one under the flash
    Swap,
    Reveal,
    Result(Vec<StatDelta>),
    Closed,
}

/// What the capture overlay shows, in order
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureStage {
    Open {
        target: CaptureTarget,
        ball: String,
        probability_percent: f64,
    },
    Throw,
    Absorb,
    Drop,
    Shake(bool),
    Success,
    Stars(Vec<Particle>),
    Escape,
    Reappear,
    Message {
        text: String,
        success: bool,
    },
    Closed,
}

/// Victory, defeat and fled modals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeDialog {
    Victory { exp_message: Option<String> },
    Defeat,
    Fled,
}

/// The mandatory replacement list
#[derive(Debug, Clone, PartialEq)]
pub struct ForcedSwitchPrompt {
    pub fainted_name: String,
    pub roster: Vec<RosterMember>,
}

/// One queued move offered to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnMovePrompt {
    pub pokemon_name: String,
    pub move_name: String,
    /// Upper-cased type badge
    pub type_badge: String,
    pub power_label: String,
    pub pp_label: String,
    pub current_moves: Vec<KnownMove>,
}

/// Contents of the capture success modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSuccess {
    pub title: String,
    pub level_label: String,
    pub first_catch: bool,
    pub note: &'static str,
}

/// Where to go from the capture success modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureExit {
    ReturnZone,
    MyTeam,
}

/// DOM bindings for the battle screen. Pure render, no decisions.
pub trait BattleView: Send + Sync {
    fn set_input_enabled(&self, enabled: bool) {
        let _ = enabled;
    }

    fn show_menu(&self, menu: Menu) {
        let _ = menu;
    }

    /// Centre of a side's sprite, where effects start and land
    fn sprite_center(&self, side: Side) -> Point {
        let _ = side;
        Point::default()
    }

    fn render_combatant(&self, side: Side, combatant: &CombatantView) {
        let _ = (side, combatant);
    }

    fn render_hp(&self, side: Side, gauge: HpGauge) {
        let _ = (side, gauge);
    }

    fn screen_center(&self) -> Point {
        Point::default()
    }

    fn cue(&self, side: Side, cue: SpriteCue) {
        let _ = (side, cue);
    }

    fn clear_cue(&self, side: Side, cue: SpriteCue) {
        let _ = (side, cue);
    }

    fn render_moves(&self, moves: &[MoveSlot]) {
        let _ = moves;
    }

    /// `animated` is set when experience went up
    fn render_exp(&self, percent: f64, animated: bool) {
        let _ = (percent, animated);
    }

    fn render_side_state(&self, view: &SideView) {
        let _ = view;
    }

    fn render_field(&self, field: &FieldState) {
        let _ = field;
    }

    fn flash_stage(&self, side: Side, change: &StageChange) {
        let _ = (side, change);
    }

    fn render_log(&self, log: &BattleLog) {
        let _ = log;
    }

    fn render_team(&self, team: &TeamReply) {
        let _ = team;
    }

    fn render_items(&self, items: &[InventoryItem]) {
        let _ = items;
    }

    /// A menu's content could not be loaded
    fn menu_error(&self, menu: Menu, message: &str) {
        let _ = (menu, message);
    }

    fn evolution_stage(&self, stage: &EvolutionStage) {
        let _ = stage;
    }

    fn capture_stage(&self, stage: &CaptureStage) {
        let _ = stage;
    }

    fn toast(&self, toast: &Toast) {
        let _ = toast;
    }

    /// Music is waiting for a first click
    fn audio_prompt(&self, visible: bool) {
        let _ = visible;
    }

    fn now_playing(&self, label: &str, playing: bool) {
        let _ = (label, playing);
    }

    fn navigate(&self, url: &str) {
        let _ = url;
    }

    fn reload(&self) {}
}

/// Modal dialogs. Each call resolves when the player answers.
#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn confirm(&self, question: &str) -> bool {
        let _ = question;
        true
    }

    /// Resolves when the modal is dismissed
    async fn outcome(&self, dialog: OutcomeDialog) {
        let _ = dialog;
    }

    /// Pick the replacement; there is no cancel
    async fn forced_switch(&self, prompt: &ForcedSwitchPrompt) -> u64;

    /// Replace the forced-switch list with a message
    async fn forced_switch_notice(&self, message: &str) {
        let _ = message;
    }

    async fn learn_move(&self, prompt: &LearnMovePrompt) -> MoveReplacement {
        let _ = prompt;
        MoveReplacement::Skip
    }

    /// Resolves when the evolution result is dismissed
    async fn evolution_result(&self) {}

    async fn capture_success(&self, success: &CaptureSuccess) -> CaptureExit {
        let _ = success;
        CaptureExit::ReturnZone
    }
}

/// Draws move effects between two screen points
#[async_trait]
pub trait EffectPlayer: Send + Sync {
    /// Resolves when the effect has finished drawing
    async fn play(
        &self,
        effect: &EffectDescriptor,
        from: Point,
        to: Point,
    ) -> Result<(), EffectError>;

    /// Drop leftover effect nodes
    fn clear(&self) {}

    fn burst(&self, particles: Vec<Particle>) {
        let _ = particles;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Bgm,
    Sfx,
    Cry,
    /// Evolution jingle
    Jingle,
}

/// Audio playback substrate
pub trait AudioBackend: Send + Sync {
    /// Start a clip. Looped on the BGM channel; one-shot elsewhere.
    fn play(&self, channel: Channel, path: &str, volume: f32) -> Result<(), PlaybackError>;

    fn stop(&self, channel: Channel);

    fn pause(&self, channel: Channel) {
        self.stop(channel);
    }

    /// Resume a paused or muted clip
    fn resume(&self, channel: Channel) -> Result<(), PlaybackError>;

    fn set_volume(&self, channel: Channel, volume: f32);

    fn set_muted(&self, channel: Channel, muted: bool);

    /// Playback position of the current clip
    fn position_ms(&self, channel: Channel) -> Option<u64> {
        let _ = channel;
        None
    }
}

/// The server-side battle engine
#[async_trait]
pub trait BattleServer: Send + Sync {
    /// Post to the action endpoint
    async fn act(&self, request: &ActionRequest) -> Result<TurnResult>;

    async fn confirm_evolution(&self, evolution_id: u64) -> Result<EvolutionReply>;

    async fn learn_move(
        &self,
        pokemon_id: u64,
        new_move_id: u64,
        replacement: MoveReplacement,
    ) -> Result<LearnMoveReply>;

    async fn team(&self, exclude_pokemon_id: Option<u64>) -> Result<TeamReply>;

    async fn items(&self) -> Result<Vec<InventoryItem>>;
}

/// Small key-value store for local settings
pub trait SettingsStore: Send + Sync {
    fn save(&self, key: &str, value: &str);

    fn load(&self, key: &str) -> Option<String>;

    fn remove(&self, key: &str);
}
