//! Battle controller
//!
//! [`BattleController`] owns the session and every collaborator and plays one
//! player action at a time, from submission back to idle. Input reaches it
//! through a [`BattleHandle`], or directly through
//! [`BattleController::submit`].
//!
//! The playback itself is split by concern:
//!
//! - [`crate::sequencer`] replays the attack exchange
//! - [`crate::synchronizer`] shows the authoritative state
//! - [`crate::interrupts`] resolves what follows (evolution, battle end,
//!   forced switch, move learning)
//! - [`crate::capture`] replays a ball throw

use std::sync::Arc;

use pokearena_battle::{BattleSession, EffectRegistry};
use pokearena_protocol::{ActionRequest, Side, TurnResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;

use crate::audio::{AudioManager, BgmStatus, sfx, track_label};
use crate::config::{BattleConfig, wait};
use crate::error::ActionRejected;
use crate::gate::{ActionGate, GatePass};
use crate::handle::BattleHandle;
use crate::notify::Toast;
use crate::ports::{
    AudioBackend, BattleServer, BattleView, Dialogs, EffectPlayer, Menu, SettingsStore, SpriteCue,
};

/// Everything the controller drives
pub struct Collaborators {
    pub view: Arc<dyn BattleView>,
    pub dialogs: Arc<dyn Dialogs>,
    pub effects: Arc<dyn EffectPlayer>,
    pub audio: Arc<dyn AudioBackend>,
    pub server: Arc<dyn BattleServer>,
    pub settings: Arc<dyn SettingsStore>,
}

/// A turn-consuming choice from the action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    UseMove { move_id: u64 },
    Switch { pokemon_id: u64 },
    UseItem { item_id: u64 },
    Flee,
}

/// Keyboard shortcuts of the action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Char(char),
    Escape,
}

#[derive(Debug)]
pub(crate) enum Command {
    Act { action: PlayerAction, pass: GatePass },
    Key(MenuKey),
    ShowMenu(Menu),
    Gesture,
    ToggleAudio,
    SetBgmVolume(f32),
}

pub struct BattleController {
    pub(crate) config: BattleConfig,
    pub(crate) session: BattleSession,
    pub(crate) registry: EffectRegistry,
    pub(crate) audio: AudioManager,
    pub(crate) effects: Arc<dyn EffectPlayer>,
    pub(crate) view: Arc<dyn BattleView>,
    pub(crate) dialogs: Arc<dyn Dialogs>,
    pub(crate) server: Arc<dyn BattleServer>,
    pub(crate) gate: ActionGate,
    pub(crate) rng: StdRng,
    menu: Menu,
    commands: mpsc::UnboundedReceiver<Command>,
}

impl BattleController {
    pub fn new(config: BattleConfig, collaborators: Collaborators) -> (Self, BattleHandle) {
        let Collaborators {
            view,
            dialogs,
            effects,
            audio,
            server,
            settings,
        } = collaborators;

        let (tx, commands) = mpsc::unbounded_channel();
        let gate = ActionGate::new(view.clone());

        let mut session =
            BattleSession::new(config.player_pokemon_id, config.opponent_pokemon_id)
                .with_trainer(config.player_trainer_id);
        if config.player_pokemon.is_some() || config.opponent_pokemon.is_some() {
            session.apply_turn(&TurnResult {
                player_pokemon: config.player_pokemon.clone(),
                opponent_pokemon: config.opponent_pokemon.clone(),
                ..TurnResult::default()
            });
        }

        let controller = Self {
            config,
            session,
            registry: EffectRegistry::default(),
            audio: AudioManager::new(audio, settings),
            effects,
            view,
            dialogs,
            server,
            gate: gate.clone(),
            rng: StdRng::from_entropy(),
            menu: Menu::Main,
            commands,
        };

        (controller, BattleHandle::new(tx, gate))
    }

    /// Replace the effect registry, e.g. to add per-move overrides
    pub fn with_registry(mut self, registry: EffectRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use a fixed seed for particle bursts
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    /// Play the battle intro, then handle commands until every handle is
    /// dropped
    pub async fn run(&mut self) {
        self.start().await;

        while let Some(command) = self.commands.recv().await {
            self.dispatch(command).await;
        }

        tracing::debug!(battle_id = self.config.battle_id, "All battle handles dropped");
    }

    /// Battle intro: music, first render, entry cues and cries
    pub async fn start(&mut self) {
        tracing::info!(
            battle_id = self.config.battle_id,
            kind = ?self.config.kind,
            "Battle started"
        );

        if self.audio.play_bgm(self.config.kind.bgm_track()) == BgmStatus::AwaitingGesture {
            self.view.audio_prompt(true);
        }
        self.announce_track();

        for side in [Side::Player, Side::Opponent] {
            if let Some(combatant) = &self.session.side(side).active {
                self.view.render_combatant(side, combatant);
                self.view.render_hp(side, combatant.hp);
            }
        }
        if let Some(player) = &self.session.player.active {
            self.view.render_moves(&player.moves);
            if let Some(exp) = player.exp_percent {
                self.view.render_exp(exp, false);
            }
        }
        self.view.show_menu(Menu::Main);
        self.narrate("Le combat commence !");

        let timings = self.config.timings.clone();
        wait(timings.entry_cue_delay).await;
        self.transient_cue(Side::Player, SpriteCue::Entrance, timings.entrance_cue);
        self.transient_cue(Side::Opponent, SpriteCue::Entrance, timings.entrance_cue);

        wait(timings.opponent_cry_delay.saturating_sub(timings.entry_cue_delay)).await;
        if let Some(species_id) = self.config.opponent_species_id {
            self.audio.play_cry(species_id);
        }

        wait(timings.player_cry_delay.saturating_sub(timings.opponent_cry_delay)).await;
        if let Some(species_id) = self.config.player_species_id {
            self.audio.play_cry(species_id);
        }
    }

    /// Play an action to completion.
    ///
    /// Fails without side effects while another action is playing.
    pub async fn submit(&mut self, action: PlayerAction) -> Result<(), ActionRejected> {
        let pass = self.gate.try_close()?;
        self.perform(action, pass).await;
        Ok(())
    }

    async fn dispatch(&mut self, command: Command) {
        match command {
            Command::Act { action, pass } => self.perform(action, pass).await,
            Command::Key(key) => self.on_key(key).await,
            Command::ShowMenu(menu) => {
                if self.gate.is_open() {
                    self.open_menu(menu).await;
                }
            }
            Command::Gesture => self.on_gesture(),
            Command::ToggleAudio => {
                self.audio.toggle();
                self.announce_track();
            }
            Command::SetBgmVolume(volume) => self.audio.set_bgm_volume(volume),
        }
    }

    async fn perform(&mut self, action: PlayerAction, pass: GatePass) {
        if self.session.ended {
            tracing::debug!(?action, "Battle is over, action ignored");
            return;
        }

        tracing::debug!(?action, "Playing action");
        match action {
            PlayerAction::UseMove { move_id } => self.use_move(move_id).await,
            PlayerAction::Switch { pokemon_id } => self.switch_to(pokemon_id).await,
            PlayerAction::UseItem { item_id } => self.use_item(item_id).await,
            PlayerAction::Flee => self.flee().await,
        }

        drop(pass);
    }

    async fn use_move(&mut self, move_id: u64) {
        self.audio.play_sfx(sfx::CONFIRM);

        match self.server.act(&ActionRequest::Attack { move_id }).await {
            Ok(result) => self.replay(result).await,
            Err(e) => self.report_failure("Erreur lors de l'attaque", &e),
        }
    }

    async fn switch_to(&mut self, pokemon_id: u64) {
        let request = ActionRequest::Switch {
            pokemon_id,
            forced: false,
        };

        match self.server.act(&request).await {
            Ok(result) => {
                self.view.cue(Side::Player, SpriteCue::FadeOut);
                wait(self.config.timings.switch_fade).await;
                self.view.clear_cue(Side::Player, SpriteCue::FadeOut);
                self.replay(result).await;
            }
            Err(e) => self.report_failure("Erreur lors du changement", &e),
        }
    }

    async fn use_item(&mut self, item_id: u64) {
        let mut result = match self.server.act(&ActionRequest::Item { item_id }).await {
            Ok(result) => result,
            Err(e) => {
                self.report_failure("Erreur lors de l'utilisation de l'objet", &e);
                return;
            }
        };

        match result.capture_attempt.take() {
            Some(attempt) if attempt.start_animation => {
                if !result.log.is_empty() {
                    self.session.log.extend(result.log.iter().cloned());
                    self.view.render_log(&self.session.log);
                }
                self.capture(item_id, attempt).await;
            }
            _ => self.replay(result).await,
        }
    }

    async fn flee(&mut self) {
        if !self
            .dialogs
            .confirm("Voulez-vous vraiment fuir le combat ?")
            .await
        {
            return;
        }

        match self.server.act(&ActionRequest::Flee).await {
            Ok(result) if result.fled == Some(true) => {
                tracing::info!(battle_id = self.config.battle_id, "Fled from battle");
                self.session.ended = true;
                self.audio.stop_bgm();
                self.narrate("Vous avez fui le combat !");
                wait(self.config.timings.flee_redirect).await;
                self.view
                    .navigate(&self.config.url(&self.config.urls.return_zone));
            }
            Ok(result) => {
                self.narrate("Impossible de fuir !");
                self.replay(result).await;
            }
            Err(e) => self.report_failure("Erreur", &e),
        }
    }

    /// Attack replay, then synchronisation and interrupts
    pub(crate) async fn replay(&mut self, result: TurnResult) {
        self.play_turn(&result).await;
        self.settle(result).await;
    }

    async fn on_key(&mut self, key: MenuKey) {
        if !self.gate.is_open() || self.session.ended {
            return;
        }

        match (self.menu, key) {
            (Menu::Main, MenuKey::Char('1')) => self.open_menu(Menu::Moves).await,
            (Menu::Main, MenuKey::Char('2')) => self.open_menu(Menu::Team).await,
            (Menu::Main, MenuKey::Char('3')) => self.open_menu(Menu::Items).await,
            (Menu::Main, MenuKey::Char('4')) => {
                if let Ok(pass) = self.gate.try_close() {
                    self.perform(PlayerAction::Flee, pass).await;
                }
            }
            (Menu::Main, _) => {}
            (_, MenuKey::Escape) => {
                self.audio.play_sfx(sfx::CANCEL);
                self.open_menu(Menu::Main).await;
            }
            _ => {}
        }
    }

    async fn open_menu(&mut self, menu: Menu) {
        self.menu = menu;
        if menu != Menu::Main {
            self.audio.play_sfx(sfx::SELECT);
        }
        self.view.show_menu(menu);

        match menu {
            Menu::Main => {}
            Menu::Moves => {
                if let Some(player) = &self.session.player.active {
                    self.view.render_moves(&player.moves);
                }
            }
            Menu::Team => {
                let exclude = self.session.active_id(Side::Player);
                match self.server.team(exclude).await {
                    Ok(team) => self.view.render_team(&team),
                    Err(e) => {
                        tracing::error!(error = %e, "Team unavailable");
                        self.view.menu_error(Menu::Team, "Erreur de chargement");
                    }
                }
            }
            Menu::Items => match self.server.items().await {
                Ok(items) => self.view.render_items(&items),
                Err(e) => {
                    tracing::error!(error = %e, "Items unavailable");
                    self.view.menu_error(Menu::Items, "Erreur de chargement");
                }
            },
        }
    }

    fn on_gesture(&mut self) {
        if self.audio.on_user_gesture() {
            self.view.audio_prompt(false);
            self.announce_track();
        }
    }

    fn announce_track(&self) {
        if let Some(track) = self.audio.current_track() {
            let playing = self.audio.is_enabled() && !self.audio.is_awaiting_gesture();
            self.view.now_playing(track_label(track), playing);
        }
    }

    /// Append a line to the battle log and redraw it
    pub(crate) fn narrate(&mut self, line: impl Into<String>) {
        self.session.push_log(line);
        self.view.render_log(&self.session.log);
    }

    /// A server call failed: log line, toast, input comes back with the pass
    pub(crate) fn report_failure(&mut self, line: &str, error: &anyhow::Error) {
        tracing::error!(line, error = %error, "Server call failed");
        self.audio.play_sfx(sfx::ERROR);
        self.narrate(line);
        self.view.toast(&Toast::error(line));
    }

    /// Show a cue and clear it after `millis` without holding up the caller
    pub(crate) fn transient_cue(&self, side: Side, cue: SpriteCue, millis: u64) {
        self.view.cue(side, cue);

        let view = self.view.clone();
        tokio::spawn(async move {
            wait(millis).await;
            view.clear_cue(side, cue);
        });
    }

    pub(crate) fn idle(&mut self) {
        self.menu = Menu::Main;
        self.view.set_input_enabled(true);
        self.view.show_menu(Menu::Main);
    }
}
