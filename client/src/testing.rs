//! Recording collaborators and fixtures for the orchestration tests
//!
//! Every fake writes to one shared [`Journal`], stamped with the paused
//! clock, so tests can assert both ordering and timing across the view,
//! audio, dialogs, effects and the server.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use pokearena_battle::effects::particles::{Particle, Point};
use pokearena_battle::{
    BattleLog, CombatantView, EffectDescriptor, EffectKind, FieldState, HpGauge, SideView,
    StageChange,
};
use pokearena_protocol::{
    ActionRequest, CombatantSnapshot, EvolutionReply, InventoryItem, LearnMoveReply, MoveCategory,
    MoveInfo, MoveReplacement, MoveSlot, PendingMove, RosterMember, Side, Species, TeamReply,
    TurnInfo, TurnResult,
};
use tokio::time::Instant;

use crate::config::{BattleConfig, BattleKind, Endpoints, Timings};
use crate::controller::{BattleController, Collaborators};
use crate::error::{EffectError, PlaybackError};
use crate::handle::BattleHandle;
use crate::notify::Toast;
use crate::ports::{
    AudioBackend, BattleServer, BattleView, CaptureExit, CaptureStage, CaptureSuccess, Channel,
    Dialogs, EffectPlayer, EvolutionStage, ForcedSwitchPrompt, LearnMovePrompt, Menu,
    OutcomeDialog, SpriteCue,
};
use crate::storage::MemoryStore;

pub(crate) const PLAYER_CENTER: Point = Point { x: 100.0, y: 300.0 };
pub(crate) const OPPONENT_CENTER: Point = Point { x: 400.0, y: 100.0 };
const SCREEN_CENTER: Point = Point { x: 250.0, y: 200.0 };

/// How long a recorded effect takes to draw
const EFFECT_DURATION: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Entry {
    View(ViewEvent),
    Audio(AudioEvent),
    Effect(EffectEvent),
    Dialog(DialogEvent),
    Server(ServerCall),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewEvent {
    Input(bool),
    Menu(Menu),
    Combatant(Side, String),
    Hp(Side, HpGauge),
    Cue(Side, SpriteCue),
    ClearCue(Side, SpriteCue),
    Moves(usize),
    Exp(f64, bool),
    /// Latest line after the redraw
    Log(Option<String>),
    SideState(Side),
    Field,
    StageFlash(Side, StageChange),
    Team(Vec<u64>),
    Items(Vec<u64>),
    MenuError(Menu, String),
    Evolution(EvolutionStage),
    Capture(CaptureStage),
    Toast(String),
    AudioPrompt(bool),
    NowPlaying(String, bool),
    Navigate(String),
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AudioEvent {
    Played(Channel, String),
    Failed(Channel, String),
    Stopped(Channel),
    Muted(Channel, bool),
    Resumed(Channel),
    Volume(Channel, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EffectEvent {
    /// Effect started, from one sprite to the other
    Played(EffectKind, Side, Side),
    Finished(EffectKind),
    Cleared,
    Burst(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DialogEvent {
    Confirm(String),
    Outcome(OutcomeDialog),
    /// Ids offered in the replacement list
    ForcedSwitch(Vec<u64>),
    ForcedSwitchNotice(String),
    LearnMove(String),
    EvolutionResult,
    CaptureSuccess(String, bool),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ServerCall {
    Act(ActionRequest),
    ConfirmEvolution(u64),
    LearnMove(u64, u64, MoveReplacement),
    Team(Option<u64>),
    Items,
}

/// Shared, timestamped record of every collaborator call
#[derive(Debug, Clone)]
pub(crate) struct Journal {
    started: Instant,
    entries: Arc<Mutex<Vec<(u64, Entry)>>>,
}

impl Journal {
    pub(crate) fn new() -> Self {
        Self {
            started: Instant::now(),
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn record(&self, entry: Entry) {
        let at = self.started.elapsed().as_millis() as u64;
        self.entries.lock().unwrap().push((at, entry));
    }

    pub(crate) fn timed(&self) -> Vec<(u64, Entry)> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn entries(&self) -> Vec<Entry> {
        self.timed().into_iter().map(|(_, entry)| entry).collect()
    }

    /// Time of the first entry equal to `wanted`
    pub(crate) fn find(&self, wanted: &Entry) -> Option<u64> {
        self.find_where(|entry| entry == wanted)
    }

    pub(crate) fn find_where(&self, predicate: impl Fn(&Entry) -> bool) -> Option<u64> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|(_, entry)| predicate(entry))
            .map(|(at, _)| *at)
    }

    /// Started effects with their start time
    pub(crate) fn effects(&self) -> Vec<(u64, EffectEvent)> {
        self.timed()
            .into_iter()
            .filter_map(|(at, entry)| match entry {
                Entry::Effect(event @ EffectEvent::Played(..)) => Some((at, event)),
                _ => None,
            })
            .collect()
    }
}

pub(crate) struct RecordingView {
    journal: Journal,
}

impl RecordingView {
    pub(crate) fn new() -> Arc<Self> {
        Self::with_journal(Journal::new())
    }

    pub(crate) fn with_journal(journal: Journal) -> Arc<Self> {
        Arc::new(Self { journal })
    }

    fn record(&self, event: ViewEvent) {
        self.journal.record(Entry::View(event));
    }

    pub(crate) fn events(&self) -> Vec<ViewEvent> {
        self.journal
            .entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::View(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn input_events(&self) -> Vec<ViewEvent> {
        self.events()
            .into_iter()
            .filter(|event| matches!(event, ViewEvent::Input(_)))
            .collect()
    }
}

impl BattleView for RecordingView {
    fn set_input_enabled(&self, enabled: bool) {
        self.record(ViewEvent::Input(enabled));
    }

    fn show_menu(&self, menu: Menu) {
        self.record(ViewEvent::Menu(menu));
    }

    fn sprite_center(&self, side: Side) -> Point {
        match side {
            Side::Player => PLAYER_CENTER,
            Side::Opponent => OPPONENT_CENTER,
        }
    }

    fn render_combatant(&self, side: Side, combatant: &CombatantView) {
        self.record(ViewEvent::Combatant(side, combatant.name.clone()));
    }

    fn render_hp(&self, side: Side, gauge: HpGauge) {
        self.record(ViewEvent::Hp(side, gauge));
    }

    fn screen_center(&self) -> Point {
        SCREEN_CENTER
    }

    fn cue(&self, side: Side, cue: SpriteCue) {
        self.record(ViewEvent::Cue(side, cue));
    }

    fn clear_cue(&self, side: Side, cue: SpriteCue) {
        self.record(ViewEvent::ClearCue(side, cue));
    }

    fn render_moves(&self, moves: &[MoveSlot]) {
        self.record(ViewEvent::Moves(moves.len()));
    }

    fn render_exp(&self, percent: f64, animated: bool) {
        self.record(ViewEvent::Exp(percent, animated));
    }

    fn render_side_state(&self, view: &SideView) {
        self.record(ViewEvent::SideState(view.side));
    }

    fn render_field(&self, _field: &FieldState) {
        self.record(ViewEvent::Field);
    }

    fn flash_stage(&self, side: Side, change: &StageChange) {
        self.record(ViewEvent::StageFlash(side, *change));
    }

    fn render_log(&self, log: &BattleLog) {
        self.record(ViewEvent::Log(log.latest().map(str::to_string)));
    }

    fn render_team(&self, team: &TeamReply) {
        self.record(ViewEvent::Team(team.team.iter().map(|m| m.id).collect()));
    }

    fn render_items(&self, items: &[InventoryItem]) {
        self.record(ViewEvent::Items(items.iter().map(|i| i.id).collect()));
    }

    fn menu_error(&self, menu: Menu, message: &str) {
        self.record(ViewEvent::MenuError(menu, message.to_string()));
    }

    fn evolution_stage(&self, stage: &EvolutionStage) {
        self.record(ViewEvent::Evolution(stage.clone()));
    }

    fn capture_stage(&self, stage: &CaptureStage) {
        self.record(ViewEvent::Capture(stage.clone()));
    }

    fn toast(&self, toast: &Toast) {
        self.record(ViewEvent::Toast(toast.message.clone()));
    }

    fn audio_prompt(&self, visible: bool) {
        self.record(ViewEvent::AudioPrompt(visible));
    }

    fn now_playing(&self, label: &str, playing: bool) {
        self.record(ViewEvent::NowPlaying(label.to_string(), playing));
    }

    fn navigate(&self, url: &str) {
        self.record(ViewEvent::Navigate(url.to_string()));
    }

    fn reload(&self) {
        self.record(ViewEvent::Reload);
    }
}

#[derive(Default)]
struct AudioState {
    blocked: bool,
    missing: HashSet<String>,
    positions: HashMap<Channel, u64>,
}

pub(crate) struct RecordingAudio {
    journal: Journal,
    state: Mutex<AudioState>,
}

impl RecordingAudio {
    pub(crate) fn new() -> Arc<Self> {
        Self::with_journal(Journal::new())
    }

    pub(crate) fn with_journal(journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            journal,
            state: Mutex::new(AudioState::default()),
        })
    }

    /// Refuse music until a gesture resumes it
    pub(crate) fn block_autoplay(&self, blocked: bool) {
        self.state.lock().unwrap().blocked = blocked;
    }

    pub(crate) fn missing(&self, path: &str) {
        self.state.lock().unwrap().missing.insert(path.to_string());
    }

    pub(crate) fn set_position(&self, channel: Channel, millis: u64) {
        self.state.lock().unwrap().positions.insert(channel, millis);
    }

    fn record(&self, event: AudioEvent) {
        self.journal.record(Entry::Audio(event));
    }

    pub(crate) fn events(&self) -> Vec<AudioEvent> {
        self.journal
            .entries()
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Audio(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    /// Clips that actually started on `channel`
    pub(crate) fn played(&self, channel: Channel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                AudioEvent::Played(c, path) if c == channel => Some(path),
                _ => None,
            })
            .collect()
    }
}

impl AudioBackend for RecordingAudio {
    fn play(&self, channel: Channel, path: &str, _volume: f32) -> Result<(), PlaybackError> {
        let outcome = {
            let state = self.state.lock().unwrap();
            if state.missing.contains(path) {
                Err(PlaybackError::NotFound(path.to_string()))
            } else if state.blocked && channel == Channel::Bgm {
                Err(PlaybackError::Blocked)
            } else {
                Ok(())
            }
        };

        match &outcome {
            Ok(()) => self.record(AudioEvent::Played(channel, path.to_string())),
            Err(_) => self.record(AudioEvent::Failed(channel, path.to_string())),
        }
        outcome
    }

    fn stop(&self, channel: Channel) {
        self.record(AudioEvent::Stopped(channel));
    }

    fn resume(&self, channel: Channel) -> Result<(), PlaybackError> {
        self.record(AudioEvent::Resumed(channel));
        Ok(())
    }

    fn set_volume(&self, channel: Channel, volume: f32) {
        self.record(AudioEvent::Volume(channel, volume));
    }

    fn set_muted(&self, channel: Channel, muted: bool) {
        self.record(AudioEvent::Muted(channel, muted));
    }

    fn position_ms(&self, channel: Channel) -> Option<u64> {
        self.state.lock().unwrap().positions.get(&channel).copied()
    }
}

pub(crate) struct RecordingEffects {
    journal: Journal,
    failing: AtomicBool,
}

impl RecordingEffects {
    pub(crate) fn with_journal(journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            journal,
            failing: AtomicBool::new(false),
        })
    }

    /// Every effect reports a missing asset
    pub(crate) fn fail_all(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn side_of(point: Point) -> Side {
        if point == PLAYER_CENTER {
            Side::Player
        } else {
            Side::Opponent
        }
    }
}

#[async_trait]
impl EffectPlayer for RecordingEffects {
    async fn play(
        &self,
        effect: &EffectDescriptor,
        from: Point,
        to: Point,
    ) -> Result<(), EffectError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(EffectError::AssetMissing(effect.kind.to_string()));
        }

        self.journal.record(Entry::Effect(EffectEvent::Played(
            effect.kind,
            Self::side_of(from),
            Self::side_of(to),
        )));
        tokio::time::sleep(EFFECT_DURATION).await;
        self.journal
            .record(Entry::Effect(EffectEvent::Finished(effect.kind)));
        Ok(())
    }

    fn clear(&self) {
        self.journal.record(Entry::Effect(EffectEvent::Cleared));
    }

    fn burst(&self, particles: Vec<Particle>) {
        self.journal
            .record(Entry::Effect(EffectEvent::Burst(particles.len())));
    }
}

struct DialogScript {
    confirm: bool,
    forced_switch: VecDeque<u64>,
    learn_move: VecDeque<MoveReplacement>,
    capture: CaptureExit,
    confirmations: usize,
}

/// Dialogs answered from a script, immediately
pub(crate) struct ScriptedDialogs {
    journal: Journal,
    script: Mutex<DialogScript>,
}

impl ScriptedDialogs {
    pub(crate) fn with_journal(journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            journal,
            script: Mutex::new(DialogScript {
                confirm: true,
                forced_switch: VecDeque::new(),
                learn_move: VecDeque::new(),
                capture: CaptureExit::ReturnZone,
                confirmations: 0,
            }),
        })
    }

    pub(crate) fn answer_confirm(&self, answer: bool) {
        self.script.lock().unwrap().confirm = answer;
    }

    /// Queue a pick; the first listed member is picked once the queue is empty
    pub(crate) fn answer_forced_switch(&self, pokemon_id: u64) {
        self.script
            .lock()
            .unwrap()
            .forced_switch
            .push_back(pokemon_id);
    }

    /// Queue an answer; skip once the queue is empty
    pub(crate) fn answer_learn_move(&self, choice: MoveReplacement) {
        self.script.lock().unwrap().learn_move.push_back(choice);
    }

    pub(crate) fn answer_capture(&self, exit: CaptureExit) {
        self.script.lock().unwrap().capture = exit;
    }

    pub(crate) fn confirmations(&self) -> usize {
        self.script.lock().unwrap().confirmations
    }

    fn record(&self, event: DialogEvent) {
        self.journal.record(Entry::Dialog(event));
    }
}

#[async_trait]
impl Dialogs for ScriptedDialogs {
    async fn confirm(&self, question: &str) -> bool {
        self.record(DialogEvent::Confirm(question.to_string()));
        let mut script = self.script.lock().unwrap();
        script.confirmations += 1;
        script.confirm
    }

    async fn outcome(&self, dialog: OutcomeDialog) {
        self.record(DialogEvent::Outcome(dialog));
    }

    async fn forced_switch(&self, prompt: &ForcedSwitchPrompt) -> u64 {
        self.record(DialogEvent::ForcedSwitch(
            prompt.roster.iter().map(|m| m.id).collect(),
        ));
        let queued = self.script.lock().unwrap().forced_switch.pop_front();
        queued
            .or_else(|| prompt.roster.first().map(|m| m.id))
            .unwrap_or_default()
    }

    async fn forced_switch_notice(&self, message: &str) {
        self.record(DialogEvent::ForcedSwitchNotice(message.to_string()));
    }

    async fn learn_move(&self, prompt: &LearnMovePrompt) -> MoveReplacement {
        self.record(DialogEvent::LearnMove(prompt.move_name.clone()));
        self.script
            .lock()
            .unwrap()
            .learn_move
            .pop_front()
            .unwrap_or(MoveReplacement::Skip)
    }

    async fn evolution_result(&self) {
        self.record(DialogEvent::EvolutionResult);
    }

    async fn capture_success(&self, success: &CaptureSuccess) -> CaptureExit {
        self.record(DialogEvent::CaptureSuccess(
            success.title.clone(),
            success.first_catch,
        ));
        self.script.lock().unwrap().capture
    }
}

/// Battle server answering from queued replies
pub(crate) struct ScriptedServer {
    journal: Journal,
    acts: Mutex<VecDeque<Result<TurnResult, String>>>,
    team: Mutex<TeamReply>,
    evolution_reply: Mutex<EvolutionReply>,
    learn_move_reply: Mutex<LearnMoveReply>,
    failing: AtomicBool,
    learn_move_failures: AtomicUsize,
    calls: Mutex<Vec<ServerCall>>,
}

impl ScriptedServer {
    pub(crate) fn with_journal(journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            journal,
            acts: Mutex::new(VecDeque::new()),
            team: Mutex::new(TeamReply::default()),
            evolution_reply: Mutex::new(EvolutionReply::default()),
            learn_move_reply: Mutex::new(LearnMoveReply::default()),
            failing: AtomicBool::new(false),
            learn_move_failures: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Queue the next action response; an empty queue answers a default one
    pub(crate) fn push_act(&self, result: TurnResult) {
        self.acts.lock().unwrap().push_back(Ok(result));
    }

    pub(crate) fn fail_next_act(&self, status: &str) {
        self.acts.lock().unwrap().push_back(Err(status.to_string()));
    }

    pub(crate) fn set_team(&self, team: TeamReply) {
        *self.team.lock().unwrap() = team;
    }

    pub(crate) fn set_evolution_reply(&self, reply: EvolutionReply) {
        *self.evolution_reply.lock().unwrap() = reply;
    }

    pub(crate) fn set_learn_move_reply(&self, reply: LearnMoveReply) {
        *self.learn_move_reply.lock().unwrap() = reply;
    }

    /// Fail every call other than actions
    pub(crate) fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Fail the next `count` learn-move confirmations
    pub(crate) fn fail_learn_moves(&self, count: usize) {
        self.learn_move_failures.store(count, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> Vec<ServerCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ServerCall) {
        self.journal.record(Entry::Server(call.clone()));
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(anyhow!("Server answered 500"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BattleServer for ScriptedServer {
    async fn act(&self, request: &ActionRequest) -> Result<TurnResult> {
        self.record(ServerCall::Act(request.clone()));
        let next = self.acts.lock().unwrap().pop_front();
        match next {
            Some(Ok(result)) => Ok(result),
            Some(Err(status)) => Err(anyhow!("Server answered {status}")),
            None => Ok(TurnResult::default()),
        }
    }

    async fn confirm_evolution(&self, evolution_id: u64) -> Result<EvolutionReply> {
        self.record(ServerCall::ConfirmEvolution(evolution_id));
        self.check()?;
        Ok(self.evolution_reply.lock().unwrap().clone())
    }

    async fn learn_move(
        &self,
        pokemon_id: u64,
        new_move_id: u64,
        replacement: MoveReplacement,
    ) -> Result<LearnMoveReply> {
        self.record(ServerCall::LearnMove(pokemon_id, new_move_id, replacement));
        self.check()?;
        let failed = self
            .learn_move_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(anyhow!("Server answered 500"));
        }
        Ok(self.learn_move_reply.lock().unwrap().clone())
    }

    async fn team(&self, exclude_pokemon_id: Option<u64>) -> Result<TeamReply> {
        self.record(ServerCall::Team(exclude_pokemon_id));
        self.check()?;
        Ok(self.team.lock().unwrap().clone())
    }

    async fn items(&self) -> Result<Vec<InventoryItem>> {
        self.record(ServerCall::Items);
        self.check()?;
        Ok(Vec::new())
    }
}

/// A controller wired to recording collaborators, before the intro
pub(crate) struct Harness {
    pub(crate) controller: BattleController,
    pub(crate) handle: BattleHandle,
    pub(crate) view: Arc<RecordingView>,
    pub(crate) audio: Arc<RecordingAudio>,
    pub(crate) dialogs: Arc<ScriptedDialogs>,
    pub(crate) server: Arc<ScriptedServer>,
    pub(crate) effects: Arc<RecordingEffects>,
    pub(crate) journal: Journal,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let journal = Journal::new();
        let view = RecordingView::with_journal(journal.clone());
        let audio = RecordingAudio::with_journal(journal.clone());
        let dialogs = ScriptedDialogs::with_journal(journal.clone());
        let server = ScriptedServer::with_journal(journal.clone());
        let effects = RecordingEffects::with_journal(journal.clone());

        let collaborators = Collaborators {
            view: view.clone(),
            dialogs: dialogs.clone(),
            effects: effects.clone(),
            audio: audio.clone(),
            server: server.clone(),
            settings: Arc::new(MemoryStore::new()),
        };
        let (controller, handle) = BattleController::new(config(), collaborators);

        Self {
            controller: controller.with_seed(7),
            handle,
            view,
            audio,
            dialogs,
            server,
            effects,
            journal,
        }
    }
}

pub(crate) fn config() -> BattleConfig {
    let mut player = snapshot(101, "Salamèche", 100, 100);
    player.moves = Some(vec![
        move_slot(1, "Flammèche", "fire"),
        move_slot(2, "Griffe", "normal"),
    ]);

    BattleConfig {
        battle_id: 12,
        csrf_token: "tok".to_string(),
        kind: BattleKind::Wild,
        player_trainer_id: Some(4),
        player_pokemon_id: Some(101),
        opponent_pokemon_id: Some(202),
        player_pokemon: Some(player),
        opponent_pokemon: Some(snapshot(202, "Roucool", 100, 100)),
        player_species_id: Some(4),
        opponent_species_id: Some(16),
        base_url: "http://test".to_string(),
        urls: Endpoints {
            action: "/battle/12/action/".to_string(),
            get_team: "/api/team/".to_string(),
            get_items: "/api/items/".to_string(),
            learn_move: "/battle/learn-move/".to_string(),
            return_zone: "/zone/3/".to_string(),
            my_team: Some("/team/".to_string()),
        },
        timings: Timings::default(),
    }
}

pub(crate) fn move_slot(id: u64, name: &str, move_type: &str) -> MoveSlot {
    MoveSlot {
        id,
        name: name.to_string(),
        move_type: move_type.to_string(),
        category: "special".to_string(),
        current_pp: 25,
        max_pp: 25,
        power: Some(40),
        accuracy: Some(100),
    }
}

pub(crate) fn snapshot(id: u64, name: &str, hp: u32, max_hp: u32) -> CombatantSnapshot {
    CombatantSnapshot {
        id,
        name: name.to_string(),
        species_name: name.to_string(),
        level: 5,
        current_hp: hp,
        max_hp,
        is_shiny: false,
        moves: None,
        exp_percent: None,
    }
}

/// One exchange: Salamèche uses Flammèche, Roucool uses Charge.
/// Leaves the player at 80/100 and the opponent at 50/100.
pub(crate) fn attack_result(player_first: bool, second_skipped: bool) -> TurnResult {
    TurnResult {
        turn_info: Some(TurnInfo {
            player_first,
            second_skipped,
            player_move: Some(MoveInfo::new("Flammèche", "fire", MoveCategory::Special)),
            opponent_move: Some(MoveInfo::new("Charge", "normal", MoveCategory::Physical)),
        }),
        player_hp: Some(80),
        player_max_hp: Some(100),
        opponent_hp: Some(50),
        opponent_max_hp: Some(100),
        ..TurnResult::default()
    }
}

pub(crate) fn team_of(members: &[(u64, &str, u32)]) -> TeamReply {
    TeamReply {
        team: members
            .iter()
            .map(|&(id, name, hp)| RosterMember {
                id,
                nickname: None,
                species: Species {
                    name: name.to_string(),
                },
                level: 5,
                current_hp: hp,
                max_hp: 44,
                is_shiny: false,
                status_condition: None,
            })
            .collect(),
    }
}

pub(crate) fn pending_move(id: u64, name: &str) -> PendingMove {
    PendingMove {
        move_id: id,
        move_name: name.to_string(),
        move_type: "normal".to_string(),
        move_power: Some(40),
        move_pp: 35,
        current_moves: Vec::new(),
    }
}
