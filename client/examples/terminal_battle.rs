//! Terminal Battle Example
//!
//! Plays a battle against the real endpoints with the screen replaced by
//! printed lines. The page configuration is read from the JSON file given as
//! the first argument.
//!
//! Commands on stdin:
//! - `m <move id>` attack
//! - `s <pokemon id>` switch
//! - `i <item id>` use an item
//! - `f` flee
//! - `q` quit
//!
//! Run with `RUST_LOG=pokearena_client=debug` to see the sequencing.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use pokearena_battle::effects::particles::Point;
use pokearena_battle::{BattleLog, CombatantView, EffectDescriptor, HpGauge};
use pokearena_client::{
    AudioBackend, BattleConfig, BattleController, BattleHandle, BattleView, Channel,
    Collaborators, Dialogs, EffectError, EffectPlayer, EvolutionStage, ForcedSwitchPrompt,
    HttpBattleServer, JsonFileStore, Menu, OutcomeDialog, PlaybackError, Side, Toast,
};
use tracing_subscriber::EnvFilter;

struct TerminalView;

impl BattleView for TerminalView {
    fn show_menu(&self, menu: Menu) {
        if menu == Menu::Main {
            println!("> m <move> | s <pokemon> | i <item> | f");
        }
    }

    fn render_combatant(&self, side: Side, combatant: &CombatantView) {
        println!("[{side}] {} {}", combatant.name, combatant.level_label());
    }

    fn render_hp(&self, side: Side, gauge: HpGauge) {
        println!("[{side}] {}/{} ({:?})", gauge.current, gauge.max, gauge.band());
    }

    fn render_log(&self, log: &BattleLog) {
        if let Some(line) = log.latest() {
            println!("  {line}");
        }
    }

    fn evolution_stage(&self, stage: &EvolutionStage) {
        if let EvolutionStage::Announce { from, to, .. } = stage {
            println!("Quoi ? {from} évolue en {to} !");
        }
    }

    fn toast(&self, toast: &Toast) {
        eprintln!("{}: {}", toast.kind.title(), toast.message);
    }

    fn navigate(&self, url: &str) {
        println!("-> {url}");
    }

    fn reload(&self) {
        println!("-> reload");
    }
}

/// Accepts every prompt with its first choice
struct AutoDialogs;

#[async_trait]
impl Dialogs for AutoDialogs {
    async fn outcome(&self, dialog: OutcomeDialog) {
        println!("=== {dialog:?} ===");
    }

    async fn forced_switch(&self, prompt: &ForcedSwitchPrompt) -> u64 {
        let pick = &prompt.roster[0];
        println!("{} est K.O. ! {} le remplace.", prompt.fainted_name, pick.display_name());
        pick.id
    }
}

struct NoEffects;

#[async_trait]
impl EffectPlayer for NoEffects {
    async fn play(
        &self,
        effect: &EffectDescriptor,
        _from: Point,
        _to: Point,
    ) -> Result<(), EffectError> {
        tracing::debug!(effect = %effect.kind, "Effect");
        Ok(())
    }
}

struct Silent;

impl AudioBackend for Silent {
    fn play(&self, channel: Channel, path: &str, _volume: f32) -> Result<(), PlaybackError> {
        tracing::trace!(?channel, path, "Audio");
        Ok(())
    }

    fn stop(&self, _channel: Channel) {}

    fn resume(&self, _channel: Channel) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn set_volume(&self, _channel: Channel, _volume: f32) {}

    fn set_muted(&self, _channel: Channel, _muted: bool) {}
}

fn dispatch(handle: &BattleHandle, line: &str) -> Result<bool> {
    let command = line.split_whitespace().next().unwrap_or_default();
    let id = || -> Result<u64> {
        line.split_whitespace()
            .nth(1)
            .context("Missing id")?
            .parse()
            .context("Invalid id")
    };

    match command {
        "m" => handle.use_move(id()?)?,
        "s" => handle.switch_to(id()?)?,
        "i" => handle.use_item(id()?)?,
        "f" => handle.flee()?,
        "q" => return Ok(false),
        "" => {}
        other => println!("Unknown command: {other}"),
    }
    Ok(true)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("Usage: terminal_battle <config.json>")?;
    let body = std::fs::read_to_string(&path).with_context(|| format!("Reading {path}"))?;
    let config = BattleConfig::from_json(&body)?;

    let server = Arc::new(HttpBattleServer::new(config.clone())?);
    let (mut controller, handle) = BattleController::new(
        config,
        Collaborators {
            view: Arc::new(TerminalView),
            dialogs: Arc::new(AutoDialogs),
            effects: Arc::new(NoEffects),
            audio: Arc::new(Silent),
            server,
            settings: Arc::new(JsonFileStore::open("pokearena-settings.json")),
        },
    );

    let input = tokio::task::spawn_blocking(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            match dispatch(&handle, &line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => eprintln!("{e}"),
            }
        }
    });

    let battle = tokio::spawn(async move { controller.run().await });

    input.await?;
    battle.await?;
    println!("Bye.");
    Ok(())
}
