use anyhow::{Result, anyhow};
use tokio::sync::mpsc;

use crate::controller::{Command, MenuKey, PlayerAction};
use crate::error::ActionRejected;
use crate::gate::ActionGate;
use crate::ports::Menu;

/// Cloneable input side of a running [`BattleController`](crate::BattleController).
///
/// Actions and menu input are refused while an action plays; nothing is
/// queued behind it.
#[derive(Clone, Debug)]
pub struct BattleHandle {
    tx: mpsc::UnboundedSender<Command>,
    gate: ActionGate,
}

impl BattleHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Command>, gate: ActionGate) -> Self {
        Self { tx, gate }
    }

    fn send(&self, command: Command) -> Result<()> {
        self.tx
            .send(command)
            .map_err(|_| anyhow!("Battle controller stopped"))
    }

    fn ensure_open(&self) -> Result<()> {
        if self.gate.is_open() {
            Ok(())
        } else {
            Err(ActionRejected.into())
        }
    }

    /// Submit an action. Fails with [`ActionRejected`] while another one plays.
    pub fn submit(&self, action: PlayerAction) -> Result<()> {
        let pass = self.gate.try_close()?;
        self.send(Command::Act { action, pass })
    }

    pub fn use_move(&self, move_id: u64) -> Result<()> {
        self.submit(PlayerAction::UseMove { move_id })
    }

    pub fn switch_to(&self, pokemon_id: u64) -> Result<()> {
        self.submit(PlayerAction::Switch { pokemon_id })
    }

    pub fn use_item(&self, item_id: u64) -> Result<()> {
        self.submit(PlayerAction::UseItem { item_id })
    }

    pub fn flee(&self) -> Result<()> {
        self.submit(PlayerAction::Flee)
    }

    pub fn key(&self, key: MenuKey) -> Result<()> {
        self.ensure_open()?;
        self.send(Command::Key(key))
    }

    pub fn show_menu(&self, menu: Menu) -> Result<()> {
        self.ensure_open()?;
        self.send(Command::ShowMenu(menu))
    }

    /// Any click, key press or touch on the page
    pub fn user_gesture(&self) -> Result<()> {
        self.send(Command::Gesture)
    }

    pub fn toggle_audio(&self) -> Result<()> {
        self.send(Command::ToggleAudio)
    }

    pub fn set_bgm_volume(&self, volume: f32) -> Result<()> {
        self.send(Command::SetBgmVolume(volume))
    }

    /// Whether an action is playing
    pub fn is_busy(&self) -> bool {
        !self.gate.is_open()
    }
}
