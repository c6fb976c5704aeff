//! Audio manager: music, sound effects, cries and the evolution jingle
//!
//! Playback failures never propagate. A missing clip is logged and skipped;
//! a clip refused by the autoplay policy waits for the first user gesture
//! (see [`AudioManager::on_user_gesture`]).

use std::sync::Arc;

use crate::error::PlaybackError;
use crate::ports::{AudioBackend, Channel, SettingsStore};
use crate::storage::keys;

pub const DEFAULT_BGM_PERCENT: f32 = 30.0;
pub const SFX_VOLUME: f32 = 0.5;
pub const CRY_VOLUME: f32 = 0.7;
pub const JINGLE_VOLUME: f32 = 0.85;

pub const EVOLUTION_JINGLE: &str = "jingles/evolution.mp3";

/// Sound effect keys
pub mod sfx {
    pub const SELECT: &str = "ui/select";
    pub const CONFIRM: &str = "ui/confirm";
    pub const CANCEL: &str = "ui/cancel";
    pub const ERROR: &str = "ui/error";
    pub const EXP_GAIN: &str = "ui/exp_gain";
    pub const HIT: &str = "attacks/hit";
    pub const FAINT: &str = "battle/faint";
    pub const VICTORY: &str = "battle/victory";
    pub const DEFEAT: &str = "battle/defeat";
    pub const LEVEL_UP: &str = "battle/levelup";
    pub const CAPTURE_SUCCESS: &str = "capture/success";
    pub const CAPTURE_FAILED: &str = "capture/failed";
}

const RIVAL_TRACK: &str = "battle_rival";
const RIVAL_FALLBACK: &str = "battle_trainer";

/// Display name of a music track
pub fn track_label(track: &str) -> &str {
    match track {
        "battle_wild" => "Combat Sauvage",
        "battle_trainer" => "Combat Dresseur",
        "battle_gym" => "Combat Arène",
        "battle_rival" => "Combat Rival",
        other => other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volumes {
    pub bgm: f32,
    pub sfx: f32,
    pub cries: f32,
}

/// What became of a music request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BgmStatus {
    Playing,
    /// Loaded but muted until the player interacts with the page
    AwaitingGesture,
    Unavailable,
    Disabled,
}

pub struct AudioManager {
    backend: Arc<dyn AudioBackend>,
    settings: Arc<dyn SettingsStore>,
    root: String,
    volume: Volumes,
    enabled: bool,
    unlocked: bool,
    pending_unlock: bool,
    current_track: Option<String>,
}

impl AudioManager {
    pub fn new(backend: Arc<dyn AudioBackend>, settings: Arc<dyn SettingsStore>) -> Self {
        let bgm_percent = settings
            .load(keys::BGM_VOLUME)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_BGM_PERCENT)
            .clamp(0.0, 100.0);
        let unlocked = settings.load(keys::AUDIO_UNLOCKED).as_deref() == Some("1");

        tracing::debug!(bgm = bgm_percent, unlocked, "Audio manager ready");

        Self {
            backend,
            settings,
            root: "/static/sounds".to_string(),
            volume: Volumes {
                bgm: bgm_percent / 100.0,
                sfx: SFX_VOLUME,
                cries: CRY_VOLUME,
            },
            enabled: true,
            unlocked,
            pending_unlock: false,
            current_track: None,
        }
    }

    /// Directory the clip paths are relative to
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into().trim_end_matches('/').to_string();
        self
    }

    pub fn volumes(&self) -> Volumes {
        self.volume
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_awaiting_gesture(&self) -> bool {
        self.pending_unlock
    }

    pub fn current_track(&self) -> Option<&str> {
        self.current_track.as_deref()
    }

    fn path(&self, relative: &str) -> String {
        format!("{}/{}", self.root, relative)
    }

    fn mark_unlocked(&mut self) {
        self.unlocked = true;
        self.settings.save(keys::AUDIO_UNLOCKED, "1");
    }

    /// Start a looping music track, replacing the current one
    pub fn play_bgm(&mut self, track: &str) -> BgmStatus {
        if !self.enabled {
            return BgmStatus::Disabled;
        }

        self.current_track = Some(track.to_string());
        self.backend.stop(Channel::Bgm);

        let path = self.path(&format!("bgm/{track}.mp3"));
        match self.backend.play(Channel::Bgm, &path, self.volume.bgm) {
            Ok(()) => {
                tracing::debug!(track, "Music started");
                self.mark_unlocked();
                BgmStatus::Playing
            }
            Err(PlaybackError::Blocked) => {
                self.backend.set_muted(Channel::Bgm, true);
                if !self.pending_unlock {
                    tracing::info!(track, "Music muted until the first user gesture");
                    self.pending_unlock = true;
                }
                BgmStatus::AwaitingGesture
            }
            Err(PlaybackError::NotFound(_)) if track == RIVAL_TRACK => {
                tracing::info!(fallback = RIVAL_FALLBACK, "Rival track missing");
                self.play_bgm(RIVAL_FALLBACK)
            }
            Err(e) => {
                tracing::warn!(track, error = %e, "Music unavailable");
                BgmStatus::Unavailable
            }
        }
    }

    /// First click, key press or touch on the page.
    ///
    /// Returns true if muted music was waiting for it and is now audible.
    pub fn on_user_gesture(&mut self) -> bool {
        if !self.pending_unlock {
            return false;
        }

        self.pending_unlock = false;
        self.backend.set_muted(Channel::Bgm, false);
        self.backend.set_volume(Channel::Bgm, self.volume.bgm);
        if let Err(e) = self.backend.resume(Channel::Bgm) {
            tracing::warn!(error = %e, "Music did not resume after the gesture");
        }
        self.mark_unlocked();
        true
    }

    pub fn stop_bgm(&self) {
        self.backend.stop(Channel::Bgm);
        tracing::debug!("Music stopped");
    }

    pub fn pause_bgm(&self) {
        self.backend.pause(Channel::Bgm);
    }

    pub fn resume_bgm(&self) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.backend.resume(Channel::Bgm) {
            tracing::warn!(error = %e, "Resume music failed");
        }
    }

    /// Set the music volume and remember it for the next page
    pub fn set_bgm_volume(&mut self, volume: f32) {
        self.volume.bgm = volume.clamp(0.0, 1.0);
        self.backend.set_volume(Channel::Bgm, self.volume.bgm);
        let percent = (self.volume.bgm * 100.0).round() as u32;
        self.settings.save(keys::BGM_VOLUME, &percent.to_string());
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.volume.sfx = volume.clamp(0.0, 1.0);
    }

    pub fn set_cry_volume(&mut self, volume: f32) {
        self.volume.cries = volume.clamp(0.0, 1.0);
    }

    /// Scale all channels from one slider
    pub fn set_master_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.volume = Volumes {
            bgm: volume * 0.3,
            sfx: volume * SFX_VOLUME,
            cries: volume * CRY_VOLUME,
        };
        self.backend.set_volume(Channel::Bgm, self.volume.bgm);
    }

    /// Mute or unmute everything; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.resume_bgm();
        } else {
            self.stop_bgm();
        }
        tracing::info!(enabled = self.enabled, "Audio toggled");
        self.enabled
    }

    /// Play a sound effect: `.wav` first, then `.mp3`, then nothing
    pub fn play_sfx(&self, sound: &str) {
        if !self.enabled {
            return;
        }

        let wav = self.path(&format!("sfx/{sound}.wav"));
        let Err(e) = self.backend.play(Channel::Sfx, &wav, self.volume.sfx) else {
            return;
        };
        tracing::warn!(sound, error = %e, "SFX playback failed, trying mp3");

        let mp3 = self.path(&format!("sfx/{sound}.mp3"));
        if let Err(e) = self.backend.play(Channel::Sfx, &mp3, self.volume.sfx) {
            tracing::debug!(sound, error = %e, "No audio file found");
        }
    }

    /// Cry by Pokédex number, zero-padded to three digits
    pub fn play_cry(&self, species_id: u32) {
        if !self.enabled {
            return;
        }

        let path = self.path(&format!("cries/{species_id:03}.wav"));
        if let Err(e) = self.backend.play(Channel::Cry, &path, self.volume.cries) {
            tracing::warn!(species_id, error = %e, "Cry playback failed");
        }
    }

    pub fn play_jingle(&self, clip: &str) {
        if let Err(e) = self
            .backend
            .play(Channel::Jingle, &self.path(clip), JINGLE_VOLUME)
        {
            tracing::warn!(clip, error = %e, "Jingle playback failed");
        }
    }

    pub fn stop_jingle(&self) {
        self.backend.stop(Channel::Jingle);
    }

    /// Position in the jingle, if the backend knows it
    pub fn jingle_position_ms(&self) -> Option<u64> {
        self.backend
            .position_ms(Channel::Jingle)
            .filter(|&position| position > 0)
    }
}
