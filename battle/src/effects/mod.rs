//! Move effect registry
//!
//! Maps a move to the visual effect played between attacker and target.
//! Resolution never fails: an explicit override wins, then the move's
//! category, then its type, then a generic projectile in the type colour.

pub mod particles;

use std::collections::HashMap;

use pokearena_protocol::{MoveCategory, MoveInfo};
use rand::Rng;

use crate::types::Type;
use particles::{Particle, Point, impact_burst};

const WHITE: &str = "#FFFFFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    // Melee
    Slash,
    Punch,
    Tackle,

    // Typed projectiles and auras
    Fireball,
    WaterGun,
    Thunderbolt,
    VineWhip,
    IceBeam,
    PsychicWave,

    /// Orb in the type colour
    Projectile,
}

impl EffectKind {
    pub fn is_melee(&self) -> bool {
        matches!(self, EffectKind::Slash | EffectKind::Punch | EffectKind::Tackle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::Slash => "slash",
            EffectKind::Punch => "punch",
            EffectKind::Tackle => "tackle",
            EffectKind::Fireball => "fireball",
            EffectKind::WaterGun => "water_gun",
            EffectKind::Thunderbolt => "thunderbolt",
            EffectKind::VineWhip => "vine_whip",
            EffectKind::IceBeam => "ice_beam",
            EffectKind::PsychicWave => "psychic",
            EffectKind::Projectile => "projectile",
        }
    }

    /// Particles thrown at the target on impact
    fn impact_count(&self) -> usize {
        match self {
            EffectKind::Punch => 20,
            EffectKind::Tackle => 12,
            EffectKind::Fireball => 30,
            _ => 15,
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the effect player is asked to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectDescriptor {
    pub kind: EffectKind,
    pub move_type: Type,
    /// Impact colour: white for melee, the type colour otherwise
    pub color: &'static str,
    pub impact_particles: usize,
}

impl EffectDescriptor {
    pub fn new(kind: EffectKind, move_type: Type) -> Self {
        Self {
            kind,
            move_type,
            color: if kind.is_melee() { WHITE } else { move_type.color() },
            impact_particles: kind.impact_count(),
        }
    }

    /// Impact particles at `target`
    pub fn impact<R: Rng + ?Sized>(&self, rng: &mut R, target: Point) -> Vec<Particle> {
        impact_burst(rng, target, self.color, self.impact_particles)
    }
}

/// Whitespace removed and lowercased, as used by sound keys and overrides
pub fn normalize_move_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `attacks/{normalized}`, or None for an unnamed move
pub fn move_sound_key(name: &str) -> Option<String> {
    let normalized = normalize_move_name(name);
    (!normalized.is_empty()).then(|| format!("attacks/{normalized}"))
}

#[derive(Debug, Clone)]
pub struct EffectRegistry {
    overrides: HashMap<String, EffectKind>,
}

impl Default for EffectRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("Charge", EffectKind::Tackle);
        registry.register("Tackle", EffectKind::Tackle);
        registry.register("Ultimapoing", EffectKind::Punch);
        registry.register("Mega Punch", EffectKind::Punch);
        registry
    }
}

impl EffectRegistry {
    /// Registry without per-move overrides
    pub fn empty() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Force an effect for one move, matched on the normalised name
    pub fn register(&mut self, move_name: &str, kind: EffectKind) {
        self.overrides.insert(normalize_move_name(move_name), kind);
    }

    pub fn resolve(&self, mv: &MoveInfo) -> EffectDescriptor {
        let move_type = Type::from_protocol_or_normal(&mv.move_type);

        if let Some(kind) = self.overrides.get(&normalize_move_name(&mv.name)) {
            return EffectDescriptor::new(*kind, move_type);
        }

        let kind = match mv.category {
            MoveCategory::Physical => EffectKind::Slash,
            MoveCategory::Special | MoveCategory::Status => match move_type {
                Type::Fire => EffectKind::Fireball,
                Type::Water => EffectKind::WaterGun,
                Type::Electric => EffectKind::Thunderbolt,
                Type::Grass => EffectKind::VineWhip,
                Type::Ice => EffectKind::IceBeam,
                Type::Psychic => EffectKind::PsychicWave,
                _ => EffectKind::Projectile,
            },
        };
        EffectDescriptor::new(kind, move_type)
    }
}
