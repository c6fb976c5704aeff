//! Volatile conditions shown as badges next to a combatant

use pokearena_protocol::SideVolatiles;

/// Volatile conditions (cleared on switching)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Volatile {
    Confusion,
    LeechSeed,
    Trapped,
    BadlyPoisoned,
    /// Solar Beam etc; carries the move name when the server sends one
    Charging(String),
    Recharging,
    Protected,
    FocusEnergy,
    Ingrain,
    Rampaging,
}

impl Volatile {
    /// Active volatiles for one side, in badge order
    pub fn from_side(side: &SideVolatiles) -> Vec<Volatile> {
        let mut active = Vec::new();
        if side.confused {
            active.push(Volatile::Confusion);
        }
        if side.leech_seed {
            active.push(Volatile::LeechSeed);
        }
        if side.trapped {
            active.push(Volatile::Trapped);
        }
        if side.badly_poisoned {
            active.push(Volatile::BadlyPoisoned);
        }
        if let Some(name) = &side.charging {
            active.push(Volatile::Charging(name.clone()));
        }
        if side.recharge {
            active.push(Volatile::Recharging);
        }
        if side.protected {
            active.push(Volatile::Protected);
        }
        if side.focus_energy {
            active.push(Volatile::FocusEnergy);
        }
        if side.ingrain {
            active.push(Volatile::Ingrain);
        }
        if side.rampaging {
            active.push(Volatile::Rampaging);
        }
        active
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Volatile::Confusion => "😵",
            Volatile::LeechSeed => "🌱",
            Volatile::Trapped => "🔗",
            Volatile::BadlyPoisoned => "☠️",
            Volatile::Charging(_) => "⚡",
            Volatile::Recharging => "💤",
            Volatile::Protected => "🛡️",
            Volatile::FocusEnergy => "🎯",
            Volatile::Ingrain => "🌿",
            Volatile::Rampaging => "🔥",
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Volatile::Confusion => "Confus",
            Volatile::LeechSeed => "Vampigraine",
            Volatile::Trapped => "Piégé",
            Volatile::BadlyPoisoned => "Toxic",
            Volatile::Charging(_) => "Chargement…",
            Volatile::Recharging => "Recharge",
            Volatile::Protected => "Protégé",
            Volatile::FocusEnergy => "Concentré",
            Volatile::Ingrain => "Enraciné",
            Volatile::Rampaging => "Emballement",
        }
    }

    /// Text of the badge
    pub fn badge(&self) -> String {
        match self {
            Volatile::Charging(name) if !name.is_empty() => format!("⚡ {name}…"),
            other => format!("{} {}", other.icon(), other.as_str()),
        }
    }
}

impl std::fmt::Display for Volatile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
