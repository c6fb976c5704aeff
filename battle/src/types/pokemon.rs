//! Displayed combatant state

use pokearena_protocol::{CombatantSnapshot, MoveSlot, RosterMember};

/// Colour band of an HP bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HpBand {
    High,
    Medium,
    Low,
}

impl HpBand {
    /// `> 50` high, `> 20` medium, anything else low
    pub fn from_percent(percent: u32) -> Self {
        if percent > 50 {
            HpBand::High
        } else if percent > 20 {
            HpBand::Medium
        } else {
            HpBand::Low
        }
    }

    /// CSS class of the bar
    pub fn as_str(&self) -> &'static str {
        match self {
            HpBand::High => "hp-high",
            HpBand::Medium => "hp-medium",
            HpBand::Low => "hp-low",
        }
    }
}

/// Absolute HP value as rendered by a bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HpGauge {
    pub current: u32,
    pub max: u32,
}

impl HpGauge {
    pub fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    /// Floored bar width, 0 when max is unknown
    pub fn percent(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        ((self.current as u64 * 100) / self.max as u64).min(100) as u32
    }

    pub fn band(&self) -> HpBand {
        HpBand::from_percent(self.percent())
    }

    pub fn is_fainted(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

impl From<&RosterMember> for HpGauge {
    fn from(member: &RosterMember) -> Self {
        Self::new(member.current_hp, member.max_hp)
    }
}

/// Combatant currently shown on one side of the field
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantView {
    pub id: u64,
    pub name: String,
    pub species_name: String,
    pub level: u32,
    pub hp: HpGauge,
    pub shiny: bool,
    /// Moves menu; only known for the player's combatant
    pub moves: Vec<MoveSlot>,
    pub exp_percent: Option<f64>,
}

impl CombatantView {
    pub fn from_snapshot(snapshot: &CombatantSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name.clone(),
            species_name: snapshot.species_name.clone(),
            level: snapshot.level,
            hp: HpGauge::new(snapshot.current_hp, snapshot.max_hp),
            shiny: snapshot.is_shiny,
            moves: snapshot.moves.clone().unwrap_or_default(),
            exp_percent: snapshot.exp_percent,
        }
    }

    /// Refresh from a snapshot of the same combatant.
    ///
    /// Fields the server left out keep their displayed value.
    pub fn refresh(&mut self, snapshot: &CombatantSnapshot) {
        self.name = snapshot.name.clone();
        if !snapshot.species_name.is_empty() {
            self.species_name = snapshot.species_name.clone();
        }
        self.level = snapshot.level;
        self.hp = HpGauge::new(snapshot.current_hp, snapshot.max_hp);
        self.shiny = snapshot.is_shiny;
        if let Some(moves) = &snapshot.moves {
            self.moves = moves.clone();
        }
        if snapshot.exp_percent.is_some() {
            self.exp_percent = snapshot.exp_percent;
        }
    }

    /// `Niv.{level}`
    pub fn level_label(&self) -> String {
        format!("Niv.{}", self.level)
    }

    pub fn is_fainted(&self) -> bool {
        self.hp.is_fainted()
    }
}

/// Sprite file stem: lowercase alphanumerics, gender symbols become `m`/`f`
pub fn sprite_name(species: &str) -> String {
    let suffix = if species.contains('♂') {
        "m"
    } else if species.contains('♀') {
        "f"
    } else {
        ""
    };
    let mut stem: String = species
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    stem.push_str(suffix);
    stem
}
