//! Stat stages and related types

use pokearena_protocol::{Stat, StatBlock};

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: Stat, value: i64) {
        let clamped = value.clamp(-6, 6) as i8;
        match stat {
            Stat::Atk => self.atk = clamped,
            Stat::Def => self.def = clamped,
            Stat::Spa => self.spa = clamped,
            Stat::Spd => self.spd = clamped,
            Stat::Spe => self.spe = clamped,
            Stat::Accuracy => self.accuracy = clamped,
            Stat::Evasion => self.evasion = clamped,
        }
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Stats whose stage differs from `previous`, with the flash direction
    pub fn changes_from(&self, previous: &StatStages) -> Vec<StageChange> {
        Stat::ALL
            .iter()
            .filter_map(|&stat| {
                let (before, after) = (previous.get(stat), self.get(stat));
                (before != after).then(|| StageChange {
                    stat,
                    before,
                    after,
                    flash: if after > before {
                        StageFlash::Boost
                    } else {
                        StageFlash::Drop
                    },
                })
            })
            .collect()
    }

    /// Get the multiplier for a stat stage
    /// +1 = 1.5x, +2 = 2x, ..., +6 = 4x
    /// -1 = 0.67x, -2 = 0.5x, ..., -6 = 0.25x
    pub fn multiplier(stage: i8) -> f32 {
        let stage = stage.clamp(-6, 6);
        if stage >= 0 {
            (2 + stage as i32) as f32 / 2.0
        } else {
            2.0 / (2 - stage as i32) as f32
        }
    }

    /// Tooltip label for a stage. Out-of-range input is clamped first, so
    /// every `i8` has a label.
    pub fn multiplier_label(stage: i8) -> &'static str {
        match stage.clamp(-6, 6) {
            6 => "×4",
            5 => "×3,5",
            4 => "×3",
            3 => "×2,5",
            2 => "×2",
            1 => "×1,5",
            0 => "Normal",
            -1 => "×0,67",
            -2 => "×0,5",
            -3 => "×0,4",
            -4 => "×0,33",
            -5 => "×0,29",
            _ => "×0,25",
        }
    }

    /// Check if all stats are at 0
    pub fn is_clear(&self) -> bool {
        Stat::ALL.iter().all(|&stat| self.get(stat) == 0)
    }
}

/// Direction of the flash played when a stage changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageFlash {
    Boost,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChange {
    pub stat: Stat,
    pub before: i8,
    pub after: i8,
    pub flash: StageFlash,
}

/// Abbreviation shown in the indicator row
pub fn stat_label(stat: Stat) -> &'static str {
    match stat {
        Stat::Atk => "ATK",
        Stat::Def => "DEF",
        Stat::Spa => "SpA",
        Stat::Spd => "SpD",
        Stat::Spe => "VIT",
        Stat::Accuracy => "PRÉC",
        Stat::Evasion => "ESQ",
    }
}

/// Full name shown in the tooltip
pub fn stat_full_name(stat: Stat) -> &'static str {
    match stat {
        Stat::Atk => "Attaque",
        Stat::Def => "Défense",
        Stat::Spa => "Attaque Spé.",
        Stat::Spd => "Défense Spé.",
        Stat::Spe => "Vitesse",
        Stat::Accuracy => "Précision",
        Stat::Evasion => "Esquive",
    }
}

/// One cell of the 13-cell stage track (positions -6..=+6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Center,
    Idle,
    Boost,
    Drop,
    Dim,
}

/// Rendered state of one indicator row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRow {
    pub stat: Stat,
    pub label: &'static str,
    /// `—` at zero, otherwise signed (`+2`, `-1`)
    pub value: String,
    /// `▲`, `▼` or empty
    pub arrow: &'static str,
    pub tooltip: String,
    pub track: [Segment; 13],
}

impl StageRow {
    pub fn new(stat: Stat, stage: i8) -> Self {
        let stage = stage.clamp(-6, 6);
        let value = match stage {
            0 => "—".to_string(),
            s if s > 0 => format!("+{s}"),
            s => s.to_string(),
        };
        let arrow = match stage.signum() {
            1 => "▲",
            -1 => "▼",
            _ => "",
        };

        Self {
            stat,
            label: stat_label(stat),
            value,
            arrow,
            tooltip: format!(
                "{} : {}",
                stat_full_name(stat),
                StatStages::multiplier_label(stage)
            ),
            track: track(stage),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.arrow.is_empty()
    }
}

fn track(stage: i8) -> [Segment; 13] {
    let mut segments = [Segment::Idle; 13];
    for (i, seg) in segments.iter_mut().enumerate() {
        let pos = i as i8 - 6;
        *seg = if pos == 0 {
            Segment::Center
        } else if stage > 0 && pos > 0 && pos <= stage {
            Segment::Boost
        } else if stage < 0 && pos < 0 && pos >= stage {
            Segment::Drop
        } else if (stage > 0 && pos < 0) || (stage < 0 && pos > 0) {
            Segment::Dim
        } else {
            Segment::Idle
        };
    }
    segments
}

/// One line of the evolution result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatDelta {
    pub label: &'static str,
    pub before: u32,
    pub after: u32,
}

impl StatDelta {
    pub fn diff(&self) -> i64 {
        self.after as i64 - self.before as i64
    }

    /// `+N`, `-N` or `—`
    pub fn diff_label(&self) -> String {
        match self.diff() {
            0 => "—".to_string(),
            d if d > 0 => format!("+{d}"),
            d => d.to_string(),
        }
    }
}

/// Before/after rows for the six base stats
pub fn stat_deltas(before: &StatBlock, after: &StatBlock) -> Vec<StatDelta> {
    let rows = [
        ("PV", before.hp, after.hp),
        ("Attaque", before.attack, after.attack),
        ("Défense", before.defense, after.defense),
        ("Att. Spé.", before.special_attack, after.special_attack),
        ("Def. Spé.", before.special_defense, after.special_defense),
        ("Vitesse", before.speed, after.speed),
    ];
    rows.into_iter()
        .map(|(label, before, after)| StatDelta {
            label,
            before,
            after,
        })
        .collect()
}
