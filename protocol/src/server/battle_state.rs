//! The `battle_state` block: weather, volatile flags, screens and stat stages
//!
//! The server sends this as one flat object whose keys are prefixed with the
//! side (`player_confused`, `opponent_atk_stage`, ...). It is parsed leniently:
//! a key that is missing or has an unexpected type reads as "not set".

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::battle::Side;

/// A stat that can carry a stage modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

impl Stat {
    /// Display order used by the stage indicator
    pub const ALL: [Stat; 7] = [
        Stat::Atk,
        Stat::Def,
        Stat::Spa,
        Stat::Spd,
        Stat::Spe,
        Stat::Accuracy,
        Stat::Evasion,
    ];

    /// Key suffix in the `battle_state` object (`player_<suffix>`)
    pub fn wire_key(&self) -> &'static str {
        match self {
            Stat::Atk => "atk_stage",
            Stat::Def => "def_stage",
            Stat::Spa => "spatk_stage",
            Stat::Spd => "spdef_stage",
            Stat::Spe => "speed_stage",
            Stat::Accuracy => "acc_stage",
            Stat::Evasion => "eva_stage",
        }
    }
}

/// Per-side part of the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideVolatiles {
    pub confused: bool,
    pub leech_seed: bool,
    pub trapped: bool,
    pub badly_poisoned: bool,
    /// Move being charged; empty when the server only sent a flag
    pub charging: Option<String>,
    pub recharge: bool,
    pub protected: bool,
    pub focus_energy: bool,
    pub ingrain: bool,
    pub rampaging: bool,
    /// Remaining turns, 0 when inactive
    pub light_screen: u32,
    pub reflect: u32,
    /// Raw stage values as sent; range is enforced by the display layer
    pub stages: HashMap<Stat, i64>,
}

impl SideVolatiles {
    fn from_map(map: &Map<String, Value>, side: Side) -> Self {
        let prefix = side.as_str();
        let flag = |name: &str| map.get(&format!("{prefix}_{name}")).is_some_and(truthy);

        let charging = map
            .get(&format!("{prefix}_charging"))
            .filter(|v| truthy(v))
            .map(|v| v.as_str().map(str::to_string).unwrap_or_default());

        let screens = map.get(&format!("{prefix}_screens")).and_then(Value::as_object);
        let screen = |name: &str| {
            screens
                .and_then(|s| s.get(name))
                .and_then(Value::as_u64)
                .map(|t| t as u32)
                .unwrap_or(0)
        };

        let stages = Stat::ALL
            .iter()
            .map(|stat| {
                let raw = map
                    .get(&format!("{prefix}_{}", stat.wire_key()))
                    .and_then(Value::as_i64)
                    .unwrap_or(0);
                (*stat, raw)
            })
            .collect();

        Self {
            confused: flag("confused"),
            leech_seed: flag("leech_seed"),
            trapped: flag("trapped"),
            badly_poisoned: flag("badly_poisoned"),
            charging,
            recharge: flag("recharge"),
            protected: flag("protected"),
            focus_energy: flag("focus_energy"),
            ingrain: flag("ingrain"),
            rampaging: flag("rampaging"),
            light_screen: screen("light_screen"),
            reflect: screen("reflect"),
            stages,
        }
    }

    /// Raw stage for a stat, 0 if absent
    pub fn stage(&self, stat: Stat) -> i64 {
        self.stages.get(&stat).copied().unwrap_or(0)
    }
}

/// Full volatile snapshot for both sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct VolatileSnapshot {
    /// Weather key as sent (`sunny`, `rain`, `sandstorm`, `hail`)
    pub weather: Option<String>,
    pub weather_turns: Option<u32>,
    pub player: SideVolatiles,
    pub opponent: SideVolatiles,
}

impl From<Map<String, Value>> for VolatileSnapshot {
    fn from(map: Map<String, Value>) -> Self {
        let weather = map
            .get("weather")
            .and_then(Value::as_str)
            .filter(|w| !w.is_empty())
            .map(str::to_string);
        let weather_turns = map
            .get("weather_turns")
            .and_then(Value::as_u64)
            .filter(|t| *t > 0)
            .map(|t| t as u32);

        Self {
            weather,
            weather_turns,
            player: SideVolatiles::from_map(&map, Side::Player),
            opponent: SideVolatiles::from_map(&map, Side::Opponent),
        }
    }
}

impl VolatileSnapshot {
    pub fn side(&self, side: Side) -> &SideVolatiles {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}

/// Loose truthiness: `true`, non-zero numbers and non-empty strings
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    }
}
