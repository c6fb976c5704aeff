//! Shared types for turn messages

use serde::Deserialize;

/// One side of the battle, from the local player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "player" => Some(Side::Player),
            "opponent" => Some(Side::Opponent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }

    /// The side this side attacks
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    #[default]
    Special,
    Status,
}

impl MoveCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "physical" => Some(MoveCategory::Physical),
            "special" => Some(MoveCategory::Special),
            "status" => Some(MoveCategory::Status),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "physical",
            MoveCategory::Special => "special",
            MoveCategory::Status => "status",
        }
    }
}

/// The move a side used this turn
///
/// Every field is optional on the wire; missing values fall back to an
/// unnamed special move of type `normal`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveInfo {
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_move_type", rename = "type")]
    pub move_type: String,

    #[serde(default)]
    pub category: MoveCategory,
}

fn default_move_type() -> String {
    "normal".to_string()
}

impl Default for MoveInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            move_type: default_move_type(),
            category: MoveCategory::default(),
        }
    }
}

impl MoveInfo {
    pub fn new(name: impl Into<String>, move_type: impl Into<String>, category: MoveCategory) -> Self {
        Self {
            name: name.into(),
            move_type: move_type.into(),
            category,
        }
    }

    /// Whether the server named the move
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Who acted first this turn and with what
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TurnInfo {
    #[serde(default = "default_true")]
    pub player_first: bool,

    #[serde(default)]
    pub second_skipped: bool,

    #[serde(default)]
    pub player_move: Option<MoveInfo>,

    #[serde(default)]
    pub opponent_move: Option<MoveInfo>,
}

fn default_true() -> bool {
    true
}

impl Default for TurnInfo {
    fn default() -> Self {
        Self {
            player_first: true,
            second_skipped: false,
            player_move: None,
            opponent_move: None,
        }
    }
}

impl TurnInfo {
    /// Whether `side` got to act this turn.
    ///
    /// A side is skipped only when it was second in order and the server
    /// flagged the second action as skipped.
    pub fn acted(&self, side: Side) -> bool {
        match side {
            Side::Player => !(!self.player_first && self.second_skipped),
            Side::Opponent => !(self.player_first && self.second_skipped),
        }
    }

    /// Whether `side` was on the receiving end of an attack this turn.
    ///
    /// Only the other side's action can hit it, so a skipped second actor
    /// leaves the first actor untouched.
    pub fn was_hit(&self, side: Side) -> bool {
        self.acted(side.other())
    }

    /// Sides in resolution order
    pub fn order(&self) -> [Side; 2] {
        if self.player_first {
            [Side::Player, Side::Opponent]
        } else {
            [Side::Opponent, Side::Player]
        }
    }

    /// The move `side` used, if the server reported one
    pub fn move_of(&self, side: Side) -> Option<&MoveInfo> {
        match side {
            Side::Player => self.player_move.as_ref(),
            Side::Opponent => self.opponent_move.as_ref(),
        }
    }
}
