//! Field and side conditions

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Sunny,
    Rain,
    Sandstorm,
    Hail,
}

impl Weather {
    /// Parse from protocol string
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sunny" | "sun" => Some(Weather::Sunny),
            "rain" => Some(Weather::Rain),
            "sandstorm" | "sand" => Some(Weather::Sandstorm),
            "hail" => Some(Weather::Hail),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Rain => "rain",
            Weather::Sandstorm => "sandstorm",
            Weather::Hail => "hail",
        }
    }

    /// Banner label, icon included
    pub fn label(&self) -> &'static str {
        match self {
            Weather::Sunny => "☀️ Soleil intense",
            Weather::Rain => "🌧️ Pluie torrentielle",
            Weather::Sandstorm => "🌪️ Tempête de sable",
            Weather::Hail => "🌨️ Grêle",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Side conditions that show a turn counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    LightScreen,
    Reflect,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::LightScreen, Screen::Reflect];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::LightScreen => "light_screen",
            Screen::Reflect => "reflect",
        }
    }

    /// Badge text for a screen with `turns` remaining
    pub fn label(&self, turns: u32) -> String {
        match self {
            Screen::LightScreen => format!("💠 Écran Lumière ({turns})"),
            Screen::Reflect => format!("🔴 Mur ({turns})"),
        }
    }
}
