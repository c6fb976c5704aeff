//! Global field state

use pokearena_protocol::VolatileSnapshot;

use super::conditions::Weather;

/// Global field state affecting both sides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Weather key as sent, kept even when unrecognised
    pub weather: Option<String>,

    /// Remaining turns, if the server sent a count
    pub weather_turns: Option<u32>,
}

impl FieldState {
    /// Create a new empty field state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, snapshot: &VolatileSnapshot) {
        self.weather = snapshot.weather.clone();
        self.weather_turns = snapshot.weather_turns;
    }

    pub fn known_weather(&self) -> Option<Weather> {
        self.weather.as_deref().and_then(Weather::from_protocol)
    }

    /// Banner text, or None when the banner is hidden
    pub fn weather_banner(&self) -> Option<String> {
        let raw = self.weather.as_deref()?;
        let label = self
            .known_weather()
            .map(|w| w.label().to_string())
            .unwrap_or_else(|| raw.to_string());

        Some(match self.weather_turns {
            Some(turns) => format!("{label} ({turns} tours)"),
            None => label,
        })
    }
}
