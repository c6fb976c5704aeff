//! One side of the battle field as displayed

use pokearena_protocol::{Side, SideVolatiles, Stat};

use super::conditions::Screen;
use super::pokemon::{CombatantView, HpGauge};
use super::stats::{StageChange, StageRow, StatStages};
use super::status::Volatile;

#[derive(Debug, Clone, PartialEq)]
pub struct SideView {
    pub side: Side,

    /// Active combatant, once known
    pub active: Option<CombatantView>,

    /// HP bar as currently drawn
    pub hp: HpGauge,

    /// Displayed stat stages (always within -6..=6)
    pub stages: StatStages,

    pub volatiles: Vec<Volatile>,

    /// Remaining turns, 0 when inactive
    pub light_screen: u32,
    pub reflect: u32,
}

impl SideView {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            active: None,
            hp: HpGauge::default(),
            stages: StatStages::new(),
            volatiles: Vec::new(),
            light_screen: 0,
            reflect: 0,
        }
    }

    /// Show a combatant, taking its HP bar with it
    pub fn show(&mut self, combatant: CombatantView) {
        self.hp = combatant.hp;
        self.active = Some(combatant);
    }

    /// Authoritative HP from the server
    pub fn set_hp(&mut self, hp: HpGauge) {
        self.hp = hp;
        if let Some(active) = self.active.as_mut() {
            active.hp = hp;
        }
    }

    /// Apply the side's part of a volatile snapshot.
    ///
    /// Returns the stages that differ from the previously displayed ones.
    pub fn apply_volatiles(&mut self, snapshot: &SideVolatiles) -> Vec<StageChange> {
        self.volatiles = Volatile::from_side(snapshot);
        self.light_screen = snapshot.light_screen;
        self.reflect = snapshot.reflect;

        let previous = self.stages.clone();
        for stat in Stat::ALL {
            self.stages.set(stat, snapshot.stage(stat));
        }
        self.stages.changes_from(&previous)
    }

    /// One indicator row per stat, in display order
    pub fn stage_rows(&self) -> Vec<StageRow> {
        Stat::ALL
            .iter()
            .map(|&stat| StageRow::new(stat, self.stages.get(stat)))
            .collect()
    }

    /// The indicator block is hidden while every stage is 0
    pub fn stage_block_visible(&self) -> bool {
        !self.stages.is_clear()
    }

    pub fn screen_turns(&self, screen: Screen) -> u32 {
        match screen {
            Screen::LightScreen => self.light_screen,
            Screen::Reflect => self.reflect,
        }
    }

    /// Badges for active screens
    pub fn screen_badges(&self) -> Vec<String> {
        Screen::ALL
            .iter()
            .filter(|s| self.screen_turns(**s) > 0)
            .map(|s| s.label(self.screen_turns(*s)))
            .collect()
    }

    /// Drop combat state tied to the previous combatant
    pub fn clear_combat_state(&mut self) {
        self.stages.clear();
        self.volatiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::stats::StageFlash;

    fn volatiles(stages: &[(Stat, i64)]) -> SideVolatiles {
        SideVolatiles {
            stages: stages.iter().copied().collect(),
            ..SideVolatiles::default()
        }
    }

    #[test]
    fn test_apply_volatiles_clamps_and_reports_changes() {
        let mut view = SideView::new(Side::Player);

        let changes = view.apply_volatiles(&volatiles(&[(Stat::Atk, 9), (Stat::Def, -1)]));
        assert_eq!(view.stages.atk, 6);
        assert_eq!(view.stages.def, -1);
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.after >= -6 && c.after <= 6));

        // Same snapshot again: nothing flashes
        let changes = view.apply_volatiles(&volatiles(&[(Stat::Atk, 9), (Stat::Def, -1)]));
        assert!(changes.is_empty());

        let changes = view.apply_volatiles(&volatiles(&[(Stat::Atk, 6)]));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].stat, Stat::Def);
        assert_eq!(changes[0].flash, StageFlash::Boost);
    }

    #[test]
    fn test_stage_block_visibility() {
        let mut view = SideView::new(Side::Opponent);
        assert!(!view.stage_block_visible());

        view.apply_volatiles(&volatiles(&[(Stat::Spe, -2)]));
        assert!(view.stage_block_visible());
        assert_eq!(view.stage_rows().len(), 7);
        assert_eq!(view.stage_rows()[4].value, "-2");

        view.apply_volatiles(&volatiles(&[]));
        assert!(!view.stage_block_visible());
    }

    #[test]
    fn test_screen_badges() {
        let mut view = SideView::new(Side::Player);
        view.apply_volatiles(&SideVolatiles {
            light_screen: 3,
            ..SideVolatiles::default()
        });

        assert_eq!(view.screen_badges(), vec!["💠 Écran Lumière (3)".to_string()]);
    }
}
