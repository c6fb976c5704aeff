//! Domain types for the displayed battle state

mod conditions;
mod field;
mod pokemon;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use conditions::{Screen, Weather};
pub use field::FieldState;
pub use pokemon::{CombatantView, HpBand, HpGauge, sprite_name};
pub use pokemon_type::{TYPE_COLORS, Type};
pub use side::SideView;
pub use stats::{
    Segment, StageChange, StageFlash, StageRow, StatDelta, StatStages, stat_deltas,
    stat_full_name, stat_label,
};
pub use status::Volatile;
