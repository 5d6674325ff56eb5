/// Events emitted during a turn.
/// The presentation layer consumes these for animation/sound.

use crate::domain::entity::PickupKind;
use crate::domain::grid::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    TreatCollected { pos: Pos, remaining: usize },
    PickupFound { kind: PickupKind, pos: Pos },
    YarnThrown { target: Pos },
    ToySqueaked,
    /// A cat escalated to Alert or Chase this turn (screen-shake cue).
    Disturbance,
    LevelCleared,
    Caught { cat_id: usize },
}
