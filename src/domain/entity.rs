/// Entities: the player (evader), cats (pursuers), and collectibles.
/// Cats own their whole pursuit state; the machine itself lives in `ai`.

use super::grid::Pos;

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    /// Unit vector of the last legal move; aims item throws.
    pub facing: Pos,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Player { pos, facing: Pos::new(1, 0) }
    }
}

/// Cat pursuit states. Entered/left once per turn by `ai::plan_cat`,
/// except Sleep and the yarn-forced Alert, which item use sets directly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatState {
    Patrol,
    Alert,
    Chase,
    Sleep,
}

#[derive(Clone, Debug)]
pub struct Cat {
    pub id: usize,
    pub pos: Pos,
    pub state: CatState,
    /// Cyclic waypoint route; never empty.
    pub patrol: Vec<Pos>,
    pub patrol_index: usize,
    /// Cell the cat keeps investigating after losing sight (or a yarn lure).
    pub last_known: Option<Pos>,
    /// Ticks left in Alert or Sleep.
    pub timer: u32,
    /// Delta of the last attempted step, for the vision-cone sprite.
    pub facing: Pos,
}

impl Cat {
    /// Spawn at the first waypoint of the route.
    pub fn new(id: usize, patrol: Vec<Pos>) -> Self {
        debug_assert!(!patrol.is_empty());
        let pos = patrol[0];
        Cat {
            id,
            pos,
            state: CatState::Patrol,
            patrol,
            patrol_index: 0,
            last_known: None,
            timer: 0,
            facing: Pos::new(1, 0),
        }
    }

    /// Current patrol waypoint.
    pub fn waypoint(&self) -> Pos {
        self.patrol[self.patrol_index]
    }
}

/// A treat: all must be gathered to win the level.
#[derive(Clone, Debug)]
pub struct Treat {
    pub pos: Pos,
    pub collected: bool,
}

impl Treat {
    pub fn new(pos: Pos) -> Self {
        Treat { pos, collected: false }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PickupKind {
    /// Refills one yarn (distraction) charge.
    Yarn,
    /// Refills one squeaky-toy (stun) charge.
    Toy,
}

/// A ground item that refills one inventory charge when walked over.
#[derive(Clone, Debug)]
pub struct Pickup {
    pub kind: PickupKind,
    pub pos: Pos,
    pub collected: bool,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Pos) -> Self {
        Pickup { kind, pos, collected: false }
    }
}
