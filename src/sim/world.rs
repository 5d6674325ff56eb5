/// WorldState: the complete snapshot of a running round.
///
/// Built once from a level definition, then mutated only by
/// `sim::step::take_turn`. The snapshot is everything a frontend needs
/// to draw a frame: terrain, entities, inventory, move counter, outcome.
/// The core holds no other state between calls.
///
/// The world owns its RNG (pathfinding tie-breaks are the only consumer).
/// Seeding it makes a whole round reproducible.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::RulesConfig;
use crate::domain::entity::{Cat, Pickup, PickupKind, Player, Treat};
use crate::domain::map::GardenMap;
use crate::sim::level::LevelDef;

/// Terminal status of the round. Once Won or Lost, turns are no-ops.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

pub struct WorldState {
    pub map: GardenMap,
    pub player: Player,
    pub cats: Vec<Cat>,
    pub treats: Vec<Treat>,
    pub pickups: Vec<Pickup>,

    // ── Inventory charges ──
    pub yarn: u32,
    pub toys: u32,

    // ── Round tracking ──
    pub move_count: u32,
    pub outcome: Outcome,

    pub rules: RulesConfig,
    pub rng: Pcg32,

    // ── Level metadata (display only) ──
    pub level_name: String,
    pub level_description: String,
    pub par_time: u32,
}

impl WorldState {
    /// Build a fresh round from a level. The seed fixes pathfinding
    /// tie-break order; pass something time-derived for gameplay feel.
    pub fn from_level(def: &LevelDef, rules: RulesConfig, seed: u64) -> Self {
        let rows: Vec<&str> = def.rows.iter().map(|s| s.as_str()).collect();
        let map = GardenMap::parse(&rows);
        let spawns = def.spawns();

        let cats = def
            .patrols
            .iter()
            .filter(|route| !route.is_empty())
            .enumerate()
            .map(|(id, route)| Cat::new(id, route.clone()))
            .collect();

        let mut pickups: Vec<Pickup> = spawns
            .yarns
            .iter()
            .map(|&pos| Pickup::new(PickupKind::Yarn, pos))
            .collect();
        pickups.extend(spawns.toys.iter().map(|&pos| Pickup::new(PickupKind::Toy, pos)));

        WorldState {
            map,
            player: Player::new(spawns.player_start),
            cats,
            treats: spawns.treats.iter().map(|&pos| Treat::new(pos)).collect(),
            pickups,
            yarn: rules.start_yarn,
            toys: rules.start_toys,
            move_count: 0,
            outcome: Outcome::Playing,
            rules,
            rng: Pcg32::seed_from_u64(seed),
            level_name: def.name.clone(),
            level_description: def.description.clone(),
            par_time: def.par_time,
        }
    }

    pub fn treats_remaining(&self) -> usize {
        self.treats.iter().filter(|t| !t.collected).count()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::Playing
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entity::CatState;
    use crate::domain::grid::Pos;
    use crate::domain::tile::Tile;

    use super::*;

    fn def() -> LevelDef {
        LevelDef {
            name: "Test Garden".into(),
            description: String::new(),
            par_time: 30,
            rows: vec![
                "#######".into(),
                "#P.T.Y#".into(),
                "#.,.S.#".into(),
                "#######".into(),
            ],
            patrols: vec![vec![Pos::new(5, 2), Pos::new(1, 2)], vec![]],
        }
    }

    #[test]
    fn builds_entities_from_markers() {
        let w = WorldState::from_level(&def(), RulesConfig::default(), 1);
        assert_eq!(w.player.pos, Pos::new(1, 1));
        assert_eq!(w.treats.len(), 1);
        assert_eq!(w.treats[0].pos, Pos::new(3, 1));
        assert_eq!(w.pickups.len(), 2);
        assert_eq!(w.yarn, 1);
        assert_eq!(w.toys, 1);
        assert_eq!(w.move_count, 0);
        assert_eq!(w.outcome, Outcome::Playing);
        // Markers leave walkable ground behind
        assert_eq!(w.map.tile_at(Pos::new(3, 1)), Tile::Path);
    }

    #[test]
    fn empty_patrol_routes_seed_no_cat() {
        let w = WorldState::from_level(&def(), RulesConfig::default(), 1);
        assert_eq!(w.cats.len(), 1);
        let cat = &w.cats[0];
        assert_eq!(cat.pos, Pos::new(5, 2));
        assert_eq!(cat.state, CatState::Patrol);
        assert_eq!(cat.patrol_index, 0);
    }

    #[test]
    fn missing_player_marker_falls_back() {
        let mut d = def();
        d.rows = vec!["####".into(), "#..#".into(), "####".into()];
        let w = WorldState::from_level(&d, RulesConfig::default(), 1);
        assert_eq!(w.player.pos, Pos::new(1, 1));
    }
}
