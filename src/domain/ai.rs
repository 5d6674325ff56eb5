/// Cat state machine — one planning step per cat per turn.
///
/// `plan_cat` is pure with respect to the world: it reads the map, one
/// cat, and the player's position, and returns what that cat wants to do.
/// The turn engine applies plans against a pre-turn snapshot of all cat
/// positions, so collision avoidance is simultaneous, not sequential.
///
/// Transitions:
///   Patrol → Chase   detection check passes
///   Chase  → Alert   sight lost; investigate the last sighted cell, 5 ticks
///   Alert  → Chase   detection check passes again
///   Alert  → Patrol  countdown expired
///   Sleep  → Patrol  countdown expired (resumes patrol logic the same turn)
///
/// Sleep is only entered from outside (the squeaky toy), and Alert can
/// also be forced from outside with a yarn lure and no sighting.

use rand::Rng;

use crate::config::RulesConfig;

use super::entity::{Cat, CatState};
use super::grid::Pos;
use super::map::GardenMap;
use super::pathfind::next_step_toward;
use super::vision::has_line_of_sight;

/// What one cat wants to do this turn. `next_pos` is a wish; the turn
/// engine discards it if another cat already stands there.
#[derive(Clone, Debug)]
pub struct CatPlan {
    pub next_pos: Pos,
    pub state: CatState,
    pub timer: u32,
    pub last_known: Option<Pos>,
    pub patrol_index: usize,
}

/// Detection check: close enough, line of sight clear, and the player is
/// not standing in grass. Grass conceals regardless of distance or sight.
pub fn detects(map: &GardenMap, cat_pos: Pos, player_pos: Pos, rules: &RulesConfig) -> bool {
    cat_pos.manhattan(player_pos) <= rules.sight_radius
        && has_line_of_sight(map, cat_pos, player_pos)
        && !map.tile_at(player_pos).conceals()
}

pub fn plan_cat<R: Rng>(
    map: &GardenMap,
    cat: &Cat,
    player_pos: Pos,
    rules: &RulesConfig,
    rng: &mut R,
) -> CatPlan {
    let mut state = cat.state;
    let mut timer = cat.timer;
    let mut last_known = cat.last_known;
    let mut patrol_index = cat.patrol_index;
    let mut next_pos = cat.pos;

    if state == CatState::Sleep {
        if timer > 0 {
            return CatPlan {
                next_pos,
                state,
                timer: timer - 1,
                last_known,
                patrol_index,
            };
        }
        // Countdown expired: wake up and run patrol logic this same turn.
        state = CatState::Patrol;
    }

    if detects(map, cat.pos, player_pos, rules) {
        state = CatState::Chase;
        last_known = Some(player_pos);
    } else if state == CatState::Chase {
        // Sight lost: investigate the last sighted cell.
        state = CatState::Alert;
        timer = rules.alert_ticks;
    }

    match state {
        CatState::Chase => {
            next_pos = next_step_toward(map, cat.pos, player_pos, rng);
        }
        CatState::Alert => {
            if let Some(lk) = last_known {
                next_pos = next_step_toward(map, cat.pos, lk, rng);
                // Ticks down once the investigated cell is reached.
                if next_pos == lk {
                    timer = timer.saturating_sub(1);
                }
            } else {
                // Lure with no recorded cell: pure timer expiry.
                timer = timer.saturating_sub(1);
            }
            if timer == 0 {
                state = CatState::Patrol;
            }
        }
        CatState::Patrol => {
            let wp = cat.waypoint();
            if cat.pos == wp {
                // On the waypoint: advance the route, spend the turn.
                patrol_index = (patrol_index + 1) % cat.patrol.len();
            } else {
                next_pos = next_step_toward(map, cat.pos, wp, rng);
            }
        }
        CatState::Sleep => unreachable!("sleep handled above"),
    }

    CatPlan { next_pos, state, timer, last_known, patrol_index }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(11)
    }

    fn rules() -> RulesConfig {
        RulesConfig::default()
    }

    fn corridor() -> GardenMap {
        GardenMap::parse(&[
            "##########",
            "#........#",
            "##########",
        ])
    }

    fn cat_at(pos: Pos) -> Cat {
        let mut c = Cat::new(0, vec![pos]);
        c.pos = pos;
        c
    }

    #[test]
    fn detection_boundary_at_radius() {
        let m = corridor();
        let r = rules();
        // Manhattan distance exactly 5: detected
        assert!(detects(&m, Pos::new(1, 1), Pos::new(6, 1), &r));
        // Distance 6: not detected
        assert!(!detects(&m, Pos::new(1, 1), Pos::new(7, 1), &r));
    }

    #[test]
    fn grass_conceals_at_any_distance() {
        let m = GardenMap::parse(&[
            "##########",
            "#.,......#",
            "##########",
        ]);
        let r = rules();
        // Adjacent, clear sight, but the player stands in grass
        assert!(!detects(&m, Pos::new(1, 1), Pos::new(2, 1), &r));
        assert!(detects(&m, Pos::new(1, 1), Pos::new(3, 1), &r));
    }

    #[test]
    fn wall_breaks_detection() {
        let m = GardenMap::parse(&[
            "######",
            "#.##.#",
            "######",
        ]);
        assert!(!detects(&m, Pos::new(1, 1), Pos::new(4, 1), &rules()));
    }

    #[test]
    fn patrol_sees_player_and_chases() {
        let m = corridor();
        let cat = cat_at(Pos::new(1, 1));
        let plan = plan_cat(&m, &cat, Pos::new(4, 1), &rules(), &mut rng());
        assert_eq!(plan.state, CatState::Chase);
        assert_eq!(plan.next_pos, Pos::new(2, 1));
        assert_eq!(plan.last_known, Some(Pos::new(4, 1)));
    }

    #[test]
    fn patrol_advances_waypoint_without_moving() {
        let m = corridor();
        let mut cat = Cat::new(0, vec![Pos::new(1, 1), Pos::new(8, 1)]);
        cat.pos = Pos::new(1, 1);
        // Player far away, no detection
        let plan = plan_cat(&m, &cat, Pos::new(8, 1), &rules(), &mut rng());
        assert_eq!(plan.state, CatState::Patrol);
        assert_eq!(plan.patrol_index, 1);
        assert_eq!(plan.next_pos, cat.pos);
    }

    #[test]
    fn patrol_steps_toward_waypoint() {
        let m = corridor();
        let mut cat = Cat::new(0, vec![Pos::new(1, 1), Pos::new(4, 1)]);
        cat.patrol_index = 1;
        let plan = plan_cat(&m, &cat, Pos::new(8, 1), &rules(), &mut rng());
        assert_eq!(plan.state, CatState::Patrol);
        assert_eq!(plan.next_pos, Pos::new(2, 1));
    }

    #[test]
    fn chase_losing_sight_turns_alert_with_last_sighted_cell() {
        let m = GardenMap::parse(&[
            "##########",
            "#........#",
            "#.######.#",
            "#........#",
            "##########",
        ]);
        let mut cat = cat_at(Pos::new(1, 1));
        cat.state = CatState::Chase;
        cat.last_known = Some(Pos::new(8, 1));
        // Player slipped around the corner: distance 8, no detection
        let plan = plan_cat(&m, &cat, Pos::new(8, 3), &rules(), &mut rng());
        assert_eq!(plan.state, CatState::Alert);
        assert_eq!(plan.timer, 5);
        assert_eq!(plan.last_known, Some(Pos::new(8, 1)));
        assert_eq!(plan.next_pos, Pos::new(2, 1));
    }

    #[test]
    fn alert_ticks_down_at_investigated_cell_then_resumes_patrol() {
        let m = corridor();
        let mut cat = cat_at(Pos::new(8, 1));
        cat.state = CatState::Alert;
        cat.last_known = Some(Pos::new(8, 1));
        cat.timer = 2;
        let far = Pos::new(1, 1);
        // Already at the cell: next step is a hold and the timer ticks.
        // Player at distance 7 stays undetected.
        let plan = plan_cat(&m, &cat, far, &rules(), &mut rng());
        assert_eq!(plan.state, CatState::Alert);
        assert_eq!(plan.timer, 1);
        cat.timer = plan.timer;
        let plan = plan_cat(&m, &cat, far, &rules(), &mut rng());
        assert_eq!(plan.timer, 0);
        assert_eq!(plan.state, CatState::Patrol);
    }

    #[test]
    fn alert_without_cell_expires_on_pure_timer() {
        let m = corridor();
        let mut cat = cat_at(Pos::new(1, 1));
        cat.state = CatState::Alert;
        cat.last_known = None;
        cat.timer = 1;
        let plan = plan_cat(&m, &cat, Pos::new(8, 1), &rules(), &mut rng());
        assert_eq!(plan.state, CatState::Patrol);
        assert_eq!(plan.next_pos, cat.pos);
    }

    #[test]
    fn sleep_counts_down_without_moving() {
        let m = corridor();
        let mut cat = Cat::new(0, vec![Pos::new(1, 1), Pos::new(8, 1)]);
        cat.state = CatState::Sleep;
        cat.timer = 2;
        // Player adjacent: sleep ignores detection entirely
        let plan = plan_cat(&m, &cat, Pos::new(2, 1), &rules(), &mut rng());
        assert_eq!(plan.state, CatState::Sleep);
        assert_eq!(plan.timer, 1);
        assert_eq!(plan.next_pos, cat.pos);
    }

    #[test]
    fn sleep_expiry_resumes_patrol_the_same_turn() {
        let m = corridor();
        let mut cat = Cat::new(0, vec![Pos::new(1, 1), Pos::new(8, 1)]);
        cat.state = CatState::Sleep;
        cat.timer = 0;
        cat.patrol_index = 1;
        let plan = plan_cat(&m, &cat, Pos::new(8, 1), &rules(), &mut rng());
        // Wakes into patrol and takes its step immediately
        assert_eq!(plan.next_pos, Pos::new(2, 1));
    }
}
