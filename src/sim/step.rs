/// The turn function: resolves one player intent against the world.
///
/// One call = one turn. Resolution order for a move:
///   1. Legality (solid target cell → silent no-op, turn not consumed)
///   2. Commit player position + facing
///   3. Treats; collecting the last one wins and skips the rest
///   4. Refill pickups
///   5. Cat phase (grace period permitting), against a pre-turn snapshot
///   6. Move counter
///   7. Capture check, including the swapped-cells case
///
/// Item intents touch cat state only: no movement, no counter, no capture.
/// Every rejection path returns an empty event list with the world
/// untouched; nothing here can fail mid-turn.

use crate::domain::ai;
use crate::domain::entity::{CatState, PickupKind};
use crate::domain::grid::{Dir, Pos};
use crate::sim::event::GameEvent;
use crate::sim::world::{Outcome, WorldState};

/// One player intent per turn.
#[derive(Clone, Copy, Debug)]
pub enum TurnInput {
    Move(Dir),
    /// Distraction: lure every cat to a cell ahead of the player.
    ThrowYarn,
    /// Stun: put every cat to sleep.
    SqueakToy,
}

pub fn take_turn(world: &mut WorldState, input: TurnInput) -> Vec<GameEvent> {
    if world.is_terminal() {
        return vec![];
    }
    match input {
        TurnInput::Move(dir) => resolve_move(world, dir),
        TurnInput::ThrowYarn => resolve_yarn(world),
        TurnInput::SqueakToy => resolve_toy(world),
    }
}

// ══════════════════════════════════════════════════════════════
// Movement turn
// ══════════════════════════════════════════════════════════════

fn resolve_move(world: &mut WorldState, dir: Dir) -> Vec<GameEvent> {
    let (dx, dy) = dir.delta();
    let old_pos = world.player.pos;
    let new_pos = old_pos.offset(dx, dy);

    if world.map.is_solid(new_pos) {
        return vec![];
    }

    let mut events = Vec::new();
    world.player.facing = Pos::new(dx, dy);
    world.player.pos = new_pos;

    if resolve_treats(world, new_pos, &mut events) {
        // Last treat collected: round won, cats never get this turn.
        return events;
    }
    resolve_pickups(world, new_pos, &mut events);

    let pre_cats: Vec<Pos> = world.cats.iter().map(|c| c.pos).collect();
    resolve_cats(world, new_pos, &mut events);

    world.move_count += 1;

    resolve_capture(world, &pre_cats, old_pos, new_pos, &mut events);
    events
}

/// Returns true when the round was just won.
fn resolve_treats(world: &mut WorldState, pos: Pos, events: &mut Vec<GameEvent>) -> bool {
    let hit = world
        .treats
        .iter_mut()
        .find(|t| !t.collected && t.pos == pos);
    let Some(treat) = hit else { return false };
    treat.collected = true;

    let remaining = world.treats_remaining();
    events.push(GameEvent::TreatCollected { pos, remaining });
    if remaining == 0 {
        world.outcome = Outcome::Won;
        events.push(GameEvent::LevelCleared);
        return true;
    }
    false
}

fn resolve_pickups(world: &mut WorldState, pos: Pos, events: &mut Vec<GameEvent>) {
    let hit = world
        .pickups
        .iter_mut()
        .find(|p| !p.collected && p.pos == pos);
    let Some(pickup) = hit else { return };
    pickup.collected = true;

    match pickup.kind {
        PickupKind::Yarn => world.yarn += 1,
        PickupKind::Toy => world.toys += 1,
    }
    events.push(GameEvent::PickupFound { kind: pickup.kind, pos });
}

/// Advance every cat one state-machine step against the player's new
/// position. Collision checks read the pre-turn snapshot of cat
/// positions, so two cats aiming at the same cell both get held and
/// the order of iteration cannot matter.
fn resolve_cats(world: &mut WorldState, player_pos: Pos, events: &mut Vec<GameEvent>) {
    // Cats sit out the grace period at the start of the round.
    if world.move_count + 1 < world.rules.grace_moves {
        return;
    }

    let pre_positions: Vec<Pos> = world.cats.iter().map(|c| c.pos).collect();
    let mut disturbance = false;

    for i in 0..world.cats.len() {
        let plan = ai::plan_cat(
            &world.map,
            &world.cats[i],
            player_pos,
            &world.rules,
            &mut world.rng,
        );

        let old = pre_positions[i];
        let blocked = pre_positions
            .iter()
            .enumerate()
            .any(|(j, &p)| j != i && p == plan.next_pos);

        let cat = &mut world.cats[i];
        let prior_state = cat.state;
        // Facing tracks the attempted step even when the cat is held.
        cat.facing = Pos::new(plan.next_pos.x - old.x, plan.next_pos.y - old.y);
        cat.pos = if blocked { old } else { plan.next_pos };
        cat.state = plan.state;
        cat.timer = plan.timer;
        cat.last_known = plan.last_known;
        cat.patrol_index = plan.patrol_index;

        if matches!(cat.state, CatState::Alert | CatState::Chase)
            && matches!(prior_state, CatState::Patrol | CatState::Sleep)
        {
            disturbance = true;
        }
    }

    if disturbance {
        events.push(GameEvent::Disturbance);
    }
}

fn resolve_capture(
    world: &mut WorldState,
    pre_cats: &[Pos],
    player_old: Pos,
    player_new: Pos,
    events: &mut Vec<GameEvent>,
) {
    for (i, cat) in world.cats.iter().enumerate() {
        // Same cell after the turn, or the two crossed over in one turn:
        // the cat walked into the player's old cell while the player
        // walked into the cat's old cell. The cross-over counts as a
        // capture even though they never share a cell at an instant.
        let same_cell = cat.pos == player_new;
        let swapped = pre_cats[i] == player_new && cat.pos == player_old;
        if same_cell || swapped {
            world.outcome = Outcome::Lost;
            events.push(GameEvent::Caught { cat_id: cat.id });
            return;
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Item turns
// ══════════════════════════════════════════════════════════════

fn resolve_yarn(world: &mut WorldState) -> Vec<GameEvent> {
    if world.yarn == 0 {
        return vec![];
    }
    world.yarn -= 1;

    let f = world.player.facing;
    let r = world.rules.throw_range;
    let target = world.map.clamp(world.player.pos.offset(f.x * r, f.y * r));

    // Unconditional: distance, sight and prior state (Chase included)
    // are all overridden by the lure.
    for cat in &mut world.cats {
        cat.state = CatState::Alert;
        cat.last_known = Some(target);
        cat.timer = world.rules.alert_ticks;
    }

    vec![GameEvent::YarnThrown { target }]
}

fn resolve_toy(world: &mut WorldState) -> Vec<GameEvent> {
    if world.toys == 0 {
        return vec![];
    }
    world.toys -= 1;

    for cat in &mut world.cats {
        cat.state = CatState::Sleep;
        cat.timer = world.rules.sleep_ticks;
    }

    vec![GameEvent::ToySqueaked]
}
