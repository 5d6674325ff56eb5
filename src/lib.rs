//! Hushgarden: the turn-based stealth simulation behind the garden game.
//!
//! The crate is the simulation core only. A frontend owns the window, the
//! sprites and the input devices; it hands this crate one intent per turn
//! (a move direction or an item use) and gets back the events of that turn
//! plus the updated [`sim::world::WorldState`] snapshot to draw.
//!
//! Turn protocol:
//!   1. Build a world from a level: [`sim::world::WorldState::from_level`].
//!   2. Call [`sim::step::take_turn`] once per player intent.
//!   3. Read `world.outcome` / the returned events; stop when terminal.
//!
//! The core is single-threaded and synchronous. Nothing here blocks, and
//! no turn can fail mid-way: illegal intents are rejected as no-ops before
//! any state is touched.

pub mod config;
pub mod domain;
pub mod sim;

pub use config::RulesConfig;
pub use domain::grid::{Dir, Pos};
pub use sim::event::GameEvent;
pub use sim::step::{take_turn, TurnInput};
pub use sim::world::{Outcome, WorldState};
