pub mod ai;
pub mod entity;
pub mod grid;
pub mod map;
pub mod pathfind;
pub mod tile;
pub mod vision;
