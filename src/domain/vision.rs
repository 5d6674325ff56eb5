/// Line of sight: an integer Bresenham walk over the terrain grid.
///
/// The walk starts at `a` and steps the discretized line toward `b`.
/// Every visited cell — the start included, the end excluded — must be
/// non-solid for the test to pass. Solidity is the only occlusion model:
/// no partial cover, no corner-cutting rules beyond what the line
/// algorithm itself produces.

use super::grid::Pos;
use super::map::GardenMap;

pub fn has_line_of_sight(map: &GardenMap, a: Pos, b: Pos) -> bool {
    let mut x0 = a.x;
    let mut y0 = a.y;
    let x1 = b.x;
    let y1 = b.y;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if x0 == x1 && y0 == y1 {
            return true;
        }
        if map.is_solid(Pos::new(x0, y0)) {
            return false;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}
