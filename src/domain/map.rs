/// GardenMap: the immutable terrain grid.
///
/// Rectangular by construction: rows shorter than the widest row are
/// padded with Wall. Every query outside the rectangle answers Wall,
/// so unknown space is impassable and opaque.

use super::grid::Pos;
use super::tile::Tile;

#[derive(Clone, Debug)]
pub struct GardenMap {
    tiles: Vec<Vec<Tile>>,
    width: i32,
    height: i32,
}

impl GardenMap {
    /// Build a map from legend rows. Entity markers read as Path.
    pub fn parse(rows: &[&str]) -> GardenMap {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let tiles = rows
            .iter()
            .map(|row| {
                let mut cells: Vec<Tile> = row.chars().map(Tile::from_char).collect();
                cells.resize(width as usize, Tile::Wall);
                cells
            })
            .collect();
        GardenMap { tiles, width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Terrain at `pos`, Wall if out of bounds.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        if self.in_bounds(pos) {
            self.tiles[pos.y as usize][pos.x as usize]
        } else {
            Tile::Wall
        }
    }

    /// Is `pos` impassable? Out of bounds counts as solid.
    pub fn is_solid(&self, pos: Pos) -> bool {
        self.tile_at(pos).is_solid()
    }

    /// Clamp a position to the map rectangle.
    pub fn clamp(&self, pos: Pos) -> Pos {
        Pos {
            x: pos.x.clamp(0, (self.width - 1).max(0)),
            y: pos.y.clamp(0, (self.height - 1).max(0)),
        }
    }
}
