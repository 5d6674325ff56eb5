/// Tile types and their properties.
/// Properties are queried via methods, not stored as flags,
/// so tile semantics are centralized here.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Wall,  // Hedge: impassable, blocks sight
    Path,  // Open ground
    Grass, // Open, conceals the player while occupied
    Water, // Impassable, blocks sight
    Exit,  // Open, no special solidity
}

impl Tile {
    /// Map legend character for this tile.
    ///
    ///   '#' = Wall (hedge)    '.' = Path
    ///   ',' = Grass (hide)    '~' = Water
    ///   'E' = Exit
    ///
    /// Entity markers (P, T, Y, S) and any unknown character read as Path;
    /// the level loader strips the entities out separately.
    pub fn from_char(ch: char) -> Tile {
        match ch {
            '#' => Tile::Wall,
            ',' => Tile::Grass,
            '~' => Tile::Water,
            'E' => Tile::Exit,
            _ => Tile::Path,
        }
    }

    /// Can an entity occupy this tile? Solid tiles also block sight.
    pub fn is_solid(self) -> bool {
        matches!(self, Tile::Wall | Tile::Water)
    }

    /// Does this tile conceal the player from detection?
    pub fn conceals(self) -> bool {
        matches!(self, Tile::Grass)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Path
    }
}
