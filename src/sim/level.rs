/// Level definitions and loading.
///
/// ## Sources (priority order):
///   1. A directory of individual `.toml` level files, sorted by filename
///   2. Built-in embedded gardens
///
/// ## Level file format (TOML):
///   ```toml
///   name = "The Rose Garden"
///   description = "A gentle start."
///   par_time = 30
///   map = """
///   #########
///   #P......#
///   #########
///   """
///   patrols = [[[6, 1], [6, 6], [2, 6], [2, 1]]]
///   ```
///
/// ## Map legend:
///   '#' = Wall (hedge)        '.' = Path
///   ',' = Grass (hide)        '~' = Water
///   'E' = Exit                'P' = Player start
///   'T' = Treat               'Y' = Yarn ball pickup
///   'S' = Squeaky toy pickup
///
/// Each patrol route seeds one cat at its first waypoint. The simulation
/// ignores `name`, `description` and `par_time`; they ride along for the
/// frontend.

use std::path::Path;

use serde::Deserialize;

use crate::domain::grid::Pos;

/// Runtime level data (owned strings, loaded from file or embedded).
#[derive(Clone, Debug)]
pub struct LevelDef {
    pub name: String,
    pub description: String,
    pub par_time: u32,
    pub rows: Vec<String>,
    pub patrols: Vec<Vec<Pos>>,
}

/// Entity placements scanned out of the map rows.
pub struct Spawns {
    pub player_start: Pos,
    pub treats: Vec<Pos>,
    pub yarns: Vec<Pos>,
    pub toys: Vec<Pos>,
}

// ── TOML schema ──

#[derive(Deserialize, Debug)]
struct TomlLevel {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_par_time")]
    par_time: u32,
    map: String,
    #[serde(default)]
    patrols: Vec<Vec<[i32; 2]>>,
}

fn default_name() -> String {
    "Unnamed Garden".to_string()
}

fn default_par_time() -> u32 {
    60
}

// ══════════════════════════════════════════════════════════════
// Parsing
// ══════════════════════════════════════════════════════════════

impl LevelDef {
    pub fn from_toml_str(text: &str) -> Result<LevelDef, toml::de::Error> {
        let parsed: TomlLevel = toml::from_str(text)?;

        let mut rows: Vec<String> = parsed.map.lines().map(|l| l.to_string()).collect();
        while rows.first().map_or(false, |r| r.trim().is_empty()) {
            rows.remove(0);
        }
        while rows.last().map_or(false, |r| r.trim().is_empty()) {
            rows.pop();
        }

        let patrols = parsed
            .patrols
            .iter()
            .map(|route| route.iter().map(|&[x, y]| Pos::new(x, y)).collect())
            .collect();

        Ok(LevelDef {
            name: parsed.name,
            description: parsed.description,
            par_time: parsed.par_time,
            rows,
            patrols,
        })
    }

    /// Scan the map rows for entity markers. The first `P` wins; with no
    /// `P` at all the player starts at the fixed fallback (1, 1).
    pub fn spawns(&self) -> Spawns {
        let mut player_start = Pos::new(1, 1);
        let mut player_found = false;
        let mut treats = vec![];
        let mut yarns = vec![];
        let mut toys = vec![];

        for (y, row) in self.rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Pos::new(x as i32, y as i32);
                match ch {
                    'P' if !player_found => {
                        player_start = pos;
                        player_found = true;
                    }
                    'T' => treats.push(pos),
                    'Y' => yarns.push(pos),
                    'S' => toys.push(pos),
                    _ => {}
                }
            }
        }

        Spawns { player_start, treats, yarns, toys }
    }
}

// ══════════════════════════════════════════════════════════════
// Directory loading (individual .toml files)
// ══════════════════════════════════════════════════════════════

/// Load every parsable `.toml` level in `dir`, sorted by filename.
/// Unreadable or malformed files are skipped.
pub fn load_from_directory(dir: &Path) -> Vec<LevelDef> {
    let mut named: Vec<(String, LevelDef)> = vec![];

    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return vec![],
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().map_or(false, |e| e == "toml") {
            if let Ok(content) = std::fs::read_to_string(&path) {
                if let Ok(def) = LevelDef::from_toml_str(&content) {
                    let filename = path
                        .file_name()
                        .unwrap_or_default()
                        .to_string_lossy()
                        .to_string();
                    named.push((filename, def));
                }
            }
        }
    }

    named.sort_by(|a, b| a.0.cmp(&b.0));
    named.into_iter().map(|(_, def)| def).collect()
}

// ══════════════════════════════════════════════════════════════
// Embedded gardens
// ══════════════════════════════════════════════════════════════

pub fn embedded_levels() -> Vec<LevelDef> {
    vec![
        make_embedded(
            "The Rose Garden",
            "A gentle start. Collect all 3 treats. Use the tall grass to hide.",
            30,
            &[
                "#########",
                "#P......#",
                "#.##.##.#",
                "#.T#.#T.#",
                "#.,,.,,.#",
                "#.##.##.#",
                "#...T...#",
                "#########",
            ],
            vec![vec![
                Pos::new(6, 1),
                Pos::new(6, 6),
                Pos::new(2, 6),
                Pos::new(2, 1),
            ]],
        ),
        make_embedded(
            "Hedge Labyrinth",
            "The paths twist and turn. Use the yarn to distract the cat.",
            45,
            &[
                "###########",
                "#P...#...T#",
                "###.#.###.#",
                "#T..#...#.#",
                "#.#####.#.#",
                "#Y.....,,.#",
                "#####.###.#",
                "#T........#",
                "###########",
            ],
            vec![vec![
                Pos::new(8, 3),
                Pos::new(8, 7),
                Pos::new(3, 7),
                Pos::new(3, 3),
            ]],
        ),
        make_embedded(
            "Fountain Courtyard",
            "Open spaces are dangerous. A squeaky toy can buy you time.",
            60,
            &[
                "#############",
                "#T....P....T#",
                "#.##.###.##.#",
                "#...~...~...#",
                "#.T.......T.#",
                "#...~...~...#",
                "#.##.###.##.#",
                "#S....T.....#",
                "#############",
            ],
            vec![vec![Pos::new(6, 3), Pos::new(6, 5), Pos::new(6, 3)]],
        ),
    ]
}

fn make_embedded(
    name: &str,
    description: &str,
    par_time: u32,
    map: &[&str],
    patrols: Vec<Vec<Pos>>,
) -> LevelDef {
    LevelDef {
        name: name.to_string(),
        description: description.to_string(),
        par_time,
        rows: map.iter().map(|s| s.to_string()).collect(),
        patrols,
    }
}
