/// Tunable simulation rules.
///
/// Loaded from a `rules.toml` the frontend points at; every key is
/// optional and a missing or unparsable file falls back to the stock
/// tuning, so a bad config can never stop a game from starting.

use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Debug)]
pub struct RulesConfig {
    /// Moves the cats sit out at level start.
    pub grace_moves: u32,
    /// Manhattan radius of the detection check.
    pub sight_radius: i32,
    /// Alert countdown set on losing sight or on a yarn lure.
    pub alert_ticks: u32,
    /// Sleep countdown set by the squeaky toy.
    pub sleep_ticks: u32,
    /// Cells a yarn ball flies along the player's facing.
    pub throw_range: i32,
    /// Starting inventory charges.
    pub start_yarn: u32,
    pub start_toys: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            grace_moves: default_grace_moves(),
            sight_radius: default_sight_radius(),
            alert_ticks: default_alert_ticks(),
            sleep_ticks: default_sleep_ticks(),
            throw_range: default_throw_range(),
            start_yarn: default_start_charge(),
            start_toys: default_start_charge(),
        }
    }
}

// ── TOML schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlRules {
    #[serde(default)]
    rules: TomlRulesBody,
}

#[derive(Deserialize, Debug)]
struct TomlRulesBody {
    #[serde(default = "default_grace_moves")]
    grace_moves: u32,
    #[serde(default = "default_sight_radius")]
    sight_radius: i32,
    #[serde(default = "default_alert_ticks")]
    alert_ticks: u32,
    #[serde(default = "default_sleep_ticks")]
    sleep_ticks: u32,
    #[serde(default = "default_throw_range")]
    throw_range: i32,
    #[serde(default = "default_start_charge")]
    start_yarn: u32,
    #[serde(default = "default_start_charge")]
    start_toys: u32,
}

fn default_grace_moves() -> u32 { 5 }
fn default_sight_radius() -> i32 { 5 }
fn default_alert_ticks() -> u32 { 5 }
fn default_sleep_ticks() -> u32 { 8 }
fn default_throw_range() -> i32 { 3 }
fn default_start_charge() -> u32 { 1 }

impl Default for TomlRulesBody {
    fn default() -> Self {
        TomlRulesBody {
            grace_moves: default_grace_moves(),
            sight_radius: default_sight_radius(),
            alert_ticks: default_alert_ticks(),
            sleep_ticks: default_sleep_ticks(),
            throw_range: default_throw_range(),
            start_yarn: default_start_charge(),
            start_toys: default_start_charge(),
        }
    }
}

// ── Loading ──

impl RulesConfig {
    /// Parse rules from TOML text. Missing keys fall back to defaults;
    /// a parse error falls back entirely.
    pub fn from_toml_str(text: &str) -> Self {
        let parsed = toml::from_str::<TomlRules>(text).unwrap_or_default();
        Self::from_schema(parsed.rules)
    }

    /// Load rules from a TOML file, defaults if unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(_) => Self::default(),
        }
    }

    fn from_schema(body: TomlRulesBody) -> Self {
        RulesConfig {
            grace_moves: body.grace_moves,
            sight_radius: body.sight_radius,
            alert_ticks: body.alert_ticks,
            sleep_ticks: body.sleep_ticks,
            throw_range: body.throw_range,
            start_yarn: body.start_yarn,
            start_toys: body.start_toys,
        }
    }
}
