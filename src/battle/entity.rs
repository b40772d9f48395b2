//! Battle Entity
//!
//! One advertised game lobby and the summary attributes the server reports
//! for it. The registry owns all instances; nothing else mutates them.

use serde::{Deserialize, Serialize};

/// One advertised battle (multiplayer game lobby).
///
/// Identity is the server-assigned `battle_id`; every other field is a
/// summary attribute the server may revise while the battle stays listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    /// Server-assigned identifier, stable for the battle's lifetime.
    pub battle_id: String,
    /// Username hosting the battle.
    pub founder: String,
    /// Battle title shown in the list.
    pub title: String,
    /// Current map name.
    pub map_name: String,
    /// Checksum of the current map.
    pub map_hash: i32,
    /// Engine version the host runs.
    pub engine_version: String,
    /// Game archive the battle is set up for.
    pub game_name: String,
    /// Maximum player slots.
    pub max_players: u32,
    /// Whether a password is required to join.
    pub passworded: bool,
    /// Membership exactly as the server reported it. Duplicate join reports
    /// are kept; deduplication is the server's job, not ours.
    #[serde(default)]
    pub players: Vec<String>,
    /// Cached membership size. Always equals `players.len()`; callers that
    /// touch `players` must follow up with [`Battle::recount_players`].
    #[serde(default)]
    pub player_count: usize,
    /// Spectators currently attached.
    pub spectator_count: u32,
    /// Whether the host has locked the battle.
    pub locked: bool,
}

impl Battle {
    /// Freshly advertised battle with no members yet.
    pub fn new(battle_id: impl Into<String>, founder: impl Into<String>) -> Self {
        Self {
            battle_id: battle_id.into(),
            founder: founder.into(),
            title: String::new(),
            map_name: String::new(),
            map_hash: 0,
            engine_version: String::new(),
            game_name: String::new(),
            max_players: 0,
            passworded: false,
            players: Vec::new(),
            player_count: 0,
            spectator_count: 0,
            locked: false,
        }
    }

    /// Recompute `player_count` from the membership list.
    ///
    /// Must be called after every change to `players`.
    pub fn recount_players(&mut self) {
        self.player_count = self.players.len();
    }

    /// Overwrite the summary fields carried by a battle-updated event.
    ///
    /// Membership is never touched here; join and leave events own it.
    pub fn apply_update(&mut self, update: &BattleUpdate) {
        self.spectator_count = update.spectator_count;
        self.locked = update.locked;
        self.map_hash = update.map_hash;
        self.map_name = update.map_name.clone();
    }

    /// A battle with at least one player counted as playing is "open".
    ///
    /// An empty battle is closed to play but stays listed until the server
    /// explicitly closes it.
    pub fn is_open(&self) -> bool {
        self.player_count > 0
    }
}

/// Revised summary fields from a battle-updated event.
///
/// Carries exactly the fields the server's update message revises; anything
/// not listed here is untouched by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleUpdate {
    /// Battle this update targets.
    pub battle_id: String,
    /// New spectator count.
    pub spectator_count: u32,
    /// New locked flag.
    pub locked: bool,
    /// New map checksum.
    pub map_hash: i32,
    /// New map name.
    pub map_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_battle_is_empty_and_consistent() {
        let battle = Battle::new("b1", "alice");
        assert_eq!(battle.player_count, battle.players.len());
        assert!(!battle.is_open());
    }

    #[test]
    fn test_recount_tracks_membership() {
        let mut battle = Battle::new("b1", "alice");
        battle.players.push("alice".to_string());
        battle.players.push("bob".to_string());
        battle.recount_players();
        assert_eq!(battle.player_count, 2);
        assert!(battle.is_open());
    }

    #[test]
    fn test_update_overwrites_only_summary_fields() {
        let mut battle = Battle::new("b1", "alice");
        battle.title = "All Welcome".to_string();
        battle.players.push("bob".to_string());
        battle.recount_players();

        battle.apply_update(&BattleUpdate {
            battle_id: "b1".to_string(),
            spectator_count: 3,
            locked: true,
            map_hash: 42,
            map_name: "DeltaSiegeDry".to_string(),
        });

        assert_eq!(battle.spectator_count, 3);
        assert!(battle.locked);
        assert_eq!(battle.map_hash, 42);
        assert_eq!(battle.map_name, "DeltaSiegeDry");
        // Identity, title, and membership stay put
        assert_eq!(battle.founder, "alice");
        assert_eq!(battle.title, "All Welcome");
        assert_eq!(battle.players, vec!["bob".to_string()]);
        assert_eq!(battle.player_count, 1);
    }
}
