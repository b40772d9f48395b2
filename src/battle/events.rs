//! Server Events
//!
//! Battle-list notifications as handed over by the transport layer, already
//! parsed out of the lobby protocol. Serialized as JSON for debugging ease;
//! the registry only ever sees these structs, never raw protocol lines.

use serde::{Deserialize, Serialize};

use crate::battle::entity::{Battle, BattleUpdate};

/// A parsed battle-list notification from the lobby server.
///
/// Late and duplicate events are expected: the server is authoritative and
/// the registry tolerates references to battles it no longer (or does not
/// yet) know about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A new battle was advertised. Membership arrives through separate
    /// join events, so the payload carries none.
    BattleOpened(Battle),

    /// A battle was withdrawn from the list.
    BattleClosed {
        /// Id of the closed battle.
        battle_id: String,
    },

    /// Summary attributes of a listed battle changed.
    BattleUpdated(BattleUpdate),

    /// A user joined a listed battle.
    UserJoinedBattle {
        /// Joining username.
        username: String,
        /// Battle joined.
        battle_id: String,
    },

    /// A user left a listed battle.
    UserLeftBattle {
        /// Departing username.
        username: String,
        /// Battle left.
        battle_id: String,
    },

    /// The server accepted our request to join a battle.
    JoinAccepted {
        /// Battle we were accepted into.
        battle_id: String,
        /// Battle hash echoed by the server; verified by the battleroom
        /// layer, carried untouched here.
        hash: String,
    },
}
