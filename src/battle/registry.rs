//! Battle Registry
//!
//! The authoritative client-side collection of advertised battles. Server
//! notifications are folded in one at a time; presentation layers subscribe
//! for a "views changed" signal and pull the sorted views back out through
//! the read accessors.

use std::sync::Arc;

use crate::battle::entity::{Battle, BattleUpdate};
use crate::battle::events::ServerEvent;
use crate::directory::{DirectoryError, User, UserDirectory};
use crate::notify::{BattleListObserver, ChangeNotifier, ObserverId};

/// Outbound side channel to the session layer.
///
/// The registry never owns session state; join requests and join/leave
/// transitions are handed to whoever composed it. The delegate is optional:
/// when absent, the side channel is simply disabled and list maintenance is
/// unaffected.
pub trait SessionDelegate: Send + Sync {
    /// The local session's own username, if logged in.
    fn username(&self) -> Option<String>;

    /// Ask the session layer to send a join request for `battle`.
    fn request_join(&self, battle: &str, password: &str);

    /// The server accepted our join of `battle`.
    fn joined(&self, battle: &Battle);

    /// The local user left the battle they were in.
    fn left_battle(&self);
}

/// Client-side mirror of the server's battle list.
///
/// Every mutating operation finishes by re-sorting the full collection by
/// player count (descending; the sort is stable, so equal counts keep their
/// relative order) and notifying every subscriber. Tolerated no-ops such as
/// a duplicate open or a close for an unknown id still notify, matching the
/// server's own refresh behavior. Suppressing those redundant notifications,
/// or maintaining the order incrementally, would be valid optimizations as
/// long as the observed order stays identical; neither is taken here.
pub struct BattleRegistry {
    /// Battles, kept sorted by descending player count.
    battles: Vec<Battle>,
    /// Fan-out for "views changed" signals.
    notifier: ChangeNotifier,
    /// Session side channel.
    delegate: Option<Arc<dyn SessionDelegate>>,
    /// User directory for founder lookups.
    directory: Option<Arc<dyn UserDirectory>>,
}

impl BattleRegistry {
    /// Empty registry with no collaborators attached.
    pub fn new() -> Self {
        Self {
            battles: Vec::new(),
            notifier: ChangeNotifier::new(),
            delegate: None,
            directory: None,
        }
    }

    /// Attach the session delegate.
    pub fn set_delegate(&mut self, delegate: Arc<dyn SessionDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Attach the user directory.
    pub fn set_directory(&mut self, directory: Arc<dyn UserDirectory>) {
        self.directory = Some(directory);
    }

    /// Subscribe to "views changed" signals.
    ///
    /// Observers are called synchronously, in registration order, after each
    /// mutating operation completes.
    pub fn subscribe(&mut self, observer: Arc<dyn BattleListObserver>) -> ObserverId {
        self.notifier.subscribe(observer)
    }

    /// Drop the subscription behind `id`. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Apply one parsed server event.
    pub fn apply(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::BattleOpened(battle) => self.open(battle),
            ServerEvent::BattleClosed { battle_id } => self.close(&battle_id),
            ServerEvent::BattleUpdated(update) => self.apply_update(&update),
            ServerEvent::UserJoinedBattle { username, battle_id } => {
                self.user_joined(&battle_id, &username)
            }
            ServerEvent::UserLeftBattle { username, battle_id } => {
                self.user_left(&battle_id, &username)
            }
            ServerEvent::JoinAccepted { battle_id, .. } => self.accepted_join(&battle_id),
        }
    }

    /// Insert a newly advertised battle.
    ///
    /// The server occasionally re-advertises a battle we already track; a
    /// duplicate open never overwrites the entity we have.
    pub fn open(&mut self, mut battle: Battle) {
        if !self.battles.iter().any(|b| b.battle_id == battle.battle_id) {
            // The opened payload carries no membership; recounting pins the
            // invariant whatever the transport handed over.
            battle.recount_players();
            self.battles.push(battle);
        }
        self.battle_list_updated();
    }

    /// Remove the battle with `battle_id`, if listed.
    pub fn close(&mut self, battle_id: &str) {
        self.battles.retain(|b| b.battle_id != battle_id);
        self.battle_list_updated();
    }

    /// Overwrite the updated summary fields on the matching battle.
    pub fn apply_update(&mut self, update: &BattleUpdate) {
        if let Some(battle) = self.find_mut(&update.battle_id) {
            battle.apply_update(update);
        }
        self.battle_list_updated();
    }

    /// Record that `username` joined the matching battle.
    ///
    /// Membership is appended literally: if the server reports the same user
    /// twice, the list holds them twice.
    pub fn user_joined(&mut self, battle_id: &str, username: &str) {
        if let Some(battle) = self.find_mut(battle_id) {
            battle.players.push(username.to_string());
            battle.recount_players();
        }
        self.battle_list_updated();
    }

    /// Record that `username` left the matching battle.
    ///
    /// Removes every occurrence of the username. When the departing user is
    /// the local session's own identity, the delegate is additionally told
    /// the session left its battle, once per matching event, whether or not
    /// the membership list actually held us.
    pub fn user_left(&mut self, battle_id: &str, username: &str) {
        if let Some(delegate) = &self.delegate {
            if delegate.username().as_deref() == Some(username) {
                delegate.left_battle();
            }
        }

        if let Some(battle) = self.find_mut(battle_id) {
            battle.players.retain(|p| p != username);
            battle.recount_players();
        }
        self.battle_list_updated();
    }

    /// The server accepted our join request for `battle_id`.
    ///
    /// Hands the matching battle to the delegate and nothing more: the
    /// membership change arrives as a separate join event, so there is no
    /// mutation, no re-sort, and no subscriber notification here.
    pub fn accepted_join(&mut self, battle_id: &str) {
        if let Some(battle) = self.battles.iter().find(|b| b.battle_id == battle_id) {
            if let Some(delegate) = &self.delegate {
                delegate.joined(battle);
            }
        }
    }

    /// Forward a join request to the session layer. No-op without a delegate.
    pub fn request_join(&self, battle: &str, password: &str) {
        if let Some(delegate) = &self.delegate {
            delegate.request_join(battle, password);
        }
    }

    /// Number of listed battles.
    pub fn count(&self) -> usize {
        self.battles.len()
    }

    /// Battle at `index` in the full sorted view.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`. Callers must consult [`Self::count`]
    /// first; an out-of-range index is a contract violation, not a state.
    pub fn battle_at(&self, index: usize) -> &Battle {
        &self.battles[index]
    }

    /// Number of open battles (player count above zero).
    pub fn open_count(&self) -> usize {
        self.battles.iter().filter(|b| b.is_open()).count()
    }

    /// Open battle at `index` in the open-filtered view.
    ///
    /// The open view is the full sorted view with empty battles skipped, so
    /// relative order matches [`Self::battle_at`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= open_count()`.
    pub fn open_battle_at(&self, index: usize) -> &Battle {
        self.battles
            .iter()
            .filter(|b| b.is_open())
            .nth(index)
            .unwrap_or_else(|| panic!("open battle index {index} out of bounds"))
    }

    /// Resolve the user record of `battle`'s founder.
    ///
    /// Battle and user events race on a live connection, so a founder the
    /// directory has not seen yet is a recoverable error for the caller,
    /// not a crash. The same error covers a missing directory.
    pub fn founder(&self, battle: &Battle) -> Result<User, DirectoryError> {
        self.directory
            .as_ref()
            .and_then(|d| d.find_user(&battle.founder))
            .ok_or_else(|| DirectoryError::UnknownHostUser {
                username: battle.founder.clone(),
            })
    }

    fn find_mut(&mut self, battle_id: &str) -> Option<&mut Battle> {
        self.battles.iter_mut().find(|b| b.battle_id == battle_id)
    }

    /// Re-sort the collection and tell subscribers the views changed.
    fn battle_list_updated(&mut self) {
        // Stable sort: battles with equal player counts keep their order.
        self.battles
            .sort_by(|a, b| b.player_count.cmp(&a.player_count));
        self.notifier.notify();
    }
}

impl Default for BattleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
