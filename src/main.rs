//! Battlelist Demo
//!
//! Feeds a scripted sequence of lobby-server events through the service and
//! logs the resulting views, the way a battle list pane would render them.

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use battlelist::{
    BattleListObserver, BattleRegistry, LobbyService, MemoryDirectory, ServerEvent, ServiceConfig,
    User, VERSION,
};

/// Observer that logs each refresh signal.
struct LoggingObserver;

impl BattleListObserver for LoggingObserver {
    fn battle_list_changed(&self) {
        info!("battle list changed, views refreshed");
    }
}

/// Scripted event feed, in the JSON shape the transport hands over.
///
/// Opens two battles, fills them unevenly, revises one, and throws in a
/// late close for a battle nobody knows to show the no-op tolerance.
const EVENT_SCRIPT: &str = r#"[
    {"type": "battle_opened", "battle_id": "4711", "founder": "alice",
     "title": "All Welcome", "map_name": "DeltaSiegeDry", "map_hash": 1337,
     "engine_version": "105.1.1", "game_name": "Balanced Annihilation V12.00",
     "max_players": 16, "passworded": false, "spectator_count": 0, "locked": false},
    {"type": "battle_opened", "battle_id": "4712", "founder": "daisy",
     "title": "[Host] Team Fortress", "map_name": "Comet Catcher Redux", "map_hash": -204,
     "engine_version": "105.1.1", "game_name": "Balanced Annihilation V12.00",
     "max_players": 8, "passworded": true, "spectator_count": 0, "locked": false},
    {"type": "user_joined_battle", "username": "alice", "battle_id": "4711"},
    {"type": "user_joined_battle", "username": "daisy", "battle_id": "4712"},
    {"type": "user_joined_battle", "username": "bob", "battle_id": "4712"},
    {"type": "user_joined_battle", "username": "carol", "battle_id": "4712"},
    {"type": "battle_updated", "battle_id": "4712", "spectator_count": 2,
     "locked": true, "map_hash": 512, "map_name": "SmallDivide"},
    {"type": "user_left_battle", "username": "bob", "battle_id": "4712"},
    {"type": "battle_closed", "battle_id": "9999"}
]"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("battlelist demo v{}", VERSION);

    let mut directory = MemoryDirectory::new();
    directory.insert(User {
        username: "alice".to_string(),
        country: "AU".to_string(),
        rank: 3,
        bot: false,
    });
    directory.insert(User {
        username: "daisy".to_string(),
        country: "DE".to_string(),
        rank: 5,
        bot: true,
    });

    let mut registry = BattleRegistry::new();
    registry.set_directory(Arc::new(directory));
    registry.subscribe(Arc::new(LoggingObserver));

    let (service, pump) = LobbyService::spawn(registry, ServiceConfig::default());
    let registry = service.registry();

    let events: Vec<ServerEvent> = serde_json::from_str(EVENT_SCRIPT)?;
    info!("feeding {} scripted events", events.len());

    let tx = service.sender();
    for event in events {
        tx.send(event).await?;
    }
    drop(tx);
    drop(service);
    pump.await?;

    let registry = registry.lock().expect("registry lock poisoned");
    info!(
        "{} battles listed, {} open",
        registry.count(),
        registry.open_count()
    );
    for i in 0..registry.count() {
        let battle = registry.battle_at(i);
        let host = match registry.founder(battle) {
            Ok(user) => format!("{} ({})", user.username, user.country),
            Err(_) => format!("{} (no record yet)", battle.founder),
        };
        info!(
            "  [{}] {} on {}: {} players, {} spectators, host {}",
            battle.battle_id,
            battle.title,
            battle.map_name,
            battle.player_count,
            battle.spectator_count,
            host
        );
    }

    Ok(())
}
