//! Lobby Service
//!
//! Single-writer delivery of transport events into the registry. The
//! registry is not safe for concurrent mutation, so when the transport runs
//! off-thread everything funnels through one channel and the one task
//! draining it. Readers share the registry behind the same lock.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::battle::events::ServerEvent;
use crate::battle::registry::BattleRegistry;

/// Service tuning knobs.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Capacity of the inbound event channel.
    pub event_buffer: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { event_buffer: 256 }
    }
}

/// Owns the shared registry and the pump task feeding it.
///
/// The pump ends once every sender handle is dropped, including the one the
/// service itself holds, so dropping the service (and any [`Self::sender`]
/// clones) shuts the task down cleanly.
pub struct LobbyService {
    registry: Arc<Mutex<BattleRegistry>>,
    events_tx: mpsc::Sender<ServerEvent>,
}

impl LobbyService {
    /// Wrap `registry` and spawn the pump task.
    pub fn spawn(registry: BattleRegistry, config: ServiceConfig) -> (Self, JoinHandle<()>) {
        let registry = Arc::new(Mutex::new(registry));
        let (events_tx, mut events_rx) = mpsc::channel(config.event_buffer);

        let pump_registry = Arc::clone(&registry);
        let handle = tokio::spawn(async move {
            while let Some(event) = events_rx.recv().await {
                debug!(?event, "applying server event");
                // Lock scope stays inside the loop body; apply() never blocks.
                match pump_registry.lock() {
                    Ok(mut registry) => registry.apply(event),
                    Err(poisoned) => poisoned.into_inner().apply(event),
                }
            }
            info!("event channel closed, lobby pump stopping");
        });

        (Self { registry, events_tx }, handle)
    }

    /// Sender handle for the transport layer.
    pub fn sender(&self) -> mpsc::Sender<ServerEvent> {
        self.events_tx.clone()
    }

    /// Shared registry handle for presentation-side reads.
    pub fn registry(&self) -> Arc<Mutex<BattleRegistry>> {
        Arc::clone(&self.registry)
    }
}
