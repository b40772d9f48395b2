//! # Battlelist
//!
//! Client-side mirror of the battles advertised by a SpringRTS-style lobby
//! server. The transport layer parses server traffic into [`ServerEvent`]s
//! and feeds them in; presentation layers subscribe for a "views changed"
//! signal and pull the sorted views back out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BATTLELIST                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  battle/          - Battle list core (synchronous)           │
//! │  ├── entity.rs    - Battle record and summary attributes     │
//! │  ├── events.rs    - Parsed inbound server notifications      │
//! │  └── registry.rs  - Event application and derived views      │
//! │                                                              │
//! │  directory/       - Read-only user lookups (founder queries) │
//! │  cache/           - Local asset availability queries         │
//! │  notify/          - Observer fan-out on view changes         │
//! │                                                              │
//! │  service/         - Single-writer async event pump           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Guarantee
//!
//! The `battle/` core is **single-writer**: every mutation runs to
//! completion before the next one starts, re-sorts the full collection, and
//! only then signals subscribers. Read accessors therefore always observe a
//! fresh sorted view. Off-thread transports must deliver through
//! [`LobbyService`], which serializes events onto one task.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod battle;
pub mod cache;
pub mod directory;
pub mod notify;
pub mod service;

// Re-export commonly used types
pub use battle::entity::{Battle, BattleUpdate};
pub use battle::events::ServerEvent;
pub use battle::registry::{BattleRegistry, SessionDelegate};
pub use cache::{AssetCache, CapabilityQuery};
pub use directory::{DirectoryError, MemoryDirectory, User, UserDirectory};
pub use notify::{BattleListObserver, ChangeNotifier, ObserverId};
pub use service::{LobbyService, ServiceConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
