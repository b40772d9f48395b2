//! Battle List Core
//!
//! The client-side registry of advertised battles and the server events that
//! drive it. Everything here is synchronous and single-writer; transports
//! delivering off-thread go through `service/`.
//!
//! ## Module Structure
//!
//! - `entity`: one battle and its summary attributes
//! - `events`: parsed inbound server notifications
//! - `registry`: event application, derived views, session side channel

pub mod entity;
pub mod events;
pub mod registry;

// Re-export key types
pub use entity::{Battle, BattleUpdate};
pub use events::ServerEvent;
pub use registry::{BattleRegistry, SessionDelegate};
