//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time advances in whole milliseconds
//! - Seeded RNG only
//! - Stable iteration order (zones in layout order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod catalog;
pub mod collision;
pub mod icon;
pub mod layout;
pub mod outcome;
pub mod rect;
pub mod state;
pub mod tick;

pub use catalog::{Catalog, CatalogEntry, MISSING_EXPLANATION, Role, Service};
pub use collision::{CollisionResult, check_icon};
pub use icon::FallingIcon;
pub use layout::{ScreenLayout, TargetZone, Viewport};
pub use outcome::{Landing, Outcome};
pub use rect::Rect;
pub use state::{GamePhase, GameState, WAITING_MESSAGE};
pub use tick::{Game, GameEvent, RoundStats, TickInput};
