//! Role Drop - a falling-icon matching game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (falling icon, collisions, scoring loop)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Tuning, audio and catalog configuration
//! - `audio`: Procedural Web Audio cues (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{AudioSettings, Settings, SettingsError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Interval between falling steps
    pub const TICK_MS: u64 = 100;
    /// Vertical distance covered by one falling step (device pixels)
    pub const FALL_STEP_PX: f32 = 20.0;
    /// How long an outcome stays on screen before the next icon drops
    pub const RESOLVE_DELAY_MS: u64 = 3000;

    /// Falling icon edge length (density-independent pixels)
    pub const ICON_SIZE_DP: f32 = 100.0;
    /// Role zone edge length (density-independent pixels)
    pub const ZONE_SIZE_DP: f32 = 120.0;

    /// Autopilot horizontal speed (device pixels per millisecond)
    pub const AUTOPILOT_SPEED: f32 = 0.6;
    /// Horizontal nudge applied by one arrow key press (density-independent pixels)
    pub const KEY_NUDGE_DP: f32 = 40.0;

    /// Longest frame fed to the simulation, prevents a catch-up burst after a stall
    pub const MAX_FRAME_MS: u64 = 250;
}
