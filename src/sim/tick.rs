//! Game loop
//!
//! Time arrives as elapsed milliseconds. The loop consumes it one deadline at
//! a time: fall ticks while Falling, the resolve delay while Resolved. Time
//! left over after a deadline carries into the next phase, so a resume lands
//! exactly `resolve_delay_ms` after the landing that caused it.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::autopilot;
use super::catalog::{Catalog, Service};
use super::icon::FallingIcon;
use super::layout::{ScreenLayout, Viewport};
use super::outcome::{Landing, Outcome};
use super::state::{GamePhase, GameState};
use crate::settings::Tuning;

/// Input for one frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal drag accumulated since the last frame (px)
    pub drag_dx: f32,
    /// Let the autopilot steer
    pub autopilot: bool,
}

/// Things that happened during an `advance` call, in order
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new icon started falling
    Spawned(Service),
    /// The icon landed and was scored
    Landed(Outcome),
}

/// Round counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundStats {
    pub correct: u32,
    pub wrong: u32,
    pub missed: u32,
}

impl RoundStats {
    pub fn rounds(&self) -> u32 {
        self.correct + self.wrong + self.missed
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Correct { .. } => self.correct += 1,
            Outcome::Wrong { .. } => self.wrong += 1,
            Outcome::Missed { .. } => self.missed += 1,
        }
    }
}

pub struct Game {
    state: GameState,
    icon: FallingIcon,
    layout: ScreenLayout,
    catalog: Catalog,
    tuning: Tuning,
    rng: Pcg32,
    /// Time since the last fall tick (Falling only)
    fall_clock_ms: u64,
    /// Time since the landing (Resolved only)
    resolve_clock_ms: u64,
    time_ms: u64,
    last_outcome: Option<Outcome>,
    stats: RoundStats,
}

impl Game {
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning, catalog: Catalog) -> Self {
        // Zero-length deadlines would stall `advance`
        let tuning = match tuning.validate() {
            Ok(()) => tuning,
            Err(e) => {
                log::warn!("Invalid tuning ({}), using defaults", e);
                Tuning::default()
            }
        };
        let mut rng = Pcg32::seed_from_u64(seed);
        let service = random_service(&mut rng);
        let layout = ScreenLayout::new(viewport, &tuning);
        log::debug!("First icon: {}", service);
        Self {
            state: GameState::new(service),
            icon: FallingIcon::spawn(service),
            layout,
            catalog,
            tuning,
            rng,
            fall_clock_ms: 0,
            resolve_clock_ms: 0,
            time_ms: 0,
            last_outcome: None,
            stats: RoundStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn icon(&self) -> &FallingIcon {
        &self.icon
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Total simulated time
    pub fn time_ms(&self) -> u64 {
        self.time_ms
    }

    /// Outcome of the most recent landing
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last_outcome.as_ref()
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    /// Milliseconds until the next icon drops, while Resolved
    pub fn resume_in_ms(&self) -> Option<u64> {
        match self.state.phase() {
            GamePhase::Resolved => Some(self.tuning.resolve_delay_ms - self.resolve_clock_ms),
            GamePhase::Falling => None,
        }
    }

    /// Viewport changed: rebuild zones and keep the icon inside the new bounds
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.layout.viewport {
            return;
        }
        self.layout = ScreenLayout::new(viewport, &self.tuning);
        self.icon.reclamp(&self.layout);
        log::debug!(
            "Layout rebuilt for {}x{} @{}",
            viewport.width,
            viewport.height,
            viewport.density
        );
    }

    /// Pointer drag, applied immediately
    pub fn drag(&mut self, delta_x: f32) {
        self.icon.drag(&self.state, delta_x, &self.layout);
    }

    /// Whether a pointer going down at `point` grabs the icon
    pub fn grabs_icon(&self, point: glam::Vec2) -> bool {
        !self.state.paused() && self.icon.hit_test(point, &self.layout)
    }

    /// Advance the simulation by `dt_ms`
    pub fn advance(&mut self, dt_ms: u64, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let mut dx = input.drag_dx;
        if input.autopilot {
            dx += autopilot::steer(
                &self.icon,
                &self.layout,
                &self.catalog,
                self.tuning.autopilot_speed,
                dt_ms,
            );
        }
        if dx != 0.0 {
            self.drag(dx);
        }

        let mut remaining = dt_ms;
        loop {
            match self.state.phase() {
                GamePhase::Falling => {
                    let until_tick = self.tuning.tick_ms - self.fall_clock_ms;
                    if remaining < until_tick {
                        self.fall_clock_ms += remaining;
                        break;
                    }
                    remaining -= until_tick;
                    self.fall_clock_ms = 0;
                    if let Some(landing) =
                        self.icon
                            .tick(&self.state, &self.layout, self.tuning.fall_step_px)
                    {
                        self.land(landing, &mut events);
                    }
                }
                GamePhase::Resolved => {
                    let until_resume = self.tuning.resolve_delay_ms - self.resolve_clock_ms;
                    if remaining < until_resume {
                        self.resolve_clock_ms += remaining;
                        break;
                    }
                    remaining -= until_resume;
                    self.resume(&mut events);
                }
            }
        }

        self.time_ms += dt_ms;
        events
    }

    /// Falling → Resolved
    fn land(&mut self, landing: Landing, events: &mut Vec<GameEvent>) {
        let outcome = Outcome::judge(landing, &self.catalog);
        self.state = self.state.resolve(&outcome);
        self.resolve_clock_ms = 0;
        self.stats.record(&outcome);
        log::info!(
            "{} landed on {} → score {}",
            landing.service,
            landing.role.map(|r| r.as_str()).unwrap_or("the bottom"),
            self.state.score()
        );
        self.last_outcome = Some(outcome.clone());
        events.push(GameEvent::Landed(outcome));
    }

    /// Resolved → Falling with a fresh icon
    fn resume(&mut self, events: &mut Vec<GameEvent>) {
        let next = random_service(&mut self.rng);
        self.state = self.state.resume(next);
        self.icon = FallingIcon::spawn(next);
        self.fall_clock_ms = 0;
        self.resolve_clock_ms = 0;
        log::info!("Next icon: {}", next);
        events.push(GameEvent::Spawned(next));
    }
}

/// Uniform draw over the four services
fn random_service(rng: &mut Pcg32) -> Service {
    Service::ALL[rng.random_range(0..Service::ALL.len())]
}
