//! Falling icon controller
//!
//! Owns the transient offsets of one falling lifetime. The vertical offset
//! grows by a fixed step on each tick, the horizontal offset follows drag
//! input. A landing is reported at most once per lifetime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::Service;
use super::collision::{CollisionResult, check_icon};
use super::layout::ScreenLayout;
use super::outcome::Landing;
use super::rect::Rect;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingIcon {
    service: Service,
    /// Offset from the spawn point (top-center)
    offset: Vec2,
    /// Steps taken this lifetime
    ticks: u32,
    /// Set once the landing has been reported
    resolved: bool,
}

impl FallingIcon {
    /// Start a new lifetime at top-center
    pub fn spawn(service: Service) -> Self {
        Self {
            service,
            offset: Vec2::ZERO,
            ticks: 0,
            resolved: false,
        }
    }

    pub fn service(&self) -> Service {
        self.service
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn bounds(&self, layout: &ScreenLayout) -> Rect {
        layout.icon_bounds(self.offset)
    }

    /// Whether a pointer at `point` grabs the icon
    pub fn hit_test(&self, point: Vec2, layout: &ScreenLayout) -> bool {
        self.bounds(layout).contains_point(point)
    }

    fn accepts_input(&self, state: &GameState) -> bool {
        !state.paused() && !self.resolved
    }

    /// Apply a horizontal drag delta, clamped to keep the icon on screen
    pub fn drag(&mut self, state: &GameState, delta_x: f32, layout: &ScreenLayout) {
        if !self.accepts_input(state) || !delta_x.is_finite() {
            return;
        }
        let limit = layout.max_offset_x();
        self.offset.x = (self.offset.x + delta_x).clamp(-limit, limit);
    }

    /// Re-apply the clamp after the layout changed
    pub fn reclamp(&mut self, layout: &ScreenLayout) {
        let limit = layout.max_offset_x();
        self.offset.x = self.offset.x.clamp(-limit, limit);
    }

    /// Advance one step and check for a landing
    pub fn tick(
        &mut self,
        state: &GameState,
        layout: &ScreenLayout,
        fall_step: f32,
    ) -> Option<Landing> {
        if !self.accepts_input(state) {
            return None;
        }

        self.offset.y += fall_step;
        self.ticks += 1;

        let result = check_icon(&self.bounds(layout), layout);
        if !result.is_landing() {
            return None;
        }

        self.resolved = true;
        if let CollisionResult::Zone(role) = result {
            log::debug!("{} touched {} after {} ticks", self.service, role, self.ticks);
        }
        Some(Landing {
            service: self.service,
            role: result.role(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::catalog::Role;
    use crate::sim::layout::Viewport;
    use proptest::prelude::*;

    fn phone() -> ScreenLayout {
        ScreenLayout::new(Viewport::new(1080.0, 1920.0, 1.0), &Tuning::default())
    }

    #[test]
    fn test_spawn_at_origin() {
        let icon = FallingIcon::spawn(Service::Playground);
        assert_eq!(icon.offset(), Vec2::ZERO);
        assert_eq!(icon.ticks(), 0);
        assert!(!icon.is_resolved());
    }

    #[test]
    fn test_drag_clamps_to_screen_edge() {
        let layout = phone();
        let state = GameState::new(Service::Playground);
        let mut icon = FallingIcon::spawn(Service::Playground);
        icon.drag(&state, 10_000.0, &layout);
        assert_eq!(icon.offset().x, 490.0);
        assert_eq!(layout.icon_bounds(icon.offset()).max.x, 1080.0);
        icon.drag(&state, -20_000.0, &layout);
        assert_eq!(icon.offset().x, -490.0);
        assert_eq!(layout.icon_bounds(icon.offset()).min.x, 0.0);
    }

    #[test]
    fn test_drag_clamp_scales_with_density() {
        // 200px icon on a 1080px screen
        let layout = ScreenLayout::new(Viewport::new(1080.0, 1920.0, 2.0), &Tuning::default());
        let state = GameState::new(Service::Playground);
        let mut icon = FallingIcon::spawn(Service::Playground);
        icon.drag(&state, 10_000.0, &layout);
        assert_eq!(icon.offset().x, 440.0);
    }

    #[test]
    fn test_drag_ignored_while_paused() {
        let layout = phone();
        let state = GameState::new(Service::Playground).resolve(&crate::sim::Outcome::Missed {
            service: Service::Playground,
        });
        let mut icon = FallingIcon::spawn(Service::Playground);
        icon.drag(&state, 100.0, &layout);
        assert_eq!(icon.offset().x, 0.0);
        assert_eq!(icon.tick(&state, &layout, 20.0), None);
        assert_eq!(icon.offset().y, 0.0);
    }

    #[test]
    fn test_boundary_after_91_ticks() {
        let layout = phone();
        let state = GameState::new(Service::Vaccination);
        let mut icon = FallingIcon::spawn(Service::Vaccination);
        for _ in 0..90 {
            assert_eq!(icon.tick(&state, &layout, 20.0), None);
        }
        let landing = icon.tick(&state, &layout, 20.0);
        assert_eq!(
            landing,
            Some(Landing {
                service: Service::Vaccination,
                role: None
            })
        );
        assert_eq!(icon.ticks(), 91);
    }

    #[test]
    fn test_landing_reported_once() {
        let layout = phone();
        let state = GameState::new(Service::Vaccination);
        let mut icon = FallingIcon::spawn(Service::Vaccination);
        icon.drag(&state, -440.0, &layout);
        let mut landings = Vec::new();
        for _ in 0..200 {
            if let Some(landing) = icon.tick(&state, &layout, 20.0) {
                landings.push(landing);
            }
        }
        assert_eq!(landings.len(), 1);
        assert_eq!(landings[0].role, Some(Role::Infant));
        assert!(icon.is_resolved());

        // Latched: drag no longer moves it either
        let x = icon.offset().x;
        icon.drag(&state, 50.0, &layout);
        assert_eq!(icon.offset().x, x);
    }

    #[test]
    fn test_reclamp_after_shrink() {
        let state = GameState::new(Service::Vaccination);
        let mut icon = FallingIcon::spawn(Service::Vaccination);
        icon.drag(&state, 440.0, &phone());
        let narrow = ScreenLayout::new(Viewport::new(500.0, 1920.0, 1.0), &Tuning::default());
        icon.reclamp(&narrow);
        assert_eq!(icon.offset().x, 200.0);
    }

    #[test]
    fn test_hit_test() {
        let layout = phone();
        let icon = FallingIcon::spawn(Service::Vaccination);
        assert!(icon.hit_test(Vec2::new(540.0, 50.0), &layout));
        assert!(!icon.hit_test(Vec2::new(100.0, 50.0), &layout));
    }

    proptest! {
        #[test]
        fn prop_offset_stays_clamped(
            width in 50.0f32..4000.0,
            deltas in prop::collection::vec(-6000.0f32..6000.0, 0..64),
        ) {
            let layout = ScreenLayout::new(Viewport::new(width, 1920.0, 1.0), &Tuning::default());
            let state = GameState::new(Service::JobTraining);
            let mut icon = FallingIcon::spawn(Service::JobTraining);
            let limit = (width / 2.0 - layout.icon_size / 2.0).max(0.0);
            for d in deltas {
                icon.drag(&state, d, &layout);
                prop_assert!(icon.offset().x <= limit);
                prop_assert!(icon.offset().x >= -limit);
            }
        }
    }
}
