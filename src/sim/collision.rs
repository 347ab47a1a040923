//! Collision checks for the falling icon
//!
//! Zones are tested in layout order and the first overlap wins. The bottom
//! boundary only counts when no zone overlaps.

use super::catalog::Role;
use super::layout::ScreenLayout;
use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResult {
    /// Still falling
    Clear,
    /// Overlaps a role zone
    Zone(Role),
    /// Bottom edge reached the screen bottom without touching a zone
    Boundary,
}

impl CollisionResult {
    pub fn is_landing(&self) -> bool {
        !matches!(self, CollisionResult::Clear)
    }

    /// The role hit, if the landing was on a zone
    pub fn role(&self) -> Option<Role> {
        match self {
            CollisionResult::Zone(role) => Some(*role),
            _ => None,
        }
    }
}

/// First zone the icon overlaps, in layout order
pub fn icon_zone_collision(icon: &Rect, layout: &ScreenLayout) -> Option<Role> {
    layout
        .zones
        .iter()
        .find(|zone| icon.overlaps(&zone.bounds))
        .map(|zone| zone.role)
}

pub fn icon_reached_bottom(icon: &Rect, layout: &ScreenLayout) -> bool {
    icon.max.y >= layout.height()
}

/// Full check for one tick
pub fn check_icon(icon: &Rect, layout: &ScreenLayout) -> CollisionResult {
    if let Some(role) = icon_zone_collision(icon, layout) {
        CollisionResult::Zone(role)
    } else if icon_reached_bottom(icon, layout) {
        CollisionResult::Boundary
    } else {
        CollisionResult::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::layout::Viewport;
    use glam::Vec2;

    fn phone() -> ScreenLayout {
        ScreenLayout::new(Viewport::new(1080.0, 1920.0, 1.0), &Tuning::default())
    }

    #[test]
    fn test_center_column_is_clear() {
        let layout = phone();
        for y in [0.0, 500.0, 1000.0, 1800.0] {
            let icon = layout.icon_bounds(Vec2::new(0.0, y));
            assert_eq!(check_icon(&icon, &layout), CollisionResult::Clear);
        }
    }

    #[test]
    fn test_bottom_boundary() {
        let layout = phone();
        let icon = layout.icon_bounds(Vec2::new(0.0, 1820.0));
        assert_eq!(check_icon(&icon, &layout), CollisionResult::Boundary);
        assert!(check_icon(&icon, &layout).is_landing());
        assert_eq!(check_icon(&icon, &layout).role(), None);
    }

    #[test]
    fn test_mid_left_zone() {
        let layout = phone();
        let infant = layout.zone(Role::Infant).unwrap().bounds;
        let icon = layout.icon_bounds(Vec2::new(-440.0, infant.min.y));
        assert_eq!(check_icon(&icon, &layout), CollisionResult::Zone(Role::Infant));
    }

    #[test]
    fn test_zone_wins_over_boundary() {
        let layout = phone();
        let icon = layout.icon_bounds(Vec2::new(440.0, 1820.0));
        assert_eq!(
            check_icon(&icon, &layout),
            CollisionResult::Zone(Role::GeneralPublic)
        );
    }
}
