//! Demo mode: steers the icon toward the zone its service belongs to
//!
//! The mid-edge zones sit above the bottom corners, so when the target is a
//! corner the autopilot holds the center column until the icon has fallen
//! past the zone on the same side.

use super::catalog::Catalog;
use super::icon::FallingIcon;
use super::layout::ScreenLayout;

/// Drag delta to apply this frame
pub fn steer(
    icon: &FallingIcon,
    layout: &ScreenLayout,
    catalog: &Catalog,
    speed: f32,
    dt_ms: u64,
) -> f32 {
    if icon.is_resolved() {
        return 0.0;
    }
    let Some(target) = catalog
        .expected_role(icon.service())
        .and_then(|role| layout.zone(role))
    else {
        // Unmapped: let it fall
        return 0.0;
    };

    let bounds = icon.bounds(layout);
    let target_center = target.bounds.center();
    let on_left = target_center.x < layout.width() / 2.0;

    // A zone on the same side that the icon still has to pass
    let blocked = layout.zones.iter().any(|zone| {
        zone.role != target.role
            && (zone.bounds.center().x < layout.width() / 2.0) == on_left
            && zone.bounds.max.y <= target.bounds.min.y
            && bounds.min.y < zone.bounds.max.y
    });

    let desired_x = if blocked {
        0.0
    } else {
        target_center.x - layout.width() / 2.0
    };

    let max_step = speed * dt_ms as f32;
    (desired_x - icon.offset().x).clamp(-max_step, max_step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::catalog::Service;
    use crate::sim::layout::Viewport;
    use crate::sim::state::GameState;

    fn phone() -> ScreenLayout {
        ScreenLayout::new(Viewport::new(1080.0, 1920.0, 1.0), &Tuning::default())
    }

    #[test]
    fn test_heads_for_mid_zone_immediately() {
        let layout = phone();
        let icon = FallingIcon::spawn(Service::Vaccination);
        let dx = steer(&icon, &layout, &Catalog::default(), 0.6, 16);
        assert!(dx < 0.0, "Infant zone is on the left");
        assert!((dx.abs() - 9.6).abs() < 1e-4);
    }

    #[test]
    fn test_holds_center_above_corner_zone() {
        let layout = phone();
        let icon = FallingIcon::spawn(Service::JobTraining);
        assert_eq!(steer(&icon, &layout, &Catalog::default(), 0.6, 16), 0.0);
    }

    #[test]
    fn test_lands_every_service_correctly() {
        let layout = phone();
        let catalog = Catalog::default();
        for service in Service::ALL {
            let state = GameState::new(service);
            let mut icon = FallingIcon::spawn(service);
            let landing = loop {
                for _ in 0..6 {
                    let dx = steer(&icon, &layout, &catalog, 0.6, 16);
                    icon.drag(&state, dx, &layout);
                }
                if let Some(landing) = icon.tick(&state, &layout, 20.0) {
                    break landing;
                }
            };
            assert_eq!(landing.role, catalog.expected_role(service), "{service}");
        }
    }
}
