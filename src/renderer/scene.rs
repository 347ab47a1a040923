//! Builds the frame's triangle list from the game

use glam::Vec2;

use super::shapes::{circle, fade, rect, rect_outline, ring, rounded_rect};
use super::vertex::{Vertex, colors};
use crate::sim::{Game, Outcome, Rect, Role, Service};

/// Fill color of a role zone
pub fn role_color(role: Role) -> [f32; 4] {
    match role {
        Role::Infant => colors::ZONE_INFANT,
        Role::Child => colors::ZONE_CHILD,
        Role::Adult => colors::ZONE_ADULT,
        Role::GeneralPublic => colors::ZONE_PUBLIC,
    }
}

/// Fill color of a falling service icon
pub fn service_color(service: Service) -> [f32; 4] {
    match service {
        Service::Vaccination => colors::SERVICE_VACCINATION,
        Service::Playground => colors::SERVICE_PLAYGROUND,
        Service::JobTraining => colors::SERVICE_JOB_TRAINING,
        Service::PublicLibrary => colors::SERVICE_LIBRARY,
    }
}

/// Figures standing for the role: one small, one medium, one tall, a crowd
fn role_glyph(role: Role, bounds: &Rect, out: &mut Vec<Vertex>) {
    let c = bounds.center();
    let s = bounds.width().min(bounds.height());
    let color = colors::GLYPH_DARK;
    let person = |pos: Vec2, scale: f32, out: &mut Vec<Vertex>| {
        let head = s * 0.08 * scale;
        out.extend(circle(pos - Vec2::new(0.0, head * 2.2), head, color, 16));
        out.extend(rounded_rect(
            &Rect::from_center_size(pos + Vec2::new(0.0, head), Vec2::new(head * 2.0, head * 3.0)),
            head * 0.8,
            color,
            4,
        ));
    };
    match role {
        Role::Infant => person(c, 0.6, out),
        Role::Child => person(c, 0.9, out),
        Role::Adult => person(c, 1.3, out),
        Role::GeneralPublic => {
            person(c - Vec2::new(s * 0.22, 0.0), 0.9, out);
            person(c, 1.1, out);
            person(c + Vec2::new(s * 0.22, 0.0), 0.9, out);
        }
    }
}

/// Simple pictogram per service, drawn in white on the icon tile
fn service_glyph(service: Service, bounds: &Rect, alpha: f32, out: &mut Vec<Vertex>) {
    let c = bounds.center();
    let s = bounds.width();
    let color = fade(colors::GLYPH, alpha);
    match service {
        Service::Vaccination => {
            // Cross
            out.extend(rect(&Rect::from_center_size(c, Vec2::new(s * 0.5, s * 0.14)), color));
            out.extend(rect(&Rect::from_center_size(c, Vec2::new(s * 0.14, s * 0.5)), color));
        }
        Service::Playground => {
            // Ball
            out.extend(ring(c, s * 0.14, s * 0.24, color, 24));
            out.extend(circle(c, s * 0.06, color, 12));
        }
        Service::JobTraining => {
            // Briefcase
            out.extend(rounded_rect(
                &Rect::from_center_size(c + Vec2::new(0.0, s * 0.05), Vec2::new(s * 0.56, s * 0.36)),
                s * 0.05,
                color,
                4,
            ));
            out.extend(rect_outline(
                &Rect::from_center_size(c - Vec2::new(0.0, s * 0.17), Vec2::new(s * 0.22, s * 0.12)),
                s * 0.04,
                color,
            ));
        }
        Service::PublicLibrary => {
            // Row of books
            for i in 0..3 {
                let x = c.x + (i as f32 - 1.0) * s * 0.17;
                out.extend(rect(
                    &Rect::from_center_size(Vec2::new(x, c.y), Vec2::new(s * 0.12, s * 0.5)),
                    color,
                ));
            }
        }
    }
}

/// Full frame: zones, an answer highlight while resolved, then the icon
pub fn build_scene(game: &Game) -> Vec<Vertex> {
    let layout = game.layout();
    let mut vertices = Vec::with_capacity(2048);

    for zone in &layout.zones {
        vertices.extend(rounded_rect(
            &zone.bounds,
            zone.bounds.width() * 0.12,
            role_color(zone.role),
            6,
        ));
        role_glyph(zone.role, &zone.bounds, &mut vertices);
    }

    let paused = game.state().paused();
    if paused {
        if let Some(Outcome::Wrong {
            expected: Some(expected),
            ..
        }) = game.last_outcome()
        {
            if let Some(zone) = layout.zone(*expected) {
                let thickness = (layout.icon_size * 0.06).max(2.0);
                vertices.extend(rect_outline(&zone.bounds, thickness, colors::HIGHLIGHT));
            }
        }
    }

    let icon = game.icon();
    let bounds = icon.bounds(layout);
    let alpha = if paused { 0.45 } else { 1.0 };
    vertices.extend(rounded_rect(
        &bounds,
        bounds.width() * 0.18,
        fade(service_color(icon.service()), alpha),
        6,
    ));
    service_glyph(icon.service(), &bounds, alpha, &mut vertices);

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::{Catalog, TickInput, Viewport};

    fn game() -> Game {
        Game::new(
            11,
            Viewport::new(1080.0, 1920.0, 1.0),
            Tuning::default(),
            Catalog::default(),
        )
    }

    #[test]
    fn test_scene_is_triangle_list() {
        let vertices = build_scene(&game());
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 3, 0);
    }

    #[test]
    fn test_icon_fades_while_resolved() {
        let mut g = game();
        let falling = build_scene(&g);
        g.advance(9_100, &TickInput::default());
        let resolved = build_scene(&g);
        let icon_color = service_color(g.icon().service());
        let opaque = |vs: &[Vertex]| vs.iter().any(|v| v.color == icon_color);
        assert!(opaque(&falling));
        assert!(!opaque(&resolved));
    }
}
