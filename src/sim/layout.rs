//! Screen layout: viewport, icon size and the four role zones
//!
//! Zones sit at mid-left, mid-right, bottom-left and bottom-right. The layout
//! is rebuilt whenever the viewport size or density changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::Role;
use super::rect::Rect;
use crate::settings::Tuning;

/// Drawable area in device pixels plus the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub density: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, density: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            density: if density > 0.0 { density } else { 1.0 },
        }
    }
}

/// A role's landing area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetZone {
    pub role: Role,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenLayout {
    pub viewport: Viewport,
    /// Falling icon edge length (px)
    pub icon_size: f32,
    /// Zones in collision test order
    pub zones: [TargetZone; 4],
}

impl ScreenLayout {
    pub fn new(viewport: Viewport, tuning: &Tuning) -> Self {
        let icon_size = (tuning.icon_size_dp * viewport.density).min(viewport.width);
        // Two zones share each row, so a zone never exceeds half the width
        let zone = (tuning.zone_size_dp * viewport.density)
            .min(viewport.width / 2.0)
            .min(viewport.height / 2.0);
        let (w, h) = (viewport.width, viewport.height);
        let size = Vec2::splat(zone);
        let mid_y = h / 2.0 - zone / 2.0;

        let zones = [
            TargetZone {
                role: Role::Infant,
                bounds: Rect::from_origin_size(Vec2::new(0.0, mid_y), size),
            },
            TargetZone {
                role: Role::Child,
                bounds: Rect::from_origin_size(Vec2::new(w - zone, mid_y), size),
            },
            TargetZone {
                role: Role::Adult,
                bounds: Rect::from_origin_size(Vec2::new(0.0, h - zone), size),
            },
            TargetZone {
                role: Role::GeneralPublic,
                bounds: Rect::from_origin_size(Vec2::new(w - zone, h - zone), size),
            },
        ];

        Self {
            viewport,
            icon_size,
            zones,
        }
    }

    pub fn width(&self) -> f32 {
        self.viewport.width
    }

    pub fn height(&self) -> f32 {
        self.viewport.height
    }

    /// Largest horizontal offset from center the icon may take
    pub fn max_offset_x(&self) -> f32 {
        (self.viewport.width / 2.0 - self.icon_size / 2.0).max(0.0)
    }

    /// Icon rectangle for the given offset from its spawn point
    pub fn icon_bounds(&self, offset: Vec2) -> Rect {
        let left = self.viewport.width / 2.0 + offset.x - self.icon_size / 2.0;
        Rect::from_origin_size(Vec2::new(left, offset.y), Vec2::splat(self.icon_size))
    }

    pub fn zone(&self, role: Role) -> Option<&TargetZone> {
        self.zones.iter().find(|z| z.role == role)
    }
}
