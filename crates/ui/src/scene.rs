//! Placeholder for the hero's embedded 3D scene.
//!
//! The real site streams a remote scene into this slot; here the slot is
//! filled with a slowly rotating wireframe so the layout reads the same
//! without a network dependency. The scene URL is surfaced as a caption.

use egui::{Pos2, Rect, Stroke};
use folio_glass_protocol::ThemeToken;

use crate::theme::{self, ThemeMode};

const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Paint the scene placeholder into `rect`. `time` is seconds since start
/// and drives the rotation; callers should request a repaint while the
/// scene is visible.
pub fn paint_scene(painter: &egui::Painter, rect: Rect, time: f64, mode: ThemeMode, url: &str) {
    let wire = theme::resolve(ThemeToken::SceneWire, mode);
    let center = rect.center();
    let scale = rect.width().min(rect.height()) * 0.28;

    let yaw = time * 0.6;
    let pitch = 0.45 + (time * 0.3).sin() * 0.15;

    let mut projected = [Pos2::ZERO; 8];
    for (i, p) in projected.iter_mut().enumerate() {
        let x = if i & 1 == 0 { -1.0 } else { 1.0 };
        let y = if i & 2 == 0 { -1.0 } else { 1.0 };
        let z = if i & 4 == 0 { -1.0 } else { 1.0 };

        // Rotate about Y, then X, then a weak perspective divide.
        let (xr, zr) = (
            x * yaw.cos() + z * yaw.sin(),
            -x * yaw.sin() + z * yaw.cos(),
        );
        let (yr, zr) = (
            y * pitch.cos() - zr * pitch.sin(),
            y * pitch.sin() + zr * pitch.cos(),
        );
        let depth = 1.0 / (2.6 - zr);
        *p = Pos2::new(
            center.x + (xr * depth) as f32 * scale * 2.2,
            center.y + (yr * depth) as f32 * scale * 2.2,
        );
    }

    for (a, b) in CUBE_EDGES {
        painter.line_segment([projected[a], projected[b]], Stroke::new(1.2, wire));
    }

    painter.text(
        Pos2::new(center.x, rect.bottom() - 14.0),
        egui::Align2::CENTER_CENTER,
        url,
        egui::FontId::monospace(9.0),
        theme::resolve(ThemeToken::TextMuted, mode),
    );
}
