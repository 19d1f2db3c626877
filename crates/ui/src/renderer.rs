use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use folio_glass_protocol::{RenderCommand, TextAlign};

use crate::theme::{self, ThemeMode};

/// Row-major 2x3 affine transform for PushTransform/PushTilt.
#[derive(Debug, Clone, Copy)]
struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    tx: f64,
    ty: f64,
}

impl Affine {
    fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    fn apply(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(
            (self.a * x + self.b * y + self.tx) as f32,
            (self.c * x + self.d * y + self.ty) as f32,
        )
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    fn then(&self, other: &Affine) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            tx: self.a * other.tx + self.b * other.ty + self.tx,
            ty: self.c * other.tx + self.d * other.ty + self.ty,
        }
    }

    fn translate_scale(translate: (f64, f64), scale: (f64, f64)) -> Self {
        Self {
            a: scale.0,
            b: 0.0,
            c: 0.0,
            d: scale.1,
            tx: translate.0,
            ty: translate.1,
        }
    }

    /// A flat approximation of a perspective tilt: a small shear about the
    /// card center. `rotate_y` skews horizontally, `rotate_x` vertically.
    fn tilt(origin: (f64, f64), rotate_x: f64, rotate_y: f64) -> Self {
        let shear_x = (rotate_y * 0.4).to_radians().tan();
        let shear_y = (-rotate_x * 0.4).to_radians().tan();
        // translate(origin) * skew * translate(-origin)
        Self {
            a: 1.0,
            b: shear_x,
            c: shear_y,
            d: 1.0,
            tx: -shear_x * origin.1,
            ty: -shear_y * origin.0,
        }
    }

    /// Bounding box of a transformed axis-aligned rect.
    fn apply_rect(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        let corners = [
            self.apply(x, y),
            self.apply(x + w, y),
            self.apply(x, y + h),
            self.apply(x + w, y + h),
        ];
        let mut min = corners[0];
        let mut max = corners[0];
        for p in &corners[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Rect::from_min_max(min, max)
    }
}

/// Card surface reported back to the app for hover hit-testing, in screen
/// coordinates.
pub struct HitRegion {
    pub rect: Rect,
    pub card_id: u64,
}

/// Result of rendering a command list: includes hit regions for interaction.
pub struct RenderResult {
    pub hit_regions: Vec<HitRegion>,
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the screen position of the page origin — pass the panel's
/// top-left minus the scroll offset. Returns hit regions for hover tracking.
pub fn render_commands(
    painter: &mut egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) -> RenderResult {
    let root = Affine::translate_scale((offset.x as f64, offset.y as f64), (1.0, 1.0));
    let mut transform_stack: Vec<Affine> = vec![root];
    let mut clip_stack: Vec<Rect> = Vec::new();
    let mut hit_regions: Vec<HitRegion> = Vec::new();

    for cmd in commands {
        let tf = transform_stack.last().copied().unwrap_or(root);
        match cmd {
            RenderCommand::DrawRect {
                rect,
                fill,
                border,
                radius,
                card_id,
            } => {
                let egui_rect = tf.apply_rect(rect.x, rect.y, rect.w, rect.h);
                if egui_rect.width() < 0.5 || egui_rect.height() < 0.5 {
                    continue;
                }

                // Cull off-screen
                if !painter.clip_rect().intersects(egui_rect) {
                    if let Some(id) = card_id {
                        hit_regions.push(HitRegion {
                            rect: egui_rect,
                            card_id: *id,
                        });
                    }
                    continue;
                }

                let corner = CornerRadius::same((*radius).clamp(0.0, 255.0) as u8);
                painter.rect_filled(egui_rect, corner, theme::resolve(*fill, mode));

                if let Some(border) = border {
                    painter.rect_stroke(
                        egui_rect,
                        corner,
                        Stroke::new(1.0, theme::resolve(*border, mode)),
                        StrokeKind::Outside,
                    );
                }

                if let Some(id) = card_id {
                    hit_regions.push(HitRegion {
                        rect: egui_rect,
                        card_id: *id,
                    });
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let pos = tf.apply(position.x, position.y);
                let size = *font_size as f32;
                if size < 1.0 {
                    continue;
                }

                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_CENTER,
                    TextAlign::Center => Align2::CENTER_CENTER,
                    TextAlign::Right => Align2::RIGHT_CENTER,
                };

                painter.text(
                    pos,
                    anchor,
                    text.as_ref(),
                    FontId::proportional(size),
                    theme::resolve(*color, mode),
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
            } => {
                let p1 = tf.apply(from.x, from.y);
                let p2 = tf.apply(to.x, to.y);
                painter.line_segment(
                    [p1, p2],
                    Stroke::new(*width as f32, theme::resolve(*color, mode)),
                );
            }

            RenderCommand::SetClip { rect } => {
                let clip_rect = tf.apply_rect(rect.x, rect.y, rect.w, rect.h);
                clip_stack.push(painter.clip_rect());
                let intersected = painter.clip_rect().intersect(clip_rect);
                painter.set_clip_rect(intersected);
            }

            RenderCommand::ClearClip => {
                if let Some(prev) = clip_stack.pop() {
                    painter.set_clip_rect(prev);
                }
            }

            RenderCommand::PushTransform { translate, scale } => {
                transform_stack.push(tf.then(&Affine::translate_scale(
                    (translate.x, translate.y),
                    (scale.x, scale.y),
                )));
            }

            RenderCommand::PushTilt {
                origin,
                orientation,
            } => {
                transform_stack.push(tf.then(&Affine::tilt(
                    (origin.x, origin.y),
                    orientation.rotate_x,
                    orientation.rotate_y,
                )));
            }

            RenderCommand::PopTransform => {
                if transform_stack.len() > 1 {
                    transform_stack.pop();
                }
            }

            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {
                // Groups are semantic — the app substitutes live widgets
                // (the scene slot) after the command pass
            }
        }
    }

    RenderResult { hit_regions }
}
