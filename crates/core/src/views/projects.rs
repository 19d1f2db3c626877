use folio_glass_protocol::{Orientation, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::Project;

use super::{content_span, wrap_text};

pub const CARD_HEIGHT: f64 = 230.0;
const GAP: f64 = 24.0;

/// Project cards — the surfaces the tilt controller instruments.
///
/// Each card is wrapped in `PushTilt`/`PopTransform` carrying its current
/// orientation and tagged with a `card_id` so renderers report hit regions.
/// `orientations` is indexed like `projects`; missing entries read neutral.
pub fn render_projects(
    projects: &[Project],
    orientations: &[Orientation],
    page_width: f64,
    top: f64,
) -> (Vec<RenderCommand>, f64) {
    let (left, width) = content_span(page_width);
    let columns = if width >= 880.0 { 3 } else { 1 };
    let card_w = (width - GAP * (columns as f64 - 1.0)) / columns as f64;

    let mut commands = Vec::new();
    commands.push(RenderCommand::BeginGroup {
        id: "projects".into(),
        label: Some("Projects".into()),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(left, top + 48.0),
        text: "Projects".into(),
        color: ThemeToken::TextPrimary,
        font_size: 30.0,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(left, top + 84.0),
        text: "Selected work — immersive, performant, and production ready.".into(),
        color: ThemeToken::TextSecondary,
        font_size: 14.0,
        align: TextAlign::Left,
    });

    let grid_top = top + 120.0;
    let mut bottom = grid_top;
    for (i, project) in projects.iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let x = left + col as f64 * (card_w + GAP);
        let y = grid_top + row as f64 * (CARD_HEIGHT + GAP);
        let rect = Rect::new(x, y, card_w, CARD_HEIGHT);
        let orientation = orientations.get(i).copied().unwrap_or_default();

        commands.push(RenderCommand::PushTilt {
            origin: rect.center(),
            orientation,
        });
        // Tilted (hovered) cards glow.
        let border = if orientation.is_neutral() {
            ThemeToken::CardBorder
        } else {
            ThemeToken::CardGlow
        };
        commands.push(RenderCommand::DrawRect {
            rect,
            fill: ThemeToken::CardSurface,
            border: Some(border),
            radius: 20.0,
            card_id: Some(i as u64),
        });
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x + 18.0, y + 18.0, card_w - 36.0, 92.0),
            fill: ThemeToken::CardMedia,
            border: None,
            radius: 14.0,
            card_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 18.0, y + 132.0),
            text: project.title.clone(),
            color: ThemeToken::TextPrimary,
            font_size: 17.0,
            align: TextAlign::Left,
        });
        let mut line_y = y + 156.0;
        for line in wrap_text(&project.description, ((card_w - 36.0) / 6.5) as usize) {
            commands.push(RenderCommand::DrawText {
                position: Point::new(x + 18.0, line_y),
                text: line.into(),
                color: ThemeToken::TextSecondary,
                font_size: 13.0,
                align: TextAlign::Left,
            });
            line_y += 18.0;
        }
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 18.0, y + CARD_HEIGHT - 22.0),
            text: "Explore ↗".into(),
            color: ThemeToken::AccentFuchsia,
            font_size: 13.0,
            align: TextAlign::Left,
        });
        commands.push(RenderCommand::PopTransform);

        bottom = bottom.max(y + CARD_HEIGHT);
    }

    commands.push(RenderCommand::EndGroup);
    (commands, bottom - top + 48.0)
}

/// Scan a command list for card surfaces: `(card_id, rect)` in page space.
pub fn card_regions(commands: &[RenderCommand]) -> Vec<(u64, Rect)> {
    commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawRect {
                rect,
                card_id: Some(id),
                ..
            } => Some((*id, *rect)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn one_tagged_card_per_project() {
        let content = SiteContent::default_content();
        let (cmds, _) = render_projects(&content.projects, &[], 1280.0, 0.0);
        let regions = card_regions(&cmds);
        assert_eq!(regions.len(), content.projects.len());
        for (i, (id, rect)) in regions.iter().enumerate() {
            assert_eq!(*id, i as u64);
            assert!(!rect.is_degenerate());
        }
    }

    #[test]
    fn orientations_flow_into_tilt_commands() {
        let content = SiteContent::default_content();
        let orientations = vec![
            Orientation::new(2.0, -3.0),
            Orientation::NEUTRAL,
            Orientation::NEUTRAL,
        ];
        let (cmds, _) = render_projects(&content.projects, &orientations, 1280.0, 0.0);
        let tilts: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::PushTilt { orientation, .. } => Some(*orientation),
                _ => None,
            })
            .collect();
        assert_eq!(tilts.len(), content.projects.len());
        assert_eq!(tilts[0], Orientation::new(2.0, -3.0));
        assert!(tilts[1].is_neutral());
    }

    #[test]
    fn tilt_pushes_are_balanced() {
        let content = SiteContent::default_content();
        let (cmds, _) = render_projects(&content.projects, &[], 1280.0, 0.0);
        let pushes = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::PushTilt { .. }))
            .count();
        let pops = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::PopTransform))
            .count();
        assert_eq!(pushes, pops);
    }

    #[test]
    fn cards_do_not_overlap() {
        let content = SiteContent::default_content();
        let (cmds, _) = render_projects(&content.projects, &[], 1280.0, 0.0);
        let regions = card_regions(&cmds);
        for (i, (_, a)) in regions.iter().enumerate() {
            for (_, b) in regions.iter().skip(i + 1) {
                let separated = a.x + a.w <= b.x
                    || b.x + b.w <= a.x
                    || a.y + a.h <= b.y
                    || b.y + b.h <= a.y;
                assert!(separated);
            }
        }
    }
}
