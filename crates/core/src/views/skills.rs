use folio_glass_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::Skill;

use super::content_span;

const TILE: f64 = 96.0;
const GAP: f64 = 16.0;

/// Gradient-tinted tile grid with a section heading.
pub fn render_skills(skills: &[Skill], page_width: f64, top: f64) -> (Vec<RenderCommand>, f64) {
    let (left, width) = content_span(page_width);
    let columns = ((width + GAP) / (TILE + GAP)).floor().max(1.0) as usize;

    let mut commands = Vec::new();
    commands.push(RenderCommand::BeginGroup {
        id: "skills".into(),
        label: Some("Skills".into()),
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(left, top + 48.0),
        text: "Skills".into(),
        color: ThemeToken::TextPrimary,
        font_size: 30.0,
        align: TextAlign::Left,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(left, top + 84.0),
        text: "A blend of engineering precision and visual craft.".into(),
        color: ThemeToken::TextSecondary,
        font_size: 14.0,
        align: TextAlign::Left,
    });

    let grid_top = top + 120.0;
    let mut bottom = grid_top;
    for (i, skill) in skills.iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let x = left + col as f64 * (TILE + GAP);
        let y = grid_top + row as f64 * (TILE + 36.0 + GAP);

        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, y, TILE, TILE),
            fill: skill.tint,
            border: Some(ThemeToken::CardBorder),
            radius: 14.0,
            card_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + TILE / 2.0, y + TILE + 18.0),
            text: skill.label.clone(),
            color: ThemeToken::TextPrimary,
            font_size: 13.0,
            align: TextAlign::Center,
        });

        bottom = bottom.max(y + TILE + 36.0);
    }

    commands.push(RenderCommand::EndGroup);
    (commands, bottom - top + 48.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn one_tile_per_skill() {
        let content = SiteContent::default_content();
        let (cmds, _) = render_skills(&content.skills, 1280.0, 0.0);
        let tiles = cmds
            .iter()
            .filter(|c| {
                matches!(c, RenderCommand::DrawRect { rect, .. } if rect.w == TILE && rect.h == TILE)
            })
            .count();
        assert_eq!(tiles, content.skills.len());
    }

    #[test]
    fn tiles_wrap_on_narrow_pages() {
        let content = SiteContent::default_content();
        let (_, wide) = render_skills(&content.skills, 1280.0, 0.0);
        let (_, narrow) = render_skills(&content.skills, 420.0, 0.0);
        assert!(narrow > wide);
    }
}
