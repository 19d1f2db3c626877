use folio_glass_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::HeroContent;

use super::{content_span, wrap_text};

const TOP_PADDING: f64 = 110.0;
const HEADLINE_SIZE: f64 = 44.0;
const HEADLINE_LINE_HEIGHT: f64 = 52.0;

pub struct HeroRender {
    pub commands: Vec<RenderCommand>,
    pub height: f64,
    /// Where the scene collaborator should be mounted, in page coordinates.
    pub scene_rect: Rect,
}

/// Hero: eyebrow, headline, tagline, two action pills, and the 3D scene
/// slot on the right. The scene itself is an opaque collaborator — the
/// view only reserves its rect and tags it as a group.
pub fn render_hero(hero: &HeroContent, page_width: f64, top: f64) -> HeroRender {
    let (left, width) = content_span(page_width);
    let two_column = width >= 880.0;
    let text_width = if two_column { width * 0.5 } else { width };

    let mut commands = Vec::new();
    commands.push(RenderCommand::BeginGroup {
        id: "hero".into(),
        label: Some("Hero".into()),
    });

    let mut y = top + TOP_PADDING;
    commands.push(RenderCommand::DrawText {
        position: Point::new(left, y),
        text: hero.eyebrow.clone(),
        color: ThemeToken::AccentCyan,
        font_size: 13.0,
        align: TextAlign::Left,
    });
    y += 36.0;

    let headline_budget = (text_width / (HEADLINE_SIZE * 0.52)) as usize;
    for line in wrap_text(&hero.headline, headline_budget.max(12)) {
        commands.push(RenderCommand::DrawText {
            position: Point::new(left, y),
            text: line.into(),
            color: ThemeToken::TextPrimary,
            font_size: HEADLINE_SIZE,
            align: TextAlign::Left,
        });
        y += HEADLINE_LINE_HEIGHT;
    }
    y += 12.0;

    for line in wrap_text(&hero.tagline, (text_width / 8.0) as usize) {
        commands.push(RenderCommand::DrawText {
            position: Point::new(left, y),
            text: line.into(),
            color: ThemeToken::TextSecondary,
            font_size: 16.0,
            align: TextAlign::Left,
        });
        y += 24.0;
    }
    y += 24.0;

    // Action pills.
    let pill_h = 44.0;
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(left, y, 140.0, pill_h),
        fill: ThemeToken::ButtonPrimary,
        border: None,
        radius: pill_h / 2.0,
        card_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(left + 70.0, y + pill_h / 2.0),
        text: "View Work".into(),
        color: ThemeToken::ButtonPrimaryText,
        font_size: 14.0,
        align: TextAlign::Center,
    });
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(left + 156.0, y, 120.0, pill_h),
        fill: ThemeToken::ButtonGhost,
        border: Some(ThemeToken::ButtonGhostBorder),
        radius: pill_h / 2.0,
        card_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(left + 216.0, y + pill_h / 2.0),
        text: "Contact".into(),
        color: ThemeToken::TextPrimary,
        font_size: 14.0,
        align: TextAlign::Center,
    });
    y += pill_h;

    let text_bottom = y + 48.0;

    // Scene slot: right column on wide pages, below the text otherwise.
    let scene_rect = if two_column {
        let scene_w = width * 0.44;
        Rect::new(
            left + width - scene_w,
            top + TOP_PADDING,
            scene_w,
            scene_w * 0.75,
        )
    } else {
        Rect::new(left, text_bottom, width, width * 0.5)
    };
    commands.push(RenderCommand::BeginGroup {
        id: "scene".into(),
        label: Some(hero.scene_url.clone()),
    });
    commands.push(RenderCommand::DrawRect {
        rect: scene_rect,
        fill: ThemeToken::SceneBackdrop,
        border: Some(ThemeToken::Border),
        radius: 24.0,
        card_id: None,
    });
    commands.push(RenderCommand::EndGroup);
    commands.push(RenderCommand::EndGroup);

    let height = (scene_rect.y + scene_rect.h).max(text_bottom) - top + 64.0;
    HeroRender {
        commands,
        height,
        scene_rect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn hero_reserves_a_scene_slot() {
        let content = SiteContent::default_content();
        let hero = render_hero(&content.hero, 1280.0, 0.0);
        assert!(!hero.scene_rect.is_degenerate());
        assert!(hero.height > hero.scene_rect.h);
        let scene_groups = hero
            .commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::BeginGroup { id, .. } if *id == "scene"))
            .count();
        assert_eq!(scene_groups, 1);
    }

    #[test]
    fn narrow_pages_stack_the_scene_below_the_text() {
        let content = SiteContent::default_content();
        let wide = render_hero(&content.hero, 1280.0, 0.0);
        let narrow = render_hero(&content.hero, 640.0, 0.0);
        assert!(narrow.scene_rect.y > wide.scene_rect.y);
        assert!(narrow.height > wide.height);
    }

    #[test]
    fn hero_text_carries_the_headline() {
        let content = SiteContent::default_content();
        let hero = render_hero(&content.hero, 1280.0, 0.0);
        let joined: String = hero
            .commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");
        assert!(joined.contains("Building immersive"));
    }
}
