use folio_glass_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::{SectionId, SiteContent};

use super::content_span;

pub const NAVBAR_HEIGHT: f64 = 56.0;

/// Fixed navigation bar: brand on the left, one link per section plus a
/// call-to-action on the right. Drawn in viewport space (it does not
/// scroll with the page).
pub fn render_navbar(content: &SiteContent, page_width: f64) -> Vec<RenderCommand> {
    let (left, width) = content_span(page_width);
    let mut commands = Vec::new();

    commands.push(RenderCommand::BeginGroup {
        id: "navbar".into(),
        label: Some("Navigation".into()),
    });

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(0.0, 0.0, page_width, NAVBAR_HEIGHT),
        fill: ThemeToken::NavBackground,
        border: Some(ThemeToken::NavBorder),
        radius: 0.0,
        card_id: None,
    });

    commands.push(RenderCommand::DrawText {
        position: Point::new(left, NAVBAR_HEIGHT / 2.0),
        text: content.brand.clone(),
        color: ThemeToken::BrandAccent,
        font_size: 18.0,
        align: TextAlign::Left,
    });

    // Links right-to-left so the CTA hugs the right edge.
    let mut x = left + width;
    let cta_width = 96.0;
    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(x - cta_width, 12.0, cta_width, NAVBAR_HEIGHT - 24.0),
        fill: ThemeToken::ButtonPrimary,
        border: None,
        radius: 16.0,
        card_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(x - cta_width / 2.0, NAVBAR_HEIGHT / 2.0),
        text: "Let's talk".into(),
        color: ThemeToken::ButtonPrimaryText,
        font_size: 13.0,
        align: TextAlign::Center,
    });
    x -= cta_width + 28.0;

    for section in SectionId::ALL.iter().rev() {
        if *section == SectionId::Home {
            continue;
        }
        commands.push(RenderCommand::DrawText {
            position: Point::new(x, NAVBAR_HEIGHT / 2.0),
            text: section.label().into(),
            color: ThemeToken::TextSecondary,
            font_size: 13.0,
            align: TextAlign::Right,
        });
        x -= 72.0;
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn navbar_links_every_section_except_home() {
        let cmds = render_navbar(&SiteContent::default_content(), 1280.0);
        let labels: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.as_str().to_string()),
                _ => None,
            })
            .collect();
        for section in [SectionId::About, SectionId::Skills, SectionId::Projects] {
            assert!(labels.iter().any(|l| l == section.label()));
        }
        assert!(!labels.iter().any(|l| l == SectionId::Home.label()));
    }

    #[test]
    fn navbar_stays_within_its_height() {
        let cmds = render_navbar(&SiteContent::default_content(), 1280.0);
        for cmd in &cmds {
            if let RenderCommand::DrawRect { rect, .. } = cmd {
                assert!(rect.y + rect.h <= NAVBAR_HEIGHT);
            }
        }
    }
}
