use folio_glass_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::AboutCard;

use super::{content_span, wrap_text};

const CARD_HEIGHT: f64 = 150.0;
const GAP: f64 = 24.0;

/// Three glass cards in a row (stacked on narrow pages).
pub fn render_about(cards: &[AboutCard], page_width: f64, top: f64) -> (Vec<RenderCommand>, f64) {
    let (left, width) = content_span(page_width);
    let columns = if width >= 760.0 { cards.len().max(1) } else { 1 };
    let card_w = (width - GAP * (columns as f64 - 1.0)) / columns as f64;

    let mut commands = Vec::new();
    commands.push(RenderCommand::BeginGroup {
        id: "about".into(),
        label: Some("About".into()),
    });

    let mut bottom = top;
    for (i, card) in cards.iter().enumerate() {
        let col = i % columns;
        let row = i / columns;
        let x = left + col as f64 * (card_w + GAP);
        let y = top + 48.0 + row as f64 * (CARD_HEIGHT + GAP);

        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, y, card_w, CARD_HEIGHT),
            fill: ThemeToken::CardSurface,
            border: Some(ThemeToken::CardBorder),
            radius: 20.0,
            card_id: None,
        });
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x + 20.0, y + 20.0, 44.0, 44.0),
            fill: ThemeToken::TileIndigo,
            border: None,
            radius: 12.0,
            card_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 42.0, y + 42.0),
            text: card.icon.clone(),
            color: ThemeToken::AccentIndigo,
            font_size: 16.0,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + 78.0, y + 32.0),
            text: card.title.clone(),
            color: ThemeToken::TextPrimary,
            font_size: 17.0,
            align: TextAlign::Left,
        });
        let mut line_y = y + 58.0;
        for line in wrap_text(&card.body, ((card_w - 98.0) / 6.5) as usize) {
            commands.push(RenderCommand::DrawText {
                position: Point::new(x + 78.0, line_y),
                text: line.into(),
                color: ThemeToken::TextSecondary,
                font_size: 13.0,
                align: TextAlign::Left,
            });
            line_y += 18.0;
        }

        bottom = bottom.max(y + CARD_HEIGHT);
    }

    commands.push(RenderCommand::EndGroup);
    (commands, bottom - top + 48.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn one_card_rect_per_entry() {
        let content = SiteContent::default_content();
        let (cmds, height) = render_about(&content.about, 1280.0, 0.0);
        let cards = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect {
                        fill: ThemeToken::CardSurface,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(cards, content.about.len());
        assert!(height > CARD_HEIGHT);
    }

    #[test]
    fn narrow_layout_stacks_cards() {
        let content = SiteContent::default_content();
        let (_, wide_height) = render_about(&content.about, 1280.0, 0.0);
        let (_, narrow_height) = render_about(&content.about, 600.0, 0.0);
        assert!(narrow_height > wide_height);
    }
}
