use folio_glass_protocol::{Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::ContactInfo;

use super::{content_span, wrap_text};

const FIELD_HEIGHT: f64 = 44.0;
const GAP: f64 = 16.0;

/// Contact section: heading, blurb, social link pills, and a decorative
/// message form. The form never submits anywhere; it is scaffolding only.
pub fn render_contact(contact: &ContactInfo, page_width: f64, top: f64) -> (Vec<RenderCommand>, f64) {
    let (left, width) = content_span(page_width);
    let form_w = width.min(560.0);

    let mut commands = Vec::new();
    commands.push(RenderCommand::BeginGroup {
        id: "contact".into(),
        label: Some("Contact".into()),
    });

    let mut y = top + 48.0;
    commands.push(RenderCommand::DrawText {
        position: Point::new(left, y),
        text: contact.heading.clone(),
        color: ThemeToken::TextPrimary,
        font_size: 30.0,
        align: TextAlign::Left,
    });
    y += 36.0;

    for line in wrap_text(&contact.blurb, (width / 7.0) as usize) {
        commands.push(RenderCommand::DrawText {
            position: Point::new(left, y),
            text: line.into(),
            color: ThemeToken::TextSecondary,
            font_size: 14.0,
            align: TextAlign::Left,
        });
        y += 20.0;
    }
    y += 16.0;

    // Social links as ghost pills.
    let mut x = left;
    for link in &contact.links {
        let pill_w = 32.0 + link.label.chars().count() as f64 * 8.0;
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(x, y, pill_w, 36.0),
            fill: ThemeToken::ButtonGhost,
            border: Some(ThemeToken::ButtonGhostBorder),
            radius: 18.0,
            card_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(x + pill_w / 2.0, y + 18.0),
            text: link.label.clone(),
            color: ThemeToken::AccentCyan,
            font_size: 13.0,
            align: TextAlign::Center,
        });
        x += pill_w + 12.0;
    }
    y += 36.0 + 32.0;

    for placeholder in ["Your name", "Your email", "Your message"] {
        let height = if placeholder == "Your message" {
            FIELD_HEIGHT * 2.5
        } else {
            FIELD_HEIGHT
        };
        commands.push(RenderCommand::DrawRect {
            rect: Rect::new(left, y, form_w, height),
            fill: ThemeToken::FormField,
            border: Some(ThemeToken::FormFieldBorder),
            radius: 12.0,
            card_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(left + 16.0, y + 22.0),
            text: placeholder.into(),
            color: ThemeToken::TextMuted,
            font_size: 13.0,
            align: TextAlign::Left,
        });
        y += height + GAP;
    }

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(left, y, 150.0, FIELD_HEIGHT),
        fill: ThemeToken::ButtonPrimary,
        border: None,
        radius: FIELD_HEIGHT / 2.0,
        card_id: None,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(left + 75.0, y + FIELD_HEIGHT / 2.0),
        text: "Send message".into(),
        color: ThemeToken::ButtonPrimaryText,
        font_size: 14.0,
        align: TextAlign::Center,
    });
    y += FIELD_HEIGHT;

    commands.push(RenderCommand::EndGroup);
    (commands, y - top + 48.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn one_pill_per_social_link() {
        let content = SiteContent::default_content();
        let (cmds, _) = render_contact(&content.contact, 1280.0, 0.0);
        let labels: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.as_str().to_string()),
                _ => None,
            })
            .collect();
        for link in &content.contact.links {
            assert!(labels.iter().any(|l| *l == *link.label));
        }
    }

    #[test]
    fn form_fields_are_present_but_inert() {
        let content = SiteContent::default_content();
        let (cmds, height) = render_contact(&content.contact, 1280.0, 0.0);
        let fields = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawRect {
                        fill: ThemeToken::FormField,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(fields, 3);
        assert!(height > 3.0 * FIELD_HEIGHT);
        // No form field is a tilt surface.
        assert!(cmds.iter().all(|c| !matches!(
            c,
            RenderCommand::DrawRect {
                card_id: Some(_),
                ..
            }
        )));
    }
}
