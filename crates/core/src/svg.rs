//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.
//!
//! Static export only — tilts become skew transforms, groups and clips are
//! passed through as `<g>` scoping where it matters and dropped otherwise.

use folio_glass_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 200);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));

    let bg = resolve_color(ThemeToken::Background, dark);
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{bg}"/>"#,
    ));

    // Open transform scopes so PopTransform can close the right tag.
    let mut open_groups = 0usize;

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                fill,
                border,
                radius,
                ..
            } => {
                let fill = resolve_color(*fill, dark);
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{radius}" fill="{fill}""#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
                if let Some(border) = border {
                    let stroke = resolve_color(*border, dark);
                    svg.push_str(&format!(r#" stroke="{stroke}" stroke-width="1""#));
                }
                svg.push_str("/>");
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                ));
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                svg.push_str(&format!(
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}"/>"#,
                    from.x, from.y, to.x, to.y,
                ));
            }
            RenderCommand::PushTransform { translate, scale } => {
                svg.push_str(&format!(
                    r#"<g transform="translate({} {}) scale({} {})">"#,
                    translate.x, translate.y, scale.x, scale.y,
                ));
                open_groups += 1;
            }
            RenderCommand::PushTilt { origin, orientation } => {
                // Perspective rotation collapses to a small skew about the
                // card center in a flat SVG.
                svg.push_str(&format!(
                    r#"<g transform="translate({ox} {oy}) skewX({sx:.3}) skewY({sy:.3}) translate({nx} {ny})">"#,
                    ox = origin.x,
                    oy = origin.y,
                    sx = orientation.rotate_y * 0.4,
                    sy = -orientation.rotate_x * 0.4,
                    nx = -origin.x,
                    ny = -origin.y,
                ));
                open_groups += 1;
            }
            RenderCommand::PopTransform => {
                if open_groups > 0 {
                    svg.push_str("</g>");
                    open_groups -= 1;
                }
            }
            // Clips and logical groups don't affect static SVG output.
            RenderCommand::SetClip { .. }
            | RenderCommand::ClearClip
            | RenderCommand::BeginGroup { .. }
            | RenderCommand::EndGroup => {}
        }
    }

    for _ in 0..open_groups {
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#0b1020",
            ThemeToken::BackdropGlowTop => "#1b2a4a",
            ThemeToken::BackdropGlowBottom => "#2a1b4a",
            ThemeToken::Surface | ThemeToken::NavBackground => "#101729",
            ThemeToken::Border | ThemeToken::NavBorder => "#243049",
            ThemeToken::BrandAccent | ThemeToken::AccentCyan => "#22d3ee",
            ThemeToken::AccentIndigo => "#818cf8",
            ThemeToken::AccentFuchsia => "#e879f9",
            ThemeToken::TextPrimary => "#e6edf7",
            ThemeToken::TextSecondary => "#94a3b8",
            ThemeToken::TextMuted | ThemeToken::FooterText => "#64748b",
            ThemeToken::ButtonPrimary => "#22d3ee",
            ThemeToken::ButtonPrimaryText => "#06121f",
            ThemeToken::ButtonGhost => "#131c33",
            ThemeToken::ButtonGhostBorder => "#2b3a5c",
            ThemeToken::CardSurface => "#121a30",
            ThemeToken::CardBorder => "#26345a",
            ThemeToken::CardGlow | ThemeToken::HoverHighlight => "#38bdf8",
            ThemeToken::CardMedia => "#1a2546",
            ThemeToken::TileCyan => "#155e75",
            ThemeToken::TileIndigo => "#3730a3",
            ThemeToken::TileFuchsia => "#86198f",
            ThemeToken::TileSky => "#075985",
            ThemeToken::TileViolet => "#5b21b6",
            ThemeToken::TilePurple => "#6b21a8",
            ThemeToken::SceneBackdrop => "#0e1530",
            ThemeToken::SceneWire => "#38bdf8",
            ThemeToken::FormField => "#0f182e",
            ThemeToken::FormFieldBorder => "#24324f",
        }
    } else {
        match token {
            ThemeToken::Background => "#f6f8fc",
            ThemeToken::BackdropGlowTop => "#dbeafe",
            ThemeToken::BackdropGlowBottom => "#ede9fe",
            ThemeToken::Surface | ThemeToken::NavBackground => "#ffffff",
            ThemeToken::Border | ThemeToken::NavBorder => "#dde3ee",
            ThemeToken::BrandAccent | ThemeToken::AccentCyan => "#0891b2",
            ThemeToken::AccentIndigo => "#4f46e5",
            ThemeToken::AccentFuchsia => "#c026d3",
            ThemeToken::TextPrimary => "#0f172a",
            ThemeToken::TextSecondary => "#475569",
            ThemeToken::TextMuted | ThemeToken::FooterText => "#94a3b8",
            ThemeToken::ButtonPrimary => "#0891b2",
            ThemeToken::ButtonPrimaryText => "#ffffff",
            ThemeToken::ButtonGhost => "#eef2f9",
            ThemeToken::ButtonGhostBorder => "#cbd5e1",
            ThemeToken::CardSurface => "#ffffff",
            ThemeToken::CardBorder => "#dbe2ef",
            ThemeToken::CardGlow | ThemeToken::HoverHighlight => "#0ea5e9",
            ThemeToken::CardMedia => "#e8edf7",
            ThemeToken::TileCyan => "#cffafe",
            ThemeToken::TileIndigo => "#e0e7ff",
            ThemeToken::TileFuchsia => "#fae8ff",
            ThemeToken::TileSky => "#e0f2fe",
            ThemeToken::TileViolet => "#ede9fe",
            ThemeToken::TilePurple => "#f3e8ff",
            ThemeToken::SceneBackdrop => "#eef2fb",
            ThemeToken::SceneWire => "#0ea5e9",
            ThemeToken::FormField => "#f8fafc",
            ThemeToken::FormFieldBorder => "#d7dfeb",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_glass_protocol::{Orientation, Point, Rect};

    #[test]
    fn basic_svg_output() {
        let commands = vec![RenderCommand::DrawRect {
            rect: Rect::new(10.0, 20.0, 100.0, 50.0),
            fill: ThemeToken::CardSurface,
            border: Some(ThemeToken::CardBorder),
            radius: 20.0,
            card_id: Some(0),
        }];
        let svg = render_svg(&commands, 800.0, 400.0, true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("#121a30"));
        assert!(svg.contains(r#"rx="20""#));
    }

    #[test]
    fn escapes_xml_entities() {
        let commands = vec![RenderCommand::DrawText {
            position: Point::new(0.0, 0.0),
            text: "fn<T>(&self)".into(),
            color: ThemeToken::TextPrimary,
            font_size: 12.0,
            align: TextAlign::Left,
        }];
        let svg = render_svg(&commands, 400.0, 100.0, false);
        assert!(svg.contains("fn&lt;T&gt;(&amp;self)"));
    }

    #[test]
    fn tilt_becomes_a_balanced_skew_group() {
        let commands = vec![
            RenderCommand::PushTilt {
                origin: Point::new(100.0, 50.0),
                orientation: Orientation::new(3.0, -3.0),
            },
            RenderCommand::DrawRect {
                rect: Rect::new(0.0, 0.0, 200.0, 100.0),
                fill: ThemeToken::CardSurface,
                border: None,
                radius: 0.0,
                card_id: None,
            },
            RenderCommand::PopTransform,
        ];
        let svg = render_svg(&commands, 400.0, 200.0, true);
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
        assert!(svg.contains("skewX"));
    }

    #[test]
    fn unbalanced_pops_are_tolerated() {
        let svg = render_svg(&[RenderCommand::PopTransform], 100.0, 100.0, false);
        assert!(!svg.contains("</g>"));
    }
}
