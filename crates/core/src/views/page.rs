use folio_glass_protocol::{Orientation, Point, Rect, RenderCommand, TextAlign, ThemeToken};

use crate::content::{SectionId, SiteContent};
use crate::scroll::SectionMap;

use super::about::render_about;
use super::contact::render_contact;
use super::hero::render_hero;
use super::projects::render_projects;
use super::skills::render_skills;

pub use super::navbar::NAVBAR_HEIGHT;
pub use super::projects::card_regions;

const FOOTER_HEIGHT: f64 = 72.0;

/// The whole scrollable page, laid out once per frame.
pub struct PageLayout {
    /// Page-space commands, top to bottom. Does not include the navbar,
    /// which renderers draw separately in viewport space.
    pub commands: Vec<RenderCommand>,
    pub sections: SectionMap,
    /// Slot for the 3D scene collaborator, in page space.
    pub scene_rect: Rect,
    pub height: f64,
}

/// Stack every section in page order. `orientations` is indexed like
/// `content.projects` and flows into the project cards' tilt commands.
pub fn layout_page(
    content: &SiteContent,
    page_width: f64,
    orientations: &[Orientation],
) -> PageLayout {
    let mut commands = Vec::new();
    let mut sections = SectionMap::default();
    let mut y = 0.0;

    let hero = render_hero(&content.hero, page_width, y);
    sections.push(SectionId::Home, y, hero.height);
    commands.extend(hero.commands);
    y += hero.height;

    let (about_cmds, about_h) = render_about(&content.about, page_width, y);
    sections.push(SectionId::About, y, about_h);
    commands.extend(about_cmds);
    y += about_h;

    let (skills_cmds, skills_h) = render_skills(&content.skills, page_width, y);
    sections.push(SectionId::Skills, y, skills_h);
    commands.extend(skills_cmds);
    y += skills_h;

    let (project_cmds, projects_h) =
        render_projects(&content.projects, orientations, page_width, y);
    sections.push(SectionId::Projects, y, projects_h);
    commands.extend(project_cmds);
    y += projects_h;

    let (contact_cmds, contact_h) = render_contact(&content.contact, page_width, y);
    sections.push(SectionId::Contact, y, contact_h);
    commands.extend(contact_cmds);
    y += contact_h;

    commands.push(RenderCommand::DrawLine {
        from: Point::new(0.0, y),
        to: Point::new(page_width, y),
        color: ThemeToken::Border,
        width: 1.0,
    });
    commands.push(RenderCommand::DrawText {
        position: Point::new(page_width / 2.0, y + FOOTER_HEIGHT / 2.0),
        text: content.footer.clone(),
        color: ThemeToken::FooterText,
        font_size: 12.0,
        align: TextAlign::Center,
    });
    y += FOOTER_HEIGHT;

    PageLayout {
        commands,
        sections,
        scene_rect: hero.scene_rect,
        height: y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    #[test]
    fn sections_stack_in_order_without_gaps() {
        let content = SiteContent::default_content();
        let page = layout_page(&content, 1280.0, &[]);
        let tops: Vec<f64> = SectionId::ALL
            .iter()
            .map(|s| page.sections.offset_of(*s).unwrap())
            .collect();
        assert_eq!(tops[0], 0.0);
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        // Every offset up to the footer resolves to some section.
        for offset in [0.0, tops[2] + 1.0, page.sections.total_height() - 1.0] {
            assert!(page.sections.section_at(offset).is_some());
        }
        assert!(page.height >= page.sections.total_height());
    }

    #[test]
    fn card_regions_match_project_count() {
        let content = SiteContent::default_content();
        let page = layout_page(&content, 1280.0, &[]);
        assert_eq!(
            card_regions(&page.commands).len(),
            content.projects.len()
        );
    }

    #[test]
    fn cards_live_inside_the_projects_section() {
        let content = SiteContent::default_content();
        let page = layout_page(&content, 1280.0, &[]);
        let top = page.sections.offset_of(SectionId::Projects).unwrap();
        let bottom = page.sections.offset_of(SectionId::Contact).unwrap();
        for (_, rect) in card_regions(&page.commands) {
            assert!(rect.y >= top && rect.y + rect.h <= bottom);
        }
    }

    #[test]
    fn scene_rect_sits_in_the_hero() {
        let content = SiteContent::default_content();
        let page = layout_page(&content, 1280.0, &[]);
        let home_height = page.sections.offset_of(SectionId::About).unwrap();
        assert!(page.scene_rect.y + page.scene_rect.h <= home_height);
    }
}
