use folio_glass_protocol::{SharedStr, ThemeToken};
use serde::{Deserialize, Serialize};

/// One page section, in fixed page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in the order they are stacked on the page.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The anchor identifier used for in-page navigation.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Resolve an anchor back to a section. Unknown anchors resolve to
    /// `None` (navigation is best-effort).
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

/// A project entry — one card surface per record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: SharedStr,
    pub description: SharedStr,
    pub link: SharedStr,
}

/// A skill tile in the skills grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub label: SharedStr,
    pub tint: ThemeToken,
}

/// One of the three intro cards in the about section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutCard {
    pub icon: SharedStr,
    pub title: SharedStr,
    pub body: SharedStr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: SharedStr,
    pub href: SharedStr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub heading: SharedStr,
    pub blurb: SharedStr,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub eyebrow: SharedStr,
    pub headline: SharedStr,
    pub tagline: SharedStr,
    /// URL of the embedded third-party 3D scene. Opaque to the core; the
    /// renderer's scene collaborator consumes it.
    pub scene_url: SharedStr,
}

/// The whole page's static configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: SharedStr,
    pub hero: HeroContent,
    pub about: Vec<AboutCard>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub footer: SharedStr,
}

impl SiteContent {
    /// The built-in configuration the page ships with.
    pub fn default_content() -> Self {
        Self {
            brand: "/Portfolio".into(),
            hero: HeroContent {
                eyebrow: "Futuristic UI Engineer".into(),
                headline: "Building immersive experiences for the modern web".into(),
                tagline: "Premium, performant interfaces with WebGL, 3D scenes, and \
                          cinematic motion. Minimal, refined, and technically excellent."
                    .into(),
                scene_url: "https://prod.spline.design/EF7JOSsHLk16Tlw9/scene.splinecode".into(),
            },
            about: vec![
                AboutCard {
                    icon: "</>".into(),
                    title: "Engineer".into(),
                    body: "Clean, scalable frontend architecture with strong typing and \
                           modern tooling."
                        .into(),
                },
                AboutCard {
                    icon: "#".into(),
                    title: "3D & Motion".into(),
                    body: "WebGL scenes and purposeful micro-interactions.".into(),
                },
                AboutCard {
                    icon: "^".into(),
                    title: "Product First".into(),
                    body: "Experiences that feel effortless and refined, with business \
                           impact."
                        .into(),
                },
            ],
            skills: vec![
                Skill {
                    label: "Rust".into(),
                    tint: ThemeToken::TileCyan,
                },
                Skill {
                    label: "WebGL".into(),
                    tint: ThemeToken::TileViolet,
                },
                Skill {
                    label: "Shaders".into(),
                    tint: ThemeToken::TileFuchsia,
                },
                Skill {
                    label: "Motion".into(),
                    tint: ThemeToken::TileSky,
                },
                Skill {
                    label: "3D Scenes".into(),
                    tint: ThemeToken::TilePurple,
                },
                Skill {
                    label: "Design".into(),
                    tint: ThemeToken::TileIndigo,
                },
            ],
            projects: vec![
                Project {
                    title: "Holographic Dashboard".into(),
                    description: "Real-time WebGL analytics with parallax depth and motion \
                                  design."
                        .into(),
                    link: "#".into(),
                },
                Project {
                    title: "Interactive 3D Profile".into(),
                    description: "Avatar-driven portfolio powered by an embedded 3D scene.".into(),
                    link: "#".into(),
                },
                Project {
                    title: "Cinematic Landing".into(),
                    description: "Premium hero with scroll choreography and glassmorphism.".into(),
                    link: "#".into(),
                },
            ],
            contact: ContactInfo {
                heading: "Let's build something remarkable".into(),
                blurb: "Open to collaborations, product teams, and creative experiments.".into(),
                links: vec![
                    SocialLink {
                        label: "Email".into(),
                        href: "mailto:hello@example.com".into(),
                    },
                    SocialLink {
                        label: "GitHub".into(),
                        href: "https://github.com".into(),
                    },
                    SocialLink {
                        label: "LinkedIn".into(),
                        href: "https://linkedin.com".into(),
                    },
                ],
            },
            footer: "Designed & engineered with care.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_is_complete() {
        let content = SiteContent::default_content();
        assert_eq!(content.about.len(), 3);
        assert_eq!(content.projects.len(), 3);
        assert!(!content.skills.is_empty());
        assert!(!content.contact.links.is_empty());
    }

    #[test]
    fn anchors_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("blog"), None);
    }

    #[test]
    fn sections_are_in_page_order() {
        assert_eq!(SectionId::ALL[0], SectionId::Home);
        assert_eq!(SectionId::ALL[4], SectionId::Contact);
    }
}
