pub mod loader;
pub mod model;

pub use loader::ContentError;
pub use model::{
    AboutCard, ContactInfo, HeroContent, Project, SectionId, SiteContent, Skill, SocialLink,
};
