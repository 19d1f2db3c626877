//! Loading a `SiteContent` override from user-supplied JSON.
//!
//! The page ships with built-in content; dropping a JSON file onto the page
//! (or opening one from the toolbar) replaces it. Loading is strict: a file
//! that parses but describes an unusable page is rejected.

use thiserror::Error;

use super::model::SiteContent;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content has no projects — the page needs at least one card")]
    NoProjects,
    #[error("project {index} has a blank title")]
    BlankTitle { index: usize },
}

impl SiteContent {
    /// Parse and validate a content override.
    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_slice(data)?;
        if content.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        if let Some(index) = content
            .projects
            .iter()
            .position(|p| p.title.trim().is_empty())
        {
            return Err(ContentError::BlankTitle { index });
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_default_content() {
        let content = SiteContent::default_content();
        let json = serde_json::to_vec(&content).expect("serialize");
        let loaded = SiteContent::from_json(&json).expect("load");
        assert_eq!(loaded.projects.len(), content.projects.len());
        assert_eq!(loaded.brand, content.brand);
    }

    #[test]
    fn rejects_empty_project_list() {
        let mut content = SiteContent::default_content();
        content.projects.clear();
        let json = serde_json::to_vec(&content).expect("serialize");
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::NoProjects)
        ));
    }

    #[test]
    fn rejects_blank_project_title() {
        let mut content = SiteContent::default_content();
        content.projects[1].title = "   ".into();
        let json = serde_json::to_vec(&content).expect("serialize");
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::BlankTitle { index: 1 })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SiteContent::from_json(b"{not json"),
            Err(ContentError::Json(_))
        ));
    }
}
