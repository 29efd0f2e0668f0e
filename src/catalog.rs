//! In-memory project catalog.
//!
//! The catalog keeps projects in insertion order. Reads filter by tag without
//! re-sorting; writes happen in place and are never written back to disk.
use std::{fmt, str::FromStr};

use log::{debug, info, warn};

use crate::{FolioError, Project, ProjectDraft, ProjectPatch, Result, Tag};

/// Active filter of the projects listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(Tag),
}

impl TagFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => project.has_tag(*tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str("All"),
            TagFilter::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

impl FromStr for TagFilter {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(TagFilter::All)
        } else {
            s.parse().map(TagFilter::Tag)
        }
    }
}

impl From<Tag> for TagFilter {
    fn from(tag: Tag) -> Self {
        TagFilter::Tag(tag)
    }
}

/// Stable filter over any project sequence.
pub fn filter_by_tag(projects: &[Project], filter: TagFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Ordered collection of projects with the dashboard's CRUD operations
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        info!("Catalog seeded with {} projects", projects.len());
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn filter_by_tag(&self, filter: TagFilter) -> Vec<&Project> {
        let matching = filter_by_tag(&self.projects, filter);
        debug!("Filter {} matched {} projects", filter, matching.len());
        matching
    }

    /// Projects visible on the public home page
    pub fn public_projects(&self, filter: TagFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.is_public && filter.matches(p))
            .collect()
    }

    /// Validates `draft` and appends the new project.
    ///
    /// The slug id is not checked for uniqueness: a second project whose title
    /// collapses to an existing slug is appended under the same id.
    pub fn create(&mut self, draft: ProjectDraft) -> Result<Project> {
        let project = draft.validate()?;
        if self.get(&project.id).is_some() {
            warn!("Project id {} already exists in the catalog", project.id);
        }
        info!("Project added: {}", project.id);
        self.projects.push(project.clone());
        Ok(project)
    }

    /// Merges `patch` into every project with `id` and returns the first.
    ///
    /// A patch that blanks a required field is rejected and nothing changes.
    pub fn update(&mut self, id: &str, patch: ProjectPatch) -> Result<Project> {
        let updated = self
            .get(id)
            .ok_or_else(|| FolioError::ProjectNotFound { id: id.to_string() })?
            .merged(patch.clone());
        updated.check_required()?;

        for project in self.projects.iter_mut().filter(|p| p.id == id) {
            *project = project.merged(patch.clone());
        }
        info!("Project updated: {}", id);
        Ok(updated)
    }

    /// Removes every project with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() < before {
            info!("Project deleted: {}", id);
        } else {
            debug!("Delete ignored, no project with id {}", id);
        }
    }

    /// Flips `is_public` on every project with `id`. Unknown ids are ignored.
    pub fn toggle_visibility(&mut self, id: &str) {
        let mut toggled = 0;
        for project in self.projects.iter_mut().filter(|p| p.id == id) {
            project.is_public = !project.is_public;
            toggled += 1;
        }
        if toggled == 0 {
            debug!("Visibility toggle ignored, no project with id {}", id);
        } else {
            info!("Visibility flipped on {} project(s) with id {}", toggled, id);
        }
    }
}

/// Listing state of the public projects section: active filter plus the one
/// project whose details are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectBrowser {
    filter: TagFilter,
    expanded: Option<String>,
}

impl ProjectBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> TagFilter {
        self.filter
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// Changes the filter. Any expanded project is collapsed.
    pub fn set_filter(&mut self, filter: TagFilter) {
        self.filter = filter;
        self.expanded = None;
    }

    /// Expands `id`, or collapses it if it is already the expanded one.
    pub fn toggle_details(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn visible<'a>(&self, catalog: &'a ProjectCatalog) -> Vec<&'a Project> {
        catalog.public_projects(self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project(id: &str, tags: &[Tag]) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            short_description: format!("{} short", id),
            full_description: String::new(),
            image: format!("https://img/{}.png", id),
            tags: tags.to_vec(),
            tech_stack: vec!["Rust".to_string()],
            github: None,
            demo: None,
            youtube: None,
            blog: None,
            is_public: true,
            notes: None,
        }
    }

    fn nine_projects() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            project("p1", &[Tag::Ml]),
            project("p2", &[Tag::Hackathon, Tag::GenAI]),
            project("p3", &[Tag::Dl]),
            project("p4", &[Tag::Llm, Tag::Nlp]),
            project("p5", &[Tag::Featured]),
            project("p6", &[]),
            project("p7", &[Tag::LangChain, Tag::Hackathon]),
            project("p8", &[Tag::WebApp]),
            project("p9", &[Tag::Ml, Tag::Dl]),
        ])
    }

    // ==================== Read path ====================

    #[test]
    fn test_filter_hackathon_returns_two_in_order() {
        let catalog = nine_projects();
        let ids: Vec<&str> = catalog
            .filter_by_tag(TagFilter::Tag(Tag::Hackathon))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p2", "p7"]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = nine_projects();
        let all = catalog.filter_by_tag(TagFilter::All);
        assert_eq!(all.len(), 9);
        assert!(all.iter().zip(catalog.projects()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<TagFilter>().unwrap(), TagFilter::All);
        assert_eq!("nlp".parse::<TagFilter>().unwrap(), TagFilter::Tag(Tag::Nlp));
        assert!("Cobol".parse::<TagFilter>().is_err());
    }

    #[test]
    fn test_public_projects_hide_private() {
        let mut catalog = nine_projects();
        catalog.toggle_visibility("p2");
        let ids: Vec<&str> = catalog
            .public_projects(TagFilter::Tag(Tag::Hackathon))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p7"]);
    }

    #[test]
    fn test_toggle_details_twice_collapses() {
        let mut browser = ProjectBrowser::new();
        browser.toggle_details("p1");
        assert_eq!(browser.expanded(), Some("p1"));
        browser.toggle_details("p1");
        assert_eq!(browser.expanded(), None);
    }

    #[test]
    fn test_only_one_project_expanded() {
        let mut browser = ProjectBrowser::new();
        browser.toggle_details("p1");
        browser.toggle_details("p2");
        assert_eq!(browser.expanded(), Some("p2"));
    }

    #[test]
    fn test_filter_change_collapses_details() {
        let mut browser = ProjectBrowser::new();
        browser.toggle_details("p4");
        browser.set_filter(TagFilter::Tag(Tag::Nlp));
        assert_eq!(browser.expanded(), None);
        assert_eq!(browser.filter(), TagFilter::Tag(Tag::Nlp));
    }

    // ==================== Write path ====================

    #[test]
    fn test_create_appends_with_slug() {
        let mut catalog = nine_projects();
        let created = catalog
            .create(ProjectDraft::new("My App", "desc", "http://x/y.png"))
            .unwrap();

        assert_eq!(created.id, "my-app");
        assert!(created.is_public);
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.projects().last(), Some(&created));
    }

    #[test]
    fn test_create_invalid_leaves_catalog_untouched() {
        let mut catalog = nine_projects();
        let result = catalog.create(ProjectDraft::new("Title", "", "http://x/y.png"));
        assert!(matches!(result, Err(FolioError::ValidationFailed { .. })));
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_crud_round_trip() {
        let mut catalog = nine_projects();
        let created = catalog
            .create(ProjectDraft::new("Round Trip", "short", "img").tag(Tag::Ml))
            .unwrap();

        catalog.update(&created.id, ProjectPatch::title("X")).unwrap();
        let read = catalog.get(&created.id).unwrap().clone();
        assert_eq!(
            read,
            Project {
                title: "X".to_string(),
                ..created.clone()
            }
        );

        catalog.delete(&created.id);
        assert!(catalog.get(&created.id).is_none());
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_update_keeps_order_and_others() {
        let mut catalog = nine_projects();
        let before = catalog.projects().to_vec();

        catalog.update("p5", ProjectPatch::title("Five")).unwrap();
        let ids: Vec<&str> = catalog.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "p9"]);
        for (a, b) in before.iter().zip(catalog.projects()) {
            if a.id != "p5" {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut catalog = nine_projects();
        let result = catalog.update("missing", ProjectPatch::title("X"));
        assert!(matches!(result, Err(FolioError::ProjectNotFound { id }) if id == "missing"));
    }

    #[test]
    fn test_update_blanking_title_is_rejected() {
        let mut catalog = nine_projects();
        let before = catalog.projects().to_vec();

        let result = catalog.update(
            "p4",
            ProjectPatch {
                title: Some(String::new()),
                image: Some(String::new()),
                ..ProjectPatch::default()
            },
        );

        assert!(matches!(result, Err(FolioError::ValidationFailed { .. })));
        assert_eq!(catalog.projects(), before.as_slice());
    }

    #[test]
    fn test_duplicate_slug_writes_hit_every_match() {
        let mut catalog = nine_projects();
        catalog
            .create(ProjectDraft::new("My App", "first", "img"))
            .unwrap();
        catalog
            .create(ProjectDraft::new("my   app", "second", "img"))
            .unwrap();

        let updated = catalog.update("my-app", ProjectPatch::title("X")).unwrap();
        assert_eq!(updated.short_description, "first");
        catalog.toggle_visibility("my-app");

        let dupes: Vec<&Project> = catalog
            .projects()
            .iter()
            .filter(|p| p.id == "my-app")
            .collect();
        assert_eq!(dupes.len(), 2);
        for project in &dupes {
            assert_eq!(project.title, "X");
            assert!(!project.is_public);
        }
        assert_eq!(dupes[1].short_description, "second");

        catalog.delete("my-app");
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut catalog = nine_projects();
        catalog.delete("missing");
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_toggle_visibility_twice_restores() {
        let mut catalog = nine_projects();
        let before = catalog.projects().to_vec();

        catalog.toggle_visibility("p3");
        assert!(!catalog.get("p3").unwrap().is_public);
        catalog.toggle_visibility("p3");
        assert_eq!(catalog.projects(), before.as_slice());
    }

    #[test]
    fn test_toggle_visibility_unknown_is_noop() {
        let mut catalog = nine_projects();
        let before = catalog.projects().to_vec();
        catalog.toggle_visibility("nope");
        assert_eq!(catalog.projects(), before.as_slice());
    }

    // ==================== Property Tests ====================

    fn arb_tags() -> impl Strategy<Value = Vec<Tag>> {
        proptest::sample::subsequence(Tag::ALL.to_vec(), 0..=4)
    }

    proptest! {
        #[test]
        fn prop_filter_is_stable_subsequence(
            tag_sets in proptest::collection::vec(arb_tags(), 0..20),
            tag_index in 0usize..9
        ) {
            let projects: Vec<Project> = tag_sets
                .iter()
                .enumerate()
                .map(|(i, tags)| project(&format!("p{}", i), tags))
                .collect();
            let tag = Tag::ALL[tag_index];

            let filtered = filter_by_tag(&projects, TagFilter::Tag(tag));
            let expected: Vec<&Project> = projects.iter().filter(|p| p.tags.contains(&tag)).collect();
            prop_assert_eq!(filtered, expected);

            let all = filter_by_tag(&projects, TagFilter::All);
            prop_assert_eq!(all.len(), projects.len());
            prop_assert!(all.iter().zip(projects.iter()).all(|(a, b)| *a == b));
        }

        #[test]
        fn prop_toggle_details_twice_is_identity(id in "[a-z]{1,8}") {
            let mut browser = ProjectBrowser::new();
            browser.toggle_details(&id);
            browser.toggle_details(&id);
            prop_assert_eq!(browser.expanded(), None);
        }
    }
}
