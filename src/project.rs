//! Project records for the portfolio catalog.
//!
//! This module contains the `Project` record, its fixed tag enumeration and
//! the typed draft/patch inputs used by the admin dashboard.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{FolioError, Result};

/// Input contract for `short_description`; only enforced by display truncation.
pub const SHORT_DESCRIPTION_LIMIT: usize = 100;

/// Skill tags a project can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "ML")]
    Ml,
    #[serde(rename = "DL")]
    Dl,
    #[serde(rename = "LLM")]
    Llm,
    GenAI,
    LangChain,
    Hackathon,
    #[serde(rename = "NLP")]
    Nlp,
    Featured,
    #[serde(rename = "Web App")]
    WebApp,
}

impl Tag {
    pub const ALL: [Tag; 9] = [
        Tag::Ml,
        Tag::Dl,
        Tag::Llm,
        Tag::GenAI,
        Tag::LangChain,
        Tag::Hackathon,
        Tag::Nlp,
        Tag::Featured,
        Tag::WebApp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Ml => "ML",
            Tag::Dl => "DL",
            Tag::Llm => "LLM",
            Tag::GenAI => "GenAI",
            Tag::LangChain => "LangChain",
            Tag::Hackathon => "Hackathon",
            Tag::Nlp => "NLP",
            Tag::Featured => "Featured",
            Tag::WebApp => "Web App",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = FolioError;

    /// Case-insensitive; "webapp", "web-app" and "Web App" all match.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| FolioError::InvalidValue {
                message: format!("unknown tag '{}'", s.trim()),
            })
    }
}

/// Adds `tag` if absent, removes it if present (dashboard checkbox behavior).
pub fn toggle_tag(tags: &mut Vec<Tag>, tag: Tag) {
    if let Some(pos) = tags.iter().position(|t| *t == tag) {
        tags.remove(pos);
    } else {
        tags.push(tag);
    }
}

/// Lowercases `title` and collapses each whitespace run into one hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Slug derived from the title at creation; never changes
    pub id: String,
    pub title: String,
    pub short_description: String,
    #[serde(default)]
    pub full_description: String,
    /// Display media URI
    pub image: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    /// Admin notes. Anyone holding the record can read them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Project {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Links that are set, labelled for display
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", &self.github),
            ("Demo", &self.demo),
            ("YouTube", &self.youtube),
            ("Blog", &self.blog),
        ]
        .into_iter()
        .filter_map(|(label, link)| link.as_deref().map(|l| (label, l)))
        .collect()
    }

    fn apply(&mut self, patch: ProjectPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(short) = patch.short_description {
            self.short_description = short;
        }
        if let Some(full) = patch.full_description {
            self.full_description = full;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(tags) = patch.tags {
            self.tags = dedup_tags(tags);
        }
        if let Some(stack) = patch.tech_stack {
            self.tech_stack = stack;
        }
        merge_optional(&mut self.github, patch.github);
        merge_optional(&mut self.demo, patch.demo);
        merge_optional(&mut self.youtube, patch.youtube);
        merge_optional(&mut self.blog, patch.blog);
        merge_optional(&mut self.notes, patch.notes);
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
    }

    /// Returns a copy with `patch` merged in. The id is never touched.
    /// Fails with `ValidationFailed` when a required field is blank.
    pub fn check_required(&self) -> Result<()> {
        ensure_required(&self.title, &self.short_description, &self.image)
    }

    pub fn merged(&self, patch: ProjectPatch) -> Project {
        let mut project = self.clone();
        project.apply(patch);
        project
    }
}

// An empty string in a patch clears the field.
fn merge_optional(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *field = non_empty(value);
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Title, short description and image must be non-blank on every record.
fn ensure_required(title: &str, short_description: &str, image: &str) -> Result<()> {
    let missing: Vec<&str> = [
        ("title", title),
        ("short description", short_description),
        ("image", image),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(FolioError::missing_fields(&missing))
    }
}

fn dedup_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut unique = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

/// Not-yet-validated input for a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub image: String,
    pub tags: Vec<Tag>,
    pub tech_stack: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub youtube: Option<String>,
    pub blog: Option<String>,
    pub is_public: bool,
    pub notes: Option<String>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            short_description: String::new(),
            full_description: String::new(),
            image: String::new(),
            tags: Vec::new(),
            tech_stack: Vec::new(),
            github: None,
            demo: None,
            youtube: None,
            blog: None,
            is_public: true,
            notes: None,
        }
    }
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        short_description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            short_description: short_description.into(),
            image: image.into(),
            ..Self::default()
        }
    }

    pub fn full_description(mut self, text: impl Into<String>) -> Self {
        self.full_description = text.into();
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        toggle_tag(&mut self.tags, tag);
        self
    }

    pub fn tech_stack(mut self, stack: Vec<String>) -> Self {
        self.tech_stack = stack;
        self
    }

    pub fn github(mut self, url: impl Into<String>) -> Self {
        self.github = non_empty(url.into());
        self
    }

    pub fn demo(mut self, url: impl Into<String>) -> Self {
        self.demo = non_empty(url.into());
        self
    }

    pub fn youtube(mut self, url: impl Into<String>) -> Self {
        self.youtube = non_empty(url.into());
        self
    }

    pub fn blog(mut self, url: impl Into<String>) -> Self {
        self.blog = non_empty(url.into());
        self
    }

    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_empty(notes.into());
        self
    }

    /// Checks the required fields and builds the record with a slug id.
    pub fn validate(self) -> Result<Project> {
        ensure_required(&self.title, &self.short_description, &self.image)?;

        Ok(Project {
            id: slugify(&self.title),
            title: self.title,
            short_description: self.short_description,
            full_description: self.full_description,
            image: self.image,
            tags: dedup_tags(self.tags),
            tech_stack: self.tech_stack,
            github: self.github,
            demo: self.demo,
            youtube: self.youtube,
            blog: self.blog,
            is_public: self.is_public,
            notes: self.notes,
        })
    }
}

/// Field-by-field update for an existing project. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub tech_stack: Option<Vec<String>>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub youtube: Option<String>,
    pub blog: Option<String>,
    pub is_public: Option<bool>,
    pub notes: Option<String>,
}

impl ProjectPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
