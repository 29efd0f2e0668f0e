//! Project idea board.
//!
//! Ideas carry free-text tags and a status. The board lists them in insertion
//! order and never re-sorts by status or creation time.
use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{FolioError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdeaStatus {
    #[default]
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Blocked,
    Completed,
}

impl IdeaStatus {
    pub const ALL: [IdeaStatus; 4] = [
        IdeaStatus::Planned,
        IdeaStatus::InProgress,
        IdeaStatus::Blocked,
        IdeaStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaStatus::Planned => "Planned",
            IdeaStatus::InProgress => "In Progress",
            IdeaStatus::Blocked => "Blocked",
            IdeaStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdeaStatus {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        IdeaStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| FolioError::InvalidValue {
                message: format!(
                    "unknown status '{}', expected one of: Planned, In Progress, Blocked, Completed",
                    s.trim()
                ),
            })
    }
}

/// Adds a trimmed, non-empty tag unless it is already present.
pub fn add_idea_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    /// Millisecond timestamp string, strictly increasing per board
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: IdeaStatus,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
}

/// Input for a new idea
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: IdeaStatus,
}

impl IdeaDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        add_idea_tag(&mut self.tags, tag);
        self
    }

    pub fn status(mut self, status: IdeaStatus) -> Self {
        self.status = status;
        self
    }

    fn check(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FolioError::missing_fields(&missing))
        }
    }
}

/// Update for an existing idea. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<IdeaStatus>,
}

impl IdeaPatch {
    pub fn status(status: IdeaStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Ordered, in-memory collection of ideas
#[derive(Debug, Clone, Default)]
pub struct IdeaBoard {
    ideas: Vec<ProjectIdea>,
    last_id: i64,
}

impl IdeaBoard {
    pub fn new(ideas: Vec<ProjectIdea>) -> Self {
        info!("Idea board seeded with {} ideas", ideas.len());
        Self { ideas, last_id: 0 }
    }

    pub fn ideas(&self) -> &[ProjectIdea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectIdea> {
        self.ideas.iter().find(|i| i.id == id)
    }

    // Bumps past the previous id when two ideas land in the same millisecond.
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = millis;
        millis.to_string()
    }

    pub fn create(&mut self, draft: IdeaDraft) -> Result<ProjectIdea> {
        draft.check()?;
        let now = Utc::now();
        let idea = ProjectIdea {
            id: self.next_id(now),
            title: draft.title,
            description: draft.description,
            tags: draft.tags,
            status: draft.status,
            created_at: now,
        };
        info!("Project idea added: {}", idea.id);
        self.ideas.push(idea.clone());
        Ok(idea)
    }

    /// Merges `patch` into the idea. Blank title/description keep the old text.
    pub fn update(&mut self, id: &str, patch: IdeaPatch) -> Result<ProjectIdea> {
        let idea = self
            .ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| FolioError::IdeaNotFound { id: id.to_string() })?;

        if let Some(title) = patch.title.filter(|t| !t.trim().is_empty()) {
            idea.title = title;
        }
        if let Some(description) = patch.description.filter(|d| !d.trim().is_empty()) {
            idea.description = description;
        }
        if let Some(tags) = patch.tags {
            idea.tags = tags;
        }
        if let Some(status) = patch.status {
            idea.status = status;
        }

        info!("Project idea updated: {}", id);
        Ok(idea.clone())
    }

    /// Removes the idea with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.ideas.len();
        self.ideas.retain(|i| i.id != id);
        if self.ideas.len() < before {
            info!("Project idea deleted: {}", id);
        } else {
            debug!("Delete ignored, no idea with id {}", id);
        }
    }
}
