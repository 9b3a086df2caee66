//! Template catalog for the X Algorithm Guide.
//!
//! This crate provides:
//! - **Template Store**: in-memory catalog keyed by id, indexed by category
//! - **Category Registry**: the 14 fixed content categories and their display metadata
//! - **Bundled Templates**: hand-authored post templates embedded at compile time
//! - **Validation**: relation and content integrity report over a loaded store
//! - **Config**: `~/.xguide/config.toml` loading with defaults

pub mod bundled;
pub mod categories;
pub mod config;
pub mod store;
pub mod validate;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use categories::{all_categories, get_category, CategoryInfo};
pub use config::{CatalogConfig, DuplicatePolicy};
pub use store::{CatalogSummary, TemplateFilter, TemplateStore};
pub use validate::{validate, RelationIssue, ValidationReport};

// ─── Error types ─────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate template id: {0}")]
    DuplicateId(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("Catalog failed validation with {0} issue(s)")]
    InvalidCatalog(usize),
    #[error("TOML parse error: {0}")]
    TomlParse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

// ─── Core types ──────────────────────────────────────────────────────────────

/// Content grouping of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Engagement,
    Viral,
    Value,
    Storytelling,
    Question,
    Thread,
    List,
    Opinion,
    Humor,
    Personal,
    News,
    Tutorial,
    Promotion,
    Community,
}

impl TemplateCategory {
    /// Every category, in registry order.
    pub const ALL: [TemplateCategory; 14] = [
        Self::Engagement,
        Self::Viral,
        Self::Value,
        Self::Storytelling,
        Self::Question,
        Self::Thread,
        Self::List,
        Self::Opinion,
        Self::Humor,
        Self::Personal,
        Self::News,
        Self::Tutorial,
        Self::Promotion,
        Self::Community,
    ];

    /// Stable string id (as used in data files and URLs).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engagement => "engagement",
            Self::Viral => "viral",
            Self::Value => "value",
            Self::Storytelling => "storytelling",
            Self::Question => "question",
            Self::Thread => "thread",
            Self::List => "list",
            Self::Opinion => "opinion",
            Self::Humor => "humor",
            Self::Personal => "personal",
            Self::News => "news",
            Self::Tutorial => "tutorial",
            Self::Promotion => "promotion",
            Self::Community => "community",
        }
    }

    /// Display metadata from the category registry.
    pub fn info(&self) -> &'static CategoryInfo {
        categories::info_for(*self)
    }
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Skill level a template is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Label shown to readers of the guide.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "初級",
            Self::Intermediate => "中級",
            Self::Advanced => "上級",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CatalogError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Qualitative engagement forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Expected audience reaction, one level per engagement signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedEngagement {
    pub likes: EngagementLevel,
    pub replies: EngagementLevel,
    pub reposts: EngagementLevel,
    pub bookmarks: EngagementLevel,
}

/// A catalogued example post with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier (e.g. "engagement-01").
    pub id: String,
    pub category: TemplateCategory,
    pub title: String,
    pub description: String,
    /// The post text itself.
    pub example: String,
    /// Why the post works.
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub points: Vec<String>,
    #[serde(default)]
    pub cautions: Vec<String>,
    /// Guide chapter numbers. Not checked against the guide at registration.
    #[serde(default)]
    pub related_chapters: Vec<u32>,
    /// Ids of other templates. Not required to resolve or be symmetric.
    #[serde(default)]
    pub related_templates: Vec<String>,
    pub difficulty: Difficulty,
    pub expected_engagement: ExpectedEngagement,
}

impl Template {
    /// Case-insensitive substring match over title, description and effects.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .effects
                .iter()
                .any(|e| e.to_lowercase().contains(needle))
    }
}

/// Top-level structure of a template data file (`[[templates]]` array).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateFile {
    #[serde(default)]
    pub templates: Vec<Template>,
}
