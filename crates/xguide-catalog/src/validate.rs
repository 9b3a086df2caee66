//! Integrity report over a loaded store.
//!
//! Registration never checks relations; this pass finds what registration lets
//! through so callers can decide whether to warn or refuse to start.

use crate::store::TemplateStore;
use serde::Serialize;
use std::collections::HashSet;

/// A single integrity problem found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationIssue {
    /// `related_templates` names an id that is not loaded.
    DanglingTemplate {
        template_id: String,
        related_id: String,
    },
    SelfReference { template_id: String },
    /// The same id is listed more than once in `related_templates`.
    RepeatedRelation {
        template_id: String,
        related_id: String,
    },
    ChapterOutOfRange { template_id: String, chapter: u32 },
    EmptyField {
        template_id: String,
        field: &'static str,
    },
}

impl std::fmt::Display for RelationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingTemplate {
                template_id,
                related_id,
            } => write!(f, "{template_id}: related template '{related_id}' not found"),
            Self::SelfReference { template_id } => {
                write!(f, "{template_id}: lists itself as related")
            }
            Self::RepeatedRelation {
                template_id,
                related_id,
            } => write!(f, "{template_id}: '{related_id}' listed more than once"),
            Self::ChapterOutOfRange {
                template_id,
                chapter,
            } => write!(f, "{template_id}: chapter {chapter} does not exist"),
            Self::EmptyField { template_id, field } => {
                write!(f, "{template_id}: empty {field}")
            }
        }
    }
}

/// Issues in template insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub issues: Vec<RelationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every template in `store`. Valid chapters are `1..=chapter_count`.
pub fn validate(store: &TemplateStore, chapter_count: u32) -> ValidationReport {
    let mut report = ValidationReport::default();

    for t in store.all_templates() {
        report.checked += 1;

        for (field, value) in [
            ("title", &t.title),
            ("description", &t.description),
            ("example", &t.example),
        ] {
            if value.trim().is_empty() {
                report.issues.push(RelationIssue::EmptyField {
                    template_id: t.id.clone(),
                    field,
                });
            }
        }

        let mut seen = HashSet::new();
        for rid in &t.related_templates {
            if !seen.insert(rid.as_str()) {
                report.issues.push(RelationIssue::RepeatedRelation {
                    template_id: t.id.clone(),
                    related_id: rid.clone(),
                });
                continue;
            }
            if rid == &t.id {
                report.issues.push(RelationIssue::SelfReference {
                    template_id: t.id.clone(),
                });
            } else if !store.contains(rid) {
                report.issues.push(RelationIssue::DanglingTemplate {
                    template_id: t.id.clone(),
                    related_id: rid.clone(),
                });
            }
        }

        for &chapter in &t.related_chapters {
            if chapter == 0 || chapter > chapter_count {
                report.issues.push(RelationIssue::ChapterOutOfRange {
                    template_id: t.id.clone(),
                    chapter,
                });
            }
        }
    }

    report
}
