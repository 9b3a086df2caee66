//! Template store. Holds every registered template and answers read-only queries.
//!
//! Records live in a single insertion-ordered `Vec`. The id index and the
//! category index both point into it, so every multi-record query returns
//! templates in insertion order.

use crate::config::{CatalogConfig, DuplicatePolicy};
use crate::{
    CatalogError, CatalogResult, Difficulty, Template, TemplateCategory, TemplateFile,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, warn};

/// The template store.
#[derive(Debug, Default)]
pub struct TemplateStore {
    /// All records, in insertion order.
    templates: Vec<Template>,
    /// id -> position in `templates`.
    by_id: HashMap<String, usize>,
    /// category -> ascending positions in `templates`.
    by_category: HashMap<TemplateCategory, Vec<usize>>,
    policy: DuplicatePolicy,
}

/// Optional criteria, AND-combined. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub category: Option<TemplateCategory>,
    pub difficulty: Option<Difficulty>,
    pub chapter: Option<u32>,
    /// Free-text query with `TemplateStore::search` semantics.
    pub query: Option<String>,
}

/// Counts over the loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    /// One entry per category, in registry order (zero counts included).
    pub by_category: Vec<(TemplateCategory, usize)>,
    pub by_difficulty: Vec<(Difficulty, usize)>,
}

impl TemplateStore {
    /// Create an empty store with the given duplicate-id policy.
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Build a store as described by `config`: bundled templates, then each
    /// template directory, then the optional strict validation pass.
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let mut store = Self::new(config.duplicate_policy);
        if config.include_bundled {
            store.load_bundled()?;
        }
        for dir in &config.template_dirs {
            store.load_dir(dir)?;
        }

        let report = crate::validate::validate(&store, config.chapter_count);
        if !report.is_clean() {
            if config.strict_relations {
                return Err(CatalogError::InvalidCatalog(report.issues.len()));
            }
            warn!(
                issues = report.issues.len(),
                "Template catalog has integrity issues"
            );
        }
        info!(templates = store.len(), "Template catalog ready");
        Ok(store)
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a batch of templates. Returns how many were inserted or replaced.
    ///
    /// Under `DuplicatePolicy::Replace` an existing id keeps its position and
    /// its record is swapped; this never fails. Under `DuplicatePolicy::Reject`
    /// the batch is checked first and nothing is registered if any id is
    /// already present or repeated within the batch.
    pub fn register_templates(
        &mut self,
        templates: impl IntoIterator<Item = Template>,
    ) -> CatalogResult<usize> {
        let batch: Vec<Template> = templates.into_iter().collect();

        if self.policy == DuplicatePolicy::Reject {
            let mut seen = HashSet::new();
            for t in &batch {
                if self.by_id.contains_key(&t.id) || !seen.insert(t.id.as_str()) {
                    return Err(CatalogError::DuplicateId(t.id.clone()));
                }
            }
        }

        let count = batch.len();
        for template in batch {
            match self.by_id.get(&template.id).copied() {
                Some(idx) => self.replace_at(idx, template),
                None => self.push(template),
            }
        }
        debug!(count, total = self.templates.len(), "Registered templates");
        Ok(count)
    }

    fn push(&mut self, template: Template) {
        let idx = self.templates.len();
        self.by_id.insert(template.id.clone(), idx);
        self.by_category
            .entry(template.category)
            .or_default()
            .push(idx);
        self.templates.push(template);
    }

    fn replace_at(&mut self, idx: usize, template: Template) {
        let old_category = self.templates[idx].category;
        if old_category != template.category {
            if let Some(group) = self.by_category.get_mut(&old_category) {
                group.retain(|&i| i != idx);
            }
            let group = self.by_category.entry(template.category).or_default();
            if let Err(pos) = group.binary_search(&idx) {
                group.insert(pos, idx);
            }
        }
        debug!(id = %template.id, "Replaced template with duplicate id");
        self.templates[idx] = template;
    }

    /// Parse and register the compile-time bundled templates.
    pub fn load_bundled(&mut self) -> CatalogResult<usize> {
        let mut count = 0;
        for (category, content) in crate::bundled::bundled_templates() {
            let templates = crate::bundled::parse_template_file(content).map_err(|e| {
                warn!("Failed to parse bundled templates '{}': {}", category, e);
                e
            })?;
            count += self.register_templates(templates)?;
        }
        debug!("Loaded {count} bundled template(s)");
        Ok(count)
    }

    /// Register every `*.toml` template file in `dir`, in file-name order.
    ///
    /// A missing directory loads nothing.
    pub fn load_dir(&mut self, dir: &Path) -> CatalogResult<usize> {
        if !dir.exists() {
            debug!(path = %dir.display(), "Template directory not found, skipping");
            return Ok(0);
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut count = 0;
        for path in paths {
            let content = std::fs::read_to_string(&path)?;
            let file: TemplateFile = toml::from_str(&content).map_err(|e| {
                CatalogError::TomlParse(format!("{}: {e}", path.display()))
            })?;
            count += self.register_templates(file.templates)?;
        }
        info!(path = %dir.display(), "Loaded {count} template(s) from directory");
        Ok(count)
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Every template, in insertion order.
    pub fn all_templates(&self) -> Vec<&Template> {
        self.templates.iter().collect()
    }

    /// Templates grouped under `category`, in insertion order.
    pub fn templates_by_category(&self, category: TemplateCategory) -> Vec<&Template> {
        self.by_category
            .get(&category)
            .map(|group| group.iter().map(|&i| &self.templates[i]).collect())
            .unwrap_or_default()
    }

    /// String-keyed variant of [`templates_by_category`](Self::templates_by_category).
    /// An unknown category id yields an empty list.
    pub fn templates_by_category_id(&self, category_id: &str) -> Vec<&Template> {
        match category_id.parse::<TemplateCategory>() {
            Ok(category) => self.templates_by_category(category),
            Err(_) => Vec::new(),
        }
    }

    /// Exact-match lookup by id.
    pub fn get_template(&self, id: &str) -> Option<&Template> {
        self.by_id.get(id).map(|&i| &self.templates[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Resolve a template's `related_templates` in listed order.
    ///
    /// Unknown ids are dropped. No dedup, no self-exclusion, no symmetry.
    pub fn related_templates(&self, id: &str) -> Vec<&Template> {
        let Some(template) = self.get_template(id) else {
            return Vec::new();
        };
        template
            .related_templates
            .iter()
            .filter_map(|rid| self.get_template(rid))
            .collect()
    }

    pub fn templates_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.difficulty == difficulty)
            .collect()
    }

    /// Templates whose `related_chapters` contains `chapter`.
    pub fn templates_by_chapter(&self, chapter: u32) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.related_chapters.contains(&chapter))
            .collect()
    }

    /// Case-insensitive substring search over title, description and effects.
    ///
    /// `example`, `explanation`, `points` and `cautions` are not searched.
    pub fn search(&self, query: &str) -> Vec<&Template> {
        let q = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.matches_lowercase(&q))
            .collect()
    }

    /// Apply every criterion present in `filter`.
    pub fn filter(&self, filter: &TemplateFilter) -> Vec<&Template> {
        let q = filter.query.as_deref().map(str::to_lowercase);
        self.templates
            .iter()
            .filter(|t| filter.category.map_or(true, |c| t.category == c))
            .filter(|t| filter.difficulty.map_or(true, |d| t.difficulty == d))
            .filter(|t| {
                filter
                    .chapter
                    .map_or(true, |n| t.related_chapters.contains(&n))
            })
            .filter(|t| q.as_deref().map_or(true, |q| t.matches_lowercase(q)))
            .collect()
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            total: self.templates.len(),
            by_category: TemplateCategory::ALL
                .into_iter()
                .map(|c| (c, self.by_category.get(&c).map_or(0, Vec::len)))
                .collect(),
            by_difficulty: Difficulty::ALL
                .into_iter()
                .map(|d| (d, self.templates_by_difficulty(d).len()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngagementLevel, ExpectedEngagement};

    fn template(id: &str, category: TemplateCategory, difficulty: Difficulty) -> Template {
        Template {
            id: id.to_string(),
            category,
            title: format!("Title {id}"),
            description: format!("Description {id}"),
            example: String::new(),
            explanation: String::new(),
            effects: vec![],
            points: vec![],
            cautions: vec![],
            related_chapters: vec![],
            related_templates: vec![],
            difficulty,
            expected_engagement: ExpectedEngagement {
                likes: EngagementLevel::Medium,
                replies: EngagementLevel::Low,
                reposts: EngagementLevel::Low,
                bookmarks: EngagementLevel::High,
            },
        }
    }

    /// The two-template scenario: `a` relates to `b` and a missing `x`.
    fn scenario_store() -> TemplateStore {
        let mut a = template("a", TemplateCategory::Value, Difficulty::Beginner);
        a.title = "Alpha".to_string();
        a.related_templates = vec!["b".to_string(), "x".to_string()];
        let mut b = template("b", TemplateCategory::Value, Difficulty::Advanced);
        b.title = "Beta".to_string();

        let mut store = TemplateStore::default();
        store.register_templates(vec![a, b]).unwrap();
        store
    }

    fn ids(templates: &[&Template]) -> Vec<String> {
        templates.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn scenario_queries() {
        let store = scenario_store();
        assert_eq!(ids(&store.templates_by_category_id("value")), ["a", "b"]);
        assert_eq!(ids(&store.related_templates("a")), ["b"]);
        assert_eq!(
            ids(&store.templates_by_difficulty(Difficulty::Beginner)),
            ["a"]
        );
        assert_eq!(ids(&store.search("alpha")), ["a"]);
        assert!(store.get_template("c").is_none());
    }

    #[test]
    fn empty_results_are_not_errors() {
        let store = scenario_store();
        assert!(store.templates_by_category_id("nonexistent-category").is_empty());
        assert!(store.templates_by_category(TemplateCategory::Humor).is_empty());
        assert!(store.get_template("nonexistent-id").is_none());
        assert!(store.search("zzzznomatch").is_empty());
        assert!(store.related_templates("nonexistent-id").is_empty());
        assert!(store.templates_by_chapter(99).is_empty());
    }

    #[test]
    fn all_templates_in_insertion_order() {
        let mut store = TemplateStore::default();
        store
            .register_templates(vec![
                template("z", TemplateCategory::Humor, Difficulty::Beginner),
                template("m", TemplateCategory::Value, Difficulty::Beginner),
            ])
            .unwrap();
        store
            .register_templates(vec![template(
                "a",
                TemplateCategory::Humor,
                Difficulty::Advanced,
            )])
            .unwrap();
        assert_eq!(ids(&store.all_templates()), ["z", "m", "a"]);
        assert_eq!(
            ids(&store.templates_by_category(TemplateCategory::Humor)),
            ["z", "a"]
        );
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn duplicate_replace_is_idempotent_per_id() {
        let mut store = TemplateStore::new(DuplicatePolicy::Replace);
        store
            .register_templates(vec![
                template("a", TemplateCategory::Value, Difficulty::Beginner),
                template("b", TemplateCategory::Value, Difficulty::Beginner),
            ])
            .unwrap();

        let mut newer = template("a", TemplateCategory::Value, Difficulty::Advanced);
        newer.title = "Replaced".to_string();
        assert_eq!(store.register_templates(vec![newer]).unwrap(), 1);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get_template("a").unwrap().title, "Replaced");
        // Position and category membership unchanged, no stale duplicate.
        assert_eq!(ids(&store.all_templates()), ["a", "b"]);
        let value = store.templates_by_category(TemplateCategory::Value);
        assert_eq!(ids(&value), ["a", "b"]);
        assert_eq!(value[0].title, "Replaced");
    }

    #[test]
    fn duplicate_replace_moves_category_group() {
        let mut store = TemplateStore::default();
        store
            .register_templates(vec![
                template("a", TemplateCategory::Value, Difficulty::Beginner),
                template("b", TemplateCategory::Humor, Difficulty::Beginner),
                template("c", TemplateCategory::Humor, Difficulty::Beginner),
            ])
            .unwrap();
        store
            .register_templates(vec![template(
                "a",
                TemplateCategory::Humor,
                Difficulty::Beginner,
            )])
            .unwrap();

        assert!(store.templates_by_category(TemplateCategory::Value).is_empty());
        // Category groups follow global insertion order.
        assert_eq!(
            ids(&store.templates_by_category(TemplateCategory::Humor)),
            ["a", "b", "c"]
        );
    }

    #[test]
    fn duplicate_reject_is_atomic() {
        let mut store = TemplateStore::new(DuplicatePolicy::Reject);
        store
            .register_templates(vec![template(
                "a",
                TemplateCategory::Value,
                Difficulty::Beginner,
            )])
            .unwrap();

        let err = store
            .register_templates(vec![
                template("b", TemplateCategory::Value, Difficulty::Beginner),
                template("a", TemplateCategory::Value, Difficulty::Advanced),
            ])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
        assert!(!store.contains("b"));
        assert_eq!(store.len(), 1);

        // Repeats inside one batch are rejected too.
        let err = store
            .register_templates(vec![
                template("c", TemplateCategory::Value, Difficulty::Beginner),
                template("c", TemplateCategory::Value, Difficulty::Beginner),
            ])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn related_keeps_order_self_and_repeats() {
        let mut a = template("a", TemplateCategory::Value, Difficulty::Beginner);
        a.related_templates = vec![
            "c".to_string(),
            "a".to_string(),
            "missing".to_string(),
            "b".to_string(),
            "c".to_string(),
        ];
        let b = template("b", TemplateCategory::Value, Difficulty::Beginner);
        let c = template("c", TemplateCategory::Value, Difficulty::Beginner);

        let mut store = TemplateStore::default();
        store.register_templates(vec![a, b, c]).unwrap();
        assert_eq!(ids(&store.related_templates("a")), ["c", "a", "b", "c"]);
        // Relations are not symmetric.
        assert!(store.related_templates("b").is_empty());
    }

    #[test]
    fn chapter_filter_is_existential() {
        let mut a = template("a", TemplateCategory::Value, Difficulty::Beginner);
        a.related_chapters = vec![3, 3, 5];
        let mut b = template("b", TemplateCategory::Thread, Difficulty::Beginner);
        b.related_chapters = vec![5];
        let c = template("c", TemplateCategory::Thread, Difficulty::Beginner);

        let mut store = TemplateStore::default();
        store.register_templates(vec![a, b, c]).unwrap();
        assert_eq!(ids(&store.templates_by_chapter(3)), ["a"]);
        assert_eq!(ids(&store.templates_by_chapter(5)), ["a", "b"]);
    }

    #[test]
    fn search_fields_and_case() {
        let mut a = template("a", TemplateCategory::Value, Difficulty::Beginner);
        a.title = "Foo".to_string();
        let mut b = template("b", TemplateCategory::Value, Difficulty::Beginner);
        b.effects = vec!["Bookmark Magnet".to_string()];
        let mut c = template("c", TemplateCategory::Value, Difficulty::Beginner);
        c.example = "secret-example".to_string();
        c.explanation = "secret-explanation".to_string();
        c.points = vec!["secret-point".to_string()];
        c.cautions = vec!["secret-caution".to_string()];

        let mut store = TemplateStore::default();
        store.register_templates(vec![a, b, c]).unwrap();

        assert_eq!(ids(&store.search("foo")), ["a"]);
        assert_eq!(ids(&store.search("FOO")), ["a"]);
        assert_eq!(ids(&store.search("bookmark mag")), ["b"]);
        assert_eq!(ids(&store.search("MAGNET")), ["b"]);
        assert!(store.search("secret").is_empty());
        // Empty query matches everything.
        assert_eq!(store.search("").len(), 3);
    }

    #[test]
    fn filter_combines_criteria() {
        let mut a = template("a", TemplateCategory::Value, Difficulty::Beginner);
        a.related_chapters = vec![2];
        let mut b = template("b", TemplateCategory::Value, Difficulty::Advanced);
        b.related_chapters = vec![2];
        let c = template("c", TemplateCategory::Humor, Difficulty::Beginner);

        let mut store = TemplateStore::default();
        store.register_templates(vec![a, b, c]).unwrap();

        assert_eq!(store.filter(&TemplateFilter::default()).len(), 3);
        let f = TemplateFilter {
            category: Some(TemplateCategory::Value),
            chapter: Some(2),
            ..Default::default()
        };
        assert_eq!(ids(&store.filter(&f)), ["a", "b"]);
        let f = TemplateFilter {
            difficulty: Some(Difficulty::Beginner),
            query: Some("DESCRIPTION C".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&store.filter(&f)), ["c"]);
    }

    #[test]
    fn summary_counts() {
        let store = scenario_store();
        let summary = store.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.by_category.len(), 14);
        assert!(summary
            .by_category
            .contains(&(TemplateCategory::Value, 2)));
        assert!(summary
            .by_category
            .contains(&(TemplateCategory::Humor, 0)));
        assert_eq!(
            summary.by_difficulty,
            vec![
                (Difficulty::Beginner, 1),
                (Difficulty::Intermediate, 0),
                (Difficulty::Advanced, 1),
            ]
        );
    }

    #[test]
    fn load_dir_reads_toml_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let body = |id: &str| {
            format!(
                r#"
[[templates]]
id = "{id}"
category = "news"
title = "{id}"
description = "d"
example = "e"
difficulty = "intermediate"

[templates.expected_engagement]
likes = "low"
replies = "low"
reposts = "high"
bookmarks = "medium"
"#
            )
        };
        std::fs::write(dir.path().join("b.toml"), body("second")).unwrap();
        std::fs::write(dir.path().join("a.toml"), body("first")).unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let mut store = TemplateStore::default();
        assert_eq!(store.load_dir(dir.path()).unwrap(), 2);
        assert_eq!(ids(&store.all_templates()), ["first", "second"]);

        assert_eq!(store.load_dir(&dir.path().join("missing")).unwrap(), 0);
    }

    #[test]
    fn load_dir_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.toml"), "[[templates]]\nid = 1").unwrap();
        let mut store = TemplateStore::default();
        assert!(matches!(
            store.load_dir(dir.path()),
            Err(CatalogError::TomlParse(_))
        ));
    }

    #[test]
    fn store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateStore>();
    }
}
