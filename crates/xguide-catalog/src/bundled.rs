//! Compile-time embedded template data.
//!
//! One TOML file per category is baked into the binary via `include_str!()`,
//! so every build ships the full catalog with zero filesystem dependencies.

use crate::{CatalogError, CatalogResult, Template, TemplateFile};

/// Returns all bundled template files as `(category id, TOML content)` pairs,
/// in category registry order.
pub fn bundled_templates() -> Vec<(&'static str, &'static str)> {
    vec![
        ("engagement", include_str!("../bundled/engagement.toml")),
        ("viral", include_str!("../bundled/viral.toml")),
        ("value", include_str!("../bundled/value.toml")),
        ("storytelling", include_str!("../bundled/storytelling.toml")),
        ("question", include_str!("../bundled/question.toml")),
        ("thread", include_str!("../bundled/thread.toml")),
        ("list", include_str!("../bundled/list.toml")),
        ("opinion", include_str!("../bundled/opinion.toml")),
        ("humor", include_str!("../bundled/humor.toml")),
        ("personal", include_str!("../bundled/personal.toml")),
        ("news", include_str!("../bundled/news.toml")),
        ("tutorial", include_str!("../bundled/tutorial.toml")),
        ("promotion", include_str!("../bundled/promotion.toml")),
        ("community", include_str!("../bundled/community.toml")),
    ]
}

/// Parse one template data file.
pub fn parse_template_file(content: &str) -> CatalogResult<Vec<Template>> {
    let file: TemplateFile =
        toml::from_str(content).map_err(|e| CatalogError::TomlParse(e.to_string()))?;
    Ok(file.templates)
}
