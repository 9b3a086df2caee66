//! Template browsing: categories, list, show, related, search.

use crate::table::{truncate, Align, Table};
use crate::ui;
use serde::Serialize;
use xguide_catalog::{
    all_categories, CategoryInfo, Difficulty, Template, TemplateCategory, TemplateFilter,
    TemplateStore,
};

/// Widest title shown in list tables before truncation.
const TITLE_CELLS: usize = 28;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            ui::error(&format!("Failed to serialize output: {e}"));
            std::process::exit(1);
        }
    }
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    #[serde(flatten)]
    info: &'a CategoryInfo,
    templates: usize,
}

pub fn cmd_categories(store: &TemplateStore, json: bool) {
    let rows: Vec<CategoryRow> = all_categories()
        .iter()
        .map(|info| CategoryRow {
            info,
            templates: store.templates_by_category(info.id).len(),
        })
        .collect();

    if json {
        print_json(&rows);
        return;
    }

    let mut table = Table::new(&["", "ID", "NAME", "TEMPLATES", "TARGETS"]).align(3, Align::Right);
    for row in &rows {
        let count = row.templates.to_string();
        let targets = row.info.target_engagement.join(", ");
        table.add_row(&[
            row.info.icon,
            row.info.id.as_str(),
            row.info.name,
            count.as_str(),
            targets.as_str(),
        ]);
    }
    table.print();
}

/// Build a filter from raw CLI arguments.
///
/// `Ok(None)` means the category id is unknown, which can never match.
fn build_filter(
    category: Option<&str>,
    difficulty: Option<&str>,
    chapter: Option<u32>,
    query: Option<String>,
) -> Result<Option<TemplateFilter>, String> {
    let difficulty = difficulty
        .map(|d| d.parse::<Difficulty>())
        .transpose()
        .map_err(|e| format!("{e} (expected beginner, intermediate or advanced)"))?;
    let category = match category {
        Some(id) => match id.parse::<TemplateCategory>() {
            Ok(c) => Some(c),
            Err(_) => return Ok(None),
        },
        None => None,
    };
    Ok(Some(TemplateFilter {
        category,
        difficulty,
        chapter,
        query,
    }))
}

pub fn cmd_list(
    store: &TemplateStore,
    category: Option<&str>,
    difficulty: Option<&str>,
    chapter: Option<u32>,
    query: Option<String>,
    json: bool,
) {
    let filter = match build_filter(category, difficulty, chapter, query) {
        Ok(f) => f,
        Err(msg) => {
            ui::error(&msg);
            std::process::exit(1);
        }
    };
    let templates = match &filter {
        Some(f) => store.filter(f),
        None => Vec::new(),
    };
    print_templates(&templates, json);
    if filter.is_none() && !json {
        ui::hint("run `xguide categories` to see valid category ids");
    }
}

pub fn cmd_search(store: &TemplateStore, query: &str, json: bool) {
    let templates = store.search(query);
    if !json && templates.is_empty() {
        println!("No templates match \"{query}\".");
        return;
    }
    print_templates(&templates, json);
}

pub fn cmd_related(store: &TemplateStore, id: &str, json: bool) {
    if !store.contains(id) {
        ui::error(&format!("Template not found: {id}"));
        std::process::exit(1);
    }
    print_templates(&store.related_templates(id), json);
}

#[derive(Serialize)]
struct TemplateDetail<'a> {
    #[serde(flatten)]
    template: &'a Template,
    related: Vec<&'a Template>,
}

pub fn cmd_show(store: &TemplateStore, id: &str, json: bool) {
    let Some(t) = store.get_template(id) else {
        ui::error(&format!("Template not found: {id}"));
        std::process::exit(1);
    };
    let related = store.related_templates(id);

    if json {
        print_json(&TemplateDetail {
            template: t,
            related,
        });
        return;
    }

    let info = t.category.info();
    ui::section(&format!("{} {}", info.icon, t.title));
    ui::kv("ID", &t.id);
    ui::kv("Category", &format!("{} ({})", info.name, t.category));
    ui::kv(
        "Difficulty",
        &format!("{} ({})", t.difficulty.label(), t.difficulty),
    );
    ui::kv("About", &t.description);
    ui::blank();

    ui::section("Example");
    ui::block(&t.example);
    ui::blank();

    if !t.explanation.is_empty() {
        ui::section("Why it works");
        ui::block(&t.explanation);
        ui::blank();
    }

    ui::bullets("Effects", &t.effects);
    ui::bullets("Points", &t.points);
    ui::bullets("Cautions", &t.cautions);
    ui::blank();

    let e = &t.expected_engagement;
    ui::section("Expected engagement");
    ui::kv("Likes", &ui::level(e.likes));
    ui::kv("Replies", &ui::level(e.replies));
    ui::kv("Reposts", &ui::level(e.reposts));
    ui::kv("Bookmarks", &ui::level(e.bookmarks));

    if !t.related_chapters.is_empty() {
        let chapters: Vec<String> = t.related_chapters.iter().map(u32::to_string).collect();
        ui::kv("Chapters", &chapters.join(", "));
    }
    if !related.is_empty() {
        ui::blank();
        ui::section("Related templates");
        for r in related {
            println!("    {:<16} {}", r.id, r.title);
        }
    }
}

fn print_templates(templates: &[&Template], json: bool) {
    if json {
        print_json(templates);
        return;
    }
    if templates.is_empty() {
        println!("No templates found.");
        return;
    }

    let mut table = Table::new(&["ID", "TITLE", "CATEGORY", "LEVEL", "ENGAGEMENT"]);
    for t in templates {
        let title = truncate(&t.title, TITLE_CELLS);
        let engagement = ui::engagement_summary(&t.expected_engagement);
        table.add_row(&[
            t.id.as_str(),
            title.as_str(),
            t.category.as_str(),
            t.difficulty.label(),
            engagement.as_str(),
        ]);
    }
    table.print();
    println!("{} template(s)", templates.len());
}
