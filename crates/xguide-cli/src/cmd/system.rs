//! Catalog-wide commands: validate, stats, config, completion.

use super::template::print_json;
use crate::cli::Cli;
use crate::table::{Align, Table};
use crate::ui;
use clap::CommandFactory;
use xguide_catalog::{validate, CatalogConfig, TemplateStore};

/// Exit code 1 when any issue is found.
pub fn cmd_validate(store: &TemplateStore, config: &CatalogConfig, json: bool) {
    let report = validate(store, config.chapter_count);

    if json {
        print_json(&report);
    } else if report.is_clean() {
        ui::check_ok(&format!("{} template(s) checked, no issues", report.checked));
    } else {
        for issue in &report.issues {
            ui::check_fail(&issue.to_string());
        }
        ui::blank();
        println!(
            "  {} issue(s) in {} template(s)",
            report.issues.len(),
            report.checked
        );
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
}

pub fn cmd_stats(store: &TemplateStore, json: bool) {
    let summary = store.summary();
    if json {
        print_json(&summary);
        return;
    }

    ui::kv("Templates", &summary.total.to_string());
    ui::blank();

    let mut by_category = Table::new(&["CATEGORY", "NAME", "COUNT"]).align(2, Align::Right);
    for (category, count) in &summary.by_category {
        let count = count.to_string();
        by_category.add_row(&[category.as_str(), category.info().name, count.as_str()]);
    }
    by_category.print();

    let mut by_difficulty = Table::new(&["DIFFICULTY", "LABEL", "COUNT"]).align(2, Align::Right);
    for (difficulty, count) in &summary.by_difficulty {
        let name = difficulty.to_string();
        let count = count.to_string();
        by_difficulty.add_row(&[name.as_str(), difficulty.label(), count.as_str()]);
    }
    by_difficulty.print();
}

pub fn cmd_config(config: &CatalogConfig) {
    match toml::to_string_pretty(config) {
        Ok(s) => print!("{s}"),
        Err(e) => {
            ui::error(&format!("Failed to render config: {e}"));
            std::process::exit(1);
        }
    }
}

pub fn cmd_completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "xguide", &mut std::io::stdout());
}
