//! Text rendering for browsing and reviewing the catalog.
//!
//! Browsing mode lists every category with its tag inventory; reviewing
//! mode walks one category scenario by scenario and shows each
//! recommendation with its identifier, so it can be selected.

use mt_catalog::{Catalog, Category, FEATURE_OVERVIEW};
use mt_common::{CategoryKey, Error, RecommendationId, Result};
use mt_selection::SelectionSet;

const RULE_WIDTH: usize = 40;

fn heading(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
    out.push_str(&"=".repeat(text.chars().count()));
    out.push_str("\n\n");
}

/// Every category with title, UPOS, XPOS tags and description, followed by
/// the per-UPOS feature overview.
pub fn render_overview(catalog: &Catalog) -> String {
    let mut out = String::new();
    heading(&mut out, "Available Analysis Types");

    for category in catalog.categories() {
        out.push_str(&format!("🎯 {}\n", category.title));
        out.push_str(&format!("   UPOS: {}\n", category.upos));
        out.push_str(&format!("   XPOS: {}\n", category.xpos_display()));
        out.push_str(&format!("   Description: {}\n", category.description));
        out.push_str(&format!(
            "   Key: {} ({} recommendations)\n\n",
            category.key,
            category.recommendation_count()
        ));
    }

    heading(&mut out, "Morphological Features");
    for (upos, features) in FEATURE_OVERVIEW {
        out.push_str(&format!("{}: {}\n", upos, features));
    }
    out
}

/// One category in full, scenario by scenario.
///
/// With a selection, each recommendation carries a `[x]`/`[ ]` marker.
pub fn render_category(category: &Category, selection: Option<&SelectionSet>) -> String {
    let mut out = String::new();
    out.push_str(&format!("🎯 {}\n", category.title));
    out.push_str(&format!("{}\n\n", category.description));
    out.push_str(&format!("UPOS: {}\n", category.upos));
    out.push_str(&format!("XPOS: {}\n", category.xpos_display()));

    for (scenario_idx, scenario) in category.scenarios.iter().enumerate() {
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push_str("\n\n");
        out.push_str(&format!("📍 {}\n", scenario.context));
        out.push_str(&format!("❓ {}\n\n", scenario.question));

        for (rec_idx, rec) in scenario.recommendations.iter().enumerate() {
            let id = RecommendationId::new(category.key, scenario_idx, rec_idx);
            let marker = match selection {
                Some(set) if set.contains(&id) => "[x] ",
                Some(_) => "[ ] ",
                None => "",
            };
            out.push_str(&format!("{}{}  {}\n", marker, id, rec.choice));
            out.push_str(&format!("    UD Format: {}\n", rec.ud_format(&category.upos)));
            out.push_str(&format!("    When to use: {}\n", rec.condition));
            if !rec.decision_factors.is_empty() {
                out.push_str("    Decision Factors:\n");
                for factor in &rec.decision_factors {
                    out.push_str(&format!("    • {}\n", factor));
                }
            }
            out.push_str("    Examples:\n");
            for example in &rec.examples {
                out.push_str(&format!("    • {}\n", example));
            }
            out.push_str(&format!("    Morphological Rule: {}\n\n", rec.rule));
        }
    }
    out
}

/// Category addressed by user-supplied text (`NOUN_analysis`, `noun`, ...).
pub fn find_category<'a>(catalog: &'a Catalog, raw: &str) -> Result<&'a Category> {
    let key: CategoryKey = raw.parse()?;
    catalog
        .category(key)
        .ok_or_else(|| Error::UnknownCategory(raw.to_string()))
}

/// Valid identifiers, for the whole catalog or one category.
pub fn list_ids(catalog: &Catalog, category: Option<&str>) -> Result<Vec<RecommendationId>> {
    match category {
        Some(raw) => Ok(find_category(catalog, raw)?.ids().collect()),
        None => Ok(catalog.ids().collect()),
    }
}
