//! Report generator implementation.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use mt_selection::SelectionEntry;
use tracing::info;

/// Text returned for an empty selection, and nothing else.
pub const EMPTY_REPORT: &str = "No recommendations selected.";

/// First line of every non-empty report.
pub const BANNER: &str = "COMPLETE UD MORPHOLOGICAL ANALYSIS";

/// `strftime` pattern of the `Generated:` footer line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECTION_RULE_WIDTH: usize = 50;
const ENTRY_RULE_WIDTH: usize = 40;
const GROUP_MARKER: &str = "🎯";
const BULLET: &str = "•";
const INDENT: &str = "   ";

/// Report generator.
///
/// Output depends only on the entries (contents and order) and the
/// timestamp passed in; the generator never reads the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        ReportGenerator
    }

    /// Render `entries` as report text stamped with `now`.
    pub fn generate<'a, I>(&self, entries: I, now: NaiveDateTime) -> String
    where
        I: IntoIterator<Item = &'a SelectionEntry>,
    {
        let groups = group_by_category(entries);
        if groups.is_empty() {
            return EMPTY_REPORT.to_string();
        }

        let total: usize = groups.values().map(Vec::len).sum();
        let mut out = String::new();

        out.push_str(BANNER);
        out.push('\n');
        out.push_str(&section_rule());
        out.push_str("\n\n");

        for (title, group) in &groups {
            self.write_group(&mut out, title, group);
        }

        out.push_str(&format!("Generated: {}\n", now.format(TIMESTAMP_FORMAT)));
        out.push_str(&format!("Total Selected: {} recommendations\n", total));

        info!(
            bytes = out.len(),
            groups = groups.len(),
            entries = total,
            "Report generated"
        );

        out
    }

    fn write_group(&self, out: &mut String, title: &str, group: &[&SelectionEntry]) {
        out.push_str(&format!("{} {}\n", GROUP_MARKER, title));
        out.push_str(&"-".repeat(title.chars().count()));
        out.push_str("\n\n");

        for (index, entry) in group.iter().enumerate() {
            self.write_entry(out, index + 1, entry);
        }

        out.push_str(&section_rule());
        out.push_str("\n\n");
    }

    fn write_entry(&self, out: &mut String, number: usize, entry: &SelectionEntry) {
        let snap = &entry.snapshot;

        out.push_str(&format!("{}. {}\n", number, snap.choice));
        out.push_str(&format!("{INDENT}UD Format: {}\n", snap.ud_format()));
        out.push_str(&format!("{INDENT}Context: {}\n", snap.context));
        out.push_str(&format!("{INDENT}When to use: {}\n\n", snap.condition));

        if !snap.decision_factors.is_empty() {
            out.push_str(&format!("{INDENT}Decision Factors:\n"));
            for factor in &snap.decision_factors {
                out.push_str(&format!("{INDENT}{BULLET} {}\n", factor));
            }
            out.push('\n');
        }

        out.push_str(&format!("{INDENT}Examples:\n"));
        for example in &snap.examples {
            out.push_str(&format!("{INDENT}{BULLET} {}\n", example));
        }

        out.push_str(&format!("\n{INDENT}Morphological Rule: {}\n", snap.rule));
        out.push('\n');
        out.push_str(&"-".repeat(ENTRY_RULE_WIDTH));
        out.push_str("\n\n");
    }
}

/// Render `entries` as report text stamped with `now`.
pub fn generate_report<'a, I>(entries: I, now: NaiveDateTime) -> String
where
    I: IntoIterator<Item = &'a SelectionEntry>,
{
    ReportGenerator::new().generate(entries, now)
}

/// Stable partition by category title: groups in first-seen order, entries
/// in input order within each group.
fn group_by_category<'a, I>(entries: I) -> IndexMap<&'a str, Vec<&'a SelectionEntry>>
where
    I: IntoIterator<Item = &'a SelectionEntry>,
{
    let mut groups: IndexMap<&'a str, Vec<&'a SelectionEntry>> = IndexMap::new();
    for entry in entries {
        groups
            .entry(entry.snapshot.category_title.as_str())
            .or_default()
            .push(entry);
    }
    groups
}

fn section_rule() -> String {
    "=".repeat(SECTION_RULE_WIDTH)
}
