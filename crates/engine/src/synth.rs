//! Free-form knowledge notes assembled from the filename's tokens.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::format::{bullet_list, checkbox_list, format_section};
use crate::knowledge::{ContentTables, TokenFragment};
use crate::tokens::tokenize;

/// Upper bound on key points and on action items per note.
pub const MAX_LIST_ITEMS: usize = 6;

const GENERIC_SUMMARY: &str = "背景・重要ポイント・行動指針を短くまとめる。";
const GENERIC_ACTION: &str = "週次レビューで関連タスクを1件以上進める。";
/// Category label used for notes that sit directly in the memory directory.
pub const UNCATEGORIZED: &str = "memory";

/// Everything a knowledge note says, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub category: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub action_items: Vec<String>,
}

impl NoteDraft {
    /// Merge category defaults with every fragment matched by `stem`'s tokens.
    pub fn compose(tables: &ContentTables, stem: &str, category: Option<&str>) -> Self {
        let title = tables.labels.titleize(stem);
        let tokens = tokenize(stem);
        let fragments = tables.knowledge.fragments_for(&tokens);
        let defaults = tables.categories.resolve(category);

        let summary = build_summary(&title, &fragments);

        let mut key_points = merge_capped(
            &defaults.key_points,
            fragments.iter().map(|fragment| &fragment.key_points),
        );
        if key_points.is_empty() {
            key_points.push(format!("{title}に関する基礎概念と注意点を整理する。"));
        }

        let mut action_items = merge_capped(
            &defaults.action_items,
            fragments.iter().map(|fragment| &fragment.action_items),
        );
        if action_items.is_empty() {
            action_items.push(GENERIC_ACTION.to_string());
        }

        Self {
            title,
            category: category.unwrap_or(UNCATEGORIZED).to_string(),
            summary,
            key_points,
            action_items,
        }
    }

    pub fn render(&self, today: NaiveDate) -> String {
        let mut note = format_section(&format!("# {}\n\n## 概要\n{}\n", self.title, self.summary));
        note.push_str(&format_section(&format!(
            "## 重要ポイント\n{}",
            bullet_list(&self.key_points)
        )));
        note.push_str(&format_section(&format!(
            "## 実践アクション\n{}",
            checkbox_list(&self.action_items)
        )));
        note.push_str(&format_section(&format!(
            "## メモ\n- 更新日: {}\n- 参照タグ: #{}",
            today.format("%Y-%m-%d"),
            self.category.to_lowercase()
        )));
        note
    }
}

/// Render the knowledge note for `stem`.
pub fn synthesize_note(
    tables: &ContentTables,
    stem: &str,
    category: Option<&str>,
    today: NaiveDate,
) -> String {
    NoteDraft::compose(tables, stem, category).render(today)
}

fn build_summary(title: &str, fragments: &[&TokenFragment]) -> String {
    let mut summary = format!("{title}に関する知見を整理する。");
    if fragments.is_empty() {
        summary.push(' ');
        summary.push_str(GENERIC_SUMMARY);
        return summary;
    }
    let sentences = fragments
        .iter()
        .map(|fragment| fragment.summary.trim())
        .filter(|sentence| !sentence.is_empty())
        .collect::<Vec<_>>();
    if !sentences.is_empty() {
        summary.push(' ');
        summary.push_str(&sentences.join(" "));
    }
    summary
}

/// `base` followed by every list in `extra`, first occurrences only, capped.
fn merge_capped<'a>(
    base: &'a [String],
    extra: impl Iterator<Item = &'a Vec<String>>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    base.iter()
        .chain(extra.flatten())
        .filter(|item| seen.insert(item.as_str()))
        .take(MAX_LIST_ITEMS)
        .cloned()
        .collect()
}
