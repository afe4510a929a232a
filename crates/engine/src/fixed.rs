//! Fixed Markdown blobs for files whose content does not depend on the path
//! beyond selecting which blob to use.
//!
//! Every expected file must have an entry; a miss is reported as
//! [`SeedError::UnknownTemplate`] so unanticipated files surface instead of
//! being filled with something generic.

use std::path::Path;

use crate::error::SeedError;
use crate::format::format_section;

macro_rules! blob {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/", $path))
    };
}

/// How an entry recognises its file.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Exact path relative to the table's directory.
    Path(&'static str),
    /// Exact file stem.
    Stem(&'static str),
    /// Any of these fragments occurs in the stem.
    StemContains(&'static [&'static str]),
    /// Any of these fragments occurs in the stem, ignoring case.
    StemContainsIgnoreCase(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, rel: &str, stem: &str) -> bool {
        match self {
            Self::Path(path) => *path == rel,
            Self::Stem(expected) => *expected == stem,
            Self::StemContains(needles) => needles.iter().any(|needle| stem.contains(needle)),
            Self::StemContainsIgnoreCase(needles) => {
                let stem = stem.to_lowercase();
                needles
                    .iter()
                    .any(|needle| stem.contains(&needle.to_lowercase()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub matcher: Matcher,
    pub body: &'static str,
}

impl Entry {
    const fn path(path: &'static str, body: &'static str) -> Self {
        Self {
            matcher: Matcher::Path(path),
            body,
        }
    }

    const fn stem(stem: &'static str, body: &'static str) -> Self {
        Self {
            matcher: Matcher::Stem(stem),
            body,
        }
    }

    const fn stem_contains(needles: &'static [&'static str], body: &'static str) -> Self {
        Self {
            matcher: Matcher::StemContains(needles),
            body,
        }
    }

    const fn stem_contains_ignore_case(needles: &'static [&'static str], body: &'static str) -> Self {
        Self {
            matcher: Matcher::StemContainsIgnoreCase(needles),
            body,
        }
    }
}

/// An ordered list of entries; the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct FixedTable {
    pub name: &'static str,
    entries: &'static [Entry],
}

impl FixedTable {
    pub fn entries(&self) -> &'static [Entry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw blob for `rel`, a path relative to the table's directory.
    pub fn lookup(&self, rel: &str) -> Option<&'static str> {
        let stem = Path::new(rel)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(rel);
        self.entries
            .iter()
            .find(|entry| entry.matcher.matches(rel, stem))
            .map(|entry| entry.body)
    }

    /// Formatted blob for `rel`, or `UnknownTemplate` naming it.
    pub fn render(&self, rel: &str) -> Result<String, SeedError> {
        self.lookup(rel)
            .map(format_section)
            .ok_or_else(|| SeedError::UnknownTemplate {
                table: self.name,
                key: rel.to_string(),
            })
    }
}

pub const DASHBOARDS: FixedTable = FixedTable {
    name: "dashboards",
    entries: DASHBOARD_ENTRIES,
};
pub const INPUT_NOTES: FixedTable = FixedTable {
    name: "input",
    entries: INPUT_ENTRIES,
};
pub const TEMPLATES: FixedTable = FixedTable {
    name: "templates",
    entries: TEMPLATE_ENTRIES,
};
pub const ARCHIVE: FixedTable = FixedTable {
    name: "archive",
    entries: ARCHIVE_ENTRIES,
};
pub const PERSONAL_AREA: FixedTable = FixedTable {
    name: "personal-area",
    entries: PERSONAL_AREA_ENTRIES,
};
pub const CONTENT_AREA: FixedTable = FixedTable {
    name: "content-area",
    entries: CONTENT_AREA_ENTRIES,
};
pub const BUSINESS_AREA: FixedTable = FixedTable {
    name: "business-area",
    entries: BUSINESS_AREA_ENTRIES,
};
pub const PROJECTS: FixedTable = FixedTable {
    name: "projects",
    entries: PROJECT_ENTRIES,
};

pub const ALL: [FixedTable; 8] = [
    DASHBOARDS,
    INPUT_NOTES,
    TEMPLATES,
    ARCHIVE,
    PERSONAL_AREA,
    CONTENT_AREA,
    BUSINESS_AREA,
    PROJECTS,
];

// First match wins: a stem naming both "active" and "projects" gets the
// projects dashboard.
const DASHBOARD_ENTRIES: &[Entry] = &[
    Entry::stem_contains_ignore_case(&["home", "🏠"], blob!("dashboards/home.md")),
    Entry::stem_contains_ignore_case(&["weekly", "📊"], blob!("dashboards/weekly.md")),
    Entry::stem_contains_ignore_case(&["analytics", "📈"], blob!("dashboards/analytics.md")),
    Entry::stem_contains_ignore_case(&["projects", "🎯"], blob!("dashboards/projects.md")),
    Entry::stem_contains_ignore_case(&["active", "🔥"], blob!("dashboards/active.md")),
];

const INPUT_ENTRIES: &[Entry] = &[
    Entry::stem("this-week-focus", blob!("input/this-week-focus.md")),
    Entry::stem("this-month-goals", blob!("input/this-month-goals.md")),
    Entry::stem("hot-topic-claude-sonnet4", blob!("input/hot-topic-claude-sonnet4.md")),
    Entry::stem("hot-topic-cursor-update", blob!("input/hot-topic-cursor-update.md")),
    Entry::stem(
        "reference-ai-tools-comparison",
        blob!("input/reference-ai-tools-comparison.md"),
    ),
];

const ARCHIVE_ENTRIES: &[Entry] = &[
    Entry::path("_archive-workflow.md", blob!("archive/archive-workflow.md")),
    Entry::stem_contains(&["meeting-notes"], blob!("archive/meeting-notes.md")),
    Entry::stem_contains(&["youtube-idea"], blob!("archive/youtube-idea.md")),
    Entry::stem("memo-002", blob!("archive/memo-002.md")),
    Entry::stem_contains(&["voice-note"], blob!("archive/voice-note.md")),
    Entry::stem_contains(&["ai-tool-idea"], blob!("archive/ai-tool-idea.md")),
];

const TEMPLATE_ENTRIES: &[Entry] = &[
    Entry::path("Content/SNS投稿テンプレート.md", blob!("templates/Content/SNS投稿テンプレート.md")),
    Entry::path("Content/Xスレッドテンプレート.md", blob!("templates/Content/Xスレッドテンプレート.md")),
    Entry::path("Content/YouTubeスクリプトテンプレート.md", blob!("templates/Content/YouTubeスクリプトテンプレート.md")),
    Entry::path("Content/ブログアウトラインテンプレート.md", blob!("templates/Content/ブログアウトラインテンプレート.md")),
    Entry::path("Content/ブログ記事テンプレート.md", blob!("templates/Content/ブログ記事テンプレート.md")),
    Entry::path("Daily/デイリーTODOテンプレート.md", blob!("templates/Daily/デイリーTODOテンプレート.md")),
    Entry::path("Daily/月次レビューテンプレート.md", blob!("templates/Daily/月次レビューテンプレート.md")),
    Entry::path("Daily/週次レビューテンプレート.md", blob!("templates/Daily/週次レビューテンプレート.md")),
    Entry::path("Knowledge/MOCテンプレート.md", blob!("templates/Knowledge/MOCテンプレート.md")),
    Entry::path("Knowledge/ツールレビューテンプレート.md", blob!("templates/Knowledge/ツールレビューテンプレート.md")),
    Entry::path("Knowledge/テクニックガイドテンプレート.md", blob!("templates/Knowledge/テクニックガイドテンプレート.md")),
    Entry::path("Knowledge/学習ノートテンプレート.md", blob!("templates/Knowledge/学習ノートテンプレート.md")),
    Entry::path("Knowledge/概念ノートテンプレート.md", blob!("templates/Knowledge/概念ノートテンプレート.md")),
    Entry::path("Meeting/1on1ノートテンプレート.md", blob!("templates/Meeting/1on1ノートテンプレート.md")),
    Entry::path("Meeting/クライアント会議テンプレート.md", blob!("templates/Meeting/クライアント会議テンプレート.md")),
    Entry::path("Meeting/ブレインストーミングセッションテンプレート.md", blob!("templates/Meeting/ブレインストーミングセッションテンプレート.md")),
    Entry::path("Meeting/会議ノートテンプレート.md", blob!("templates/Meeting/会議ノートテンプレート.md")),
    Entry::path("Projects/クライアント提案テンプレート.md", blob!("templates/Projects/クライアント提案テンプレート.md")),
    Entry::path("Projects/コースカリキュラムテンプレート.md", blob!("templates/Projects/コースカリキュラムテンプレート.md")),
    Entry::path("Projects/セミナー企画テンプレート.md", blob!("templates/Projects/セミナー企画テンプレート.md")),
    Entry::path("Projects/プロジェクト振り返りテンプレート.md", blob!("templates/Projects/プロジェクト振り返りテンプレート.md")),
    Entry::path("Projects/プロジェクト計画テンプレート.md", blob!("templates/Projects/プロジェクト計画テンプレート.md")),
];

const PERSONAL_AREA_ENTRIES: &[Entry] = &[
    Entry::path("Family/@TODO/family-trip-planning.md", blob!("areas/personal/Family/@TODO/family-trip-planning.md")),
    Entry::path("Family/family-goals.md", blob!("areas/personal/Family/family-goals.md")),
    Entry::path("Family/kids-milestones.md", blob!("areas/personal/Family/kids-milestones.md")),
    Entry::path("Health/energy-tracking.md", blob!("areas/personal/Health/energy-tracking.md")),
    Entry::path("Health/exercise-log.md", blob!("areas/personal/Health/exercise-log.md")),
    Entry::path("Self-Development/@TODO/learn-system-design.md", blob!("areas/personal/Self-Development/@TODO/learn-system-design.md")),
    Entry::path("Self-Development/learning-goals-2025.md", blob!("areas/personal/Self-Development/learning-goals-2025.md")),
    Entry::path("Self-Development/reading-list.md", blob!("areas/personal/Self-Development/reading-list.md")),
];

const CONTENT_AREA_ENTRIES: &[Entry] = &[
    Entry::path("Blog-Writing/00-content-strategy.md", blob!("areas/content-creation/Blog-Writing/00-content-strategy.md")),
    Entry::path("Blog-Writing/@Completed/Qiita/2025/cursor-tips-2025.md", blob!("areas/content-creation/Blog-Writing/@Completed/Qiita/2025/cursor-tips-2025.md")),
    Entry::path("Blog-Writing/@Doing/draft-ai-agent-guide.md", blob!("areas/content-creation/Blog-Writing/@Doing/draft-ai-agent-guide.md")),
    Entry::path("Blog-Writing/@TODO/idea-cursor-vs-copilot.md", blob!("areas/content-creation/Blog-Writing/@TODO/idea-cursor-vs-copilot.md")),
    Entry::path("Blog-Writing/Templates/note-template.md", blob!("areas/content-creation/Blog-Writing/Templates/note-template.md")),
    Entry::path("Blog-Writing/Templates/qiita-template.md", blob!("areas/content-creation/Blog-Writing/Templates/qiita-template.md")),
    Entry::path("Social-Media/X-Twitter/@TODO/thread-cursor-tips.md", blob!("areas/content-creation/Social-Media/X-Twitter/@TODO/thread-cursor-tips.md")),
    Entry::path("Social-Media/X-Twitter/content-calendar.md", blob!("areas/content-creation/Social-Media/X-Twitter/content-calendar.md")),
    Entry::path("YouTube-Channel/00-channel-strategy.md", blob!("areas/content-creation/YouTube-Channel/00-channel-strategy.md")),
    Entry::path("YouTube-Channel/01-content-calendar.md", blob!("areas/content-creation/YouTube-Channel/01-content-calendar.md")),
    Entry::path("YouTube-Channel/02-analytics.md", blob!("areas/content-creation/YouTube-Channel/02-analytics.md")),
    Entry::path("YouTube-Channel/@Completed/2025/01-January/cursor-intro-video.md", blob!("areas/content-creation/YouTube-Channel/@Completed/2025/01-January/cursor-intro-video.md")),
    Entry::path("YouTube-Channel/@Doing/cursor-advanced-guide/notes.md", blob!("areas/content-creation/YouTube-Channel/@Doing/cursor-advanced-guide/notes.md")),
    Entry::path("YouTube-Channel/@Doing/cursor-advanced-guide/script.md", blob!("areas/content-creation/YouTube-Channel/@Doing/cursor-advanced-guide/script.md")),
    Entry::path("YouTube-Channel/@TODO/idea-ai-agents-explained.md", blob!("areas/content-creation/YouTube-Channel/@TODO/idea-ai-agents-explained.md")),
    Entry::path("YouTube-Channel/@TODO/idea-cursor-shortcuts.md", blob!("areas/content-creation/YouTube-Channel/@TODO/idea-cursor-shortcuts.md")),
];

const BUSINESS_AREA_ENTRIES: &[Entry] = &[
    Entry::path("Corporate-Training/00-service-overview.md", blob!("areas/business/Corporate-Training/00-service-overview.md")),
    Entry::path("Corporate-Training/@TODO/prospect-xyz-corp.md", blob!("areas/business/Corporate-Training/@TODO/prospect-xyz-corp.md")),
    Entry::path("Corporate-Training/Client-List/clients-database.md", blob!("areas/business/Corporate-Training/Client-List/clients-database.md")),
    Entry::path("Corporate-Training/Marketing/sales-materials.md", blob!("areas/business/Corporate-Training/Marketing/sales-materials.md")),
    Entry::path("Corporate-Training/Training-Packages/ai-basics-package.md", blob!("areas/business/Corporate-Training/Training-Packages/ai-basics-package.md")),
    Entry::path("Corporate-Training/Training-Packages/cursor-training-package.md", blob!("areas/business/Corporate-Training/Training-Packages/cursor-training-package.md")),
    Entry::path("Corporate-Training/Training-Packages/custom-package-template.md", blob!("areas/business/Corporate-Training/Training-Packages/custom-package-template.md")),
    Entry::path("RIDE-ON-AI/00-community-strategy.md", blob!("areas/business/RIDE-ON-AI/00-community-strategy.md")),
    Entry::path("RIDE-ON-AI/@TODO/next-event-idea.md", blob!("areas/business/RIDE-ON-AI/@TODO/next-event-idea.md")),
    Entry::path("RIDE-ON-AI/Events/event-planning.md", blob!("areas/business/RIDE-ON-AI/Events/event-planning.md")),
    Entry::path("RIDE-ON-AI/Member-Engagement/engagement-tactics.md", blob!("areas/business/RIDE-ON-AI/Member-Engagement/engagement-tactics.md")),
    Entry::path("RIDE-ON-AI/Member-Engagement/member-journeys.md", blob!("areas/business/RIDE-ON-AI/Member-Engagement/member-journeys.md")),
    Entry::path("RIDE-ON-AI/Partnerships/partnership-strategy.md", blob!("areas/business/RIDE-ON-AI/Partnerships/partnership-strategy.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/00-business-model.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/00-business-model.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/01-vision-mission.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/01-vision-mission.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/@TODO/marketing-campaign-q2.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/@TODO/marketing-campaign-q2.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/@TODO/new-curriculum-dev.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/@TODO/new-curriculum-dev.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/Curriculum/core-curriculum.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/Curriculum/core-curriculum.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/Marketing/marketing-strategy.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/Marketing/marketing-strategy.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/Operations/tools-systems.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/Operations/tools-systems.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/Operations/workflows.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/Operations/workflows.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/Student-Management/alumni-network.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/Student-Management/alumni-network.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/Student-Management/onboarding-process.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/Student-Management/onboarding-process.md")),
    Entry::path("Survibe-AI-Baib-Coding-School/Student-Management/support-system.md", blob!("areas/business/Survibe-AI-Baib-Coding-School/Student-Management/support-system.md")),
];

const PROJECT_ENTRIES: &[Entry] = &[
    Entry::path("@Active/Corporate-Training-ABC-Corp/00-client-brief.md", blob!("projects/@Active/Corporate-Training-ABC-Corp/00-client-brief.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/00-project-overview.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/00-project-overview.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/01-planning/requirements.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/01-planning/requirements.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/01-planning/stakeholders.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/01-planning/stakeholders.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/01-planning/timeline.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/01-planning/timeline.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/02-curriculum/week1-cursor-basics.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/02-curriculum/week1-cursor-basics.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/02-curriculum/week2-dify-agents.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/02-curriculum/week2-dify-agents.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/02-curriculum/week3-prompting.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/02-curriculum/week3-prompting.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/02-curriculum/week4-final-project.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/02-curriculum/week4-final-project.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/05-review-feedback/improvements.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/05-review-feedback/improvements.md")),
    Entry::path("@Active/SURVIBE-AI-Dec2025/05-review-feedback/student-feedback.md", blob!("projects/@Active/SURVIBE-AI-Dec2025/05-review-feedback/student-feedback.md")),
    Entry::path("@Active/YouTube-Cursor-Series/00-series-plan.md", blob!("projects/@Active/YouTube-Cursor-Series/00-series-plan.md")),
    Entry::path("@Active/YouTube-Cursor-Series/01-scripts/ep01-intro-to-cursor.md", blob!("projects/@Active/YouTube-Cursor-Series/01-scripts/ep01-intro-to-cursor.md")),
    Entry::path("@Active/YouTube-Cursor-Series/01-scripts/ep02-basic-features.md", blob!("projects/@Active/YouTube-Cursor-Series/01-scripts/ep02-basic-features.md")),
    Entry::path("@Active/YouTube-Cursor-Series/01-scripts/ep03-advanced-tips.md", blob!("projects/@Active/YouTube-Cursor-Series/01-scripts/ep03-advanced-tips.md")),
    Entry::path("@Active/YouTube-Cursor-Series/01-scripts/ep04-real-world-demo.md", blob!("projects/@Active/YouTube-Cursor-Series/01-scripts/ep04-real-world-demo.md")),
    Entry::path("@Active/YouTube-Cursor-Series/03-editing/ep01-edit-notes.md", blob!("projects/@Active/YouTube-Cursor-Series/03-editing/ep01-edit-notes.md")),
    Entry::path("@Active/YouTube-Cursor-Series/04-published/ep01-analytics.md", blob!("projects/@Active/YouTube-Cursor-Series/04-published/ep01-analytics.md")),
    Entry::path("@Planning/new-course-idea.md", blob!("projects/@Planning/new-course-idea.md")),
    Entry::path("@Planning/youtube-series-prompting.md", blob!("projects/@Planning/youtube-series-prompting.md")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        let sizes = ALL.iter().map(FixedTable::len).collect::<Vec<_>>();
        assert_eq!(sizes, vec![5, 5, 22, 6, 8, 16, 24, 20]);
    }

    #[test]
    fn every_blob_is_already_normalised() {
        for table in ALL {
            for entry in table.entries() {
                assert!(!entry.body.trim().is_empty(), "empty blob in {}", table.name);
                assert_eq!(
                    format_section(entry.body),
                    entry.body,
                    "blob in {} is not normalised",
                    table.name
                );
            }
        }
    }

    #[test]
    fn dashboards_match_keywords_case_insensitively() {
        let home = DASHBOARDS.render("home.md").unwrap();
        assert!(home.starts_with("# 🏠 HOME Dashboard\n"));
        assert_eq!(DASHBOARDS.render("🏠 HOME.md").unwrap(), home);
        assert!(DASHBOARDS
            .render("📊 Weekly Dashboard.md")
            .unwrap()
            .starts_with("# 📊 Weekly Dashboard"));
        assert_eq!(
            DASHBOARDS.lookup("Active Projects.md"),
            DASHBOARDS.lookup("projects.md")
        );
        assert_eq!(
            DASHBOARDS.render("misc.md"),
            Err(SeedError::UnknownTemplate {
                table: "dashboards",
                key: "misc.md".to_string()
            })
        );
    }

    #[test]
    fn input_notes_match_stem_anywhere_below_input() {
        assert!(INPUT_NOTES.lookup("this-week-focus.md").is_some());
        assert_eq!(
            INPUT_NOTES.lookup("Weekly/this-week-focus.md"),
            INPUT_NOTES.lookup("this-week-focus.md")
        );
        assert!(INPUT_NOTES.lookup("this-week-focus-old.md").is_none());
    }

    #[test]
    fn archive_rules() {
        assert!(ARCHIVE
            .render("_archive-workflow.md")
            .unwrap()
            .starts_with("# アーカイブ運用ワークフロー"));
        // the workflow entry is keyed by its exact path
        assert!(ARCHIVE.lookup("2024/_archive-workflow.md").is_none());
        assert_eq!(
            ARCHIVE.lookup("2024/2024-03-01-meeting-notes.md"),
            ARCHIVE.lookup("meeting-notes.md")
        );
        assert!(ARCHIVE.lookup("memo-002.md").is_some());
        assert!(ARCHIVE.lookup("memo-003.md").is_none());
        // archive stems are case-sensitive, unlike dashboard keywords
        assert!(ARCHIVE.lookup("Meeting-Notes-2024.md").is_none());
        assert!(ARCHIVE.lookup("2024-voice-note.md").is_some());
        assert!(matches!(
            ARCHIVE.render("Voice-Note.md"),
            Err(SeedError::UnknownTemplate { table: "archive", .. })
        ));
    }

    #[test]
    fn path_tables_need_the_exact_relative_path() {
        assert!(TEMPLATES.lookup("Daily/週次レビューテンプレート.md").is_some());
        assert!(TEMPLATES.lookup("週次レビューテンプレート.md").is_none());
        assert!(PERSONAL_AREA.lookup("Health/exercise-log.md").is_some());
        assert!(PROJECTS
            .lookup("@Active/SURVIBE-AI-Dec2025/00-project-overview.md")
            .is_some());
        assert!(matches!(
            PROJECTS.render("does-not-exist.md"),
            Err(SeedError::UnknownTemplate { table: "projects", .. })
        ));
    }
}
