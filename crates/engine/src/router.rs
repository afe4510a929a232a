//! Vault-relative path → generator selection.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. weekly reviews
//! 2. monthly reviews
//! 3. dashboards
//! 4. the memory master index (exact path)
//! 5. memory hubs (`_`-prefixed file names under memory)
//! 6. memory notes
//! 7. input notes
//! 8. templates
//! 9. archive
//! 10. personal, content-creation and business areas
//! 11. projects

use std::fmt;
use std::path::Path;

use vaultseed_config::TaxonomyConfig;

use crate::error::SeedError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    Personal,
    ContentCreation,
    Business,
}

impl Area {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::ContentCreation => "content-creation",
            Self::Business => "business",
        }
    }
}

/// The generator chosen for one path, with the bits of the path it needs.
///
/// `key` fields are paths relative to the matched directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    WeeklyReview { label: String },
    MonthlyReview { label: String },
    Dashboard { key: String },
    MemoryIndex,
    MemoryHub { category: Option<String> },
    MemoryNote { category: Option<String>, stem: String },
    InputNote { key: String },
    Template { key: String },
    ArchiveNote { key: String },
    AreaNote { area: Area, key: String },
    ProjectNote { key: String },
}

impl Route {
    /// Kebab-case generator name used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WeeklyReview { .. } => "weekly-review",
            Self::MonthlyReview { .. } => "monthly-review",
            Self::Dashboard { .. } => "dashboard",
            Self::MemoryIndex => "memory-index",
            Self::MemoryHub { .. } => "memory-hub",
            Self::MemoryNote { .. } => "memory-note",
            Self::InputNote { .. } => "input-note",
            Self::Template { .. } => "template",
            Self::ArchiveNote { .. } => "archive-note",
            Self::AreaNote { area, .. } => match area {
                Area::Personal => "personal-area-note",
                Area::ContentCreation => "content-area-note",
                Area::Business => "business-area-note",
            },
            Self::ProjectNote { .. } => "project-note",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeeklyReview { label } | Self::MonthlyReview { label } => {
                write!(f, "{} ({label})", self.kind())
            }
            Self::MemoryIndex => f.write_str(self.kind()),
            Self::MemoryHub { category } => {
                write!(f, "{} ({})", self.kind(), category.as_deref().unwrap_or("-"))
            }
            Self::MemoryNote { category, stem } => write!(
                f,
                "{} ({}/{stem})",
                self.kind(),
                category.as_deref().unwrap_or("-")
            ),
            Self::Dashboard { key }
            | Self::InputNote { key }
            | Self::Template { key }
            | Self::ArchiveNote { key }
            | Self::AreaNote { key, .. }
            | Self::ProjectNote { key } => write!(f, "{} ({key})", self.kind()),
        }
    }
}

/// Ordered prefix rules built from a [`TaxonomyConfig`].
#[derive(Debug, Clone)]
pub struct Router {
    weekly_reviews: String,
    monthly_reviews: String,
    dashboards: String,
    memory: String,
    memory_index: String,
    input: String,
    templates: String,
    archive: String,
    areas: [(Area, String); 3],
    projects: String,
}

impl Router {
    pub fn new(taxonomy: &TaxonomyConfig) -> Self {
        Self {
            weekly_reviews: normalize_dir(&taxonomy.weekly_reviews),
            monthly_reviews: normalize_dir(&taxonomy.monthly_reviews),
            dashboards: normalize_dir(&taxonomy.dashboards),
            memory: normalize_dir(&taxonomy.memory),
            memory_index: normalize_path(&taxonomy.memory_index),
            input: normalize_dir(&taxonomy.input),
            templates: normalize_dir(&taxonomy.templates),
            archive: normalize_dir(&taxonomy.archive),
            areas: [
                (Area::Personal, normalize_dir(&taxonomy.personal_area)),
                (Area::ContentCreation, normalize_dir(&taxonomy.content_area)),
                (Area::Business, normalize_dir(&taxonomy.business_area)),
            ],
            projects: normalize_dir(&taxonomy.projects),
        }
    }

    /// Select the generator for `rel`, a vault-relative path.
    pub fn resolve(&self, rel: &str) -> Result<Route, SeedError> {
        let rel = normalize_path(rel);
        let path = rel.as_str();

        if let Some(rest) = below(path, &self.weekly_reviews) {
            return Ok(Route::WeeklyReview {
                label: stem_of(rest).to_string(),
            });
        }
        if let Some(rest) = below(path, &self.monthly_reviews) {
            return Ok(Route::MonthlyReview {
                label: stem_of(rest).to_string(),
            });
        }
        if let Some(rest) = below(path, &self.dashboards) {
            return Ok(Route::Dashboard {
                key: rest.to_string(),
            });
        }
        if !self.memory_index.is_empty() && path == self.memory_index {
            return Ok(Route::MemoryIndex);
        }
        if let Some(rest) = below(path, &self.memory) {
            let category = category_of(rest).map(str::to_string);
            if file_name_of(rest).starts_with('_') {
                return Ok(Route::MemoryHub { category });
            }
            return Ok(Route::MemoryNote {
                category,
                stem: stem_of(rest).to_string(),
            });
        }
        if let Some(rest) = below(path, &self.input) {
            return Ok(Route::InputNote {
                key: rest.to_string(),
            });
        }
        if let Some(rest) = below(path, &self.templates) {
            return Ok(Route::Template {
                key: rest.to_string(),
            });
        }
        if let Some(rest) = below(path, &self.archive) {
            return Ok(Route::ArchiveNote {
                key: rest.to_string(),
            });
        }
        for (area, dir) in &self.areas {
            if let Some(rest) = below(path, dir) {
                return Ok(Route::AreaNote {
                    area: *area,
                    key: rest.to_string(),
                });
            }
        }
        if let Some(rest) = below(path, &self.projects) {
            return Ok(Route::ProjectNote {
                key: rest.to_string(),
            });
        }

        Err(SeedError::UnroutablePath {
            path: rel.to_string(),
        })
    }
}

/// Forward slashes, no leading `./` or `/`.
fn normalize_path(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    let mut trimmed = unified.as_str();
    loop {
        if let Some(rest) = trimmed.strip_prefix("./") {
            trimmed = rest;
        } else if let Some(rest) = trimmed.strip_prefix('/') {
            trimmed = rest;
        } else {
            break;
        }
    }
    trimmed.to_string()
}

fn normalize_dir(raw: &str) -> String {
    normalize_path(raw).trim_end_matches('/').to_string()
}

/// The part of `path` strictly inside directory `dir`.
fn below<'a>(path: &'a str, dir: &str) -> Option<&'a str> {
    if dir.is_empty() {
        return None;
    }
    path.strip_prefix(dir)?
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty())
}

/// First segment of a nested path; `None` for a bare file name.
fn category_of(rest: &str) -> Option<&str> {
    rest.split_once('/').map(|(first, _)| first)
}

fn file_name_of(rest: &str) -> &str {
    rest.rsplit('/').next().unwrap_or(rest)
}

fn stem_of(rest: &str) -> &str {
    Path::new(file_name_of(rest))
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(&TaxonomyConfig::default())
    }

    #[test]
    fn stock_layout_routes() {
        let router = router();
        let cases = [
            ("02_Daily/Weekly-Reviews/2025-W01.md", "weekly-review"),
            ("02_Daily/Monthly-Reviews/2025-01.md", "monthly-review"),
            ("07_System/Dashboards/🏠 HOME.md", "dashboard"),
            ("04_Memory/_Master-Index.md", "memory-index"),
            ("04_Memory/AI/_AI-MOC.md", "memory-hub"),
            ("04_Memory/Personal/Health/stress-management.md", "memory-note"),
            ("03_Input/this-week-focus.md", "input-note"),
            ("06_Templates/Daily/週次レビューテンプレート.md", "template"),
            ("99_Archive/memo-002.md", "archive-note"),
            ("05_Output/Areas/Personal/Health/exercise-log.md", "personal-area-note"),
            ("05_Output/Areas/Content-Creation/YouTube-Channel/02-analytics.md", "content-area-note"),
            ("05_Output/Areas/Business/RIDE-ON-AI/00-community-strategy.md", "business-area-note"),
            ("05_Output/Projects/@Planning/new-course-idea.md", "project-note"),
        ];
        for (path, kind) in cases {
            assert_eq!(router.resolve(path).unwrap().kind(), kind, "{path}");
        }
    }

    #[test]
    fn extracted_fields() {
        let router = router();
        assert_eq!(
            router.resolve("02_Daily/Weekly-Reviews/2025/2025-W07.md").unwrap(),
            Route::WeeklyReview {
                label: "2025-W07".to_string()
            }
        );
        assert_eq!(
            router
                .resolve("04_Memory/Personal/Health/stress-management.md")
                .unwrap(),
            Route::MemoryNote {
                category: Some("Personal".to_string()),
                stem: "stress-management".to_string(),
            }
        );
        assert_eq!(
            router.resolve("04_Memory/loose.md").unwrap(),
            Route::MemoryNote {
                category: None,
                stem: "loose".to_string(),
            }
        );
        assert_eq!(
            router.resolve("05_Output/Projects/@Active/x/y.md").unwrap(),
            Route::ProjectNote {
                key: "@Active/x/y.md".to_string()
            }
        );
    }

    #[test]
    fn master_index_wins_over_hub_rule() {
        let router = router();
        assert_eq!(
            router.resolve("04_Memory/_Master-Index.md").unwrap(),
            Route::MemoryIndex
        );
        assert_eq!(
            router.resolve("04_Memory/_Other.md").unwrap(),
            Route::MemoryHub { category: None }
        );
    }

    #[test]
    fn prefixes_are_whole_directory_names() {
        let router = router();
        // "04_MemoryArchive" is not below "04_Memory"
        assert!(matches!(
            router.resolve("04_MemoryArchive/x.md"),
            Err(SeedError::UnroutablePath { .. })
        ));
        // the directory itself is not a file below it
        assert!(router.resolve("03_Input/").is_err());
    }

    #[test]
    fn unanticipated_paths_fail() {
        let router = router();
        for path in ["README.md", "01_Inbox/idea.md", "05_Output/Areas/Other/x.md"] {
            assert_eq!(
                router.resolve(path),
                Err(SeedError::UnroutablePath {
                    path: path.to_string()
                })
            );
        }
    }

    #[test]
    fn paths_are_normalised() {
        let router = router();
        assert_eq!(
            router.resolve(".\\03_Input\\this-week-focus.md").unwrap(),
            Route::InputNote {
                key: "this-week-focus.md".to_string()
            }
        );
        assert_eq!(
            router.resolve("/99_Archive/memo-002.md").unwrap().kind(),
            "archive-note"
        );
    }

    #[test]
    fn custom_taxonomy() {
        let taxonomy = TaxonomyConfig {
            weekly_reviews: "daily-reviews/weekly/".to_string(),
            monthly_reviews: "daily-reviews/monthly".to_string(),
            dashboards: "dashboards".to_string(),
            memory: "memory".to_string(),
            memory_index: "memory/master-index.md".to_string(),
            projects: "projects".to_string(),
            ..TaxonomyConfig::default()
        };
        let router = Router::new(&taxonomy);
        assert_eq!(
            router.resolve("daily-reviews/weekly/2025-W01.md").unwrap().kind(),
            "weekly-review"
        );
        assert_eq!(
            router.resolve("memory/master-index.md").unwrap(),
            Route::MemoryIndex
        );
        assert_eq!(
            router.resolve("projects/does-not-exist.md").unwrap().kind(),
            "project-note"
        );
    }

    #[test]
    fn dispatch_is_deterministic() {
        let router = router();
        let path = "04_Memory/AI/Techniques/RAG/rag-architecture.md";
        let first = router.resolve(path).unwrap();
        for _ in 0..3 {
            assert_eq!(router.resolve(path).unwrap(), first);
        }
        assert_eq!(first.to_string(), "memory-note (AI/rag-architecture)");
    }
}
