use chrono::NaiveDate;
use tracing::debug;
use vaultseed_config::TaxonomyConfig;

use crate::error::SeedError;
use crate::fixed;
use crate::hubs;
use crate::knowledge::ContentTables;
use crate::reviews;
use crate::router::{Area, Route, Router};
use crate::synth;

/// Hub label for `_`-prefixed files directly inside the memory directory.
const ROOT_HUB: &str = "Memory";

/// Routes a vault-relative path and renders the body for it.
///
/// Holds no mutable state; one seeder can serve any number of files.
#[derive(Debug, Clone)]
pub struct Seeder<'t> {
    tables: &'t ContentTables,
    router: Router,
}

impl<'t> Seeder<'t> {
    pub fn new(tables: &'t ContentTables, taxonomy: &TaxonomyConfig) -> Self {
        Self {
            tables,
            router: Router::new(taxonomy),
        }
    }

    pub fn tables(&self) -> &'t ContentTables {
        self.tables
    }

    pub fn route(&self, rel: &str) -> Result<Route, SeedError> {
        self.router.resolve(rel)
    }

    /// Body for an already-resolved route.  `today` only feeds the
    /// "updated" stamp of knowledge notes.
    pub fn render(&self, route: &Route, today: NaiveDate) -> Result<String, SeedError> {
        match route {
            Route::WeeklyReview { label } => reviews::weekly_review(label),
            Route::MonthlyReview { label } => reviews::monthly_review(label),
            Route::Dashboard { key } => fixed::DASHBOARDS.render(key),
            Route::MemoryIndex => Ok(hubs::master_index()),
            Route::MemoryHub { category } => Ok(hubs::category_hub(
                category.as_deref().unwrap_or(ROOT_HUB),
            )),
            Route::MemoryNote { category, stem } => Ok(synth::synthesize_note(
                self.tables,
                stem,
                category.as_deref(),
                today,
            )),
            Route::InputNote { key } => fixed::INPUT_NOTES.render(key),
            Route::Template { key } => fixed::TEMPLATES.render(key),
            Route::ArchiveNote { key } => fixed::ARCHIVE.render(key),
            Route::AreaNote { area, key } => match area {
                Area::Personal => fixed::PERSONAL_AREA.render(key),
                Area::ContentCreation => fixed::CONTENT_AREA.render(key),
                Area::Business => fixed::BUSINESS_AREA.render(key),
            },
            Route::ProjectNote { key } => fixed::PROJECTS.render(key),
        }
    }

    pub fn generate(&self, rel: &str, today: NaiveDate) -> Result<String, SeedError> {
        let route = self.route(rel)?;
        debug!(path = rel, route = %route, "rendering");
        self.render(&route, today)
    }
}
