use std::env;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ── Vault scan ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault root directory.  Overridden at runtime by the `VAULTSEED_ROOT`
    /// environment variable when set.
    pub root: String,
    /// File extensions (without the dot) that count as fill targets.
    /// An empty list accepts every zero-length file.
    pub extensions: Vec<String>,
    /// Directory names skipped entirely during the scan.
    pub excluded_dirs: Vec<String>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            extensions: vec!["md".to_string()],
            excluded_dirs: vec![
                ".git".to_string(),
                ".obsidian".to_string(),
                ".trash".to_string(),
                "node_modules".to_string(),
                "target".to_string(),
            ],
        }
    }
}

impl VaultConfig {
    /// Whether a file with this extension is a fill target.
    pub fn accepts_extension(&self, ext: Option<&str>) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match ext {
            Some(ext) => self
                .extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

// ── Directory taxonomy ───────────────────────────────────────────────────────

/// Vault-relative directory names the router dispatches on.
///
/// | Key               | Generator                                   |
/// |-------------------|---------------------------------------------|
/// | `weekly_reviews`  | ISO-week review reports                     |
/// | `monthly_reviews` | calendar-month review reports               |
/// | `dashboards`      | fixed dashboard blobs                       |
/// | `memory_index`    | the master index (a file, not a directory)  |
/// | `memory`          | hub notes (`_` prefix) and synthesized notes |
/// | `input`           | fixed input notes                           |
/// | `templates`       | fixed note templates                        |
/// | `archive`         | fixed archive notes                         |
/// | `*_area`          | fixed per-area notes                        |
/// | `projects`        | fixed project notes                         |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub weekly_reviews: String,
    pub monthly_reviews: String,
    pub dashboards: String,
    pub memory: String,
    pub memory_index: String,
    pub input: String,
    pub templates: String,
    pub archive: String,
    pub personal_area: String,
    pub content_area: String,
    pub business_area: String,
    pub projects: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            weekly_reviews: "02_Daily/Weekly-Reviews".to_string(),
            monthly_reviews: "02_Daily/Monthly-Reviews".to_string(),
            dashboards: "07_System/Dashboards".to_string(),
            memory: "04_Memory".to_string(),
            memory_index: "04_Memory/_Master-Index.md".to_string(),
            input: "03_Input".to_string(),
            templates: "06_Templates".to_string(),
            archive: "99_Archive".to_string(),
            personal_area: "05_Output/Areas/Personal".to_string(),
            content_area: "05_Output/Areas/Content-Creation".to_string(),
            business_area: "05_Output/Areas/Business".to_string(),
            projects: "05_Output/Projects".to_string(),
        }
    }
}

// ── Content overlay ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Optional TOML file whose `[tokens]`, `[categories]` and `[labels]`
    /// entries replace the built-in ones key by key.
    pub overlay_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// Continue past per-file failures and report them at the end.
    pub keep_going: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub vault: VaultConfig,
    pub taxonomy: TaxonomyConfig,
    pub content: ContentConfig,
    pub run: RunConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Read `path`; a missing file yields defaults, any other read or parse
    /// failure is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = match fs::read_to_string(path) {
            Ok(raw) => toml::from_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config {}", path.display()));
            }
        };

        if let Ok(root) = env::var("VAULTSEED_ROOT") {
            if !root.is_empty() {
                config.vault.root = root;
            }
        }

        if let Ok(level) = env::var("VAULTSEED_LOG") {
            if !level.is_empty() {
                config.telemetry.log_level = level;
            }
        }

        Ok(config)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let rendered = toml::to_string_pretty(self)?;
        fs::write(path, rendered)?;
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
