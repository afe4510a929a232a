use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{error, info, warn};

use vaultseed_config::AppConfig;
use vaultseed_engine::{ContentTables, SeedError, Seeder, fixed};

use crate::scan::{self, Target};

#[derive(Debug, Clone, Copy)]
pub(crate) struct FillOptions {
    pub dry_run: bool,
    pub keep_going: bool,
    pub today: NaiveDate,
}

/// A file that was not filled, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SkippedFile {
    pub path: String,
    pub kind: String,
    pub message: String,
}

impl SkippedFile {
    fn from_seed_error(path: &str, err: &SeedError) -> Self {
        Self {
            path: path.to_string(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }

    fn from_io(path: &str, err: &anyhow::Error) -> Self {
        Self {
            path: path.to_string(),
            kind: "io".to_string(),
            message: format!("{err:#}"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct FillReport {
    pub root: String,
    pub today: String,
    pub dry_run: bool,
    pub written: Vec<String>,
    /// Targets that gained content between the scan and the write.
    pub unchanged: Vec<String>,
    pub skipped: Vec<SkippedFile>,
    /// Stopped at the first failure instead of processing every target.
    pub halted: bool,
}

impl FillReport {
    pub fn failed(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Generate and write every target in order.
pub(crate) fn fill_vault(
    root: &Path,
    targets: &[Target],
    seeder: &Seeder<'_>,
    options: FillOptions,
) -> FillReport {
    let mut report = FillReport {
        root: root.display().to_string(),
        today: options.today.format("%Y-%m-%d").to_string(),
        dry_run: options.dry_run,
        ..FillReport::default()
    };

    for target in targets {
        let skipped = match seeder.generate(&target.rel, options.today) {
            Ok(body) => match write_if_still_empty(target, &body, options.dry_run) {
                Ok(true) => {
                    info!(path = %target.rel, bytes = body.len(), dry_run = options.dry_run, "filled");
                    report.written.push(target.rel.clone());
                    continue;
                }
                Ok(false) => {
                    info!(path = %target.rel, "no longer empty, left untouched");
                    report.unchanged.push(target.rel.clone());
                    continue;
                }
                Err(err) => SkippedFile::from_io(&target.rel, &err),
            },
            Err(err) => SkippedFile::from_seed_error(&target.rel, &err),
        };

        if options.keep_going {
            warn!(path = %skipped.path, kind = %skipped.kind, "{}", skipped.message);
            report.skipped.push(skipped);
        } else {
            error!(path = %skipped.path, kind = %skipped.kind, "{}", skipped.message);
            report.skipped.push(skipped);
            report.halted = true;
            break;
        }
    }

    info!(
        written = report.written.len(),
        unchanged = report.unchanged.len(),
        skipped = report.skipped.len(),
        "fill finished"
    );
    report
}

/// `Ok(false)` when the file was filled (or removed) after the scan.
fn write_if_still_empty(target: &Target, body: &str, dry_run: bool) -> Result<bool> {
    if !scan::still_empty(&target.path) {
        return Ok(false);
    }
    if !dry_run {
        fs::write(&target.path, body)
            .with_context(|| format!("failed to write {}", target.path.display()))?;
    }
    Ok(true)
}

pub(crate) fn vault_root(config: &AppConfig, root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| PathBuf::from(&config.vault.root))
}

pub(crate) fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) fn run_fill(
    config: &AppConfig,
    tables: &ContentTables,
    root: &Path,
    options: FillOptions,
    report_path: Option<&Path>,
) -> Result<()> {
    let targets = scan::find_empty_targets(root, &config.vault)?;
    let seeder = Seeder::new(tables, &config.taxonomy);
    println!("found {} empty file(s) under {}", targets.len(), root.display());

    let report = fill_vault(root, &targets, &seeder, options);

    let verb = if options.dry_run { "would write" } else { "written" };
    for path in &report.written {
        println!("- [{verb}] {path}");
    }
    for path in &report.unchanged {
        println!("- [unchanged] {path}");
    }
    for skipped in &report.skipped {
        println!("- [FAIL] {} ({}: {})", skipped.path, skipped.kind, skipped.message);
    }
    println!(
        "- summary: {} {verb}, {} unchanged, {} failed",
        report.written.len(),
        report.unchanged.len(),
        report.skipped.len()
    );

    if let Some(path) = report_path {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let rendered = serde_json::to_string_pretty(&report)?;
        fs::write(path, rendered)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        println!("- report written: {}", path.display());
    }

    if report.halted {
        bail!("fill halted on first failure (pass --keep-going to continue past failures)");
    }
    if report.failed() {
        bail!("{} file(s) could not be filled", report.skipped.len());
    }
    Ok(())
}

pub(crate) fn run_scan(config: &AppConfig, root: &Path) -> Result<()> {
    let targets = scan::find_empty_targets(root, &config.vault)?;
    for target in &targets {
        println!("{}", target.rel);
    }
    info!(count = targets.len(), root = %root.display(), "scan finished");
    Ok(())
}

pub(crate) fn run_route(config: &AppConfig, tables: &ContentTables, path: &str) -> Result<()> {
    let seeder = Seeder::new(tables, &config.taxonomy);
    let route = seeder.route(path)?;
    println!("{route}");
    Ok(())
}

pub(crate) fn run_preview(
    config: &AppConfig,
    tables: &ContentTables,
    path: &str,
    today: NaiveDate,
) -> Result<()> {
    let seeder = Seeder::new(tables, &config.taxonomy);
    let body = seeder.generate(path, today)?;
    print!("{body}");
    Ok(())
}

pub(crate) fn run_doctor(config: &AppConfig, tables: &ContentTables) {
    let taxonomy = &config.taxonomy;
    println!("vaultseed doctor");
    println!("- vault root: {}", config.vault.root);
    println!("- extensions: {}", display_list(&config.vault.extensions));
    println!("- excluded dirs: {}", display_list(&config.vault.excluded_dirs));
    println!(
        "- content overlay: {}",
        config.content.overlay_path.as_deref().unwrap_or("(none)")
    );
    println!("- keep going: {}", config.run.keep_going);

    println!();
    println!("── taxonomy ─────────────────────────────────────────");
    let rows = [
        ("weekly_reviews", &taxonomy.weekly_reviews),
        ("monthly_reviews", &taxonomy.monthly_reviews),
        ("dashboards", &taxonomy.dashboards),
        ("memory", &taxonomy.memory),
        ("memory_index", &taxonomy.memory_index),
        ("input", &taxonomy.input),
        ("templates", &taxonomy.templates),
        ("archive", &taxonomy.archive),
        ("personal_area", &taxonomy.personal_area),
        ("content_area", &taxonomy.content_area),
        ("business_area", &taxonomy.business_area),
        ("projects", &taxonomy.projects),
    ];
    for (name, dir) in rows {
        println!("  {name:<16} {dir}");
    }

    println!();
    println!("── content tables ───────────────────────────────────");
    println!("  tokens      : {}", tables.knowledge.len());
    println!(
        "  categories  : {} ({})",
        tables.categories.len(),
        tables.categories.names().collect::<Vec<_>>().join(", ")
    );
    println!("  labels      : {}", tables.labels.len());
    for table in fixed::ALL {
        println!("  {:<12}: {}", table.name, table.len());
    }
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(any)".to_string()
    } else {
        items.join(", ")
    }
}
