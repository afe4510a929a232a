use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::warn;
use walkdir::WalkDir;

use vaultseed_config::VaultConfig;

/// A zero-length file inside the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    /// Vault-relative, `/`-separated.
    pub rel: String,
    pub path: PathBuf,
}

/// Every zero-length file under `root` with an accepted extension, sorted by
/// relative path.
pub(crate) fn find_empty_targets(root: &Path, vault: &VaultConfig) -> Result<Vec<Target>> {
    if !root.is_dir() {
        bail!("vault root {} is not a directory", root.display());
    }

    let mut targets = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, vault))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let ext = entry.path().extension().and_then(|ext| ext.to_str());
        if !vault.accepts_extension(ext) {
            continue;
        }
        let len = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!(path = %entry.path().display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        if len != 0 {
            continue;
        }
        if let Some(rel) = relative_path(root, entry.path()) {
            targets.push(Target {
                rel,
                path: entry.into_path(),
            });
        }
    }

    targets.sort_by(|a, b| a.rel.cmp(&b.rel));
    Ok(targets)
}

/// True while `path` still exists as an empty regular file.
pub(crate) fn still_empty(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() == 0)
        .unwrap_or(false)
}

fn is_excluded_dir(entry: &walkdir::DirEntry, vault: &VaultConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| vault.excluded_dirs.iter().any(|dir| dir == name))
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts = rel
        .components()
        .map(|part| part.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn finds_only_empty_markdown_sorted() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "b/second.md", "");
        touch(root, "a/first.md", "");
        touch(root, "a/full.md", "# already written\n");
        touch(root, "a/notes.txt", "");

        let targets = find_empty_targets(root, &VaultConfig::default()).unwrap();
        let rels = targets.iter().map(|t| t.rel.as_str()).collect::<Vec<_>>();
        assert_eq!(rels, vec!["a/first.md", "b/second.md"]);
        assert_eq!(targets[0].path, root.join("a").join("first.md"));
    }

    #[test]
    fn excluded_directories_are_pruned() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, ".obsidian/workspace.md", "");
        touch(root, "notes/.trash/old.md", "");
        touch(root, "notes/keep.md", "");

        let targets = find_empty_targets(root, &VaultConfig::default()).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].rel, "notes/keep.md");
    }

    #[test]
    fn empty_extension_list_accepts_everything() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "x.txt", "");
        touch(dir.path(), "y", "");
        let vault = VaultConfig {
            extensions: Vec::new(),
            ..VaultConfig::default()
        };
        assert_eq!(find_empty_targets(dir.path(), &vault).unwrap().len(), 2);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(find_empty_targets(&dir.path().join("nope"), &VaultConfig::default()).is_err());
    }

    #[test]
    fn still_empty_tracks_file_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("n.md");
        assert!(!still_empty(&path));
        fs::write(&path, "").unwrap();
        assert!(still_empty(&path));
        fs::write(&path, "text").unwrap();
        assert!(!still_empty(&path));
    }
}
