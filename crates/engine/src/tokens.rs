//! Filename stem → tokens and display titles.

use std::collections::HashMap;

fn split_stem(stem: &str) -> impl Iterator<Item = &str> {
    stem.split(['-', '_']).filter(|segment| !segment.is_empty())
}

/// Split a filename stem on `-` and `_` into ordered lowercase tokens.
///
/// Empty segments are dropped; duplicates are kept.
pub fn tokenize(stem: &str) -> Vec<String> {
    split_stem(stem).map(str::to_lowercase).collect()
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Display labels for lowercase tokens.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: HashMap<String, String>,
}

impl LabelTable {
    pub fn new(labels: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            labels: labels
                .into_iter()
                .map(|(token, label)| (token.to_lowercase(), label))
                .collect(),
        }
    }

    pub fn label(&self, token: &str) -> Option<&str> {
        self.labels.get(&token.to_lowercase()).map(String::as_str)
    }

    /// Replace or add labels; later entries win.
    pub fn extend(&mut self, labels: impl IntoIterator<Item = (String, String)>) {
        for (token, label) in labels {
            self.labels.insert(token.to_lowercase(), label);
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Build a display title for `stem`.
    ///
    /// Each token maps through the table or falls back to [`capitalize`];
    /// labels are concatenated with no delimiter.  A stem with no tokens is
    /// returned unchanged.
    pub fn titleize(&self, stem: &str) -> String {
        let mut title = String::new();
        let mut any = false;
        for token in split_stem(stem) {
            any = true;
            match self.label(token) {
                Some(label) => title.push_str(label),
                None => title.push_str(&capitalize(token)),
            }
        }
        if any { title } else { stem.to_string() }
    }
}
