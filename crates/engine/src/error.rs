use thiserror::Error;

/// Why a single file could not be generated.
///
/// Every variant is fatal for the file it names and is never retried.  The
/// first two mean the path was not anticipated by the rule tables; the last
/// two mean a date label in the file name is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("no generator is routed for `{path}`")]
    UnroutablePath { path: String },
    #[error("{table} table has no entry for `{key}`")]
    UnknownTemplate { table: &'static str, key: String },
    #[error("`{label}` is not a valid ISO week label (expected YYYY-Www)")]
    InvalidWeekLabel { label: String },
    #[error("`{label}` is not a valid month label (expected YYYY-MM)")]
    InvalidMonthLabel { label: String },
}

impl SeedError {
    /// Stable kebab-case name used in logs and run reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnroutablePath { .. } => "unroutable-path",
            Self::UnknownTemplate { .. } => "unknown-template",
            Self::InvalidWeekLabel { .. } => "invalid-week-label",
            Self::InvalidMonthLabel { .. } => "invalid-month-label",
        }
    }

    /// The path (or a table key under it) was never anticipated.
    pub fn is_unanticipated(&self) -> bool {
        matches!(
            self,
            Self::UnroutablePath { .. } | Self::UnknownTemplate { .. }
        )
    }

    /// A date label did not parse into a calendar range.
    pub fn is_malformed_label(&self) -> bool {
        matches!(
            self,
            Self::InvalidWeekLabel { .. } | Self::InvalidMonthLabel { .. }
        )
    }
}
