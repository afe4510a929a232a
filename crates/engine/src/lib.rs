pub mod error;
pub mod fixed;
pub mod format;
pub mod hubs;
pub mod knowledge;
pub mod reviews;
pub mod router;
pub mod seeder;
pub mod synth;
pub mod tokens;

pub use error::SeedError;
pub use knowledge::{CategoryDefaults, ContentTables, TokenFragment};
pub use reviews::{MonthRange, WeekRange};
pub use router::{Area, Route, Router};
pub use seeder::Seeder;
pub use synth::{NoteDraft, synthesize_note};
