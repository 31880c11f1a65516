pub mod contact;
pub mod dedup;
pub mod import;

pub use contact::Contact;
pub use dedup::{DedupError, DeduplicationResult, DuplicateGroup, MatchCriterion};
pub use import::{ContactField, ImportError, ImportReport, InvalidRow};
