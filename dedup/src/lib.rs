//! Contact Deduplication Engine
//!
//! Given a batch of contacts, this crate identifies groups that represent the
//! same real-world person despite inconsistent formatting and collapses each
//! group into one canonical record. It is a pure library: no I/O, no shared
//! state, plain `Contact` values in and out.
//!
//! # Architecture
//!
//! - **Matcher** (`matcher`): pairwise duplicate decision over three
//!   criteria — email equality, phone equality after normalization, and
//!   first/last name similarity.
//! - **Grouper** (`grouper`): connected components of the pairwise match
//!   relation via union-find, so transitive duplicates land in one group.
//! - **Merger** (`merger`): field-completeness merge policy producing one
//!   contact per group.
//!
//! # Example
//!
//! ```rust,ignore
//! use dedup::{find_duplicate_contacts, merge_groups};
//!
//! let result = find_duplicate_contacts(&contacts);
//! let merged = merge_groups(&result.duplicates)?;
//! ```

pub mod grouper;
pub mod matcher;
pub mod merger;

mod normalize;
mod similarity;

pub use grouper::{find_duplicate_contacts, find_duplicate_contacts_with};
pub use matcher::{is_duplicate, match_criterion, MatcherConfig};
pub use merger::{merge_contacts, merge_groups};
