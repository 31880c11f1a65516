use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Contact;

/// Deduplication error types
#[derive(Debug, thiserror::Error)]
pub enum DedupError {
    #[error("Cannot merge empty contact list")]
    EmptyMergeInput,
}

/// Which rule declared two contacts duplicates.
///
/// Criteria are evaluated in this order; the first that fires is reported,
/// which only affects explainability since the match relation is symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum MatchCriterion {
    Email,
    Phone,
    Name,
}

/// Contacts judged mutually reachable through the match relation,
/// in original input order. Always has at least two members.
pub type DuplicateGroup = Vec<Contact>;

/// Output of a deduplication pass over one contact batch.
///
/// Every input contact lands in exactly one of the two lists: flattening
/// `duplicates` and appending `unique` yields a permutation of the input.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeduplicationResult {
    pub duplicates: Vec<DuplicateGroup>,
    pub unique: Vec<Contact>,
}
