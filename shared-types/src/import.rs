use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Contact;

/// Import error types
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Contact fields a CSV column can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
}

/// A CSV row that failed validation, with its 1-based row number
/// (header row excluded) and the reasons it was rejected.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvalidRow {
    pub row_number: usize,
    pub errors: Vec<String>,
}

/// Outcome of parsing and validating one uploaded CSV batch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImportReport {
    pub valid: Vec<Contact>,
    pub invalid: Vec<InvalidRow>,
    pub total_rows: usize,
}
