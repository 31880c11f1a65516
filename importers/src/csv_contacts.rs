use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use csv::ReaderBuilder;
use shared_types::{Contact, ContactField, DeduplicationResult, ImportError, ImportReport, InvalidRow};

use crate::validation::ContactValidator;

/// Assignment of CSV column headers to contact fields.
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    columns: HashMap<String, ContactField>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_column(mut self, header: impl Into<String>, field: ContactField) -> Self {
        self.columns.insert(header.into(), field);
        self
    }

    /// Guess a mapping from common header spellings ("First Name",
    /// "first_name", "Email Address", ...), the way the wizard pre-fills
    /// its mapping step.
    pub fn detect(headers: &[String]) -> Self {
        let mut mapping = Self::new();
        for header in headers {
            let key: String = header
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            let field = match key.as_str() {
                "firstname" | "first" | "givenname" => Some(ContactField::FirstName),
                "lastname" | "last" | "surname" | "familyname" => Some(ContactField::LastName),
                "email" | "emailaddress" => Some(ContactField::Email),
                "phone" | "phonenumber" | "mobile" | "telephone" => Some(ContactField::Phone),
                "company" | "organization" | "organisation" | "employer" => {
                    Some(ContactField::Company)
                }
                _ => None,
            };
            if let Some(field) = field {
                mapping.columns.insert(header.clone(), field);
            }
        }
        mapping
    }

    pub fn field_for(&self, header: &str) -> Option<ContactField> {
        self.columns.get(header).copied()
    }

    fn has_field(&self, field: ContactField) -> bool {
        self.columns.values().any(|&f| f == field)
    }
}

/// Parses uploaded contact CSVs and validates every row, producing an
/// `ImportReport` for the wizard to act on.
pub struct CsvContactImporter {
    delimiter: u8,
    validator: ContactValidator,
}

impl CsvContactImporter {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            validator: ContactValidator::new(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Import with a mapping auto-detected from the header row.
    pub fn import_auto(&self, content: &[u8]) -> Result<ImportReport, ImportError> {
        let headers = self.read_headers(content)?;
        let mapping = FieldMapping::detect(&headers);
        self.import(content, &mapping)
    }

    /// Import a CSV file from disk; the wizard hands over uploads this way.
    pub fn import_path(&self, path: &Path, mapping: &FieldMapping) -> anyhow::Result<ImportReport> {
        let content = std::fs::read(path)
            .with_context(|| format!("Failed to read contact CSV {}", path.display()))?;
        Ok(self.import(&content, mapping)?)
    }

    /// Parse, map and validate every data row.
    ///
    /// Rows that fail validation (or cannot be parsed at all) are reported
    /// with their 1-based row number instead of aborting the batch; only a
    /// missing header row or an incomplete mapping fails the whole import.
    pub fn import(
        &self,
        content: &[u8],
        mapping: &FieldMapping,
    ) -> Result<ImportReport, ImportError> {
        for required in [ContactField::FirstName, ContactField::LastName, ContactField::Email] {
            if !mapping.has_field(required) {
                return Err(ImportError::InvalidInput(format!(
                    "Required field not mapped: {:?}",
                    required
                )));
            }
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(content);

        let headers = reader
            .headers()
            .map_err(|e| ImportError::ParseError(e.to_string()))?
            .clone();

        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        let mut total_rows = 0;

        for (index, result) in reader.records().enumerate() {
            total_rows += 1;
            let row_number = index + 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    invalid.push(InvalidRow {
                        row_number,
                        errors: vec![format!("Failed to parse CSV row: {}", e)],
                    });
                    continue;
                }
            };

            let contact = row_to_contact(&headers, &record, mapping);
            let errors = self.validator.validate(&contact);
            if errors.is_empty() {
                valid.push(contact);
            } else {
                invalid.push(InvalidRow { row_number, errors });
            }
        }

        tracing::debug!(
            "Contact import: {} rows -> {} valid, {} invalid",
            total_rows,
            valid.len(),
            invalid.len()
        );

        Ok(ImportReport {
            valid,
            invalid,
            total_rows,
        })
    }

    /// The wizard's duplicate-check step: import the batch, then run the
    /// valid rows through the deduplication engine so the user can resolve
    /// duplicate groups before anything is persisted.
    pub fn import_and_check_duplicates(
        &self,
        content: &[u8],
        mapping: &FieldMapping,
    ) -> Result<(ImportReport, DeduplicationResult), ImportError> {
        let report = self.import(content, mapping)?;
        let duplicates = dedup::find_duplicate_contacts(&report.valid);
        Ok((report, duplicates))
    }

    fn read_headers(&self, content: &[u8]) -> Result<Vec<String>, ImportError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(content);

        let headers = reader
            .headers()
            .map_err(|e| ImportError::ParseError(e.to_string()))?;
        Ok(headers.iter().map(|h| h.to_string()).collect())
    }
}

impl Default for CsvContactImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn row_to_contact(
    headers: &csv::StringRecord,
    record: &csv::StringRecord,
    mapping: &FieldMapping,
) -> Contact {
    let mut contact = Contact::new("", "");

    for (i, value) in record.iter().enumerate() {
        let Some(header) = headers.get(i) else {
            continue;
        };
        let Some(field) = mapping.field_for(header) else {
            continue;
        };
        let value = value.trim();
        match field {
            ContactField::FirstName => contact.first_name = value.to_string(),
            ContactField::LastName => contact.last_name = value.to_string(),
            // Optional fields stay absent when the cell is empty so the
            // matcher's disqualification rules see them as missing.
            ContactField::Email => {
                contact.email = (!value.is_empty()).then(|| value.to_string())
            }
            ContactField::Phone => {
                contact.phone = (!value.is_empty()).then(|| value.to_string())
            }
            ContactField::Company => {
                contact.company = (!value.is_empty()).then(|| value.to_string())
            }
        }
    }

    contact
}
