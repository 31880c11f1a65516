//! Contact Importers
//!
//! This crate implements the non-UI half of the contact import wizard:
//! parsing an uploaded CSV into contact records, mapping columns onto
//! contact fields, and validating each row before the batch is handed to
//! the deduplication engine.
//!
//! # Pipeline
//!
//! 1. `CsvContactImporter` parses the CSV into header/value maps
//! 2. A `FieldMapping` (explicit or auto-detected) turns each row into a
//!    `Contact`
//! 3. `ContactValidator` checks every row; failures are reported per row
//!    in the resulting `ImportReport` instead of aborting the batch

pub mod csv_contacts;
pub mod validation;

pub use csv_contacts::{CsvContactImporter, FieldMapping};
pub use validation::ContactValidator;
