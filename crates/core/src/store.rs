//! Read-only record store.
//!
//! The store owns the full patient set for a session and the option list
//! derived from it. Records never change after construction, so the
//! diagnosis-code dropdown options are computed once here rather than on
//! every filter change.

use crate::error::{CohortError, CohortResult};
use crate::record::PatientRecord;
use crate::seed::seed_records;

/// Sentinel dropdown option meaning "no diagnosis filter".
pub const ALL_CODES: &str = "All";

/// The static, read-only collection of patient records for a session.
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Vec<PatientRecord>,
    diagnosis_code_options: Vec<String>,
}

impl RecordStore {
    /// Creates a store from the given records.
    ///
    /// The diagnosis-code option list is derived here: the sentinel
    /// [`ALL_CODES`] followed by each distinct code in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `CohortError::DuplicateRecordId` if two records share an id.
    pub fn new(records: Vec<PatientRecord>) -> CohortResult<Self> {
        let mut seen_ids = Vec::with_capacity(records.len());
        for record in &records {
            if seen_ids.contains(&record.id) {
                return Err(CohortError::DuplicateRecordId(record.id));
            }
            seen_ids.push(record.id);
        }

        let mut diagnosis_code_options = vec![ALL_CODES.to_owned()];
        for record in &records {
            let code = record.diagnosis_code.as_str();
            if !diagnosis_code_options.iter().any(|c| c == code) {
                diagnosis_code_options.push(code.to_owned());
            }
        }

        Ok(Self {
            records,
            diagnosis_code_options,
        })
    }

    /// Creates a store holding the embedded seed set.
    pub fn seed() -> Self {
        // Seed ids are unique by construction.
        Self::new(seed_records()).expect("seed record ids are unique")
    }

    /// Creates a store from a JSON array of records.
    ///
    /// The wire model is strict: unknown keys and malformed diagnosis codes
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns `CohortError::Deserialization` if the JSON does not parse as
    /// a record array, or `CohortError::DuplicateRecordId` if ids collide.
    pub fn from_json_str(input: &str) -> CohortResult<Self> {
        let records: Vec<PatientRecord> =
            serde_json::from_str(input).map_err(CohortError::Deserialization)?;
        Self::new(records)
    }

    /// Returns the full record set in original order.
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Returns the dropdown option list: `"All"` plus each distinct code in
    /// first-seen order.
    pub fn diagnosis_code_options(&self) -> &[String] {
        &self.diagnosis_code_options
    }

    /// Returns true if the given code appears in at least one record.
    pub fn has_diagnosis_code(&self, code: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.diagnosis_code.as_str() == code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
