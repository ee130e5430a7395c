//! Patient record wire model.
//!
//! This module defines the record shape shared between the seed data, JSON
//! ingestion, and the rendering layer.
//!
//! Responsibilities:
//! - Define the strict wire model for serialisation/deserialisation
//! - Enforce required fields and reject unknown keys
//!
//! Notes:
//! - Records are immutable once loaded; there are no create/update/delete
//!   operations anywhere in this crate.
//! - `gender` is an opaque display label, never a filter key.

use cohort_types::DiagnosisCode;
use serde::{Deserialize, Serialize};

/// A single patient entry in the static record set.
///
/// Field names on the wire are camelCase (`diagnosisCode`), matching the
/// JSON seed shape consumed by the rendering layer. Unknown keys are
/// rejected on the way in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientRecord {
    /// Unique identifier, stable for the lifetime of the set.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Age in whole years. Negative ages are unrepresentable.
    pub age: u32,
    /// Opaque gender label (`Male` / `Female` in the seed).
    pub gender: String,
    /// Free-text clinical label; substring-search target and tally key.
    pub condition: String,
    /// Coded diagnosis; exact-match filter key and dropdown option source.
    pub diagnosis_code: DiagnosisCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_sample_json() {
        let input = r#"{
  "id": 1,
  "name": "Mukuna Kabeya",
  "age": 23,
  "gender": "Male",
  "condition": "Hypertension",
  "diagnosisCode": "I10"
}"#;

        let record: PatientRecord = serde_json::from_str(input).expect("parse json");
        assert_eq!(record.name, "Mukuna Kabeya");
        assert_eq!(record.diagnosis_code.as_str(), "I10");

        let output = serde_json::to_string(&record).expect("render record");
        let reparsed: PatientRecord = serde_json::from_str(&output).expect("reparse json");
        assert_eq!(record, reparsed);
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = r#"{
  "id": 1,
  "name": "Mukuna Kabeya",
  "age": 23,
  "gender": "Male",
  "condition": "Hypertension",
  "diagnosisCode": "I10",
  "unexpected_key": "should_fail"
}"#;

        let err = serde_json::from_str::<PatientRecord>(input).expect_err("should reject");
        assert!(err.to_string().contains("unexpected_key"));
    }

    #[test]
    fn rejects_malformed_diagnosis_code() {
        let input = r#"{
  "id": 1,
  "name": "Mukuna Kabeya",
  "age": 23,
  "gender": "Male",
  "condition": "Hypertension",
  "diagnosisCode": "not a code!"
}"#;

        assert!(serde_json::from_str::<PatientRecord>(input).is_err());
    }
}
