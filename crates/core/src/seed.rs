//! Embedded seed data.
//!
//! All data in this module is hardcoded and fictional. It acts as the
//! external seed collaborator for a demo session: a fixed ten-row patient
//! set plus the canned query phrases offered as typing suggestions. No
//! external systems are contacted.

use crate::record::PatientRecord;
use cohort_types::DiagnosisCode;

/// Canned query phrases offered as suggestions, in display order.
pub const QUERY_SUGGESTIONS: [&str; 5] = [
    "all patients",
    "patients with hypertension",
    "patients with diabetes",
    "patients under 40",
    "patients over 60",
];

/// Returns the embedded ten-row patient set.
///
/// Ids are unique and stable; conditions cover five distinct labels
/// (Hypertension x3, Diabetes Mellitus x3, Asthma x2, Migraine x1,
/// Coronary Artery Disease x1).
pub fn seed_records() -> Vec<PatientRecord> {
    let rows = [
        (1, "Mukuna Kabeya", 23, "Male", "Hypertension", "I10"),
        (2, "Paul Kabeya", 24, "Male", "Diabetes Mellitus", "E11"),
        (3, "Miriam Kabeya", 22, "Female", "Asthma", "J45"),
        (4, "Christian Ronald", 40, "Male", "Migraine", "G43"),
        (5, "Lionne Mess", 38, "Male", "Hypertension", "I10"),
        (6, "Tony Stark", 51, "Male", "Diabetes Mellitus", "E11"),
        (7, "Peter Parker", 21, "Male", "Coronary Artery Disease", "I25"),
        (8, "Bruce Wayne", 48, "Male", "Asthma", "J45"),
        (9, "Carol Denvers", 33, "Female", "Hypertension", "I10"),
        (10, "Patricia Moore", 22, "Female", "Diabetes Mellitus", "E11"),
    ];

    rows.into_iter()
        .map(|(id, name, age, gender, condition, code)| PatientRecord {
            id,
            name: name.to_owned(),
            age,
            gender: gender.to_owned(),
            condition: condition.to_owned(),
            diagnosis_code: DiagnosisCode::new(code).expect("seed codes are valid"),
        })
        .collect()
}
