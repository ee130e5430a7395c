//! The filtering-and-aggregation pipeline.
//!
//! [`apply`] is the single entry point: given the full record set, the
//! free-text query, and the structured filter selection, it produces the
//! visible subset and the per-condition tally that feeds the chart. It is a
//! pure function of its inputs; callers recompute after every input event.

use crate::filter::FilterSelection;
use crate::record::PatientRecord;

/// Query sentinel meaning "no text filter", compared case-insensitively.
pub const ALL_PATIENTS_QUERY: &str = "all patients";

/// One bar of the condition chart: a condition label and how many filtered
/// records carry it. Count is always at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionTally {
    pub condition: String,
    pub count: usize,
}

/// The result of one pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// The visible subset, preserving the original record order. May be
    /// empty; an empty result is a valid outcome, not an error.
    pub filtered: Vec<PatientRecord>,
    /// One entry per distinct condition in `filtered`, in first-seen order.
    /// Counts sum to `filtered.len()`.
    pub tallies: Vec<ConditionTally>,
}

/// Returns true if the query applies no text filtering.
///
/// Both the empty string and the `"all patients"` sentinel (any letter
/// case) mean "keep everything".
pub fn query_is_unfiltered(query: &str) -> bool {
    query.is_empty() || query.eq_ignore_ascii_case(ALL_PATIENTS_QUERY)
}

/// Runs the pipeline: text stage, age stage, diagnosis stage, then the
/// condition tally over the filtered result.
///
/// The text stage keeps records whose lowercase `name` or lowercase
/// `condition` contains the lowercase query as a substring. The stages are
/// independent predicates, so their order does not affect the result.
///
/// Recognized filter values are a precondition: the typed
/// [`FilterSelection`] cannot carry an unrecognized bucket or sentinel, so
/// no validation happens here. Callers parsing wire strings must reject
/// unknown values before building a selection.
pub fn apply(records: &[PatientRecord], query: &str, filters: &FilterSelection) -> FilterOutcome {
    let needle = query.to_lowercase();
    let text_filtered = !query_is_unfiltered(query);

    let filtered: Vec<PatientRecord> = records
        .iter()
        .filter(|r| {
            !text_filtered
                || r.name.to_lowercase().contains(&needle)
                || r.condition.to_lowercase().contains(&needle)
        })
        .filter(|r| filters.age_bucket.contains(r.age))
        .filter(|r| filters.diagnosis.matches(&r.diagnosis_code))
        .cloned()
        .collect();

    let mut tallies: Vec<ConditionTally> = Vec::new();
    for record in &filtered {
        match tallies.iter_mut().find(|t| t.condition == record.condition) {
            Some(tally) => tally.count += 1,
            None => tallies.push(ConditionTally {
                condition: record.condition.clone(),
                count: 1,
            }),
        }
    }

    FilterOutcome { filtered, tallies }
}
