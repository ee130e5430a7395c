//! Session state and the input-event boundary.
//!
//! A [`Session`] owns everything the rendering layer needs for one user
//! session: the read-only record store, the suggestion matcher, the current
//! query and filter selection, and the last computed pipeline outcome. Every
//! mutating event ends with a synchronous recompute, so readers always see
//! a view consistent with the latest input.
//!
//! Wire-string inputs are validated here and rejected with an error when
//! unrecognized. Silently defaulting would mask caller bugs.

use crate::engine::{self, ConditionTally, FilterOutcome, ALL_PATIENTS_QUERY};
use crate::error::{CohortError, CohortResult};
use crate::filter::{AgeBucket, DiagnosisFilter, FilterSelection};
use crate::record::PatientRecord;
use crate::store::RecordStore;
use crate::suggest::SuggestionMatcher;

/// Wire name of the age-bucket filter field.
pub const FIELD_AGE_BUCKET: &str = "ageBucket";
/// Wire name of the diagnosis-code filter field.
pub const FIELD_DIAGNOSIS_CODE: &str = "diagnosisCode";

/// One user session over a fixed record set.
#[derive(Clone, Debug)]
pub struct Session {
    store: RecordStore,
    matcher: SuggestionMatcher,
    query: String,
    filters: FilterSelection,
    suggestions: Vec<String>,
    outcome: FilterOutcome,
}

impl Session {
    /// Creates a session over the given store with default state: query
    /// `"all patients"`, no filters, no suggestions. The initial view shows
    /// the full record set.
    pub fn new(store: RecordStore, matcher: SuggestionMatcher) -> Self {
        let mut session = Self {
            store,
            matcher,
            query: ALL_PATIENTS_QUERY.to_owned(),
            filters: FilterSelection::default(),
            suggestions: Vec::new(),
            outcome: FilterOutcome::default(),
        };
        session.recompute();
        session
    }

    /// Creates a session over the embedded seed set with the canned
    /// suggestion phrases.
    pub fn with_seed() -> Self {
        Self::new(RecordStore::seed(), SuggestionMatcher::default())
    }

    /// Handles typed query text: updates the query, refreshes the
    /// suggestion list, and recomputes the view.
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_owned();
        self.suggestions = self
            .matcher
            .matches(text)
            .into_iter()
            .map(str::to_owned)
            .collect();
        self.recompute();
    }

    /// Handles a dropdown change given wire strings.
    ///
    /// # Errors
    ///
    /// - `CohortError::UnknownFilterField` for a field other than
    ///   `"ageBucket"` / `"diagnosisCode"`.
    /// - `CohortError::UnknownAgeBucket` for an unrecognized bucket value.
    /// - `CohortError::InvalidInput` for a malformed diagnosis code.
    /// - `CohortError::UnknownDiagnosisCode` for a well-formed code absent
    ///   from the record store.
    ///
    /// On error the session state is left unchanged.
    pub fn set_filter(&mut self, field: &str, value: &str) -> CohortResult<()> {
        match field {
            FIELD_AGE_BUCKET => {
                let bucket = AgeBucket::from_wire(value)
                    .ok_or_else(|| CohortError::UnknownAgeBucket(value.to_owned()))?;
                self.set_age_bucket(bucket);
                Ok(())
            }
            FIELD_DIAGNOSIS_CODE => {
                let filter = DiagnosisFilter::from_wire(value)?;
                self.set_diagnosis_filter(filter)
            }
            _ => Err(CohortError::UnknownFilterField(field.to_owned())),
        }
    }

    /// Sets the age bucket and recomputes the view.
    pub fn set_age_bucket(&mut self, bucket: AgeBucket) {
        self.filters.age_bucket = bucket;
        self.recompute();
    }

    /// Sets the diagnosis filter and recomputes the view.
    ///
    /// # Errors
    ///
    /// Returns `CohortError::UnknownDiagnosisCode` if the code does not
    /// appear in the record store; the dropdown only ever offers codes that
    /// do, so anything else is a contract violation.
    pub fn set_diagnosis_filter(&mut self, filter: DiagnosisFilter) -> CohortResult<()> {
        if let DiagnosisFilter::Code(code) = &filter {
            if !self.store.has_diagnosis_code(code.as_str()) {
                return Err(CohortError::UnknownDiagnosisCode(code.as_str().to_owned()));
            }
        }
        self.filters.diagnosis = filter;
        self.recompute();
        Ok(())
    }

    /// Handles a suggestion click: the suggestion text becomes the query
    /// and the suggestion list is dismissed.
    pub fn pick_suggestion(&mut self, text: &str) {
        self.query = text.to_owned();
        self.suggestions.clear();
        self.recompute();
    }

    /// Resets the query to `"all patients"` and both filters to their
    /// sentinels, dismissing any open suggestions.
    pub fn clear_filters(&mut self) {
        self.query = ALL_PATIENTS_QUERY.to_owned();
        self.filters = FilterSelection::default();
        self.suggestions.clear();
        self.recompute();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    /// The visible record subset, in original record order.
    pub fn filtered(&self) -> &[PatientRecord] {
        &self.outcome.filtered
    }

    /// Per-condition counts over the visible subset, first-seen order.
    pub fn tallies(&self) -> &[ConditionTally] {
        &self.outcome.tallies
    }

    /// Current suggestion list for the typed query.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The diagnosis dropdown options, derived once from the store.
    pub fn diagnosis_code_options(&self) -> &[String] {
        self.store.diagnosis_code_options()
    }

    /// True when the current inputs match no records. The rendering layer
    /// shows an explicit empty state with a clear-filters action.
    pub fn is_empty_result(&self) -> bool {
        self.outcome.filtered.is_empty()
    }

    fn recompute(&mut self) {
        self.outcome = engine::apply(self.store.records(), &self.query, &self.filters);
        tracing::debug!(
            query = %self.query,
            filtered = self.outcome.filtered.len(),
            tallies = self.outcome.tallies.len(),
            "recomputed session view"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_shows_the_full_seed_set() {
        let session = Session::with_seed();
        assert_eq!(session.query(), "all patients");
        assert_eq!(session.filtered().len(), 10);
        assert_eq!(session.tallies().len(), 5);
        assert!(session.suggestions().is_empty());
        assert!(!session.is_empty_result());
    }

    #[test]
    fn typing_updates_suggestions_and_view_together() {
        let mut session = Session::with_seed();
        session.set_query("diab");
        assert_eq!(session.suggestions(), &["patients with diabetes"]);
        // "diab" is a substring of the Diabetes Mellitus condition.
        assert_eq!(session.filtered().len(), 3);

        session.set_query("");
        assert!(session.suggestions().is_empty());
        assert_eq!(session.filtered().len(), 10);
    }

    #[test]
    fn picking_a_suggestion_dismisses_the_list() {
        let mut session = Session::with_seed();
        session.set_query("hyper");
        assert_eq!(session.suggestions(), &["patients with hypertension"]);

        session.pick_suggestion("patients with hypertension");
        assert_eq!(session.query(), "patients with hypertension");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn filter_events_accept_wire_strings() {
        let mut session = Session::with_seed();
        session
            .set_filter(FIELD_AGE_BUCKET, "40to60")
            .expect("known bucket");
        assert_eq!(session.filtered().len(), 3);

        session
            .set_filter(FIELD_DIAGNOSIS_CODE, "J45")
            .expect("known code");
        assert_eq!(session.filtered().len(), 1);
        assert_eq!(session.filtered()[0].name, "Bruce Wayne");
    }

    #[test]
    fn unknown_filter_inputs_are_rejected_without_state_change() {
        let mut session = Session::with_seed();

        let err = session
            .set_filter("bloodType", "O")
            .expect_err("unknown field");
        assert!(matches!(err, CohortError::UnknownFilterField(_)));

        let err = session
            .set_filter(FIELD_AGE_BUCKET, "teenagers")
            .expect_err("unknown bucket");
        assert!(matches!(err, CohortError::UnknownAgeBucket(_)));

        let err = session
            .set_filter(FIELD_DIAGNOSIS_CODE, "Z99")
            .expect_err("absent code");
        assert!(matches!(err, CohortError::UnknownDiagnosisCode(_)));

        assert_eq!(session.filters(), &FilterSelection::default());
        assert_eq!(session.filtered().len(), 10);
    }

    #[test]
    fn over_sixty_on_the_seed_is_a_valid_empty_result() {
        let mut session = Session::with_seed();
        session
            .set_filter(FIELD_AGE_BUCKET, "over60")
            .expect("known bucket");
        assert!(session.is_empty_result());
        assert!(session.tallies().is_empty());
    }

    #[test]
    fn clear_filters_restores_the_default_view() {
        let mut session = Session::with_seed();
        session.set_query("hypertension");
        session
            .set_filter(FIELD_AGE_BUCKET, "under40")
            .expect("known bucket");
        session
            .set_filter(FIELD_DIAGNOSIS_CODE, "I10")
            .expect("known code");
        assert_eq!(session.filtered().len(), 3);

        session.clear_filters();
        assert_eq!(session.query(), "all patients");
        assert_eq!(session.filters(), &FilterSelection::default());
        assert_eq!(session.filtered().len(), 10);
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn dropdown_options_come_from_the_store() {
        let session = Session::with_seed();
        assert_eq!(
            session.diagnosis_code_options(),
            &["All", "I10", "E11", "J45", "G43", "I25"]
        );
    }
}
