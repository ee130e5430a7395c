//! Structured filter selection.
//!
//! These are the two dropdown-backed filters. Wire values are the option
//! strings the rendering layer submits; unrecognized values are a contract
//! violation and parse to an error, never to a silent default.

use crate::error::{CohortError, CohortResult};
use crate::store::ALL_CODES;
use cohort_types::DiagnosisCode;

/// Age range filter. Buckets partition the 40/60 boundaries inclusively:
/// ages 40 and 60 both fall into [`AgeBucket::From40To60`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AgeBucket {
    /// No age filter.
    #[default]
    Any,
    /// Keeps `age < 40`.
    Under40,
    /// Keeps `40 <= age <= 60`.
    From40To60,
    /// Keeps `age > 60`.
    Over60,
}

impl AgeBucket {
    /// Convert to the dropdown option value.
    pub fn to_wire(self) -> &'static str {
        match self {
            AgeBucket::Any => "",
            AgeBucket::Under40 => "under40",
            AgeBucket::From40To60 => "40to60",
            AgeBucket::Over60 => "over60",
        }
    }

    /// Parse from a dropdown option value.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "" => Some(AgeBucket::Any),
            "under40" => Some(AgeBucket::Under40),
            "40to60" => Some(AgeBucket::From40To60),
            "over60" => Some(AgeBucket::Over60),
            _ => None,
        }
    }

    /// Returns true if the given age belongs to this bucket.
    pub fn contains(self, age: u32) -> bool {
        match self {
            AgeBucket::Any => true,
            AgeBucket::Under40 => age < 40,
            AgeBucket::From40To60 => (40..=60).contains(&age),
            AgeBucket::Over60 => age > 60,
        }
    }
}

/// Diagnosis-code filter: either the `"All"` sentinel or an exact code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DiagnosisFilter {
    /// No diagnosis filter.
    #[default]
    All,
    /// Keeps records whose code matches exactly (case-sensitive).
    Code(DiagnosisCode),
}

impl DiagnosisFilter {
    /// Parse from a dropdown option value.
    ///
    /// `"All"` is the sentinel; anything else must be a well-formed code.
    /// Whether the code is actually present in the record store is checked
    /// at the session boundary, which knows the store.
    ///
    /// # Errors
    ///
    /// Returns `CohortError::InvalidInput` for a malformed code.
    pub fn from_wire(s: &str) -> CohortResult<Self> {
        if s == ALL_CODES {
            return Ok(DiagnosisFilter::All);
        }
        let code = DiagnosisCode::new(s)
            .map_err(|e| CohortError::InvalidInput(format!("diagnosis code {s:?}: {e}")))?;
        Ok(DiagnosisFilter::Code(code))
    }

    /// Returns true if a record with the given code passes this filter.
    pub fn matches(&self, code: &DiagnosisCode) -> bool {
        match self {
            DiagnosisFilter::All => true,
            DiagnosisFilter::Code(wanted) => wanted == code,
        }
    }
}

/// The structured filter state for a session: one age bucket and one
/// diagnosis code, both defaulting to "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub age_bucket: AgeBucket,
    pub diagnosis: DiagnosisFilter,
}
