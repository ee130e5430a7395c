//! # Cohort Core
//!
//! Core logic for the patient cohort dashboard: the pipeline that turns
//! (records, query, filters) into (visible rows, condition tallies).
//!
//! This crate contains pure data operations and session state:
//! - A read-only [`RecordStore`] with the embedded demo seed
//! - The filtering-and-aggregation pipeline ([`engine::apply`])
//! - Canned query [`SuggestionMatcher`]
//! - A [`Session`] owning the per-user query/filter state
//!
//! **No rendering concerns**: markup, charts, and DOM handling belong to
//! the external rendering layer, which consumes this crate's outputs and
//! feeds user input events back into [`Session`].

pub mod engine;
pub mod error;
pub mod filter;
pub mod record;
pub mod seed;
pub mod session;
pub mod store;
pub mod suggest;

pub use engine::{apply, ConditionTally, FilterOutcome, ALL_PATIENTS_QUERY};
pub use error::{CohortError, CohortResult};
pub use filter::{AgeBucket, DiagnosisFilter, FilterSelection};
pub use record::PatientRecord;
pub use session::Session;
pub use store::RecordStore;
pub use suggest::SuggestionMatcher;
