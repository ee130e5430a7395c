#[derive(Debug, thiserror::Error)]
pub enum CohortError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown filter field: {0}")]
    UnknownFilterField(String),
    #[error("unknown age bucket: {0}")]
    UnknownAgeBucket(String),
    #[error("unknown diagnosis code: {0}")]
    UnknownDiagnosisCode(String),
    #[error("duplicate record id: {0}")]
    DuplicateRecordId(u32),
    #[error("failed to deserialize records: {0}")]
    Deserialization(serde_json::Error),
}

pub type CohortResult<T> = std::result::Result<T, CohortError>;
