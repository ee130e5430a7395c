/// Errors that can occur when creating validated code types.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// The input code was empty or contained only whitespace
    #[error("Diagnosis code cannot be empty")]
    Empty,
    /// The input code exceeded the maximum length
    #[error("Diagnosis code exceeds maximum length of {0} characters")]
    TooLong(usize),
    /// The input code contained a character outside the allowed set
    #[error("Diagnosis code contains invalid characters (only alphanumeric, '.', '-' allowed)")]
    InvalidCharacter,
}

/// A short coded diagnosis string (ICD-10 style, e.g. `I10` or `E11.9`).
///
/// This type wraps a `String` and guarantees a non-empty, bounded, conservative
/// ASCII form suitable for exact-match filtering and for use as a dropdown
/// option value. The input is trimmed of leading and trailing whitespace
/// during construction. Comparison is case-sensitive: `i10` and `I10` are
/// distinct codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosisCode(String);

impl DiagnosisCode {
    /// Maximum accepted code length after trimming.
    pub const MAX_LEN: usize = 16;

    /// Creates a new `DiagnosisCode` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace and then
    /// checked against conservative guardrails:
    /// - Rejects empty or whitespace-only strings
    /// - Bounds the length to [`DiagnosisCode::MAX_LEN`]
    /// - Restricts characters to ASCII alphanumerics plus `.` and `-`
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Errors
    ///
    /// Returns a `CodeError` describing the first failed guardrail.
    pub fn new(input: impl AsRef<str>) -> Result<Self, CodeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(CodeError::TooLong(Self::MAX_LEN));
        }
        let ok = trimmed
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'.' | b'-'));
        if !ok {
            return Err(CodeError::InvalidCharacter);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DiagnosisCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DiagnosisCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for DiagnosisCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for DiagnosisCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DiagnosisCode::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_icd10_style_codes() {
        for input in ["I10", "E11", "J45", "G43", "I25", "E11.9"] {
            let code = DiagnosisCode::new(input).expect("valid code");
            assert_eq!(code.as_str(), input);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let code = DiagnosisCode::new("  I10 ").expect("valid code");
        assert_eq!(code.as_str(), "I10");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(matches!(DiagnosisCode::new(""), Err(CodeError::Empty)));
        assert!(matches!(DiagnosisCode::new("   "), Err(CodeError::Empty)));
    }

    #[test]
    fn rejects_overlong_codes() {
        let long = "A".repeat(DiagnosisCode::MAX_LEN + 1);
        assert!(matches!(
            DiagnosisCode::new(&long),
            Err(CodeError::TooLong(_))
        ));
    }

    #[test]
    fn rejects_invalid_characters() {
        for input in ["I 10", "I10;", "I10/X", "é11"] {
            assert!(matches!(
                DiagnosisCode::new(input),
                Err(CodeError::InvalidCharacter)
            ));
        }
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let upper = DiagnosisCode::new("I10").expect("valid code");
        let lower = DiagnosisCode::new("i10").expect("valid code");
        assert_ne!(upper, lower);
    }

    #[test]
    fn deserialize_validates_input() {
        let code: DiagnosisCode = serde_json::from_str("\"I10\"").expect("valid code");
        assert_eq!(code.as_str(), "I10");
        assert!(serde_json::from_str::<DiagnosisCode>("\"not a code!\"").is_err());
    }
}
