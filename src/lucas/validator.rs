//! Request validator
//!
//! Turns a raw request body into a validated, non-negative `n`.

use super::error::CalculationError;
use super::types::CalculationRequest;

/// Validate a raw JSON payload.
///
/// Rejects an empty body, malformed JSON, a missing or non-integer `n`,
/// negative values, and values above `max_n` when a ceiling is configured.
pub fn validate(payload: &[u8], max_n: Option<u64>) -> Result<u64, CalculationError> {
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Err(CalculationError::invalid("empty request body"));
    }

    let request: CalculationRequest = serde_json::from_slice(payload)
        .map_err(|e| CalculationError::invalid(format!("malformed payload: {e}")))?;

    let n = u64::try_from(request.n)
        .map_err(|_| CalculationError::invalid(format!("n must be non-negative, got {}", request.n)))?;

    match max_n {
        Some(max) if n > max => Err(CalculationError::invalid(format!(
            "n = {n} exceeds configured maximum {max}"
        ))),
        _ => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_invalid(payload: &[u8]) -> bool {
        matches!(
            validate(payload, None),
            Err(CalculationError::InvalidRequest(_))
        )
    }

    #[test]
    fn test_accepts_non_negative() {
        assert_eq!(validate(br#"{"n": 0}"#, None), Ok(0));
        assert_eq!(validate(br#"{"n": 10}"#, None), Ok(10));
    }

    #[test]
    fn test_ignores_extra_fields() {
        assert_eq!(validate(br#"{"n": 3, "extra": true}"#, None), Ok(3));
    }

    #[test]
    fn test_rejects_negative() {
        assert!(is_invalid(br#"{"n": -1}"#));
        assert!(is_invalid(br#"{"n": -5}"#));
    }

    #[test]
    fn test_rejects_missing_n() {
        assert!(is_invalid(b"{}"));
        assert!(is_invalid(br#"{"m": 3}"#));
    }

    #[test]
    fn test_rejects_absent_payload() {
        assert!(is_invalid(b""));
        assert!(is_invalid(b"  \n"));
        assert!(is_invalid(b"null"));
    }

    #[test]
    fn test_rejects_non_integer() {
        assert!(is_invalid(br#"{"n": 2.5}"#));
        assert!(is_invalid(br#"{"n": "10"}"#));
        assert!(is_invalid(br#"{"n": null}"#));
        assert!(is_invalid(b"[10]"));
        assert!(is_invalid(b"not json"));
    }

    #[test]
    fn test_max_n_ceiling() {
        assert_eq!(validate(br#"{"n": 40}"#, Some(40)), Ok(40));
        assert!(validate(br#"{"n": 41}"#, Some(40)).is_err());
    }

    proptest! {
        #[test]
        fn prop_negative_always_rejected(n in i64::MIN..0) {
            let payload = format!(r#"{{"n": {n}}}"#);
            prop_assert!(validate(payload.as_bytes(), None).is_err());
        }

        #[test]
        fn prop_non_negative_round_trips(n in 0i64..=i64::MAX) {
            let payload = format!(r#"{{"n": {n}}}"#);
            prop_assert_eq!(validate(payload.as_bytes(), None), Ok(n.unsigned_abs()));
        }
    }
}
