use crate::errors::AnalysisError;
use crate::types::RawToken;

/// Convert raw tokens into floats, failing on the first bad token.
///
/// Validation is all-or-nothing: an empty input fails with `EmptyInput`,
/// and the first unparseable token fails with `InvalidValue` carrying the
/// offending text and its 1-based position. No partial result is returned.
pub fn validate_numerical_data(tokens: &[RawToken]) -> Result<Vec<f64>, AnalysisError> {
    if tokens.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<f64>()
                .map_err(|_| AnalysisError::InvalidValue {
                    value: token.clone(),
                    position: idx + 1,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<RawToken> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = validate_numerical_data(&[]);
        assert!(matches!(result, Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn first_bad_token_aborts_with_its_position() {
        let result = validate_numerical_data(&tokens(&["3", "x", "5"]));
        match result {
            Err(AnalysisError::InvalidValue { value, position }) => {
                assert_eq!(value, "x");
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn valid_tokens_convert_in_order() {
        let result = validate_numerical_data(&tokens(&["1", "2.5", "-3"])).unwrap();
        assert_eq!(result, vec![1.0, 2.5, -3.0]);
    }
}
