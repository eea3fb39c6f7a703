/// Common error type for estimation, validation and export.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("export failure: {0}")]
    Export(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Rejects NaN and infinities before they reach any trigonometry.
pub(crate) fn ensure_finite(name: &str, value: f64) -> SearchResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SearchError::Validation(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        assert!(ensure_finite("altitude", 1.0).is_ok());
        assert!(matches!(
            ensure_finite("altitude", f64::NAN),
            Err(SearchError::Validation(_))
        ));
        assert!(ensure_finite("altitude", f64::INFINITY).is_err());
    }

    #[test]
    fn error_messages_carry_context() {
        let err = SearchError::InvalidParameter("emergency descent rate is zero".into());
        assert_eq!(
            err.to_string(),
            "invalid parameter: emergency descent rate is zero"
        );
    }
}
