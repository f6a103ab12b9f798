// Error types module

use thiserror::Error;

/// Errors raised by the Visionary codec.
///
/// Most parse failures are *absent data* (a malformed code, an unrecognized
/// URL shape) and surface as `None` from the parsing functions instead of an
/// error. `VisionaryError` covers the remaining cases: attempting to encode
/// a record that is missing its required fields, and handing the URL builder
/// an endpoint that is not an absolute URL. The latter is integration error,
/// not untrusted input, which is why it raises rather than returning `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisionaryError {
    /// Required code fields are missing or empty (file id, source dimensions)
    #[error("cannot construct visionary code: missing required file id or source dimensions")]
    MissingRequiredFields,

    /// A caller-supplied endpoint could not be parsed as an absolute URL
    #[error("invalid endpoint URL '{0}': endpoints must be absolute (http:// or https://)")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = VisionaryError::MissingRequiredFields;
        assert!(err.to_string().contains("missing required"));
    }

    #[test]
    fn test_invalid_endpoint_display() {
        let err = VisionaryError::InvalidEndpoint("not-a-url".to_string());
        assert!(err.to_string().contains("not-a-url"));
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VisionaryError>();
    }
}
