//! Generic error handling utilities
//!
//! Unified error logging that works across this crate's error types while
//! keeping domain-specific detail available at debug level.

/// Trait for errors that can distinguish between caller-actionable and
/// ordering/system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)` with a concrete fix; when it returns `false`,
/// `user_message()` must return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a specific message the caller can
    /// act on (e.g. picking a different action-type identifier)
    fn is_user_actionable(&self) -> bool;

    /// The specific actionable message, when one exists
    fn user_message(&self) -> Option<String>;
}

/// Log an error with detail level matched to its specificity
///
/// Caller-actionable errors log their own message; ordering and system
/// errors log the operation context instead, with the raw error pushed down
/// to debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => {
            log::error!("{}: {}", operation_context, user_msg);
        }
        _ => {
            log::error!("{} failed", operation_context);
        }
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct TestOrderingError;

    impl fmt::Display for TestOrderingError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "called out of order")
        }
    }

    impl std::error::Error for TestOrderingError {}

    impl ContextualError for TestOrderingError {
        fn is_user_actionable(&self) -> bool {
            false
        }

        fn user_message(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_ordering_error_has_no_user_message() {
        let error = TestOrderingError;
        assert!(!error.is_user_actionable());
        assert_eq!(error.user_message(), None);

        // Exercises the generic-context logging path
        log_error_with_context(&error, "Action registration");
    }
}
