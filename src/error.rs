//! Error types for helper construction and mode selection.
//!
//! Failures raised by a wrapped function are not represented here: a
//! function returning `Result` yields that `Result` as its ready value, and
//! a panic unwinds to whoever made the final call.

use thiserror::Error;

/// Errors produced while building or driving a curried helper.
///
/// # Examples
///
/// ```rust
/// use helper_curry::HelperError;
///
/// let error = HelperError::MissingDisplayNamer {
///     helper_name: "withTheme".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "withTheme: result tagging is enabled but no display namer was configured"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    /// The helper is named and tags its result, but nothing can derive the
    /// display name.
    #[error("{helper_name}: result tagging is enabled but no display namer was configured")]
    MissingDisplayNamer {
        /// The label of the rejected helper.
        helper_name: String,
    },

    /// Arguments were applied to an application that had already invoked
    /// its function.
    #[error(
        "{}: already invoked, a ready application takes no further arguments",
        .helper_name.as_deref().unwrap_or("<anonymous helper>")
    )]
    AlreadyInvoked {
        /// The label of the helper, if it has one.
        helper_name: Option<String>,
    },

    /// The arity override is below the parameter count of a function that
    /// binds its arguments to parameters, so it could never run.
    #[error("arity override {requested} is below the {declared} parameters the function binds")]
    ArityBelowDeclared {
        /// Parameters bound by the function.
        declared: usize,
        /// The rejected override.
        requested: usize,
    },
}

/// A mode name that is not one of `production`, `diagnostic` or
/// `development`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown helper mode `{value}`")]
pub struct ModeParseError {
    /// The rejected input.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_display_namer_display() {
        let error = HelperError::MissingDisplayNamer {
            helper_name: "mapProps".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "mapProps: result tagging is enabled but no display namer was configured"
        );
    }

    #[test]
    fn test_already_invoked_display_named() {
        let error = HelperError::AlreadyInvoked {
            helper_name: Some("withState".to_string()),
        };
        assert_eq!(
            format!("{error}"),
            "withState: already invoked, a ready application takes no further arguments"
        );
    }

    #[test]
    fn test_already_invoked_display_anonymous() {
        let error = HelperError::AlreadyInvoked { helper_name: None };
        assert!(format!("{error}").starts_with("<anonymous helper>: already invoked"));
    }

    #[test]
    fn test_arity_below_declared_display() {
        let error = HelperError::ArityBelowDeclared {
            declared: 3,
            requested: 2,
        };
        assert_eq!(
            format!("{error}"),
            "arity override 2 is below the 3 parameters the function binds"
        );
    }

    #[test]
    fn test_mode_parse_error_display() {
        let error = ModeParseError {
            value: "staging".to_string(),
        };
        assert_eq!(format!("{error}"), "unknown helper mode `staging`");
    }

    #[test]
    fn test_errors_have_no_source() {
        use std::error::Error;

        let error = HelperError::AlreadyInvoked { helper_name: None };
        assert!(error.source().is_none());
        let error = ModeParseError {
            value: String::new(),
        };
        assert!(error.source().is_none());
    }
}
