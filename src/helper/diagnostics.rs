//! Metadata attached to pending partial applications.

use std::fmt;
use std::sync::Arc;

use super::definition::HelperDefinition;

/// Advisory metadata on a pending partial application.
///
/// Only diagnostic-mode helpers produce it. Nothing in this crate reads it
/// back; it exists for composition tooling that warns about helpers used
/// before they were fully applied.
///
/// `missing_parameter_count` is `arity - accumulated - 1`, one less than
/// the number of open argument slots. Consumers rely on that exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialDiagnostics {
    missing_parameter_count: usize,
    helper_name: Option<Arc<str>>,
}

impl PartialDiagnostics {
    /// `arity - accumulated - 1`.
    #[inline]
    pub const fn missing_parameter_count(&self) -> usize {
        self.missing_parameter_count
    }

    /// The label of the helper that produced the partial.
    #[inline]
    pub fn helper_name(&self) -> Option<&str> {
        self.helper_name.as_deref()
    }
}

impl fmt::Display for PartialDiagnostics {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.helper_name {
            Some(name) => write!(
                formatter,
                "partial application of `{name}` (missing parameters: {})",
                self.missing_parameter_count
            ),
            None => write!(
                formatter,
                "partial application (missing parameters: {})",
                self.missing_parameter_count
            ),
        }
    }
}

/// Builds the metadata for a partial holding `arguments_length` arguments.
///
/// Callers guarantee `arguments_length < definition.arity`.
pub(crate) fn tag<A, R>(
    definition: &HelperDefinition<A, R>,
    arguments_length: usize,
) -> Option<PartialDiagnostics> {
    if !definition.mode.is_diagnostic() {
        return None;
    }
    debug_assert!(arguments_length < definition.arity);

    Some(PartialDiagnostics {
        missing_parameter_count: definition.arity - arguments_length - 1,
        helper_name: definition.helper_name.clone(),
    })
}
