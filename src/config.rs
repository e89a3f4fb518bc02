//! Mode selection for curried helpers.
//!
//! A helper runs in one of two modes:
//!
//! - [`Mode::Diagnostic`]: pending partials carry
//!   [`PartialDiagnostics`](crate::helper::PartialDiagnostics) and named
//!   helpers label their results
//! - [`Mode::Production`]: plain accumulation with no metadata
//!
//! The mode is chosen per helper at construction time. [`Mode::from_env`]
//! offers the conventional process-wide switch for callers that want one.

use std::fmt;
use std::str::FromStr;

use crate::error::ModeParseError;

/// Environment variable consulted by [`Mode::from_env`].
pub const MODE_ENV_VAR: &str = "HELPER_CURRY_ENV";

/// Whether helpers attach diagnostic metadata.
///
/// # Examples
///
/// ```rust
/// use helper_curry::Mode;
///
/// assert_eq!(Mode::default(), Mode::Diagnostic);
/// assert_eq!("production".parse::<Mode>(), Ok(Mode::Production));
/// assert_eq!(Mode::from_env_value(Some("test")), Mode::Diagnostic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Tag pending partials and ready results.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "development"))]
    Diagnostic,
    /// Accumulate arguments without any metadata.
    Production,
}

impl Mode {
    /// Interprets an environment value leniently: only `"production"`
    /// selects [`Mode::Production`]; anything else, including an unset
    /// variable, selects [`Mode::Diagnostic`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Diagnostic,
        }
    }

    /// Reads [`MODE_ENV_VAR`] from the process environment.
    pub fn from_env() -> Self {
        let value = std::env::var(MODE_ENV_VAR).ok();
        let mode = Self::from_env_value(value.as_deref());
        tracing::debug!(variable = MODE_ENV_VAR, value = ?value, %mode, "selected helper mode");
        mode
    }

    /// Returns `true` for [`Mode::Diagnostic`].
    #[inline]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Diagnostic)
    }

    /// The canonical lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diagnostic => "diagnostic",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "production" => Ok(Self::Production),
            "diagnostic" | "development" => Ok(Self::Diagnostic),
            _ => Err(ModeParseError {
                value: value.to_string(),
            }),
        }
    }
}
