//! # helper-curry
//!
//! Curried helpers for building composable functional transforms.
//!
//! ## Overview
//!
//! A helper wraps a fixed-arity function so its arguments can arrive across
//! several calls. Until enough arguments are present each call returns a
//! reusable partial application; the call that completes the argument list
//! runs the function.
//!
//! In [`Mode::Diagnostic`] a helper additionally:
//!
//! - tags pending partials with how many parameters are still missing and
//!   which helper produced them
//! - labels the produced value with a display name derived from the helper
//!   name and its base value (the last required argument)
//!
//! [`Mode::Production`] keeps the accumulation and drops the metadata.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Mode`]
//!
//! ## Example
//!
//! ```rust
//! use helper_curry::prelude::*;
//!
//! let pair = HelperBuilder::new(declared_fn!(|left: &'static str, right: &'static str| (left, right)))
//!     .name("pair")
//!     .wrap_display_name()
//!     .build()
//!     .unwrap();
//!
//! let invocation = pair.call_one("a").call(["b"]).unwrap().into_ready().unwrap();
//! assert_eq!(invocation.value(), &("a", "b"));
//! assert_eq!(invocation.display_name(), Some("pair(b)"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use helper_curry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Mode;
    pub use crate::declared_fn;
    pub use crate::error::HelperError;
    pub use crate::helper::*;
}

pub mod config;
pub mod error;
pub mod helper;

pub use config::{MODE_ENV_VAR, Mode};
pub use error::{HelperError, ModeParseError};
pub use helper::{EntryPoint, HelperBuilder, create_helper};
