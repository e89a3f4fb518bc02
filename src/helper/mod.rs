//! Curried helpers with diagnostic metadata.
//!
//! A helper wraps a function of fixed arity so that its arguments can be
//! supplied across several calls. Each call returns an [`Application`]:
//! [`Application::Pending`] while arguments are missing,
//! [`Application::Ready`] once the function has run.
//!
//! # Overview
//!
//! - [`HelperBuilder`] / [`create_helper`]: construct an [`EntryPoint`]
//! - [`EntryPoint::call`]: start an independent chain
//! - [`Partial::call`]: continue a chain
//! - [`PartialDiagnostics`]: metadata on pending partials in
//!   [`Mode::Diagnostic`](crate::Mode::Diagnostic)
//! - [`Invocation`]: the function's result and its display name
//! - [`DeclaredFn`] / [`declared_fn!`]: a function with its declared arity
//!
//! # Examples
//!
//! ```
//! use helper_curry::declared_fn;
//! use helper_curry::helper::{Application, HelperBuilder};
//!
//! let add_to = HelperBuilder::new(declared_fn!(|a: i64, b: i64, base: i64| base + a + b))
//!     .name("addTo")
//!     .namer(|base: Option<&i64>, label: &str| format!("{label}({})", base.copied().unwrap_or_default()))
//!     .build()
//!     .unwrap();
//!
//! let Application::Pending(partial) = add_to.call([1]) else { unreachable!() };
//! assert_eq!(partial.missing_parameter_count(), Some(1));
//! assert_eq!(partial.helper_name(), Some("addTo"));
//!
//! let invocation = partial.call([2]).call([100]).unwrap().into_ready().unwrap();
//! assert_eq!(invocation.value(), &103);
//! assert_eq!(invocation.display_name(), Some("addTo(100)"));
//! ```
//!
//! # Laws
//!
//! For a helper of arity `n`:
//!
//! - **Gating**: fewer than `n` accumulated arguments never run the function
//! - **Threshold**: the call that brings the total to `n` or more runs it
//!   exactly once with every argument in order
//! - **Missing count**: after `k < n` arguments,
//!   `missing_parameter_count == n - k - 1`
//!
//! [`declared_fn!`]: crate::declared_fn

mod accumulator;
mod declared;
mod definition;
mod diagnostics;
mod display_name;

pub use accumulator::{AlreadyInvokedError, Application, Invocation, Partial};
pub use declared::DeclaredFn;
pub use definition::{EntryPoint, HelperBuilder, create_helper};
pub use diagnostics::PartialDiagnostics;
pub use display_name::{
    DisplayNamer, FALLBACK_DISPLAY_NAME, HasDisplayName, SetDisplayName, wrap_display_name,
};

pub use crate::declared_fn;
