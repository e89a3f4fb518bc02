//! Argument accumulation for curried helpers.
//!
//! Every call folds new arguments into those already collected by its
//! chain. While fewer than `arity` arguments are present the result is a
//! [`Partial`] that can be called again; once `arity` is reached the wrapped
//! function runs with every collected argument and the result is an
//! [`Invocation`].
//!
//! ```text
//! apply(previous, next):
//!     arguments = previous ++ next
//!     |arguments| <  arity  =>  Pending(partial over arguments)
//!     |arguments| >= arity  =>  Ready(function(arguments))
//! ```

use std::fmt;
use std::sync::Arc;

use super::definition::HelperDefinition;
use super::diagnostics::{self, PartialDiagnostics};
use super::display_name::SetDisplayName;
use crate::error::HelperError;

/// The outcome of applying arguments to a helper.
#[derive(Debug, Clone)]
pub enum Application<A, R> {
    /// Not enough arguments yet.
    Pending(Partial<A, R>),
    /// The function ran.
    Ready(Invocation<R>),
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the function ran.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns `true` if more arguments are needed.
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The invocation, if the function ran.
    pub fn into_ready(self) -> Option<Invocation<R>> {
        match self {
            Self::Ready(invocation) => Some(invocation),
            Self::Pending(_) => None,
        }
    }

    /// The partial, if more arguments are needed.
    pub fn into_pending(self) -> Option<Partial<A, R>> {
        match self {
            Self::Pending(partial) => Some(partial),
            Self::Ready(_) => None,
        }
    }

    /// Borrows the partial, if more arguments are needed.
    pub const fn as_pending(&self) -> Option<&Partial<A, R>> {
        match self {
            Self::Pending(partial) => Some(partial),
            Self::Ready(_) => None,
        }
    }

    /// Borrows the invocation, if the function ran.
    pub const fn as_ready(&self) -> Option<&Invocation<R>> {
        match self {
            Self::Ready(invocation) => Some(invocation),
            Self::Pending(_) => None,
        }
    }

    /// The function's return value, discarding any display name.
    pub fn ready_value(self) -> Option<R> {
        self.into_ready().map(Invocation::into_value)
    }

    /// Metadata of a pending partial in diagnostic mode.
    pub fn diagnostics(&self) -> Option<&PartialDiagnostics> {
        self.as_pending().and_then(Partial::diagnostics)
    }
}

impl<A: Clone, R> Application<A, R> {
    /// Continues a pending chain with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns an [`AlreadyInvokedError`] if the function already ran. The
    /// error hands the invocation back through
    /// [`into_invocation`](AlreadyInvokedError::into_invocation) and
    /// converts into [`HelperError::AlreadyInvoked`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use helper_curry::helper::{DeclaredFn, HelperBuilder};
    ///
    /// let add = HelperBuilder::new(DeclaredFn::new(2, |arguments: Vec<i32>| arguments[0] + arguments[1]))
    ///     .build()
    ///     .unwrap();
    ///
    /// let sum = add.call([1]).call([2]).unwrap();
    /// assert_eq!(sum.ready_value(), Some(3));
    ///
    /// let rejected = add.call([1, 2]).call([3]).unwrap_err();
    /// assert_eq!(rejected.into_invocation().into_value(), 3);
    /// ```
    pub fn call<I>(self, arguments: I) -> Result<Self, AlreadyInvokedError<R>>
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Pending(partial) => Ok(partial.call(arguments)),
            Self::Ready(invocation) => Err(AlreadyInvokedError { invocation }),
        }
    }
}

/// Arguments applied to an [`Application`] whose function already ran.
///
/// The rejected call leaves the invocation intact; take it back with
/// [`into_invocation`](Self::into_invocation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlreadyInvokedError<R> {
    invocation: Invocation<R>,
}

impl<R> AlreadyInvokedError<R> {
    /// The invocation that refused the arguments.
    #[inline]
    pub const fn invocation(&self) -> &Invocation<R> {
        &self.invocation
    }

    /// Recovers the invocation.
    #[inline]
    pub fn into_invocation(self) -> Invocation<R> {
        self.invocation
    }

    /// The same failure without the invocation.
    pub fn to_helper_error(&self) -> HelperError {
        HelperError::AlreadyInvoked {
            helper_name: self.invocation.helper_name().map(str::to_string),
        }
    }
}

impl<R> fmt::Display for AlreadyInvokedError<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_helper_error(), formatter)
    }
}

impl<R: fmt::Debug> std::error::Error for AlreadyInvokedError<R> {}

impl<R> From<AlreadyInvokedError<R>> for HelperError {
    fn from(error: AlreadyInvokedError<R>) -> Self {
        error.to_helper_error()
    }
}

/// A partially applied helper.
///
/// Calling it never mutates it: each call extends a copy of the collected
/// arguments, so one partial can seed any number of independent chains.
pub struct Partial<A, R> {
    definition: Arc<HelperDefinition<A, R>>,
    arguments: Arc<[A]>,
    diagnostics: Option<PartialDiagnostics>,
}

impl<A: Clone, R> Partial<A, R> {
    /// Applies further arguments on top of the ones already collected.
    pub fn call<I>(&self, arguments: I) -> Application<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        apply(&self.definition, &self.arguments, arguments)
    }

    /// Applies a single further argument.
    pub fn call_one(&self, argument: A) -> Application<A, R> {
        self.call([argument])
    }
}

impl<A, R> Partial<A, R> {
    /// The arguments collected so far, in the order supplied.
    #[inline]
    pub fn accumulated_arguments(&self) -> &[A] {
        &self.arguments
    }

    /// The effective arity of the helper.
    #[inline]
    pub fn arity(&self) -> usize {
        self.definition.arity
    }

    /// Metadata attached in diagnostic mode.
    #[inline]
    pub const fn diagnostics(&self) -> Option<&PartialDiagnostics> {
        self.diagnostics.as_ref()
    }

    /// `arity - accumulated - 1`, in diagnostic mode.
    pub fn missing_parameter_count(&self) -> Option<usize> {
        self.diagnostics
            .as_ref()
            .map(PartialDiagnostics::missing_parameter_count)
    }

    /// The helper's label, in diagnostic mode.
    pub fn helper_name(&self) -> Option<&str> {
        self.diagnostics
            .as_ref()
            .and_then(PartialDiagnostics::helper_name)
    }
}

impl<A, R> Clone for Partial<A, R> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
            arguments: Arc::clone(&self.arguments),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Partial<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("arity", &self.definition.arity)
            .field("arguments", &self.arguments)
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

/// The result of running a helper's function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<R> {
    value: R,
    display_name: Option<String>,
    helper_name: Option<Arc<str>>,
}

impl<R> Invocation<R> {
    /// The function's return value.
    #[inline]
    pub const fn value(&self) -> &R {
        &self.value
    }

    /// The derived display name, when the helper is named, tags results and
    /// runs in diagnostic mode.
    #[inline]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The label of the helper that produced the value.
    #[inline]
    pub fn helper_name(&self) -> Option<&str> {
        self.helper_name.as_deref()
    }

    /// Discards the display name.
    #[inline]
    pub fn into_value(self) -> R {
        self.value
    }

    /// Splits into the value and its display name.
    #[inline]
    pub fn into_parts(self) -> (R, Option<String>) {
        (self.value, self.display_name)
    }

    /// Writes the display name, if any, into the value itself.
    ///
    /// The value's existing name is left alone when no display name was
    /// derived.
    pub fn into_tagged(self) -> R
    where
        R: SetDisplayName,
    {
        let mut value = self.value;
        if let Some(display_name) = self.display_name {
            value.set_display_name(display_name);
        }
        value
    }
}

/// Folds `next` into `previous` and either builds a partial or invokes.
pub(crate) fn apply<A, R, I>(
    definition: &Arc<HelperDefinition<A, R>>,
    previous: &[A],
    next: I,
) -> Application<A, R>
where
    A: Clone,
    I: IntoIterator<Item = A>,
{
    let mut arguments = previous.to_vec();
    arguments.extend(next);
    let arguments_length = arguments.len();

    if arguments_length < definition.arity {
        tracing::trace!(
            helper = definition.helper_name.as_deref().unwrap_or_default(),
            arguments_length,
            arity = definition.arity,
            "helper partially applied"
        );
        return Application::Pending(Partial {
            diagnostics: diagnostics::tag(definition, arguments_length),
            definition: Arc::clone(definition),
            arguments: Arc::from(arguments),
        });
    }

    let base = if definition.tags_results() {
        definition
            .arity
            .checked_sub(1)
            .and_then(|index| arguments.get(index))
            .cloned()
    } else {
        None
    };

    tracing::debug!(
        helper = definition.helper_name.as_deref().unwrap_or_default(),
        arguments_length,
        arity = definition.arity,
        "invoking helper"
    );
    let value = definition.function.invoke(arguments);
    let display_name = definition.display_name_for(base.as_ref());

    Application::Ready(Invocation {
        value,
        display_name,
        helper_name: definition.helper_name.clone(),
    })
}
