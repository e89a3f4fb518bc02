//! Helper construction and entry points.

use std::fmt;
use std::sync::Arc;

use super::accumulator::{self, Application};
use super::declared::DeclaredFn;
use super::display_name::{DisplayNamer, HasDisplayName, wrap_display_name};
use crate::config::Mode;
use crate::error::HelperError;

type SharedNamer<A> = Arc<dyn DisplayNamer<A> + Send + Sync>;

/// Everything a helper needs, fixed at construction and shared read-only by
/// every chain.
pub(crate) struct HelperDefinition<A, R> {
    pub(crate) function: DeclaredFn<A, R>,
    pub(crate) helper_name: Option<Arc<str>>,
    pub(crate) arity: usize,
    pub(crate) tag_result: bool,
    pub(crate) mode: Mode,
    pub(crate) namer: Option<SharedNamer<A>>,
}

impl<A, R> HelperDefinition<A, R> {
    /// Whether invocations derive a display name.
    pub(crate) fn tags_results(&self) -> bool {
        self.helper_name.is_some() && self.tag_result && self.mode.is_diagnostic()
    }

    pub(crate) fn display_name_for(&self, base: Option<&A>) -> Option<String> {
        if !self.tags_results() {
            return None;
        }
        let helper_name = self.helper_name.as_deref()?;
        let namer = self.namer.as_ref()?;
        Some(namer.derive_display_name(base, helper_name))
    }
}

/// Resolves the effective arity: a non-zero override wins, otherwise the
/// declared count. `None` and `Some(0)` behave the same.
pub(crate) const fn resolve_arity(declared: usize, arity_override: Option<usize>) -> usize {
    match arity_override {
        Some(arity) if arity != 0 => arity,
        _ => declared,
    }
}

/// Configures and builds an [`EntryPoint`].
///
/// Defaults: no name, the function's declared arity, result tagging on,
/// [`Mode::Diagnostic`], no display namer.
///
/// # Examples
///
/// ```rust
/// use helper_curry::declared_fn;
/// use helper_curry::helper::HelperBuilder;
///
/// let with_prefix = HelperBuilder::new(declared_fn!(|prefix: String, base: String| format!("{prefix}{base}")))
///     .name("withPrefix")
///     .wrap_display_name()
///     .build()
///     .unwrap();
///
/// let pending = with_prefix.call(["pre-".to_string()]);
/// assert_eq!(pending.diagnostics().map(|d| d.missing_parameter_count()), Some(0));
///
/// let invocation = pending.call(["Base".to_string()]).unwrap().into_ready().unwrap();
/// assert_eq!(invocation.value(), "pre-Base");
/// assert_eq!(invocation.display_name(), Some("withPrefix(Base)"));
/// ```
pub struct HelperBuilder<A, R> {
    function: DeclaredFn<A, R>,
    helper_name: Option<Arc<str>>,
    arity_override: Option<usize>,
    tag_result: bool,
    mode: Mode,
    namer: Option<SharedNamer<A>>,
}

impl<A, R> HelperBuilder<A, R> {
    /// Starts a builder around `function`.
    pub fn new(function: DeclaredFn<A, R>) -> Self {
        Self {
            function,
            helper_name: None,
            arity_override: None,
            tag_result: true,
            mode: Mode::default(),
            namer: None,
        }
    }

    /// Labels the helper.
    #[must_use]
    pub fn name(mut self, helper_name: impl Into<Arc<str>>) -> Self {
        self.helper_name = Some(helper_name.into());
        self
    }

    /// Overrides the declared arity. `None` and `Some(0)` keep the declared
    /// arity.
    #[must_use]
    pub fn arity(mut self, arity_override: impl Into<Option<usize>>) -> Self {
        self.arity_override = arity_override.into();
        self
    }

    /// Whether invocations derive a display name. On by default.
    #[must_use]
    pub const fn tag_result(mut self, tag_result: bool) -> Self {
        self.tag_result = tag_result;
        self
    }

    /// Selects diagnostic or production behavior.
    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the collaborator that derives display names.
    #[must_use]
    pub fn namer<N>(mut self, namer: N) -> Self
    where
        N: DisplayNamer<A> + Send + Sync + 'static,
    {
        self.namer = Some(Arc::new(namer));
        self
    }

    /// Uses [`wrap_display_name`] as the namer.
    #[must_use]
    pub fn wrap_display_name(self) -> Self
    where
        A: HasDisplayName + 'static,
    {
        self.namer(wrap_display_name::<A>)
    }

    /// Builds the entry point.
    ///
    /// # Errors
    ///
    /// Returns [`HelperError::MissingDisplayNamer`] when the helper is named,
    /// tags results and runs in diagnostic mode without a namer.
    ///
    /// Returns [`HelperError::ArityBelowDeclared`] when the function binds
    /// its parameters (see [`DeclaredFn::binding`]) and the arity override
    /// is below their count.
    pub fn build(self) -> Result<EntryPoint<A, R>, HelperError> {
        let declared = self.function.arity();
        let arity = resolve_arity(declared, self.arity_override);
        if self.function.binds_parameters() && arity < declared {
            tracing::warn!(
                helper = self.helper_name.as_deref().unwrap_or_default(),
                declared,
                requested = arity,
                "arity override is below the bound parameter count"
            );
            return Err(HelperError::ArityBelowDeclared {
                declared,
                requested: arity,
            });
        }
        if self.namer.is_none() && self.tag_result && self.mode.is_diagnostic() {
            if let Some(helper_name) = &self.helper_name {
                tracing::warn!(helper = %helper_name, "helper tags results but has no display namer");
                return Err(HelperError::MissingDisplayNamer {
                    helper_name: helper_name.to_string(),
                });
            }
        }
        Ok(self.into_entry_point(arity))
    }

    fn into_entry_point(self, arity: usize) -> EntryPoint<A, R> {
        EntryPoint {
            definition: Arc::new(HelperDefinition {
                function: self.function,
                helper_name: self.helper_name,
                arity,
                tag_result: self.tag_result,
                mode: self.mode,
                namer: self.namer,
            }),
        }
    }
}

impl<A, R> fmt::Debug for HelperBuilder<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HelperBuilder")
            .field("function", &self.function)
            .field("helper_name", &self.helper_name)
            .field("arity_override", &self.arity_override)
            .field("tag_result", &self.tag_result)
            .field("mode", &self.mode)
            .field("has_namer", &self.namer.is_some())
            .finish()
    }
}

/// Creates a diagnostic-mode helper.
///
/// `arity_override` replaces the declared arity when it is non-zero.
/// `tag_result` decides whether invocations derive a display name.
///
/// # Errors
///
/// Returns [`HelperError::ArityBelowDeclared`] under the same condition as
/// [`HelperBuilder::build`]. The namer is always present, so
/// [`HelperError::MissingDisplayNamer`] cannot occur.
///
/// # Examples
///
/// ```rust
/// use helper_curry::helper::{create_helper, wrap_display_name, DeclaredFn};
///
/// let join = create_helper(
///     DeclaredFn::new(2, |parts: Vec<&'static str>| parts.concat()),
///     Some("join"),
///     None,
///     true,
///     wrap_display_name::<&'static str>,
/// )
/// .unwrap();
///
/// let invocation = join.call(["a"]).call(["b"]).unwrap().into_ready().unwrap();
/// assert_eq!(invocation.value(), "ab");
/// assert_eq!(invocation.display_name(), Some("join(b)"));
/// ```
pub fn create_helper<A, R, N>(
    function: DeclaredFn<A, R>,
    helper_name: Option<&str>,
    arity_override: Option<usize>,
    tag_result: bool,
    namer: N,
) -> Result<EntryPoint<A, R>, HelperError>
where
    N: DisplayNamer<A> + Send + Sync + 'static,
{
    let mut builder = HelperBuilder::new(function)
        .arity(arity_override)
        .tag_result(tag_result)
        .namer(namer);
    builder.helper_name = helper_name.map(Arc::from);
    builder.build()
}

/// The callable face of a helper.
///
/// Every [`call`](Self::call) starts a new chain from no arguments; chains
/// never observe each other.
pub struct EntryPoint<A, R> {
    definition: Arc<HelperDefinition<A, R>>,
}

impl<A: Clone, R> EntryPoint<A, R> {
    /// Starts a chain with `arguments`.
    pub fn call<I>(&self, arguments: I) -> Application<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        accumulator::apply(&self.definition, &[], arguments)
    }

    /// Starts a chain with a single argument.
    pub fn call_one(&self, argument: A) -> Application<A, R> {
        self.call([argument])
    }
}

impl<A, R> EntryPoint<A, R> {
    /// The effective arity.
    #[inline]
    pub fn arity(&self) -> usize {
        self.definition.arity
    }

    /// The helper's label.
    #[inline]
    pub fn helper_name(&self) -> Option<&str> {
        self.definition.helper_name.as_deref()
    }

    /// The mode fixed at construction.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.definition.mode
    }

    /// Whether invocations derive a display name.
    #[inline]
    pub fn tags_results(&self) -> bool {
        self.definition.tags_results()
    }
}

impl<A, R> Clone for EntryPoint<A, R> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
        }
    }
}

impl<A, R> fmt::Debug for EntryPoint<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EntryPoint")
            .field("helper_name", &self.definition.helper_name)
            .field("arity", &self.definition.arity)
            .field("tag_result", &self.definition.tag_result)
            .field("mode", &self.definition.mode)
            .finish_non_exhaustive()
    }
}
