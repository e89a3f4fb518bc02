//! Functions paired with their declared parameter count.
//!
//! A curried helper needs to know how many arguments the wrapped function
//! expects. Closures carry no such metadata at runtime, so the count travels
//! with the function in a [`DeclaredFn`]. The [`declared_fn!`] macro counts
//! the parameters of a closure literal and unpacks the accumulated argument
//! list into them.
//!
//! [`declared_fn!`]: crate::declared_fn

use std::fmt;
use std::sync::Arc;

/// A function over an argument list together with its declared arity.
///
/// The function always receives every accumulated argument, including any
/// supplied beyond the declared arity.
///
/// # Examples
///
/// ```
/// use helper_curry::helper::DeclaredFn;
///
/// let sum = DeclaredFn::new(2, |arguments: Vec<i32>| arguments.iter().sum::<i32>());
/// assert_eq!(sum.arity(), 2);
/// assert_eq!(sum.invoke(vec![1, 2, 3]), 6);
/// ```
pub struct DeclaredFn<A, R> {
    arity: usize,
    binds_parameters: bool,
    function: Arc<dyn Fn(Vec<A>) -> R + Send + Sync>,
}

impl<A, R> DeclaredFn<A, R> {
    /// Pairs `function` with its declared parameter count.
    ///
    /// An arity of `0` is accepted; a helper built from it invokes on the
    /// first call with whatever arguments that call supplies.
    pub fn new<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<A>) -> R + Send + Sync + 'static,
    {
        Self {
            arity,
            binds_parameters: false,
            function: Arc::new(function),
        }
    }

    /// Like [`new`](Self::new), for a function that unpacks its first
    /// `arity` arguments into parameters and cannot run with fewer.
    ///
    /// Helpers built from it reject an arity override below `arity`.
    /// [`declared_fn!`](crate::declared_fn) uses this constructor.
    pub fn binding<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<A>) -> R + Send + Sync + 'static,
    {
        Self {
            binds_parameters: true,
            ..Self::new(arity, function)
        }
    }

    /// The declared parameter count.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Whether the function needs at least [`arity`](Self::arity)
    /// arguments to run.
    #[inline]
    pub const fn binds_parameters(&self) -> bool {
        self.binds_parameters
    }

    /// Calls the function with `arguments`.
    #[inline]
    pub fn invoke(&self, arguments: Vec<A>) -> R {
        (self.function)(arguments)
    }
}

impl<A, R> Clone for DeclaredFn<A, R> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            binds_parameters: self.binds_parameters,
            function: Arc::clone(&self.function),
        }
    }
}

impl<A, R> fmt::Debug for DeclaredFn<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DeclaredFn")
            .field("arity", &self.arity)
            .field("binds_parameters", &self.binds_parameters)
            .finish_non_exhaustive()
    }
}

/// Builds a [`DeclaredFn`] from a closure literal, counting its parameters.
///
/// Each parameter is bound, in order, to the next accumulated argument.
/// Arguments beyond the parameter list are passed in but left unbound.
/// A parameter is an identifier, `mut` followed by an identifier, `_`, or a
/// single bracketed pattern such as `(x, y)`, each with an optional type.
///
/// The result is built with [`DeclaredFn::binding`], so a helper built
/// from it refuses an arity override below the parameter count.
///
/// # Panics
///
/// The generated function panics if [`DeclaredFn::invoke`] is called
/// directly with fewer arguments than it has parameters.
///
/// # Examples
///
/// ```
/// use helper_curry::declared_fn;
///
/// let volume = declared_fn!(|width: u32, height: u32, depth: u32| width * height * depth);
/// assert_eq!(volume.arity(), 3);
/// assert_eq!(volume.invoke(vec![2, 3, 4]), 24);
///
/// // Extra arguments are forwarded but ignored by the closure body.
/// assert_eq!(volume.invoke(vec![2, 3, 4, 100]), 24);
/// ```
///
/// Closures without parameters declare an arity of zero:
///
/// ```
/// use helper_curry::declared_fn;
///
/// let answer = declared_fn!(|| 42);
/// assert_eq!(answer.arity(), 0);
/// assert_eq!(answer.invoke(Vec::<()>::new()), 42);
/// ```
///
/// Patterns count like any other parameter:
///
/// ```
/// use helper_curry::declared_fn;
///
/// let shift = declared_fn!(|_, mut point: (i32, i32), (dx, dy)| {
///     point.0 += dx;
///     point.1 += dy;
///     point
/// });
/// assert_eq!(shift.arity(), 3);
/// assert_eq!(shift.invoke(vec![(0, 0), (1, 1), (2, 3)]), (3, 4));
/// ```
#[macro_export]
macro_rules! declared_fn {
    (|| $body:expr) => {
        $crate::helper::DeclaredFn::new(0, move |_arguments: ::std::vec::Vec<_>| $body)
    };
    (| $($rest:tt)+) => {
        $crate::declared_fn!(@split [] $($rest)+)
    };
    (@split [$($parameters:tt)*] | $body:expr) => {
        $crate::helper::DeclaredFn::binding(
            $crate::declared_fn!(@count $($parameters)*),
            move |arguments: ::std::vec::Vec<_>| {
                let mut arguments = arguments.into_iter();
                $crate::declared_fn!(@bind arguments; $($parameters)*);
                $body
            },
        )
    };
    (@split [$($parameters:tt)*] $next:tt $($rest:tt)*) => {
        $crate::declared_fn!(@split [$($parameters)* $next] $($rest)*)
    };
    (@count) => { 0usize };
    (@count mut $name:ident $(: $parameter_type:ty)? $(, $($rest:tt)*)?) => {
        1usize + $crate::declared_fn!(@count $($($rest)*)?)
    };
    (@count $pattern:tt $(: $parameter_type:ty)? $(, $($rest:tt)*)?) => {
        1usize + $crate::declared_fn!(@count $($($rest)*)?)
    };
    (@bind $arguments:ident;) => {};
    (@bind $arguments:ident; mut $name:ident $(: $parameter_type:ty)? $(, $($rest:tt)*)?) => {
        let mut $name $(: $parameter_type)? = $crate::declared_fn!(@next $arguments, mut $name);
        $crate::declared_fn!(@bind $arguments; $($($rest)*)?);
    };
    (@bind $arguments:ident; $pattern:tt $(: $parameter_type:ty)? $(, $($rest:tt)*)?) => {
        let $pattern $(: $parameter_type)? = $crate::declared_fn!(@next $arguments, $pattern);
        $crate::declared_fn!(@bind $arguments; $($($rest)*)?);
    };
    (@next $arguments:ident, $($pattern:tt)+) => {
        $arguments.next().expect(concat!(
            "declared_fn!: no argument supplied for `",
            stringify!($($pattern)+),
            "`"
        ))
    };
}

#[cfg(test)]
mod tests {
    use super::DeclaredFn;

    #[test]
    fn test_declared_fn_reports_arity() {
        let function = DeclaredFn::new(3, |arguments: Vec<i32>| arguments.len());
        assert_eq!(function.arity(), 3);
    }

    #[test]
    fn test_declared_fn_forwards_all_arguments() {
        let function = DeclaredFn::new(1, |arguments: Vec<i32>| arguments);
        assert_eq!(function.invoke(vec![1, 2, 3]), vec![1, 2, 3]);
    }

    #[test]
    fn test_declared_fn_clone_shares_function() {
        let function = DeclaredFn::new(2, |arguments: Vec<i32>| arguments.iter().product::<i32>());
        let cloned = function.clone();
        assert_eq!(cloned.arity(), 2);
        assert_eq!(cloned.invoke(vec![3, 4]), function.invoke(vec![3, 4]));
    }

    #[test]
    fn test_declared_fn_macro_counts_parameters() {
        let function = declared_fn!(|first: i32, second: i32| first - second);
        assert_eq!(function.arity(), 2);
        assert_eq!(function.invoke(vec![10, 4]), 6);
    }

    #[test]
    fn test_declared_fn_macro_untyped_parameters() {
        let function = declared_fn!(|first, second| (second, first));
        assert_eq!(function.arity(), 2);
        assert_eq!(function.invoke(vec!["a", "b"]), ("b", "a"));
    }

    #[test]
    fn test_declared_fn_macro_zero_parameters() {
        let function = declared_fn!(|| "constant");
        assert_eq!(function.arity(), 0);
        assert_eq!(function.invoke(vec![1, 2]), "constant");
    }

    #[test]
    #[should_panic(expected = "no argument supplied for `second`")]
    fn test_declared_fn_macro_panics_on_short_argument_list() {
        let function = declared_fn!(|first: i32, second: i32| first + second);
        let _ = function.invoke(vec![1]);
    }

    #[test]
    fn test_declared_fn_macro_wildcard_and_mut_parameters() {
        let function = declared_fn!(|_, mut total: i32, step: i32| {
            total += step;
            total
        });
        assert_eq!(function.arity(), 3);
        assert_eq!(function.invoke(vec![100, 1, 2]), 3);
    }

    #[test]
    fn test_declared_fn_macro_tuple_pattern_parameters() {
        let function = declared_fn!(|(left, _): (i32, i32), (_, right): (i32, i32),| left * right);
        assert_eq!(function.arity(), 2);
        assert_eq!(function.invoke(vec![(3, 0), (0, 5)]), 15);
    }

    #[test]
    fn test_declared_fn_macro_generic_parameter_types() {
        let function = declared_fn!(|first: Vec<u8>, second: Vec<u8>| [first, second].concat());
        assert_eq!(function.arity(), 2);
        assert_eq!(function.invoke(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    }

    #[test]
    fn test_binds_parameters_flag() {
        assert!(!DeclaredFn::new(2, |arguments: Vec<i32>| arguments.len()).binds_parameters());
        assert!(DeclaredFn::binding(2, |arguments: Vec<i32>| arguments.len()).binds_parameters());
        assert!(declared_fn!(|first: i32| first).binds_parameters());
        let constant: DeclaredFn<i32, i32> = declared_fn!(|| 0);
        assert!(!constant.binds_parameters());
        assert!(declared_fn!(|first: i32| first).clone().binds_parameters());
    }

    #[test]
    fn test_declared_fn_debug_shows_arity() {
        let function = DeclaredFn::new(4, |_: Vec<u8>| ());
        assert!(format!("{function:?}").contains("arity: 4"));
    }
}
