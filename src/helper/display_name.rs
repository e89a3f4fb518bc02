//! Display names for values produced by curried helpers.
//!
//! When a helper with a name finishes accumulating, the produced value is
//! labelled after the helper and its base value (the last required
//! argument), for example `withTheme(Button)`.
//!
//! - [`DisplayNamer`]: the naming collaborator a helper calls
//! - [`HasDisplayName`]: values that can report their own name
//! - [`SetDisplayName`]: values that can carry a name written into them
//! - [`wrap_display_name`]: the default `label(base)` namer

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Name used when the base value is absent or has no name of its own.
pub const FALLBACK_DISPLAY_NAME: &str = "Component";

/// Derives a display name from a helper's base value and label.
///
/// `base` is `None` only for helpers whose arity resolved to zero, where no
/// argument position is the base.
///
/// Implemented for every `Fn(Option<&A>, &str) -> String`.
///
/// # Examples
///
/// ```
/// use helper_curry::helper::DisplayNamer;
///
/// let namer = |base: Option<&i32>, label: &str| format!("{label}<{}>", base.copied().unwrap_or_default());
/// assert_eq!(namer.derive_display_name(Some(&7), "withSeven"), "withSeven<7>");
/// ```
pub trait DisplayNamer<A> {
    /// Returns the display name for a value built around `base` by the
    /// helper labelled `label`.
    fn derive_display_name(&self, base: Option<&A>, label: &str) -> String;
}

impl<A, F> DisplayNamer<A> for F
where
    F: Fn(Option<&A>, &str) -> String,
{
    #[inline]
    fn derive_display_name(&self, base: Option<&A>, label: &str) -> String {
        self(base, label)
    }
}

/// A value that can report a human-readable name for itself.
///
/// Strings name themselves, so a helper whose base value is a string
/// produces `label(that string)`.
pub trait HasDisplayName {
    /// The value's own name, if it has one.
    fn display_name(&self) -> Option<Cow<'_, str>>;
}

impl HasDisplayName for str {
    fn display_name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl HasDisplayName for String {
    fn display_name(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: HasDisplayName + ?Sized> HasDisplayName for &T {
    fn display_name(&self) -> Option<Cow<'_, str>> {
        (**self).display_name()
    }
}

impl<T: HasDisplayName + ?Sized> HasDisplayName for Box<T> {
    fn display_name(&self) -> Option<Cow<'_, str>> {
        (**self).display_name()
    }
}

impl<T: HasDisplayName + ?Sized> HasDisplayName for Rc<T> {
    fn display_name(&self) -> Option<Cow<'_, str>> {
        (**self).display_name()
    }
}

impl<T: HasDisplayName + ?Sized> HasDisplayName for Arc<T> {
    fn display_name(&self) -> Option<Cow<'_, str>> {
        (**self).display_name()
    }
}

impl<T: HasDisplayName> HasDisplayName for Option<T> {
    fn display_name(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|value| value.display_name())
    }
}

/// A value that can carry a display name written into it.
///
/// Used by [`Invocation::into_tagged`](super::Invocation::into_tagged) to
/// store a derived name on the produced value itself.
pub trait SetDisplayName {
    /// Replaces the value's display name.
    fn set_display_name(&mut self, display_name: String);
}

/// The default namer: `label(base name)`.
///
/// Falls back to [`FALLBACK_DISPLAY_NAME`] when the base value is absent or
/// reports no name.
///
/// # Examples
///
/// ```
/// use helper_curry::helper::wrap_display_name;
///
/// assert_eq!(wrap_display_name(Some("Button"), "withTheme"), "withTheme(Button)");
/// assert_eq!(wrap_display_name::<str>(None, "withTheme"), "withTheme(Component)");
/// ```
pub fn wrap_display_name<A: HasDisplayName + ?Sized>(base: Option<&A>, label: &str) -> String {
    let base_name = base
        .and_then(|value| value.display_name())
        .unwrap_or(Cow::Borrowed(FALLBACK_DISPLAY_NAME));
    format!("{label}({base_name})")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Anonymous;

    impl HasDisplayName for Anonymous {
        fn display_name(&self) -> Option<Cow<'_, str>> {
            None
        }
    }

    #[test]
    fn test_wrap_display_name_uses_base_name() {
        assert_eq!(
            wrap_display_name(Some(&String::from("List")), "withItems"),
            "withItems(List)"
        );
    }

    #[test]
    fn test_wrap_display_name_falls_back_for_unnamed_value() {
        assert_eq!(
            wrap_display_name(Some(&Anonymous), "pure"),
            "pure(Component)"
        );
    }

    #[test]
    fn test_wrap_display_name_falls_back_for_missing_base() {
        assert_eq!(
            wrap_display_name::<Anonymous>(None, "pure"),
            "pure(Component)"
        );
    }

    #[test]
    fn test_empty_string_names_itself() {
        assert_eq!(wrap_display_name(Some(""), "withEmpty"), "withEmpty()");
    }

    #[test]
    fn test_smart_pointers_delegate() {
        let shared: Arc<str> = Arc::from("Card");
        let boxed: Box<str> = Box::from("Panel");
        assert_eq!(wrap_display_name(Some(&shared), "a"), "a(Card)");
        assert_eq!(wrap_display_name(Some(&boxed), "b"), "b(Panel)");
    }

    #[test]
    fn test_option_without_value_has_no_name() {
        let absent: Option<String> = None;
        assert!(absent.display_name().is_none());
    }

    #[test]
    fn test_closure_is_a_namer() {
        let namer = |base: Option<&u8>, label: &str| format!("{label}#{}", base.map_or(0, |value| *value));
        assert_eq!(namer.derive_display_name(Some(&3), "slot"), "slot#3");
        assert_eq!(namer.derive_display_name(None, "slot"), "slot#0");
    }

    #[test]
    fn test_function_item_is_a_namer() {
        fn assert_namer<A, N: DisplayNamer<A>>(namer: &N, base: &A) -> String {
            namer.derive_display_name(Some(base), "wrapped")
        }
        let name = assert_namer(&wrap_display_name::<String>, &String::from("Base"));
        assert_eq!(name, "wrapped(Base)");
    }
}
