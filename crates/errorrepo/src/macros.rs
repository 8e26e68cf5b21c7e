//! Variadic construction macros

/// Build a `Vec<Arg>` from heterogeneous values
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}

/// Construct an error from the default registry in the current locale.
///
/// ```
/// let error = errorrepo::new_error!("ERR00004", "xyz");
/// assert_eq!(error.id(), "ERR00004");
/// ```
#[macro_export]
macro_rules! new_error {
    ($id:expr $(, $arg:expr)* $(,)?) => {
        $crate::new_error($id, &$crate::args!($($arg),*))
    };
}

/// Construct an error from the default registry in an explicit locale.
///
/// ```
/// let error = errorrepo::new_error_locale!("en", "ERR00004", "xyz");
/// assert_eq!(error.to_string(), "ERR00004: Test message xyz");
/// ```
#[macro_export]
macro_rules! new_error_locale {
    ($locale:expr, $id:expr $(, $arg:expr)* $(,)?) => {
        $crate::new_error_locale($locale, $id, &$crate::args!($($arg),*))
    };
}
