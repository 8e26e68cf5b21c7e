//! Positional template rendering
//!
//! Templates mark substitution points with `{N}`, where `N` is a single ASCII
//! digit. Arguments are consumed in the order the placeholders appear; the
//! digit itself does not select an argument, so `{1} {0}` renders the first
//! argument first. Indices above 9 (`{10}`) are not placeholders.
//!
//! Mismatched argument counts never fail:
//! - a placeholder without an argument is emitted unchanged, e.g. `{1}`
//! - arguments without a placeholder are appended as
//!   `%!(EXTRA string=par3, int=4)`

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A shareable error value carried as a cause
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// A single positional argument for a message template
#[derive(Debug, Clone)]
pub enum Arg {
    /// Text argument
    Str(String),
    /// Signed integer argument
    Int(i64),
    /// Unsigned integer argument
    UInt(u64),
    /// Floating point argument
    Float(f64),
    /// Boolean argument
    Bool(bool),
    /// Character argument
    Char(char),
    /// Any other displayable value, rendered eagerly
    Display {
        /// Rust type name of the original value
        type_name: &'static str,
        /// Rendered text of the value
        text: String,
    },
    /// An error value; as the last argument it becomes the cause
    Cause(SharedError),
}

impl Arg {
    /// Wrap an error as a cause argument
    pub fn cause<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Cause(Arc::new(error))
    }

    /// Wrap any displayable value
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Display {
            type_name: std::any::type_name::<T>(),
            text: value.to_string(),
        }
    }

    /// Type name used in the extra-argument marker
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float64",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Display { type_name, .. } => *type_name,
            Self::Cause(_) => "error",
        }
    }

    /// The wrapped error, if this argument is one
    pub fn as_cause(&self) -> Option<&SharedError> {
        match self {
            Self::Cause(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{}", value),
            Self::UInt(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Char(value) => write!(f, "{}", value),
            Self::Display { text, .. } => f.write_str(text),
            Self::Cause(error) => write!(f, "{}", error),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<SharedError> for Arg {
    fn from(value: SharedError) -> Self {
        Self::Cause(value)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Arg {
    fn from(value: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::Cause(Arc::from(value))
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty; $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $wide)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64; i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64; u8, u16, u32, u64, usize);

/// Render `template` with `args` substituted positionally.
///
/// With no arguments the template is returned untouched, placeholders included.
pub fn render(template: &str, args: &[Arg]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut pending = args.iter();
    let mut copied = 0;
    let mut pos = 0;

    while pos + 2 < bytes.len() {
        if is_placeholder(&bytes[pos..pos + 3]) {
            out.push_str(&template[copied..pos]);
            match pending.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str(&template[pos..pos + 3]),
            }
            pos += 3;
            copied = pos;
        } else {
            pos += 1;
        }
    }
    out.push_str(&template[copied..]);

    let extra: Vec<String> = pending
        .map(|arg| format!("{}={}", arg.type_name(), arg))
        .collect();
    if !extra.is_empty() {
        out.push_str("%!(EXTRA ");
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

fn is_placeholder(window: &[u8]) -> bool {
    matches!(window, [b'{', digit, b'}'] if digit.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_returns_template() {
        assert_eq!(render("abc", &[]), "abc");
        assert_eq!(render("keep {0} and %v", &[]), "keep {0} and %v");
    }

    #[test]
    fn test_positional_substitution() {
        assert_eq!(
            render("bcd {0} {1}", &[Arg::from("a"), Arg::from(1)]),
            "bcd a 1"
        );
    }

    #[test]
    fn test_digit_is_ignored() {
        assert_eq!(
            render("{1} before {0}", &[Arg::from("first"), Arg::from("second")]),
            "first before second"
        );
        assert_eq!(render("{7}{7}", &[Arg::from("x"), Arg::from("y")]), "xy");
    }

    #[test]
    fn test_extra_arguments_marker() {
        assert_eq!(
            render(
                "abc dfdjfdkj {0} {1}",
                &[Arg::from("par1"), Arg::from("par2"), Arg::from("par3")]
            ),
            "abc dfdjfdkj par1 par2%!(EXTRA string=par3)"
        );
        assert_eq!(
            render("plain", &[Arg::from("x"), Arg::from(4), Arg::from(true)]),
            "plain%!(EXTRA string=x, int=4, bool=true)"
        );
    }

    #[test]
    fn test_missing_arguments_stay_unsubstituted() {
        assert_eq!(
            render("{0} and {1} and {2}", &[Arg::from("one")]),
            "one and {1} and {2}"
        );
    }

    #[test]
    fn test_multi_digit_is_not_a_placeholder() {
        assert_eq!(render("{10} {0}", &[Arg::from("x")]), "{10} x");
    }

    #[test]
    fn test_percent_is_literal() {
        assert_eq!(render("100% {0}", &[Arg::from("done")]), "100% done");
    }

    #[test]
    fn test_nested_braces_and_unicode() {
        assert_eq!(render("{{0}}", &[Arg::from("v")]), "{v}");
        assert_eq!(render("Öffnen: {0} ✓", &[Arg::from("db")]), "Öffnen: db ✓");
        assert_eq!(render("end {", &[Arg::from("v")]), "end {%!(EXTRA string=v)");
    }

    #[test]
    fn test_cause_renders_through_display() {
        let cause = Arg::cause(std::io::Error::other("abc"));
        assert_eq!(render("Error db open: {0}", &[cause]), "Error db open: abc");
    }

    struct Port(u16);

    impl fmt::Display for Port {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, ":{}", self.0)
        }
    }

    #[test]
    fn test_arg_type_names() {
        assert_eq!(Arg::from(-3i8).type_name(), "int");
        assert_eq!(Arg::from(3usize).type_name(), "uint");
        assert_eq!(Arg::from(1.5f32).type_name(), "float64");
        assert_eq!(Arg::from('c').type_name(), "char");

        let port = Arg::display(&Port(8080));
        assert_eq!(port.to_string(), ":8080");
        assert!(port.type_name().ends_with("Port"));
        let marker = format!("x%!(EXTRA {}=:8080)", port.type_name());
        assert_eq!(render("{0}", &[Arg::from("x"), port]), marker);
    }
}
