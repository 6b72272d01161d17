pub mod error;

use std::fmt;
use std::rc::Rc;

use crate::util::format_f64;

use self::error::ErrorObject;

/// A JavaScript-like value, as returned or thrown by the functions the adapters wrap.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The number type
    Number(f64),
    /// The boolean type
    Boolean(bool),
    /// The string type
    String(Rc<str>),
    /// The undefined type
    Undefined,
    /// The null type
    Null,
    /// An error object
    Error(ErrorObject),
}

impl Value {
    pub fn undefined() -> Value {
        Value::Undefined
    }

    pub fn null() -> Value {
        Value::Null
    }

    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    pub fn string<S: Into<Rc<str>>>(s: S) -> Value {
        Value::String(s.into())
    }

    pub fn error<S: Into<Rc<str>>>(message: S) -> Value {
        Value::Error(ErrorObject::new(message))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn as_error(&self) -> Option<&ErrorObject> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn type_of(&self) -> Typeof {
        match self {
            Self::Number(_) => Typeof::Number,
            Self::Boolean(_) => Typeof::Boolean,
            Self::String(_) => Typeof::String,
            Self::Undefined => Typeof::Undefined,
            Self::Null | Self::Error(_) => Typeof::Object,
        }
    }

    /// Converts the value to a string, like `String(value)`.
    pub fn to_js_string(&self) -> Rc<str> {
        match self {
            Self::Number(n) => format_f64(*n).into(),
            Self::Boolean(true) => "true".into(),
            Self::Boolean(false) => "false".into(),
            Self::String(s) => s.clone(),
            Self::Undefined => "undefined".into(),
            Self::Null => "null".into(),
            Self::Error(e) => e.to_string().into(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<ErrorObject> for Value {
    fn from(e: ErrorObject) -> Self {
        Value::Error(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typeof {
    Undefined,
    Object,
    Boolean,
    Number,
    String,
}

impl Typeof {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

/// Decides whether a payload counts as "no value" (`undefined` or `null`).
///
/// [`JsOption::some`](crate::JsOption::some) refuses to wrap a nullish payload.
/// Note that `NaN`, `0`, `false` and the empty string are all present values.
pub trait Nullish {
    fn is_nullish(&self) -> bool;
}

impl Nullish for Value {
    fn is_nullish(&self) -> bool {
        Value::is_nullish(self)
    }
}

impl<T: Nullish> Nullish for Option<T> {
    fn is_nullish(&self) -> bool {
        match self {
            Some(v) => v.is_nullish(),
            None => true,
        }
    }
}

impl<T: Nullish + ?Sized> Nullish for &T {
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

macro_rules! never_nullish {
    ($($ty:ty),*) => {
        $(
            impl Nullish for $ty {
                fn is_nullish(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nullish!(
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    bool,
    char,
    (),
    str,
    String,
    Rc<str>,
    ErrorObject
);

impl<T> Nullish for Vec<T> {
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullish for Box<T> {
    fn is_nullish(&self) -> bool {
        false
    }
}
