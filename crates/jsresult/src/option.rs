use crate::error::Error;
use crate::value::Nullish;

/// A present value or nothing.
///
/// [`JsOption::some`] and [`JsOption::none`] are the only constructors, so a present
/// payload is never nullish.
#[derive(Debug, Clone, PartialEq)]
pub struct JsOption<T>(Option<T>);

impl<T> JsOption<T> {
    pub fn some(value: T) -> Result<Self, Error>
    where
        T: Nullish,
    {
        if value.is_nullish() {
            return Err(Error::InvalidConstruction);
        }

        Ok(Self(Some(value)))
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    pub fn unwrap(self) -> Result<T, Error> {
        match self.0 {
            Some(v) => Ok(v),
            None => Err(Error::UnwrapOnNone),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self.0 {
            Some(v) => v,
            None => default,
        }
    }

    /// Applies `f` to the payload and wraps the result with [`JsOption::some`],
    /// which fails if `f` produced a nullish value. `f` is not called on `None`.
    pub fn map<U: Nullish, F: FnOnce(T) -> U>(self, f: F) -> Result<JsOption<U>, Error> {
        match self.0 {
            Some(v) => JsOption::some(f(v)),
            None => Ok(JsOption::none()),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> JsOption<U>>(self, f: F) -> JsOption<U> {
        match self.0 {
            Some(v) => f(v),
            None => JsOption::none(),
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn as_ref(&self) -> JsOption<&T> {
        JsOption(self.0.as_ref())
    }
}

impl<T> From<JsOption<T>> for Option<T> {
    fn from(value: JsOption<T>) -> Self {
        value.0
    }
}

impl<T: Nullish> TryFrom<Option<T>> for JsOption<T> {
    type Error = Error;

    fn try_from(value: Option<T>) -> Result<Self, Self::Error> {
        match value {
            Some(v) => Self::some(v),
            None => Ok(Self::none()),
        }
    }
}
