/// Either a computed value or an error, never both.
///
/// Unlike [`std::result::Result`], this type does not carry the full combinator
/// surface; it is the container produced by [`wrap_with_result`](crate::wrap_with_result).
/// Convert with `From`/`Into` when the std combinators are needed.
#[derive(Debug, Clone, PartialEq)]
pub enum JsResult<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> JsResult<T, E> {
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    pub fn err(error: E) -> Self {
        Self::Err(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the success payload, or raises the stored error as-is.
    pub fn unwrap(self) -> Result<T, E> {
        match self {
            Self::Ok(v) => Ok(v),
            Self::Err(e) => Err(e),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Err(_) => default,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> JsResult<U, E> {
        match self {
            Self::Ok(v) => JsResult::Ok(f(v)),
            Self::Err(e) => JsResult::Err(e),
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> JsResult<U, E>>(self, f: F) -> JsResult<U, E> {
        match self {
            Self::Ok(v) => f(v),
            Self::Err(e) => JsResult::Err(e),
        }
    }

    pub fn ok_value(&self) -> Option<&T> {
        match self {
            Self::Ok(v) => Some(v),
            Self::Err(_) => None,
        }
    }

    pub fn err_value(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(e) => Some(e),
        }
    }

    pub fn as_ref(&self) -> JsResult<&T, &E> {
        match self {
            Self::Ok(v) => JsResult::Ok(v),
            Self::Err(e) => JsResult::Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for JsResult<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Err(e),
        }
    }
}

impl<T, E> From<JsResult<T, E>> for Result<T, E> {
    fn from(value: JsResult<T, E>) -> Self {
        value.unwrap()
    }
}
