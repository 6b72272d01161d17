//! Adapters that turn a function returning a JavaScript-style completion into one
//! returning a container.
//!
//! A wrapped function has the shape `Fn(A) -> Result<Value, Value>`: `Ok` is the
//! return value and `Err` is a thrown value. `A` is the argument pack (a single value,
//! a tuple, a `Vec<Value>`...) and is passed through untouched.
//!
//! The two adapters are deliberately asymmetric. [`wrap_with_result`] catches throws
//! and turns them into data, while [`wrap_with_option`] lets them through, since an
//! option encodes absence and not failure.

use jsresult_log::{debug, span, warn, Level};

use crate::option::JsOption;
use crate::params::WrapParams;
use crate::result::JsResult;
use crate::value::error::ErrorObject;
use crate::value::Value;

pub fn wrap_with_result<A, F>(f: F) -> impl Fn(A) -> JsResult<Value, ErrorObject>
where
    F: Fn(A) -> Result<Value, Value>,
{
    wrap_with_result_params(WrapParams::default(), f)
}

/// Like [`wrap_with_result`], with explicit [`WrapParams`].
///
/// The completion of `f` is normalized as follows, in order:
/// - a thrown error object becomes `Err` of that same object, any other thrown value
///   becomes `Err` of a new error whose message is `String(thrown)`
/// - `undefined` becomes `Err("Function returned undefined")`
/// - `null` becomes `Err("Function returned null")`
/// - `NaN` becomes `Err("Function returned NaN")`
/// - `Infinity` and `-Infinity` become `Err("Function returned Infinity or -Infinity")`
/// - anything else becomes `Ok`
pub fn wrap_with_result_params<A, F>(params: WrapParams, f: F) -> impl Fn(A) -> JsResult<Value, ErrorObject>
where
    F: Fn(A) -> Result<Value, Value>,
{
    move |args| {
        let span = span!(Level::TRACE, "wrap_with_result", function = params.display_name());
        let res = normalize_completion(span.in_scope(|| f(args)));

        if let JsResult::Err(err) = &res {
            debug!("{} failed: {}", params.display_name(), err);
            if let Some(callback) = params.failure_callback() {
                callback(err);
            }
        }

        res
    }
}

pub fn wrap_with_option<A, F>(f: F) -> impl Fn(A) -> Result<JsOption<Value>, Value>
where
    F: Fn(A) -> Result<Value, Value>,
{
    wrap_with_option_params(WrapParams::default(), f)
}

/// Like [`wrap_with_option`], with explicit [`WrapParams`].
///
/// `undefined` and `null` become `None`, every other value becomes `Some`.
/// A value thrown by `f` is returned as the outer `Err`, unchanged.
pub fn wrap_with_option_params<A, F>(params: WrapParams, f: F) -> impl Fn(A) -> Result<JsOption<Value>, Value>
where
    F: Fn(A) -> Result<Value, Value>,
{
    move |args| {
        let span = span!(Level::TRACE, "wrap_with_option", function = params.display_name());
        let value = match span.in_scope(|| f(args)) {
            Ok(value) => value,
            Err(thrown) => {
                debug!("{} threw {}, propagating", params.display_name(), thrown);
                return Err(thrown);
            }
        };

        match JsOption::some(value) {
            Ok(opt) => Ok(opt),
            Err(_) => {
                debug!("{} returned a nullish value", params.display_name());
                Ok(JsOption::none())
            }
        }
    }
}

fn normalize_completion(completion: Result<Value, Value>) -> JsResult<Value, ErrorObject> {
    let value = match completion {
        Ok(value) => value,
        Err(thrown) => return JsResult::Err(thrown_to_error(thrown)),
    };

    match value {
        Value::Undefined => failure("Function returned undefined"),
        Value::Null => failure("Function returned null"),
        Value::Number(n) if n.is_nan() => failure("Function returned NaN"),
        Value::Number(n) if n.is_infinite() => failure("Function returned Infinity or -Infinity"),
        value => JsResult::Ok(value),
    }
}

fn failure(message: &str) -> JsResult<Value, ErrorObject> {
    JsResult::Err(ErrorObject::new(message))
}

fn thrown_to_error(thrown: Value) -> ErrorObject {
    if let Some(err) = thrown.as_error() {
        return err.clone();
    }

    warn!("thrown value {} is not an error object, coercing", thrown);
    ErrorObject::new(thrown.to_js_string())
}
