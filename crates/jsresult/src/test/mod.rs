use std::cell::Cell;

use crate::error::Error;
use crate::option::JsOption;
use crate::result::JsResult;
use crate::value::error::ErrorObject;
use crate::value::Value;
use crate::wrap::{wrap_with_option, wrap_with_result};

fn sample_values() -> Vec<Value> {
    vec![
        Value::from(0),
        Value::from(42),
        Value::from(-3.25),
        Value::from(f64::NAN),
        Value::from(true),
        Value::from(""),
        Value::from("hello"),
        Value::error("e"),
    ]
}

#[test]
fn ok_is_ok() {
    for v in sample_values() {
        let res = JsResult::<_, ErrorObject>::ok(v);
        assert!(res.is_ok());
        assert!(!res.is_err());
    }
}

#[test]
fn err_unwrap_raises_exactly_the_error() {
    let e = ErrorObject::new("boom");
    let raised = JsResult::<Value, _>::err(e.clone()).unwrap().unwrap_err();
    assert!(raised.ptr_eq(&e));
}

#[test]
fn ok_map_unwrap() {
    let f = |v: Value| Value::from(v.to_js_string().len() as f64);
    for v in sample_values() {
        let expected = f(v.clone());
        let got = JsResult::<_, ErrorObject>::ok(v).map(f).unwrap().unwrap();
        assert_eq!(got, expected);
    }
}

#[test]
fn err_map_never_calls() {
    let calls = Cell::new(0);
    let e = ErrorObject::new("boom");
    let res = JsResult::<Value, _>::err(e.clone()).map(|v| {
        calls.set(calls.get() + 1);
        v
    });

    assert_eq!(res, JsResult::err(e));
    assert_eq!(calls.get(), 0);
}

#[test]
fn err_and_then_never_calls() {
    let calls = Cell::new(0);
    let e = ErrorObject::new("boom");
    let res = JsResult::<Value, _>::err(e.clone()).and_then(|v| {
        calls.set(calls.get() + 1);
        JsResult::ok(v)
    });

    assert!(res.err_value().is_some_and(|got| got.ptr_eq(&e)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn none_and_then_never_calls() {
    let calls = Cell::new(0);
    let res = JsOption::<Value>::none().and_then(|v| {
        calls.set(calls.get() + 1);
        JsOption::some(v).unwrap()
    });

    assert_eq!(res, JsOption::none());
    assert_eq!(calls.get(), 0);
}

#[test]
fn some_rejects_absent() {
    for v in [Value::undefined(), Value::null()] {
        assert_eq!(JsOption::some(v), Err(Error::InvalidConstruction));
    }
}

#[test]
fn none_unwrap_or() {
    for d in sample_values() {
        let got = JsOption::none().unwrap_or(d.clone());
        match (&got, &d) {
            (Value::Number(a), Value::Number(b)) if b.is_nan() => assert!(a.is_nan()),
            _ => assert_eq!(got, d),
        }
    }
}

#[test]
fn some_and_then_round_trip() {
    for v in [Value::from(1), Value::from("x"), Value::from(false)] {
        let got = JsOption::some(v.clone())
            .unwrap()
            .and_then(|x| JsOption::some(x).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(got, v);
    }
}

fn err_message(res: JsResult<Value, ErrorObject>) -> String {
    res.unwrap().unwrap_err().message().to_owned()
}

#[test]
fn result_adapter() {
    assert_eq!(wrap_with_result(|()| Ok(Value::from(42)))(()), JsResult::Ok(Value::from(42)));
    assert_eq!(
        err_message(wrap_with_result(|()| Ok(Value::undefined()))(())),
        "Function returned undefined"
    );
    assert_eq!(
        err_message(wrap_with_result(|()| Ok(Value::null()))(())),
        "Function returned null"
    );
    assert_eq!(
        err_message(wrap_with_result(|()| Ok(Value::number(f64::NAN)))(())),
        "Function returned NaN"
    );
    assert_eq!(
        err_message(wrap_with_result(|()| Ok(Value::number(f64::INFINITY)))(())),
        "Function returned Infinity or -Infinity"
    );
    assert_eq!(err_message(wrap_with_result(|()| Err(Value::error("boom")))(())), "boom");
}

#[test]
fn result_adapter_keeps_thrown_error() {
    let e = ErrorObject::new("boom");
    let thrown = e.clone();
    let res = wrap_with_result(move |()| Err(Value::Error(thrown.clone())))(());
    assert!(res.unwrap().unwrap_err().ptr_eq(&e));
}

fn present(v: Value) -> Result<JsOption<Value>, Value> {
    Ok(JsOption::some(v).unwrap())
}

#[test]
fn option_adapter() {
    assert_eq!(
        wrap_with_option(|()| Ok(Value::from(0)))(()),
        present(Value::from(0))
    );
    assert_eq!(wrap_with_option(|()| Ok(Value::null()))(()), Ok(JsOption::none()));
    assert_eq!(wrap_with_option(|()| Ok(Value::undefined()))(()), Ok(JsOption::none()));

    let e = ErrorObject::new("x");
    let thrown = Value::Error(e.clone());
    match wrap_with_option(move |()| Err(thrown.clone()))(()) {
        Err(Value::Error(raised)) => assert!(raised.ptr_eq(&e)),
        other => unreachable!("{:?}", other),
    }
}

#[test]
fn adapters_forward_arguments() {
    let add = |args: Vec<Value>| match args.as_slice() {
        [Value::Number(a), Value::Number(b)] => Ok(Value::number(a + b)),
        _ => Err(Value::from("expected two numbers")),
    };

    let wrapped = wrap_with_result(add);
    assert_eq!(wrapped(vec![Value::from(1), Value::from(2)]), JsResult::Ok(Value::from(3)));
    assert_eq!(err_message(wrapped(vec![Value::from("a")])), "expected two numbers");

    let wrapped = wrap_with_option(add);
    assert_eq!(wrapped(vec![Value::from(1), Value::from(2)]), present(Value::from(3)));
    assert_eq!(wrapped(vec![]), Err(Value::from("expected two numbers")));
}
