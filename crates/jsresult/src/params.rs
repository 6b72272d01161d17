use std::rc::Rc;

use crate::value::error::ErrorObject;

pub type FailureCallback = fn(error: &ErrorObject);

/// Configuration for the adapters in [`crate::wrap`].
///
/// None of the settings change how a completion is normalized.
#[derive(Debug, Default, Clone)]
pub struct WrapParams {
    name: Option<Rc<str>>,
    failure_callback: Option<FailureCallback>,
}

impl WrapParams {
    pub fn new() -> Self {
        WrapParams::default()
    }

    /// Sets the name the adapted function is logged under.
    pub fn set_name<S: Into<Rc<str>>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("<anonymous>")
    }

    /// Sets a callback that [`wrap_with_result`](crate::wrap_with_result) invokes
    /// with every failure it produces, right before returning it.
    pub fn set_failure_callback(mut self, callback: FailureCallback) -> Self {
        self.failure_callback = Some(callback);
        self
    }

    pub fn failure_callback(&self) -> Option<FailureCallback> {
        self.failure_callback
    }
}
