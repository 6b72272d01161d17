pub use self::error::Error;
pub use self::option::JsOption;
pub use self::params::WrapParams;
pub use self::result::JsResult;
pub use self::value::error::ErrorObject;
pub use self::value::{Nullish, Typeof, Value};
pub use self::wrap::{wrap_with_option, wrap_with_option_params, wrap_with_result, wrap_with_result_params};

pub mod error;
pub mod option;
pub mod params;
pub mod result;
pub mod util;
pub mod value;
pub mod wrap;

#[cfg(test)]
mod test;
