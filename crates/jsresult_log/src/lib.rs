//! Logging for the jsresult crates.
//!
//! Library code logs through the macros here and never names `tracing` itself.
//! Everything compiles down to a dead branch unless `JSRESULT_LOG` was set at build time.

#[doc(hidden)]
pub use tracing as __tracing;
#[doc(hidden)]
pub const ENABLED: bool = option_env!("JSRESULT_LOG").is_some();

pub use tracing::Level;

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($level:ident, $($tok:tt)*) => {
        if $crate::ENABLED {
            $crate::__tracing::$level!($($tok)*)
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($tok:tt)*) => { $crate::__log!(debug, $($tok)*) };
}

#[macro_export]
macro_rules! warn {
    ($($tok:tt)*) => { $crate::__log!(warn, $($tok)*) };
}

/// Opens a [`Span`], or a no-op one when logging is compiled out.
#[macro_export]
macro_rules! span {
    ($($tok:tt)*) => {
        $crate::Span(if $crate::ENABLED {
            ::core::option::Option::Some($crate::__tracing::span!($($tok)*))
        } else {
            ::core::option::Option::None
        })
    };
}

pub struct Span(pub Option<tracing::Span>);

impl Span {
    /// Runs `f` with this span entered.
    pub fn in_scope<T, F: FnOnce() -> T>(&self, f: F) -> T {
        match &self.0 {
            Some(span) => span.in_scope(f),
            None => f(),
        }
    }
}
