use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct Inner {
    name: Rc<str>,
    message: Rc<str>,
}

/// An error-like value.
///
/// Cloning is cheap and keeps the identity of the error: clones compare equal
/// to each other and to the original, while two errors created separately never do,
/// even with the same name and message.
#[derive(Debug, Clone)]
pub struct ErrorObject(Rc<Inner>);

impl ErrorObject {
    pub fn new<S: Into<Rc<str>>>(message: S) -> Self {
        Self::with_name("Error", message)
    }

    pub fn with_name<S1: Into<Rc<str>>, S2: Into<Rc<str>>>(name: S1, message: S2) -> Self {
        Self(Rc::new(Inner {
            name: name.into(),
            message: message.into(),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// Returns true if both handles refer to the same error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ErrorObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ErrorObject {}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Error.prototype.toString omits the separator for an empty message
        if self.message().is_empty() {
            write!(f, "{}", self.name())
        } else {
            write!(f, "{}: {}", self.name(), self.message())
        }
    }
}

impl std::error::Error for ErrorObject {}
