use std::error;
use std::fmt;

/// The ways a deque operation can fail.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Error {
    /// An element was requested from, or popped off, an empty deque.
    EmptyContainer,

    /// A cursor positioned on the end sentinel was dereferenced or advanced.
    InvalidIteratorAccess,
}

/// A specialized [`Result`](std::result::Result) for deque operations.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::EmptyContainer => "deque is empty",
            Error::InvalidIteratorAccess => "cursor is at the end sentinel",
        };
        f.write_str(msg)
    }
}

impl error::Error for Error {}
