use core::fmt;

/// Errors returned by [`Hdc1000`](crate::Hdc1000) operations.
///
/// `E` is the error type of the [`Platform`](crate::Platform) in use.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// A platform primitive (bus write, bus read, pin configure, pin read) failed.
    Transport(E),
    /// DRDYn did not go low within the configured number of samples.
    ReadyTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Transport(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "platform transport error: {:?}", e),
            Error::ReadyTimeout => f.write_str("timed out waiting for DRDYn"),
        }
    }
}
