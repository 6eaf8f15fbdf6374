/// Errors that can occur in link transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to establish a connection to a robot.
    ///
    /// `robot` is the requested name, or `None` when connecting to the
    /// first robot discovered.
    #[error("failed to connect (robot: {robot:?})")]
    Connect { robot: Option<String> },

    /// An operation requires a connected robot and there is none.
    #[error("no robot connected")]
    NotConnected,

    /// A reply was requested but no request expecting one is outstanding.
    #[error("no outstanding request")]
    NoPendingRequest,

    /// Timed out waiting for the robot to reply.
    #[error("timed out waiting for reply")]
    Timeout,

    /// An I/O error occurred on the underlying link.
    #[error("link I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
