/// Errors surfaced by session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Link-level failure, bubbled up from the transport unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] roverlink_transport::TransportError),

    /// The robot's reply (or a cached notification value) failed
    /// validation.
    #[error("{0}")]
    Wire(#[from] roverlink_wire::WireError),

    /// The queried notification slot holds no valid data.
    #[error("no notification of this kind cached")]
    Empty,
}

pub type Result<T> = std::result::Result<T, SessionError>;
