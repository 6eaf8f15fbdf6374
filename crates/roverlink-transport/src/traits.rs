use bytes::Bytes;

use crate::error::Result;

/// A bidirectional link to one robot.
///
/// The protocol core drives the link exclusively through this trait. Two
/// independent streams share the connection: the request/response stream
/// (a request sent with `expect_reply = true` is answered by exactly one
/// reply) and the out-of-band notification stream the robot pushes on its
/// own initiative.
///
/// Implementations own all link policy: framing, retransmission, timeouts.
/// The core adds none of its own.
pub trait Transport {
    /// Connect to the named robot, or to the first one discovered when
    /// `robot` is `None`.
    fn connect(&mut self, robot: Option<&str>) -> Result<()>;

    /// Disconnect from the currently connected robot.
    fn disconnect(&mut self) -> Result<()>;

    /// Start scanning for robots. The discovered list grows until
    /// [`stop_discovery`](Self::stop_discovery) is called.
    fn start_discovery(&mut self) -> Result<()>;

    /// Stop scanning for robots. The list collected so far remains
    /// queryable.
    fn stop_discovery(&mut self) -> Result<()>;

    /// Number of robots discovered so far.
    fn discovered_count(&self) -> Result<usize>;

    /// Name of the discovered robot at `index`.
    ///
    /// `index` must be below [`discovered_count`](Self::discovered_count).
    fn discovered_name(&self, index: usize) -> Result<String>;

    /// Send a request to the robot.
    ///
    /// When `expect_reply` is true the robot will answer with exactly one
    /// reply, readable via [`recv_reply`](Self::recv_reply).
    fn send_request(&mut self, request: &[u8], expect_reply: bool) -> Result<()>;

    /// Block until the reply to the last expect-reply request arrives.
    ///
    /// Fails with [`NoPendingRequest`](crate::TransportError::NoPendingRequest)
    /// when no such request is outstanding.
    fn recv_reply(&mut self) -> Result<Bytes>;

    /// Whether the reply to the last expect-reply request has arrived,
    /// i.e. whether [`recv_reply`](Self::recv_reply) would return without
    /// blocking.
    fn reply_ready(&self) -> bool;

    /// Pop the oldest pending out-of-band notification, if any.
    ///
    /// Non-blocking; `Ok(None)` when the queue is empty.
    fn poll_notification(&mut self) -> Result<Option<Bytes>>;

    /// Monotonic millisecond clock with an arbitrary epoch. Used to stamp
    /// notifications as they are read off the link.
    fn now_millis(&self) -> u64;
}
