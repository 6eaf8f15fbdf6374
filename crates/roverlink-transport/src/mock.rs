use std::collections::VecDeque;

use bytes::Bytes;
use tracing::debug;

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Scripted in-memory transport.
///
/// Replies and notifications are queued up front; requests are recorded for
/// later inspection; the clock is advanced by hand. The codec and session
/// test suites are built on this, and applications can use it for dry runs
/// of command sequences without a robot in range.
#[derive(Debug, Default)]
pub struct MockTransport {
    connected: bool,
    discovering: bool,
    discovered: Vec<String>,
    sent: Vec<SentRequest>,
    replies: VecDeque<Bytes>,
    notifications: VecDeque<Bytes>,
    pending_reply: bool,
    clock_millis: u64,
}

/// One request captured by [`MockTransport::send_request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub bytes: Bytes,
    pub expect_reply: bool,
}

impl MockTransport {
    /// Create a transport with nothing scripted and the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the discovered-robot list.
    pub fn with_discovered<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.discovered = names.into_iter().map(Into::into).collect();
        self
    }

    /// Queue the reply returned by the next expect-reply request.
    pub fn push_reply(&mut self, reply: impl Into<Bytes>) {
        self.replies.push_back(reply.into());
    }

    /// Queue an out-of-band notification packet.
    pub fn push_notification(&mut self, packet: impl Into<Bytes>) {
        self.notifications.push_back(packet.into());
    }

    /// Advance the millisecond clock.
    pub fn advance_clock(&mut self, millis: u64) {
        self.clock_millis += millis;
    }

    /// Whether a discovery scan is currently running.
    pub fn discovering(&self) -> bool {
        self.discovering
    }

    /// All requests sent so far, oldest first.
    pub fn sent(&self) -> &[SentRequest] {
        &self.sent
    }

    /// The most recent request, if any was sent.
    pub fn last_sent(&self) -> Option<&SentRequest> {
        self.sent.last()
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(TransportError::NotConnected)
        }
    }
}

impl Transport for MockTransport {
    fn connect(&mut self, robot: Option<&str>) -> Result<()> {
        match robot {
            None => {}
            Some(name) if self.discovered.iter().any(|d| d == name) => {}
            Some(name) => {
                return Err(TransportError::Connect {
                    robot: Some(name.to_owned()),
                });
            }
        }
        debug!(?robot, "mock transport connected");
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        self.ensure_connected()?;
        self.connected = false;
        Ok(())
    }

    fn start_discovery(&mut self) -> Result<()> {
        self.discovering = true;
        Ok(())
    }

    fn stop_discovery(&mut self) -> Result<()> {
        self.discovering = false;
        Ok(())
    }

    fn discovered_count(&self) -> Result<usize> {
        Ok(self.discovered.len())
    }

    fn discovered_name(&self, index: usize) -> Result<String> {
        assert!(index < self.discovered.len(), "discovery index out of range");
        Ok(self.discovered[index].clone())
    }

    fn send_request(&mut self, request: &[u8], expect_reply: bool) -> Result<()> {
        self.ensure_connected()?;
        self.sent.push(SentRequest {
            bytes: Bytes::copy_from_slice(request),
            expect_reply,
        });
        self.pending_reply = expect_reply;
        Ok(())
    }

    fn recv_reply(&mut self) -> Result<Bytes> {
        self.ensure_connected()?;
        if !self.pending_reply {
            return Err(TransportError::NoPendingRequest);
        }
        self.pending_reply = false;
        // A scripted transport cannot block; an unscripted reply is the
        // mock's equivalent of the link timing out.
        self.replies.pop_front().ok_or(TransportError::Timeout)
    }

    fn reply_ready(&self) -> bool {
        self.pending_reply && !self.replies.is_empty()
    }

    fn poll_notification(&mut self) -> Result<Option<Bytes>> {
        self.ensure_connected()?;
        Ok(self.notifications.pop_front())
    }

    fn now_millis(&self) -> u64 {
        self.clock_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_by_name_requires_discovery() {
        let mut t = MockTransport::new().with_discovered(["Rover-7A3F"]);
        assert!(t.connect(Some("Rover-0000")).is_err());
        t.connect(Some("Rover-7A3F")).unwrap();
        t.disconnect().unwrap();
    }

    #[test]
    fn discovery_scan_state_toggles() {
        let mut t = MockTransport::new();
        assert!(!t.discovering());
        t.start_discovery().unwrap();
        assert!(t.discovering());
        t.stop_discovery().unwrap();
        assert!(!t.discovering());
    }

    #[test]
    fn send_before_connect_fails() {
        let mut t = MockTransport::new();
        let err = t.send_request(&[0x77], false).unwrap_err();
        assert!(matches!(err, TransportError::NotConnected));
    }

    #[test]
    fn reply_requires_outstanding_request() {
        let mut t = MockTransport::new();
        t.connect(None).unwrap();
        t.push_reply(vec![0x16, 0x04]);

        let err = t.recv_reply().unwrap_err();
        assert!(matches!(err, TransportError::NoPendingRequest));

        t.send_request(&[0x16], true).unwrap();
        assert!(t.reply_ready());
        assert_eq!(t.recv_reply().unwrap().as_ref(), &[0x16, 0x04]);

        // Consumed: a second read has no outstanding request again.
        let err = t.recv_reply().unwrap_err();
        assert!(matches!(err, TransportError::NoPendingRequest));
    }

    #[test]
    fn unscripted_reply_times_out() {
        let mut t = MockTransport::new();
        t.connect(None).unwrap();
        t.send_request(&[0x16], true).unwrap();
        assert!(!t.reply_ready());
        assert!(matches!(t.recv_reply(), Err(TransportError::Timeout)));
    }

    #[test]
    fn notifications_drain_oldest_first() {
        let mut t = MockTransport::new();
        t.connect(None).unwrap();
        t.push_notification(vec![0x1A]);
        t.push_notification(vec![0x0C, 0x03]);

        assert_eq!(t.poll_notification().unwrap().unwrap().as_ref(), &[0x1A]);
        assert_eq!(
            t.poll_notification().unwrap().unwrap().as_ref(),
            &[0x0C, 0x03]
        );
        assert!(t.poll_notification().unwrap().is_none());
    }

    #[test]
    fn clock_is_manual() {
        let mut t = MockTransport::new();
        assert_eq!(t.now_millis(), 0);
        t.advance_clock(250);
        t.advance_clock(50);
        assert_eq!(t.now_millis(), 300);
    }

    #[test]
    fn sent_log_records_expect_reply_flag() {
        let mut t = MockTransport::new();
        t.connect(None).unwrap();
        t.send_request(&[0x77], false).unwrap();
        t.push_reply(vec![0x16, 0x02]);
        t.send_request(&[0x16], true).unwrap();
        let _ = t.recv_reply();

        assert_eq!(t.sent().len(), 2);
        assert!(!t.sent()[0].expect_reply);
        assert!(t.sent()[1].expect_reply);
        assert_eq!(t.last_sent().unwrap().bytes.as_ref(), &[0x16]);
    }
}
