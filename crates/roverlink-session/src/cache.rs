//! Last-known-value cache for out-of-band notifications.
//!
//! One fixed slot per notification kind. A slot is either empty or holds
//! the payload of the most recent notification of that kind together with
//! the transport clock reading taken when it was drained; intermediate
//! notifications are overwritten by design. Slots are written only by the
//! session's drain step.

use roverlink_wire::Notification;

/// A cached value together with the millisecond clock reading at capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamped<T> {
    pub value: T,
    pub at_millis: u64,
}

impl<T> Stamped<T> {
    fn new(value: T, at_millis: u64) -> Self {
        Self { value, at_millis }
    }
}

/// The fixed slot set.
///
/// Radar, gesture and status values stay raw here; plausibility checks run
/// at query time in the session. The shake slot carries no payload, only
/// its timestamp.
#[derive(Debug, Default)]
pub(crate) struct NotificationCache {
    pub radar: Option<Stamped<u8>>,
    pub gesture: Option<Stamped<u8>>,
    pub shake: Option<Stamped<()>>,
    pub weight: Option<Stamped<u8>>,
    pub clap: Option<Stamped<u8>>,
    pub status: Option<Stamped<(u8, u8)>>,
}

impl NotificationCache {
    /// Store one classified notification, overwriting the slot.
    pub fn store(&mut self, notification: Notification, at_millis: u64) {
        match notification {
            Notification::Radar { raw } => self.radar = Some(Stamped::new(raw, at_millis)),
            Notification::Gesture { raw } => self.gesture = Some(Stamped::new(raw, at_millis)),
            Notification::Shake => self.shake = Some(Stamped::new((), at_millis)),
            Notification::Weight { raw } => self.weight = Some(Stamped::new(raw, at_millis)),
            Notification::Clap { count } => self.clap = Some(Stamped::new(count, at_millis)),
            Notification::Status { battery, charging } => {
                self.status = Some(Stamped::new((battery, charging), at_millis));
            }
        }
    }
}
