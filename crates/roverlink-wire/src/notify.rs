//! Classifier for out-of-band notification packets.
//!
//! The robot pushes notifications on a stream independent of the
//! request/response cycle. Each packet is classified by its leading opcode
//! byte and must have the exact length for its kind. Malformed packets
//! (empty, wrong length for a recognized opcode, unknown opcode) are
//! dropped silently: a bad notification never fails the drain, it is just
//! not worth caching.

use tracing::debug;

use crate::ops;
use crate::profile::Profile;

/// One classified notification.
///
/// Radar, gesture and status payloads are kept as raw bytes here; their
/// plausibility checks run when the cached value is queried, not when the
/// packet arrives (a structurally valid but out-of-range value may sit in
/// the cache until read).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Radar reading, raw byte.
    Radar { raw: u8 },
    /// Gesture code, raw byte.
    Gesture { raw: u8 },
    /// The robot was shaken. No payload.
    Shake,
    /// Weight/tilt reading, raw byte.
    Weight { raw: u8 },
    /// Claps heard, as a count.
    Clap { count: u8 },
    /// Extended-profile status push: raw battery byte and charging byte.
    Status { battery: u8, charging: u8 },
}

/// Classify one out-of-band packet.
///
/// Returns `None` for anything that should be dropped. The profile decides
/// whether `0x79` status packets are recognized; classic robots never send
/// them, so on classic the opcode falls through to the unknown case.
pub fn classify(profile: Profile, packet: &[u8]) -> Option<Notification> {
    let opcode = *packet.first()?;
    match (opcode, packet.len()) {
        (ops::RADAR_NOTIFICATION, 2) => Some(Notification::Radar { raw: packet[1] }),
        (ops::GESTURE_NOTIFICATION, 2) => Some(Notification::Gesture { raw: packet[1] }),
        (ops::SHAKE_NOTIFICATION, 1) => Some(Notification::Shake),
        (ops::GET_WEIGHT, 2) => Some(Notification::Weight { raw: packet[1] }),
        (ops::CLAP_NOTIFICATION, 2) => Some(Notification::Clap { count: packet[1] }),
        (ops::STATUS, 3) if profile.has_status_notifications() => {
            Some(Notification::Status { battery: packet[1], charging: packet[2] })
        }
        _ => {
            debug!(opcode, len = packet.len(), "dropping unrecognized notification");
            None
        }
    }
}
