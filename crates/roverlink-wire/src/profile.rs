use std::ops::RangeInclusive;

use crate::ops;

/// Which of the two historical command sets a robot speaks.
///
/// The two generations share most of the protocol but disagree on a handful
/// of opcodes, validity ranges and reply layouts. A profile is picked once,
/// when the session is created, and the codec is parameterized by it; the
/// two command sets are never mixed on one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// First-generation firmware: volume 0–7 set via `0x15`, battery level
    /// read through the status reply, no status notifications, no eye
    /// brightness or speed-profile commands.
    Classic,
    /// Second-generation firmware: volume 1–11 set via `0x18`, dedicated
    /// battery query with charging info, status notifications, eye
    /// brightness and speed-profile commands.
    Extended,
}

impl Profile {
    /// Opcode of the set-volume command.
    pub fn set_volume_opcode(self) -> u8 {
        match self {
            Profile::Classic => ops::SET_VOLUME_CLASSIC,
            Profile::Extended => ops::SET_VOLUME_EXTENDED,
        }
    }

    /// Valid volume values, for both the set command and the get reply.
    pub fn volume_range(self) -> RangeInclusive<u8> {
        match self {
            Profile::Classic => 0..=7,
            Profile::Extended => 1..=11,
        }
    }

    /// Opcode of the battery query.
    pub fn battery_opcode(self) -> u8 {
        match self {
            Profile::Classic => ops::STATUS,
            Profile::Extended => ops::GET_BATTERY_LEVEL,
        }
    }

    /// Raw byte value reported at 0% charge.
    pub fn battery_floor(self) -> u8 {
        match self {
            Profile::Classic => 0x4D,
            Profile::Extended => 0x7D,
        }
    }

    /// Width of the raw battery byte range, for normalizing to [0, 1].
    pub fn battery_span(self) -> f32 {
        match self {
            Profile::Classic => 47.0,
            Profile::Extended => 34.0,
        }
    }

    /// Whether the robot pushes out-of-band status packets.
    pub fn has_status_notifications(self) -> bool {
        matches!(self, Profile::Extended)
    }

    /// Whether eye brightness and speed-profile commands exist.
    pub fn has_extended_commands(self) -> bool {
        matches!(self, Profile::Extended)
    }
}
