//! Opcode constants and buffer limits.
//!
//! An opcode is both the first byte of a request and, for queries, the echo
//! byte a reply must lead with. A few opcodes are reused across streams:
//! `0x0C` is the set-gesture-radar-mode command on the request stream and
//! the radar notification on the out-of-band stream, and `0x79` belongs to
//! the classic battery query or the extended status notification depending
//! on the profile.

pub const PLAY_SOUND: u8 = 0x06;
pub const ACTION: u8 = 0x07;
pub const SET_POSITION: u8 = 0x08;
pub const GESTURE_NOTIFICATION: u8 = 0x0A;
pub const SET_GESTURE_RADAR_MODE: u8 = 0x0C;
pub const RADAR_NOTIFICATION: u8 = 0x0C;
pub const GET_GESTURE_RADAR_MODE: u8 = 0x0D;
pub const GET_VERSION: u8 = 0x14;
pub const SET_VOLUME_CLASSIC: u8 = 0x15;
pub const GET_VOLUME: u8 = 0x16;
pub const SET_VOLUME_EXTENDED: u8 = 0x18;
pub const SHAKE_NOTIFICATION: u8 = 0x1A;
pub const GET_BATTERY_LEVEL: u8 = 0x1C;
pub const CLAP_NOTIFICATION: u8 = 0x1D;
pub const ENABLE_CLAP: u8 = 0x1E;
pub const GET_CLAP_SETTINGS: u8 = 0x1F;
pub const SET_CLAP_DELAY: u8 = 0x20;
pub const GET_UP: u8 = 0x23;
pub const GET_CURRENT_DATE_TIME: u8 = 0x3A;
pub const SET_SPEED: u8 = 0x3D;
pub const GET_SPEED: u8 = 0x3E;
pub const SET_CURRENT_DATE_TIME: u8 = 0x43;
pub const SET_ALARM_DATE_TIME: u8 = 0x44;
pub const SET_EYE_BRIGHTNESS: u8 = 0x45;
pub const GET_EYE_BRIGHTNESS: u8 = 0x46;
pub const GET_ALARM_DATE_TIME: u8 = 0x4A;
pub const DISTANCE_DRIVE: u8 = 0x70;
pub const DRIVE_FORWARD: u8 = 0x71;
pub const DRIVE_BACKWARD: u8 = 0x72;
pub const TURN_LEFT: u8 = 0x73;
pub const TURN_RIGHT: u8 = 0x74;
pub const STOP: u8 = 0x77;
pub const CONTINUOUS_DRIVE: u8 = 0x78;
/// Classic battery query / extended status notification.
pub const STATUS: u8 = 0x79;
pub const GET_WEIGHT: u8 = 0x81;
pub const GET_CHEST_LED: u8 = 0x83;
pub const SET_CHEST_LED: u8 = 0x84;
pub const READ_ODOMETER: u8 = 0x85;
pub const RESET_ODOMETER: u8 = 0x86;
pub const FLASH_CHEST_LED: u8 = 0x89;
pub const SET_HEAD_LEDS: u8 = 0x8A;
pub const GET_HEAD_LEDS: u8 = 0x8B;
pub const FORCE_SLEEP: u8 = 0xFA;

/// Longest request on the wire (play-sound: opcode + 8 slot pairs + repeat).
pub const REQUEST_MAX_LEN: usize = 18;
/// Longest reply on the wire (version: opcode + 10 version bytes).
pub const RESPONSE_MAX_LEN: usize = 11;
