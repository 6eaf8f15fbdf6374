//! Typed value objects carried by commands and responses.
//!
//! Enumerations carry their wire byte as the discriminant. `from_raw`
//! constructors perform the range validation decoders and query-time
//! plausibility checks rely on; out-of-range bytes are the "bad response"
//! condition.

use crate::error::{Result, WireError};

/// Reading from the head-mounted radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Radar {
    /// Nothing in range.
    Clear = 0x01,
    /// Object between 10 cm and 30 cm.
    ObjectAt10To30Cm = 0x02,
    /// Object closer than 10 cm.
    ObjectWithin10Cm = 0x03,
}

impl Radar {
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x01 => Ok(Radar::Clear),
            0x02 => Ok(Radar::ObjectAt10To30Cm),
            0x03 => Ok(Radar::ObjectWithin10Cm),
            _ => Err(WireError::Field { field: "radar", value: raw }),
        }
    }
}

/// Hand gesture recognized by the head sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Gesture {
    Left = 0x0A,
    Right = 0x0B,
    SweepLeft = 0x0C,
    SweepRight = 0x0D,
    Up = 0x0E,
    Down = 0x0F,
    Forward = 0x10,
    Backward = 0x11,
}

impl Gesture {
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x0A => Ok(Gesture::Left),
            0x0B => Ok(Gesture::Right),
            0x0C => Ok(Gesture::SweepLeft),
            0x0D => Ok(Gesture::SweepRight),
            0x0E => Ok(Gesture::Up),
            0x0F => Ok(Gesture::Down),
            0x10 => Ok(Gesture::Forward),
            0x11 => Ok(Gesture::Backward),
            _ => Err(WireError::Field { field: "gesture", value: raw }),
        }
    }
}

/// Mode of the shared gesture/radar sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GestureRadarMode {
    Disabled = 0x00,
    Gesture = 0x02,
    Radar = 0x04,
}

impl GestureRadarMode {
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x00 => Ok(GestureRadarMode::Disabled),
            0x02 => Ok(GestureRadarMode::Gesture),
            0x04 => Ok(GestureRadarMode::Radar),
            _ => Err(WireError::Field { field: "gesture_radar_mode", value: raw }),
        }
    }
}

/// State of one head LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HeadLed {
    Off = 0x00,
    On = 0x01,
    BlinkSlow = 0x02,
    BlinkFast = 0x03,
}

impl HeadLed {
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x00 => Ok(HeadLed::Off),
            0x01 => Ok(HeadLed::On),
            0x02 => Ok(HeadLed::BlinkSlow),
            0x03 => Ok(HeadLed::BlinkFast),
            _ => Err(WireError::Field { field: "head_led", value: raw }),
        }
    }
}

/// The four independently addressable head LEDs, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadLeds {
    pub led1: HeadLed,
    pub led2: HeadLed,
    pub led3: HeadLed,
    pub led4: HeadLed,
}

/// Chest LED color and flash timing as reported by the robot.
///
/// `on_ms`/`off_ms` are zero for a solid color. Times come back in 20 ms
/// device units, so they are exact only for 20 ms-aligned settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChestLed {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub on_ms: u16,
    pub off_ms: u16,
}

/// Charging state reported with the extended battery reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChargingStatus {
    NotCharging = 0x00,
    Charging = 0x01,
    ChargingFinished = 0x02,
}

impl ChargingStatus {
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x00 => Ok(ChargingStatus::NotCharging),
            0x01 => Ok(ChargingStatus::Charging),
            0x02 => Ok(ChargingStatus::ChargingFinished),
            _ => Err(WireError::Field { field: "charging_status", value: raw }),
        }
    }
}

/// Which charger the robot is sitting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChargerType {
    DcJack = 0x00,
    Base = 0x01,
}

impl ChargerType {
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x00 => Ok(ChargerType::DcJack),
            0x01 => Ok(ChargerType::Base),
            _ => Err(WireError::Field { field: "charger_type", value: raw }),
        }
    }
}

/// Battery reading.
///
/// `level` is normalized to [0.0, 1.0]. Charging details are only reported
/// by the extended profile; on classic they are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub level: f32,
    pub charging: Option<ChargingStatus>,
    pub charger: Option<ChargerType>,
}

/// Decoded extended status notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReport {
    pub level: f32,
    pub charging: ChargingStatus,
}

/// Motion speed profile (extended profile only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SpeedProfile {
    Adult = 0x00,
    Kid = 0x01,
}

impl SpeedProfile {
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x00 => Ok(SpeedProfile::Adult),
            0x01 => Ok(SpeedProfile::Kid),
            _ => Err(WireError::Field { field: "speed_profile", value: raw }),
        }
    }
}

/// Direction of a distance drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DriveDirection {
    Forward = 0x00,
    Backward = 0x01,
}

/// Turn direction of a distance drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TurnDirection {
    Left = 0x00,
    Right = 0x01,
}

/// Which way the robot should lie down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FallDirection {
    OnBack = 0x00,
    FaceDown = 0x01,
}

/// Which posture to stand up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GetUp {
    FromFront = 0x00,
    FromBack = 0x01,
    FromEither = 0x02,
}

/// Canned actions and posture triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Action {
    Reset = 0x01,
    Sit = 0x02,
    LieDown = 0x03,
    AllIdleMode = 0x04,
    Dance = 0x05,
    VoiceTraining1 = 0x06,
    VoiceTraining2 = 0x07,
    Reset2 = 0x08,
    Jump = 0x09,
    Yoga = 0x0A,
    WatchCome = 0x0B,
    WatchFollow = 0x0C,
    WatchFetch = 0x0D,
    BallTracking = 0x0E,
    BallSoccer = 0x0F,
    Base = 0x10,
    DanceBase = 0x11,
    StopFromBase = 0x12,
    GuardMode = 0x13,
    FreeRoam = 0x14,
    FaceDownForControl = 0x15,
}

/// One entry of a play-sound request: a sound index and the delay before
/// the next entry starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundSlot {
    /// Built-in sound index, 1 through [`MAX_SOUND_INDEX`].
    pub sound: u8,
    /// Delay before the next slot, quantized to 30 ms units on the wire.
    pub delay_ms: u16,
}

/// Highest built-in sound index.
pub const MAX_SOUND_INDEX: u8 = 137;
/// Silent index used to pad unused play-sound slots.
pub const MUTE_SOUND_INDEX: u8 = 138;

/// Wall-clock date and time kept by the robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// 0 = Sunday.
    pub weekday: u8,
}

/// Alarm setting (minute resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

/// Clap detection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClapSettings {
    pub enabled: bool,
    /// Raw device delay between claps, big-endian u16 on the wire.
    pub delay: u16,
}

/// Hardware and firmware revision bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub body_hardware: u8,
    pub head_hardware: u8,
    pub mechanic: u8,
    pub radio_spi_flash: u8,
    pub mcu_spi_flash: u8,
    pub radio_bootloader: u8,
    pub radio_firmware: u8,
    pub mcu_bootloader: u8,
    pub mcu_firmware: u8,
    pub mcu_revision: u8,
}
