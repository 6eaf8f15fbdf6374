//! Per-response decoders.
//!
//! A reply is valid only if its length equals the exact literal length for
//! the command, its first byte echoes the request opcode, and every field
//! is within range. Any one violation rejects the whole reply; nothing is
//! partially decoded.

use crate::convert::{self, FLASH_QUANTUM_MS};
use crate::error::{Result, WireError};
use crate::ops;
use crate::profile::Profile;
use crate::types::{
    AlarmDateTime, BatteryReading, ChargerType, ChargingStatus, ChestLed, ClapSettings, DateTime,
    GestureRadarMode, HeadLed, HeadLeds, SpeedProfile, Version,
};

fn expect_shape(raw: &[u8], opcode: u8, len: usize) -> Result<()> {
    if raw.len() != len {
        return Err(WireError::Length { expected: len, actual: raw.len() });
    }
    if raw[0] != opcode {
        return Err(WireError::Opcode { expected: opcode, actual: raw[0] });
    }
    Ok(())
}

fn in_range(field: &'static str, value: u8, max: u8) -> Result<u8> {
    if value > max {
        return Err(WireError::Field { field, value });
    }
    Ok(value)
}

/// Reply to the gesture/radar mode query.
pub fn gesture_radar_mode(raw: &[u8]) -> Result<GestureRadarMode> {
    expect_shape(raw, ops::GET_GESTURE_RADAR_MODE, 2)?;
    GestureRadarMode::from_raw(raw[1])
}

/// Reply to the volume query; the valid range depends on the profile.
pub fn volume(profile: Profile, raw: &[u8]) -> Result<u8> {
    expect_shape(raw, ops::GET_VOLUME, 2)?;
    if !profile.volume_range().contains(&raw[1]) {
        return Err(WireError::Field { field: "volume", value: raw[1] });
    }
    Ok(raw[1])
}

/// Reply to the chest LED query. On/off times come back in 20 ms units.
pub fn chest_led(raw: &[u8]) -> Result<ChestLed> {
    expect_shape(raw, ops::GET_CHEST_LED, 6)?;
    Ok(ChestLed {
        red: raw[1],
        green: raw[2],
        blue: raw[3],
        on_ms: convert::from_units(raw[4], FLASH_QUANTUM_MS),
        off_ms: convert::from_units(raw[5], FLASH_QUANTUM_MS),
    })
}

/// Reply to the head LED query.
pub fn head_leds(raw: &[u8]) -> Result<HeadLeds> {
    expect_shape(raw, ops::GET_HEAD_LEDS, 5)?;
    Ok(HeadLeds {
        led1: HeadLed::from_raw(raw[1])?,
        led2: HeadLed::from_raw(raw[2])?,
        led3: HeadLed::from_raw(raw[3])?,
        led4: HeadLed::from_raw(raw[4])?,
    })
}

/// Reply to the odometer query: big-endian tick count scaled to cm.
pub fn odometer_cm(raw: &[u8]) -> Result<f32> {
    expect_shape(raw, ops::READ_ODOMETER, 5)?;
    let ticks = u32::from_be_bytes([raw[1], raw[2], raw[3], raw[4]]);
    Ok(convert::ticks_to_cm(ticks))
}

/// Reply to the battery query.
///
/// The two profiles use different commands and layouts: classic replies
/// `[0x79, raw]`, extended replies `[0x1C, charging, charger, raw]`. The
/// raw byte is normalized with the profile's floor/span constants.
pub fn battery(profile: Profile, raw: &[u8]) -> Result<BatteryReading> {
    match profile {
        Profile::Classic => {
            expect_shape(raw, ops::STATUS, 2)?;
            Ok(BatteryReading {
                level: convert::linear_level(raw[1], profile.battery_floor(), profile.battery_span()),
                charging: None,
                charger: None,
            })
        }
        Profile::Extended => {
            expect_shape(raw, ops::GET_BATTERY_LEVEL, 4)?;
            let charging = ChargingStatus::from_raw(raw[1])?;
            let charger = ChargerType::from_raw(raw[2])?;
            Ok(BatteryReading {
                level: convert::linear_level(raw[3], profile.battery_floor(), profile.battery_span()),
                charging: Some(charging),
                charger: Some(charger),
            })
        }
    }
}

/// Reply to the current date-time query. Year is big-endian.
///
/// The firmware reports weekday values up to 7; they are accepted here even
/// though the set command only sends 0..=6.
pub fn current_date_time(raw: &[u8]) -> Result<DateTime> {
    expect_shape(raw, ops::GET_CURRENT_DATE_TIME, 9)?;
    Ok(DateTime {
        year: u16::from_be_bytes([raw[1], raw[2]]),
        month: in_range("month", raw[3], 12)?,
        day: in_range("day", raw[4], 31)?,
        hour: in_range("hour", raw[5], 23)?,
        minute: in_range("minute", raw[6], 59)?,
        second: in_range("second", raw[7], 59)?,
        weekday: in_range("weekday", raw[8], 7)?,
    })
}

/// Reply to the alarm query. Year is big-endian.
pub fn alarm_date_time(raw: &[u8]) -> Result<AlarmDateTime> {
    expect_shape(raw, ops::GET_ALARM_DATE_TIME, 7)?;
    Ok(AlarmDateTime {
        year: u16::from_be_bytes([raw[1], raw[2]]),
        month: in_range("month", raw[3], 12)?,
        day: in_range("day", raw[4], 31)?,
        hour: in_range("hour", raw[5], 23)?,
        minute: in_range("minute", raw[6], 59)?,
    })
}

/// Reply to the weight query: raw tilt byte.
pub fn weight(raw: &[u8]) -> Result<u8> {
    expect_shape(raw, ops::GET_WEIGHT, 2)?;
    Ok(raw[1])
}

/// Reply to the clap settings query. Delay is big-endian.
pub fn clap_settings(raw: &[u8]) -> Result<ClapSettings> {
    expect_shape(raw, ops::GET_CLAP_SETTINGS, 4)?;
    let enabled = match raw[1] {
        0x00 => false,
        0x01 => true,
        value => return Err(WireError::Field { field: "clap_enabled", value }),
    };
    Ok(ClapSettings {
        enabled,
        delay: u16::from_be_bytes([raw[2], raw[3]]),
    })
}

/// Reply to the version query: ten revision bytes.
pub fn version(raw: &[u8]) -> Result<Version> {
    expect_shape(raw, ops::GET_VERSION, 11)?;
    Ok(Version {
        body_hardware: raw[1],
        head_hardware: raw[2],
        mechanic: raw[3],
        radio_spi_flash: raw[4],
        mcu_spi_flash: raw[5],
        radio_bootloader: raw[6],
        radio_firmware: raw[7],
        mcu_bootloader: raw[8],
        mcu_firmware: raw[9],
        mcu_revision: raw[10],
    })
}

/// Reply to the eye brightness query (extended profile).
pub fn eye_brightness(raw: &[u8]) -> Result<u8> {
    expect_shape(raw, ops::GET_EYE_BRIGHTNESS, 2)?;
    Ok(raw[1])
}

/// Reply to the speed-profile query (extended profile).
pub fn speed(raw: &[u8]) -> Result<SpeedProfile> {
    expect_shape(raw, ops::GET_SPEED, 2)?;
    SpeedProfile::from_raw(raw[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_length_rejects_every_decoder() {
        assert!(matches!(volume(Profile::Extended, &[0x16]), Err(WireError::Length { .. })));
        assert!(matches!(volume(Profile::Extended, &[0x16, 5, 0]), Err(WireError::Length { .. })));
        assert!(matches!(chest_led(&[0x83, 1, 2, 3, 4]), Err(WireError::Length { .. })));
        assert!(matches!(odometer_cm(&[0x85, 0, 0, 0]), Err(WireError::Length { .. })));
        assert!(matches!(version(&[0x14; 10]), Err(WireError::Length { .. })));
        assert!(matches!(current_date_time(&[0x3A; 8]), Err(WireError::Length { .. })));
    }

    #[test]
    fn wrong_opcode_echo_rejects_the_reply() {
        let err = volume(Profile::Extended, &[0x17, 5]).unwrap_err();
        assert!(matches!(err, WireError::Opcode { expected: 0x16, actual: 0x17 }));
        assert!(matches!(weight(&[0x82, 40]), Err(WireError::Opcode { .. })));
    }

    #[test]
    fn volume_range_depends_on_profile() {
        assert_eq!(volume(Profile::Classic, &[0x16, 0]).unwrap(), 0);
        assert!(volume(Profile::Extended, &[0x16, 0]).is_err());
        assert_eq!(volume(Profile::Extended, &[0x16, 11]).unwrap(), 11);
        assert!(volume(Profile::Classic, &[0x16, 11]).is_err());
    }

    #[test]
    fn chest_led_times_expand_by_20ms() {
        let led = chest_led(&[0x83, 0x00, 0xFF, 0x40, 50, 50]).unwrap();
        assert_eq!(led.on_ms, 1000);
        assert_eq!(led.off_ms, 1000);
        assert_eq!((led.red, led.green, led.blue), (0x00, 0xFF, 0x40));
    }

    #[test]
    fn head_leds_reject_out_of_range_state() {
        assert!(head_leds(&[0x8B, 0, 1, 2, 4]).is_err());
        let leds = head_leds(&[0x8B, 0, 1, 2, 3]).unwrap();
        assert_eq!(leds.led4, HeadLed::BlinkFast);
    }

    #[test]
    fn odometer_is_big_endian_ticks() {
        // 0x00000061 = 97 ticks = 2 cm at 48.5 ticks/cm.
        let cm = odometer_cm(&[0x85, 0x00, 0x00, 0x00, 0x61]).unwrap();
        assert!((cm - 2.0).abs() < 1e-6);
    }

    #[test]
    fn extended_battery_decodes_charging_info_and_level() {
        let reading = battery(Profile::Extended, &[0x1C, 0x01, 0x01, 0x9B]).unwrap();
        assert!((reading.level - 0.882_352_94).abs() < 1e-6);
        assert_eq!(reading.charging, Some(ChargingStatus::Charging));
        assert_eq!(reading.charger, Some(ChargerType::Base));
    }

    #[test]
    fn extended_battery_rejects_bad_charging_byte() {
        assert!(battery(Profile::Extended, &[0x1C, 0x03, 0x00, 0x9B]).is_err());
        assert!(battery(Profile::Extended, &[0x1C, 0x00, 0x02, 0x9B]).is_err());
    }

    #[test]
    fn classic_battery_uses_its_own_opcode_and_constants() {
        let reading = battery(Profile::Classic, &[0x79, 0x7C]).unwrap();
        assert!((reading.level - 1.0).abs() < 1e-6);
        assert_eq!(reading.charging, None);
        // The extended layout is not accepted on classic.
        assert!(battery(Profile::Classic, &[0x1C, 0x00, 0x00, 0x9B]).is_err());
    }

    #[test]
    fn date_time_decodes_big_endian_year_and_checks_fields() {
        let dt = current_date_time(&[0x3A, 0x07, 0xE2, 12, 24, 23, 59, 58, 7]).unwrap();
        assert_eq!(dt.year, 2018);
        assert_eq!(dt.weekday, 7);
        assert!(current_date_time(&[0x3A, 0x07, 0xE2, 13, 24, 23, 59, 58, 1]).is_err());
        assert!(current_date_time(&[0x3A, 0x07, 0xE2, 12, 24, 24, 59, 58, 1]).is_err());
    }

    #[test]
    fn alarm_decodes_and_validates() {
        let alarm = alarm_date_time(&[0x4A, 0x07, 0xE3, 1, 1, 7, 30]).unwrap();
        assert_eq!(alarm.year, 2019);
        assert_eq!((alarm.hour, alarm.minute), (7, 30));
        assert!(alarm_date_time(&[0x4A, 0x07, 0xE3, 1, 1, 7, 60]).is_err());
    }

    #[test]
    fn clap_settings_delay_is_big_endian() {
        let settings = clap_settings(&[0x1F, 0x01, 0x03, 0x20]).unwrap();
        assert!(settings.enabled);
        assert_eq!(settings.delay, 0x0320);
        assert!(clap_settings(&[0x1F, 0x02, 0x00, 0x00]).is_err());
    }

    #[test]
    fn version_maps_all_ten_bytes() {
        let v = version(&[0x14, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]).unwrap();
        assert_eq!(v.body_hardware, 1);
        assert_eq!(v.mcu_revision, 10);
    }

    #[test]
    fn speed_rejects_unknown_profiles() {
        assert_eq!(speed(&[0x3E, 0x01]).unwrap(), SpeedProfile::Kid);
        assert!(speed(&[0x3E, 0x02]).is_err());
    }
}
