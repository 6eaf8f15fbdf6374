//! Per-command request encoders.
//!
//! Each function produces the exact fixed-layout byte sequence for one
//! command. Parameter ranges are caller contracts: violations are bugs in
//! the calling application, checked with assertions, never surfaced as
//! recoverable errors.

use bytes::{BufMut, Bytes, BytesMut};

use crate::convert::{
    self, DRIVE_AXIS_MAX, DRIVE_TIME_QUANTUM_MS, FLASH_QUANTUM_MS, SOUND_DELAY_QUANTUM_MS,
    SPIN_NEGATIVE_OFFSET, SPIN_POSITIVE_OFFSET, TURN_NEGATIVE_OFFSET, TURN_POSITIVE_OFFSET,
    TURN_QUANTUM_DEGREES, VELOCITY_NEGATIVE_OFFSET,
};
use crate::ops;
use crate::profile::Profile;
use crate::types::{
    Action, AlarmDateTime, DateTime, DriveDirection, FallDirection, GetUp, GestureRadarMode,
    HeadLed, SoundSlot, SpeedProfile, TurnDirection, MAX_SOUND_INDEX, MUTE_SOUND_INDEX,
};

/// Number of slots a play-sound request always carries on the wire.
pub const SOUND_SLOTS: usize = 8;

fn command(capacity: usize) -> BytesMut {
    BytesMut::with_capacity(capacity)
}

/// Continuous drive at `velocity` with `turn` bias, both in [-32, 32].
///
/// Positive velocity is forward, positive turn is right. The command must
/// be re-sent continuously to keep the robot moving.
pub fn continuous_drive(velocity: i8, turn: i8) -> Bytes {
    assert!((-DRIVE_AXIS_MAX..=DRIVE_AXIS_MAX).contains(&velocity), "velocity out of [-32, 32]");
    assert!((-DRIVE_AXIS_MAX..=DRIVE_AXIS_MAX).contains(&turn), "turn rate out of [-32, 32]");

    let mut buf = command(3);
    buf.put_u8(ops::CONTINUOUS_DRIVE);
    buf.put_u8(convert::signed_magnitude(velocity, 0x00, VELOCITY_NEGATIVE_OFFSET));
    buf.put_u8(convert::signed_magnitude(turn, TURN_POSITIVE_OFFSET, TURN_NEGATIVE_OFFSET));
    buf.freeze()
}

/// Three-axis continuous drive: forward/backward, turn bias and spin in
/// place, all in [-32, 32]. Like [`continuous_drive`] the command must be
/// re-sent continuously; the third axis gets its own disjoint byte band.
pub fn drive(forward: i8, turn: i8, spin: i8) -> Bytes {
    assert!((-DRIVE_AXIS_MAX..=DRIVE_AXIS_MAX).contains(&forward), "forward out of [-32, 32]");
    assert!((-DRIVE_AXIS_MAX..=DRIVE_AXIS_MAX).contains(&turn), "turn rate out of [-32, 32]");
    assert!((-DRIVE_AXIS_MAX..=DRIVE_AXIS_MAX).contains(&spin), "spin rate out of [-32, 32]");

    let mut buf = command(4);
    buf.put_u8(ops::CONTINUOUS_DRIVE);
    buf.put_u8(convert::signed_magnitude(forward, 0x00, VELOCITY_NEGATIVE_OFFSET));
    buf.put_u8(convert::signed_magnitude(turn, TURN_POSITIVE_OFFSET, TURN_NEGATIVE_OFFSET));
    buf.put_u8(convert::signed_magnitude(spin, SPIN_POSITIVE_OFFSET, SPIN_NEGATIVE_OFFSET));
    buf.freeze()
}

/// Drive a fixed distance, then turn in place. Degrees are big-endian.
pub fn distance_drive(
    direction: DriveDirection,
    cm: u8,
    turn_direction: TurnDirection,
    degrees: u16,
) -> Bytes {
    assert!(degrees <= 360, "turn angle above 360 degrees");

    let mut buf = command(6);
    buf.put_u8(ops::DISTANCE_DRIVE);
    buf.put_u8(direction as u8);
    buf.put_u8(cm);
    buf.put_u8(turn_direction as u8);
    buf.put_u16(degrees);
    buf.freeze()
}

/// Timed forward drive; `time_ms` is quantized to 7 ms units.
pub fn drive_forward(speed: u8, time_ms: u16) -> Bytes {
    timed_drive(ops::DRIVE_FORWARD, speed, time_ms)
}

/// Timed backward drive; `time_ms` is quantized to 7 ms units.
pub fn drive_backward(speed: u8, time_ms: u16) -> Bytes {
    timed_drive(ops::DRIVE_BACKWARD, speed, time_ms)
}

fn timed_drive(opcode: u8, speed: u8, time_ms: u16) -> Bytes {
    assert!(speed <= 30, "drive speed above 30");
    assert!(time_ms <= 255 * DRIVE_TIME_QUANTUM_MS, "drive time above 255 device units");

    let mut buf = command(3);
    buf.put_u8(opcode);
    buf.put_u8(speed);
    buf.put_u8(convert::to_units(time_ms, DRIVE_TIME_QUANTUM_MS));
    buf.freeze()
}

/// Turn left in place; `degrees` is quantized to 5 degree units.
pub fn turn_left(degrees: u16, speed: u8) -> Bytes {
    turn(ops::TURN_LEFT, degrees, speed)
}

/// Turn right in place; `degrees` is quantized to 5 degree units.
pub fn turn_right(degrees: u16, speed: u8) -> Bytes {
    turn(ops::TURN_RIGHT, degrees, speed)
}

fn turn(opcode: u8, degrees: u16, speed: u8) -> Bytes {
    assert!(degrees <= 255 * TURN_QUANTUM_DEGREES, "turn angle above 255 device units");
    assert!(speed <= 24, "turn speed above 24");

    let mut buf = command(3);
    buf.put_u8(opcode);
    buf.put_u8(convert::to_units(degrees, TURN_QUANTUM_DEGREES));
    buf.put_u8(speed);
    buf.freeze()
}

/// Stop any motion in progress.
pub fn stop() -> Bytes {
    Bytes::from_static(&[ops::STOP])
}

/// Trigger a canned action or posture.
pub fn action(action: Action) -> Bytes {
    let mut buf = command(2);
    buf.put_u8(ops::ACTION);
    buf.put_u8(action as u8);
    buf.freeze()
}

/// Make the robot lie down in the given direction.
pub fn fall_down(direction: FallDirection) -> Bytes {
    let mut buf = command(2);
    buf.put_u8(ops::SET_POSITION);
    buf.put_u8(direction as u8);
    buf.freeze()
}

/// Make the robot stand up from the given posture.
pub fn get_up(from: GetUp) -> Bytes {
    let mut buf = command(2);
    buf.put_u8(ops::GET_UP);
    buf.put_u8(from as u8);
    buf.freeze()
}

/// Select gesture detection, radar, or neither on the shared head sensor.
pub fn set_gesture_radar_mode(mode: GestureRadarMode) -> Bytes {
    let mut buf = command(2);
    buf.put_u8(ops::SET_GESTURE_RADAR_MODE);
    buf.put_u8(mode as u8);
    buf.freeze()
}

/// Play up to [`SOUND_SLOTS`] sounds in sequence, `repeat` extra times.
///
/// The request is always full length: unused slots are padded with the
/// mute index and a zero delay. An empty slice therefore yields an
/// all-mute request, which stops any sound in progress. Slot delays are
/// quantized to 30 ms units.
pub fn play_sound(slots: &[SoundSlot], repeat: u8) -> Bytes {
    assert!(slots.len() <= SOUND_SLOTS, "more than 8 sound slots");

    let mut buf = command(2 + 2 * SOUND_SLOTS);
    buf.put_u8(ops::PLAY_SOUND);
    for i in 0..SOUND_SLOTS {
        match slots.get(i) {
            Some(slot) => {
                assert!(
                    (1..=MAX_SOUND_INDEX).contains(&slot.sound),
                    "sound index out of range"
                );
                assert!(
                    slot.delay_ms <= 255 * SOUND_DELAY_QUANTUM_MS,
                    "sound delay above 255 device units"
                );
                buf.put_u8(slot.sound);
                buf.put_u8(convert::to_units(slot.delay_ms, SOUND_DELAY_QUANTUM_MS));
            }
            None => {
                buf.put_u8(MUTE_SOUND_INDEX);
                buf.put_u8(0);
            }
        }
    }
    buf.put_u8(repeat);
    buf.freeze()
}

/// Set speaker volume. Opcode and valid range depend on the profile:
/// classic accepts 0–7 via `0x15`, extended 1–11 via `0x18`.
pub fn set_volume(profile: Profile, volume: u8) -> Bytes {
    assert!(
        profile.volume_range().contains(&volume),
        "volume outside the profile's range"
    );

    let mut buf = command(2);
    buf.put_u8(profile.set_volume_opcode());
    buf.put_u8(volume);
    buf.freeze()
}

/// Solid chest LED color.
pub fn set_chest_led(red: u8, green: u8, blue: u8) -> Bytes {
    let mut buf = command(4);
    buf.put_u8(ops::SET_CHEST_LED);
    buf.put_u8(red);
    buf.put_u8(green);
    buf.put_u8(blue);
    buf.freeze()
}

/// Flashing chest LED. On/off times are quantized to 20 ms units.
pub fn flash_chest_led(red: u8, green: u8, blue: u8, on_ms: u16, off_ms: u16) -> Bytes {
    assert!(on_ms <= 255 * FLASH_QUANTUM_MS, "on time above 255 device units");
    assert!(off_ms <= 255 * FLASH_QUANTUM_MS, "off time above 255 device units");

    let mut buf = command(6);
    buf.put_u8(ops::FLASH_CHEST_LED);
    buf.put_u8(red);
    buf.put_u8(green);
    buf.put_u8(blue);
    buf.put_u8(convert::to_units(on_ms, FLASH_QUANTUM_MS));
    buf.put_u8(convert::to_units(off_ms, FLASH_QUANTUM_MS));
    buf.freeze()
}

/// Set all four head LEDs at once.
pub fn set_head_leds(led1: HeadLed, led2: HeadLed, led3: HeadLed, led4: HeadLed) -> Bytes {
    let mut buf = command(5);
    buf.put_u8(ops::SET_HEAD_LEDS);
    buf.put_u8(led1 as u8);
    buf.put_u8(led2 as u8);
    buf.put_u8(led3 as u8);
    buf.put_u8(led4 as u8);
    buf.freeze()
}

/// Zero the odometer.
pub fn reset_odometer() -> Bytes {
    Bytes::from_static(&[ops::RESET_ODOMETER])
}

/// Enable or disable clap detection.
pub fn enable_clap(enabled: bool) -> Bytes {
    let mut buf = command(2);
    buf.put_u8(ops::ENABLE_CLAP);
    buf.put_u8(enabled as u8);
    buf.freeze()
}

/// Set the clap detection delay (raw device units, big-endian).
pub fn set_clap_delay(delay: u16) -> Bytes {
    let mut buf = command(3);
    buf.put_u8(ops::SET_CLAP_DELAY);
    buf.put_u16(delay);
    buf.freeze()
}

/// Set the robot's wall clock. Year is big-endian.
pub fn set_current_date_time(dt: &DateTime) -> Bytes {
    assert!((1..=12).contains(&dt.month), "month out of 1..=12");
    assert!((1..=31).contains(&dt.day), "day out of 1..=31");
    assert!(dt.hour < 24, "hour out of 0..24");
    assert!(dt.minute < 60, "minute out of 0..60");
    assert!(dt.second < 60, "second out of 0..60");
    assert!(dt.weekday < 7, "weekday out of 0..7");

    let mut buf = command(9);
    buf.put_u8(ops::SET_CURRENT_DATE_TIME);
    buf.put_u16(dt.year);
    buf.put_u8(dt.month);
    buf.put_u8(dt.day);
    buf.put_u8(dt.hour);
    buf.put_u8(dt.minute);
    buf.put_u8(dt.second);
    buf.put_u8(dt.weekday);
    buf.freeze()
}

/// Set the alarm. Year is big-endian.
pub fn set_alarm_date_time(alarm: &AlarmDateTime) -> Bytes {
    assert!((1..=12).contains(&alarm.month), "month out of 1..=12");
    assert!((1..=31).contains(&alarm.day), "day out of 1..=31");
    assert!(alarm.hour < 24, "hour out of 0..24");
    assert!(alarm.minute < 60, "minute out of 0..60");

    let mut buf = command(7);
    buf.put_u8(ops::SET_ALARM_DATE_TIME);
    buf.put_u16(alarm.year);
    buf.put_u8(alarm.month);
    buf.put_u8(alarm.day);
    buf.put_u8(alarm.hour);
    buf.put_u8(alarm.minute);
    buf.freeze()
}

/// Cancel the alarm: an alarm set with an all-zero payload.
pub fn cancel_alarm() -> Bytes {
    Bytes::from_static(&[ops::SET_ALARM_DATE_TIME, 0, 0, 0, 0, 0, 0])
}

/// Set eye LED brightness (extended profile; 0 selects the default).
pub fn set_eye_brightness(brightness: u8) -> Bytes {
    let mut buf = command(2);
    buf.put_u8(ops::SET_EYE_BRIGHTNESS);
    buf.put_u8(brightness);
    buf.freeze()
}

/// Set the motion speed profile (extended profile).
pub fn set_speed(speed: SpeedProfile) -> Bytes {
    let mut buf = command(2);
    buf.put_u8(ops::SET_SPEED);
    buf.put_u8(speed as u8);
    buf.freeze()
}

/// Put the robot to sleep.
pub fn force_sleep() -> Bytes {
    Bytes::from_static(&[ops::FORCE_SLEEP])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous_drive_sign_magnitude_bytes() {
        assert_eq!(continuous_drive(0, 0).as_ref(), &[0x78, 0x00, 0x00]);
        assert_eq!(continuous_drive(12, 0).as_ref(), &[0x78, 0x0C, 0x00]);
        assert_eq!(continuous_drive(-12, 0).as_ref(), &[0x78, 0x2C, 0x00]);
        assert_eq!(continuous_drive(0, 5).as_ref(), &[0x78, 0x00, 0x45]);
        assert_eq!(continuous_drive(0, -5).as_ref(), &[0x78, 0x00, 0x65]);
        assert_eq!(continuous_drive(32, -32).as_ref(), &[0x78, 0x20, 0x80]);
    }

    #[test]
    #[should_panic(expected = "velocity")]
    fn continuous_drive_rejects_out_of_range_velocity() {
        let _ = continuous_drive(33, 0);
    }

    #[test]
    fn drive_puts_the_spin_axis_in_its_own_band() {
        assert_eq!(drive(0, 0, 0).as_ref(), &[0x78, 0x00, 0x00, 0x00]);
        assert_eq!(drive(8, 0, 0).as_ref(), &[0x78, 0x08, 0x00, 0x00]);
        assert_eq!(drive(-8, 0, 0).as_ref(), &[0x78, 0x28, 0x00, 0x00]);
        assert_eq!(drive(0, 8, 0).as_ref(), &[0x78, 0x00, 0x48, 0x00]);
        assert_eq!(drive(0, 0, 8).as_ref(), &[0x78, 0x00, 0x00, 0x88]);
        assert_eq!(drive(0, 0, -8).as_ref(), &[0x78, 0x00, 0x00, 0xA8]);
        assert_eq!(drive(32, -32, 32).as_ref(), &[0x78, 0x20, 0x80, 0xA0]);
    }

    #[test]
    #[should_panic(expected = "spin")]
    fn drive_rejects_out_of_range_spin() {
        let _ = drive(0, 0, -33);
    }

    #[test]
    fn distance_drive_degrees_are_big_endian() {
        let cmd = distance_drive(DriveDirection::Backward, 50, TurnDirection::Right, 360);
        assert_eq!(cmd.as_ref(), &[0x70, 0x01, 50, 0x01, 0x01, 0x68]);
    }

    #[test]
    fn timed_drive_quantizes_time_by_7ms() {
        assert_eq!(drive_forward(30, 1785).as_ref(), &[0x71, 30, 255]);
        // 100 / 7 truncates to 14.
        assert_eq!(drive_backward(10, 100).as_ref(), &[0x72, 10, 14]);
    }

    #[test]
    fn turn_quantizes_degrees_by_5() {
        assert_eq!(turn_left(185, 12).as_ref(), &[0x73, 37, 12]);
        // Non-aligned input truncates to the lower multiple of 5.
        assert_eq!(turn_right(187, 12).as_ref(), &[0x74, 37, 12]);
    }

    #[test]
    fn play_sound_pads_unused_slots_with_mute() {
        let slots = [
            SoundSlot { sound: 3, delay_ms: 600 },
            SoundSlot { sound: 64, delay_ms: 0 },
        ];
        let cmd = play_sound(&slots, 2);
        assert_eq!(cmd.len(), 18);
        assert_eq!(&cmd[..5], &[0x06, 3, 20, 64, 0]);
        for pair in cmd[5..17].chunks(2) {
            assert_eq!(pair, &[MUTE_SOUND_INDEX, 0]);
        }
        assert_eq!(cmd[17], 2);
    }

    #[test]
    fn empty_sound_list_is_all_mute() {
        // Nothing to play: every slot is the mute filler, which silences
        // any sound in progress.
        let cmd = play_sound(&[], 0);
        assert_eq!(cmd.len(), 18);
        assert_eq!(cmd[0], 0x06);
        for pair in cmd[1..17].chunks(2) {
            assert_eq!(pair, &[MUTE_SOUND_INDEX, 0]);
        }
        assert_eq!(cmd[17], 0);
    }

    #[test]
    fn set_volume_uses_the_profile_opcode() {
        assert_eq!(set_volume(Profile::Classic, 0).as_ref(), &[0x15, 0]);
        assert_eq!(set_volume(Profile::Extended, 11).as_ref(), &[0x18, 11]);
    }

    #[test]
    #[should_panic(expected = "volume")]
    fn classic_volume_11_is_a_contract_violation() {
        let _ = set_volume(Profile::Classic, 11);
    }

    #[test]
    #[should_panic(expected = "volume")]
    fn extended_volume_0_is_a_contract_violation() {
        let _ = set_volume(Profile::Extended, 0);
    }

    #[test]
    fn flash_chest_led_quantizes_by_20ms() {
        let cmd = flash_chest_led(0xFF, 0x00, 0x00, 1000, 1000);
        assert_eq!(cmd.as_ref(), &[0x89, 0xFF, 0x00, 0x00, 50, 50]);
    }

    #[test]
    fn date_time_year_is_big_endian() {
        let dt = DateTime {
            year: 2018,
            month: 12,
            day: 24,
            hour: 23,
            minute: 59,
            second: 58,
            weekday: 1,
        };
        let cmd = set_current_date_time(&dt);
        assert_eq!(cmd.as_ref(), &[0x43, 0x07, 0xE2, 12, 24, 23, 59, 58, 1]);
    }

    #[test]
    #[should_panic(expected = "month")]
    fn date_time_month_zero_is_a_contract_violation() {
        let dt = DateTime { year: 2018, month: 0, day: 1, hour: 0, minute: 0, second: 0, weekday: 0 };
        let _ = set_current_date_time(&dt);
    }

    #[test]
    fn cancel_alarm_is_an_all_zero_alarm_set() {
        assert_eq!(cancel_alarm().as_ref(), &[0x44, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn single_byte_commands() {
        assert_eq!(stop().as_ref(), &[0x77]);
        assert_eq!(reset_odometer().as_ref(), &[0x86]);
        assert_eq!(force_sleep().as_ref(), &[0xFA]);
    }

    #[test]
    fn clap_delay_is_big_endian() {
        assert_eq!(set_clap_delay(0x0320).as_ref(), &[0x20, 0x03, 0x20]);
    }
}
