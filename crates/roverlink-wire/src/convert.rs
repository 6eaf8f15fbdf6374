//! Shared numeric transforms between human units and device units.
//!
//! Durations and angles are quantized by truncating division before they go
//! on the wire, so non-aligned inputs lose precision by design. Signed
//! motor parameters use a sign-magnitude byte with a per-axis offset
//! instead of two's complement, keeping the axes in disjoint byte ranges.

/// Drive time is sent in units of 7 ms.
pub const DRIVE_TIME_QUANTUM_MS: u16 = 7;
/// Chest LED flash on/off times are sent in units of 20 ms.
pub const FLASH_QUANTUM_MS: u16 = 20;
/// Sound slot delays are sent in units of 30 ms.
pub const SOUND_DELAY_QUANTUM_MS: u16 = 30;
/// Turn angles are sent in units of 5 degrees.
pub const TURN_QUANTUM_DEGREES: u16 = 5;

/// Odometer resolution.
pub const ODOMETER_TICKS_PER_CM: f64 = 48.5;

/// Offset added to negative continuous-drive velocities.
pub const VELOCITY_NEGATIVE_OFFSET: u8 = 0x20;
/// Offset added to positive continuous-drive turn rates.
pub const TURN_POSITIVE_OFFSET: u8 = 0x40;
/// Offset added to negative continuous-drive turn rates.
pub const TURN_NEGATIVE_OFFSET: u8 = 0x60;
/// Offset added to positive three-axis-drive spin rates.
pub const SPIN_POSITIVE_OFFSET: u8 = 0x80;
/// Offset added to negative three-axis-drive spin rates.
pub const SPIN_NEGATIVE_OFFSET: u8 = 0xA0;
/// Magnitude bound shared by both continuous-drive axes.
pub const DRIVE_AXIS_MAX: i8 = 32;

/// Encode a signed axis value as a sign-magnitude byte.
///
/// Zero is `0x00`; positive values are `positive_offset + v`; negative
/// values are `negative_offset + |v|`. The caller guarantees the value is
/// within the axis domain so the bands cannot collide.
pub fn signed_magnitude(value: i8, positive_offset: u8, negative_offset: u8) -> u8 {
    if value == 0 {
        0x00
    } else if value > 0 {
        positive_offset + value as u8
    } else {
        negative_offset + value.unsigned_abs()
    }
}

/// Recover an axis value from a sign-magnitude byte.
///
/// Defined only for `0x00` and the two `offset+1 ..= offset+max` bands;
/// anything else returns `None`.
pub fn signed_magnitude_back(
    byte: u8,
    positive_offset: u8,
    negative_offset: u8,
    max: i8,
) -> Option<i8> {
    let max = max as u8;
    if byte == 0x00 {
        Some(0)
    } else if byte > negative_offset && byte <= negative_offset + max {
        Some(-((byte - negative_offset) as i8))
    } else if byte > positive_offset && byte <= positive_offset + max {
        Some((byte - positive_offset) as i8)
    } else {
        None
    }
}

/// Quantize a human-unit value into device units, truncating toward zero.
///
/// The result must fit one byte; exceeding `quantum * 255` is a caller
/// contract violation.
pub fn to_units(value: u16, quantum: u16) -> u8 {
    let units = value / quantum;
    assert!(units <= u8::MAX as u16, "value {value} exceeds {quantum}ms-unit byte range");
    units as u8
}

/// Expand device units back into human units.
///
/// Exact only when the original value was quantum-aligned.
pub fn from_units(units: u8, quantum: u16) -> u16 {
    units as u16 * quantum
}

/// Normalize a battery-like byte to [0.0, 1.0] via `(raw - floor) / span`.
pub fn linear_level(raw: u8, floor: u8, span: f32) -> f32 {
    (raw as f32 - floor as f32) / span
}

/// Odometer tick count to centimeters.
pub fn ticks_to_cm(ticks: u32) -> f32 {
    (ticks as f64 / ODOMETER_TICKS_PER_CM) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_zero_byte() {
        assert_eq!(signed_magnitude(0, 0x00, 0x20), 0x00);
        assert_eq!(signed_magnitude(0, 0x40, 0x60), 0x00);
    }

    #[test]
    fn negative_values_use_offset_plus_magnitude() {
        assert_eq!(signed_magnitude(-1, 0x00, 0x20), 0x21);
        assert_eq!(signed_magnitude(-32, 0x00, 0x20), 0x40);
        assert_eq!(signed_magnitude(-5, 0x40, 0x60), 0x65);
    }

    #[test]
    fn positive_values_use_positive_offset() {
        assert_eq!(signed_magnitude(7, 0x00, 0x20), 0x07);
        assert_eq!(signed_magnitude(7, 0x40, 0x60), 0x47);
    }

    #[test]
    fn sign_magnitude_roundtrips_whole_domain() {
        for v in -DRIVE_AXIS_MAX..=DRIVE_AXIS_MAX {
            let vel = signed_magnitude(v, 0x00, VELOCITY_NEGATIVE_OFFSET);
            assert_eq!(
                signed_magnitude_back(vel, 0x00, VELOCITY_NEGATIVE_OFFSET, DRIVE_AXIS_MAX),
                Some(v)
            );
            let turn = signed_magnitude(v, TURN_POSITIVE_OFFSET, TURN_NEGATIVE_OFFSET);
            assert_eq!(
                signed_magnitude_back(turn, TURN_POSITIVE_OFFSET, TURN_NEGATIVE_OFFSET, DRIVE_AXIS_MAX),
                Some(v)
            );
        }
    }

    #[test]
    fn sign_magnitude_back_undefined_outside_bands() {
        // Turn bands cover 0x41..=0x80; velocity bands cover 0x00..=0x40.
        assert_eq!(signed_magnitude_back(0x81, 0x40, 0x60, 32), None);
        assert_eq!(signed_magnitude_back(0x41, 0x00, 0x20, 32), None);
    }

    #[test]
    fn three_axis_bands_are_disjoint() {
        // Velocity 0x00..=0x40, turn 0x41..=0x80, spin 0x81..=0xC0.
        assert_eq!(signed_magnitude(32, 0x00, VELOCITY_NEGATIVE_OFFSET), 0x20);
        assert_eq!(signed_magnitude(-32, 0x00, VELOCITY_NEGATIVE_OFFSET), 0x40);
        assert_eq!(signed_magnitude(1, TURN_POSITIVE_OFFSET, TURN_NEGATIVE_OFFSET), 0x41);
        assert_eq!(signed_magnitude(-32, TURN_POSITIVE_OFFSET, TURN_NEGATIVE_OFFSET), 0x80);
        assert_eq!(signed_magnitude(1, SPIN_POSITIVE_OFFSET, SPIN_NEGATIVE_OFFSET), 0x81);
        assert_eq!(signed_magnitude(-32, SPIN_POSITIVE_OFFSET, SPIN_NEGATIVE_OFFSET), 0xC0);
    }

    #[test]
    fn quantization_truncates_toward_zero() {
        assert_eq!(to_units(187, TURN_QUANTUM_DEGREES), 37);
        assert_eq!(to_units(185, TURN_QUANTUM_DEGREES), 37);
        assert_eq!(to_units(6, DRIVE_TIME_QUANTUM_MS), 0);
        assert_eq!(from_units(37, TURN_QUANTUM_DEGREES), 185);
    }

    #[test]
    #[should_panic(expected = "byte range")]
    fn oversized_quantized_value_is_a_contract_violation() {
        to_units(256 * FLASH_QUANTUM_MS, FLASH_QUANTUM_MS);
    }

    #[test]
    fn battery_scaling_matches_protocol_constants() {
        let level = linear_level(0x9B, 0x7D, 34.0);
        assert!((level - 0.882_352_94).abs() < 1e-6);
        assert_eq!(linear_level(0x7D, 0x7D, 34.0), 0.0);
    }

    #[test]
    fn odometer_ticks_scale_by_48_5() {
        assert_eq!(ticks_to_cm(0), 0.0);
        assert!((ticks_to_cm(97) - 2.0).abs() < 1e-6);
    }
}
