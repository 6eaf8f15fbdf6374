use bytes::Bytes;
use tracing::{debug, info, trace};

use roverlink_transport::Transport;
use roverlink_wire::types::{
    Action, AlarmDateTime, BatteryReading, ChargingStatus, ChestLed, ClapSettings, DateTime,
    DriveDirection, FallDirection, Gesture, GestureRadarMode, GetUp, HeadLed, HeadLeds, Radar,
    SoundSlot, SpeedProfile, StatusReport, TurnDirection, Version,
};
use roverlink_wire::{classify, convert, decode, encode, ops, Profile};

use crate::cache::{NotificationCache, Stamped};
use crate::error::{Result, SessionError};

/// One logical connection to a robot.
///
/// Owns the transport handle and the notification cache; all operations are
/// synchronous and take `&mut self`, so a session is single-threaded by
/// construction. Commands either fire and forget or block on the
/// transport's reply wait; the session itself adds no timeouts, retries or
/// background work.
pub struct Session<T: Transport> {
    transport: T,
    profile: Profile,
    cache: NotificationCache,
}

impl<T: Transport> Session<T> {
    /// Wrap an initialized transport, speaking the given protocol profile.
    pub fn new(transport: T, profile: Profile) -> Self {
        Self {
            transport,
            profile,
            cache: NotificationCache::default(),
        }
    }

    /// The profile this session was constructed with.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Tear the session down and hand the transport back.
    pub fn into_transport(self) -> T {
        self.transport
    }

    // ---- connection management (pure transport pass-throughs) ----

    /// Connect to the named robot, or the first discovered when `None`.
    pub fn connect(&mut self, robot: Option<&str>) -> Result<()> {
        info!(?robot, "connecting");
        Ok(self.transport.connect(robot)?)
    }

    pub fn disconnect(&mut self) -> Result<()> {
        Ok(self.transport.disconnect()?)
    }

    pub fn start_discovery(&mut self) -> Result<()> {
        Ok(self.transport.start_discovery()?)
    }

    pub fn stop_discovery(&mut self) -> Result<()> {
        Ok(self.transport.stop_discovery()?)
    }

    pub fn discovered_count(&self) -> Result<usize> {
        Ok(self.transport.discovered_count()?)
    }

    pub fn discovered_name(&self, index: usize) -> Result<String> {
        Ok(self.transport.discovered_name(index)?)
    }

    // ---- request plumbing ----

    fn send(&mut self, request: Bytes) -> Result<()> {
        trace!(request = ?request.as_ref(), "fire-and-forget");
        Ok(self.transport.send_request(&request, false)?)
    }

    fn transact(&mut self, request: &[u8]) -> Result<Bytes> {
        self.transport.send_request(request, true)?;
        let reply = self.transport.recv_reply()?;
        trace!(request = ?request, reply = ?reply.as_ref(), "transacted");
        Ok(reply)
    }

    fn require_extended(&self) {
        assert!(
            self.profile.has_extended_commands(),
            "operation requires the extended protocol profile"
        );
    }

    // ---- motion ----

    /// Continuous drive; must be re-sent regularly to keep moving.
    /// Velocity and turn are in [-32, 32], positive = forward / right.
    pub fn continuous_drive(&mut self, velocity: i8, turn: i8) -> Result<()> {
        self.send(encode::continuous_drive(velocity, turn))
    }

    /// Three-axis continuous drive with an independent spin-in-place rate.
    /// All axes are in [-32, 32]; must be re-sent regularly like
    /// [`continuous_drive`](Self::continuous_drive).
    pub fn drive(&mut self, forward: i8, turn: i8, spin: i8) -> Result<()> {
        self.send(encode::drive(forward, turn, spin))
    }

    /// Drive a distance in cm, then turn up to 360 degrees.
    pub fn distance_drive(
        &mut self,
        direction: DriveDirection,
        cm: u8,
        turn_direction: TurnDirection,
        degrees: u16,
    ) -> Result<()> {
        self.send(encode::distance_drive(direction, cm, turn_direction, degrees))
    }

    /// Drive forward for `time_ms` (7 ms resolution) at `speed` ≤ 30.
    pub fn drive_forward(&mut self, speed: u8, time_ms: u16) -> Result<()> {
        self.send(encode::drive_forward(speed, time_ms))
    }

    /// Drive backward for `time_ms` (7 ms resolution) at `speed` ≤ 30.
    pub fn drive_backward(&mut self, speed: u8, time_ms: u16) -> Result<()> {
        self.send(encode::drive_backward(speed, time_ms))
    }

    /// Turn left by `degrees` (5 degree resolution) at `speed` ≤ 24.
    pub fn turn_left(&mut self, degrees: u16, speed: u8) -> Result<()> {
        self.send(encode::turn_left(degrees, speed))
    }

    /// Turn right by `degrees` (5 degree resolution) at `speed` ≤ 24.
    pub fn turn_right(&mut self, degrees: u16, speed: u8) -> Result<()> {
        self.send(encode::turn_right(degrees, speed))
    }

    /// Stop the current motion.
    pub fn stop(&mut self) -> Result<()> {
        self.send(encode::stop())
    }

    // ---- posture and canned actions ----

    pub fn action(&mut self, action: Action) -> Result<()> {
        self.send(encode::action(action))
    }

    pub fn fall_down(&mut self, direction: FallDirection) -> Result<()> {
        self.send(encode::fall_down(direction))
    }

    pub fn get_up(&mut self, from: GetUp) -> Result<()> {
        self.send(encode::get_up(from))
    }

    pub fn force_sleep(&mut self) -> Result<()> {
        self.send(encode::force_sleep())
    }

    // ---- gesture / radar ----

    pub fn set_gesture_radar_mode(&mut self, mode: GestureRadarMode) -> Result<()> {
        self.send(encode::set_gesture_radar_mode(mode))
    }

    pub fn gesture_radar_mode(&mut self) -> Result<GestureRadarMode> {
        let reply = self.transact(&[ops::GET_GESTURE_RADAR_MODE])?;
        Ok(decode::gesture_radar_mode(&reply)?)
    }

    // ---- sound and volume ----

    /// Play a sequence of up to eight sounds, repeated `repeat` extra times.
    pub fn play_sound(&mut self, slots: &[SoundSlot], repeat: u8) -> Result<()> {
        self.send(encode::play_sound(slots, repeat))
    }

    /// Play a single built-in sound once.
    pub fn play_single_sound(&mut self, sound: u8) -> Result<()> {
        self.play_sound(&[SoundSlot { sound, delay_ms: 0 }], 0)
    }

    /// Stop any sound in progress: an all-mute play request.
    pub fn stop_sound(&mut self) -> Result<()> {
        self.play_sound(&[], 0)
    }

    /// Set speaker volume (classic 0–7, extended 1–11).
    pub fn set_volume(&mut self, volume: u8) -> Result<()> {
        self.send(encode::set_volume(self.profile, volume))
    }

    pub fn volume(&mut self) -> Result<u8> {
        let reply = self.transact(&[ops::GET_VOLUME])?;
        Ok(decode::volume(self.profile, &reply)?)
    }

    // ---- LEDs ----

    pub fn set_chest_led(&mut self, red: u8, green: u8, blue: u8) -> Result<()> {
        self.send(encode::set_chest_led(red, green, blue))
    }

    /// Flash the chest LED; on/off times have 20 ms resolution.
    pub fn flash_chest_led(
        &mut self,
        red: u8,
        green: u8,
        blue: u8,
        on_ms: u16,
        off_ms: u16,
    ) -> Result<()> {
        self.send(encode::flash_chest_led(red, green, blue, on_ms, off_ms))
    }

    pub fn chest_led(&mut self) -> Result<ChestLed> {
        let reply = self.transact(&[ops::GET_CHEST_LED])?;
        Ok(decode::chest_led(&reply)?)
    }

    pub fn set_head_leds(
        &mut self,
        led1: HeadLed,
        led2: HeadLed,
        led3: HeadLed,
        led4: HeadLed,
    ) -> Result<()> {
        self.send(encode::set_head_leds(led1, led2, led3, led4))
    }

    pub fn head_leds(&mut self) -> Result<HeadLeds> {
        let reply = self.transact(&[ops::GET_HEAD_LEDS])?;
        Ok(decode::head_leds(&reply)?)
    }

    /// Eye LED brightness (extended profile only).
    pub fn eye_brightness(&mut self) -> Result<u8> {
        self.require_extended();
        let reply = self.transact(&[ops::GET_EYE_BRIGHTNESS])?;
        Ok(decode::eye_brightness(&reply)?)
    }

    /// Set eye LED brightness (extended profile only; 0 = default).
    pub fn set_eye_brightness(&mut self, brightness: u8) -> Result<()> {
        self.require_extended();
        self.send(encode::set_eye_brightness(brightness))
    }

    // ---- odometer, battery, weight ----

    /// Distance traveled since the last odometer reset, in centimeters.
    pub fn odometer_cm(&mut self) -> Result<f32> {
        let reply = self.transact(&[ops::READ_ODOMETER])?;
        Ok(decode::odometer_cm(&reply)?)
    }

    pub fn reset_odometer(&mut self) -> Result<()> {
        self.send(encode::reset_odometer())
    }

    /// Battery level, with charging details on the extended profile.
    pub fn battery(&mut self) -> Result<BatteryReading> {
        let reply = self.transact(&[self.profile.battery_opcode()])?;
        Ok(decode::battery(self.profile, &reply)?)
    }

    /// Current weight/tilt reading, queried directly.
    pub fn weight(&mut self) -> Result<u8> {
        let reply = self.transact(&[ops::GET_WEIGHT])?;
        Ok(decode::weight(&reply)?)
    }

    // ---- clap detection ----

    pub fn enable_clap(&mut self, enabled: bool) -> Result<()> {
        self.send(encode::enable_clap(enabled))
    }

    /// Set the delay between claps, raw device units.
    pub fn set_clap_delay(&mut self, delay: u16) -> Result<()> {
        self.send(encode::set_clap_delay(delay))
    }

    pub fn clap_settings(&mut self) -> Result<ClapSettings> {
        let reply = self.transact(&[ops::GET_CLAP_SETTINGS])?;
        Ok(decode::clap_settings(&reply)?)
    }

    // ---- clock and alarm ----

    pub fn current_date_time(&mut self) -> Result<DateTime> {
        let reply = self.transact(&[ops::GET_CURRENT_DATE_TIME])?;
        Ok(decode::current_date_time(&reply)?)
    }

    pub fn set_current_date_time(&mut self, dt: &DateTime) -> Result<()> {
        self.send(encode::set_current_date_time(dt))
    }

    pub fn alarm_date_time(&mut self) -> Result<AlarmDateTime> {
        let reply = self.transact(&[ops::GET_ALARM_DATE_TIME])?;
        Ok(decode::alarm_date_time(&reply)?)
    }

    pub fn set_alarm_date_time(&mut self, alarm: &AlarmDateTime) -> Result<()> {
        self.send(encode::set_alarm_date_time(alarm))
    }

    pub fn cancel_alarm(&mut self) -> Result<()> {
        self.send(encode::cancel_alarm())
    }

    // ---- speed profile ----

    /// Motion speed profile (extended profile only).
    pub fn speed(&mut self) -> Result<SpeedProfile> {
        self.require_extended();
        let reply = self.transact(&[ops::GET_SPEED])?;
        Ok(decode::speed(&reply)?)
    }

    /// Set the motion speed profile (extended profile only).
    pub fn set_speed(&mut self, speed: SpeedProfile) -> Result<()> {
        self.require_extended();
        self.send(encode::set_speed(speed))
    }

    // ---- version ----

    pub fn version(&mut self) -> Result<Version> {
        let reply = self.transact(&[ops::GET_VERSION])?;
        Ok(decode::version(&reply)?)
    }

    // ---- out-of-band notifications ----

    /// Drain every pending notification into the cache.
    ///
    /// Each recognized packet overwrites its kind's slot, so after a drain
    /// the cache holds only the most recent instance of each kind.
    /// Malformed packets are dropped silently; only a transport failure
    /// aborts the drain.
    fn drain_notifications(&mut self) -> Result<()> {
        while let Some(packet) = self.transport.poll_notification()? {
            let at_millis = self.transport.now_millis();
            match classify(self.profile, &packet) {
                Some(notification) => self.cache.store(notification, at_millis),
                None => debug!(packet = ?packet.as_ref(), "dropped notification"),
            }
        }
        Ok(())
    }

    /// Latest radar notification, if any.
    ///
    /// Peek semantics: the slot stays valid. A cached value outside the
    /// radar enumeration is reported as a bad response at this point.
    pub fn latest_radar(&mut self) -> Result<Stamped<Radar>> {
        self.drain_notifications()?;
        let slot = self.cache.radar.ok_or(SessionError::Empty)?;
        Ok(Stamped {
            value: Radar::from_raw(slot.value)?,
            at_millis: slot.at_millis,
        })
    }

    /// Latest gesture notification, if any. Peek semantics.
    pub fn latest_gesture(&mut self) -> Result<Stamped<Gesture>> {
        self.drain_notifications()?;
        let slot = self.cache.gesture.ok_or(SessionError::Empty)?;
        Ok(Stamped {
            value: Gesture::from_raw(slot.value)?,
            at_millis: slot.at_millis,
        })
    }

    /// Whether the robot has been shaken since the last successful call.
    ///
    /// Consumption semantics: success clears the slot, so a second call
    /// without a new shake notification reports `Empty`. Returns the clock
    /// reading captured when the shake was drained.
    pub fn take_shake(&mut self) -> Result<u64> {
        self.drain_notifications()?;
        let slot = self.cache.shake.take().ok_or(SessionError::Empty)?;
        Ok(slot.at_millis)
    }

    /// Latest weight notification, if any. Peek semantics, raw byte.
    pub fn latest_weight(&mut self) -> Result<Stamped<u8>> {
        self.drain_notifications()?;
        self.cache.weight.ok_or(SessionError::Empty)
    }

    /// Latest clap notification, if any. Peek semantics.
    pub fn latest_clap(&mut self) -> Result<Stamped<u8>> {
        self.drain_notifications()?;
        self.cache.clap.ok_or(SessionError::Empty)
    }

    /// Latest status push (extended profile only). Peek semantics; the
    /// charging byte is validated here, at read time.
    pub fn latest_status(&mut self) -> Result<Stamped<StatusReport>> {
        self.require_extended();
        self.drain_notifications()?;
        let slot = self.cache.status.ok_or(SessionError::Empty)?;
        let (battery, charging) = slot.value;
        Ok(Stamped {
            value: StatusReport {
                level: convert::linear_level(
                    battery,
                    self.profile.battery_floor(),
                    self.profile.battery_span(),
                ),
                charging: ChargingStatus::from_raw(charging)?,
            },
            at_millis: slot.at_millis,
        })
    }

    // ---- raw escape hatch ----

    /// Send raw bytes without encoding or validation. The caller owns wire
    /// correctness from here.
    pub fn raw_send(&mut self, request: &[u8]) -> Result<()> {
        Ok(self.transport.send_request(request, false)?)
    }

    /// Send raw bytes and block for the raw reply. No validation.
    pub fn raw_request(&mut self, request: &[u8]) -> Result<Bytes> {
        self.transport.send_request(request, true)?;
        Ok(self.transport.recv_reply()?)
    }

    /// Pop one raw out-of-band packet, bypassing the classifier and cache.
    pub fn raw_notification(&mut self) -> Result<Option<Bytes>> {
        Ok(self.transport.poll_notification()?)
    }
}
