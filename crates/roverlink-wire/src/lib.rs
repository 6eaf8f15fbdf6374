//! Wire codec for the roverlink robot protocol.
//!
//! This is the core value-add layer of roverlink: a pure, stateless mapping
//! between typed application parameters and the robot's fixed-layout command
//! bytes. Every request starts with a one-byte opcode; replies echo that
//! opcode in their first byte. Multi-byte quantities documented as
//! big-endian on the wire (year, tick counts, delays) are encoded that way;
//! everything else is a single byte.
//!
//! Layout of the crate:
//! - [`profile`] — the two historical command-set profiles
//! - [`ops`] — opcode constants and buffer limits
//! - [`convert`] — shared numeric transforms (sign-magnitude bytes,
//!   quantized durations, linear level scaling)
//! - [`types`] — value objects returned by decoders
//! - [`encode`] — per-command encoders (parameter ranges are caller
//!   contracts, checked with assertions)
//! - [`decode`] — per-response decoders (strict: exact length, opcode echo
//!   and field ranges, or the whole response is rejected)
//! - [`notify`] — classifier for out-of-band notification packets

pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod notify;
pub mod ops;
pub mod profile;
pub mod types;

pub use error::{Result, WireError};
pub use notify::{classify, Notification};
pub use profile::Profile;
