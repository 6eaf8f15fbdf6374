//! Typed robot session facade.
//!
//! This is the "just works" layer of roverlink: a [`Session`] owns one
//! transport handle and one notification cache, and exposes every protocol
//! operation as a typed method. Encoding, validation and notification
//! classification come from `roverlink-wire`; byte delivery comes from the
//! `roverlink-transport` trait; this crate wires them together and keeps
//! the per-connection state.

pub mod cache;
pub mod error;
pub mod session;

pub use cache::Stamped;
pub use error::{Result, SessionError};
pub use session::Session;

pub use roverlink_transport::{MockTransport, Transport, TransportError};
pub use roverlink_wire::{types, Profile, WireError};
