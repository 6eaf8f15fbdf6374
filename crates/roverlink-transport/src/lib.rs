//! Link transport abstraction for the roverlink robot protocol.
//!
//! The robot speaks a request/response protocol plus an asynchronous
//! out-of-band notification stream over the same link. This crate defines
//! the [`Transport`] trait the protocol core is written against, and a
//! scripted in-memory implementation ([`MockTransport`]) used by the test
//! suites of the higher layers.
//!
//! This is the lowest layer of roverlink. Discovery, connection management,
//! raw byte delivery and the notification queue all live behind the trait;
//! the core never touches a real link directly.

pub mod error;
pub mod mock;
pub mod traits;

pub use error::{Result, TransportError};
pub use mock::MockTransport;
pub use traits::Transport;
