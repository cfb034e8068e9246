//! Types at the seam to the binary Steam connection.
//!
//! The connection itself (framing, protobuf bodies, heartbeats) lives
//! elsewhere; this crate only needs to send one message type, receive one
//! response type, and ask the connection who it is logged on as.

pub mod connection;
pub mod dispatch;
pub mod message;

pub use connection::Connection;
pub use dispatch::{Dispatcher, NetMessage};
pub use message::{EMsg, EResult};
