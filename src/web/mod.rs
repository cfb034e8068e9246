//! Web API side of the handshake.
//!
//! This module provides:
//! - `WebApiTransport`: the narrow interface to the Steam web API
//! - `HttpApiTransport`: the default reqwest-backed implementation
//! - `WebAuthClient`: the single `AuthenticateUser` call and the cookie
//!   assembly that turns its response into a usable web session

pub mod auth;
pub mod error;
pub mod transport;

pub use auth::{WebAuthClient, WebSession};
pub use error::WebApiError;
pub use transport::{HttpApiTransport, ParamValue, Params, WebApiTransport};
