use crate::net::message::EMsg;
use crate::steamid::SteamId;

/// The logged-on binary connection the handshake rides on.
///
/// Implemented by the surrounding client. `steam_id` returning `None`
/// means the connection is down (or not yet logged on); the handshake
/// treats that as a precondition failure rather than an error to recover.
pub trait Connection: Send + Sync + 'static {
    /// Identity of the current logon, if any.
    fn steam_id(&self) -> Option<SteamId>;

    /// Fire-and-forget send of one protocol message. Delivery failures
    /// surface as a missing response, not as an error here.
    fn send(&self, kind: EMsg, body: Vec<u8>);
}
