use std::fmt;

/// Message-type tags for the binary protocol, using the wire values the
/// Steam network assigns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum EMsg {
    ClientRequestWebAPIAuthenticateUserNonce = 5585,
    ClientRequestWebAPIAuthenticateUserNonceResponse = 5586,
}

/// Result codes carried by protocol responses. Only the handful the
/// handshake can actually observe are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EResult {
    Ok = 1,
    Fail = 2,
    NoConnection = 3,
    Busy = 10,
    ServiceUnavailable = 20,
    LimitExceeded = 25,
    RateLimitExceeded = 84,
}

impl EResult {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for EResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(EMsg::ClientRequestWebAPIAuthenticateUserNonce as u32, 5585);
        assert_eq!(
            EMsg::ClientRequestWebAPIAuthenticateUserNonceResponse as u32,
            5586
        );
        assert_eq!(EResult::Ok.code(), 1);
        assert_eq!(EResult::RateLimitExceeded.to_string(), "84");
    }
}
