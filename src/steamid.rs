//! Minimal SteamID value type.
//!
//! A SteamID packs universe, account type, instance and account number
//! into 64 bits. The handshake only needs to know which kind of account
//! it is talking to and how to render the id for the web API, so that is
//! all this module implements.

use std::fmt;

/// Account type bits of a SteamID (bits 52..56).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Invalid,
    Individual,
    Multiseat,
    GameServer,
    AnonGameServer,
    Pending,
    ContentServer,
    Clan,
    Chat,
    AnonUser,
}

/// A 64-bit SteamID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SteamId(u64);

impl SteamId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Assemble a SteamID from its fields. Mostly useful for tests; real
    /// ids arrive fully formed from the network service.
    pub fn from_parts(universe: u8, account_type: AccountType, instance: u32, account_id: u32) -> Self {
        let type_bits = match account_type {
            AccountType::Invalid => 0u64,
            AccountType::Individual => 1,
            AccountType::Multiseat => 2,
            AccountType::GameServer => 3,
            AccountType::AnonGameServer => 4,
            AccountType::Pending => 5,
            AccountType::ContentServer => 6,
            AccountType::Clan => 7,
            AccountType::Chat => 8,
            AccountType::AnonUser => 10,
        };
        Self(
            (universe as u64) << 56
                | type_bits << 52
                | (instance as u64 & 0xFFFFF) << 32
                | account_id as u64,
        )
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn account_type(&self) -> AccountType {
        match (self.0 >> 52) & 0xF {
            1 => AccountType::Individual,
            2 => AccountType::Multiseat,
            3 => AccountType::GameServer,
            4 => AccountType::AnonGameServer,
            5 => AccountType::Pending,
            6 => AccountType::ContentServer,
            7 => AccountType::Clan,
            8 => AccountType::Chat,
            10 => AccountType::AnonUser,
            _ => AccountType::Invalid,
        }
    }

    /// Whether this id belongs to an individual (human) account. Anonymous
    /// logons get `AnonUser` ids and cannot obtain web sessions.
    pub fn is_individual(&self) -> bool {
        self.account_type() == AccountType::Individual
    }
}

impl fmt::Display for SteamId {
    /// Renders the decimal steamID64 form, e.g. `76561197960287930`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_extraction() {
        let individual = SteamId::from_parts(1, AccountType::Individual, 1, 22202);
        assert_eq!(individual.account_type(), AccountType::Individual);
        assert!(individual.is_individual());

        let anon = SteamId::from_parts(1, AccountType::AnonUser, 1, 12345);
        assert_eq!(anon.account_type(), AccountType::AnonUser);
        assert!(!anon.is_individual());

        let clan = SteamId::from_parts(1, AccountType::Clan, 0, 4);
        assert_eq!(clan.account_type(), AccountType::Clan);
    }

    #[test]
    fn test_display_is_steamid64() {
        // Well-known test id: universe 1, individual, instance 1, account 22202
        let id = SteamId::from_parts(1, AccountType::Individual, 1, 22202);
        assert_eq!(id.to_string(), "76561197960287930");
        assert_eq!(SteamId::new(id.raw()), id);
    }
}
