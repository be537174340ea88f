use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Minter,
    TotalSupply,
    Balance(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    Unauthorized = 1,
    InvalidAmount = 2,
    Overflow = 3,
    NotInitialized = 4,
}

// Metadata
pub const TOKEN_NAME: &str = "Crowdfund Reward";
pub const TOKEN_SYMBOL: &str = "CFRE";
pub const TOKEN_DECIMALS: u32 = 7;

// Ledger TTLs (one ledger every ~5s, 17280 per day)
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 7;
pub const INSTANCE_TTL_EXTEND: u32 = DAY_IN_LEDGERS * 30;
pub const BALANCE_TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;
pub const BALANCE_TTL_EXTEND: u32 = DAY_IN_LEDGERS * 90;
