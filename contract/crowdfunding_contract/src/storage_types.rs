use soroban_sdk::{contracterror, contracttype, Address, String};

pub type CampaignId = u64;

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    RewardToken,
    PaymentToken,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
    BackerCount(CampaignId),
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub goal: i128,
    pub deadline: u64,        // Contributions close at this timestamp
    pub total_raised: i128,   // Never reset, including after withdrawal
    pub creator: Address,
    pub finalized: bool,
    pub withdrawn: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    InvalidInput = 2,
    NotFound = 3,
    CampaignEnded = 4,
    DeadlineNotReached = 5,
    GoalNotReached = 6,
    AlreadyWithdrawn = 7,
    Overflow = 8,
    NotInitialized = 9,
}

// Reward token units minted per unit of value contributed
pub const REWARD_RATE: i128 = 100;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 7;
pub const INSTANCE_TTL_EXTEND: u32 = DAY_IN_LEDGERS * 30;
pub const PERSISTENT_TTL_THRESHOLD: u32 = DAY_IN_LEDGERS * 30;
pub const PERSISTENT_TTL_EXTEND: u32 = DAY_IN_LEDGERS * 90;
