use soroban_sdk::{Address, Env, TryFromVal, Val};

use crate::storage_types::*;

impl Campaign {
    /// Contributions are accepted strictly before the deadline.
    pub fn is_open(&self, now: u64) -> bool {
        now < self.deadline
    }

    pub fn goal_met(&self) -> bool {
        self.total_raised >= self.goal
    }

    pub fn time_remaining(&self, now: u64) -> u64 {
        self.deadline.saturating_sub(now)
    }
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

pub fn read_reward_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::RewardToken)
        .ok_or(Error::NotInitialized)
}

pub fn read_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reserve the next sequential id. Ids start at 1 and are never reused.
pub fn next_campaign_id(env: &Env) -> Result<CampaignId, Error> {
    let id = campaign_count(env).checked_add(1).ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &id);
    extend_instance(env);
    Ok(id)
}

/// Read a persistent entry, extending its TTL whenever it is present.
fn read_persistent<V: TryFromVal<Env, Val>>(env: &Env, key: &PersistentKey) -> Option<V> {
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        extend_persistent(env, key);
    }
    value
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    read_persistent(env, &PersistentKey::Campaign(campaign_id)).ok_or(Error::NotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

pub fn read_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    read_persistent(env, &PersistentKey::Contribution(campaign_id, contributor.clone())).unwrap_or(0)
}

pub fn write_contribution(env: &Env, campaign_id: CampaignId, contributor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn read_backer_count(env: &Env, campaign_id: CampaignId) -> u32 {
    read_persistent(env, &PersistentKey::BackerCount(campaign_id)).unwrap_or(0)
}

pub fn increment_backer_count(env: &Env, campaign_id: CampaignId) {
    let key = PersistentKey::BackerCount(campaign_id);
    let count = read_backer_count(env, campaign_id).saturating_add(1);
    env.storage().persistent().set(&key, &count);
    extend_persistent(env, &key);
}
