#![no_std]

//! Campaign funding ledger.
//!
//! Creators open campaigns with a goal and a duration. Contributors pay in
//! the payment token while a campaign is open and receive reward tokens at
//! [`REWARD_RATE`] per unit. Once the raised total meets the goal the creator
//! may withdraw it, exactly once. Finalizing a campaign only flags it as
//! closed and never moves funds.

mod campaign;
mod events;
mod reward;
mod storage_types;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

use campaign::*;
use storage_types::DataKey;

pub use reward::{RewardMinter, RewardMinterClient};
pub use storage_types::{Campaign, CampaignId, Error, REWARD_RATE};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Bind the ledger to its reward token and the asset contributions are paid in.
    ///
    /// The reward token's minter role must be handed to this contract before
    /// the first contribution can succeed.
    pub fn __constructor(env: Env, reward_token: Address, payment_token: Address) {
        env.storage().instance().set(&DataKey::RewardToken, &reward_token);
        env.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::CampaignCount, &0u64);
        extend_instance(&env);
    }

    /// Open a new campaign that accepts contributions for `duration` seconds.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        goal: i128,
        duration: u64,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();

        if goal < 0 {
            return Err(Error::InvalidInput);
        }

        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(duration)
            .ok_or(Error::Overflow)?;
        let campaign_id = next_campaign_id(&env)?;

        let campaign = Campaign {
            id: campaign_id,
            title: title.clone(),
            goal,
            deadline,
            total_raised: 0,
            creator: creator.clone(),
            finalized: false,
            withdrawn: false,
        };
        save_campaign(&env, &campaign);

        log!(&env, "campaign created", campaign_id, deadline);
        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                creator,
                title,
                goal,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Pay `amount` into an open campaign and mint the contributor's reward.
    pub fn contribute(
        env: Env,
        contributor: Address,
        campaign_id: CampaignId,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidInput);
        }

        let mut campaign = load_campaign(&env, campaign_id)?;
        if !campaign.is_open(env.ledger().timestamp()) {
            return Err(Error::CampaignEnded);
        }

        let reward = amount.checked_mul(REWARD_RATE).ok_or(Error::Overflow)?;
        let previous = read_contribution(&env, campaign_id, &contributor);
        let contributed = previous.checked_add(amount).ok_or(Error::Overflow)?;
        campaign.total_raised = campaign
            .total_raised
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        let payment = token::Client::new(&env, &read_payment_token(&env)?);
        payment.transfer(&contributor, &env.current_contract_address(), &amount);

        save_campaign(&env, &campaign);
        write_contribution(&env, campaign_id, &contributor, contributed);
        if previous == 0 {
            increment_backer_count(&env, campaign_id);
        }

        // Panics if the ledger is not the minter, rolling back everything above
        let minter = RewardMinterClient::new(&env, &read_reward_token(&env)?);
        minter.mint(&env.current_contract_address(), &contributor, &reward);

        log!(&env, "contribution recorded", campaign_id, amount, campaign.total_raised);
        events::emit_contribution_made(
            &env,
            events::ContributionMadeEvent {
                campaign_id,
                contributor,
                amount,
            },
        );

        Ok(())
    }

    /// Mark a campaign whose deadline has passed as finalized. Anyone may
    /// call this, and calling it again changes nothing.
    pub fn finalize_campaign(env: Env, campaign_id: CampaignId) -> Result<(), Error> {
        let mut campaign = load_campaign(&env, campaign_id)?;

        if campaign.is_open(env.ledger().timestamp()) {
            return Err(Error::DeadlineNotReached);
        }

        campaign.finalized = true;
        save_campaign(&env, &campaign);

        log!(&env, "campaign finalized", campaign_id);
        events::emit_campaign_finalized(
            &env,
            events::CampaignFinalizedEvent {
                campaign_id,
                total_raised: campaign.total_raised,
            },
        );

        Ok(())
    }

    /// Pay the full raised total to the creator once the goal is met.
    ///
    /// Neither the deadline nor the finalized flag gate this; only the goal
    /// and the one-shot `withdrawn` flag do. Returns the amount paid out.
    pub fn withdraw_funds(env: Env, caller: Address, campaign_id: CampaignId) -> Result<i128, Error> {
        caller.require_auth();

        let mut campaign = load_campaign(&env, campaign_id)?;
        if caller != campaign.creator {
            return Err(Error::Unauthorized);
        }
        if !campaign.goal_met() {
            return Err(Error::GoalNotReached);
        }
        if campaign.withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }

        campaign.withdrawn = true;
        save_campaign(&env, &campaign);

        let amount = campaign.total_raised;
        let payment = token::Client::new(&env, &read_payment_token(&env)?);
        payment.transfer(&env.current_contract_address(), &campaign.creator, &amount);

        log!(&env, "funds withdrawn", campaign_id, amount);
        events::emit_funds_withdrawn(
            &env,
            events::FundsWithdrawnEvent {
                campaign_id,
                creator: campaign.creator,
                amount,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn campaign_count(env: Env) -> u64 {
        campaign_count(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        load_campaign(&env, campaign_id)
    }

    pub fn contribution(env: Env, campaign_id: CampaignId, contributor: Address) -> i128 {
        read_contribution(&env, campaign_id, &contributor)
    }

    /// Number of distinct accounts that have contributed to a campaign.
    pub fn backer_count(env: Env, campaign_id: CampaignId) -> Result<u32, Error> {
        load_campaign(&env, campaign_id)?;
        Ok(read_backer_count(&env, campaign_id))
    }

    pub fn is_open(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        let campaign = load_campaign(&env, campaign_id)?;
        Ok(campaign.is_open(env.ledger().timestamp()))
    }

    pub fn goal_met(env: Env, campaign_id: CampaignId) -> Result<bool, Error> {
        Ok(load_campaign(&env, campaign_id)?.goal_met())
    }

    /// Seconds left before contributions close, zero once the deadline is reached.
    pub fn time_remaining(env: Env, campaign_id: CampaignId) -> Result<u64, Error> {
        let campaign = load_campaign(&env, campaign_id)?;
        Ok(campaign.time_remaining(env.ledger().timestamp()))
    }

    pub fn reward_token(env: Env) -> Result<Address, Error> {
        read_reward_token(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        read_payment_token(&env)
    }
}
