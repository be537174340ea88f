#![no_std]

mod events;
mod storage_types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};
use storage_types::*;

pub use storage_types::TokenError;

/// Fungible reward ledger with a single transferable minter role.
///
/// Balances only grow: the sole mutation is `mint`, and `total_supply`
/// always equals the sum of every balance.
#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    /// Deploy the token. `minter` is the deploying account and the only
    /// address allowed to mint until it hands the role over.
    pub fn __constructor(env: Env, minter: Address) {
        env.storage().instance().set(&DataKey::Minter, &minter);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        extend_instance(&env);
    }

    /// Credit `amount` new tokens to `to`.
    ///
    /// `caller` must be the current minter at the time of the call. A zero
    /// amount is accepted and changes nothing.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        caller.require_auth();
        require_minter(&env, &caller)?;

        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }

        let balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        let supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;

        write_balance(&env, &to, balance);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);
        extend_instance(&env);

        events::emit_mint(&env, events::MintEvent { to, amount });

        Ok(())
    }

    /// Hand the minter role to `new_minter`. The caller loses it immediately.
    pub fn transfer_minter(env: Env, caller: Address, new_minter: Address) -> Result<(), TokenError> {
        caller.require_auth();
        require_minter(&env, &caller)?;

        env.storage().instance().set(&DataKey::Minter, &new_minter);
        extend_instance(&env);

        log!(&env, "minter transferred", caller, new_minter);
        events::emit_minter_transferred(
            &env,
            events::MinterTransferredEvent {
                previous_minter: caller,
                new_minter,
            },
        );

        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn minter(env: Env) -> Address {
        read_minter(&env).unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        TOKEN_DECIMALS
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn read_minter(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Minter)
        .ok_or(TokenError::NotInitialized)
}

fn require_minter(env: &Env, caller: &Address) -> Result<(), TokenError> {
    if read_minter(env)? != *caller {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_TTL_THRESHOLD, BALANCE_TTL_EXTEND);
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_TTL_THRESHOLD, BALANCE_TTL_EXTEND);
}
