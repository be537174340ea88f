#![cfg(test)]

use super::*;
use crate::events::{MintEvent, MinterTransferredEvent};
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, Symbol, TryFromVal, Val,
};

fn create_token<'a>(e: &Env, minter: &Address) -> RewardTokenClient<'a> {
    RewardTokenClient::new(e, &e.register(RewardToken, (minter.clone(),)))
}

fn last_event<T: TryFromVal<Env, Val>>(e: &Env, token: &Address, name: &str) -> Option<T> {
    let topics: soroban_sdk::Vec<Val> = vec![e, Symbol::new(e, name).into_val(e)];
    let mut found = None;
    for (id, event_topics, data) in e.events().all().iter() {
        if id == *token && event_topics == topics {
            found = Some(data);
        }
    }
    found.map(|data| T::try_from_val(e, &data).unwrap_or_else(|_| panic!("bad {} payload", name)))
}

#[test]
fn test_deploy() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let token = create_token(&env, &deployer);

    assert_eq!(token.minter(), deployer);
    assert_eq!(token.total_supply(), 0);
    assert_eq!(token.name(), String::from_str(&env, "Crowdfund Reward"));
    assert_eq!(token.symbol(), String::from_str(&env, "CFRE"));
    assert_eq!(token.decimals(), 7);
}

#[test]
fn test_minter_can_mint() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    token.mint(&deployer, &holder, &1000);

    assert_eq!(token.balance(&holder), 1000);
    assert_eq!(token.total_supply(), 1000);
}

#[test]
fn test_non_minter_cannot_mint() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    assert_eq!(
        token.try_mint(&holder, &holder, &1000),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(token.balance(&holder), 0);
    assert_eq!(token.total_supply(), 0);
}

#[test]
fn test_zero_mint_is_noop() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    token.mint(&deployer, &holder, &0);

    assert_eq!(token.balance(&holder), 0);
    assert_eq!(token.total_supply(), 0);
}

#[test]
fn test_negative_mint_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    token.mint(&deployer, &holder, &50);
    assert_eq!(
        token.try_mint(&deployer, &holder, &-10),
        Err(Ok(TokenError::InvalidAmount))
    );
    assert_eq!(token.balance(&holder), 50);
}

#[test]
fn test_mint_overflow_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    token.mint(&deployer, &holder, &i128::MAX);
    assert_eq!(
        token.try_mint(&deployer, &holder, &1),
        Err(Ok(TokenError::Overflow))
    );
    assert_eq!(token.total_supply(), i128::MAX);
}

#[test]
fn test_total_supply_tracks_all_balances() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let first = Address::generate(&env);
    let second = Address::generate(&env);
    let token = create_token(&env, &deployer);

    token.mint(&deployer, &first, &300);
    token.mint(&deployer, &second, &500);
    token.mint(&deployer, &first, &200);

    assert_eq!(token.balance(&first), 500);
    assert_eq!(token.balance(&second), 500);
    assert_eq!(
        token.total_supply(),
        token.balance(&first) + token.balance(&second)
    );
}

#[test]
fn test_transfer_minter() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let new_minter = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    token.transfer_minter(&deployer, &new_minter);
    assert_eq!(token.minter(), new_minter);

    // New minter can mint
    token.mint(&new_minter, &holder, &500);
    assert_eq!(token.balance(&holder), 500);

    // Old minter lost the role
    assert_eq!(
        token.try_mint(&deployer, &holder, &500),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        token.try_transfer_minter(&deployer, &deployer),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(token.balance(&holder), 500);
    assert_eq!(token.minter(), new_minter);
}

#[test]
fn test_non_minter_cannot_transfer_role() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let outsider = Address::generate(&env);
    let token = create_token(&env, &deployer);

    assert_eq!(
        token.try_transfer_minter(&outsider, &outsider),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(token.minter(), deployer);
}

#[test]
#[should_panic]
fn test_mint_requires_minter_auth() {
    let env = Env::default();

    let deployer = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    // No auths mocked
    token.mint(&deployer, &holder, &100);
}

#[test]
fn test_mint_and_handover_events() {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let new_minter = Address::generate(&env);
    let holder = Address::generate(&env);
    let token = create_token(&env, &deployer);

    token.mint(&deployer, &holder, &250);
    assert_eq!(
        last_event::<MintEvent>(&env, &token.address, "mint"),
        Some(MintEvent {
            to: holder.clone(),
            amount: 250,
        })
    );

    token.transfer_minter(&deployer, &new_minter);
    assert_eq!(
        last_event::<MinterTransferredEvent>(&env, &token.address, "minter_transferred"),
        Some(MinterTransferredEvent {
            previous_minter: deployer.clone(),
            new_minter: new_minter.clone(),
        })
    );
}
