use soroban_sdk::{contractclient, Address, Env};

/// The one capability the ledger needs from the reward token.
///
/// The ledger always passes its own contract address as `caller`, so a mint
/// only goes through while the ledger holds the token's minter role. A failed
/// mint aborts the whole invocation that triggered it.
#[contractclient(name = "RewardMinterClient")]
pub trait RewardMinter {
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
}
