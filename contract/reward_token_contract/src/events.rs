use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MintEvent {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MinterTransferredEvent {
    pub previous_minter: Address,
    pub new_minter: Address,
}

pub fn emit_mint(env: &Env, event: MintEvent) {
    env.events().publish((Symbol::new(env, "mint"),), event);
}

pub fn emit_minter_transferred(env: &Env, event: MinterTransferredEvent) {
    env.events().publish((Symbol::new(env, "minter_transferred"),), event);
}
