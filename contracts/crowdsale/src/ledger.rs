use soroban_sdk::{contractclient, token, Address, Env};

use crate::errors::Error;

// Interface the sale needs from the issued token. The sale contract must be
// the ledger's admin for `mint` to pass its auth check.
#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedger {
    fn mint(env: Env, to: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
    fn total_supply(env: Env) -> i128;
}

pub fn mint(env: &Env, ledger: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    match TokenLedgerClient::new(env, ledger).try_mint(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::MintFailed),
    }
}

/// Moves a contribution straight from the purchaser to the sale wallet.
pub fn forward_funds(
    env: &Env,
    payment_token: &Address,
    from: &Address,
    wallet: &Address,
    amount: i128,
) -> Result<(), Error> {
    match token::Client::new(env, payment_token).try_transfer(from, wallet, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::ForwardFailed),
    }
}
