use crate::errors::Error;
use crate::storage;
use soroban_sdk::{log, token, Address, Env, String};

fn move_tokens(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let token_client = token::Client::new(env, asset);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Pulls `amount` from the winner into the contract and credits it to this
/// auction's escrow.
pub fn lock_funds(
    env: &Env,
    asset: &Address,
    auction_id: &String,
    winner: &Address,
    amount: i128,
) -> Result<(), Error> {
    move_tokens(env, asset, winner, &env.current_contract_address(), amount)?;

    let held = storage::get_escrowed_funds(env, auction_id);
    storage::set_escrowed_funds(env, auction_id, held + amount);
    log!(env, "escrow locked {} for auction {}", amount, auction_id.clone());
    Ok(())
}

/// Pays everything held for `auction_id` to the seller. The escrow entry is
/// cleared only after the token transfer succeeds.
pub fn release_funds(
    env: &Env,
    asset: &Address,
    auction_id: &String,
    seller: &Address,
) -> Result<i128, Error> {
    let held = storage::get_escrowed_funds(env, auction_id);
    if held <= 0 {
        return Err(Error::FundsNotAvailable);
    }

    move_tokens(env, asset, &env.current_contract_address(), seller, held)?;

    storage::remove_escrowed_funds(env, auction_id);
    log!(env, "escrow released {} for auction {}", held, auction_id.clone());
    Ok(held)
}
