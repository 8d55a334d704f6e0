#![no_std]

//! # Timed Auction Registry
//!
//! Soroban contract running single-item, timed, English-style auctions.
//! The registry owner lists an item for a seller with an initial price and a
//! bidding window. Anyone may open bidding once the window starts and close it
//! once the window ends. Bids are commitments only: no funds move until the
//! auction is closed, at which point the winning bidder deposits the winning
//! amount into a per-auction escrow. The owner then releases that escrow to
//! the seller.
//!
//! ```text
//! Created --open_bidding--> Active --close_bidding--> Closed
//!                           Active --bid--> Active
//! Closed --transfer (winner, once)--> escrow held
//! escrow held --fund_seller (owner, once)--> seller paid
//! ```
//!
//! Every entry point returns `Result<_, Error>`. A returned error rolls back
//! all writes made by the invocation, so no partial state is ever observable.

#[cfg(test)]
extern crate std;

mod admin;
mod auction;
mod errors;
mod escrow;
pub mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::{Auction, AuctionStatus, Bid, Config};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

#[contract]
pub struct AuctionRegistry;

fn load_auction(env: &Env, auction_id: &String) -> Result<Auction, Error> {
    storage::get_auction(env, auction_id).ok_or(Error::NotFound)
}

#[contractimpl]
impl AuctionRegistry {
    // ─── Initialization ──────────────────────────────────────────────────────

    /// Set the registry owner and the asset used for deposits and payouts.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If a configuration is already stored
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_config(&env, &Config { owner, token });
        Ok(())
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────────

    /// List a new auction. Owner only.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - `caller` is not the owner
    /// * `Error::DuplicateAuction` - `auction_id` was used before
    /// * `Error::InvalidWindow` - `start_time` is not before `end_time`
    /// * `Error::InvalidPrice` - `initial_price` is negative
    pub fn create(
        env: Env,
        caller: Address,
        auction_id: String,
        initial_price: i128,
        seller: Address,
        url: String,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        admin::require_owner(&env, &caller)?;

        if storage::has_auction(&env, &auction_id) {
            return Err(Error::DuplicateAuction);
        }

        let auction = Auction::new(
            auction_id.clone(),
            seller,
            url,
            initial_price,
            start_time,
            end_time,
        )?;

        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);
        log!(&env, "auction {} created", auction_id);
        Ok(())
    }

    /// Move a Created auction to Active once its start time is reached.
    pub fn open_bidding(env: Env, auction_id: String) -> Result<(), Error> {
        let mut auction = load_auction(&env, &auction_id)?;
        auction.open(env.ledger().timestamp())?;
        storage::save_auction(&env, &auction);

        events::emit_open_bidding(&env, auction_id);
        Ok(())
    }

    /// Place a bid. The amount must beat both the initial price and the
    /// current highest bid. Nothing is charged until the auction closes.
    pub fn bid(env: Env, auction_id: String, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = load_auction(&env, &auction_id)?;
        auction.place_bid(&bidder, amount)?;

        storage::add_bid_to_history(
            &env,
            &auction_id,
            &Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );
        storage::save_auction(&env, &auction);

        events::emit_new_bid(&env, auction_id, amount, bidder);
        Ok(())
    }

    /// Move an Active auction to Closed once its end time is reached. The
    /// highest bidder at this point is the winner.
    pub fn close_bidding(env: Env, auction_id: String) -> Result<(), Error> {
        let mut auction = load_auction(&env, &auction_id)?;
        auction.close(env.ledger().timestamp())?;
        storage::save_auction(&env, &auction);

        events::emit_bidding_closed(&env, auction_id);
        Ok(())
    }

    /// Winner deposit. `amount` is the most the winner is willing to attach;
    /// exactly the winning bid is moved into this auction's escrow.
    ///
    /// # Errors
    /// * `Error::AuctionNotClosed` - bidding has not been closed
    /// * `Error::UnauthorizedTransfer` - `bidder` is not the winner
    /// * `Error::AlreadyFunded` - the winner already deposited
    /// * `Error::InsufficientFunds` - `amount` is below the winning bid
    /// * `Error::TransferFailed` - the token contract rejected the transfer
    pub fn transfer(
        env: Env,
        auction_id: String,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let config = admin::load_config(&env)?;
        let mut auction = load_auction(&env, &auction_id)?;
        let due = auction.deposit_due(&bidder, amount)?;

        escrow::lock_funds(&env, &config.token, &auction_id, &bidder, due)?;

        auction.funds_deposited = true;
        storage::save_auction(&env, &auction);

        events::emit_auction_completed(&env, auction.url, bidder);
        Ok(())
    }

    /// Release a deposited escrow to the seller. Owner only.
    ///
    /// The disbursed flag is written after the payout succeeds; a failed
    /// payout leaves the escrow in place so the call can be retried.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - `caller` is not the owner
    /// * `Error::FundsNotAvailable` - the winner has not deposited
    /// * `Error::AlreadyDisbursed` - the seller was already paid
    /// * `Error::TransferFailed` - the token contract rejected the payout
    pub fn fund_seller(env: Env, caller: Address, auction_id: String) -> Result<(), Error> {
        let config = admin::require_owner(&env, &caller)?;

        let mut auction = load_auction(&env, &auction_id)?;
        auction.disbursement_due()?;

        let paid = escrow::release_funds(&env, &config.token, &auction_id, &auction.seller)?;

        auction.funds_disbursed = true;
        storage::save_auction(&env, &auction);
        log!(&env, "seller paid {} for auction {}", paid, auction_id);
        Ok(())
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    pub fn get_config(env: Env) -> Result<Config, Error> {
        admin::load_config(&env)
    }

    pub fn get_auction(env: Env, auction_id: String) -> Result<Auction, Error> {
        load_auction(&env, &auction_id)
    }

    pub fn get_highest_bid(env: Env, auction_id: String) -> Result<(Option<Address>, i128), Error> {
        let auction = load_auction(&env, &auction_id)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    /// Every accepted bid, oldest first.
    pub fn get_bid_history(env: Env, auction_id: String) -> Result<Vec<Bid>, Error> {
        if !storage::has_auction(&env, &auction_id) {
            return Err(Error::NotFound);
        }
        let count = storage::get_bid_count(&env, &auction_id);
        Ok(storage::get_bid_history(&env, &auction_id, 0, count))
    }

    /// One page of the bid history, for auctions with too many bids to read
    /// in a single call.
    pub fn get_bids(
        env: Env,
        auction_id: String,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Bid>, Error> {
        if !storage::has_auction(&env, &auction_id) {
            return Err(Error::NotFound);
        }
        Ok(storage::get_bid_history(&env, &auction_id, start, limit))
    }

    pub fn get_bid_count(env: Env, auction_id: String) -> Result<u32, Error> {
        if !storage::has_auction(&env, &auction_id) {
            return Err(Error::NotFound);
        }
        Ok(storage::get_bid_count(&env, &auction_id))
    }

    /// Amount currently held in escrow for one auction.
    pub fn get_escrow(env: Env, auction_id: String) -> Result<i128, Error> {
        if !storage::has_auction(&env, &auction_id) {
            return Err(Error::NotFound);
        }
        Ok(storage::get_escrowed_funds(&env, &auction_id))
    }
}

#[cfg(test)]
mod test;
