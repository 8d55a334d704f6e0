//! Guarded lifecycle transitions for a single [`Auction`].
//!
//! Nothing here touches storage or the ledger clock: callers pass `now`
//! explicitly and persist the record only when a transition returns `Ok`.

use crate::errors::Error;
use crate::types::{Auction, AuctionStatus};
use soroban_sdk::{Address, String};

impl Auction {
    pub fn new(
        auction_id: String,
        seller: Address,
        url: String,
        initial_price: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<Auction, Error> {
        if start_time >= end_time {
            return Err(Error::InvalidWindow);
        }
        if initial_price < 0 {
            return Err(Error::InvalidPrice);
        }

        Ok(Auction {
            auction_id,
            seller,
            url,
            initial_price,
            start_time,
            end_time,
            status: AuctionStatus::Created,
            highest_bid: 0,
            highest_bidder: None,
            funds_deposited: false,
            funds_disbursed: false,
        })
    }

    /// Created -> Active once `now` reaches the start time.
    pub fn open(&mut self, now: u64) -> Result<(), Error> {
        if self.status != AuctionStatus::Created || now < self.start_time {
            return Err(Error::AuctionNotStarted);
        }
        self.status = AuctionStatus::Active;
        Ok(())
    }

    /// Smallest amount a new bid has to exceed.
    pub fn bid_floor(&self) -> i128 {
        self.highest_bid.max(self.initial_price)
    }

    pub fn place_bid(&mut self, bidder: &Address, amount: i128) -> Result<(), Error> {
        if self.status != AuctionStatus::Active {
            return Err(Error::AuctionNotActive);
        }
        if amount <= self.bid_floor() {
            return Err(Error::BidTooSmall);
        }
        self.highest_bid = amount;
        self.highest_bidder = Some(bidder.clone());
        Ok(())
    }

    /// Active -> Closed once `now` reaches the end time. Fixes the winner.
    pub fn close(&mut self, now: u64) -> Result<(), Error> {
        if self.status != AuctionStatus::Active || now < self.end_time {
            return Err(Error::AuctionStillActive);
        }
        self.status = AuctionStatus::Closed;
        Ok(())
    }

    pub fn is_winner(&self, who: &Address) -> bool {
        self.highest_bidder.as_ref() == Some(who)
    }

    /// Validates a winner deposit offering up to `amount` and returns the
    /// amount to collect into escrow. Does not set `funds_deposited`.
    pub fn deposit_due(&self, bidder: &Address, amount: i128) -> Result<i128, Error> {
        if self.status != AuctionStatus::Closed {
            return Err(Error::AuctionNotClosed);
        }
        if !self.is_winner(bidder) {
            return Err(Error::UnauthorizedTransfer);
        }
        if self.funds_deposited {
            return Err(Error::AlreadyFunded);
        }
        if amount < self.highest_bid {
            return Err(Error::InsufficientFunds);
        }
        Ok(self.highest_bid)
    }

    /// Validates that escrow can be paid out to the seller.
    pub fn disbursement_due(&self) -> Result<(), Error> {
        if !self.funds_deposited {
            return Err(Error::FundsNotAvailable);
        }
        if self.funds_disbursed {
            return Err(Error::AlreadyDisbursed);
        }
        Ok(())
    }
}
