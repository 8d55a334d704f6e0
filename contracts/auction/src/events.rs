//! Notifications published by the auction registry.
//!
//! Every event carries a `Symbol` naming it as the first topic and the key
//! consumers correlate on as the second topic.

use soroban_sdk::{contracttype, Address, Env, String, Symbol};

pub const OPEN_BIDDING: &str = "open_bidding";
pub const NEW_BID: &str = "new_bid";
pub const BIDDING_CLOSED: &str = "bidding_closed";
pub const AUCTION_COMPLETED: &str = "auction_completed";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpenBiddingEvent {
    pub auction_id: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewBidEvent {
    pub auction_id: String,
    pub amount: i128,
    pub bidder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BiddingClosedEvent {
    pub auction_id: String,
}

/// Fired on the winner's first accepted deposit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCompletedEvent {
    pub url: String,
    pub winner: Address,
}

pub fn emit_open_bidding(env: &Env, auction_id: String) {
    let event = OpenBiddingEvent {
        auction_id: auction_id.clone(),
    };
    env.events()
        .publish((Symbol::new(env, OPEN_BIDDING), auction_id), event);
}

pub fn emit_new_bid(env: &Env, auction_id: String, amount: i128, bidder: Address) {
    let event = NewBidEvent {
        auction_id: auction_id.clone(),
        amount,
        bidder,
    };
    env.events()
        .publish((Symbol::new(env, NEW_BID), auction_id), event);
}

pub fn emit_bidding_closed(env: &Env, auction_id: String) {
    let event = BiddingClosedEvent {
        auction_id: auction_id.clone(),
    };
    env.events()
        .publish((Symbol::new(env, BIDDING_CLOSED), auction_id), event);
}

pub fn emit_auction_completed(env: &Env, url: String, winner: Address) {
    let event = AuctionCompletedEvent {
        url,
        winner: winner.clone(),
    };
    env.events()
        .publish((Symbol::new(env, AUCTION_COMPLETED), winner), event);
}
