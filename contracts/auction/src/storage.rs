use crate::types::{
    Auction, Bid, Config, DataKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{Env, String, Vec};

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(env: &Env, auction_id: &String) -> Option<Auction> {
    let key = DataKey::Auction(auction_id.clone());
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        extend_persistent_ttl(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.auction_id.clone());
    env.storage().persistent().set(&key, auction);
    extend_persistent_ttl(env, &key);
}

pub fn has_auction(env: &Env, auction_id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Auction(auction_id.clone()))
}

// ============================================================================
// BID HISTORY STORAGE
// ============================================================================

pub fn get_bid_count(env: &Env, auction_id: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::BidCount(auction_id.clone()))
        .unwrap_or(0)
}

pub fn get_bid(env: &Env, auction_id: &String, index: u32) -> Option<Bid> {
    env.storage()
        .persistent()
        .get(&DataKey::Bid(auction_id.clone(), index))
}

/// Each bid gets its own entry so a bid never rewrites earlier ones.
pub fn add_bid_to_history(env: &Env, auction_id: &String, bid: &Bid) {
    let index = get_bid_count(env, auction_id);

    let bid_key = DataKey::Bid(auction_id.clone(), index);
    env.storage().persistent().set(&bid_key, bid);
    extend_persistent_ttl(env, &bid_key);

    let count_key = DataKey::BidCount(auction_id.clone());
    env.storage().persistent().set(&count_key, &(index + 1));
    extend_persistent_ttl(env, &count_key);
}

/// Bids `start..start + limit` in the order they were placed.
pub fn get_bid_history(env: &Env, auction_id: &String, start: u32, limit: u32) -> Vec<Bid> {
    let end = get_bid_count(env, auction_id).min(start.saturating_add(limit));
    let mut history = Vec::new(env);
    for index in start..end {
        if let Some(bid) = get_bid(env, auction_id, index) {
            history.push_back(bid);
        }
    }
    history
}

// ============================================================================
// ESCROW STORAGE
// ============================================================================

/// Escrow held for a single auction. Balances are never pooled across ids.
pub fn get_escrowed_funds(env: &Env, auction_id: &String) -> i128 {
    let key = DataKey::Escrow(auction_id.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_escrowed_funds(env: &Env, auction_id: &String, amount: i128) {
    let key = DataKey::Escrow(auction_id.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent_ttl(env, &key);
}

pub fn remove_escrowed_funds(env: &Env, auction_id: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::Escrow(auction_id.clone()));
}
