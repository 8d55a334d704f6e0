
use crate::{AuctionRegistry, AuctionRegistryClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger, StellarAssetContract},
    token, Address, Env, String, Symbol, TryFromVal, Val, Vec,
};

/// One whole token in the asset's smallest unit (7 decimals).
pub const UNIT: i128 = 10_000_000;
pub const HOUR: u64 = 3600;
pub const GENESIS: u64 = 1_700_000_000;
pub const ITEM_URL: &str = "https://solsea.io/n/EJdViVXjKsVRXBJA8oT6WqoC5zvZ8yLzouDZ2RuSJv6F/";

pub struct TestSetup {
    pub env: Env,
    pub client: AuctionRegistryClient<'static>,
    pub owner: Address,
    pub seller: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
    pub asset: StellarAssetContract,
}

pub fn setup_test() -> TestSetup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(GENESIS);

    let contract_id = env.register(AuctionRegistry, ());
    let client = AuctionRegistryClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let seller = Address::generate(&env);

    let issuer = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(issuer);
    let token_address = asset.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    client.initialize(&owner, &token_address);

    TestSetup {
        env,
        client,
        owner,
        seller,
        token,
        token_admin,
        asset,
    }
}

impl TestSetup {
    pub fn id(&self, raw: &str) -> String {
        String::from_str(&self.env, raw)
    }

    pub fn url(&self) -> String {
        String::from_str(&self.env, ITEM_URL)
    }

    /// Generates a bidder holding `balance` tokens.
    pub fn funded_bidder(&self, balance: i128) -> Address {
        let bidder = Address::generate(&self.env);
        if balance > 0 {
            self.token_admin.mint(&bidder, &balance);
        }
        bidder
    }

    /// Lists `raw_id` with a window opening in one hour and closing in two.
    pub fn create_default(&self, raw_id: &str) -> String {
        let id = self.id(raw_id);
        let now = self.env.ledger().timestamp();
        self.client.create(
            &self.owner,
            &id,
            &UNIT,
            &self.seller,
            &self.url(),
            &(now + HOUR),
            &(now + 2 * HOUR),
        );
        id
    }

    /// Creates, opens and bids so that `winner` leads with `winning_bid`,
    /// then closes bidding.
    pub fn closed_auction(&self, raw_id: &str, winner: &Address, winning_bid: i128) -> String {
        let id = self.create_default(raw_id);
        advance_ledger(&self.env, HOUR + 1);
        self.client.open_bidding(&id);
        self.client.bid(&id, winner, &winning_bid);
        advance_ledger(&self.env, HOUR);
        self.client.close_bidding(&id);
        id
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

/// Latest event named `name` published by `contract_id`, as (topics, data).
pub fn find_event(env: &Env, contract_id: &Address, name: &str) -> Option<(Vec<Val>, Val)> {
    let wanted = Symbol::new(env, name);
    let mut found = None;
    for (source, topics, data) in env.events().all().iter() {
        if source != *contract_id {
            continue;
        }
        let is_match = topics
            .get(0)
            .and_then(|topic| Symbol::try_from_val(env, &topic).ok())
            .map(|topic| topic == wanted)
            .unwrap_or(false);
        if is_match {
            found = Some((topics, data));
        }
    }
    found
}
