use soroban_sdk::contracterror;

/// Error codes for the auction registry contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Registry has not been initialized
    NotInitialized = 1,
    /// Registry has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not the registry owner
    Unauthorized = 3,
    /// No auction exists for the given id
    NotFound = 4,
    /// Auction id is already in use
    DuplicateAuction = 5,
    /// Start time is not strictly before end time
    InvalidWindow = 6,
    /// Initial price is negative
    InvalidPrice = 7,
    /// Auction is not in Created state or its start time has not been reached
    AuctionNotStarted = 8,
    /// Auction is not accepting bids
    AuctionNotActive = 9,
    /// Bid does not exceed the current floor
    BidTooSmall = 10,
    /// Auction is not Active or its end time has not been reached
    AuctionStillActive = 11,
    /// Auction has not been closed
    AuctionNotClosed = 12,
    /// Caller is not the winning bidder
    UnauthorizedTransfer = 13,
    /// Winner has already deposited
    AlreadyFunded = 14,
    /// Attached amount is below the winning bid
    InsufficientFunds = 15,
    /// Nothing has been deposited for this auction
    FundsNotAvailable = 16,
    /// Seller has already been paid
    AlreadyDisbursed = 17,
    /// Token transfer was rejected by the asset contract
    TransferFailed = 18,
}
