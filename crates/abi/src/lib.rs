pub mod hybrid;
pub mod ownership;
pub mod premium;

pub use hybrid::IHybridDutchAuction;
pub use ownership::IOwnershipToken;
pub use premium::IPremiumAuctionBetting;
